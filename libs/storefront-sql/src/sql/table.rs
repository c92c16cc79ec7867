// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::expression_builder::ExpressionBuilder;
use super::join::LeftJoin;
use super::physical_table::PhysicalTable;
use super::sql_builder::SqlBuilder;

/// A table-like concept that can be used in place of `SELECT FROM <table-query> ...`.
#[derive(Debug)]
pub enum Table {
    /// A physical table such as `reviews`.
    Physical(PhysicalTable),
    /// A join between two tables such as
    /// `reviews LEFT JOIN users ON reviews.user_id = users.id`.
    Join(LeftJoin),
}

impl ExpressionBuilder for Table {
    fn build(&self, builder: &mut SqlBuilder) {
        match self {
            Table::Physical(physical_table) => physical_table.build(builder),
            Table::Join(join) => join.build(builder),
        }
    }
}
