// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::expression_builder::ExpressionBuilder;
use super::physical_column::PhysicalColumn;
use super::sql_builder::SqlBuilder;
use super::sql_param::SqlParamContainer;

/// A column-like expression that can appear in a projection, a predicate, or
/// a value position.
#[derive(Debug, Clone)]
pub enum Column {
    /// A physical column such as `reviews.content`
    Physical(PhysicalColumn),
    /// A bound parameter
    Param(SqlParamContainer),
}

impl ExpressionBuilder for Column {
    fn build(&self, builder: &mut SqlBuilder) {
        match self {
            Column::Physical(column) => column.build(builder),
            Column::Param(param) => builder.push_param(param.param()),
        }
    }
}
