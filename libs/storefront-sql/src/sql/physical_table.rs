// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::expression_builder::ExpressionBuilder;
use super::sql_builder::SqlBuilder;

/// A physical table such as `reviews`. The schema is fixed, so table names
/// are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalTable {
    pub name: &'static str,
}

impl ExpressionBuilder for PhysicalTable {
    /// Build the table name into a quoted identifier.
    fn build(&self, builder: &mut SqlBuilder) {
        builder.push_identifier(self.name);
    }
}
