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

/// A column of a physical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalColumn {
    pub table_name: &'static str,
    pub name: &'static str,
}

impl ExpressionBuilder for PhysicalColumn {
    /// Build the column as `<table>.<column>` (or just `<column>` when the
    /// builder is in unqualified mode).
    fn build(&self, builder: &mut SqlBuilder) {
        builder.push_column(self.table_name, self.name);
    }
}
