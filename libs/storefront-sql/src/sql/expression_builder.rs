// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use super::sql_builder::SqlBuilder;
use super::sql_param::SqlParam;

/// An element that knows how to render itself into a SQL fragment.
pub trait ExpressionBuilder {
    /// Render the expression into the given builder.
    fn build(&self, builder: &mut SqlBuilder);

    /// Render the expression into a fresh builder and return the SQL text
    /// along with the bound parameters.
    fn to_sql(&self) -> (String, Vec<Arc<dyn SqlParam>>) {
        let mut builder = SqlBuilder::new();
        self.build(&mut builder);
        builder.into_sql()
    }
}
