// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Assert that an expression renders to the given SQL text and parameters.
/// Parameters are compared through their `Debug` representation, which is
/// sufficient for the scalar types bound by this crate.
#[cfg(test)]
macro_rules! assert_binding {
    ($actual:expr, $expected_sql:expr) => {{
        let (sql, params) = $actual;
        assert_eq!(sql, $expected_sql);
        assert!(params.is_empty(), "expected no parameters, got {params:?}");
    }};
    ($actual:expr, $expected_sql:expr, $($param:expr),+) => {{
        let (sql, params) = $actual;
        assert_eq!(sql, $expected_sql);
        let expected: Vec<String> = vec![$(format!("{:?}", $param)),+];
        let actual: Vec<String> = params.iter().map(|p| format!("{:?}", p)).collect();
        assert_eq!(actual, expected);
    }};
}

pub mod column;
pub mod connect;
pub mod delete;
pub mod expression_builder;
pub mod insert;
pub mod join;
pub mod limit;
pub mod offset;
pub mod physical_column;
pub mod physical_table;
pub mod predicate;
pub mod select;
pub mod sql_builder;
pub mod sql_param;
pub mod table;
pub mod update;

pub use sql_builder::SqlBuilder;
