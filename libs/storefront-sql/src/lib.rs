// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! SQL building and execution primitives for the storefront stores.
//!
//! The core idea is the [ExpressionBuilder] trait: each statement type
//! ([Select], [Insert], [Update], [Delete]) knows how to render itself into a
//! [SqlBuilder], which accumulates the SQL text and the bound parameters in
//! one pass. Statements are built from a small set of building blocks
//! ([PhysicalTable], [PhysicalColumn], [ConcretePredicate], [LeftJoin],
//! [Limit], [Offset]) and executed through a pooled [DatabaseClient].

#[macro_use]
mod sql;

pub mod database_error;

pub use sql::{
    SqlBuilder,
    column::Column,
    connect::{database_client::DatabaseClient, database_pool::DatabasePool},
    delete::Delete,
    expression_builder::ExpressionBuilder,
    insert::Insert,
    join::LeftJoin,
    limit::Limit,
    offset::Offset,
    physical_column::PhysicalColumn,
    physical_table::PhysicalTable,
    predicate::ConcretePredicate,
    select::Select,
    sql_param::{SqlParam, SqlParamContainer, bind_params},
    table::Table,
    update::Update,
};
