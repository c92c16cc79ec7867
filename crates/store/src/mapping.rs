// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tokio_postgres::Row;
use tokio_postgres::types::FromSql;

use storefront_model::Entity;
use storefront_sql::{PhysicalTable, SqlParamContainer, database_error::DatabaseError};

use crate::error::StoreError;

pub(crate) const USERS: PhysicalTable = PhysicalTable { name: "users" };
pub(crate) const PRODUCTS: PhysicalTable = PhysicalTable { name: "products" };
pub(crate) const REVIEWS: PhysicalTable = PhysicalTable { name: "reviews" };

/// Ties an entity's DTO to its physical table: which columns exist, how a row
/// hydrates the DTO, and which DTO fields become statement parameters.
/// Implemented once per entity; [PgRepository](crate::repository::PgRepository)
/// provides the CRUD operations on top.
pub trait EntityMapping {
    type Dto: Default + Send + Sync;

    const ENTITY: Entity;
    const TABLE: PhysicalTable;
    const COLUMNS: &'static [&'static str];

    /// Assign the value at `index` in `row` to the DTO slot named `field`.
    fn hydrate_field(
        dto: &mut Self::Dto,
        field: &str,
        row: &Row,
        index: usize,
    ) -> Result<(), StoreError>;

    /// Extract the DTO fields to be written by an INSERT or UPDATE.
    ///
    /// A field holding `None` or an empty string is treated as "not provided"
    /// and excluded, so a mutation cannot clear a text field to the empty
    /// string. `id` is never included.
    fn present_fields(dto: &Self::Dto) -> Vec<(&'static str, SqlParamContainer)>;

    /// Write the generated id back after an INSERT.
    fn set_id(dto: &mut Self::Dto, id: i32);
}

/// Read a single column value, converting driver errors.
pub(crate) fn row_value<'a, T: FromSql<'a>>(row: &'a Row, index: usize) -> Result<T, StoreError> {
    row.try_get(index)
        .map_err(|e| DatabaseError::Delegate(e).into())
}

/// Treat `None` and the empty string as "not provided".
pub(crate) fn provided(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}
