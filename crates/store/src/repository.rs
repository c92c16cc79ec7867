// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio_postgres::Row;

use storefront_model::SelectedFields;
use storefront_sql::{
    Column, ConcretePredicate, DatabaseClient, Delete, ExpressionBuilder, Insert, Limit, Offset,
    PhysicalColumn, Select, SqlParamContainer, Table, Update, bind_params,
    database_error::DatabaseError,
};

use crate::error::StoreError;
use crate::mapping::EntityMapping;

/// Generic CRUD over one entity's table. Each logical operation is exactly
/// one round trip to the store.
pub struct PgRepository<M: EntityMapping> {
    pub(crate) client: Arc<DatabaseClient>,
    mapping: PhantomData<M>,
}

impl<M: EntityMapping> PgRepository<M> {
    pub fn new(client: Arc<DatabaseClient>) -> Self {
        Self {
            client,
            mapping: PhantomData,
        }
    }

    pub(crate) fn id_column() -> PhysicalColumn {
        PhysicalColumn {
            table_name: M::TABLE.name,
            name: "id",
        }
    }

    /// Resolve a requested field name against the entity's declared columns.
    pub(crate) fn column(field: &str) -> Result<PhysicalColumn, StoreError> {
        M::COLUMNS
            .iter()
            .find(|column| **column == field)
            .map(|name| PhysicalColumn {
                table_name: M::TABLE.name,
                name,
            })
            .ok_or_else(|| {
                StoreError::MalformedSelection(format!(
                    "unknown column '{field}' for entity '{}'",
                    M::ENTITY
                ))
            })
    }

    /// The column projection for the first descriptor in the list. The
    /// projection must be non-empty and a subset of the declared columns;
    /// both are checked before any query reaches the store.
    pub(crate) fn projection(
        fields: &[SelectedFields],
    ) -> Result<(Vec<&'static str>, Vec<Column>), StoreError> {
        let own = fields.first().ok_or_else(|| {
            StoreError::MalformedSelection(format!("no fields selected for entity '{}'", M::ENTITY))
        })?;

        if own.fields.is_empty() {
            return Err(StoreError::MalformedSelection(format!(
                "no scalar fields selected for entity '{}'",
                M::ENTITY
            )));
        }

        let mut names = Vec::with_capacity(own.fields.len());
        let mut columns = Vec::with_capacity(own.fields.len());
        for field in &own.fields {
            let column = Self::column(field)?;
            names.push(column.name);
            columns.push(Column::Physical(column));
        }

        Ok((names, columns))
    }

    pub(crate) fn select_query(
        fields: &[SelectedFields],
        id: Option<i32>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<(Vec<&'static str>, Select), StoreError> {
        let (names, columns) = Self::projection(fields)?;

        let predicate = match id {
            Some(id) => ConcretePredicate::Eq(
                Column::Physical(Self::id_column()),
                Column::Param(SqlParamContainer::i32(id)),
            ),
            None => ConcretePredicate::True,
        };

        let select = Select {
            table: Table::Physical(M::TABLE),
            columns,
            predicate,
            offset: offset.map(Offset),
            limit: limit.map(Limit),
        };

        Ok((names, select))
    }

    pub(crate) fn hydrate(row: &Row, names: &[&'static str]) -> Result<M::Dto, StoreError> {
        let mut dto = M::Dto::default();
        for (index, field) in names.iter().enumerate() {
            M::hydrate_field(&mut dto, field, row, index)?;
        }
        Ok(dto)
    }

    pub(crate) async fn query(
        &self,
        statement: &impl ExpressionBuilder,
    ) -> Result<Vec<Row>, StoreError> {
        let (sql, params) = statement.to_sql();
        tracing::debug!(%sql, "executing statement");

        self.client
            .query(&sql, &bind_params(&params))
            .await
            .map_err(|e| DatabaseError::Delegate(e).into())
    }

    pub async fn get(&self, id: i32, fields: &[SelectedFields]) -> Result<M::Dto, StoreError> {
        let (names, select) = Self::select_query(fields, Some(id), None, None)?;
        let rows = self.query(&select).await?;

        let row = rows.first().ok_or(StoreError::NotFound {
            entity: M::ENTITY,
            id,
        })?;
        Self::hydrate(row, &names)
    }

    pub async fn get_list(
        &self,
        fields: &[SelectedFields],
        offset: i64,
        limit: i64,
    ) -> Result<Vec<M::Dto>, StoreError> {
        let (names, select) = Self::select_query(fields, None, Some(offset), Some(limit))?;
        let rows = self.query(&select).await?;

        rows.iter().map(|row| Self::hydrate(row, &names)).collect()
    }

    pub(crate) fn insert_statement(dto: &M::Dto) -> Result<Insert, StoreError> {
        let values = M::present_fields(dto);
        if values.is_empty() {
            return Err(StoreError::MalformedSelection(format!(
                "no values to insert for entity '{}'",
                M::ENTITY
            )));
        }

        let (columns, params): (Vec<_>, Vec<_>) = values.into_iter().unzip();
        Ok(Insert {
            table: M::TABLE,
            columns: columns
                .into_iter()
                .map(|name| PhysicalColumn {
                    table_name: M::TABLE.name,
                    name,
                })
                .collect(),
            values: params.into_iter().map(Column::Param).collect(),
            returning: vec![Column::Physical(Self::id_column())],
        })
    }

    pub(crate) fn update_statement(id: i32, dto: &M::Dto) -> Result<Update, StoreError> {
        let values = M::present_fields(dto);
        if values.is_empty() {
            return Err(StoreError::MalformedSelection(format!(
                "no values to update for entity '{}'",
                M::ENTITY
            )));
        }

        Ok(Update {
            table: M::TABLE,
            predicate: ConcretePredicate::Eq(
                Column::Physical(Self::id_column()),
                Column::Param(SqlParamContainer::i32(id)),
            ),
            column_values: values
                .into_iter()
                .map(|(name, param)| {
                    (
                        PhysicalColumn {
                            table_name: M::TABLE.name,
                            name,
                        },
                        Column::Param(param),
                    )
                })
                .collect(),
            returning: M::COLUMNS
                .iter()
                .map(|name| {
                    Column::Physical(PhysicalColumn {
                        table_name: M::TABLE.name,
                        name,
                    })
                })
                .collect(),
        })
    }

    pub async fn add(&self, mut dto: M::Dto) -> Result<M::Dto, StoreError> {
        let insert = Self::insert_statement(&dto)?;
        let rows = self.query(&insert).await?;
        let row = rows.first().ok_or_else(|| {
            StoreError::Database(DatabaseError::Config(
                "INSERT did not return a row".to_owned(),
            ))
        })?;

        let id = crate::mapping::row_value(row, 0)?;
        M::set_id(&mut dto, id);
        Ok(dto)
    }

    pub async fn update(&self, id: i32, dto: M::Dto) -> Result<M::Dto, StoreError> {
        let update = Self::update_statement(id, &dto)?;
        let rows = self.query(&update).await?;
        let row = rows.first().ok_or(StoreError::NotFound {
            entity: M::ENTITY,
            id,
        })?;

        Self::hydrate(row, M::COLUMNS)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let delete = Delete {
            table: M::TABLE,
            predicate: ConcretePredicate::Eq(
                Column::Physical(Self::id_column()),
                Column::Param(SqlParamContainer::i32(id)),
            ),
            returning: vec![Column::Physical(Self::id_column())],
        };

        let rows = self.query(&delete).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound {
                entity: M::ENTITY,
                id,
            });
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use storefront_model::{Entity, RequestedField, UserDto, selection::selected_fields};

    use crate::user::UserMapping;

    use super::*;

    type UserRepository = PgRepository<UserMapping>;

    fn sql_of(select: &Select) -> String {
        select.to_sql().0
    }

    #[test]
    fn projects_only_the_requested_columns() {
        let fields = selected_fields(Entity::User, &[RequestedField::scalar("username")], false);
        let (_, select) = UserRepository::select_query(&fields, None, Some(0), Some(20)).unwrap();

        let sql = sql_of(&select);
        assert!(sql.starts_with(r#"SELECT "users"."username" FROM "users""#));
        assert!(!sql.contains(r#""users"."id","#));
    }

    #[test]
    fn point_query_filters_by_id() {
        let fields = selected_fields(
            Entity::User,
            &[RequestedField::scalar("id"), RequestedField::scalar("username")],
            false,
        );
        let (names, select) = UserRepository::select_query(&fields, Some(7), None, None).unwrap();

        assert_eq!(names, vec!["id", "username"]);
        assert_eq!(
            sql_of(&select),
            r#"SELECT "users"."id", "users"."username" FROM "users" WHERE "users"."id" = $1"#
        );
    }

    #[test]
    fn empty_projection_is_rejected_before_the_store() {
        let fields = selected_fields(Entity::User, &[], false);
        let result = UserRepository::select_query(&fields, None, None, None);

        assert!(matches!(result, Err(StoreError::MalformedSelection(_))));
    }

    #[test]
    fn unknown_column_is_rejected() {
        let fields = selected_fields(Entity::User, &[RequestedField::scalar("password")], false);
        let result = UserRepository::select_query(&fields, None, None, None);

        assert!(matches!(result, Err(StoreError::MalformedSelection(_))));
    }

    #[test]
    fn update_writes_present_fields_and_returns_the_full_row() {
        let dto = UserDto {
            username: Some("rust_fan".to_owned()),
            ..Default::default()
        };

        let update = UserRepository::update_statement(3, &dto).unwrap();

        assert_eq!(
            update.to_sql().0,
            r#"UPDATE "users" SET "username" = $1 WHERE "users"."id" = $2 RETURNING "users"."id", "users"."username""#
        );
    }

    #[test]
    fn update_with_no_provided_fields_is_rejected_before_the_store() {
        let dto = UserDto {
            id: Some(3),
            username: Some("".to_owned()),
            ..Default::default()
        };

        let result = UserRepository::update_statement(3, &dto);

        assert!(matches!(result, Err(StoreError::MalformedSelection(_))));
    }

    #[test]
    fn insert_with_no_provided_fields_is_rejected_before_the_store() {
        let result = UserRepository::insert_statement(&UserDto::default());

        assert!(matches!(result, Err(StoreError::MalformedSelection(_))));
    }

    #[test]
    fn nested_descriptors_do_not_leak_into_the_projection() {
        let selection = vec![
            RequestedField::scalar("username"),
            RequestedField::with_children("reviews", vec![RequestedField::scalar("content")]),
        ];
        let fields = selected_fields(Entity::User, &selection, false);
        let (_, select) = UserRepository::select_query(&fields, None, Some(0), Some(20)).unwrap();

        assert!(!sql_of(&select).contains("content"));
    }
}
