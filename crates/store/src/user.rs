// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tokio_postgres::Row;

use storefront_model::{Entity, SelectedFields, UserDto};
use storefront_sql::{
    Column, ConcretePredicate, LeftJoin, PhysicalColumn, PhysicalTable, Select, SqlParamContainer,
    Table,
};

use crate::error::StoreError;
use crate::mapping::{EntityMapping, REVIEWS, USERS, provided, row_value};
use crate::repository::PgRepository;

pub struct UserMapping;

impl EntityMapping for UserMapping {
    type Dto = UserDto;

    const ENTITY: Entity = Entity::User;
    const TABLE: PhysicalTable = USERS;
    const COLUMNS: &'static [&'static str] = &["id", "username"];

    fn hydrate_field(
        dto: &mut UserDto,
        field: &str,
        row: &Row,
        index: usize,
    ) -> Result<(), StoreError> {
        match field {
            "id" => dto.id = Some(row_value(row, index)?),
            "username" => dto.username = Some(row_value(row, index)?),
            _ => {
                return Err(StoreError::MalformedSelection(format!(
                    "unknown column '{field}' for entity 'user'"
                )));
            }
        }
        Ok(())
    }

    fn present_fields(dto: &UserDto) -> Vec<(&'static str, SqlParamContainer)> {
        let mut fields = vec![];
        if let Some(username) = provided(&dto.username) {
            fields.push(("username", SqlParamContainer::string(username.clone())));
        }
        fields
    }

    fn set_id(dto: &mut UserDto, id: i32) {
        dto.id = Some(id);
    }
}

pub type UserStore = PgRepository<UserMapping>;

impl UserStore {
    /// Fetch the author of a review through a join on the review row, so the
    /// foreign key never has to be read in a separate round trip.
    pub async fn get_by_review_id(
        &self,
        review_id: i32,
        fields: &[SelectedFields],
    ) -> Result<UserDto, StoreError> {
        let (names, select) = Self::review_join_query(review_id, fields)?;
        let rows = self.query(&select).await?;

        let row = rows.first().ok_or(StoreError::NotFound {
            entity: Entity::Review,
            id: review_id,
        })?;
        Self::hydrate(row, &names)
    }

    fn review_join_query(
        review_id: i32,
        fields: &[SelectedFields],
    ) -> Result<(Vec<&'static str>, Select), StoreError> {
        let (names, columns) = Self::projection(fields)?;

        let join = LeftJoin::new(
            Table::Physical(REVIEWS),
            USERS,
            ConcretePredicate::Eq(
                Column::Physical(PhysicalColumn {
                    table_name: REVIEWS.name,
                    name: "user_id",
                }),
                Column::Physical(PhysicalColumn {
                    table_name: USERS.name,
                    name: "id",
                }),
            ),
        );

        let select = Select {
            table: Table::Join(join),
            columns,
            predicate: ConcretePredicate::Eq(
                Column::Physical(PhysicalColumn {
                    table_name: REVIEWS.name,
                    name: "id",
                }),
                Column::Param(SqlParamContainer::i32(review_id)),
            ),
            offset: None,
            limit: None,
        };

        Ok((names, select))
    }
}

#[cfg(test)]
mod tests {
    use storefront_model::{RequestedField, selection::selected_fields};
    use storefront_sql::ExpressionBuilder;

    use super::*;

    #[test]
    fn review_join_resolves_the_author_in_one_statement() {
        let fields = selected_fields(
            Entity::User,
            &[RequestedField::scalar("id"), RequestedField::scalar("username")],
            false,
        );
        let (names, select) = UserStore::review_join_query(42, &fields).unwrap();

        assert_eq!(names, vec!["id", "username"]);
        assert_eq!(
            select.to_sql().0,
            r#"SELECT "users"."id", "users"."username" FROM "reviews" LEFT JOIN "users" ON "reviews"."user_id" = "users"."id" WHERE "reviews"."id" = $1"#
        );
    }

    #[test]
    fn empty_username_is_not_written() {
        let dto = UserDto {
            username: Some("".to_owned()),
            ..Default::default()
        };

        assert!(UserMapping::present_fields(&dto).is_empty());
    }
}
