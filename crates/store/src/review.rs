// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use tokio_postgres::Row;

use storefront_model::{
    Entity, JoinPlan, ProductDto, ReviewDto, SelectedFields, UserDto,
    selection::relations_to_join,
};
use storefront_sql::{
    Column, ConcretePredicate, DatabaseClient, LeftJoin, Limit, Offset, PhysicalColumn,
    PhysicalTable, Select, SqlParamContainer, Table,
};

use crate::error::StoreError;
use crate::mapping::{EntityMapping, PRODUCTS, REVIEWS, USERS, provided, row_value};
use crate::repository::PgRepository;

pub struct ReviewMapping;

impl EntityMapping for ReviewMapping {
    type Dto = ReviewDto;

    const ENTITY: Entity = Entity::Review;
    const TABLE: PhysicalTable = REVIEWS;
    const COLUMNS: &'static [&'static str] = &["id", "content", "user_id", "product_id"];

    fn hydrate_field(
        dto: &mut ReviewDto,
        field: &str,
        row: &Row,
        index: usize,
    ) -> Result<(), StoreError> {
        match field {
            "id" => dto.id = Some(row_value(row, index)?),
            "content" => dto.content = Some(row_value(row, index)?),
            "user_id" => dto.user_id = row_value(row, index)?,
            "product_id" => dto.product_id = row_value(row, index)?,
            _ => {
                return Err(StoreError::MalformedSelection(format!(
                    "unknown column '{field}' for entity 'review'"
                )));
            }
        }
        Ok(())
    }

    fn present_fields(dto: &ReviewDto) -> Vec<(&'static str, SqlParamContainer)> {
        let mut fields = vec![];
        if let Some(content) = provided(&dto.content) {
            fields.push(("content", SqlParamContainer::string(content.clone())));
        }
        if let Some(user_id) = dto.user_id {
            fields.push(("user_id", SqlParamContainer::i32(user_id)));
        }
        if let Some(product_id) = dto.product_id {
            fields.push(("product_id", SqlParamContainer::i32(product_id)));
        }
        fields
    }

    fn set_id(dto: &mut ReviewDto, id: i32) {
        dto.id = Some(id);
    }
}

enum ReviewFilter {
    ById(i32),
    List {
        user_id: Option<i32>,
        product_id: Option<i32>,
        offset: i64,
        limit: i64,
    },
}

/// Store for reviews. Unlike the other stores, reads go through an aggregated
/// query that LEFT JOINs the author and the product when the selection asks
/// for them, so a page of reviews with relations costs one statement instead
/// of one per row.
pub struct ReviewStore {
    base: PgRepository<ReviewMapping>,
}

impl ReviewStore {
    pub fn new(client: Arc<DatabaseClient>) -> Self {
        Self {
            base: PgRepository::new(client),
        }
    }

    /// Point read. A missing review is a `None` result here, not an error;
    /// the GraphQL layer serves it as `null` without an error entry.
    pub async fn get(
        &self,
        id: i32,
        fields: &[SelectedFields],
    ) -> Result<Option<ReviewDto>, StoreError> {
        let plan = relations_to_join(fields);
        let select = Self::aggregated_select(plan, &ReviewFilter::ById(id));
        let rows = self.base.query(&select).await?;

        rows.first().map(|row| Self::hydrate(row, plan)).transpose()
    }

    pub async fn get_list(
        &self,
        fields: &[SelectedFields],
        offset: i64,
        limit: i64,
        user_id: Option<i32>,
        product_id: Option<i32>,
    ) -> Result<Vec<ReviewDto>, StoreError> {
        let plan = relations_to_join(fields);
        let filter = ReviewFilter::List {
            user_id,
            product_id,
            offset,
            limit,
        };
        let select = Self::aggregated_select(plan, &filter);
        let rows = self.base.query(&select).await?;

        rows.iter().map(|row| Self::hydrate(row, plan)).collect()
    }

    pub async fn add(&self, dto: ReviewDto) -> Result<ReviewDto, StoreError> {
        self.base.add(dto).await
    }

    pub async fn update(&self, id: i32, dto: ReviewDto) -> Result<ReviewDto, StoreError> {
        self.base.update(id, dto).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        self.base.delete(id).await
    }

    fn column(table: PhysicalTable, name: &'static str) -> Column {
        Column::Physical(PhysicalColumn {
            table_name: table.name,
            name,
        })
    }

    /// Build the aggregated statement. The review's own columns always come
    /// first, then the joined author columns, then the joined product columns,
    /// so hydration can address the row positionally.
    ///
    /// An id-filtered read matches at most one row and carries no pagination.
    fn aggregated_select(plan: JoinPlan, filter: &ReviewFilter) -> Select {
        let mut columns = vec![
            Self::column(REVIEWS, "id"),
            Self::column(REVIEWS, "content"),
            Self::column(REVIEWS, "user_id"),
            Self::column(REVIEWS, "product_id"),
        ];

        let mut table = Table::Physical(REVIEWS);
        if plan.user {
            columns.push(Self::column(USERS, "id"));
            columns.push(Self::column(USERS, "username"));
            table = Table::Join(LeftJoin::new(
                table,
                USERS,
                ConcretePredicate::Eq(
                    Self::column(REVIEWS, "user_id"),
                    Self::column(USERS, "id"),
                ),
            ));
        }
        if plan.product {
            columns.push(Self::column(PRODUCTS, "id"));
            columns.push(Self::column(PRODUCTS, "title"));
            columns.push(Self::column(PRODUCTS, "description"));
            table = Table::Join(LeftJoin::new(
                table,
                PRODUCTS,
                ConcretePredicate::Eq(
                    Self::column(REVIEWS, "product_id"),
                    Self::column(PRODUCTS, "id"),
                ),
            ));
        }

        match filter {
            ReviewFilter::ById(id) => Select {
                table,
                columns,
                predicate: ConcretePredicate::Eq(
                    Self::column(REVIEWS, "id"),
                    Column::Param(SqlParamContainer::i32(*id)),
                ),
                offset: None,
                limit: None,
            },
            ReviewFilter::List {
                user_id,
                product_id,
                offset,
                limit,
            } => {
                // A user filter and a product filter never combine; the owner
                // filter wins when both are somehow present.
                let predicate = if let Some(user_id) = user_id {
                    ConcretePredicate::Eq(
                        Self::column(REVIEWS, "user_id"),
                        Column::Param(SqlParamContainer::i32(*user_id)),
                    )
                } else if let Some(product_id) = product_id {
                    ConcretePredicate::Eq(
                        Self::column(REVIEWS, "product_id"),
                        Column::Param(SqlParamContainer::i32(*product_id)),
                    )
                } else {
                    ConcretePredicate::True
                };

                Select {
                    table,
                    columns,
                    predicate,
                    offset: Some(Offset(*offset)),
                    limit: Some(Limit(*limit)),
                }
            }
        }
    }

    /// Hydrate one aggregated row. Joined columns are NULL when the LEFT JOIN
    /// found no partner row, in which case the relation slot stays `None`.
    fn hydrate(row: &Row, plan: JoinPlan) -> Result<ReviewDto, StoreError> {
        let mut dto = ReviewDto {
            id: Some(row_value(row, 0)?),
            content: Some(row_value(row, 1)?),
            user_id: row_value(row, 2)?,
            product_id: row_value(row, 3)?,
            ..Default::default()
        };

        let mut index = 4;
        if plan.user {
            let id: Option<i32> = row_value(row, index)?;
            if let Some(id) = id {
                dto.user = Some(UserDto {
                    id: Some(id),
                    username: row_value(row, index + 1)?,
                    reviews: None,
                });
            }
            index += 2;
        }
        if plan.product {
            let id: Option<i32> = row_value(row, index)?;
            if let Some(id) = id {
                dto.product = Some(ProductDto {
                    id: Some(id),
                    title: row_value(row, index + 1)?,
                    description: row_value(row, index + 2)?,
                    reviews: None,
                });
            }
        }

        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use storefront_sql::ExpressionBuilder;

    use super::*;

    fn sql_of(select: &Select) -> String {
        select.to_sql().0
    }

    #[test]
    fn plain_page_stays_join_free() {
        let select = ReviewStore::aggregated_select(
            JoinPlan::none(),
            &ReviewFilter::List {
                user_id: None,
                product_id: None,
                offset: 0,
                limit: 20,
            },
        );

        assert_eq!(
            sql_of(&select),
            r#"SELECT "reviews"."id", "reviews"."content", "reviews"."user_id", "reviews"."product_id" FROM "reviews" OFFSET $1 LIMIT $2"#
        );
    }

    #[test]
    fn requesting_both_relations_joins_both_in_one_statement() {
        let select = ReviewStore::aggregated_select(
            JoinPlan {
                user: true,
                product: true,
            },
            &ReviewFilter::List {
                user_id: None,
                product_id: None,
                offset: 0,
                limit: 20,
            },
        );

        let sql = sql_of(&select);
        assert!(sql.contains(
            r#"LEFT JOIN "users" ON "reviews"."user_id" = "users"."id""#
        ));
        assert!(sql.contains(
            r#"LEFT JOIN "products" ON "reviews"."product_id" = "products"."id""#
        ));
        assert_eq!(sql.matches("SELECT").count(), 1);
    }

    #[test]
    fn id_filter_skips_pagination() {
        let select = ReviewStore::aggregated_select(
            JoinPlan {
                user: true,
                product: false,
            },
            &ReviewFilter::ById(3),
        );

        let sql = sql_of(&select);
        assert!(sql.ends_with(r#"WHERE "reviews"."id" = $1"#));
        assert!(!sql.contains("OFFSET"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn user_filter_wins_over_product_filter() {
        let select = ReviewStore::aggregated_select(
            JoinPlan::none(),
            &ReviewFilter::List {
                user_id: Some(1),
                product_id: Some(2),
                offset: 0,
                limit: 20,
            },
        );

        let sql = sql_of(&select);
        assert!(sql.contains(r#"WHERE "reviews"."user_id" = $1"#));
        assert!(!sql.contains(r#""reviews"."product_id" = "#));
    }

    #[test]
    fn falsy_content_is_not_written() {
        let dto = ReviewDto {
            content: Some("".to_owned()),
            user_id: Some(1),
            product_id: None,
            ..Default::default()
        };

        let fields = ReviewMapping::present_fields(&dto);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "user_id");
    }
}
