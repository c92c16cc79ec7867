// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tokio_postgres::Row;

use storefront_model::{Entity, ProductDto, SelectedFields};
use storefront_sql::{
    Column, ConcretePredicate, LeftJoin, PhysicalColumn, PhysicalTable, Select, SqlParamContainer,
    Table,
};

use crate::error::StoreError;
use crate::mapping::{EntityMapping, PRODUCTS, REVIEWS, provided, row_value};
use crate::repository::PgRepository;

pub struct ProductMapping;

impl EntityMapping for ProductMapping {
    type Dto = ProductDto;

    const ENTITY: Entity = Entity::Product;
    const TABLE: PhysicalTable = PRODUCTS;
    const COLUMNS: &'static [&'static str] = &["id", "title", "description"];

    fn hydrate_field(
        dto: &mut ProductDto,
        field: &str,
        row: &Row,
        index: usize,
    ) -> Result<(), StoreError> {
        match field {
            "id" => dto.id = Some(row_value(row, index)?),
            "title" => dto.title = Some(row_value(row, index)?),
            "description" => dto.description = Some(row_value(row, index)?),
            _ => {
                return Err(StoreError::MalformedSelection(format!(
                    "unknown column '{field}' for entity 'product'"
                )));
            }
        }
        Ok(())
    }

    fn present_fields(dto: &ProductDto) -> Vec<(&'static str, SqlParamContainer)> {
        let mut fields = vec![];
        if let Some(title) = provided(&dto.title) {
            fields.push(("title", SqlParamContainer::string(title.clone())));
        }
        if let Some(description) = provided(&dto.description) {
            fields.push(("description", SqlParamContainer::string(description.clone())));
        }
        fields
    }

    fn set_id(dto: &mut ProductDto, id: i32) {
        dto.id = Some(id);
    }
}

pub type ProductStore = PgRepository<ProductMapping>;

impl ProductStore {
    /// Fetch the product a review is about through a join on the review row.
    pub async fn get_by_review_id(
        &self,
        review_id: i32,
        fields: &[SelectedFields],
    ) -> Result<ProductDto, StoreError> {
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
            PRODUCTS,
            ConcretePredicate::Eq(
                Column::Physical(PhysicalColumn {
                    table_name: REVIEWS.name,
                    name: "product_id",
                }),
                Column::Physical(PhysicalColumn {
                    table_name: PRODUCTS.name,
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
    fn review_join_resolves_the_product_in_one_statement() {
        let fields = selected_fields(Entity::Product, &[RequestedField::scalar("title")], false);
        let (_, select) = ProductStore::review_join_query(5, &fields).unwrap();

        assert_eq!(
            select.to_sql().0,
            r#"SELECT "products"."title" FROM "reviews" LEFT JOIN "products" ON "reviews"."product_id" = "products"."id" WHERE "reviews"."id" = $1"#
        );
    }

    #[test]
    fn absent_fields_are_not_written() {
        let dto = ProductDto {
            title: Some("Pinboard".to_owned()),
            description: None,
            ..Default::default()
        };

        let fields = ProductMapping::present_fields(&dto);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "title");
    }
}
