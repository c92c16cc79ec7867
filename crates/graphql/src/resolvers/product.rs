// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use storefront_model::{
    Entity, ProductDto, RequestedField, SelectedFields,
    selection::{selected_field_paths, selected_fields},
};
use storefront_store::{ProductStore, StoreError};

use crate::converters::product_from_dto;
use crate::errors::ResolverError;
use crate::objects::Product;

pub struct ProductResolver {
    store: ProductStore,
}

impl ProductResolver {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    fn selection(fields: &[RequestedField]) -> Vec<SelectedFields> {
        tracing::debug!(selection = ?selected_field_paths(fields, true), "product selection");
        selected_fields(Entity::Product, fields, true)
    }

    pub async fn get(
        &self,
        id: i32,
        fields: &[RequestedField],
    ) -> Result<Option<Product>, ResolverError> {
        match self.store.get(id, &Self::selection(fields)).await {
            Ok(dto) => Ok(Some(product_from_dto(dto))),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_list(
        &self,
        fields: &[RequestedField],
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, ResolverError> {
        let dtos = self
            .store
            .get_list(&Self::selection(fields), offset, limit)
            .await?;
        Ok(dtos.into_iter().map(product_from_dto).collect())
    }

    pub async fn get_by_review_id(
        &self,
        review_id: i32,
        fields: &[RequestedField],
    ) -> Result<Product, ResolverError> {
        let dto = self
            .store
            .get_by_review_id(review_id, &Self::selection(fields))
            .await?;
        Ok(product_from_dto(dto))
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
    ) -> Result<Product, ResolverError> {
        let dto = ProductDto {
            title: Some(title),
            description: Some(description),
            ..Default::default()
        };
        Ok(product_from_dto(self.store.add(dto).await?))
    }

    pub async fn update(
        &self,
        id: i32,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<bool, ResolverError> {
        let dto = ProductDto {
            title,
            description,
            ..Default::default()
        };
        match self.store.update(id, dto).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ResolverError> {
        match self.store.delete(id).await {
            Ok(deleted) => Ok(deleted),
            Err(StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
