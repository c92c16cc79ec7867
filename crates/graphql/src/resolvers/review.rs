// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use storefront_model::{
    Entity, RequestedField, ReviewDto, SelectedFields,
    selection::{selected_field_paths, selected_fields},
};
use storefront_store::{ReviewStore, StoreError};

use crate::converters::review_from_dto;
use crate::errors::ResolverError;
use crate::objects::Review;

pub struct ReviewResolver {
    store: ReviewStore,
}

impl ReviewResolver {
    pub fn new(store: ReviewStore) -> Self {
        Self { store }
    }

    // Reads go through the aggregated store, so relation sub-selections stay
    // in the descriptors to drive the eager joins.
    fn selection(fields: &[RequestedField]) -> Vec<SelectedFields> {
        tracing::debug!(selection = ?selected_field_paths(fields, false), "review selection");
        selected_fields(Entity::Review, fields, false)
    }

    pub async fn get(
        &self,
        id: i32,
        fields: &[RequestedField],
    ) -> Result<Option<Review>, ResolverError> {
        let dto = self.store.get(id, &Self::selection(fields)).await?;
        Ok(dto.map(review_from_dto))
    }

    pub async fn get_list(
        &self,
        fields: &[RequestedField],
        offset: i64,
        limit: i64,
        user_id: Option<i32>,
        product_id: Option<i32>,
    ) -> Result<Vec<Review>, ResolverError> {
        let dtos = self
            .store
            .get_list(&Self::selection(fields), offset, limit, user_id, product_id)
            .await?;
        Ok(dtos.into_iter().map(review_from_dto).collect())
    }

    /// The creation path does not eager-load; the returned review carries the
    /// foreign keys but no attached relations.
    pub async fn create(
        &self,
        content: String,
        user_id: i32,
        product_id: i32,
    ) -> Result<Review, ResolverError> {
        let dto = ReviewDto {
            content: Some(content),
            user_id: Some(user_id),
            product_id: Some(product_id),
            ..Default::default()
        };
        Ok(review_from_dto(self.store.add(dto).await?))
    }

    pub async fn update(&self, id: i32, content: Option<String>) -> Result<bool, ResolverError> {
        let dto = ReviewDto {
            content,
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
