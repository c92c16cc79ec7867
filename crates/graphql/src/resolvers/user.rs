// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use storefront_model::{
    Entity, RequestedField, SelectedFields, UserDto,
    selection::{selected_field_paths, selected_fields},
};
use storefront_store::{StoreError, UserStore};

use crate::converters::user_from_dto;
use crate::errors::ResolverError;
use crate::objects::User;

pub struct UserResolver {
    store: UserStore,
}

impl UserResolver {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    // User relations are resolved by dedicated fields, so relation
    // sub-selections are stripped from the descriptors here.
    fn selection(fields: &[RequestedField]) -> Vec<SelectedFields> {
        tracing::debug!(selection = ?selected_field_paths(fields, true), "user selection");
        selected_fields(Entity::User, fields, true)
    }

    pub async fn get(
        &self,
        id: i32,
        fields: &[RequestedField],
    ) -> Result<Option<User>, ResolverError> {
        match self.store.get(id, &Self::selection(fields)).await {
            Ok(dto) => Ok(Some(user_from_dto(dto))),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_list(
        &self,
        fields: &[RequestedField],
        offset: i64,
        limit: i64,
    ) -> Result<Vec<User>, ResolverError> {
        let dtos = self
            .store
            .get_list(&Self::selection(fields), offset, limit)
            .await?;
        Ok(dtos.into_iter().map(user_from_dto).collect())
    }

    pub async fn get_by_review_id(
        &self,
        review_id: i32,
        fields: &[RequestedField],
    ) -> Result<User, ResolverError> {
        let dto = self
            .store
            .get_by_review_id(review_id, &Self::selection(fields))
            .await?;
        Ok(user_from_dto(dto))
    }

    pub async fn register(&self, username: String) -> Result<User, ResolverError> {
        let dto = UserDto {
            username: Some(username),
            ..Default::default()
        };
        Ok(user_from_dto(self.store.add(dto).await?))
    }

    pub async fn update(
        &self,
        id: i32,
        username: Option<String>,
    ) -> Result<Option<User>, ResolverError> {
        let dto = UserDto {
            username,
            ..Default::default()
        };
        match self.store.update(id, dto).await {
            Ok(dto) => Ok(Some(user_from_dto(dto))),
            Err(StoreError::NotFound { .. }) => Ok(None),
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
