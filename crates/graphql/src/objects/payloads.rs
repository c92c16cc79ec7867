// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::{ID, InputObject, SimpleObject};

#[derive(InputObject)]
pub struct RegisterUserInput {
    pub username: String,
}

#[derive(InputObject)]
pub struct UpdateUserInput {
    pub username: Option<String>,
}

#[derive(InputObject)]
pub struct CreateProductInput {
    pub title: String,
    pub description: String,
}

#[derive(InputObject)]
pub struct UpdateProductInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(InputObject)]
pub struct CreateReviewInput {
    pub content: String,
    pub user_id: ID,
    pub product_id: ID,
}

#[derive(InputObject)]
pub struct UpdateReviewInput {
    pub content: Option<String>,
}

/// Payload of `deleteUser`; echoes the id the client asked to delete.
#[derive(SimpleObject)]
pub struct DeletedUser {
    pub id: ID,
    pub success: bool,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct Deleted {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(SimpleObject)]
pub struct Updated {
    pub success: bool,
    pub message: String,
}
