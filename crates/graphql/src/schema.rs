// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, Schema};

use crate::mutation::MutationRoot;
use crate::query::QueryRoot;

pub type StorefrontSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The schema is request-independent; per-request state (the pooled
/// connection and resolvers) arrives as request data.
pub fn build_schema() -> StorefrontSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .extension(Tracing)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_exposes_every_operation() {
        let sdl = build_schema().sdl();

        for operation in [
            "user", "users", "product", "products", "review", "reviews",
        ] {
            assert!(sdl.contains(operation), "missing query field: {operation}");
        }
        for operation in [
            "registerUser",
            "updateUser",
            "deleteUser",
            "createProduct",
            "updateProduct",
            "deleteProduct",
            "createReview",
            "updateReview",
            "deleteReview",
        ] {
            assert!(sdl.contains(operation), "missing mutation: {operation}");
        }
    }

    #[test]
    fn list_fields_default_to_the_first_page() {
        let sdl = build_schema().sdl();

        assert!(sdl.contains("offset: Int! = 0"));
        assert!(sdl.contains("limit: Int! = 20"));
    }

    #[test]
    fn pre_attachment_fields_use_underscore_names() {
        let sdl = build_schema().sdl();

        assert!(sdl.contains("_userId"));
        assert!(sdl.contains("_productId"));
        assert!(sdl.contains("_user"));
        assert!(sdl.contains("_product"));
        assert!(sdl.contains("_reviews"));
    }
}
