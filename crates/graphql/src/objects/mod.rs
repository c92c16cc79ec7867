// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod payloads;
mod product;
mod review;
mod user;

pub use payloads::{
    CreateProductInput, CreateReviewInput, Deleted, DeletedUser, RegisterUserInput, Updated,
    UpdateProductInput, UpdateReviewInput, UpdateUserInput,
};
pub use product::Product;
pub use review::Review;
pub use user::User;

/// Parse a GraphQL `ID` argument into a store id. A malformed value is a
/// field error.
pub(crate) fn parse_id(id: &async_graphql::ID) -> async_graphql::Result<i32> {
    id.parse::<i32>()
        .map_err(|_| async_graphql::Error::new(format!("Invalid ID: {}", id.as_str())))
}

#[cfg(test)]
mod tests {
    use async_graphql::ID;

    use super::parse_id;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id(&ID("42".to_owned())).unwrap(), 42);
    }

    #[test]
    fn malformed_ids_are_field_errors() {
        assert!(parse_id(&ID("forty-two".to_owned())).is_err());
    }
}
