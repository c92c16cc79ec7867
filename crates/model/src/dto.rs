// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

/// The entities served by this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Product,
    Review,
}

impl Entity {
    pub fn name(&self) -> &'static str {
        match self {
            Entity::User => "user",
            Entity::Product => "product",
            Entity::Review => "review",
        }
    }

    /// Resolve a GraphQL field name to an entity. Matching is case-insensitive
    /// and plural-tolerant, so both `user` and `users` resolve to [Entity::User].
    pub fn from_field_name(name: &str) -> Option<Entity> {
        let normalized = name.to_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);

        match singular {
            "user" => Some(Entity::User),
            "product" => Some(Entity::Product),
            "review" => Some(Entity::Review),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data carriers mirroring the store columns. Every scalar field is optional,
/// since a DTO may be hydrated from a partial column projection. The relation
/// slots (`reviews`, `user`, `product`) are populated only when an eager join
/// attached the related rows.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDto {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub reviews: Option<Vec<ReviewDto>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDto {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reviews: Option<Vec<ReviewDto>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDto {
    pub id: Option<i32>,
    pub content: Option<String>,
    pub user_id: Option<i32>,
    pub product_id: Option<i32>,
    pub user: Option<UserDto>,
    pub product: Option<ProductDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_resolution() {
        assert_eq!(Entity::from_field_name("user"), Some(Entity::User));
        assert_eq!(Entity::from_field_name("users"), Some(Entity::User));
        assert_eq!(Entity::from_field_name("Products"), Some(Entity::Product));
        assert_eq!(Entity::from_field_name("REVIEW"), Some(Entity::Review));
        assert_eq!(Entity::from_field_name("username"), None);
    }
}
