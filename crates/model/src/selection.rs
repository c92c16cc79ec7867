// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Translation of a client's requested-field tree into field-selection
//! descriptors that drive minimal-column queries.
//!
//! The input is a plain recursive structure ([RequestedField]) rather than any
//! GraphQL engine's selection type, so the translation stays a pure data
//! transformation.

use heck::ToSnakeCase;

use crate::dto::Entity;

/// One field requested by the client, with its sub-selections (empty for a
/// scalar field).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedField {
    pub name: String,
    pub children: Vec<RequestedField>,
}

impl RequestedField {
    pub fn scalar(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            children: vec![],
        }
    }

    pub fn with_children(name: &str, children: Vec<RequestedField>) -> Self {
        Self {
            name: name.to_owned(),
            children,
        }
    }
}

/// The scalar fields of one entity requested by the client. Drives the column
/// projection of the query issued for that entity.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFields {
    pub owner: Entity,
    pub fields: Vec<String>,
    pub all: bool,
}

impl SelectedFields {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            fields: vec![],
            all: false,
        }
    }
}

/// Convert the sub-fields requested on `owner` into an ordered descriptor
/// list. The descriptor for `owner` itself always comes first (query
/// construction projects the first descriptor's columns); descriptors for
/// nested relation selections follow in encounter order.
///
/// Scalar field names are normalized from the client's camelCase to the
/// store's snake_case. With `remove_related`, relation sub-selections are
/// stripped entirely (used where relations are resolved by dedicated resolver
/// fields instead of joins). A relation field whose name is not a known
/// entity is skipped.
pub fn selected_fields(
    owner: Entity,
    fields: &[RequestedField],
    remove_related: bool,
) -> Vec<SelectedFields> {
    let mut own = SelectedFields::new(owner);
    let mut related = vec![];

    for field in fields {
        if field.children.is_empty() {
            own.fields.push(field.name.to_snake_case());
        } else if !remove_related {
            if let Some(entity) = Entity::from_field_name(&field.name) {
                related.extend(selected_fields(entity, &field.children, false));
            }
        }
    }

    let mut result = vec![own];
    result.append(&mut related);
    result
}

/// Flatten a requested-field tree into `"{field}.{child}"` path strings
/// (scalar fields map to their bare snake_case name). Retained from the
/// pre-descriptor selection format; used for compact debug logging of what a
/// client asked for.
pub fn selected_field_paths(fields: &[RequestedField], remove_related: bool) -> Vec<String> {
    let mut paths = vec![];

    for field in fields {
        if field.children.is_empty() {
            paths.push(field.name.to_snake_case());
            continue;
        }
        if remove_related {
            continue;
        }
        for child in &field.children {
            paths.push(format!("{}.{}", field.name, child.name));
        }
    }

    paths
}

/// Which review relations a descriptor list asks to eager-load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinPlan {
    pub user: bool,
    pub product: bool,
}

impl JoinPlan {
    pub fn none() -> Self {
        Self {
            user: false,
            product: false,
        }
    }
}

/// Determine the relations to join from a descriptor list, by matching each
/// descriptor's owner against the User and Product entities.
pub fn relations_to_join(fields: &[SelectedFields]) -> JoinPlan {
    let mut plan = JoinPlan::none();

    for field in fields {
        match field.owner {
            Entity::User => plan.user = true,
            Entity::Product => plan.product = true,
            Entity::Review => (),
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_selection() -> Vec<RequestedField> {
        vec![
            RequestedField::scalar("id"),
            RequestedField::scalar("content"),
            RequestedField::with_children(
                "user",
                vec![RequestedField::scalar("id"), RequestedField::scalar("username")],
            ),
        ]
    }

    #[test]
    fn scalars_go_to_the_self_descriptor() {
        let result = selected_fields(
            Entity::User,
            &[RequestedField::scalar("id"), RequestedField::scalar("username")],
            false,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].owner, Entity::User);
        assert_eq!(result[0].fields, vec!["id", "username"]);
    }

    #[test]
    fn relation_selection_produces_a_nested_descriptor() {
        let result = selected_fields(Entity::Review, &review_selection(), false);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].owner, Entity::Review);
        assert_eq!(result[0].fields, vec!["id", "content"]);
        assert_eq!(result[1].owner, Entity::User);
        assert_eq!(result[1].fields, vec!["id", "username"]);
    }

    #[test]
    fn remove_related_strips_relation_expansion() {
        let result = selected_fields(Entity::Review, &review_selection(), true);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].fields, vec!["id", "content"]);
    }

    #[test]
    fn camel_case_names_are_normalized() {
        let result = selected_fields(
            Entity::Review,
            &[RequestedField::scalar("userId"), RequestedField::scalar("productId")],
            false,
        );

        assert_eq!(result[0].fields, vec!["user_id", "product_id"]);
    }

    #[test]
    fn deeply_nested_selections_recurse() {
        let selection = vec![RequestedField::with_children(
            "user",
            vec![
                RequestedField::scalar("username"),
                RequestedField::with_children("reviews", vec![RequestedField::scalar("content")]),
            ],
        )];

        let result = selected_fields(Entity::Review, &selection, false);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].owner, Entity::Review);
        assert!(result[0].fields.is_empty());
        assert_eq!(result[1].owner, Entity::User);
        assert_eq!(result[1].fields, vec!["username"]);
        assert_eq!(result[2].owner, Entity::Review);
        assert_eq!(result[2].fields, vec!["content"]);
    }

    #[test]
    fn unknown_relation_names_are_skipped() {
        let selection = vec![
            RequestedField::scalar("id"),
            RequestedField::with_children("metadata", vec![RequestedField::scalar("key")]),
        ];

        let result = selected_fields(Entity::User, &selection, false);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].fields, vec!["id"]);
    }

    #[test]
    fn translation_is_idempotent() {
        let selection = review_selection();

        let first = selected_fields(Entity::Review, &selection, false);
        let second = selected_fields(Entity::Review, &selection, false);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_selection_yields_an_empty_self_descriptor() {
        let result = selected_fields(Entity::Product, &[], false);

        assert_eq!(result.len(), 1);
        assert!(result[0].fields.is_empty());
    }

    #[test]
    fn flat_paths() {
        let paths = selected_field_paths(&review_selection(), false);

        assert_eq!(paths, vec!["id", "content", "user.id", "user.username"]);
    }

    #[test]
    fn flat_paths_remove_related() {
        let paths = selected_field_paths(&review_selection(), true);

        assert_eq!(paths, vec!["id", "content"]);
    }

    #[test]
    fn join_plan_from_descriptors() {
        let fields = selected_fields(Entity::Review, &review_selection(), false);
        let plan = relations_to_join(&fields);

        assert!(plan.user);
        assert!(!plan.product);
    }

    #[test]
    fn join_plan_is_plural_tolerant() {
        let selection = vec![RequestedField::with_children(
            "Products",
            vec![RequestedField::scalar("title")],
        )];

        let fields = selected_fields(Entity::Review, &selection, false);
        let plan = relations_to_join(&fields);

        assert!(plan.product);
        assert!(!plan.user);
    }
}
