// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod product;
mod review;
mod user;

pub use product::ProductResolver;
pub use review::ReviewResolver;
pub use user::UserResolver;

use crate::errors::ResolverError;

/// Where a review's relation field gets its value from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum RelationSource {
    /// An eager join already attached the object; no store round trip.
    PreAttached,
    /// Point lookup by the foreign key.
    ForeignKey(i32),
    /// Neither is present; look the parent up through the owning review's id.
    ReviewLookup(i32),
}

/// Plan the resolution of one relation field. Pre-attachment wins over the
/// foreign key, which wins over the reverse lookup; a review without an id
/// cannot be reverse-looked-up.
pub(crate) fn relation_source(
    pre_attached: bool,
    foreign_key: Option<i32>,
    review_id: Option<i32>,
) -> Result<RelationSource, ResolverError> {
    if pre_attached {
        return Ok(RelationSource::PreAttached);
    }
    if let Some(id) = foreign_key {
        return Ok(RelationSource::ForeignKey(id));
    }
    match review_id {
        Some(id) => Ok(RelationSource::ReviewLookup(id)),
        None => Err(ResolverError::IdNotProvided("review".to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_attached_object_needs_no_lookup() {
        let source = relation_source(true, Some(3), Some(5)).unwrap();

        assert_eq!(source, RelationSource::PreAttached);
    }

    #[test]
    fn foreign_key_wins_over_reverse_lookup() {
        let source = relation_source(false, Some(3), Some(5)).unwrap();

        assert_eq!(source, RelationSource::ForeignKey(3));
    }

    #[test]
    fn reverse_lookup_is_the_last_resort() {
        let source = relation_source(false, None, Some(5)).unwrap();

        assert_eq!(source, RelationSource::ReviewLookup(5));
    }

    #[test]
    fn unsaved_review_cannot_resolve_relations() {
        let result = relation_source(false, None, None);

        assert!(matches!(result, Err(ResolverError::IdNotProvided(_))));
    }
}
