// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use storefront_store::StoreError;

#[derive(Error, Debug)]
pub enum ResolverError {
    /// A relation field needed the owning object's id but none was available
    /// (the object came from an unsaved or partial source). Surfaces as a
    /// GraphQL field error.
    #[error("ID for the object is not provided: {0}")]
    IdNotProvided(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_not_provided_message() {
        let err = ResolverError::IdNotProvided("review".to_owned());

        assert_eq!(err.to_string(), "ID for the object is not provided: review");
    }
}
