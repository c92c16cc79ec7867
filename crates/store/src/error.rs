// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use storefront_model::Entity;
use storefront_sql::database_error::DatabaseError;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No row matched the given id. Callers decide whether this maps to a
    /// `null` result (point queries) or a failed mutation payload.
    #[error("{entity} not found, id: {id}")]
    NotFound { entity: Entity, id: i32 },

    /// Query construction was asked to project zero columns or a column the
    /// entity does not declare. A schema-usage error, not a recoverable
    /// condition.
    #[error("Malformed selection: {0}")]
    MalformedSelection(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = StoreError::NotFound {
            entity: Entity::User,
            id: 999,
        };

        assert_eq!(err.to_string(), "user not found, id: 999");
    }
}
