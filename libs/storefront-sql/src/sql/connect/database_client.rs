// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

/// A client checked out from the [DatabasePool](super::database_pool::DatabasePool)
/// for the duration of one request. The underlying connection is returned to
/// the pool when this value is dropped.
pub struct DatabaseClient(pub(super) deadpool_postgres::Client);

impl Deref for DatabaseClient {
    type Target = tokio_postgres::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DatabaseClient {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
