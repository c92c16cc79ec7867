// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use storefront_sql::DatabaseClient;
use storefront_store::{ProductStore, ReviewStore, UserStore};

use crate::resolvers::{ProductResolver, ReviewResolver, UserResolver};

/// Per-request wiring: one pooled connection shared by the three resolvers.
/// Built in the HTTP handler and injected as request data; dropping it at the
/// end of the request returns the connection to the pool on every exit path.
pub struct RequestContext {
    pub users: UserResolver,
    pub products: ProductResolver,
    pub reviews: ReviewResolver,
}

impl RequestContext {
    pub fn new(client: DatabaseClient) -> Self {
        let client = Arc::new(client);

        Self {
            users: UserResolver::new(UserStore::new(client.clone())),
            products: ProductResolver::new(ProductStore::new(client.clone())),
            reviews: ReviewResolver::new(ReviewStore::new(client)),
        }
    }
}
