// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub mod database_client;
pub mod database_pool;

pub const STOREFRONT_POSTGRES_URL: &str = "STOREFRONT_POSTGRES_URL";
pub const STOREFRONT_POSTGRES_USER: &str = "STOREFRONT_POSTGRES_USER";
pub const STOREFRONT_POSTGRES_PASSWORD: &str = "STOREFRONT_POSTGRES_PASSWORD";
pub const STOREFRONT_CONNECTION_POOL_SIZE: &str = "STOREFRONT_CONNECTION_POOL_SIZE";
