// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::env;
use std::str::FromStr;

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::{Config, NoTls};

use crate::database_error::{DatabaseError, WithContext};

use super::database_client::DatabaseClient;
use super::{
    STOREFRONT_CONNECTION_POOL_SIZE, STOREFRONT_POSTGRES_PASSWORD, STOREFRONT_POSTGRES_URL,
    STOREFRONT_POSTGRES_USER,
};

const DEFAULT_POOL_SIZE: usize = 10;

pub struct DatabasePool {
    pool: Pool,
}

impl DatabasePool {
    /// Create a pool from the `STOREFRONT_POSTGRES_*` environment variables.
    /// `pool_size_override` is useful when the pool size must be controlled
    /// explicitly regardless of the environment.
    pub async fn from_env(pool_size_override: Option<usize>) -> Result<Self, DatabaseError> {
        let url = env::var(STOREFRONT_POSTGRES_URL).map_err(|_| {
            DatabaseError::Config(format!("Env {STOREFRONT_POSTGRES_URL} must be provided"))
        })?;

        let user = env::var(STOREFRONT_POSTGRES_USER).ok();
        let password = env::var(STOREFRONT_POSTGRES_PASSWORD).ok();
        let pool_size = pool_size_override.unwrap_or_else(|| {
            env::var(STOREFRONT_CONNECTION_POOL_SIZE)
                .ok()
                .and_then(|pool_str| pool_str.parse::<usize>().ok())
                .unwrap_or(DEFAULT_POOL_SIZE)
        });

        Self::from_helper(pool_size, &url, user, password)
    }

    fn from_helper(
        pool_size: usize,
        url: &str,
        user: Option<String>,
        password: Option<String>,
    ) -> Result<Self, DatabaseError> {
        let mut config = Config::from_str(url).map_err(|e| {
            DatabaseError::Delegate(e)
                .with_context("Failed to parse PostgreSQL connection string".into())
        })?;

        if let Some(user) = &user {
            config.user(user);
        }
        if let Some(password) = &password {
            config.password(password);
        }

        tracing::debug!(pool_size, "Creating database connection pool");

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let manager = Manager::from_config(config, NoTls, manager_config);

        let pool = Pool::builder(manager)
            .max_size(pool_size)
            .build()
            .map_err(|e| DatabaseError::Config(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Check out one client. Each request holds exactly one client for its
    /// whole lifetime; it returns to the pool on drop.
    pub async fn get_client(&self) -> Result<DatabaseClient, DatabaseError> {
        let client = self
            .pool
            .get()
            .await
            .map_err(DatabaseError::Pool)
            .with_context("Failed to acquire a database connection".into())?;

        Ok(DatabaseClient(client))
    }
}
