// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Debug;
use std::sync::Arc;

use tokio_postgres::types::ToSql;

/// A parameter that can be bound to a SQL statement.
pub trait SqlParam: Send + Sync + Debug {
    fn as_pg(&self) -> &(dyn ToSql + Sync);
}

impl<T: ToSql + Send + Sync + Debug> SqlParam for T {
    fn as_pg(&self) -> &(dyn ToSql + Sync) {
        self
    }
}

/// A container to hold a dynamically typed [SqlParam], so that heterogeneous
/// parameters can be collected into one list.
#[derive(Clone)]
pub struct SqlParamContainer(Arc<dyn SqlParam>);

impl SqlParamContainer {
    pub fn new<T: SqlParam + 'static>(param: T) -> Self {
        Self(Arc::new(param))
    }

    pub fn i32(value: i32) -> Self {
        Self::new(value)
    }

    pub fn i64(value: i64) -> Self {
        Self::new(value)
    }

    pub fn string(value: String) -> Self {
        Self::new(value)
    }

    pub fn param(&self) -> Arc<dyn SqlParam> {
        self.0.clone()
    }
}

impl Debug for SqlParamContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// View a parameter list the way `tokio_postgres` query methods expect it.
pub fn bind_params(params: &[Arc<dyn SqlParam>]) -> Vec<&(dyn ToSql + Sync)> {
    params.iter().map(|param| param.as_pg()).collect()
}
