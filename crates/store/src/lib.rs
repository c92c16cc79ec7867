// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Per-entity stores over the SQL layer.
//!
//! CRUD is implemented once in the generic [PgRepository], specialized per
//! entity through an [EntityMapping] that describes the table, the declared
//! columns, and how rows and parameter lists map to the entity's DTO. The
//! review store additionally resolves one level of relations eagerly to avoid
//! N+1 query fan-out.

mod error;
mod mapping;
mod product;
mod repository;
mod review;
mod user;

pub use error::StoreError;
pub use mapping::EntityMapping;
pub use product::{ProductMapping, ProductStore};
pub use repository::PgRepository;
pub use review::{ReviewMapping, ReviewStore};
pub use user::{UserMapping, UserStore};
