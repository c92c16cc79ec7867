// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The GraphQL surface: API objects, mutation payloads, resolvers, and schema
//! construction. Resolvers read the requested sub-fields of the current
//! GraphQL field, translate them into field-selection descriptors, and drive
//! the stores with them, so the issued queries project only what the client
//! asked for.

mod context;
mod converters;
mod errors;
mod mutation;
mod objects;
mod query;
mod resolvers;
mod schema;
mod selection;

pub use context::RequestContext;
pub use errors::ResolverError;
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{StorefrontSchema, build_schema};
