// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod logging_tracing;

use actix_web::{
    HttpResponse, Responder,
    web::{self, ServiceConfig},
};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use storefront_graphql::{RequestContext, StorefrontSchema};
use storefront_sql::DatabasePool;

pub const GRAPHQL_HTTP_PATH: &str = "/graphql";

pub fn init_tracing() {
    logging_tracing::init();
}

pub fn configure_router(
    pool: web::Data<DatabasePool>,
    schema: web::Data<StorefrontSchema>,
) -> impl FnOnce(&mut ServiceConfig) {
    move |app| {
        app.app_data(pool)
            .app_data(schema)
            .route(GRAPHQL_HTTP_PATH, web::post().to(resolve))
            .route(GRAPHQL_HTTP_PATH, web::get().to(playground));
    }
}

/// Resolve a GraphQL request. One pooled connection is checked out per
/// request and handed to the resolvers through the request context; it
/// returns to the pool when the context is dropped.
async fn resolve(
    pool: web::Data<DatabasePool>,
    schema: web::Data<StorefrontSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    match pool.get_client().await {
        Ok(client) => {
            let context = RequestContext::new(client);
            schema
                .execute(request.into_inner().data(context))
                .await
                .into()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to acquire a database connection");
            async_graphql::Response::from_errors(vec![async_graphql::ServerError::new(
                "Service temporarily unavailable",
                None,
            )])
            .into()
        }
    }
}

async fn playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_HTTP_PATH).finish())
}
