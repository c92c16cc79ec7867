// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time;

use actix_web::{App, HttpServer, middleware, web};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use storefront_graphql::build_schema;
use storefront_server::{GRAPHQL_HTTP_PATH, configure_router, init_tracing};
use storefront_sql::{DatabasePool, database_error::DatabaseError};

const STOREFRONT_SERVER_HOST: &str = "STOREFRONT_SERVER_HOST";
const STOREFRONT_SERVER_PORT: &str = "STOREFRONT_SERVER_PORT";

#[derive(Error)]
enum ServerError {
    #[error("Port {0} is already in use. Check if there is another process running at that port.")]
    PortInUse(u16),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Database(#[from] DatabaseError),
}

// A custom `Debug` implementation for `ServerError` (that delegates to the `Display` impl), so
// that we don't print the default `Debug` implementation's message when the server exits.
impl std::fmt::Debug for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    let start_time = time::SystemTime::now();

    init_tracing();

    let pool = web::Data::new(DatabasePool::from_env(None).await?);
    let schema = web::Data::new(build_schema());

    let server_port = std::env::var(STOREFRONT_SERVER_PORT)
        .map(|port_str| {
            port_str
                .parse::<u16>()
                .expect("Failed to parse STOREFRONT_SERVER_PORT")
        })
        .unwrap_or(9876);

    let server = HttpServer::new({
        let pool = pool.clone();
        let schema = schema.clone();
        move || {
            App::new()
                .wrap(TracingLogger::default())
                .wrap(middleware::NormalizePath::new(
                    middleware::TrailingSlash::Trim,
                ))
                .configure(configure_router(pool.clone(), schema.clone()))
        }
    });

    let server = match std::env::var(STOREFRONT_SERVER_HOST) {
        Ok(host) => server.bind((host, server_port)),
        // Bind to "localhost" so both loopback addresses ([::1] and
        // 127.0.0.1) accept connections; some tooling only connects over the
        // IPv6 loopback.
        Err(_) => server.bind(("localhost", server_port)),
    };

    match server {
        Ok(server) => {
            let pretty_addr = pretty_addr(&server.addrs());

            println!(
                "Started server on {} in {:.2} ms",
                pretty_addr,
                start_time.elapsed().unwrap_or_default().as_micros() as f64 / 1000.0
            );
            println!("- GraphQL endpoint hosted at:");
            println!("\thttp://{pretty_addr}{GRAPHQL_HTTP_PATH}");
            println!("- GraphiQL playground hosted at:");
            println!("\thttp://{pretty_addr}{GRAPHQL_HTTP_PATH}");

            Ok(server.run().await?)
        }
        Err(e) => Err(if e.kind() == ErrorKind::AddrInUse {
            ServerError::PortInUse(server_port)
        } else {
            ServerError::Io(e)
        }),
    }
}

fn pretty_addr(addrs: &[SocketAddr]) -> String {
    let loopback_addr = addrs.iter().find(|addr| addr.ip().is_loopback());

    match loopback_addr {
        Some(addr) => format!("localhost:{}", addr.port()),
        None => match addrs {
            // Print single address without square brackets
            [addr] => format!("{addr}"),
            _ => format!("{addrs:?}"),
        },
    }
}
