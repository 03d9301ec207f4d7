#![deny(missing_docs)]
//! A web server exposing the classical cipher toolkit as a JSON API.

use axum::{
    Router,
    routing::{get, post},
};
use local_ip_address::local_ip;
use log::{error, info, warn};
use std::env;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

mod routes;

const DEFAULT_PORT: u16 = 3000;

/// Builds the API router.
fn app() -> Router {
    Router::new()
        .route("/api/health", get(routes::health_handler))
        .route("/api/caesar", post(routes::caesar_handler))
        .route("/api/affine", post(routes::affine_handler))
        .route("/api/playfair", post(routes::playfair_handler))
        .route("/api/playfair/square", post(routes::playfair_square_handler))
        .route("/api/hill", post(routes::hill_handler))
        .route("/api/hill/crack", post(routes::hill_crack_handler))
        .layer(CorsLayer::permissive())
}

/// Port from `CLASSIC_WEB_PORT`, falling back to the default.
fn configured_port() -> u16 {
    match env::var("CLASSIC_WEB_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring invalid CLASSIC_WEB_PORT '{raw}': {e}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let port = configured_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        });

    println!("listening on:");
    if let Ok(my_local_ip) = local_ip() {
        println!("  - http://{my_local_ip}:{port}/api/health");
    }
    println!("  - http://127.0.0.1:{port}/api/health");
    info!("Serving classic cipher API on {addr}");

    if let Err(e) = axum::serve(listener, app()).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
