//! Items API Library
//!
//! A small JSON API showing path parameters, query parameters, enumerated
//! path segments, path-valued parameters and validated request bodies,
//! together with the OpenAPI document and documentation pages describing it.

use clap::Parser;
use openapiv3::OpenAPI;
use std::sync::Arc;

pub mod core;
pub mod web;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        env = "ITEMS_API_HOST",
        default_value = DEFAULT_HOST,
        help = "Address to listen on"
    )]
    pub host: String,
    #[arg(
        short,
        long,
        env = "ITEMS_API_PORT",
        default_value_t = DEFAULT_PORT,
        help = "Port to listen on"
    )]
    pub port: u16,
}

impl Args {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub openapi: Arc<OpenAPI>,
}

impl AppState {
    /// Create the shared state, building the API document once.
    pub fn new() -> Self {
        Self {
            openapi: Arc::new(crate::core::openapi::api_document()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Constants used throughout the application
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const OPENAPI_URL: &str = "/openapi.json";
