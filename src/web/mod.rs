//! Web-related modules for HTTP handlers and types

pub mod docs;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod types;

pub use handlers::*;
pub use routes::router;
pub use types::*;
