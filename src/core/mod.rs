//! Domain types and the API document

pub mod item;
pub mod model_name;
pub mod openapi;
