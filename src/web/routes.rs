//! Route table for the items API

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState, OPENAPI_URL,
    web::{docs::*, handlers::*},
};

/// Build the application router with its layers and state attached.
///
/// Static segments take precedence over captures, so `/users/me` is
/// matched before `/users/{user_id}` regardless of registration order.
/// A catch-all capture never matches an empty rest, so `/files/` has its
/// own route.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/items", post(create_item_handler))
        .route(
            "/items/{item_id}",
            get(read_item_handler).put(update_item_handler),
        )
        .route("/users/me", get(read_user_me_handler))
        .route("/users/{user_id}", get(read_user_handler))
        .route("/users/{user_id}/items/{item_id}", get(read_user_item_handler))
        .route("/models/{model_name}", get(get_model_handler))
        .route("/files/", get(read_empty_file_handler))
        .route("/files/{*file_path}", get(read_file_handler))
        .route(OPENAPI_URL, get(openapi_handler))
        .route("/docs", get(swagger_ui_handler))
        .route("/redoc", get(redoc_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}
