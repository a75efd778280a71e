//! HTTP handlers for the items API

use axum::{extract::State, response::Json};
use openapiv3::OpenAPI;

use crate::{
    AppState,
    core::{
        item::{CreatedItem, Item, ItemView, UpdatedItem},
        model_name::ModelName,
    },
    web::{
        errors::ApiError,
        extract::{ValidJson, ValidPath, ValidQuery},
        params::*,
        types::{FileReply, Greeting, ModelReply, UserReply},
    },
};

#[axum_macros::debug_handler]
pub async fn root_handler() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World",
    })
}

#[axum_macros::debug_handler]
pub async fn read_item_handler(
    ValidPath(ItemPath { item_id }): ValidPath<ItemPath>,
    ValidQuery(query): ValidQuery<ItemQuery>,
) -> Json<ItemView> {
    tracing::debug!(%item_id, short = query.short, "reading item");

    Json(
        ItemView::new(item_id)
            .with_query(query.q)
            .with_description(query.short),
    )
}

#[axum_macros::debug_handler]
pub async fn update_item_handler(
    ValidPath(ItemIdPath { item_id }): ValidPath<ItemIdPath>,
    ValidJson(item): ValidJson<Item>,
) -> Json<UpdatedItem> {
    tracing::debug!(item_id, name = %item.name, "updating item");

    Json(UpdatedItem { item_id, item })
}

#[axum_macros::debug_handler]
pub async fn create_item_handler(ValidJson(item): ValidJson<Item>) -> Json<CreatedItem> {
    tracing::debug!(name = %item.name, "creating item");

    Json(CreatedItem::from(item))
}

#[axum_macros::debug_handler]
pub async fn read_user_me_handler() -> Json<UserReply> {
    Json(UserReply {
        user_id: "I am you.".to_string(),
    })
}

#[axum_macros::debug_handler]
pub async fn read_user_handler(
    ValidPath(UserPath { user_id }): ValidPath<UserPath>,
) -> Json<UserReply> {
    Json(UserReply { user_id })
}

#[axum_macros::debug_handler]
pub async fn get_model_handler(
    ValidPath(ModelPath { model_name }): ValidPath<ModelPath>,
) -> Result<Json<ModelReply>, ApiError> {
    let model = model_name.parse::<ModelName>()?;
    tracing::debug!(%model, "model selected");

    Ok(Json(ModelReply::from(model)))
}

#[axum_macros::debug_handler]
pub async fn read_file_handler(
    ValidPath(FilePath { file_path }): ValidPath<FilePath>,
) -> Json<FileReply> {
    Json(FileReply { file_path })
}

#[axum_macros::debug_handler]
pub async fn read_empty_file_handler() -> Json<FileReply> {
    Json(FileReply {
        file_path: String::new(),
    })
}

#[axum_macros::debug_handler]
pub async fn read_user_item_handler(
    ValidPath(UserItemPath { user_id, item_id }): ValidPath<UserItemPath>,
    ValidQuery(query): ValidQuery<ItemQuery>,
) -> Json<ItemView> {
    tracing::debug!(user_id, %item_id, short = query.short, "reading user item");

    Json(
        ItemView::new(item_id)
            .owned_by(user_id)
            .with_query(query.q)
            .with_description(query.short),
    )
}

#[axum_macros::debug_handler]
pub async fn openapi_handler(State(app_state): State<AppState>) -> Json<OpenAPI> {
    Json(app_state.openapi.as_ref().clone())
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
