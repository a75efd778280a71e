//! Response bodies for the routes that do not return an item

use serde::Serialize;

use crate::core::model_name::ModelName;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserReply {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ModelReply {
    pub model_name: ModelName,
    pub message: &'static str,
}

impl From<ModelName> for ModelReply {
    fn from(model_name: ModelName) -> Self {
        Self {
            message: model_name.message(),
            model_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileReply {
    pub file_path: String,
}
