//! Enumerated model names accepted by the `/models/{model_name}` route

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelName {
    #[serde(rename = "ALEXNET")]
    Alexnet,
    #[serde(rename = "RESNET")]
    Resnet,
    #[serde(rename = "LENET")]
    Lenet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input should be 'ALEXNET', 'RESNET' or 'LENET', got '{0}'")]
pub struct ParseModelNameError(pub String);

impl ModelName {
    pub const ALL: [ModelName; 3] = [ModelName::Alexnet, ModelName::Resnet, ModelName::Lenet];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "ALEXNET",
            ModelName::Resnet => "RESNET",
            ModelName::Lenet => "LENET",
        }
    }

    /// The canned reply for each model.
    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

impl Display for ModelName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = ParseModelNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelName::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| ParseModelNameError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_models() {
        assert_eq!("ALEXNET".parse::<ModelName>(), Ok(ModelName::Alexnet));
        assert_eq!("RESNET".parse::<ModelName>(), Ok(ModelName::Resnet));
        assert_eq!("LENET".parse::<ModelName>(), Ok(ModelName::Lenet));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "alexnet".parse::<ModelName>().unwrap_err();
        assert_eq!(err, ParseModelNameError("alexnet".to_string()));
        assert!(err.to_string().contains("'ALEXNET', 'RESNET' or 'LENET'"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ModelName::Alexnet.message(), "Deep Learning FTW!");
        assert_eq!(ModelName::Lenet.message(), "LeCNN all the images");
        assert_eq!(ModelName::Resnet.message(), "Have some residuals");
    }

    #[test]
    fn test_serde_uses_string_value() {
        assert_eq!(serde_json::to_value(ModelName::Resnet).unwrap(), json!("RESNET"));

        let model: ModelName = serde_json::from_value(json!("LENET")).unwrap();
        assert_eq!(model, ModelName::Lenet);

        let result: Result<ModelName, _> = serde_json::from_value(json!("VGG"));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for model in ModelName::ALL {
            assert_eq!(
                serde_json::to_value(model).unwrap(),
                json!(model.to_string())
            );
        }
    }
}
