//! Models-listing types

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelList {
    pub object: String,
    pub data: Vec<ModelInfo>,
}

impl ModelList {
    pub fn single(model_id: impl Into<String>) -> Self {
        Self {
            object: "list".to_string(),
            data: vec![ModelInfo {
                id: model_id.into(),
            }],
        }
    }
}
