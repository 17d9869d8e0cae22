use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Validate;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: i64,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUpload {
    pub image: String,
}

impl Validate for ImageUpload {
    fn validate(&self) -> Result<(), AppError> {
        if self.image.is_empty() {
            return Err(AppError::BadRequest("image must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub id: i64,
}
