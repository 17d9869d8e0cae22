pub mod course;
pub mod image;

pub use course::{Course, CourseDuration, CourseInput};
pub use image::{Image, ImageUpload, UploadResponse};

use crate::error::AppError;

/// Checks a decoded request body before it reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
