use crate::app::models::app_error::{AppError, ErrorCode};

#[derive(Debug)]
pub enum BlogsError {
    BlogNotFound,
    SubmissionFailed,
}

impl BlogsError {
    pub fn value(&self) -> AppError {
        match *self {
            Self::BlogNotFound => AppError {
                code: ErrorCode::NotFound,
                message: "Blog post not found.".to_string(),
            },
            Self::SubmissionFailed => AppError {
                code: ErrorCode::Internal,
                message: "Failed to save blog. Please try again.".to_string(),
            },
        }
    }
}
