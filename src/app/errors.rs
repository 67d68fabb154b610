use super::models::app_error::{AppError, ErrorCode};

#[derive(Debug)]
pub enum DefaultAppError {
    InternalError,
}

impl DefaultAppError {
    pub fn value(&self) -> AppError {
        match *self {
            Self::InternalError => AppError {
                code: ErrorCode::Internal,
                message: "An internal error occurred.".to_string(),
            },
        }
    }
}
