use crate::app::models::app_error::{AppError, ErrorCode};

#[derive(Debug)]
pub enum MediaError {
    EmptyFile,
    UnreadableFile,
}

impl MediaError {
    pub fn value(&self) -> AppError {
        match *self {
            Self::EmptyFile => AppError {
                code: ErrorCode::BadRequest,
                message: "Selected file is empty.".to_string(),
            },
            Self::UnreadableFile => AppError {
                code: ErrorCode::BadRequest,
                message: "Selected file could not be read.".to_string(),
            },
        }
    }
}
