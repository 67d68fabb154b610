use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::{blogs::enums::category::Category, editor::EMPTY_DOCUMENT};

/// Snapshot of the authoring form, checked in one pass before submission.
#[derive(Debug, Clone, Validate)]
pub struct BlogDraftDto {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_excerpt"))]
    pub excerpt: String,
    #[validate(required(message = "Cover image is required"))]
    pub cover_image: Option<String>,
    #[validate(length(min = 1, message = "At least one tag is required"))]
    pub tags: Vec<String>,
    #[validate(custom(function = "validate_content"))]
    pub content: String,
    pub category: Category,
    pub read_time: u32,
}

fn required_text(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from(message));
        return Err(error);
    }

    Ok(())
}

fn validate_title(value: &str) -> Result<(), ValidationError> {
    required_text(value, "Title is required")
}

fn validate_excerpt(value: &str) -> Result<(), ValidationError> {
    required_text(value, "Excerpt is required")
}

fn validate_content(value: &str) -> Result<(), ValidationError> {
    if value == EMPTY_DOCUMENT {
        return required_text("", "Content is required");
    }

    required_text(value, "Content is required")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> BlogDraftDto {
        BlogDraftDto {
            title: "My Post".to_string(),
            excerpt: "desc".to_string(),
            cover_image: Some("data:image/png;base64,AAAA".to_string()),
            tags: vec!["a".to_string()],
            content: "<p>hello</p>".to_string(),
            category: Category::Lifestyle,
            read_time: 5,
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn reports_each_missing_field_by_name() {
        let dto = BlogDraftDto {
            title: "  ".to_string(),
            excerpt: String::new(),
            cover_image: None,
            tags: vec![],
            content: EMPTY_DOCUMENT.to_string(),
            ..valid_dto()
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 5);
        assert_eq!(
            fields["cover_image"][0].message.as_deref(),
            Some("Cover image is required")
        );
        assert_eq!(fields["title"][0].message.as_deref(), Some("Title is required"));
    }
}
