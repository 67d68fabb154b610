use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Form fields that can carry an error, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Excerpt,
    CoverImage,
    Tags,
    Content,
    Submit,
}

impl FormField {
    pub fn value(&self) -> &str {
        match *self {
            Self::Title => "title",
            Self::Excerpt => "excerpt",
            Self::CoverImage => "coverImage",
            Self::Tags => "tags",
            Self::Content => "content",
            Self::Submit => "submit",
        }
    }

    fn from_dto_field(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "excerpt" => Some(Self::Excerpt),
            "cover_image" => Some(Self::CoverImage),
            "tags" => Some(Self::Tags),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only(field: FormField, message: &str) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: FormField, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(|m| m.as_str())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drops the error for `field`. Returns whether there was one.
    pub fn clear(&mut self, field: FormField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The topmost field with an error.
    pub fn first(&self) -> Option<FormField> {
        self.errors.keys().next().copied()
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.errors.keys().copied().collect()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(validation_errors: ValidationErrors) -> Self {
        let mut errors = Self::new();

        for (name, field_errors) in validation_errors.field_errors() {
            let Some(field) = FormField::from_dto_field(name) else {
                tracing::debug!("ignoring validation error on {}", name);
                continue;
            };

            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or(format!("{} is invalid", field.value()));

            errors.insert(field, &message);
        }

        errors
    }
}
