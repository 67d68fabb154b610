use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Published,
    Draft,
}

impl BlogStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}
