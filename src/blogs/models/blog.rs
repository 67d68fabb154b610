use serde::{Deserialize, Serialize};

use crate::blogs::enums::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub author: String,
    pub rating: u8,
    pub content: String,
    pub date: String,
}

/// A blog post as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: u64,
    #[serde(flatten)]
    pub fields: NewBlog,
}

/// Everything the store needs to create or overwrite a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub category: Category,
    pub read_time: u32,
    pub date: String,
    pub author: Author,
    pub likes: u32,
    pub comments: u32,
    pub comments_list: Vec<Comment>,
    pub reviews: Vec<Review>,
    pub shares: u32,
}

impl Blog {
    pub fn new(id: u64, fields: NewBlog) -> Self {
        Self { id, fields }
    }
}
