use serde::Serialize;

use crate::{blogs::models::blog::Blog, dashboard::enums::blog_status::BlogStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBlog {
    #[serde(flatten)]
    pub blog: Blog,
    pub status: BlogStatus,
    pub views: u32,
    pub last_edited: String,
}
