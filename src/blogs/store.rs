use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::app::models::app_error::AppError;

use super::{
    data,
    models::blog::{Blog, NewBlog},
};

/// Persistence collaborator for blog posts. Any call may fail.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn get_blogs(&self) -> Result<Vec<Blog>, AppError>;

    async fn get_blog_by_id(&self, id: u64) -> Result<Option<Blog>, AppError>;

    async fn create_blog(&self, blog: NewBlog) -> Result<Blog, AppError>;

    /// Overwrites the post. `None` when no post has this id.
    async fn update_blog(&self, id: u64, blog: NewBlog) -> Result<Option<Blog>, AppError>;
}

#[derive(Debug, Default)]
pub struct MemoryBlogStore {
    blogs: RwLock<Vec<Blog>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_blogs(data::seed_blogs())
    }

    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: RwLock::new(blogs),
        }
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn get_blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.blogs.read().await.clone())
    }

    async fn get_blog_by_id(&self, id: u64) -> Result<Option<Blog>, AppError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn create_blog(&self, blog: NewBlog) -> Result<Blog, AppError> {
        let mut blogs = self.blogs.write().await;

        let id = blogs.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let blog = Blog::new(id, blog);
        blogs.push(blog.clone());

        tracing::debug!("created blog {}", id);

        Ok(blog)
    }

    async fn update_blog(&self, id: u64, blog: NewBlog) -> Result<Option<Blog>, AppError> {
        let mut blogs = self.blogs.write().await;

        let Some(existing) = blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        existing.fields = blog;
        tracing::debug!("updated blog {}", id);

        Ok(Some(existing.clone()))
    }
}
