use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;

use crate::{
    app::{
        envy::Envy,
        models::app_error::{AppError, ErrorCode},
    },
    auth::session::MockAuthSession,
    blogs::{
        models::blog::{Blog, NewBlog},
        store::{BlogStore, MemoryBlogStore},
    },
    routing::navigator::HistoryNavigator,
    AppState,
};

pub struct TestApp {
    pub state: AppState,
    pub navigator: Arc<HistoryNavigator>,
}

pub fn test_app(store: Arc<dyn BlogStore>) -> TestApp {
    let navigator = Arc::new(HistoryNavigator::new());
    let state = AppState {
        store,
        auth: Arc::new(MockAuthSession::signed_in("alex")),
        navigator: navigator.clone(),
        envy: Arc::new(Envy::default()),
    };

    TestApp { state, navigator }
}

pub fn seeded_app() -> TestApp {
    test_app(Arc::new(MemoryBlogStore::seeded()))
}

/// Store whose writes always fail. Counts the calls it receives.
pub struct FailingStore {
    pub writes: AtomicUsize,
    code: ErrorCode,
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::with_code(ErrorCode::Internal)
    }
}

impl FailingStore {
    pub fn with_code(code: ErrorCode) -> Self {
        Self {
            writes: AtomicUsize::new(0),
            code,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn failure(&self) -> AppError {
        self.writes.fetch_add(1, Ordering::SeqCst);
        AppError {
            code: self.code,
            message: "connection reset".to_string(),
        }
    }
}

#[async_trait]
impl BlogStore for FailingStore {
    async fn get_blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(Vec::new())
    }

    async fn get_blog_by_id(&self, _id: u64) -> Result<Option<Blog>, AppError> {
        Ok(None)
    }

    async fn create_blog(&self, _blog: NewBlog) -> Result<Blog, AppError> {
        Err(self.failure())
    }

    async fn update_blog(&self, _id: u64, _blog: NewBlog) -> Result<Option<Blog>, AppError> {
        Err(self.failure())
    }
}

/// Store whose writes never complete.
#[derive(Default)]
pub struct HangingStore {
    pub writes: AtomicUsize,
}

impl HangingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn hang<T>(&self) -> Result<T, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

#[async_trait]
impl BlogStore for HangingStore {
    async fn get_blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(Vec::new())
    }

    async fn get_blog_by_id(&self, _id: u64) -> Result<Option<Blog>, AppError> {
        Ok(None)
    }

    async fn create_blog(&self, _blog: NewBlog) -> Result<Blog, AppError> {
        self.hang().await
    }

    async fn update_blog(&self, _id: u64, _blog: NewBlog) -> Result<Option<Blog>, AppError> {
        self.hang().await
    }
}
