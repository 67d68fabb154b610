use std::sync::Mutex;

use super::route::Route;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Keeps every visited path, most recent last.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn current(&self) -> Option<String> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        let path = route.path();
        tracing::debug!("navigating to {}", path);

        if let Ok(mut history) = self.history.lock() {
            history.push(path);
        }
    }
}
