use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::sleep};

use crate::routing::{navigator::Navigator, route::Route};

/// Navigation scheduled after a successful save. Dropping it before it fires
/// cancels the navigation.
#[derive(Debug)]
pub struct PendingRedirect {
    route: Route,
    handle: Option<JoinHandle<()>>,
}

impl PendingRedirect {
    pub fn schedule(navigator: Arc<dyn Navigator>, route: Route, delay: Duration) -> Self {
        let target = route.clone();

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            navigator.navigate(target);
        });

        Self {
            route,
            handle: Some(handle),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("redirect to {} canceled", self.route.path());
            handle.abort();
        }
    }

    /// Waits until the navigation has happened (or was canceled).
    pub async fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PendingRedirect {
    fn drop(&mut self) {
        self.cancel();
    }
}
