use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use crate::{
    app::envy::Envy, auth::session::AuthSession, blogs::store::BlogStore,
    routing::navigator::Navigator,
};

pub mod app;
pub mod auth;
pub mod blogs;
pub mod dashboard;
pub mod editor;
pub mod media;
pub mod navbar;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_support;

/// Collaborators shared by every screen.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub auth: Arc<dyn AuthSession>,
    pub navigator: Arc<dyn Navigator>,
    pub envy: Arc<Envy>,
}
