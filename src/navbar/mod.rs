pub mod models;
pub mod navbar;
