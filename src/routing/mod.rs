pub mod navigator;
pub mod route;
