pub mod enums;
pub mod models;
pub mod service;
pub mod shell;
