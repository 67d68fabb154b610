pub mod data;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod form;
pub mod models;
pub mod store;
