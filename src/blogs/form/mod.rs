pub mod controller;
pub mod form_errors;
pub mod redirect;
