pub mod statistics;
pub mod user_blog;
pub mod user_profile;
