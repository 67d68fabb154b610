pub mod blog_status;
pub mod dashboard_tab;
