pub mod nav_link;
