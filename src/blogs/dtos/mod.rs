pub mod blog_draft_dto;
