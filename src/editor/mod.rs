pub mod commands;
pub mod content_editor;
pub mod surface;
pub mod tags;

/// What the editor serializes when the document has no content.
pub const EMPTY_DOCUMENT: &str = "<p></p>";
