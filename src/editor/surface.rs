use super::{commands::EditorCommand, EMPTY_DOCUMENT};

/// Seam to the WYSIWYG engine that owns the document and the selection.
pub trait EditingSurface: Send + Sync {
    /// Applies `command` at the current selection. Returns whether the
    /// document changed.
    fn apply(&mut self, command: &EditorCommand) -> bool;

    fn html(&self) -> String;

    fn is_link_active(&self) -> bool;
}

impl EditingSurface for Box<dyn EditingSurface> {
    fn apply(&mut self, command: &EditorCommand) -> bool {
        (**self).apply(command)
    }

    fn html(&self) -> String {
        (**self).html()
    }

    fn is_link_active(&self) -> bool {
        (**self).is_link_active()
    }
}

/// Document kept as serialized HTML with the caret at the end.
///
/// Formatting marks need a selection model this buffer doesn't have, so only
/// content replacement, image insertion, link marks and history change the
/// document.
#[derive(Debug, Clone)]
pub struct HtmlBuffer {
    html: String,
    link: Option<String>,
    undo: Vec<String>,
    redo: Vec<String>,
}

impl Default for HtmlBuffer {
    fn default() -> Self {
        Self {
            html: EMPTY_DOCUMENT.to_string(),
            link: None,
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn replace(&mut self, html: String) -> bool {
        if html == self.html {
            return false;
        }

        let previous = std::mem::replace(&mut self.html, html);
        self.undo.push(previous);
        self.redo.clear();
        true
    }
}

impl EditingSurface for HtmlBuffer {
    fn apply(&mut self, command: &EditorCommand) -> bool {
        match command {
            EditorCommand::SetContent(html) => {
                let html = if html.is_empty() {
                    EMPTY_DOCUMENT.to_string()
                } else {
                    html.to_string()
                };
                self.link = None;
                self.replace(html)
            }
            EditorCommand::InsertImage { src } => {
                let image = format!("<img src=\"{}\">", src);
                let html = if self.html == EMPTY_DOCUMENT {
                    image
                } else {
                    format!("{}{}", self.html, image)
                };
                self.replace(html)
            }
            EditorCommand::SetLink { href } => {
                self.link = Some(href.to_string());
                false
            }
            EditorCommand::UnsetLink => {
                self.link = None;
                false
            }
            EditorCommand::Undo => match self.undo.pop() {
                Some(previous) => {
                    let current = std::mem::replace(&mut self.html, previous);
                    self.redo.push(current);
                    true
                }
                None => false,
            },
            EditorCommand::Redo => match self.redo.pop() {
                Some(next) => {
                    let current = std::mem::replace(&mut self.html, next);
                    self.undo.push(current);
                    true
                }
                None => false,
            },
            other => {
                tracing::debug!("html buffer ignores {:?}", other);
                false
            }
        }
    }

    fn html(&self) -> String {
        self.html.to_string()
    }

    fn is_link_active(&self) -> bool {
        self.link.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_empty_document() {
        assert_eq!(HtmlBuffer::new().html(), EMPTY_DOCUMENT);
    }

    #[test]
    fn image_replaces_empty_paragraph_then_appends() {
        let mut buffer = HtmlBuffer::new();
        assert!(buffer.apply(&EditorCommand::InsertImage { src: "a".into() }));
        assert!(buffer.apply(&EditorCommand::InsertImage { src: "b".into() }));

        assert_eq!(buffer.html(), "<img src=\"a\"><img src=\"b\">");
    }

    #[test]
    fn undo_and_redo_walk_history() {
        let mut buffer = HtmlBuffer::new();
        buffer.apply(&EditorCommand::SetContent("<p>one</p>".into()));
        buffer.apply(&EditorCommand::SetContent("<p>two</p>".into()));

        assert!(buffer.apply(&EditorCommand::Undo));
        assert_eq!(buffer.html(), "<p>one</p>");
        assert!(buffer.apply(&EditorCommand::Redo));
        assert_eq!(buffer.html(), "<p>two</p>");
        assert!(!buffer.apply(&EditorCommand::Redo));
    }

    #[test]
    fn same_content_is_not_a_change() {
        let mut buffer = HtmlBuffer::new();
        assert!(!buffer.apply(&EditorCommand::SetContent(EMPTY_DOCUMENT.into())));
        assert!(!buffer.apply(&EditorCommand::ToggleBold));
    }
}
