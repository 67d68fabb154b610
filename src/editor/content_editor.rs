use crate::{app::models::app_error::AppError, media::models::image_file::ImageFile};

use super::{
    commands::{EditorCommand, Key, LinkAction},
    surface::EditingSurface,
};

/// Toolbar state and command dispatch in front of an [`EditingSurface`].
///
/// Every command that changes the document yields the new serialized HTML,
/// which is the only thing the owning form observes.
pub struct ContentEditor<S: EditingSurface> {
    surface: S,
    link_url: String,
    show_link_input: bool,
}

impl<S: EditingSurface> ContentEditor<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            link_url: String::new(),
            show_link_input: false,
        }
    }

    pub fn dispatch(&mut self, command: EditorCommand) -> Option<String> {
        tracing::debug!("editor command {:?}", command);

        match self.surface.apply(&command) {
            true => Some(self.surface.html()),
            false => None,
        }
    }

    pub fn html(&self) -> String {
        self.surface.html()
    }

    pub fn character_count(&self) -> usize {
        self.surface.html().chars().count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // LINKS

    pub fn link_action(&self) -> LinkAction {
        match self.surface.is_link_active() {
            true => LinkAction::Remove,
            false => LinkAction::Add,
        }
    }

    pub fn is_link_input_open(&self) -> bool {
        self.show_link_input
    }

    pub fn link_url(&self) -> &str {
        &self.link_url
    }

    pub fn open_link_input(&mut self) {
        self.show_link_input = true;
    }

    pub fn close_link_input(&mut self) {
        self.show_link_input = false;
        self.link_url.clear();
    }

    pub fn set_link_url(&mut self, url: &str) {
        self.link_url = url.to_string();
    }

    pub fn on_link_key(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Enter => self.commit_link(),
            Key::Escape => {
                self.close_link_input();
                None
            }
            Key::Other => None,
        }
    }

    /// Applies the pending URL to the selection. Nothing happens while the
    /// URL is empty.
    pub fn commit_link(&mut self) -> Option<String> {
        if self.link_url.is_empty() {
            return None;
        }

        let href = std::mem::take(&mut self.link_url);
        self.show_link_input = false;

        self.dispatch(EditorCommand::SetLink { href })
    }

    pub fn remove_link(&mut self) -> Option<String> {
        self.dispatch(EditorCommand::UnsetLink)
    }

    // IMAGES

    pub fn insert_image_file(&mut self, file: &ImageFile) -> Result<Option<String>, AppError> {
        let src = file.to_data_uri()?;
        Ok(self.dispatch(EditorCommand::InsertImage { src }))
    }
}
