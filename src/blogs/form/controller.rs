use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use validator::Validate;

use crate::{
    app::{models::app_error::AppError, util::time},
    blogs::{
        dtos::blog_draft_dto::BlogDraftDto,
        enums::category::Category,
        errors::BlogsError,
        models::blog::{Author, Blog, NewBlog},
        store::BlogStore,
    },
    editor::{
        commands::{EditorCommand, Key},
        content_editor::ContentEditor,
        surface::{EditingSurface, HtmlBuffer},
        tags::TagInput,
    },
    media::models::image_file::ImageFile,
    routing::route::Route,
    AppState,
};

use super::{
    form_errors::{FormErrors, FormField},
    redirect::PendingRedirect,
};

const MIN_READ_TIME: u32 = 1;
const MAX_READ_TIME: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Blocked,
    /// Validation failed; the caller should bring `first_field` into view.
    Invalid { first_field: FormField },
    Saved { id: u64 },
    /// The post being edited no longer exists.
    NotFound,
    Failed,
}

/// Marks a submission in flight for as long as it lives. Dropping it,
/// including when the submit future is cancelled, clears the flag.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn begin(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag.clone()))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Authoring form for creating a post or editing an existing one.
pub struct BlogForm {
    state: AppState,
    editing_id: Option<u64>,

    title: String,
    excerpt: String,
    cover_image: Option<String>,
    category: Category,
    read_time: u32,
    tags: TagInput,
    editor: ContentEditor<Box<dyn EditingSurface>>,
    content: String,

    is_submitting: Arc<AtomicBool>,
    errors: FormErrors,
    success_message: Option<String>,
    redirect: Option<PendingRedirect>,
}

impl BlogForm {
    pub fn new(state: AppState) -> Self {
        Self::with_surface(state, Box::new(HtmlBuffer::new()))
    }

    pub fn with_surface(state: AppState, surface: Box<dyn EditingSurface>) -> Self {
        let read_time = state.envy.default_read_time();

        Self {
            state,
            editing_id: None,
            title: String::new(),
            excerpt: String::new(),
            cover_image: None,
            category: Category::default(),
            read_time,
            tags: TagInput::new(),
            editor: ContentEditor::new(surface),
            content: String::new(),
            is_submitting: Arc::new(AtomicBool::new(false)),
            errors: FormErrors::new(),
            success_message: None,
            redirect: None,
        }
    }

    /// Switches the form to edit mode and fills it from the store. An
    /// unknown post leaves every field at its default.
    pub async fn load_for_editing(&mut self, id: &str) {
        let Ok(id) = id.parse::<u64>() else {
            tracing::debug!("ignoring malformed blog id {:?}", id);
            return;
        };

        self.editing_id = Some(id);

        let blog = match self.state.store.get_blog_by_id(id).await {
            Ok(Some(blog)) => blog,
            Ok(None) => {
                tracing::debug!("blog {} not found, keeping defaults", id);
                return;
            }
            Err(e) => {
                tracing::error!(%e);
                return;
            }
        };

        let fields = blog.fields;
        self.title = fields.title;
        self.excerpt = fields.excerpt;
        self.tags = TagInput::with_tags(fields.tags);
        self.cover_image = match fields.cover_image.is_empty() {
            true => None,
            false => Some(fields.cover_image),
        };
        self.category = fields.category;
        self.read_time = fields.read_time;
        self.editor.dispatch(EditorCommand::SetContent(fields.content.to_string()));
        self.content = fields.content;
    }

    // ACCESSORS

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn read_time(&self) -> u32 {
        self.read_time
    }

    pub fn tags(&self) -> &TagInput {
        &self.tags
    }

    pub fn editor(&self) -> &ContentEditor<Box<dyn EditingSurface>> {
        &self.editor
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn pending_redirect(&self) -> Option<&Route> {
        self.redirect.as_ref().map(|r| r.route())
    }

    pub fn heading(&self) -> &str {
        match self.is_editing() {
            true => "Edit Blog Post",
            false => "Create New Blog Post",
        }
    }

    pub fn submit_label(&self) -> &str {
        match (self.is_editing(), self.is_submitting()) {
            (true, true) => "Updating...",
            (true, false) => "Update Post",
            (false, true) => "Publishing...",
            (false, false) => "Publish Post",
        }
    }

    // FIELD EDITS

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.errors.clear(FormField::Title);
    }

    pub fn set_excerpt(&mut self, excerpt: &str) {
        self.excerpt = excerpt.to_string();
        self.errors.clear(FormField::Excerpt);
    }

    /// Change event from the editing surface.
    pub fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
        self.errors.clear(FormField::Content);
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Select control value. Anything outside the category list is ignored.
    pub fn set_category_value(&mut self, value: &str) {
        match value.parse::<Category>() {
            Ok(category) => self.category = category,
            Err(_) => tracing::debug!("ignoring unknown category {:?}", value),
        }
    }

    pub fn set_read_time(&mut self, minutes: u32) {
        self.read_time = minutes.clamp(MIN_READ_TIME, MAX_READ_TIME);
    }

    /// Raw number input. Non-numeric or zero input falls back to the default.
    pub fn set_read_time_input(&mut self, input: &str) {
        match input.trim().parse::<i64>() {
            Ok(0) | Err(_) => self.read_time = self.state.envy.default_read_time(),
            Ok(minutes) => {
                self.read_time =
                    minutes.clamp(i64::from(MIN_READ_TIME), i64::from(MAX_READ_TIME)) as u32
            }
        }
    }

    pub fn upload_cover_image(&mut self, file: &ImageFile) -> Result<(), AppError> {
        self.cover_image = Some(file.to_data_uri()?);
        self.errors.clear(FormField::CoverImage);
        Ok(())
    }

    pub fn remove_cover_image(&mut self) {
        self.cover_image = None;
    }

    // TAGS

    pub fn set_current_tag(&mut self, text: &str) {
        self.tags.set_current_tag(text);
    }

    pub fn add_tag(&mut self) -> bool {
        let added = self.tags.add_tag();
        if added {
            self.errors.clear(FormField::Tags);
        }
        added
    }

    pub fn on_tag_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.add_tag(),
            _ => false,
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.remove_tag(tag);
    }

    pub fn tags_hint(&self) -> Option<&'static str> {
        self.tags.hint(self.errors.contains(FormField::Tags))
    }

    // EDITOR

    pub fn apply_editor_command(&mut self, command: EditorCommand) {
        let change = self.editor.dispatch(command);
        self.on_editor_change(change);
    }

    pub fn insert_editor_image(&mut self, file: &ImageFile) -> Result<(), AppError> {
        let change = self.editor.insert_image_file(file)?;
        self.on_editor_change(change);
        Ok(())
    }

    pub fn open_link_input(&mut self) {
        self.editor.open_link_input();
    }

    pub fn set_link_url(&mut self, url: &str) {
        self.editor.set_link_url(url);
    }

    pub fn on_link_key(&mut self, key: Key) {
        let change = self.editor.on_link_key(key);
        self.on_editor_change(change);
    }

    pub fn commit_link(&mut self) {
        let change = self.editor.commit_link();
        self.on_editor_change(change);
    }

    pub fn remove_link(&mut self) {
        let change = self.editor.remove_link();
        self.on_editor_change(change);
    }

    fn on_editor_change(&mut self, change: Option<String>) {
        if let Some(html) = change {
            self.set_content(&html);
        }
    }

    // SUBMISSION

    fn to_dto(&self) -> BlogDraftDto {
        BlogDraftDto {
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            cover_image: self.cover_image.to_owned(),
            tags: self.tags.tags().to_vec(),
            content: self.content.to_string(),
            category: self.category,
            read_time: self.read_time,
        }
    }

    /// Recomputes the whole error set. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = match self.to_dto().validate() {
            Ok(_) => FormErrors::new(),
            Err(e) => FormErrors::from(e),
        };

        self.errors.is_empty()
    }

    fn to_new_blog(&self) -> NewBlog {
        let envy = &self.state.envy;
        let dto = self.to_dto();

        NewBlog {
            title: dto.title,
            content: dto.content,
            excerpt: dto.excerpt,
            tags: dto.tags,
            cover_image: dto.cover_image.unwrap_or_default(),
            category: dto.category,
            read_time: dto.read_time,
            date: time::current_post_date(),
            author: Author {
                name: envy.author_name().to_string(),
                avatar: envy.author_avatar_url().to_string(),
            },
            likes: 0,
            comments: 0,
            comments_list: Vec::new(),
            reviews: Vec::new(),
            shares: 0,
        }
    }

    /// `Ok(None)` means the post being updated no longer exists.
    async fn save(
        store: &dyn BlogStore,
        editing_id: Option<u64>,
        blog: NewBlog,
    ) -> Result<Option<Blog>, AppError> {
        match editing_id {
            Some(id) => store.update_blog(id, blog).await,
            None => store.create_blog(blog).await.map(Some),
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Blocked;
        }

        if !self.validate() {
            let first_field = self.errors.first().unwrap_or(FormField::Title);
            tracing::debug!("blog form invalid: {:?}", self.errors.fields());
            return SubmitOutcome::Invalid { first_field };
        }

        let Some(in_flight) = InFlight::begin(&self.is_submitting) else {
            return SubmitOutcome::Blocked;
        };
        self.success_message = None;

        let blog = self.to_new_blog();
        let store = self.state.store.clone();
        let result = Self::save(store.as_ref(), self.editing_id, blog).await;

        drop(in_flight);

        match result {
            Ok(Some(blog)) => {
                let message = match self.is_editing() {
                    true => "Blog updated successfully!",
                    false => "Blog created successfully!",
                };
                self.success_message = Some(message.to_string());
                self.redirect = Some(PendingRedirect::schedule(
                    self.state.navigator.clone(),
                    Route::BlogDetail(blog.id),
                    self.state.envy.redirect_delay(),
                ));

                tracing::debug!("blog {} saved", blog.id);
                SubmitOutcome::Saved { id: blog.id }
            }
            Ok(None) => {
                tracing::debug!("blog {:?} vanished before update", self.editing_id);
                self.errors =
                    FormErrors::only(FormField::Submit, &BlogsError::BlogNotFound.value().message);
                SubmitOutcome::NotFound
            }
            Err(e) => {
                tracing::error!(%e);
                self.errors =
                    FormErrors::only(FormField::Submit, &BlogsError::SubmissionFailed.value().message);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn cancel_redirect(&mut self) {
        if let Some(mut redirect) = self.redirect.take() {
            redirect.cancel();
        }
    }

    /// Hands the scheduled navigation to the caller, e.g. to await it.
    pub fn take_redirect(&mut self) -> Option<PendingRedirect> {
        self.redirect.take()
    }
}
