//! Edit form for an existing book.

use toon_core::schema::{BookDetail, UpdateBookRequest};
use toon_core::types::DbId;
use toon_core::validation::rules::{book_description, book_name, book_name_ruby};

use super::form::{BookField, FieldState, ImageCheck, ImageProbe, ImageSlot, ProbeResult};
use super::preview::{ImagePreview, ObjectUrlRegistry};
use super::{BookMutations, SubmitOutcome};
use crate::api::images::ImageFile;
use crate::error::ClientResult;

/// Dropping the form revokes the preview of a picked cover.
#[derive(Debug)]
pub struct BookEditForm<R: ObjectUrlRegistry> {
    id: DbId,
    name: String,
    name_ruby: String,
    description: String,
    image: ImageSlot,
    preview: ImagePreview<R>,
    fields: FieldState,
}

impl<R: ObjectUrlRegistry> BookEditForm<R> {
    /// Start editing from the current values of `book`. Keeping the
    /// existing cover needs no image.
    pub fn from_book(book: &BookDetail, registry: R) -> Self {
        Self {
            id: book.id,
            name: book.name.clone(),
            name_ruby: book.name_ruby.clone(),
            description: book.description.clone(),
            image: ImageSlot::default(),
            preview: ImagePreview::new(registry),
            fields: FieldState::default(),
        }
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_ruby(&self) -> &str {
        &self.name_ruby
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.file()
    }

    /// URL showing the picked cover, if one is picked.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview.url()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.touch(BookField::Name);
    }

    pub fn set_name_ruby(&mut self, value: impl Into<String>) {
        self.name_ruby = value.into();
        self.touch(BookField::NameRuby);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.touch(BookField::Description);
    }

    /// Pick a new cover. The returned probe must be run and its result
    /// passed to [`apply_probe`](Self::apply_probe).
    pub fn select_image(&mut self, file: ImageFile) -> ImageProbe {
        self.preview.select(&file);
        let probe = self.image.select(file);
        self.touch(BookField::Image);
        probe
    }

    /// Go back to the existing cover.
    pub fn clear_image(&mut self) {
        self.preview.clear();
        self.image.clear();
        self.touch(BookField::Image);
    }

    pub fn apply_probe(&mut self, result: ProbeResult) {
        if self.image.apply(result) {
            self.validate_field(BookField::Image);
        }
    }

    pub fn blur(&mut self, field: BookField) {
        self.touch(field);
    }

    /// True while an image format check is running.
    pub fn is_validating(&self) -> bool {
        self.image.is_probing()
    }

    pub fn image_check(&self) -> ImageCheck {
        self.image.check()
    }

    pub fn error(&self, field: BookField) -> Option<&'static str> {
        self.fields.visible(field)
    }

    pub fn visible_errors(&self) -> Vec<(BookField, &'static str)> {
        self.fields.visible_errors()
    }

    /// Validate every field and, when the form is clean, patch the book.
    ///
    /// `on_complete` runs once with the saved book. Nothing is sent while
    /// an image probe is running or while any field has an error.
    pub async fn submit<M, F>(
        &mut self,
        store: &M,
        on_complete: F,
    ) -> ClientResult<SubmitOutcome<BookDetail>>
    where
        M: BookMutations,
        F: FnOnce(&BookDetail),
    {
        self.fields.touch_all();
        self.validate_all();

        if self.is_validating() {
            return Ok(SubmitOutcome::Validating);
        }
        if self.fields.has_errors() {
            tracing::debug!(book_id = %self.id, errors = ?self.fields.visible_errors(), "Book edit rejected");
            return Ok(SubmitOutcome::Invalid);
        }

        let input = UpdateBookRequest {
            name: Some(self.name.clone()),
            name_ruby: Some(self.name_ruby.clone()),
            description: Some(self.description.clone()),
            author_id: None,
            image_id: None,
        };
        let book = store
            .save_book(self.id, input, self.image.file().cloned())
            .await?;

        on_complete(&book);
        Ok(SubmitOutcome::Saved(book))
    }

    fn touch(&mut self, field: BookField) {
        self.fields.touch(field);
        self.validate_field(field);
    }

    fn validate_all(&mut self) {
        for field in BookField::ALL {
            self.validate_field(field);
        }
    }

    fn validate_field(&mut self, field: BookField) {
        let error = match field {
            BookField::Name => book_name(&self.name),
            BookField::NameRuby => book_name_ruby(&self.name_ruby),
            BookField::Description => book_description(&self.description),
            BookField::Image => self.image.check().error(),
            BookField::Author => None,
        };
        self.fields.set(field, error);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use assert_matches::assert_matches;
    use toon_core::validation::rules::{
        MSG_BOOK_NAME_REQUIRED, MSG_BOOK_RUBY_HIRAGANA, MSG_IMAGE_UNSUPPORTED,
    };

    use super::*;
    use crate::admin::testing::{gif, png, sample_book, FakeRegistry, RecordingStore};

    fn edit_form() -> BookEditForm<FakeRegistry> {
        BookEditForm::from_book(&sample_book(), FakeRegistry::default())
    }

    #[tokio::test]
    async fn empty_name_blocks_update() {
        let store = RecordingStore::default();
        let mut form = edit_form();
        form.set_name("");

        let mut completed = false;
        let outcome = form.submit(&store, |_| completed = true).await.unwrap();

        assert_matches!(outcome, SubmitOutcome::Invalid);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
        assert!(!completed);
        assert_eq!(form.error(BookField::Name), Some(MSG_BOOK_NAME_REQUIRED));
    }

    #[tokio::test]
    async fn latin_ruby_shows_hiragana_message() {
        let store = RecordingStore::default();
        let mut form = edit_form();
        form.set_name_ruby("abc");
        assert_eq!(form.error(BookField::NameRuby), Some(MSG_BOOK_RUBY_HIRAGANA));

        let outcome = form.submit(&store, |_| {}).await.unwrap();
        assert_matches!(outcome, SubmitOutcome::Invalid);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn pending_probe_blocks_submit() {
        let store = RecordingStore::default();
        let mut form = edit_form();
        let probe = form.select_image(png("cover.png"));
        assert!(form.is_validating());

        let outcome = form.submit(&store, |_| {}).await.unwrap();
        assert_matches!(outcome, SubmitOutcome::Validating);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);

        form.apply_probe(probe.run().await);
        assert!(!form.is_validating());
        let outcome = form.submit(&store, |_| {}).await.unwrap();
        assert_matches!(outcome, SubmitOutcome::Saved(_));

        let last = store.last_update.lock().unwrap();
        let (_, image) = last.as_ref().unwrap();
        assert_eq!(image.as_ref().map(|f| f.file_name.as_str()), Some("cover.png"));
    }

    #[tokio::test]
    async fn unsupported_image_is_an_error() {
        let store = RecordingStore::default();
        let mut form = edit_form();
        let probe = form.select_image(gif("cover.gif"));
        form.apply_probe(probe.run().await);

        assert_eq!(form.error(BookField::Image), Some(MSG_IMAGE_UNSUPPORTED));
        let outcome = form.submit(&store, |_| {}).await.unwrap();
        assert_matches!(outcome, SubmitOutcome::Invalid);

        form.clear_image();
        assert_eq!(form.error(BookField::Image), None);
    }

    #[tokio::test]
    async fn valid_submit_calls_update_once_and_completes() {
        let store = RecordingStore::default();
        let book = sample_book();
        let mut form = BookEditForm::from_book(&book, FakeRegistry::default());
        form.set_name("こころ");
        form.set_name_ruby("こころ");

        let mut completed_with = None;
        let outcome = form
            .submit(&store, |saved| completed_with = Some(saved.name.clone()))
            .await
            .unwrap();

        assert_matches!(outcome, SubmitOutcome::Saved(saved) if saved.id == book.id);
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
        assert_eq!(completed_with.as_deref(), Some("こころ"));
        assert!(form.visible_errors().is_empty());
    }

    #[tokio::test]
    async fn picking_another_cover_revokes_the_previous_preview() {
        let registry = FakeRegistry::default();
        let mut form = BookEditForm::from_book(&sample_book(), registry.clone());

        let probe = form.select_image(png("first.png"));
        form.apply_probe(probe.run().await);
        let first = form.preview_url().unwrap().to_string();

        let probe = form.select_image(png("second.png"));
        form.apply_probe(probe.run().await);
        let second = form.preview_url().unwrap().to_string();

        assert_ne!(first, second);
        assert_eq!(registry.revoked(), [first]);
        assert_eq!(registry.live(), [second]);
    }

    #[test]
    fn clearing_the_cover_revokes_its_preview() {
        let registry = FakeRegistry::default();
        let mut form = BookEditForm::from_book(&sample_book(), registry.clone());
        form.select_image(png("cover.png"));
        assert!(form.preview_url().is_some());

        form.clear_image();

        assert_eq!(form.preview_url(), None);
        assert!(registry.live().is_empty());
        assert_eq!(registry.revoked(), registry.created());
    }

    #[test]
    fn dropping_the_form_revokes_its_preview() {
        let registry = FakeRegistry::default();
        let mut form = BookEditForm::from_book(&sample_book(), registry.clone());
        form.select_image(png("cover.png"));
        assert_eq!(registry.live().len(), 1);

        drop(form);

        assert!(registry.live().is_empty());
    }
}
