//! Form for adding a book. Unlike editing, an author and a cover image
//! are required.

use toon_core::schema::BookDetail;
use toon_core::types::DbId;
use toon_core::validation::rules::{
    book_description, book_name, book_name_ruby, MSG_BOOK_AUTHOR_REQUIRED, MSG_IMAGE_REQUIRED,
};

use super::form::{BookField, FieldState, ImageProbe, ImageSlot, ProbeResult};
use super::preview::{ImagePreview, ObjectUrlRegistry};
use super::{BookMutations, SubmitOutcome};
use crate::api::images::ImageFile;
use crate::error::ClientResult;
use crate::hooks::NewBook;

#[derive(Debug)]
pub struct CreateBookForm<R: ObjectUrlRegistry> {
    name: String,
    name_ruby: String,
    description: String,
    author_id: Option<DbId>,
    image: ImageSlot,
    preview: ImagePreview<R>,
    fields: FieldState,
}

impl<R: ObjectUrlRegistry> CreateBookForm<R> {
    pub fn new(registry: R) -> Self {
        Self {
            name: String::new(),
            name_ruby: String::new(),
            description: String::new(),
            author_id: None,
            image: ImageSlot::default(),
            preview: ImagePreview::new(registry),
            fields: FieldState::default(),
        }
    }

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

    pub fn set_author(&mut self, author_id: Option<DbId>) {
        self.author_id = author_id;
        self.touch(BookField::Author);
    }

    pub fn select_image(&mut self, file: ImageFile) -> ImageProbe {
        self.preview.select(&file);
        let probe = self.image.select(file);
        self.touch(BookField::Image);
        probe
    }

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

    pub fn is_validating(&self) -> bool {
        self.image.is_probing()
    }

    pub fn error(&self, field: BookField) -> Option<&'static str> {
        self.fields.visible(field)
    }

    pub fn visible_errors(&self) -> Vec<(BookField, &'static str)> {
        self.fields.visible_errors()
    }

    /// Validate every field and, when the form is clean, create the book.
    /// The form is reset after a successful save.
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
        for field in BookField::ALL {
            self.validate_field(field);
        }

        if self.is_validating() {
            return Ok(SubmitOutcome::Validating);
        }
        let (Some(author_id), Some(image), false) = (
            self.author_id,
            self.image.file().cloned(),
            self.fields.has_errors(),
        ) else {
            return Ok(SubmitOutcome::Invalid);
        };

        let book = store
            .add_book(NewBook {
                name: self.name.clone(),
                name_ruby: self.name_ruby.clone(),
                description: self.description.clone(),
                author_id,
                image,
            })
            .await?;

        on_complete(&book);
        self.reset();
        Ok(SubmitOutcome::Saved(book))
    }

    fn reset(&mut self) {
        self.name.clear();
        self.name_ruby.clear();
        self.description.clear();
        self.author_id = None;
        self.image = ImageSlot::default();
        self.preview.clear();
        self.fields = FieldState::default();
    }

    fn touch(&mut self, field: BookField) {
        self.fields.touch(field);
        self.validate_field(field);
    }

    fn validate_field(&mut self, field: BookField) {
        let error = match field {
            BookField::Name => book_name(&self.name),
            BookField::NameRuby => book_name_ruby(&self.name_ruby),
            BookField::Description => book_description(&self.description),
            BookField::Author => self.author_id.is_none().then_some(MSG_BOOK_AUTHOR_REQUIRED),
            BookField::Image => match self.image.file() {
                None => Some(MSG_IMAGE_REQUIRED),
                Some(_) => self.image.check().error(),
            },
        };
        self.fields.set(field, error);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use assert_matches::assert_matches;
    use toon_core::validation::rules::MSG_BOOK_NAME_REQUIRED;

    use super::*;
    use crate::admin::testing::{png, FakeRegistry, RecordingStore};

    #[tokio::test]
    async fn blank_form_reports_every_required_field() {
        let store = RecordingStore::default();
        let mut form = CreateBookForm::new(FakeRegistry::default());

        let outcome = form.submit(&store, |_| {}).await.unwrap();

        assert_matches!(outcome, SubmitOutcome::Invalid);
        assert_eq!(store.adds.load(Ordering::SeqCst), 0);
        assert_eq!(form.error(BookField::Name), Some(MSG_BOOK_NAME_REQUIRED));
        assert_eq!(form.error(BookField::Author), Some(MSG_BOOK_AUTHOR_REQUIRED));
        assert_eq!(form.error(BookField::Image), Some(MSG_IMAGE_REQUIRED));
    }

    #[tokio::test]
    async fn complete_form_creates_and_resets() {
        let store = RecordingStore::default();
        let registry = FakeRegistry::default();
        let author_id = DbId::new_v4();
        let mut form = CreateBookForm::new(registry.clone());
        form.set_name("こころ");
        form.set_name_ruby("こころ");
        form.set_description("先生と私");
        form.set_author(Some(author_id));
        let probe = form.select_image(png("cover.png"));
        form.apply_probe(probe.run().await);

        let outcome = form.submit(&store, |_| {}).await.unwrap();

        assert_matches!(outcome, SubmitOutcome::Saved(book) if book.author.id == author_id);
        assert_eq!(store.adds.load(Ordering::SeqCst), 1);
        assert!(form.visible_errors().is_empty());
        assert_eq!(form.preview_url(), None);
        assert!(registry.live().is_empty());

        form.select_image(png("next.png"));
        assert_eq!(registry.live().len(), 1);
    }
}
