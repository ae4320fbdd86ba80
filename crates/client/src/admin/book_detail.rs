//! Book modal in detail mode: read-only view and the edit form.

use toon_core::schema::BookDetail;

use super::book_edit::BookEditForm;
use super::modal::BookModalState;
use super::preview::ObjectUrlRegistry;
use super::{BookMutations, SubmitOutcome};
use crate::error::ClientResult;

/// `registry` issues the preview URLs of each edit session's form.
#[derive(Debug)]
pub struct BookDetailPanel<R: ObjectUrlRegistry + Clone> {
    book: BookDetail,
    registry: R,
    form: Option<BookEditForm<R>>,
}

impl<R: ObjectUrlRegistry + Clone> BookDetailPanel<R> {
    pub fn new(book: BookDetail, registry: R) -> Self {
        Self {
            book,
            registry,
            form: None,
        }
    }

    pub fn book(&self) -> &BookDetail {
        &self.book
    }

    pub fn form(&self) -> Option<&BookEditForm<R>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut BookEditForm<R>> {
        self.form.as_mut()
    }

    /// Follow the modal into or out of edit mode.
    pub fn sync(&mut self, modal: &BookModalState) {
        match modal {
            BookModalState::Detail { is_edit: true, .. } => {
                if self.form.is_none() {
                    self.form = Some(BookEditForm::from_book(&self.book, self.registry.clone()));
                }
            }
            BookModalState::Detail { is_edit: false, .. }
            | BookModalState::None
            | BookModalState::Create => self.form = None,
        }
    }

    /// Submit the edit form. On success the modal goes back to the
    /// read-only view showing the saved book.
    pub async fn save<M: BookMutations>(
        &mut self,
        modal: &mut BookModalState,
        store: &M,
    ) -> ClientResult<SubmitOutcome<()>> {
        let Some(form) = self.form.as_mut() else {
            return Ok(SubmitOutcome::Invalid);
        };

        match form.submit(store, |_| modal.toggle_edit()).await? {
            SubmitOutcome::Saved(book) => {
                self.book = book;
                self.sync(modal);
                Ok(SubmitOutcome::Saved(()))
            }
            SubmitOutcome::Validating => Ok(SubmitOutcome::Validating),
            SubmitOutcome::Invalid => Ok(SubmitOutcome::Invalid),
        }
    }
}
