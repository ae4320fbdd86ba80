//! Admin screen logic for books, without presentation.

pub mod book_detail;
pub mod book_edit;
pub mod book_list;
pub mod create_book;
pub mod form;
pub mod modal;
pub mod preview;

use std::future::Future;

use toon_core::schema::{BookDetail, UpdateBookRequest};
use toon_core::types::DbId;

use crate::api::images::ImageFile;
use crate::error::ClientResult;
use crate::hooks::{DataClient, NewBook};

/// The writes the book forms submit through.
pub trait BookMutations: Send + Sync {
    fn save_book(
        &self,
        id: DbId,
        input: UpdateBookRequest,
        image: Option<ImageFile>,
    ) -> impl Future<Output = ClientResult<BookDetail>> + Send;

    fn add_book(&self, book: NewBook) -> impl Future<Output = ClientResult<BookDetail>> + Send;
}

impl BookMutations for DataClient {
    fn save_book(
        &self,
        id: DbId,
        input: UpdateBookRequest,
        image: Option<ImageFile>,
    ) -> impl Future<Output = ClientResult<BookDetail>> + Send {
        self.update_book(id, input, image)
    }

    fn add_book(&self, book: NewBook) -> impl Future<Output = ClientResult<BookDetail>> + Send {
        self.create_book(book)
    }
}

/// Result of submitting a form.
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// An image probe is still running; nothing was sent.
    Validating,
    /// At least one field failed its rules; nothing was sent.
    Invalid,
    /// The server accepted the change.
    Saved(T),
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use toon_core::schema::{BookAuthor, BookDetail, ImageRef, UpdateBookRequest};
    use toon_core::types::DbId;

    use super::preview::ObjectUrlRegistry;
    use super::BookMutations;
    use crate::api::images::ImageFile;
    use crate::error::ClientResult;
    use crate::hooks::NewBook;

    pub const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    pub fn png(name: &str) -> ImageFile {
        ImageFile::new(name, PNG_HEADER.to_vec())
    }

    pub fn gif(name: &str) -> ImageFile {
        ImageFile::new(name, b"GIF89a\x01\x00\x01\x00".to_vec())
    }

    pub fn sample_book() -> BookDetail {
        BookDetail {
            description: "猫の目から見た人間社会".to_string(),
            id: DbId::new_v4(),
            name: "吾輩は猫である".to_string(),
            name_ruby: "わがはいはねこである".to_string(),
            image: ImageRef {
                alt: "表紙".to_string(),
                id: DbId::new_v4(),
            },
            author: BookAuthor {
                description: "小説家".to_string(),
                id: DbId::new_v4(),
                name: "夏目漱石".to_string(),
                image: ImageRef {
                    alt: "肖像".to_string(),
                    id: DbId::new_v4(),
                },
            },
            episodes: Vec::new(),
        }
    }

    #[derive(Debug, Default)]
    struct UrlLog {
        created: Vec<String>,
        revoked: Vec<String>,
    }

    /// Hands out `blob:` URLs and remembers what was created and revoked.
    #[derive(Debug, Clone, Default)]
    pub struct FakeRegistry(Rc<RefCell<UrlLog>>);

    impl FakeRegistry {
        pub fn created(&self) -> Vec<String> {
            self.0.borrow().created.clone()
        }

        pub fn revoked(&self) -> Vec<String> {
            self.0.borrow().revoked.clone()
        }

        /// URLs created and not yet revoked.
        pub fn live(&self) -> Vec<String> {
            let log = self.0.borrow();
            log.created
                .iter()
                .filter(|url| !log.revoked.contains(url))
                .cloned()
                .collect()
        }
    }

    impl ObjectUrlRegistry for FakeRegistry {
        fn create(&self, file: &ImageFile) -> String {
            let mut log = self.0.borrow_mut();
            let url = format!("blob:{}#{}", file.file_name, log.created.len());
            log.created.push(url.clone());
            url
        }

        fn revoke(&self, url: &str) {
            self.0.borrow_mut().revoked.push(url.to_string());
        }
    }

    /// Records every mutation and echoes the change back.
    #[derive(Default)]
    pub struct RecordingStore {
        pub saves: AtomicUsize,
        pub adds: AtomicUsize,
        pub last_update: Mutex<Option<(UpdateBookRequest, Option<ImageFile>)>>,
    }

    impl BookMutations for RecordingStore {
        async fn save_book(
            &self,
            id: DbId,
            input: UpdateBookRequest,
            image: Option<ImageFile>,
        ) -> ClientResult<BookDetail> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut book = sample_book();
            book.id = id;
            if let Some(name) = &input.name {
                book.name = name.clone();
            }
            *self.last_update.lock().unwrap() = Some((input, image));
            Ok(book)
        }

        async fn add_book(&self, new: NewBook) -> ClientResult<BookDetail> {
            self.adds.fetch_add(1, Ordering::SeqCst);
            let mut book = sample_book();
            book.name = new.name;
            book.author.id = new.author_id;
            Ok(book)
        }
    }
}
