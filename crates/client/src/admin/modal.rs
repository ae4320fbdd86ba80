use toon_core::types::DbId;

/// What the book modal shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookModalState {
    #[default]
    None,
    Create,
    Detail { book_id: DbId, is_edit: bool },
}

impl BookModalState {
    pub fn open_create(&mut self) {
        *self = BookModalState::Create;
    }

    /// Show a book read-only.
    pub fn open_detail(&mut self, book_id: DbId) {
        *self = BookModalState::Detail {
            book_id,
            is_edit: false,
        };
    }

    pub fn close(&mut self) {
        *self = BookModalState::None;
    }

    /// Switch a detail view between reading and editing. No-op otherwise.
    pub fn toggle_edit(&mut self) {
        match self {
            BookModalState::Detail { is_edit, .. } => *is_edit = !*is_edit,
            BookModalState::None | BookModalState::Create => {}
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            BookModalState::None => false,
            BookModalState::Create | BookModalState::Detail { .. } => true,
        }
    }

    pub fn book_id(&self) -> Option<DbId> {
        match self {
            BookModalState::Detail { book_id, .. } => Some(*book_id),
            BookModalState::None | BookModalState::Create => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn detail_toggles_edit() {
        let id = DbId::new_v4();
        let mut modal = BookModalState::default();
        modal.open_detail(id);
        modal.toggle_edit();
        assert_eq!(modal, BookModalState::Detail { book_id: id, is_edit: true });
        modal.toggle_edit();
        assert_matches!(modal, BookModalState::Detail { is_edit: false, .. });
    }

    #[test]
    fn toggle_outside_detail_is_noop() {
        let mut modal = BookModalState::None;
        modal.toggle_edit();
        assert_eq!(modal, BookModalState::None);

        modal.open_create();
        modal.toggle_edit();
        assert_eq!(modal, BookModalState::Create);
    }

    #[test]
    fn close_from_any_state() {
        let mut modal = BookModalState::default();
        modal.open_detail(DbId::new_v4());
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.book_id(), None);
    }
}
