//! Client-side book list filtering.
//!
//! The admin book list fetches every book and narrows it in memory; there is
//! no server-side search or pagination behind this.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::schema::BookListItem;

/// What the search query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookSearchKind {
    #[default]
    BookId,
    BookName,
    AuthorId,
    AuthorName,
}

/// Offset between a katakana code point and its hiragana counterpart.
const KATAKANA_TO_HIRAGANA: u32 = 0x60;

/// Fold `text` into a comparison key: compatibility-decomposed (so full and
/// half width forms coincide), combining marks removed, lowercased, and
/// katakana mapped onto hiragana.
fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ァ'..='ヶ' => char::from_u32(c as u32 - KATAKANA_TO_HIRAGANA).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Case-, width-, diacritic- and kana-insensitive substring match.
///
/// ```
/// use toon_core::search::is_contains;
/// assert!(is_contains("ひらがな", "カタカナとヒラガナ"));
/// assert!(is_contains("abc", "xxＡＢＣxx"));
/// assert!(!is_contains("ねこ", "いぬ"));
/// ```
pub fn is_contains(query: &str, target: &str) -> bool {
    fold(target).contains(&fold(query))
}

/// Filter `books` by `kind` and `query`.
///
/// An empty query returns every book in its original order. Id kinds match
/// exactly; name kinds use [`is_contains`] (book names also match against
/// their phonetic reading).
pub fn filter_books<'a>(
    books: &'a [BookListItem],
    kind: BookSearchKind,
    query: &str,
) -> Vec<&'a BookListItem> {
    if query.is_empty() {
        return books.iter().collect();
    }

    books
        .iter()
        .filter(|book| match kind {
            BookSearchKind::BookId => book.id.to_string() == query,
            BookSearchKind::BookName => {
                is_contains(query, &book.name) || is_contains(query, &book.name_ruby)
            }
            BookSearchKind::AuthorId => book.author.id.to_string() == query,
            BookSearchKind::AuthorName => is_contains(query, &book.author.name),
        })
        .collect()
}
