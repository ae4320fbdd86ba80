//! Rule predicates and the messages shown when they fail.

use std::sync::LazyLock;

use regex::Regex;

/// Phonetic readings (`nameRuby`) must consist only of hiragana. Characters
/// shared with hiragana through script extensions (the prolonged sound
/// mark `ー`, for instance) are accepted.
pub static HIRAGANA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Script_Extensions=Hiragana}]+$").expect("hiragana pattern is valid")
});

pub const MSG_BOOK_NAME_REQUIRED: &str = "作品名を入力してください";
pub const MSG_BOOK_RUBY_REQUIRED: &str = "作品名のふりがなを入力してください";
pub const MSG_BOOK_RUBY_HIRAGANA: &str = "作品名のふりがなはひらがなで入力してください";
pub const MSG_BOOK_DESCRIPTION_REQUIRED: &str = "概要を入力してください";
pub const MSG_BOOK_AUTHOR_REQUIRED: &str = "作者を選択してください";
pub const MSG_IMAGE_REQUIRED: &str = "画像を選択してください";
pub const MSG_IMAGE_UNSUPPORTED: &str = "対応していない画像形式です";

pub const MSG_AUTHOR_NAME_REQUIRED: &str = "作者名を入力してください";
pub const MSG_AUTHOR_DESCRIPTION_REQUIRED: &str = "プロフィールを入力してください";

/// Whether `value` is a non-empty hiragana-only string.
pub fn is_hiragana(value: &str) -> bool {
    HIRAGANA_RE.is_match(value)
}

/// `Some(message)` when a required text field is empty.
pub fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

pub fn book_name(value: &str) -> Option<&'static str> {
    required(value, MSG_BOOK_NAME_REQUIRED)
}

pub fn book_description(value: &str) -> Option<&'static str> {
    required(value, MSG_BOOK_DESCRIPTION_REQUIRED)
}

/// Required first, then the hiragana pattern.
pub fn book_name_ruby(value: &str) -> Option<&'static str> {
    required(value, MSG_BOOK_RUBY_REQUIRED)
        .or_else(|| (!is_hiragana(value)).then_some(MSG_BOOK_RUBY_HIRAGANA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiragana_accepts_plain_hiragana() {
        assert!(is_hiragana("ひらがな"));
        assert!(is_hiragana("らーめん"));
    }

    #[test]
    fn hiragana_rejects_latin_katakana_and_kanji() {
        assert!(!is_hiragana("abc"));
        assert!(!is_hiragana("カタカナ"));
        assert!(!is_hiragana("漢字"));
        assert!(!is_hiragana("ひら がな"));
        assert!(!is_hiragana(""));
    }

    #[test]
    fn ruby_reports_required_before_pattern() {
        assert_eq!(book_name_ruby(""), Some(MSG_BOOK_RUBY_REQUIRED));
        assert_eq!(book_name_ruby("abc"), Some(MSG_BOOK_RUBY_HIRAGANA));
        assert_eq!(book_name_ruby("さくひん"), None);
    }

    #[test]
    fn required_fields() {
        assert_eq!(book_name(""), Some(MSG_BOOK_NAME_REQUIRED));
        assert_eq!(book_name("作品"), None);
        assert_eq!(book_description(""), Some(MSG_BOOK_DESCRIPTION_REQUIRED));
    }
}
