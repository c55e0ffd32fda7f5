//! Text comparison helpers shared by the view pipelines

use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Comparison key for display text: lowercase, NFKD, combining marks dropped
///
/// "Café", "Cafe\u{301}" and "CAFE" all fold to "cafe".
#[must_use]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Locale-style comparison of display text
///
/// Folded keys order first, so "apple" < "Banana" and "Élan" < "Zinc".
/// The NFC form of the exact text breaks the remaining ties, which keeps
/// case variants apart while canonically equal spellings compare equal.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.nfc().cmp(b.nfc()))
}

/// Substring test on folded text; both sides are folded
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}
