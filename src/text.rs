//! Text helpers for short-name (slug) handling

/// Normalize free-form text to short-name form.
///
/// Mirrors the canonicalization applied when content short-names are
/// generated: lowercase, runs of non-alphanumeric characters collapsed
/// to single hyphens, leading and trailing hyphens removed.
pub fn slugify(raw: &str) -> String {
    slug::slugify(raw)
}

/// True when `s` is a pure decimal identifier.
///
/// Leading zeros count ("07" is numeric); the empty string is not.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
