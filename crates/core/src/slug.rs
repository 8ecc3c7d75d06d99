//! Slug normalisation for natural keys derived from display names.

use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters outside `[a-z0-9]`.
static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("valid regex"));

/// Derive a URL-safe slug from a human-readable name.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single hyphen and trims hyphens from both ends. Accented letters are
/// not transliterated, so they count as separators.
///
/// Distinct names can normalise to the same slug; callers keyed on the
/// slug get last-write-wins behaviour.
///
/// # Examples
///
/// ```
/// use laberinto_core::slug::slugify;
///
/// assert_eq!(slugify("Cata Premium"), "cata-premium");
/// assert_eq!(slugify("  Gran Reserva 2021!! "), "gran-reserva-2021");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
