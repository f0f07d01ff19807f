use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Category path segment derived from a display title.
///
/// Lowercases the title and collapses each whitespace run into one `-`.
/// Punctuation is kept as-is, so `"TVs & Home Entertainment"` becomes
/// `"tvs-&-home-entertainment"`.
#[must_use]
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

/// Route for a category landing page.
#[must_use]
pub fn category_href(slug: &str) -> String {
    format!("/category/{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_lowercases() {
        assert_eq!(slugify("Gaming"), "gaming");
        assert_eq!(slugify("Computers & Laptops"), "computers-&-laptops");
        assert_eq!(slugify("Wearable   Technology"), "wearable-technology");
    }

    #[test]
    fn href_prefixes_category_path() {
        assert_eq!(category_href("smart-home"), "/category/smart-home");
    }
}
