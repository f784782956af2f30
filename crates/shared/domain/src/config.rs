use serde::Deserialize;

/// Punctuation allowed in a page parameter name besides ASCII letters and digits.
const UNRESERVED_PUNCTUATION: &[char] = &['-', '.', '_', '~'];

/// Top-level presenter configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub pagination: PaginationConfig,
}

/// How paginated presentation renders its links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Query parameter carrying the page number (`?page=2`).
    pub page_name: String,
}

impl PaginationConfig {
    /// Whether `page_name` can be embedded in a query string as-is.
    ///
    /// Only URL-unreserved characters qualify: ASCII letters and digits plus `-`, `.`, `_`
    /// and `~`.
    #[must_use]
    pub fn has_valid_page_name(&self) -> bool {
        !self.page_name.is_empty()
            && self
                .page_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || UNRESERVED_PUNCTUATION.contains(&c))
    }
}

// --- Default ---

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_name: "page".to_owned() }
    }
}
