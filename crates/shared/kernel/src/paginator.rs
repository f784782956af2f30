use crate::error::{PresenterError, Result};
use std::sync::Arc;
use vitrine_domain::{Model, Paginator};

/// In-memory paginator for a page whose models are already loaded.
///
/// It is handed the current page's items and the size of the whole result set; it derives
/// `last_page`, `from` and `to` but never slices anything itself.
///
/// # Example
///
/// ```rust
/// use vitrine_kernel::{LengthAwarePaginator, Paginator, Record};
///
/// struct Row;
///
/// impl vitrine_kernel::domain::Model for Row {
///     fn to_array(&self) -> Record {
///         Record::new()
///     }
/// }
///
/// let page = LengthAwarePaginator::<Row>::new(vec![Row, Row], 17, 5, 4, "/rows").unwrap();
/// assert_eq!(page.last_page(), 4);
/// assert_eq!((page.from(), page.to()), (Some(16), Some(17)));
/// ```
#[derive(Debug, Clone)]
pub struct LengthAwarePaginator<M> {
    items: Vec<Arc<M>>,
    total: u64,
    per_page: u64,
    current_page: u64,
    last_page: u64,
    path: String,
}

impl<M> LengthAwarePaginator<M> {
    /// # Errors
    /// Returns [`PresenterError::InvalidArgument`] if `per_page` or `current_page` is zero,
    /// if `items` holds more than `per_page` models, or if the page would end past `total`.
    pub fn new<I>(
        items: I,
        total: u64,
        per_page: u64,
        current_page: u64,
        path: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<M>>,
    {
        if per_page == 0 {
            return Err(PresenterError::invalid_argument("per_page must be at least 1"));
        }
        if current_page == 0 {
            return Err(PresenterError::invalid_argument("current_page must be at least 1"));
        }

        let paginator = Self {
            items: items.into_iter().map(Into::into).collect(),
            total,
            per_page,
            current_page,
            last_page: total.div_ceil(per_page).max(1),
            path: path.into(),
        };

        let count = u64::try_from(paginator.items.len()).unwrap_or(u64::MAX);
        if count > per_page {
            return Err(PresenterError::invalid_argument(format!(
                "page holds {count} items but per_page is {per_page}"
            )));
        }
        if let Some(to) = paginator.last_index()
            && to > total
        {
            return Err(PresenterError::invalid_argument(format!(
                "page ends at item {to} but total is {total}"
            )));
        }

        Ok(paginator)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page
    }

    fn first_index(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        Some((self.current_page - 1).saturating_mul(self.per_page).saturating_add(1))
    }

    fn last_index(&self) -> Option<u64> {
        let count = u64::try_from(self.items.len()).unwrap_or(u64::MAX);
        self.first_index().map(|from| from.saturating_add(count - 1))
    }
}

impl<M: Model> Paginator for LengthAwarePaginator<M> {
    type Model = M;

    fn items(&self) -> Vec<Arc<M>> {
        self.items.clone()
    }

    fn current_page(&self) -> u64 {
        self.current_page
    }

    fn last_page(&self) -> u64 {
        self.last_page
    }

    fn per_page(&self) -> u64 {
        self.per_page
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn from(&self) -> Option<u64> {
        self.first_index()
    }

    fn to(&self) -> Option<u64> {
        self.last_index()
    }

    fn path(&self) -> &str {
        &self.path
    }
}
