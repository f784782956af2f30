use crate::model::Model;
use std::sync::Arc;

/// One page of models plus the bookkeeping needed to describe its position.
///
/// Implementations own the page-slicing logic; consumers only read.
/// `from` and `to` are 1-based inclusive bounds of the page's items within the whole
/// result set, and are both `None` when the page is empty.
pub trait Paginator {
    type Model: Model;

    /// Models on the current page, in order.
    fn items(&self) -> Vec<Arc<Self::Model>>;

    fn current_page(&self) -> u64;

    fn last_page(&self) -> u64;

    fn per_page(&self) -> u64;

    fn total(&self) -> u64;

    fn from(&self) -> Option<u64>;

    fn to(&self) -> Option<u64>;

    /// Base URL of the paginated resource, without the page parameter.
    fn path(&self) -> &str;
}

impl<P: Paginator + ?Sized> Paginator for &P {
    type Model = P::Model;

    fn items(&self) -> Vec<Arc<Self::Model>> {
        (**self).items()
    }

    fn current_page(&self) -> u64 {
        (**self).current_page()
    }

    fn last_page(&self) -> u64 {
        (**self).last_page()
    }

    fn per_page(&self) -> u64 {
        (**self).per_page()
    }

    fn total(&self) -> u64 {
        (**self).total()
    }

    fn from(&self) -> Option<u64> {
        (**self).from()
    }

    fn to(&self) -> Option<u64> {
        (**self).to()
    }

    fn path(&self) -> &str {
        (**self).path()
    }
}
