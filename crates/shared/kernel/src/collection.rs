use crate::presenter::Presenter;
use serde::{Serialize, Serializer};
use std::ops::Deref;
use vitrine_domain::Record;

/// Ordered presenters produced by [`Presenter::collection`], one per input model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedCollection<P> {
    items: Vec<P>,
}

impl<P> PresentedCollection<P> {
    #[must_use]
    pub fn into_inner(self) -> Vec<P> {
        self.items
    }
}

impl<P: Presenter> PresentedCollection<P> {
    /// Each presenter's `to_array`, in order.
    #[must_use]
    pub fn to_array(&self) -> Vec<Record> {
        self.items.iter().map(Presenter::to_array).collect()
    }
}

impl<P> Deref for PresentedCollection<P> {
    type Target = [P];

    fn deref(&self) -> &[P] {
        &self.items
    }
}

impl<P> FromIterator<P> for PresentedCollection<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<P> IntoIterator for PresentedCollection<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PresentedCollection<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<P: Presenter> Serialize for PresentedCollection<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter().map(Presenter::to_array))
    }
}
