//! Paginated presentation: a page of presenters plus its links and position.

mod links;
mod meta;

pub use links::PageLinks;
pub use meta::PageMeta;

use crate::collection::PresentedCollection;
use crate::error::{PresenterError, Result};
use crate::presenter::Presenter;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};
use vitrine_domain::config::PaginationConfig;
use vitrine_domain::{Paginator, Record, Value};

/// The `{data, links, meta}` composite produced by [`Presenter::pagination`].
///
/// Computed fresh from the paginator on every call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PresentedPage<P> {
    data: PresentedCollection<P>,
    links: PageLinks,
    meta: PageMeta,
}

impl<P: Presenter> PresentedPage<P> {
    pub(crate) fn from_paginator<G>(paginator: &G, config: &PaginationConfig) -> Result<Self>
    where
        G: Paginator<Model = P::Model> + ?Sized,
    {
        if !config.has_valid_page_name() {
            return Err(PresenterError::invalid_argument(format!(
                "page parameter name {:?} cannot be used in a query string",
                config.page_name
            )));
        }
        if let Err(err) = validate(paginator) {
            warn!(error = %err, path = paginator.path(), "refusing to present paginator");
            return Err(err);
        }

        let meta = PageMeta::of(paginator);
        let links =
            PageLinks::new(&meta.path, &config.page_name, meta.current_page, meta.last_page);
        let data = P::collection(paginator.items());

        debug!(
            current_page = meta.current_page,
            last_page = meta.last_page,
            items = data.len(),
            "presented page"
        );

        Ok(Self { data, links, meta })
    }

    /// Serializes to exactly `data`, `links` and `meta`, in that order.
    #[must_use]
    pub fn to_array(&self) -> Record {
        let data = self.data.to_array().into_iter().map(Value::Object).collect();

        let mut record = Record::new();
        record.insert("data".to_owned(), Value::Array(data));
        record.insert("links".to_owned(), Value::Object(self.links.to_array()));
        record.insert("meta".to_owned(), Value::Object(self.meta.to_array()));
        record
    }
}

impl<P> PresentedPage<P> {
    #[must_use]
    pub const fn data(&self) -> &PresentedCollection<P> {
        &self.data
    }

    #[must_use]
    pub const fn links(&self) -> &PageLinks {
        &self.links
    }

    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    #[must_use]
    pub fn into_parts(self) -> (PresentedCollection<P>, PageLinks, PageMeta) {
        (self.data, self.links, self.meta)
    }

    #[must_use]
    pub const fn on_first_page(&self) -> bool {
        self.meta.current_page <= 1
    }

    #[must_use]
    pub const fn has_more_pages(&self) -> bool {
        self.meta.current_page < self.meta.last_page
    }
}

impl<P: Presenter> Serialize for PresentedPage<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PresentedPage", 3)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("links", &self.links)?;
        state.serialize_field("meta", &self.meta)?;
        state.end()
    }
}

fn validate<G: Paginator + ?Sized>(paginator: &G) -> Result<()> {
    let invalid = |message: String| Err(PresenterError::invalid_argument(message));

    if paginator.path().is_empty() {
        return invalid("paginator path is empty".to_owned());
    }
    if paginator.current_page() == 0 {
        return invalid("current_page must be at least 1".to_owned());
    }
    if paginator.last_page() == 0 {
        return invalid("last_page must be at least 1".to_owned());
    }
    if paginator.per_page() == 0 {
        return invalid("per_page must be at least 1".to_owned());
    }
    match (paginator.from(), paginator.to()) {
        (Some(from), Some(to)) if from > to => {
            invalid(format!("from ({from}) is past to ({to})"))
        }
        (Some(_), None) | (None, Some(_)) => {
            invalid("from and to must both be present or both be absent".to_owned())
        }
        _ => Ok(()),
    }
}
