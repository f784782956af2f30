use crate::collection::PresentedCollection;
use crate::error::{PresenterError, Result};
use crate::pagination::PresentedPage;
use std::sync::Arc;
use tracing::trace;
use vitrine_domain::config::PaginationConfig;
use vitrine_domain::{Model, Paginator, Record};

/// Construction hook tying a presenter type to the model it wraps.
///
/// Usually generated by `#[presenter(model = ...)]`, together with `Deref<Target = Model>`
/// which is what forwards field reads and method calls to the model.
pub trait ModelWrapper: Sized {
    type Model: Model;

    /// Wraps `model` without copying it.
    fn from_model(model: Arc<Self::Model>) -> Self;

    fn model(&self) -> &Arc<Self::Model>;
}

/// Controls how a wrapped model is shown, for one model, a collection or a page of models.
///
/// Every entry point returns the implementing type, so `UserPresenter::collection(..)`
/// yields `UserPresenter`s. Only [`Presenter::to_array`] is meant to be overridden.
pub trait Presenter: ModelWrapper {
    /// The wrapped model, identity-equal to the one the presenter was built from.
    fn get_model(&self) -> &Arc<Self::Model> {
        self.model()
    }

    /// Output shape of this presenter. Defaults to the model's own serialization.
    fn to_array(&self) -> Record {
        self.model().to_array()
    }

    /// Presents a single model.
    fn make(model: impl Into<Arc<Self::Model>>) -> Self {
        Self::from_model(model.into())
    }

    /// Presents a model that may be absent.
    ///
    /// # Errors
    /// Returns [`PresenterError::InvalidArgument`] when `model` is `None`.
    fn try_make<M>(model: Option<M>) -> Result<Self>
    where
        M: Into<Arc<Self::Model>>,
    {
        model.map(|model| Self::from_model(model.into())).ok_or_else(|| {
            PresenterError::invalid_argument("a presenter needs a model to wrap")
        })
    }

    /// Presents every model of `models`, keeping their order.
    fn collection<I>(models: I) -> PresentedCollection<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arc<Self::Model>>,
    {
        let presented: PresentedCollection<Self> =
            models.into_iter().map(Into::into).map(Self::from_model).collect();
        trace!(count = presented.len(), "presented collection");
        presented
    }

    /// Presents the current page of `paginator` with the default link configuration.
    ///
    /// # Errors
    /// Returns [`PresenterError::InvalidArgument`] if the paginator's bookkeeping is unusable.
    fn pagination<P>(paginator: &P) -> Result<PresentedPage<Self>>
    where
        P: Paginator<Model = Self::Model> + ?Sized,
    {
        Self::pagination_with(paginator, &PaginationConfig::default())
    }

    /// Presents the current page of `paginator`, rendering links as `config` describes.
    ///
    /// # Errors
    /// Returns [`PresenterError::InvalidArgument`] if the paginator's bookkeeping is unusable
    /// or `config` names a page parameter that cannot be put in a query string.
    fn pagination_with<P>(paginator: &P, config: &PaginationConfig) -> Result<PresentedPage<Self>>
    where
        P: Paginator<Model = Self::Model> + ?Sized,
    {
        PresentedPage::from_paginator(paginator, config)
    }
}
