//! # Presenters
//!
//! A presenter wraps one model and decides how it is shown to a consumer, while every
//! field and method it does not declare itself falls through to the model.
//!
//! * [`Presenter::make`] presents one model.
//! * [`Presenter::collection`] presents an ordered sequence of models.
//! * [`Presenter::pagination`] presents one page of a [`Paginator`] as `{data, links, meta}`.
//!
//! ## Example
//! ```rust
//! use vitrine_kernel::prelude::*;
//!
//! #[derive(Debug, Model)]
//! pub struct User {
//!     pub firstname: String,
//!     pub lastname: String,
//!     pub email: String,
//! }
//!
//! impl User {
//!     pub fn fullname(&self) -> String {
//!         format!("{} {}", self.firstname, self.lastname)
//!     }
//! }
//!
//! #[presenter(model = User, impl_presenter = false)]
//! pub struct UserPresenter;
//!
//! impl Presenter for UserPresenter {
//!     fn to_array(&self) -> Record {
//!         let mut record = Record::new();
//!         record.insert("fullname".to_owned(), self.fullname().into());
//!         record.insert("email".to_owned(), self.email.clone().into());
//!         record
//!     }
//! }
//!
//! let user = User {
//!     firstname: "Jane".to_owned(),
//!     lastname: "Doe".to_owned(),
//!     email: "jane@example.com".to_owned(),
//! };
//! let presented = UserPresenter::make(user);
//!
//! assert_eq!(presented.email, "jane@example.com");
//! assert_eq!(presented.to_array()["fullname"], "Jane Doe");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use vitrine_kernel::config::load_config;
//! use vitrine_kernel::domain::config::PresenterConfig;
//!
//! let cfg: PresenterConfig = load_config(Some("vitrine.toml"))?;
//! let page = UserPresenter::pagination_with(&paginator, &cfg.pagination)?;
//! ```

pub mod collection;
pub mod config;
mod error;
pub mod pagination;
pub mod paginator;
pub mod prelude;
mod presenter;

pub use collection::PresentedCollection;
pub use error::{ErrorKind, PresenterError, PresenterErrorExt, Result};
pub use pagination::{PageLinks, PageMeta, PresentedPage};
pub use paginator::LengthAwarePaginator;
pub use presenter::{ModelWrapper, Presenter};
pub use serde;
pub use vitrine_derive::{Model, presenter, vitrine_error};
pub use vitrine_domain as domain;
pub use vitrine_domain::{Model, Paginator, Record, Value};
