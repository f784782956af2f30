//! Everything needed to declare and use presenters.

pub use crate::collection::PresentedCollection;
pub use crate::error::{ErrorKind, PresenterError, PresenterErrorExt};
pub use crate::pagination::{PageLinks, PageMeta, PresentedPage};
pub use crate::paginator::LengthAwarePaginator;
pub use crate::presenter::{ModelWrapper, Presenter};
pub use vitrine_derive::{Model, presenter};
pub use vitrine_domain::config::{PaginationConfig, PresenterConfig};
pub use vitrine_domain::{Model, Paginator, Record, Value};
