use serde_json::{Map, Value};

/// Ordered key/value mapping produced by [`Model::to_array`].
///
/// Keys keep insertion order, so a record serializes exactly in the order it was built.
pub type Record = Map<String, Value>;

/// A domain object that knows its own canonical serialization.
///
/// Attribute reads and method calls are ordinary Rust field and method access on the
/// implementing type; presenters reach them through `Deref`.
pub trait Model {
    /// Returns the canonical serialization of the model.
    fn to_array(&self) -> Record;
}

impl<M: Model + ?Sized> Model for &M {
    fn to_array(&self) -> Record {
        (**self).to_array()
    }
}

impl<M: Model + ?Sized> Model for Box<M> {
    fn to_array(&self) -> Record {
        (**self).to_array()
    }
}

impl<M: Model + ?Sized> Model for std::sync::Arc<M> {
    fn to_array(&self) -> Record {
        (**self).to_array()
    }
}
