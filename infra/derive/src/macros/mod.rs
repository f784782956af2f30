mod args;
pub mod error;
pub mod model;
pub mod presenter;
