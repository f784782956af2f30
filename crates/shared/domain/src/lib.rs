//! # Domain Contracts
//!
//! This crate contains the boundary types presenters consume: the [`Model`] capability,
//! the ordered [`Record`] a model serializes into, the [`Paginator`] capability and the
//! configuration shapes. Keep it lean: no I/O and no presentation logic.

pub mod config;
pub mod model;
pub mod paginator;

pub use model::{Model, Record};
pub use paginator::Paginator;
pub use serde_json::{Map, Value};
