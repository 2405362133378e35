//! HTTP handlers for the catalog endpoints.

pub mod catalog;
pub use catalog::*;
