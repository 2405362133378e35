//! Catalog service: query orchestration and row presentation.

mod catalog;
pub mod presenter;
pub use catalog::{CatalogService, ListParams};
pub use presenter::{present_car, PresentedCar};
