//! Safe SQL builder: identifiers from config and a fixed allow-list only, values as parameters.

mod builder;
pub use builder::*;
