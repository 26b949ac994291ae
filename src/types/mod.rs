//! Core domain types for imgset.
//!
//! - `ImageVariation` - one physical image file and its descriptors
//! - `ImageCollection` - every variation sharing a base path

mod collection;
mod variation;

pub use collection::ImageCollection;
pub use variation::ImageVariation;
