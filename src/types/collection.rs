//! A logical responsive image: every variation sharing one base path.

use serde::Serialize;

use crate::naming::IdentifierRegistry;

use super::ImageVariation;

/// All variations discovered for one base path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCollection {
    /// Base path relative to the input root, descriptor suffix stripped.
    pub module_physical_path: String,
    /// Export name of the aggregate.
    pub module_program_safe_name: String,
    pub variations: Vec<ImageVariation>,
}

impl ImageCollection {
    /// Create an empty collection.
    pub fn new(module_physical_path: impl Into<String>, module_program_safe_name: impl Into<String>) -> Self {
        Self {
            module_physical_path: module_physical_path.into(),
            module_program_safe_name: module_program_safe_name.into(),
            variations: Vec::new(),
        }
    }

    pub fn push(&mut self, variation: ImageVariation) {
        self.variations.push(variation);
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Sort variations into canonical order.
    ///
    /// Variations with equal descriptors are ordered by physical path, so
    /// the result never depends on discovery order.
    pub fn sort(&mut self) {
        self.variations.sort_by(|a, b| {
            a.canonical_cmp(b)
                .then_with(|| a.physical_path.cmp(&b.physical_path))
        });
    }

    /// Sort, then make every export name in the module unique.
    ///
    /// The aggregate name is claimed first; variation identifiers that
    /// collide get a numeric suffix in canonical order.
    pub fn finalize(&mut self) {
        self.sort();

        let mut registry = IdentifierRegistry::new();
        self.module_program_safe_name = registry.claim(&self.module_program_safe_name);
        for variation in &mut self.variations {
            variation.identifier = registry.claim(&variation.identifier);
        }
    }
}
