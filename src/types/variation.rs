//! A single physical image file inside a responsive image.

use std::cmp::Ordering;

use serde::Serialize;

/// One physical asset file serving a specific width/density/art-direction
/// combination of a responsive image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVariation {
    /// Path of the source file as discovered, including the input root.
    pub physical_path: String,
    /// Program-safe export name, unique within its collection once finalized.
    pub identifier: String,
    /// The matched path text, as handed to the bundler.
    pub url: String,
    /// File extension without the dot.
    pub extension: String,
    /// Intrinsic pixel width parsed from the filename.
    pub width_descriptor: u32,
    /// Reserved. Always 1 for now.
    pub pixel_density: f64,
    /// Reserved. Always empty for now.
    pub art_direction_label: String,
}

impl ImageVariation {
    /// Compare by `(extension, width_descriptor, pixel_density, art_direction_label)`.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.extension
            .cmp(&other.extension)
            .then(self.width_descriptor.cmp(&other.width_descriptor))
            .then(self.pixel_density.total_cmp(&other.pixel_density))
            .then_with(|| self.art_direction_label.cmp(&other.art_direction_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(extension: &str, width: u32) -> ImageVariation {
        ImageVariation {
            physical_path: format!("img/a@{}w.{}", width, extension),
            identifier: format!("a{}{}", width, extension),
            url: format!("img/a@{}w.{}", width, extension),
            extension: extension.to_string(),
            width_descriptor: width,
            pixel_density: 1.0,
            art_direction_label: String::new(),
        }
    }

    #[test]
    fn test_extension_wins_over_width() {
        let png = variation("png", 100);
        let jpg = variation("jpg", 900);
        assert_eq!(jpg.canonical_cmp(&png), Ordering::Less);
    }

    #[test]
    fn test_width_is_numeric_not_lexical() {
        let small = variation("png", 90);
        let large = variation("png", 320);
        assert_eq!(small.canonical_cmp(&large), Ordering::Less);
    }

    #[test]
    fn test_density_then_label() {
        let mut a = variation("png", 320);
        let mut b = variation("png", 320);
        b.pixel_density = 2.0;
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);

        b.pixel_density = 1.0;
        a.art_direction_label = "wide".to_string();
        b.art_direction_label = "narrow".to_string();
        assert_eq!(a.canonical_cmp(&b), Ordering::Greater);
    }

    #[test]
    fn test_equal_descriptors_compare_equal() {
        let a = variation("webp", 640);
        let mut b = variation("webp", 640);
        b.identifier = "other".to_string();
        assert_eq!(a.canonical_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(variation("png", 320)).unwrap();
        assert_eq!(json["widthDescriptor"], 320);
        assert_eq!(json["physicalPath"], "img/a@320w.png");
        assert_eq!(json["artDirectionLabel"], "");
    }
}
