//! The shared type declarations every generated module imports.

/// File name of the shared declaration module, under the output root.
pub const DECLARATION_FILENAME: &str = "interface.ts";

const DECLARATIONS: &str = r#"/**
 * One responsive image: every variation of the same picture, ordered by
 * extension, width, density and art-direction label.
 */
export type ResponsiveImage = ImageVariation[]

export interface ImageVariation {
  /**
   * Path of the source file as discovered, including the input folder.
   */
  physicalPath: string

  /**
   * Program-safe name of this variation, unique within its module.
   */
  identifier: string

  /**
   * Effective URL of the image after the bundler processed it.
   * If the bundler inlines the file, this is the data URI instead.
   */
  url: string

  /**
   * Intended purpose of the image (crop or composition).
   * Reserved: always empty for now.
   */
  artDirectionLabel: string

  /**
   * Intrinsic width of the image in pixels, taken from the file name.
   */
  widthDescriptor: number

  /**
   * Display density this image is intended for.
   * Reserved: always 1 for now.
   */
  pixelDensity: number

  /**
   * File extension, useful to filter by format.
   */
  extension: string
}
"#;

/// Render the shared declaration module.
pub fn render_declarations() -> &'static str {
    DECLARATIONS
}
