//! Build-time asset generator for the RayLink iOS app icon.
//!
//! Renders the 1024x1024 `AppIcon.png` (aurora gradient background, radial
//! highlight, glowing "R" glyph) into the app's `AppIcon.appiconset`
//! directory and rewrites the asset catalog `Contents.json` beside it.
//!
//! Built without the `render` feature, only [`placeholder`] remains and the
//! binary writes the embedded 1x1 bitmap instead.

pub mod contents_json;
#[cfg(feature = "render")]
pub mod icon_gen;
pub mod placeholder;

/// Asset catalog directory the generator writes into, relative to the
/// repository root. Not configurable.
pub const APPICONSET_DIR: &str = "RayLink/Assets.xcassets/AppIcon.appiconset";

/// Primary image output inside [`APPICONSET_DIR`].
pub const ICON_FILENAME: &str = "AppIcon.png";

/// Asset catalog descriptor inside [`APPICONSET_DIR`].
pub const CONTENTS_FILENAME: &str = "Contents.json";
