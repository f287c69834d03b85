//! Contents.json data model for Apple's Asset Catalog format.
//!
//! The RayLink icon set carries a single universal 1024x1024 entry, so this
//! model keeps only the fields that document uses. Field declaration order
//! matches the key order of the serialized document.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries for the icon set.
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information.
    pub info: Info,
}

/// A single image entry within the icon set.
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// Image filename inside the appiconset directory.
    pub filename: String,

    /// Device idiom, e.g. "universal".
    pub idiom: String,

    /// Target platform, e.g. "ios".
    pub platform: String,

    /// Size in points, e.g. "1024x1024".
    pub size: String,
}

/// Versioning and authorship information for the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The tool that authored the catalog. Xcode expects "xcode" here for
    /// catalogs it should treat as its own.
    pub author: String,

    /// The format version of the asset catalog (typically 1).
    pub version: u8,
}

impl ContentsFile {
    /// Creates an empty Contents.json structure with the specified author.
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { author, version: 1 },
        }
    }

    /// Adds an image entry to the contents file.
    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates a new image entry with all four catalog fields.
    pub fn new(filename: String, idiom: String, platform: String, size: String) -> Self {
        Self {
            filename,
            idiom,
            platform,
            size,
        }
    }
}

/// Writes `contents` to `Contents.json` in the given directory.
///
/// The file is replaced wholesale; prior content is never merged.
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<()> {
    let json =
        serde_json::to_string_pretty(contents).context("Failed to serialize Contents.json")?;

    std::fs::write(dir.join(crate::CONTENTS_FILENAME), json)
        .context("Failed to write Contents.json file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_icon_contents() -> ContentsFile {
        let mut contents = ContentsFile::new("xcode".to_string());
        contents.add_image(ImageEntry::new(
            "AppIcon.png".to_string(),
            "universal".to_string(),
            "ios".to_string(),
            "1024x1024".to_string(),
        ));
        contents
    }

    #[test]
    fn test_contents_file_creation() {
        let contents = ContentsFile::new("xcode".to_string());
        assert_eq!(contents.info.author, "xcode");
        assert_eq!(contents.info.version, 1);
        assert!(contents.images.is_empty());
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&app_icon_contents()).unwrap();

        // Keys must appear in the order Xcode writes them.
        let positions: Vec<usize> = ["filename", "idiom", "platform", "size", "author", "version"]
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).expect(key))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn test_app_icon_document_shape() {
        let json = serde_json::to_string_pretty(&app_icon_contents()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let images = parsed["images"].as_array().unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0]["filename"], "AppIcon.png");
        assert_eq!(images[0]["idiom"], "universal");
        assert_eq!(images[0]["platform"], "ios");
        assert_eq!(images[0]["size"], "1024x1024");
        assert_eq!(parsed["info"]["author"], "xcode");
        assert_eq!(parsed["info"]["version"], 1);
    }

    #[test]
    fn test_write_contents_json_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let contents_path = temp_dir.path().join("Contents.json");

        // Pre-existing content must not survive the write.
        std::fs::write(&contents_path, "{\"images\":[{\"filename\":\"old.png\"}]}").unwrap();

        write_contents_json(temp_dir.path(), &app_icon_contents()).unwrap();

        let written = std::fs::read_to_string(&contents_path).unwrap();
        assert!(written.contains("AppIcon.png"));
        assert!(!written.contains("old.png"));
    }
}
