//! Degraded-mode placeholder for builds without the rendering capability.
//!
//! The only output on this path is the embedded 1x1 bitmap; the asset
//! catalog descriptor is deliberately left untouched.

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use std::path::Path;

/// 1x1 blue PNG, base64-encoded.
const FALLBACK_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Decodes the embedded placeholder bitmap.
pub fn fallback_png_bytes() -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(FALLBACK_PNG_BASE64)
        .context("Failed to decode embedded placeholder PNG")
}

/// Writes the placeholder bitmap verbatim to `path`, creating parent
/// directories as needed.
pub fn write_placeholder(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Can't create icon output directory")?;
    }

    let bytes = fallback_png_bytes()?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write placeholder icon to {}", path.display()))?;

    println!("✓ Created placeholder app icon: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_bytes_are_a_png() {
        let bytes = fallback_png_bytes().unwrap();
        assert_eq!(bytes.len(), 70);
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_fallback_bytes_are_stable() {
        assert_eq!(fallback_png_bytes().unwrap(), fallback_png_bytes().unwrap());
    }
}
