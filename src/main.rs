use anyhow::Result;
use std::path::Path;

#[cfg(feature = "render")]
fn main() -> Result<()> {
    appicon_gen::icon_gen::generate_app_icon(Path::new(appicon_gen::APPICONSET_DIR))
}

#[cfg(not(feature = "render"))]
fn main() -> Result<()> {
    println!("⚠ Renderer not compiled in. Using fallback method...");
    let icon_path = Path::new(appicon_gen::APPICONSET_DIR).join(appicon_gen::ICON_FILENAME);
    appicon_gen::placeholder::write_placeholder(&icon_path)
}
