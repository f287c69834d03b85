#![cfg(feature = "render")]

use appicon_gen::icon_gen::{self, ICON_SIZE};
use serde_json::json;
use tempfile::TempDir;

/// Runs the full generator against a temp directory and checks both outputs:
/// a decodable 1024x1024 RGBA PNG and the exact single-entry catalog document.
#[test]
fn test_generates_icon_and_contents_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("AppIcon.appiconset");

    icon_gen::generate_app_icon(&out_dir).expect("generator failed");

    let icon_path = out_dir.join("AppIcon.png");
    assert!(icon_path.exists(), "AppIcon.png should exist");

    let img = image::open(&icon_path).expect("AppIcon.png should decode");
    assert_eq!(img.width(), ICON_SIZE);
    assert_eq!(img.height(), ICON_SIZE);
    assert!(img.color().has_alpha(), "icon should carry an alpha channel");

    let contents: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out_dir.join("Contents.json"))
            .expect("Contents.json should exist"),
    )
    .expect("Contents.json should contain valid JSON");

    assert_eq!(
        contents,
        json!({
            "images": [
                {
                    "filename": "AppIcon.png",
                    "idiom": "universal",
                    "platform": "ios",
                    "size": "1024x1024"
                }
            ],
            "info": {
                "author": "xcode",
                "version": 1
            }
        })
    );
}

/// The metadata document is a pure function of constants: two runs must
/// produce byte-identical Contents.json files.
#[test]
fn test_contents_json_is_stable_across_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().to_path_buf();

    icon_gen::generate_app_icon(&out_dir).expect("first run failed");
    let first = std::fs::read(out_dir.join("Contents.json")).unwrap();

    icon_gen::generate_app_icon(&out_dir).expect("second run failed");
    let second = std::fs::read(out_dir.join("Contents.json")).unwrap();

    assert_eq!(first, second);
}
