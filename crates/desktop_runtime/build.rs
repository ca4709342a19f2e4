use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WindowSize {
    width_percent: f64,
    height_percent: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ResponsiveSize {
    normal: WindowSize,
    narrow: WindowSize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SizeBounds {
    min: WindowSize,
    max: ResponsiveSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    schema_version: u32,
    app_id: String,
    title: String,
    label: String,
    icon: String,
    default_size: ResponsiveSize,
    maximized_size: ResponsiveSize,
    bounds: SizeBounds,
}

// Declaration order is the active-application priority order.
fn window_manifest_paths(root: &Path) -> Vec<PathBuf> {
    ["terminal", "document_viewer"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("window.manifest.toml")
        })
        .collect()
}

fn check_within(path: &Path, what: &str, size: WindowSize, min: WindowSize, max: WindowSize) {
    let fits = size.width_percent >= min.width_percent
        && size.width_percent <= max.width_percent
        && size.height_percent >= min.height_percent
        && size.height_percent <= max.height_percent;
    if !fits {
        panic!(
            "{what} in {} is outside the declared bounds: {size:?} not within {min:?}..{max:?}",
            path.display()
        );
    }
}

fn validate(path: &Path, manifest: &WindowManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let bounds = manifest.bounds;
    if bounds.max.normal.width_percent > bounds.max.narrow.width_percent {
        panic!(
            "normal max width must not exceed narrow max width in {}",
            path.display()
        );
    }
    for (class, max, default, maximized) in [
        (
            "normal",
            bounds.max.normal,
            manifest.default_size.normal,
            manifest.maximized_size.normal,
        ),
        (
            "narrow",
            bounds.max.narrow,
            manifest.default_size.narrow,
            manifest.maximized_size.narrow,
        ),
    ] {
        check_within(path, &format!("{class} default size"), default, bounds.min, max);
        check_within(
            path,
            &format!("{class} maximized size"),
            maximized,
            bounds.min,
            max,
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<WindowManifest>::new();

    for path in window_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: WindowManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        manifests.push(manifest);
    }

    let desktop_path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", desktop_path.display());
    let desktop_raw = fs::read_to_string(&desktop_path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", desktop_path.display()));
    let desktop: toml::Value = toml::from_str(&desktop_raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", desktop_path.display()));

    let catalog_json =
        serde_json::to_string_pretty(&manifests).expect("serialize window manifest catalog");
    let desktop_json = serde_json::to_string_pretty(&desktop).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time generated window manifest catalog JSON, in declaration order.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n\
/// Build-time generated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        catalog_json, desktop_json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
