use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Askama compiles templates into the binary; cargo does not track them on its own.
    for template in template_files("templates") {
        println!("cargo:rerun-if-changed={}", template.display());
    }
    println!("cargo:rerun-if-changed=templates");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={}", build_id());
}

/// `<version>+<unix secs>`, shown in the board footer and used to bust the
/// stylesheet cache. `SOURCE_DATE_EPOCH` pins the timestamp for reproducible builds.
fn build_id() -> String {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let stamp = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .filter(|v| v.trim().parse::<u64>().is_ok())
        .map(|v| v.trim().to_string())
        .or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .ok()
                .map(|d| d.as_secs().to_string())
        })
        .unwrap_or_else(|| "dev".to_string());
    format!("{}+{}", version, stamp)
}

/// Every `.html` file below `dir`, sorted so the emitted hints are stable.
fn template_files(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![dir.as_ref().to_path_buf()];
    while let Some(path) = pending.pop() {
        let Ok(entries) = fs::read_dir(&path) else {
            continue;
        };
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                pending.push(p);
            } else if p.extension().is_some_and(|ext| ext == "html") {
                found.push(p);
            }
        }
    }
    found.sort();
    found
}
