//! Build script for the Spomix CLI.
//!
//! Copies the configuration template to the user's local data directory so a
//! ready-to-edit `.env.example` sits next to where the application reads its
//! `.env` from.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to the local data directory.
///
/// # Build Process
///
/// 1. **Dependency Tracking**: Re-runs when the template file changes
/// 2. **Path Resolution**: Resolves source (crate root) and destination
///    (platform data directory) paths
/// 3. **Directory Creation**: Ensures the target directory exists
/// 4. **File Copying**: Copies the template into place
///
/// ## Destination Location
///
/// - Linux: `~/.local/share/spomix/.env.example`
/// - macOS: `~/Library/Application Support/spomix/.env.example`
/// - Windows: `%LOCALAPPDATA%/spomix/.env.example`
///
/// # Error Handling Strategy
///
/// A missing template issues a cargo warning and the build continues.
/// Directory creation and copy failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spomix");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
