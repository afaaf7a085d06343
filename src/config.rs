//! Configuration management for soundshelf.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every accessor falls back to a default so
//! the binary works without any configuration at all.
//!
//! Precedence:
//! 1. Environment variables
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, path::PathBuf};

/// Picture assigned to users that never set one.
pub const DEFAULT_PROFILE_PIC: &str = "images/1/ac1ae8c497a46b4263f35bb0f60d8fc0.png";

fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("soundshelf");
    path
}

/// Loads environment variables from `<data_local_dir>/soundshelf/.env`.
///
/// The directory is created when missing. A missing `.env` file is fine; a
/// file that exists but cannot be parsed is reported as an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/soundshelf/.env`
/// - macOS: `~/Library/Application Support/soundshelf/.env`
/// - Windows: `%LOCALAPPDATA%/soundshelf/.env`
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the location of the library document.
///
/// Reads `SOUNDSHELF_LIBRARY_PATH`; when unset or empty the library lives at
/// `<data_local_dir>/soundshelf/library.json`.
pub fn library_path() -> PathBuf {
    match env::var("SOUNDSHELF_LIBRARY_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => data_dir().join("library.json"),
    }
}

/// Returns the profile picture path given to new users.
pub fn default_profile_pic() -> String {
    env::var("SOUNDSHELF_DEFAULT_PROFILE_PIC")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE_PIC.to_string())
}
