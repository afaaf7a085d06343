//! soundshelf Library
//!
//! A music library backend. Users own musics (tracks), group them into albums
//! and playlists, and edit those collections with toggle-style membership
//! updates and client supplied reorderings.
//!
//! # Modules
//!
//! - `reconcile` - Pure list reconciliation: membership toggles and reordering
//! - `catalog` - CRUD operations for users, musics, albums and playlists
//! - `management` - The library document and its JSON persistence
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `types` - Data structures and type definitions
//! - `utils` - Output helpers shared by the CLI
//!
//! # Example
//!
//! ```
//! use soundshelf::{catalog, management::LibraryManager, config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let mut manager = LibraryManager::load_or_default(config::library_path()).await?;
//!     let album = catalog::read_album(manager.library(), &"0123456789abcdef01234567".parse()?)?;
//!     println!("{}", album.name);
//!     manager.persist().await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod reconcile;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loaded library from {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Album {} updated", album.id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1. Only for failures the command cannot recover
/// from.
///
/// # Example
///
/// ```
/// error!("Failed to load library: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
