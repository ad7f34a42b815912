mod config;
pub mod sqlite;
pub mod state;
pub mod store;

pub use config::{Config, GoalsConfig, StreakConfig};
pub use sqlite::SqliteStore;
pub use state::AppState;
pub use store::{GoalStore, MemoryStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/commit[-dev]/` based on COMMIT_ENV.
///
/// Set COMMIT_ENV=dev to use development data directory. COMMIT_DATA_DIR
/// replaces the whole path.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("COMMIT_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("COMMIT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("commit-dev")
            } else {
                base_dir.join("commit")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
