//! Launch and store context for the profile card.
//!
//! Provides the preference store to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| open_store(&launch));
//!
//! // In child components
//! let store = use_store();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use profilecard_core::{MemoryStore, Profile, SharedStore, Storage};

/// File name of the preference database inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Everything decided on the command line before the window opens
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    /// Directory holding the preference database
    pub data_dir: PathBuf,
    /// Profile shown on the card
    pub profile: Profile,
    /// Skip the database and keep preferences in memory
    pub memory_only: bool,
}

/// Get the launch configuration.
/// Uses the global config set from command line args.
pub fn get_launch_config() -> LaunchConfig {
    crate::get_launch_config()
}

/// Open the preference store for this launch.
///
/// Falls back to an in-memory store when the database cannot be opened, so
/// the theme still toggles for the session.
pub fn open_store(config: &LaunchConfig) -> SharedStore {
    if config.memory_only {
        tracing::info!("Using in-memory preference store");
        return Arc::new(MemoryStore::new());
    }

    let path = config.data_dir.join(PREFERENCES_FILE);
    match Storage::new(&path) {
        Ok(storage) => {
            tracing::info!("Preference store opened at {:?}", path);
            Arc::new(storage)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to open preference store {:?}: {}. Theme will not persist.",
                path,
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

/// Hook to access the preference store from context.
pub fn use_store() -> SharedStore {
    use_context::<SharedStore>()
}
