// src/config.rs
use std::env;
use std::path::PathBuf;

// Runtime configuration for the password tool
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub store_path: PathBuf,

    // Password generation defaults
    pub default_length: usize,
    pub default_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("passwords.json"),
            default_length: 12,
            default_words: 4,
        }
    }
}

impl Config {
    // Load configuration, preferring an explicit store path over the
    // platform data directory, then environment overrides for defaults
    pub fn load(store_override: Option<PathBuf>) -> Self {
        let mut config = Config::default();

        config.store_path = match store_override {
            Some(path) => path,
            None => default_store_path(),
        };

        if let Ok(val) = env::var("PASSFORGE_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_length = length;
            }
        }

        if let Ok(val) = env::var("PASSFORGE_WORDS") {
            if let Ok(words) = val.parse() {
                config.default_words = words;
            }
        }

        config
    }
}

/// Get the application data directory, creating it if needed
pub fn app_data_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passforge", "passforge") {
        let data_dir = proj_dirs.data_dir();

        // Create the directory if it doesn't exist
        if !data_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(data_dir) {
                log::error!("Failed to create data directory: {}", e);
                return None;
            }
        }

        Some(data_dir.to_path_buf())
    } else {
        None
    }
}

// Default location for the credential file; falls back to the working
// directory when no platform data directory is available
fn default_store_path() -> PathBuf {
    match app_data_dir() {
        Some(dir) => dir.join("passwords.json"),
        None => PathBuf::from("passwords.json"),
    }
}
