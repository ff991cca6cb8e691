//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Conventional provider variables (PORT, DATABASE_URL, SUPABASE_URL, ...)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use citizen_services::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

use std::path::Path;

mod settings;

pub use settings::*;

/// Load `.env` from the working directory into the process environment.
///
/// Must run before anything reads the environment, tracing included.
/// A missing file is not an error; existing variables are never replaced.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// [`load_env_file`] for an explicit path.
pub fn load_env_file_from(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}
