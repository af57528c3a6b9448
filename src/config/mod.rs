//! Application configuration.
//!
//! Loaded once at startup from an optional TOML file. Every field has a
//! default, so a missing file or a partial file is fine.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DiaryConfig, StartScreen, UiConfig};
