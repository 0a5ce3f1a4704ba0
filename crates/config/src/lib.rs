//! Configuration for the wabridge support layer.
//!
//! Config file: `wabridge.toml`, searched in `./` then `~/.config/wabridge/`.
//! Environment variables (`WABRIDGE_*`) override file values.

pub mod loader;
pub mod schema;

pub use {
    loader::{apply_env_overrides, config_dir, discover_and_load, load_config},
    schema::{BridgeConfig, ConfigError, WebhookConfig},
};
