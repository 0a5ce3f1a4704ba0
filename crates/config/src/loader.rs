use std::path::{Path, PathBuf};

use {secrecy::Secret, tracing::{debug, warn}};

use crate::schema::BridgeConfig;

const CONFIG_FILENAME: &str = "wabridge.toml";

/// Load config from the given TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<BridgeConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let cfg = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    Ok(cfg)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./wabridge.toml` (project-local)
/// 2. `~/.config/wabridge/wabridge.toml` (user-global)
///
/// Returns `BridgeConfig::default()` if no config file is found; a file that
/// fails to parse is logged and also falls back to defaults. Environment
/// overrides are applied on top either way.
pub fn discover_and_load() -> BridgeConfig {
    let cfg = match find_config_file() {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            match load_config(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                    BridgeConfig::default()
                },
            }
        },
        None => {
            debug!("no config file found, using defaults");
            BridgeConfig::default()
        },
    };
    apply_env_overrides(cfg)
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }
    let global = config_dir()?.join(CONFIG_FILENAME);
    global.exists().then_some(global)
}

/// Returns the user-global config directory (`~/.config/wabridge/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "wabridge").map(|d| d.config_dir().to_path_buf())
}

/// Apply `WABRIDGE_*` environment variables on top of `cfg`.
///
/// Recognized: `WABRIDGE_API_KEY`, `WABRIDGE_WEBHOOK_URL`,
/// `WABRIDGE_ENABLE_WEBHOOK` (`1`/`true`/`yes`), and
/// `WABRIDGE_DISABLED_CALLBACKS` (comma-separated event names).
pub fn apply_env_overrides(cfg: BridgeConfig) -> BridgeConfig {
    apply_overrides(cfg, |name| std::env::var(name).ok())
}

fn apply_overrides(
    mut cfg: BridgeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> BridgeConfig {
    if let Some(key) = lookup("WABRIDGE_API_KEY") {
        cfg.api_key = Some(Secret::new(key));
    }
    if let Some(url) = lookup("WABRIDGE_WEBHOOK_URL") {
        cfg.webhook.url = url;
    }
    if let Some(flag) = lookup("WABRIDGE_ENABLE_WEBHOOK") {
        cfg.webhook.enabled = parse_bool(&flag);
    }
    if let Some(names) = lookup("WABRIDGE_DISABLED_CALLBACKS") {
        cfg.disabled_callbacks = names
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    cfg
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
