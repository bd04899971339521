//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vista/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::Mode;
use crate::router::{
    EmbeddedLoader, HttpLoader, Route, RouteError, RouteTable, Router, ViewLoader,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VistaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub mode: Option<Mode>,
    pub app_name: Option<String>,
    pub initial_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Base URL serving `<chunk>.json` files. Unset = embedded views.
    pub chunks_url: Option<String>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub mode: Option<Mode>,
    pub initial_path: Option<String>,
    pub chunks_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_APP_NAME: &str = "Vista";
pub const DEFAULT_INITIAL_PATH: &str = "/page1";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub mode: Mode,
    pub app_name: String,
    pub initial_path: String,
    pub chunks_url: Option<String>,
    /// Empty means the built-in table.
    pub routes: Vec<Route>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Routes(Vec<RouteError>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Routes(errors) => {
                write!(f, "invalid route table:")?;
                for e in errors {
                    write!(f, "\n  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vista/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vista").join("config.toml"))
}

/// Load config from `~/.vista/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VistaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VistaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VistaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VistaConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<VistaConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: VistaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Vista Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# mode = "production"                # "development" (debug logs) or "production"
# app_name = "Vista"                 # Shown in the title bar. Or set VISTA_APP_NAME
# initial_path = "/page1"            # Or set VISTA_INITIAL_PATH

# [loader]
# chunks_url = "http://localhost:8080/chunks"   # Serves <chunk>.json. Or set VISTA_CHUNKS_URL

# Replaces the built-in /page1 and /page2 routes. Names must be unique.
# [[routes]]
# path = "/page1"
# name = "page1"
# view = "page1"
# chunk = "dev-tools"                # Views sharing a chunk are fetched together

# [[routes]]
# path = "/page2"
# name = "page2"
# view = "page2"
# chunk = "dev-tools"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VistaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &VistaConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Mode: CLI → env → config → default
    let mode = cli
        .mode
        .or_else(|| {
            env("VISTA_MODE").and_then(|v| {
                let parsed = Mode::parse(&v);
                if parsed.is_none() {
                    warn!("Ignoring unknown VISTA_MODE '{}'", v);
                }
                parsed
            })
        })
        .or(config.general.mode)
        .unwrap_or_default();

    // App name: env → config → default
    let app_name = env("VISTA_APP_NAME")
        .or_else(|| config.general.app_name.clone())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

    // Initial path: CLI → env → config → default
    let initial_path = cli
        .initial_path
        .clone()
        .or_else(|| env("VISTA_INITIAL_PATH"))
        .or_else(|| config.general.initial_path.clone())
        .unwrap_or_else(|| DEFAULT_INITIAL_PATH.to_string());

    // Chunk server: CLI → env → config → none (embedded)
    let chunks_url = cli
        .chunks_url
        .clone()
        .or_else(|| env("VISTA_CHUNKS_URL"))
        .or_else(|| config.loader.chunks_url.clone())
        .filter(|url| !url.trim().is_empty());

    ResolvedConfig {
        mode,
        app_name,
        initial_path,
        chunks_url,
        routes: config.routes.clone(),
    }
}

// ============================================================================
// Router Construction
// ============================================================================

/// Validate the configured route table, falling back to the built-in one.
pub fn build_route_table(config: &ResolvedConfig) -> Result<RouteTable, ConfigError> {
    if config.routes.is_empty() {
        return Ok(RouteTable::default());
    }
    RouteTable::builder()
        .routes(config.routes.iter().cloned())
        .build()
        .map_err(ConfigError::Routes)
}

/// Build the router once at start-up: validated table plus the configured loader.
pub fn build_router(config: &ResolvedConfig) -> Result<Router, ConfigError> {
    let table = build_route_table(config)?;
    let loader: Arc<dyn ViewLoader> = match &config.chunks_url {
        Some(url) => Arc::new(HttpLoader::new(url.clone())),
        None => Arc::new(EmbeddedLoader::with_builtin_views(&table)),
    };
    Ok(Router::new(table, loader))
}
