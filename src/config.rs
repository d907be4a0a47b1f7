use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration: where to listen and which directory the `/files`
/// routes serve.
///
/// Sources, later wins: a YAML file named by the `COURIER_CONFIG` env var,
/// the `LISTEN` and `SERVE_DIR` env vars, and the `--directory <dir>`
/// process argument.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address as host:port
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root directory for the `/files` routes
    pub directory: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("/tmp"),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("COURIER_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        if let Ok(dir) = std::env::var("SERVE_DIR") {
            cfg.files.directory = PathBuf::from(dir);
        }

        if let Some(dir) = directory_flag(std::env::args().skip(1)) {
            cfg.files.directory = dir;
        }

        Ok(cfg)
    }

    /// Parses a YAML config file. Missing sections fall back to defaults.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;

        serde_yaml::from_str(&raw).with_context(|| format!("parsing config file {}", path))
    }
}

/// Scans process arguments for `--directory <dir>`.
pub fn directory_flag(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    while let Some(arg) = args.next() {
        if arg == "--directory" {
            return args.next().map(PathBuf::from);
        }
    }

    None
}
