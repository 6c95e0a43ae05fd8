//! Server configuration.
//!
//! Settings come from an optional YAML file (named by `WEBSERVER_CONFIG`)
//! and are then overridden by the `HOST`, `PORT` and `WEB_ROOT` environment
//! variables. Once loaded the configuration is never mutated; the listener
//! shares it with every connection behind an `Arc`.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "WEBSERVER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the listening socket binds to
    pub bind_address: String,
    pub port: u16,
    /// Directory all served files must live under
    pub web_root: PathBuf,
    /// Document served for a request to `/`
    pub index_file: String,
    /// Extensions (with leading dot, lower-case) that may be served
    pub allowed_extensions: BTreeSet<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            web_root: PathBuf::from("webroot"),
            index_file: "index.html".to_string(),
            allowed_extensions: [".html", ".css", ".js"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from the file named by `WEBSERVER_CONFIG`
    /// (defaults when unset), then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(raw).context("Failed to parse YAML config")?;
        cfg.normalized()
    }

    /// Applies `HOST`, `PORT` and `WEB_ROOT` overrides.
    ///
    /// `lookup` is the variable source; `load` passes the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.bind_address = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port}"))?;
        }
        if let Some(root) = lookup("WEB_ROOT") {
            self.web_root = PathBuf::from(root);
        }
        Ok(())
    }

    /// The `host:port` string handed to `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Creates the web root if it does not exist yet.
    pub fn ensure_web_root(&self) -> Result<()> {
        if !self.web_root.exists() {
            std::fs::create_dir_all(&self.web_root).with_context(|| {
                format!("Failed to create web root {}", self.web_root.display())
            })?;
            let shown =
                std::path::absolute(&self.web_root).unwrap_or_else(|_| self.web_root.clone());
            tracing::info!(path = %shown.display(), "Created webroot directory");
        }
        Ok(())
    }

    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(ext)
    }

    fn normalized(mut self) -> Result<Self> {
        if self.index_file.trim().is_empty() {
            bail!("index_file must not be empty");
        }

        self.allowed_extensions = self
            .allowed_extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.trim().to_ascii_lowercase();
                if ext.starts_with('.') { ext } else { format!(".{ext}") }
            })
            .filter(|ext| ext.len() > 1)
            .collect();

        if self.allowed_extensions.is_empty() {
            bail!("allowed_extensions must list at least one extension");
        }
        Ok(self)
    }
}
