use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Loaded from an optional YAML file named by the `CONFIG` environment
/// variable, with individual environment variables layered on top.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the workers listen on, e.g. "0.0.0.0:8080".
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory that confines every served file.
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,

    /// Number of worker threads sharing the listening address.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// File served when a request path names a directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Debug-level logging.
    #[serde(default)]
    pub debug: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_document_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            document_root: default_document_root(),
            workers: default_workers(),
            index_file: default_index_file(),
            debug: false,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(v) = std::env::var("LISTEN") {
            cfg.listen_addr = v;
        }
        if let Ok(v) = std::env::var("DOCUMENT_ROOT") {
            cfg.document_root = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("WORKERS") {
            cfg.workers = v.parse().context("WORKERS must be a positive integer")?;
        }
        if let Ok(v) = std::env::var("INDEX_FILE") {
            cfg.index_file = v;
        }
        if std::env::var("DEBUG").is_ok() {
            cfg.debug = true;
        }

        if cfg.workers == 0 {
            anyhow::bail!("workers must be at least 1");
        }

        Ok(cfg)
    }
}
