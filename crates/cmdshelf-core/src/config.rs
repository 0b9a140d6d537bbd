//! Configuration management for cmdshelf.
//!
//! Configuration is a single TOML file, `config.toml`, stored under the
//! cmdshelf root directory. It records the default collection, the set of
//! registered collections, and the ordered list of directories that hold
//! collection files.
//!
//! ## Root Directory Resolution
//!
//! 1. `CMDSHELF_HOME` environment variable
//! 2. `$XDG_CONFIG_HOME/cmdshelf`
//! 3. `~/.config/cmdshelf`
//!
//! ## Example Configuration File
//!
//! ```toml
//! defaultCollection = "default"
//! collections = ["default", "git"]
//! collectionDirs = ["/usr/share/cmdshelf", "collections"]
//! ```
//!
//! Later entries in `collectionDirs` take precedence over earlier ones, so a
//! user-level directory listed last shadows a shared one listed first.
//! Relative entries resolve against the root directory.
//!
//! ```rust,no_run
//! use cmdshelf_core::{Config, Paths};
//!
//! let paths = Paths::discover()?;
//! let config = Config::load(&paths)?;
//! for dir in config.effective_collection_dirs(&paths) {
//!     println!("{}", dir.display());
//! }
//! # Ok::<(), cmdshelf_core::Error>(())
//! ```

use crate::{Error, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the root directory.
pub const HOME_ENV: &str = "CMDSHELF_HOME";

/// Name of the collection created on first run.
pub const BOOTSTRAP_COLLECTION: &str = "default";

const CONFIG_FILE: &str = "config.toml";
const COLLECTIONS_DIR: &str = "collections";
const APP_DIR: &str = "cmdshelf";

/// Filesystem locations used by cmdshelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    /// Resolve the root directory honoring `CMDSHELF_HOME` and XDG overrides.
    pub fn discover() -> Result<Self> {
        if let Ok(dir) = std::env::var(HOME_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return Ok(Self::with_root(trimmed));
            }
        }

        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            let trimmed = xdg.trim();
            if !trimmed.is_empty() {
                return Ok(Self::with_root(PathBuf::from(trimmed).join(APP_DIR)));
            }
        }

        let base = BaseDirs::new()
            .ok_or_else(|| Error::Config("Failed to determine home directory".into()))?;
        Ok(Self::with_root(base.home_dir().join(".config").join(APP_DIR)))
    }

    /// Use an explicit root directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of `config.toml`
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Collection directory used when none are configured.
    #[must_use]
    pub fn default_collections_dir(&self) -> PathBuf {
        self.root.join(COLLECTIONS_DIR)
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        }
    }
}

/// Persisted cmdshelf configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Collection used when a command does not name one.
    pub default_collection: String,

    /// Registered collection names, in registration order.
    pub collections: Vec<String>,

    /// Directories holding collection files. Later entries win on lookup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collection_dirs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_collection: BOOTSTRAP_COLLECTION.to_string(),
            collections: vec![BOOTSTRAP_COLLECTION.to_string()],
            collection_dirs: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from `paths`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load(paths: &Paths) -> Result<Self> {
        let path = paths.config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| io_at("Failed to read config", path, &e))?;
        toml::from_str(&content)
            .map_err(|e| Error::Parse(format!("Failed to parse config {}: {e}", path.display())))
    }

    /// Save configuration to `paths`, creating the root directory if needed.
    pub fn save(&self, paths: &Paths) -> Result<()> {
        self.save_to(&paths.config_file())
    }

    /// Save configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| io_at("Failed to create config directory", parent, &e))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| io_at("Failed to write config", path, &e))?;
        Ok(())
    }

    /// Collection directories in registration order, resolved against the root.
    ///
    /// Returns `[<root>/collections]` when none are configured.
    #[must_use]
    pub fn effective_collection_dirs(&self, paths: &Paths) -> Vec<PathBuf> {
        if self.collection_dirs.is_empty() {
            return vec![paths.default_collections_dir()];
        }
        self.collection_dirs
            .iter()
            .map(|dir| paths.resolve(dir))
            .collect()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c == name)
    }

    /// Register `name` once. Returns `true` if it was newly added.
    pub fn register_collection(&mut self, name: &str) -> bool {
        if self.has_collection(name) {
            return false;
        }
        self.collections.push(name.to_string());
        true
    }
}

/// Keep the I/O error kind while naming the file involved.
fn io_at(action: &str, path: &Path, err: &io::Error) -> Error {
    Error::Io(io::Error::new(
        err.kind(),
        format!("{action} {}: {err}", path.display()),
    ))
}
