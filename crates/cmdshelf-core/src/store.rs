//! Collection-backed command storage.
//!
//! A collection is one TOML file, `<dir>/<name>.toml`, holding a
//! `[[commands]]` array. The same collection name may exist in several
//! configured directories; lookups scan them in reverse registration order so
//! the directory registered last wins.
//!
//! Reads are tolerant at the entry level: an entry that fails to decode is
//! logged and skipped, while a file that is not valid TOML at all is a
//! [`Error::Parse`]. Writes replace the whole file through a temporary file
//! and a rename, and keep entries they cannot decode untouched.

use crate::config::{BOOTSTRAP_COLLECTION, Config, Paths};
use crate::types::slugify;
use crate::{Command, Error, Result};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::{debug, info, warn};

/// Maximum allowed collection name length
const MAX_NAME_LEN: usize = 64;

const COLLECTION_EXT: &str = "toml";
const COMMANDS_KEY: &str = "commands";

/// Validate that a collection name is safe to use as a file name.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] describing the first violated rule.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName("collection name cannot be empty".into()));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidName(format!(
            "'{name}' is longer than {MAX_NAME_LEN} characters"
        )));
    }

    // Leading '-' reads as a flag, leading '.' hides the file
    if name.starts_with('-') || name.starts_with('.') {
        return Err(Error::InvalidName(format!(
            "'{name}' cannot start with '-' or '.'"
        )));
    }

    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidName(format!(
            "'{name}' contains path traversal characters"
        )));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
    {
        return Err(Error::InvalidName(format!(
            "'{name}' contains invalid character {bad:?}"
        )));
    }

    Ok(())
}

/// A collection that [`CollectionStore::load_all`] could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCollection {
    /// Collection name.
    pub name: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Commands from every readable collection, plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Loaded commands, grouped by collection in sorted collection order.
    pub commands: Vec<Command>,
    /// Collections that could not be read.
    pub skipped: Vec<SkippedCollection>,
}

/// Outcome of [`CollectionStore::import_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Collections that were registered, in snapshot order.
    pub collections: Vec<String>,
    /// Number of commands merged.
    pub commands: usize,
}

/// Command storage over the configured collection directories.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    paths: Paths,
    config: Config,
}

impl CollectionStore {
    /// Open the store rooted at `paths`.
    ///
    /// On first run the configuration file is written and the bootstrap
    /// collection file is created.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or bootstrapped.
    pub fn open(paths: Paths) -> Result<Self> {
        let fresh = !paths.config_file().exists();
        let config = Config::load(&paths)?;
        let store = Self::with_config(paths, config);

        if fresh {
            info!(
                root = %store.paths.root().display(),
                "Initializing cmdshelf configuration"
            );
            store.config.save(&store.paths)?;
            store.ensure_collection_file(BOOTSTRAP_COLLECTION)?;
        }

        Ok(store)
    }

    /// Build a store from an already loaded configuration without touching disk.
    #[must_use]
    pub const fn with_config(paths: Paths, config: Config) -> Self {
        Self { paths, config }
    }

    /// Returns the filesystem locations in use
    #[must_use]
    pub const fn paths(&self) -> &Paths {
        &self.paths
    }

    /// Returns the loaded configuration
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Name of the default collection.
    #[must_use]
    pub fn default_collection(&self) -> &str {
        &self.config.default_collection
    }

    /// Locate the file backing `name`.
    ///
    /// Directories are scanned from the most recently registered to the first;
    /// the first existing `<dir>/<name>.toml` wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for unsafe names and [`Error::NotFound`]
    /// when no directory holds the collection.
    pub fn resolve_collection_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        let file_name = format!("{name}.{COLLECTION_EXT}");

        for dir in self.config.effective_collection_dirs(&self.paths).iter().rev() {
            let candidate = dir.join(&file_name);
            if candidate.is_file() {
                debug!(collection = name, path = %candidate.display(), "Resolved collection");
                return Ok(candidate);
            }
        }

        Err(Error::NotFound(format!("collection '{name}'")))
    }

    /// Sorted, de-duplicated names of every collection file on disk.
    ///
    /// Missing or unreadable directories are skipped.
    #[must_use]
    pub fn list_collections(&self) -> Vec<String> {
        let config_file = self.paths.config_file();
        let mut names = BTreeSet::new();

        for dir in self.config.effective_collection_dirs(&self.paths) {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "Skipping collection directory");
                    continue;
                },
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension() != Some(OsStr::new(COLLECTION_EXT))
                    || !path.is_file()
                    || path == config_file
                {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                    if validate_name(stem).is_ok() {
                        names.insert(stem.to_string());
                    }
                }
            }
        }

        names.into_iter().collect()
    }

    /// Registered collections together with those found on disk, sorted.
    #[must_use]
    pub fn known_collections(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.list_collections().into_iter().collect();
        names.extend(self.config.collections.iter().cloned());
        names.into_iter().collect()
    }

    /// Load every command of collection `name`, stamped with the collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the collection does not resolve and
    /// [`Error::Parse`] if its file is not valid TOML.
    pub fn get_commands(&self, name: &str) -> Result<Vec<Command>> {
        let path = self.resolve_collection_path(name)?;
        read_commands_file(&path, name)
    }

    /// Commands of every readable collection; unreadable ones are skipped.
    #[must_use]
    pub fn get_all_commands(&self) -> Vec<Command> {
        self.load_all().commands
    }

    /// Like [`Self::get_all_commands`], also reporting skipped collections.
    #[must_use]
    pub fn load_all(&self) -> LoadReport {
        let mut report = LoadReport::default();

        for name in self.list_collections() {
            match self.get_commands(&name) {
                Ok(commands) => report.commands.extend(commands),
                Err(e) => {
                    warn!(collection = %name, error = %e, "Skipping unreadable collection");
                    report.skipped.push(SkippedCollection {
                        name,
                        reason: e.to_string(),
                    });
                },
            }
        }

        report
    }

    /// Insert or replace `command` in `collection`, matching by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection file cannot be read, encoded or written.
    pub fn save_command(&self, command: &Command, collection: &str) -> Result<()> {
        self.save_commands(std::slice::from_ref(command), collection)
    }

    /// Insert or replace several commands with a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection file cannot be read, encoded or written.
    pub fn save_commands(&self, commands: &[Command], collection: &str) -> Result<()> {
        let path = match self.resolve_collection_path(collection) {
            Ok(path) => path,
            Err(Error::NotFound(_)) => self.new_collection_path(collection)?,
            Err(e) => return Err(e),
        };

        let mut table = if path.exists() {
            read_table(&path)?
        } else {
            Table::new()
        };
        let mut entries = take_entries(&mut table, &path)?;

        for command in commands {
            let slug = command.slug();
            let encoded = Value::try_from(command)?;
            let existing = entries.iter().position(|entry| {
                entry
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| slugify(name) == slug)
            });

            match existing {
                Some(idx) => {
                    debug!(collection, slug = %slug, "Replacing command");
                    entries[idx] = encoded;
                },
                None => {
                    debug!(collection, slug = %slug, "Appending command");
                    entries.push(encoded);
                },
            }
        }

        table.insert(COMMANDS_KEY.to_string(), Value::Array(entries));
        write_atomic(&path, &toml::to_string_pretty(&table)?)?;
        debug!(collection, path = %path.display(), "Saved collection");
        Ok(())
    }

    /// Register `name` and make sure a backing file exists. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for unsafe names, or an I/O error when
    /// the configuration or collection file cannot be written.
    pub fn add_collection(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;

        if self.config.register_collection(name) {
            self.config.save(&self.paths)?;
            info!(collection = name, "Registered collection");
        }

        self.ensure_collection_file(name)
    }

    /// Make `name` the default collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when `name` is neither registered nor on disk.
    pub fn set_default_collection(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;

        if !self.config.has_collection(name) {
            self.resolve_collection_path(name)?;
            self.config.register_collection(name);
        }

        self.config.default_collection = name.to_string();
        self.config.save(&self.paths)?;
        info!(collection = name, "Default collection updated");
        Ok(())
    }

    /// Export every collection with a backing file into `target_dir`.
    ///
    /// Writes `target_dir/config.toml` and `target_dir/<name>/<name>.toml`.
    /// Returns the exported collection names.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be written.
    pub fn export_all(&self, target_dir: &Path) -> Result<Vec<String>> {
        fs::create_dir_all(target_dir)?;
        let mut exported = Vec::new();

        for name in self.known_collections() {
            let source = match self.resolve_collection_path(&name) {
                Ok(path) => path,
                Err(e @ (Error::NotFound(_) | Error::InvalidName(_))) => {
                    debug!(collection = %name, error = %e, "Nothing to export");
                    continue;
                },
                Err(e) => return Err(e),
            };

            let dir = target_dir.join(&name);
            fs::create_dir_all(&dir)?;
            fs::copy(&source, dir.join(format!("{name}.{COLLECTION_EXT}")))?;
            debug!(collection = %name, "Exported collection");
            exported.push(name);
        }

        let snapshot = Config {
            default_collection: self.config.default_collection.clone(),
            collections: exported.clone(),
            collection_dirs: Vec::new(),
        };
        snapshot.save(&Paths::with_root(target_dir))?;

        info!(
            count = exported.len(),
            target = %target_dir.display(),
            "Exported collections"
        );
        Ok(exported)
    }

    /// Merge an export produced by [`Self::export_all`].
    ///
    /// Each listed collection is registered, then every `*.toml` file under
    /// `source_dir/<name>/` is merged into it by slug. Missing directories are
    /// skipped silently; undecodable files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `source_dir/config.toml` is missing, a
    /// parse error if it does not decode, or an I/O error from writing.
    pub fn import_all(&mut self, source_dir: &Path) -> Result<ImportSummary> {
        let snapshot_path = Paths::with_root(source_dir).config_file();
        if !snapshot_path.is_file() {
            return Err(Error::NotFound(format!(
                "export snapshot {}",
                snapshot_path.display()
            )));
        }
        let snapshot = Config::load_from(&snapshot_path)?;
        let mut summary = ImportSummary::default();

        for name in &snapshot.collections {
            if let Err(e) = validate_name(name) {
                warn!(collection = %name, error = %e, "Skipping collection with invalid name");
                continue;
            }
            self.add_collection(name)?;
            summary.collections.push(name.clone());

            let dir = source_dir.join(name);
            let Ok(entries) = fs::read_dir(&dir) else {
                debug!(dir = %dir.display(), "No exported files for collection");
                continue;
            };

            let mut files: Vec<PathBuf> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension() == Some(OsStr::new(COLLECTION_EXT)) && path.is_file()
                })
                .collect();
            files.sort();

            for file in files {
                match read_commands_file(&file, name) {
                    Ok(commands) => {
                        self.save_commands(&commands, name)?;
                        summary.commands += commands.len();
                    },
                    Err(e) => {
                        warn!(file = %file.display(), error = %e, "Skipping undecodable export file");
                    },
                }
            }
        }

        info!(
            collections = summary.collections.len(),
            commands = summary.commands,
            "Imported collections"
        );
        Ok(summary)
    }

    fn new_collection_path(&self, name: &str) -> Result<PathBuf> {
        self.config
            .effective_collection_dirs(&self.paths)
            .pop()
            .map(|dir| dir.join(format!("{name}.{COLLECTION_EXT}")))
            .ok_or_else(|| Error::Config("No collection directories configured".into()))
    }

    fn ensure_collection_file(&self, name: &str) -> Result<()> {
        match self.resolve_collection_path(name) {
            Ok(_) => Ok(()),
            Err(Error::NotFound(_)) => {
                let path = self.new_collection_path(name)?;
                write_atomic(&path, "")?;
                debug!(collection = name, path = %path.display(), "Created collection file");
                Ok(())
            },
            Err(e) => Err(e),
        }
    }
}

fn read_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Parse(format!("Failed to parse {}: {e}", path.display())))
}

fn take_entries(table: &mut Table, path: &Path) -> Result<Vec<Value>> {
    match table.remove(COMMANDS_KEY) {
        None => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries),
        Some(other) => Err(Error::Parse(format!(
            "{}: '{COMMANDS_KEY}' must be an array, found {}",
            path.display(),
            other.type_str()
        ))),
    }
}

fn read_commands_file(path: &Path, collection: &str) -> Result<Vec<Command>> {
    let mut table = read_table(path)?;
    let entries = take_entries(&mut table, path)?;

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry.try_into::<Command>() {
            Ok(mut command) => {
                command.collection = collection.to_string();
                Some(command)
            },
            Err(e) => {
                warn!(
                    collection,
                    index,
                    error = %e,
                    "Skipping undecodable command entry"
                );
                None
            },
        })
        .collect())
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)?;

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
