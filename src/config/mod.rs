//! Widget document storage with atomic writes and backup support.
//!
//! This module owns the on-disk side of the widgets: the TOML document that
//! declares table options, columns, rows and the optional header. Key
//! features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every write creates a timestamped backup
//! - **Validation before commit**: Documents with errors are never written
//! - **Symlink warnings**: Alerts user but allows symlinked documents
//!
//! # Example
//!
//! ```no_run
//! use editable_widgets::config::DocumentStore;
//!
//! let store = DocumentStore::new("/home/user/.config/editable-widgets/widgets.toml".into())?;
//! let document = store.read_document()?;
//!
//! // Persist the rows back through a validated transaction
//! store.save_rows(&document.rows)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod error;
pub mod transaction;
pub mod validator;

#[cfg(test)]
mod tests;

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub use document::{parse_document, render_document, ColumnSpec, HeaderConfig, TableSection, WidgetDocument};
pub use error::ConfigError;
pub use transaction::DocumentTransaction;

use crate::core::Row;

/// Manages a widget document file with safe atomic operations.
///
/// Reads are direct. Writes go through [`DocumentTransaction`], which takes
/// a backup first and validates the new content before replacing the file.
#[derive(Debug)]
pub struct DocumentStore {
    /// Path to the widget document.
    document_path: PathBuf,
    backup_dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store for the given document.
    ///
    /// Validates that the document exists and creates the `backups/`
    /// directory next to it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the document doesn't exist.
    /// Returns `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(document_path: PathBuf) -> Result<Self, ConfigError> {
        if !document_path.exists() {
            return Err(ConfigError::NotFound(document_path));
        }

        if document_path.read_link().is_ok() {
            log::warn!("⚠ Document is a symlink: {}", document_path.display());
        }

        // e.g., ~/.config/editable-widgets/widgets.toml → ~/.config/editable-widgets/backups/
        let backup_dir = document_path
            .parent()
            .ok_or_else(|| {
                ConfigError::BackupDirNotWritable(PathBuf::from(
                    "Document has no parent directory",
                ))
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ConfigError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            document_path,
            backup_dir,
        })
    }

    /// Path of the managed document
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Directory holding timestamped backups
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Reads the raw document text.
    pub fn read_raw(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.document_path)?)
    }

    /// Reads and parses the document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid widget document.
    pub fn read_document(&self) -> Result<WidgetDocument, ConfigError> {
        parse_document(&self.read_raw()?)
    }

    /// Starts a transaction (takes a backup immediately).
    pub fn begin_transaction(&self) -> Result<DocumentTransaction<'_>, ConfigError> {
        DocumentTransaction::begin(self)
    }

    /// Replaces the document's rows and writes it back.
    ///
    /// Everything else in the document (options, columns, header) is kept
    /// as currently stored on disk. Returns the text that was written so
    /// callers can recognise their own write when the file watcher fires.
    pub fn save_rows(&self, rows: &[Row]) -> Result<String, ConfigError> {
        let mut document = self.read_document()?;
        document.rows = rows.to_vec();
        let content = render_document(&document)?;

        self.begin_transaction()?.commit_with_validation(&content)?;
        log::debug!("💾 Saved {} row(s) to {}", rows.len(), self.document_path.display());

        Ok(content)
    }

    /// Lists backups of this document, newest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let prefix = match self.document_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => format!("{}.", name),
            None => return Ok(Vec::new()),
        };

        let mut backups = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)? {
            let path = entry?.path();
            let is_backup = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix));
            if is_backup && path.is_file() {
                backups.push(path);
            }
        }

        // Timestamp suffix sorts lexically
        backups.sort();
        backups.reverse();
        Ok(backups)
    }

    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(&self.document_path)?;

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .document_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ConfigError::BackupFailed("Document path has no file name".to_string()))?;

        let backup_path = self.backup_dir.join(format!("{}.{}", original_name, timestamp));
        fs::write(&backup_path, &content)
            .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        Ok(backup_path)
    }
}
