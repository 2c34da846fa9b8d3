// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Document transactions with automatic backups
//!
//! Every write to a widget document goes through here.

use atomic_write_file::AtomicWriteFile;
use std::{fs, io::Write, path::Path, path::PathBuf};

use crate::config::{
    parse_document,
    validator::{DocumentValidator, ValidationLevel},
    ConfigError, DocumentStore,
};

/// Atomic document transaction with automatic backup.
///
/// # Lifecycle
///
/// 1. `begin()` - Creates timestamped backup immediately
/// 2. Caller renders new content (in memory)
/// 3. `commit()` - Writes atomically or `rollback()` - Restores original
///
/// # Example
///
/// ```no_run
/// use editable_widgets::config::{DocumentStore, DocumentTransaction};
/// use std::path::PathBuf;
///
/// let store = DocumentStore::new(PathBuf::from("widgets.toml"))?;
/// let tx = DocumentTransaction::begin(&store)?;
///
/// match tx.commit_with_validation("[[rows]]\nkey = \"1\"\n") {
///     Ok(()) => println!("Document updated"),
///     Err(e) => eprintln!("Commit blocked: {}", e),
/// }
/// # Ok::<(), editable_widgets::config::ConfigError>(())
/// ```
pub struct DocumentTransaction<'a> {
    store: &'a DocumentStore,
    backup_path: Option<PathBuf>,
}

impl<'a> DocumentTransaction<'a> {
    /// Begins a new transaction by creating a timestamped backup.
    ///
    /// The transaction cannot outlive the store it was started from.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or the backup
    /// cannot be written. Nothing is modified in that case.
    pub fn begin(store: &'a DocumentStore) -> Result<Self, ConfigError> {
        let backup_path = store.create_timestamped_backup()?;
        log::debug!("📦 Backup created: {}", backup_path.display());

        Ok(Self {
            store,
            backup_path: Some(backup_path),
        })
    }

    /// Backup taken when the transaction began
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Commits after parsing and validating the new content.
    ///
    /// Content that does not parse, or whose report has errors, is never
    /// written. Warnings are logged and the commit proceeds.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Parse` - content is not a widget document
    /// * `ConfigError::ValidationFailed` - the report has errors
    /// * `ConfigError::WriteFailed` - the atomic write failed
    pub fn commit_with_validation(self, new_content: &str) -> Result<(), ConfigError> {
        let document = parse_document(new_content)?;
        let report = DocumentValidator::new().validate(&document);

        if report.has_errors() {
            let errors: Vec<_> = report
                .issues
                .iter()
                .filter(|issue| issue.validation_level == ValidationLevel::Error)
                .collect();

            log::error!("❌ Validation failed, document will NOT be committed:");
            for issue in &errors {
                log::error!("  {}: {}", issue.location, issue.message);
            }

            return Err(ConfigError::ValidationFailed(format!(
                "{} validation error(s) detected",
                errors.len()
            )));
        }

        for issue in report
            .issues
            .iter()
            .filter(|issue| issue.validation_level == ValidationLevel::Warning)
        {
            log::warn!("⚠️  {}: {}", issue.location, issue.message);
            if let Some(suggestion) = &issue.suggestion {
                log::warn!("   Suggestion: {}", suggestion);
            }
        }

        self.commit(new_content)
    }

    /// Commits by atomically writing new content to the document.
    ///
    /// Consumes the transaction. The backup from `begin()` stays on disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteFailed` if the temp file cannot be
    /// created, written or renamed. The original document is untouched.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        write_atomically(self.store.document_path(), new_content)
    }

    /// Restores the document from the backup taken in `begin()`.
    ///
    /// Borrows `self`, so it can be retried.
    pub fn rollback(&self) -> Result<(), ConfigError> {
        let backup_path = self
            .backup_path
            .as_ref()
            .ok_or_else(|| ConfigError::BackupFailed("No backup available for rollback".to_string()))?;

        let backup_content = fs::read_to_string(backup_path)?;
        write_atomically(self.store.document_path(), &backup_content)?;
        log::info!("↩️  Rolled back to {}", backup_path.display());

        Ok(())
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}
