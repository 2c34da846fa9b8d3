//! MVC Controller - Mediates between the widget document and the GTK widgets
//!
//! # Responsibilities
//!
//! - Load the widget document through `DocumentStore`
//! - Hand columns, options, rows and header settings to the View
//! - Persist row changes coming back from the table
//! - Re-read the document when it changes on disk, ignoring our own writes
//!
//! The Controller doesn't know about GTK4 widgets, so all of it is testable
//! without a display.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::config::{ConfigError, DocumentStore, HeaderConfig, WidgetDocument};
use crate::core::{Column, Row, TableOptions};

/// MVC Controller coordinating the document store and the widgets
pub struct Controller {
    store: DocumentStore,
    /// Last document read or written
    document: RefCell<WidgetDocument>,
    /// Text of our most recent write, to recognise watcher echoes
    last_written: RefCell<Option<String>>,
}

impl Controller {
    /// Creates a Controller for the given document
    ///
    /// # Example
    ///
    /// ```no_run
    /// use editable_widgets::ui::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::new(PathBuf::from("widgets.toml"))?;
    /// let rows = controller.load_document()?;
    /// println!("Loaded {} rows", rows);
    /// # Ok::<(), editable_widgets::config::ConfigError>(())
    /// ```
    pub fn new(document_path: PathBuf) -> Result<Self, ConfigError> {
        let store = DocumentStore::new(document_path)?;

        // Data loaded later via load_document
        Ok(Self {
            store,
            document: RefCell::new(WidgetDocument::default()),
            last_written: RefCell::new(None),
        })
    }

    /// Reads the document from disk
    ///
    /// Returns the number of rows loaded.
    pub fn load_document(&self) -> Result<usize, ConfigError> {
        let document = self.store.read_document()?;
        let count = document.rows.len();

        log::debug!("📄 Loaded {} row(s) from {}", count, self.store.document_path().display());
        *self.document.borrow_mut() = document;

        Ok(count)
    }

    pub fn document_path(&self) -> PathBuf {
        self.store.document_path().to_path_buf()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.document.borrow().rows.clone()
    }

    pub fn columns(&self) -> Vec<Column> {
        self.document.borrow().columns()
    }

    pub fn options(&self) -> TableOptions {
        self.document.borrow().table.options.clone()
    }

    pub fn header(&self) -> Option<HeaderConfig> {
        self.document.borrow().header.clone()
    }

    /// Writes rows back to the document
    ///
    /// Called from the table's rows-changed listener.
    pub fn persist_rows(&self, rows: &[Row]) -> Result<(), ConfigError> {
        let written = self.store.save_rows(rows)?;

        self.document.borrow_mut().rows = rows.to_vec();
        *self.last_written.borrow_mut() = Some(written);

        Ok(())
    }

    /// Re-reads the document after a change on disk
    ///
    /// Returns the new rows when the change came from someone else, and
    /// `None` when the file is unchanged or holds exactly what we last wrote.
    pub fn reload(&self) -> Result<Option<Vec<Row>>, ConfigError> {
        let content = self.store.read_raw()?;

        if self.last_written.borrow().as_deref() == Some(content.as_str()) {
            log::debug!("🔁 Ignoring echo of our own write");
            return Ok(None);
        }

        let document = crate::config::parse_document(&content)?;
        if document == *self.document.borrow() {
            return Ok(None);
        }

        let rows = document.rows.clone();
        *self.document.borrow_mut() = document;
        *self.last_written.borrow_mut() = None;
        log::info!("🔄 Document changed on disk, {} row(s) reloaded", rows.len());

        Ok(Some(rows))
    }
}
