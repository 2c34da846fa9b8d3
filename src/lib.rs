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

//! Editable Widgets
//!
//! Two GTK4 widgets driven by plain Rust models: an editable, sortable,
//! deletable data table and a responsive site header.
//!
//! # Features
//!
//! - **Row lifecycle:** Add, edit with rollback, delete, bulk delete
//! - **Key generation:** Next integer above the maximum, or random UUIDs
//! - **Reordering:** Drag-and-drop through a pluggable sorting strategy
//! - **Header navigation:** Route-synced selection with a narrow-screen drawer
//! - **Widget documents:** TOML files with validation, backups and atomic writes
//!
//! # Architecture
//!
//! - **`core`:** Display-free models (`TableModel`, `HeaderState`, key generation)
//! - **`config`:** Widget documents (parsing, validation, atomic updates, backups)
//! - **`ui`:** GTK4 components and demo application (MVC pattern, `gui` feature)
//!
//! # Examples
//!
//! ## Editing a row
//!
//! ```
//! use editable_widgets::core::{Column, Row, TableModel, TableOptions};
//!
//! let mut table = TableModel::new(
//!     vec![Row::new("1").with_field("name", "Ada")],
//!     vec![Column::new("name", "Name")],
//!     TableOptions::default(),
//! );
//!
//! let key = table.add_row();
//! table.update_field("name", "Grace");
//! table.commit_edit();
//!
//! assert_eq!(key.as_str(), "2");
//! assert_eq!(table.rows()[1].text("name"), "Grace");
//! ```
//!
//! ## Loading a document
//!
//! ```no_run
//! use editable_widgets::config::DocumentStore;
//!
//! let store = DocumentStore::new("widgets.toml".into())?;
//! let document = store.read_document()?;
//! println!("{} rows", document.rows.len());
//! # Ok::<(), editable_widgets::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Column, HeaderState, Row, RowKey, TableModel, TableOptions};
