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

//! src/core/types.rs
//!
//! Core type definitions for the editable table
//!
//! This module defines the fundamental types used throughout the crate:
//! - `RowKey`: Unique identity of a row
//! - `CellValue`: A scalar cell value (text or number)
//! - `Row`: One keyed record of the table
//! - `Column`: Static column descriptor (field, title, input kind, renderer)
//! - `TableOptions`: Behaviour flags toggled per table instance
//!
//! Rows, keys and options implement serialization so that a whole table can
//! be declared in (and persisted to) a widget document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::core::keygen::KeyStrategy;

/// Unique identity of a row
///
/// Keys are opaque strings. Under the sequential strategy they happen to be
/// decimal integers, under the UUID strategy they are hyphenated v4 UUIDs.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RowKey(String);

impl RowKey {
    /// Creates a key from anything string-like
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key is empty (never valid inside a table)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A scalar cell value
///
/// Cells hold either text or a number. Editing always produces text, so a
/// numeric cell becomes a text cell once it has been edited.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

/// One record of the table
///
/// Identity is the `key`; everything else is a field-name → value mapping.
///
/// # Example
/// ```
/// use editable_widgets::core::{CellValue, Row};
///
/// let row = Row::new("1").with_field("name", "Ada").with_field("age", 36_i64);
/// assert_eq!(row.get("name"), Some(&CellValue::from("Ada")));
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Row {
    /// Unique row identity
    pub key: RowKey,

    /// Field values keyed by column field name
    #[serde(flatten)]
    pub fields: BTreeMap<String, CellValue>,
}

impl Row {
    /// Creates a row with the given key and no fields
    pub fn new(key: impl Into<RowKey>) -> Self {
        Self {
            key: key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Creates a row whose every column field holds empty text
    pub fn blank(key: RowKey, columns: &[Column]) -> Self {
        let fields = columns
            .iter()
            .map(|column| (column.field.clone(), CellValue::default()))
            .collect();

        Self { key, fields }
    }

    /// Returns a copy of this row with one field replaced
    ///
    /// The original row is left untouched; edits during a session flow
    /// through this instead of mutating displayed data.
    pub fn with_field(&self, field: &str, value: impl Into<CellValue>) -> Self {
        let mut next = self.clone();
        next.fields.insert(field.to_string(), value.into());
        next
    }

    /// Returns the value of a field, if present
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Returns the display text of a field (empty if missing)
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }
}

/// Kind of input widget used while a cell is being edited
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Single-line entry
    #[default]
    Text,
    /// Multi-line text area
    TextArea,
}

/// Custom cell renderer
///
/// Receives the cell value and the whole row, and fully overrides the
/// default view and edit rendering of its column.
pub type CellRenderer = Rc<dyn Fn(&CellValue, &Row) -> String>;

/// Static column descriptor
#[derive(Clone)]
pub struct Column {
    /// Field name in each row
    pub field: String,
    /// Header title
    pub title: String,
    /// Editor used while a row is being edited
    pub input_kind: InputKind,
    /// Requested width in pixels
    pub width: Option<i32>,
    /// Optional renderer overriding default view/edit rendering
    pub renderer: Option<CellRenderer>,
}

impl Column {
    /// Creates a single-line text column with no width or renderer
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            input_kind: InputKind::Text,
            width: None,
            renderer: None,
        }
    }

    /// Sets the editor kind
    pub fn with_input_kind(mut self, input_kind: InputKind) -> Self {
        self.input_kind = input_kind;
        self
    }

    /// Sets the requested width
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Installs a custom renderer
    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&CellValue, &Row) -> String + 'static,
    {
        self.renderer = Some(Rc::new(renderer));
        self
    }

    /// Renders the cell of `row` under this column
    ///
    /// Uses the custom renderer when present, the plain value otherwise.
    pub fn render(&self, row: &Row) -> String {
        let value = row.get(&self.field).cloned().unwrap_or_default();
        match &self.renderer {
            Some(renderer) => renderer(&value, row),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("title", &self.title)
            .field("input_kind", &self.input_kind)
            .field("width", &self.width)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// How "Delete Selected Rows" is gated
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulkDeleteMode {
    /// Delete as soon as the button is pressed
    Immediate,
    /// Ask the user to confirm first
    #[default]
    Confirm,
}

/// Who owns the drag-and-drop context around the table
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragContext {
    /// The table reorders its own rows on drop
    #[default]
    SelfManaged,
    /// Drops are forwarded to the host, which decides what to do
    External,
}

/// Horizontal alignment of the table's action buttons
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Behaviour flags of an editable table
///
/// Each flag toggles one behaviour independently. Defaults enable
/// everything, confirm before bulk deletes, and generate integer keys.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TableOptions {
    /// Rows can enter edit mode
    pub editable: bool,
    /// Rows can be reordered by dragging
    pub draggable: bool,
    /// Show the "Add row" button
    pub addable: bool,
    /// Show a delete action on every row
    pub deletable: bool,
    /// Allow selecting several rows for bulk deletion
    pub multi_delete: bool,
    /// Confirmation policy for bulk deletion
    pub bulk_delete: BulkDeleteMode,
    /// Drag-and-drop ownership
    pub drag_context: DragContext,
    /// Key generation policy for added rows
    pub key_strategy: KeyStrategy,
    /// Alignment of the action buttons
    pub align: ActionAlign,
    /// Custom CSS declarations per row key
    pub row_styles: BTreeMap<RowKey, String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            editable: true,
            draggable: true,
            addable: true,
            deletable: true,
            multi_delete: true,
            bulk_delete: BulkDeleteMode::Confirm,
            drag_context: DragContext::SelfManaged,
            key_strategy: KeyStrategy::Int,
            align: ActionAlign::Left,
            row_styles: BTreeMap::new(),
        }
    }
}

impl TableOptions {
    /// Returns true if the table shows an action column
    pub fn has_action_column(&self) -> bool {
        self.editable || self.deletable
    }
}

/// Returns the CSS class given to a row with a custom style
///
/// ASCII letters, digits and `-` pass through. Every other character,
/// `_` included, becomes `_<hex code point>_`, so distinct keys never
/// share a class.
pub fn row_css_class(key: &RowKey) -> String {
    let mut class = String::from("custom-row-");
    for c in key.as_str().chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            class.push(c);
        } else {
            class.push_str(&format!("_{:x}_", u32::from(c)));
        }
    }
    class
}

/// Builds the style sheet for `row_styles`
///
/// One `.custom-row-<key> { <style> }` rule per entry, in key order.
pub fn row_styles_css(row_styles: &BTreeMap<RowKey, String>) -> String {
    row_styles
        .iter()
        .map(|(key, style)| format!(".{} {{ {} }}\n", row_css_class(key), style.trim()))
        .collect()
}
