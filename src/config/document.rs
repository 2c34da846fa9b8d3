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

//! Widget document format
//!
//! A widget document is a TOML file declaring one table (options, columns
//! and rows) and optionally one header:
//!
//! ```toml
//! [table]
//! key_strategy = "int"
//! bulk_delete = "confirm"
//!
//! [[table.columns]]
//! field = "name"
//! title = "Name"
//!
//! [[table.columns]]
//! field = "notes"
//! title = "Notes"
//! input_kind = "text-area"
//!
//! [[rows]]
//! key = "1"
//! name = "Ada"
//! notes = "First programmer"
//!
//! [header]
//! logo_uri = "logo.png"
//! theme = "dark"
//! route = "/pricing"
//!
//! [[header.items]]
//! key = "pricing"
//! label = "Pricing"
//! href = "/pricing"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::header::NavItem;
use crate::core::header::Theme;
use crate::core::types::{Column, InputKind, Row, TableOptions};

/// Complete widget document
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WidgetDocument {
    /// Table options and columns
    #[serde(default)]
    pub table: TableSection,
    /// Table rows in display order
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Optional navigation header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderConfig>,
}

/// `[table]` section: behaviour flags plus columns
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TableSection {
    #[serde(flatten)]
    pub options: TableOptions,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

/// Serialisable part of a column descriptor
///
/// Custom renderers are code, so they are attached after loading.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub field: String,
    pub title: String,
    #[serde(default)]
    pub input_kind: InputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
}

impl ColumnSpec {
    /// Builds the runtime column (without renderer)
    pub fn to_column(&self) -> Column {
        let column = Column::new(self.field.clone(), self.title.clone())
            .with_input_kind(self.input_kind);
        match self.width {
            Some(width) => column.with_width(width),
            None => column,
        }
    }
}

/// `[header]` section
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HeaderConfig {
    /// Logo image path
    #[serde(default)]
    pub logo_uri: String,
    /// Navigation items in display order
    #[serde(default)]
    pub items: Vec<NavItem>,
    /// Colour theme
    #[serde(default)]
    pub theme: Theme,
    /// Background override for the dark theme (`#rgb` or `#rrggbb`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_background: Option<String>,
    /// Background override for the light theme (`#rgb` or `#rrggbb`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_background: Option<String>,
    /// Route the header starts on
    #[serde(default = "default_route")]
    pub route: String,
}

fn default_route() -> String {
    "/".to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo_uri: String::new(),
            items: Vec::new(),
            theme: Theme::default(),
            dark_background: None,
            light_background: None,
            route: default_route(),
        }
    }
}

impl WidgetDocument {
    /// Runtime columns of the table
    pub fn columns(&self) -> Vec<Column> {
        self.table.columns.iter().map(ColumnSpec::to_column).collect()
    }
}

/// Parses a widget document from TOML
///
/// # Example
/// ```
/// use editable_widgets::config::parse_document;
///
/// let document = parse_document("[[rows]]\nkey = \"1\"\nname = \"Ada\"\n")?;
/// assert_eq!(document.rows.len(), 1);
/// assert!(document.table.options.editable);
/// # Ok::<(), editable_widgets::config::ConfigError>(())
/// ```
pub fn parse_document(content: &str) -> Result<WidgetDocument, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Renders a widget document as TOML
pub fn render_document(document: &WidgetDocument) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(document)?)
}
