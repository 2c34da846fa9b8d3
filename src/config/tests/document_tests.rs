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

//! Widget document parsing tests

use super::SAMPLE_DOCUMENT;
use crate::config::{parse_document, render_document, ConfigError, WidgetDocument};
use crate::core::{
    BulkDeleteMode, CellValue, DragContext, InputKind, KeyStrategy, RowKey, TableOptions, Theme,
};

#[test]
fn test_parse_sample_document() {
    let document = parse_document(SAMPLE_DOCUMENT).unwrap();

    assert_eq!(document.rows.len(), 2);
    assert_eq!(document.rows[1].key, RowKey::new("2"));
    assert_eq!(document.rows[1].text("name"), "Grace");

    let columns = document.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1].input_kind, InputKind::TextArea);
    assert_eq!(columns[1].width, Some(240));

    let options = &document.table.options;
    assert_eq!(options.key_strategy, KeyStrategy::Int);
    assert_eq!(options.bulk_delete, BulkDeleteMode::Confirm);
    assert_eq!(
        options.row_styles.get(&RowKey::new("2")).map(String::as_str),
        Some("background: #fff3cd;")
    );

    let header = document.header.unwrap();
    assert_eq!(header.theme, Theme::Dark);
    assert_eq!(header.route, "/pricing");
    assert_eq!(header.items.len(), 2);
}

#[test]
fn test_empty_document_uses_defaults() {
    let document = parse_document("").unwrap();

    assert!(document.rows.is_empty());
    assert!(document.header.is_none());
    assert_eq!(document.table.options, TableOptions::default());
}

#[test]
fn test_partial_options_keep_other_defaults() {
    let document = parse_document("[table]\ndraggable = false\ndrag_context = \"external\"\n").unwrap();
    let options = &document.table.options;

    assert!(!options.draggable);
    assert_eq!(options.drag_context, DragContext::External);
    assert!(options.editable, "Unset flags default to enabled");
    assert!(options.multi_delete);
}

#[test]
fn test_numeric_cells_keep_their_type() {
    let document = parse_document("[[rows]]\nkey = \"7\"\nage = 36\nscore = 9.5\n").unwrap();
    let row = &document.rows[0];

    assert_eq!(row.get("age"), Some(&CellValue::Integer(36)));
    assert_eq!(row.get("score"), Some(&CellValue::Float(9.5)));
}

#[test]
fn test_nested_cell_value_is_rejected() {
    let result = parse_document("[[rows]]\nkey = \"1\"\nname = [\"a\", \"b\"]\n");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_render_then_parse_preserves_document() {
    let document = parse_document(SAMPLE_DOCUMENT).unwrap();

    let rendered = render_document(&document).unwrap();
    let reparsed: WidgetDocument = parse_document(&rendered).unwrap();

    assert_eq!(reparsed, document);
}
