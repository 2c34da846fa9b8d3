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

//! Controller tests
//!
//! Test for the MVC Controller logic

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::core::{Row, TableModel};
use crate::ui::Controller;

/// Helper: Creates test document with known content
fn create_test_document() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("widgets.toml");

    let content = r#"
[[table.columns]]
field = "name"
title = "Name"

[[rows]]
key = "1"
name = "Ada"

[[rows]]
key = "2"
name = "Grace"

[header]
route = "/docs"
"#;

    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_controller_creation() {
    let (_temp_dir, path) = create_test_document();
    let controller = Controller::new(path.clone()).unwrap();

    assert_eq!(controller.document_path(), path);
    assert!(controller.rows().is_empty(), "Nothing is loaded until load_document");
}

#[test]
fn test_load_document() {
    let (_temp_dir, path) = create_test_document();
    let controller = Controller::new(path).unwrap();

    assert_eq!(controller.load_document().unwrap(), 2);
    assert_eq!(controller.columns().len(), 1);
    assert!(controller.options().editable);
    assert_eq!(controller.header().unwrap().route, "/docs");
}

#[test]
fn test_persist_rows_round_trip() {
    let (_temp_dir, path) = create_test_document();
    let controller = Controller::new(path.clone()).unwrap();
    controller.load_document().unwrap();

    let rows = vec![Row::new("2").with_field("name", "Grace"), Row::new("1").with_field("name", "Ada")];
    controller.persist_rows(&rows).unwrap();

    let reread = Controller::new(path).unwrap();
    reread.load_document().unwrap();
    assert_eq!(reread.rows(), rows);
}

#[test]
fn test_reload_ignores_own_write() {
    let (_temp_dir, path) = create_test_document();
    let controller = Controller::new(path).unwrap();
    controller.load_document().unwrap();

    controller.persist_rows(&[Row::new("1").with_field("name", "Ada")]).unwrap();

    assert_eq!(controller.reload().unwrap(), None);
}

#[test]
fn test_reload_picks_up_external_edit() {
    let (_temp_dir, path) = create_test_document();
    let controller = Controller::new(path.clone()).unwrap();
    controller.load_document().unwrap();

    fs::write(&path, "[[rows]]\nkey = \"9\"\nname = \"Katherine\"\n").unwrap();

    let rows = controller.reload().unwrap().expect("external change should be reported");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("name"), "Katherine");
    assert_eq!(controller.rows(), rows);

    // Unchanged file reports nothing
    assert_eq!(controller.reload().unwrap(), None);
}

#[test]
fn test_table_listener_persists_every_mutation() {
    use std::rc::Rc;

    let (_temp_dir, path) = create_test_document();
    let controller = Rc::new(Controller::new(path.clone()).unwrap());
    controller.load_document().unwrap();

    let mut table = TableModel::new(controller.rows(), controller.columns(), controller.options());
    let sink = controller.clone();
    table.connect_rows_changed(move |rows| sink.persist_rows(rows).unwrap());

    let key = table.add_row();
    table.update_field("name", "Hedy");
    table.commit_edit();
    table.delete_row(&crate::core::RowKey::new("1"));

    let reread = Controller::new(path).unwrap();
    reread.load_document().unwrap();
    let names: Vec<String> = reread.rows().iter().map(|row| row.text("name")).collect();
    assert_eq!(names, vec!["Grace", "Hedy"]);
    assert_eq!(reread.rows()[1].key, key);
}
