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

//! Row lifecycle tests
//!
//! Add, edit, commit and cancel, including the rows-changed notifications
//! the host relies on.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{
    Column, InputKind, KeyStrategy, Row, RowKey, TableModel, TableOptions,
};

/// Helper: Three people with integer keys
fn people() -> Vec<Row> {
    vec![
        Row::new("1").with_field("name", "Ada").with_field("role", "Engineer"),
        Row::new("2").with_field("name", "Grace").with_field("role", "Admiral"),
        Row::new("3").with_field("name", "Linus").with_field("role", "Maintainer"),
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("role", "Role").with_input_kind(InputKind::TextArea),
    ]
}

fn create_table() -> TableModel {
    TableModel::new(people(), columns(), TableOptions::default())
}

/// Helper: Records every collection handed to the rows-changed listener
fn record_changes(table: &mut TableModel) -> Rc<RefCell<Vec<Vec<Row>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    table.connect_rows_changed(move |rows| sink.borrow_mut().push(rows.to_vec()));
    log
}

#[test]
fn test_add_row_appends_blank_row_in_edit_mode() {
    let mut table = create_table();

    let key = table.add_row();

    assert_eq!(key.as_str(), "4");
    assert_eq!(table.rows().len(), 4);
    assert!(table.is_editing(&key), "New row should be editing");

    let added = table.rows().last().unwrap();
    assert_eq!(added.key, key);
    assert_eq!(added.text("name"), "");
    assert_eq!(added.text("role"), "");
}

#[test]
fn test_add_row_with_uuid_keys_is_unique() {
    let options = TableOptions {
        key_strategy: KeyStrategy::Uuid,
        ..TableOptions::default()
    };
    let mut table = TableModel::new(people(), columns(), options);

    let key = table.add_row();

    let matching = table.rows().iter().filter(|row| row.key == key).count();
    assert_eq!(matching, 1, "Generated key should be unique");
    assert_eq!(key.as_str().len(), 36);
}

#[test]
fn test_add_row_notifies_listener() {
    let mut table = create_table();
    let changes = record_changes(&mut table);

    table.add_row();

    let changes = changes.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].len(), 4);
}

#[test]
fn test_begin_edit_requires_editable() {
    let options = TableOptions {
        editable: false,
        ..TableOptions::default()
    };
    let mut table = TableModel::new(people(), columns(), options);

    assert!(!table.begin_edit(&RowKey::new("1")));
    assert!(!table.has_session());
}

#[test]
fn test_begin_edit_unknown_row() {
    let mut table = create_table();
    assert!(!table.begin_edit(&RowKey::new("99")));
    assert!(table.editing_key().is_none());
}

#[test]
fn test_field_edits_do_not_touch_displayed_rows() {
    let mut table = create_table();
    let changes = record_changes(&mut table);
    let key = RowKey::new("2");

    table.begin_edit(&key);
    assert!(table.update_field("name", "Hopper"));

    assert_eq!(table.row(&key).unwrap().text("name"), "Grace");
    assert_eq!(table.session().unwrap().working().text("name"), "Hopper");
    assert!(changes.borrow().is_empty(), "Field edits should not notify");
}

#[test]
fn test_update_field_without_session() {
    let mut table = create_table();
    assert!(!table.update_field("name", "nobody"));
}

#[test]
fn test_commit_replaces_row_at_same_index() {
    let mut table = create_table();
    let key = RowKey::new("2");

    table.begin_edit(&key);
    table.update_field("name", "Hopper");
    assert!(table.commit_edit());

    let keys: Vec<&str> = table.rows().iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, vec!["1", "2", "3"], "Order should be unchanged");
    assert_eq!(table.rows()[1].text("name"), "Hopper");
    assert_eq!(table.rows()[1].text("role"), "Admiral");
    assert_eq!(table.rows()[0], people()[0]);
    assert_eq!(table.rows()[2], people()[2]);
    assert!(!table.has_session());
}

#[test]
fn test_commit_after_row_vanished_is_silent() {
    let mut table = create_table();
    let changes = record_changes(&mut table);
    let key = RowKey::new("3");

    table.begin_edit(&key);
    table.set_selected(&key, true);
    table.delete_selected();
    let notifications = changes.borrow().len();

    assert!(!table.commit_edit(), "Commit should be a no-op");
    assert_eq!(table.rows().len(), 2);
    assert!(!table.has_session(), "Session should end anyway");
    assert_eq!(changes.borrow().len(), notifications);
}

#[test]
fn test_cancel_existing_row_restores_values() {
    let mut table = create_table();
    let key = RowKey::new("1");

    table.begin_edit(&key);
    table.update_field("name", "Lovelace");
    table.update_field("role", "Countess");
    assert!(table.cancel_edit());

    assert_eq!(table.rows().len(), 3);
    assert_eq!(table.rows(), people().as_slice());
    assert!(!table.has_session());
}

#[test]
fn test_cancel_new_row_removes_it() {
    let mut table = create_table();

    let key = table.add_row();
    table.update_field("name", "Draft");
    assert!(table.cancel_edit());

    assert_eq!(table.rows().len(), 3);
    assert!(table.row(&key).is_none());
    assert!(!table.has_session());
}

#[test]
fn test_commit_new_row_keeps_it() {
    let mut table = create_table();

    let key = table.add_row();
    table.update_field("name", "Margaret");
    table.commit_edit();

    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.row(&key).unwrap().text("name"), "Margaret");

    // Once committed, a new row behaves like any other
    table.begin_edit(&key);
    table.update_field("name", "Hamilton");
    table.cancel_edit();
    assert_eq!(table.row(&key).unwrap().text("name"), "Margaret");
}

#[test]
fn test_cancel_without_session() {
    let mut table = create_table();
    assert!(!table.cancel_edit());
    assert!(!table.commit_edit());
}

#[test]
fn test_second_edit_replaces_session() {
    let mut table = create_table();

    table.begin_edit(&RowKey::new("1"));
    table.update_field("name", "changed");
    table.begin_edit(&RowKey::new("2"));

    assert!(table.is_editing(&RowKey::new("2")));
    assert!(!table.can_begin_edit());
    assert_eq!(table.rows()[0].text("name"), "Ada");
}

#[test]
fn test_display_row_shows_working_copy() {
    let mut table = create_table();
    let key = RowKey::new("1");
    table.begin_edit(&key);
    table.update_field("name", "Working");

    let stored = table.row(&key).unwrap().clone();
    assert_eq!(table.display_row(&stored).text("name"), "Working");

    let other = table.rows()[1].clone();
    assert_eq!(table.display_row(&other).text("name"), "Grace");
}

#[test]
fn test_external_replacement_clears_selection_and_orphaned_session() {
    let mut table = create_table();
    let changes = record_changes(&mut table);

    table.set_selected(&RowKey::new("1"), true);
    table.begin_edit(&RowKey::new("2"));
    table.set_rows(people().into_iter().take(1).collect());

    assert!(table.selection().is_empty());
    assert!(changes.borrow().is_empty(), "External data should not echo");
    assert!(!table.has_session(), "Row 2 is gone, so is its edit");
    assert!(table.can_begin_edit());
    assert!(!table.commit_edit());
    assert_eq!(table.rows().len(), 1);
}

#[test]
fn test_external_replacement_keeps_session_on_present_row() {
    let mut table = create_table();
    let key = RowKey::new("2");

    table.begin_edit(&key);
    table.update_field("name", "Hopper");
    table.set_rows(people());

    assert!(table.is_editing(&key));
    assert!(table.commit_edit());
    assert_eq!(table.row(&key).unwrap().text("name"), "Hopper");
}

#[test]
fn test_second_add_discards_unconfirmed_new_row() {
    let mut table = create_table();
    let changes = record_changes(&mut table);

    let first = table.add_row();
    let second = table.add_row();

    assert_eq!(table.rows().len(), 4, "Only one blank row at a time");
    assert!(table.is_editing(&second));
    assert_eq!(changes.borrow().last().unwrap().len(), 4);

    assert!(table.cancel_edit());
    assert_eq!(table.rows(), people().as_slice());
    assert!(table.row(&first).is_none() && table.row(&second).is_none());
}

#[test]
fn test_add_while_editing_existing_row_keeps_stored_values() {
    let mut table = create_table();

    table.begin_edit(&RowKey::new("1"));
    table.update_field("name", "unsaved");
    let key = table.add_row();

    assert!(table.is_editing(&key));
    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.rows()[0].text("name"), "Ada");
}
