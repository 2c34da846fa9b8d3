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

//! Reordering tests

use std::cell::Cell;
use std::rc::Rc;

use crate::core::{Column, Row, RowKey, SortingStrategy, TableModel, TableOptions};

fn letters() -> TableModel {
    let rows = ["a", "b", "c", "d"].iter().map(|key| Row::new(*key)).collect();
    TableModel::new(rows, vec![Column::new("name", "Name")], TableOptions::default())
}

fn order(table: &TableModel) -> Vec<&str> {
    table.rows().iter().map(|row| row.key.as_str()).collect()
}

#[test]
fn test_move_first_onto_third() {
    let mut table = letters();

    assert!(table.reorder(&RowKey::new("a"), Some(&RowKey::new("c"))));

    assert_eq!(order(&table), vec!["b", "c", "a", "d"]);
}

#[test]
fn test_move_last_onto_first() {
    let mut table = letters();

    table.reorder(&RowKey::new("d"), Some(&RowKey::new("a")));

    assert_eq!(order(&table), vec!["d", "a", "b", "c"]);
}

#[test]
fn test_drop_on_itself_is_noop() {
    let mut table = letters();
    let notified = Rc::new(Cell::new(false));
    let flag = notified.clone();
    table.connect_rows_changed(move |_| flag.set(true));

    assert!(!table.reorder(&RowKey::new("b"), Some(&RowKey::new("b"))));

    assert_eq!(order(&table), vec!["a", "b", "c", "d"]);
    assert!(!notified.get(), "No-op reorder should not notify");
}

#[test]
fn test_drop_outside_rows_is_noop() {
    let mut table = letters();
    assert!(!table.reorder(&RowKey::new("a"), None));
    assert!(!table.reorder(&RowKey::new("zz"), Some(&RowKey::new("a"))));
    assert_eq!(order(&table), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_reorder_leaves_session_and_selection() {
    let mut table = letters();
    table.set_selected(&RowKey::new("d"), true);
    table.begin_edit(&RowKey::new("b"));

    table.reorder(&RowKey::new("a"), Some(&RowKey::new("d")));

    assert!(table.is_editing(&RowKey::new("b")));
    assert!(table.is_selected(&RowKey::new("d")));
    assert_eq!(order(&table), vec!["b", "c", "d", "a"]);

    // Commit lands on the row's new index
    table.update_field("name", "bee");
    table.commit_edit();
    assert_eq!(table.rows()[0].text("name"), "bee");
}

/// Strategy that always swaps the two rows
struct SwapSorting;

impl SortingStrategy for SwapSorting {
    fn reorder(&self, rows: &[Row], active: &RowKey, over: &RowKey) -> Option<Vec<Row>> {
        let from = rows.iter().position(|row| &row.key == active)?;
        let to = rows.iter().position(|row| &row.key == over)?;
        let mut next = rows.to_vec();
        next.swap(from, to);
        Some(next)
    }
}

#[test]
fn test_injected_strategy_is_used() {
    let mut table = letters().with_sorting(SwapSorting);

    table.reorder(&RowKey::new("a"), Some(&RowKey::new("c")));

    assert_eq!(order(&table), vec!["c", "b", "a", "d"]);
}
