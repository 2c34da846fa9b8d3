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

//! Row reordering
//!
//! The drag machinery only reports *which* row was moved and *onto which*
//! row it was dropped. Turning that into a new order is the job of a
//! `SortingStrategy`, injected into the table model so the ordering logic
//! can be exercised without any drag-and-drop at all.

use crate::core::types::{Row, RowKey};

/// Computes a new row order from a completed drag
pub trait SortingStrategy {
    /// Returns the reordered rows, or `None` if the drag changes nothing
    ///
    /// # Arguments
    ///
    /// * `rows` - Current rows in display order
    /// * `active` - Key of the dragged row
    /// * `over` - Key of the row it was dropped on
    fn reorder(&self, rows: &[Row], active: &RowKey, over: &RowKey) -> Option<Vec<Row>>;
}

/// Vertical list sorting: remove the dragged row, reinsert it at the
/// drop target's index
#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalListSorting;

impl SortingStrategy for VerticalListSorting {
    fn reorder(&self, rows: &[Row], active: &RowKey, over: &RowKey) -> Option<Vec<Row>> {
        if active == over {
            return None;
        }

        let from = rows.iter().position(|row| &row.key == active)?;
        let to = rows.iter().position(|row| &row.key == over)?;

        Some(array_move(rows.to_vec(), from, to))
    }
}

/// Moves the item at `from` so that it ends up at index `to`
///
/// Out-of-range indices leave the items unchanged.
///
/// # Example
/// ```
/// use editable_widgets::core::ordering::array_move;
///
/// assert_eq!(array_move(vec!['a', 'b', 'c', 'd'], 0, 2), vec!['b', 'c', 'a', 'd']);
/// ```
pub fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() || to >= items.len() || from == to {
        return items;
    }

    let item = items.remove(from);
    items.insert(to, item);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_move_backwards() {
        assert_eq!(array_move(vec![1, 2, 3, 4], 3, 1), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_array_move_out_of_range() {
        assert_eq!(array_move(vec![1, 2], 0, 5), vec![1, 2]);
    }
}
