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

//! Editable table model
//!
//! Owns the row collection of one table together with its edit session,
//! selection set and pending bulk delete. Every operation that changes the
//! rows replaces the whole collection and hands the replacement to the
//! registered rows-changed listeners; the model never patches data the host
//! gave it.
//!
//! # Row lifecycle
//!
//! ```text
//!            begin_edit                 commit_edit
//! Viewing ───────────────▶ Editing ────────────────▶ Viewing
//!    ▲                        │
//!    └──────── cancel_edit ───┘   (a new row is removed instead)
//! ```
//!
//! At most one row is editing at a time. Operations that refer to a row
//! which no longer exists are silent no-ops.

use log::{debug, warn};
use std::collections::BTreeSet;
use std::fmt;

use crate::core::keygen::generate_key;
use crate::core::ordering::{SortingStrategy, VerticalListSorting};
use crate::core::session::{EditOrigin, EditSession};
use crate::core::types::{BulkDeleteMode, CellValue, Column, Row, RowKey, TableOptions};

/// Listener receiving the full replacement row collection
pub type RowsListener = Box<dyn Fn(&[Row])>;

/// Result of asking for the selected rows to be deleted
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BulkDeleteOutcome {
    /// Nothing is selected
    NothingSelected,
    /// Rows were removed immediately
    Deleted(usize),
    /// The delete waits for `confirm_delete_selected`
    AwaitingConfirmation,
}

/// State of one editable table
pub struct TableModel {
    rows: Vec<Row>,
    columns: Vec<Column>,
    options: TableOptions,
    session: Option<EditSession>,
    selection: BTreeSet<RowKey>,
    pending_bulk_delete: bool,
    sorting: Box<dyn SortingStrategy>,
    listeners: Vec<RowsListener>,
}

impl TableModel {
    /// Creates a model over the host's initial rows
    ///
    /// # Example
    /// ```
    /// use editable_widgets::core::{Column, Row, TableModel, TableOptions};
    ///
    /// let mut table = TableModel::new(
    ///     vec![Row::new("1").with_field("name", "Ada")],
    ///     vec![Column::new("name", "Name")],
    ///     TableOptions::default(),
    /// );
    /// let key = table.add_row();
    /// assert_eq!(key.as_str(), "2");
    /// assert!(table.is_editing(&key));
    /// ```
    pub fn new(rows: Vec<Row>, columns: Vec<Column>, options: TableOptions) -> Self {
        Self {
            rows,
            columns,
            options,
            session: None,
            selection: BTreeSet::new(),
            pending_bulk_delete: false,
            sorting: Box::new(VerticalListSorting),
            listeners: Vec::new(),
        }
    }

    /// Replaces the reorder strategy
    pub fn with_sorting(mut self, sorting: impl SortingStrategy + 'static) -> Self {
        self.sorting = Box::new(sorting);
        self
    }

    /// Registers a listener for row replacements
    ///
    /// Listeners run after every add, commit, cancel, delete and reorder,
    /// with the complete new collection. They must not call back into the
    /// model.
    pub fn connect_rows_changed<F>(&mut self, listener: F)
    where
        F: Fn(&[Row]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Current rows in display order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column descriptors
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Behaviour flags
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Row with the given key, if present
    pub fn row(&self, key: &RowKey) -> Option<&Row> {
        self.rows.iter().find(|row| &row.key == key)
    }

    fn index_of(&self, key: &RowKey) -> Option<usize> {
        self.rows.iter().position(|row| &row.key == key)
    }

    /// Replaces the rows from outside (e.g. the host reloaded its data)
    ///
    /// Clears the selection and any pending bulk delete. Listeners are not
    /// notified, since the host already owns this collection. An open edit
    /// session survives only if its row is still present.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        debug!("📥 rows replaced externally ({} rows)", rows.len());
        self.rows = rows;
        self.selection.clear();
        self.pending_bulk_delete = false;
        self.drop_orphaned_session();
    }

    /// Ends a session whose row is no longer in the table
    fn drop_orphaned_session(&mut self) {
        let orphaned = self
            .session
            .as_ref()
            .is_some_and(|session| self.index_of(session.key()).is_none());

        if orphaned {
            if let Some(session) = self.session.take() {
                debug!("✏️ row {} is gone, ending its edit", session.key());
            }
        }
    }

    fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        for listener in &self.listeners {
            listener(&self.rows);
        }
    }

    // ------------------------------------------------------------------
    // Edit lifecycle
    // ------------------------------------------------------------------

    /// Appends an empty row and puts it straight into edit mode
    ///
    /// The key comes from the configured strategy and is unique among the
    /// current rows. A new row still waiting for its first commit is
    /// discarded first; an edit of an existing row is abandoned.
    pub fn add_row(&mut self) -> RowKey {
        let mut rows = self.rows.clone();

        // An unconfirmed new row would otherwise be stranded
        if let Some(previous) = self.session.take() {
            warn!("➕ adding a row while {} is still being edited", previous.key());
            if previous.is_new_row() {
                rows.retain(|row| row.key != *previous.key());
                debug!("🚫 discarded new row {}", previous.key());
            }
        }

        let key = generate_key(self.options.key_strategy, &rows);
        let row = Row::blank(key.clone(), &self.columns);
        self.session = Some(EditSession::new_row(&row));

        rows.push(row);
        self.replace_rows(rows);

        debug!("➕ added row {}", key);
        key
    }

    /// Starts editing an existing row
    ///
    /// Returns false if editing is disabled or the row does not exist.
    /// Starting a second edit while one is open is left to the caller to
    /// prevent; the open session is replaced.
    pub fn begin_edit(&mut self, key: &RowKey) -> bool {
        if !self.options.editable {
            debug!("✏️ editing disabled, ignoring edit of {}", key);
            return false;
        }

        let Some(row) = self.row(key) else {
            debug!("✏️ row {} not found, nothing to edit", key);
            return false;
        };
        let session = EditSession::existing(row);

        if let Some(previous) = &self.session {
            warn!("✏️ editing {} while {} is still being edited", key, previous.key());
        }
        self.session = Some(session);

        debug!("✏️ editing {}", key);
        true
    }

    /// Updates one field of the row under edit
    ///
    /// Only the working copy changes; the displayed rows stay as they are
    /// until the edit is committed. Returns false without a session.
    pub fn update_field(&mut self, field: &str, value: impl Into<CellValue>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Commits the working copy in place of the edited row
    ///
    /// The row keeps its index. If the row has disappeared in the meantime
    /// the session simply ends and the rows are left alone. Returns true if
    /// the rows changed.
    pub fn commit_edit(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        let Some(index) = self.index_of(session.key()) else {
            debug!("✅ row {} vanished before commit, dropping edit", session.key());
            return false;
        };

        let key = session.key().clone();
        let mut rows = self.rows.clone();
        rows[index] = session.into_working();
        self.replace_rows(rows);

        debug!("✅ committed {}", key);
        true
    }

    /// Abandons the edit
    ///
    /// An existing row gets its snapshot written back; a new row is
    /// removed. Returns true if the rows changed.
    pub fn cancel_edit(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        let Some(index) = self.index_of(session.key()) else {
            debug!("🚫 row {} vanished before cancel", session.key());
            return false;
        };

        let mut rows = self.rows.clone();
        match session.origin() {
            EditOrigin::Existing(snapshot) => {
                rows[index] = snapshot.clone();
                debug!("🚫 restored {}", session.key());
            }
            EditOrigin::New => {
                rows.remove(index);
                debug!("🚫 discarded new row {}", session.key());
            }
        }
        self.replace_rows(rows);
        true
    }

    /// Open edit session, if any
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Key of the row under edit
    pub fn editing_key(&self) -> Option<&RowKey> {
        self.session.as_ref().map(EditSession::key)
    }

    /// Returns true if the given row is under edit
    pub fn is_editing(&self, key: &RowKey) -> bool {
        self.editing_key() == Some(key)
    }

    /// Returns true if any row is under edit
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true if an edit may start now
    ///
    /// Views use this to disable edit actions while another row is open.
    pub fn can_begin_edit(&self) -> bool {
        self.options.editable && self.session.is_none()
    }

    /// Row as it should be displayed: the working copy while editing
    pub fn display_row<'a>(&'a self, row: &'a Row) -> &'a Row {
        match &self.session {
            Some(session) if session.key() == &row.key => session.working(),
            _ => row,
        }
    }

    // ------------------------------------------------------------------
    // Deletion and selection
    // ------------------------------------------------------------------

    /// Deletes a single row
    ///
    /// Clears the selection. If the row was under edit the session ends
    /// with it. Returns false if the row does not exist.
    pub fn delete_row(&mut self, key: &RowKey) -> bool {
        if self.index_of(key).is_none() {
            debug!("🗑️ row {} not found, nothing to delete", key);
            return false;
        }

        if self.is_editing(key) {
            self.session = None;
        }

        let rows = self.rows.iter().filter(|row| &row.key != key).cloned().collect();
        self.selection.clear();
        self.pending_bulk_delete = false;
        self.replace_rows(rows);

        debug!("🗑️ deleted row {}", key);
        true
    }

    /// Marks or unmarks a row for bulk deletion
    ///
    /// Unknown keys are ignored.
    pub fn set_selected(&mut self, key: &RowKey, selected: bool) {
        if selected {
            if self.index_of(key).is_some() {
                self.selection.insert(key.clone());
            }
        } else {
            self.selection.remove(key);
        }
    }

    /// Replaces the whole selection
    pub fn set_selection<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = RowKey>,
    {
        self.selection = keys
            .into_iter()
            .filter(|key| self.rows.iter().any(|row| &row.key == key))
            .collect();
    }

    /// Keys marked for bulk deletion
    pub fn selection(&self) -> &BTreeSet<RowKey> {
        &self.selection
    }

    /// Returns true if the row is marked for bulk deletion
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selection.contains(key)
    }

    /// Returns true if a bulk delete waits for confirmation
    pub fn has_pending_bulk_delete(&self) -> bool {
        self.pending_bulk_delete
    }

    /// Asks for the selected rows to be deleted
    ///
    /// Depending on `bulk_delete`, this deletes right away or waits for
    /// `confirm_delete_selected`.
    pub fn request_delete_selected(&mut self) -> BulkDeleteOutcome {
        if self.selection.is_empty() {
            return BulkDeleteOutcome::NothingSelected;
        }

        match self.options.bulk_delete {
            BulkDeleteMode::Immediate => BulkDeleteOutcome::Deleted(self.delete_selected()),
            BulkDeleteMode::Confirm => {
                self.pending_bulk_delete = true;
                debug!("🗑️ waiting for confirmation to delete {} rows", self.selection.len());
                BulkDeleteOutcome::AwaitingConfirmation
            }
        }
    }

    /// Runs a bulk delete that was waiting for confirmation
    ///
    /// Returns the number of rows removed (zero if nothing was pending).
    pub fn confirm_delete_selected(&mut self) -> usize {
        if !self.pending_bulk_delete {
            return 0;
        }
        self.delete_selected()
    }

    /// Drops a bulk delete that was waiting for confirmation
    ///
    /// The selection is kept so the user can try again.
    pub fn dismiss_delete_selected(&mut self) {
        self.pending_bulk_delete = false;
    }

    /// Removes every selected row in one replacement and clears the selection
    ///
    /// An open edit session on a surviving row is left alone; one on a
    /// deleted row ends with it.
    pub fn delete_selected(&mut self) -> usize {
        self.pending_bulk_delete = false;
        if self.selection.is_empty() {
            return 0;
        }

        let selection = std::mem::take(&mut self.selection);
        let before = self.rows.len();
        let rows: Vec<Row> = self
            .rows
            .iter()
            .filter(|row| !selection.contains(&row.key))
            .cloned()
            .collect();
        let removed = before - rows.len();
        self.replace_rows(rows);
        self.drop_orphaned_session();

        debug!("🗑️ deleted {} rows", removed);
        removed
    }

    // ------------------------------------------------------------------
    // Reordering
    // ------------------------------------------------------------------

    /// Applies a completed drag of `active` onto `over`
    ///
    /// A drop outside any row (`over` is `None`), onto the dragged row
    /// itself, or involving unknown keys changes nothing. Keys, selection
    /// and edit state are untouched. Returns true if the order changed.
    pub fn reorder(&mut self, active: &RowKey, over: Option<&RowKey>) -> bool {
        let Some(over) = over else {
            return false;
        };

        match self.sorting.reorder(&self.rows, active, over) {
            Some(rows) => {
                self.replace_rows(rows);
                debug!("↕️ moved {} onto {}", active, over);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableModel")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("session", &self.session)
            .field("selection", &self.selection)
            .field("pending_bulk_delete", &self.pending_bulk_delete)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
