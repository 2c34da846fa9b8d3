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

//! Edit session state
//!
//! An edit session ties together the key of the row being edited, where
//! that row came from (an existing row with a rollback snapshot, or a freshly
//! added row that has never been confirmed), and the working copy that field
//! edits are applied to.

use crate::core::types::{CellValue, Row, RowKey};

/// Where the row under edit came from
#[derive(Clone, Debug, PartialEq)]
pub enum EditOrigin {
    /// An existing row; the snapshot holds its pre-edit values
    Existing(Row),
    /// A row added by "Add row" and not yet committed
    New,
}

/// The single in-flight edit of a table
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    key: RowKey,
    origin: EditOrigin,
    working: Row,
}

impl EditSession {
    /// Starts editing an existing row, snapshotting it for rollback
    pub fn existing(row: &Row) -> Self {
        Self {
            key: row.key.clone(),
            origin: EditOrigin::Existing(row.clone()),
            working: row.clone(),
        }
    }

    /// Starts editing a freshly added row
    pub fn new_row(row: &Row) -> Self {
        Self {
            key: row.key.clone(),
            origin: EditOrigin::New,
            working: row.clone(),
        }
    }

    /// Key of the row under edit
    pub fn key(&self) -> &RowKey {
        &self.key
    }

    /// Origin of the row under edit
    pub fn origin(&self) -> &EditOrigin {
        &self.origin
    }

    /// Pre-edit values, if the row existed before the session
    pub fn snapshot(&self) -> Option<&Row> {
        match &self.origin {
            EditOrigin::Existing(snapshot) => Some(snapshot),
            EditOrigin::New => None,
        }
    }

    /// Returns true if the row was added in this session
    pub fn is_new_row(&self) -> bool {
        matches!(self.origin, EditOrigin::New)
    }

    /// Current working copy
    pub fn working(&self) -> &Row {
        &self.working
    }

    /// Replaces one field of the working copy
    pub fn set_field(&mut self, field: &str, value: impl Into<CellValue>) {
        self.working = self.working.with_field(field, value);
    }

    /// Consumes the session, yielding the working copy to commit
    pub fn into_working(self) -> Row {
        self.working
    }
}
