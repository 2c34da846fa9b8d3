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

//! src/core/mod.rs
//!
//! Core widget state
//!
//! This module contains the display-free models behind both widgets:
//! - Type definitions for rows, columns and table options
//! - Row key generation (sequential integers or UUIDs)
//! - The edit session and the table model driving the row lifecycle
//! - Pluggable row reordering
//! - Header navigation and drawer state
//!
//! Nothing in here touches GTK, so every behaviour can be unit tested
//! without a display server.

pub mod header;
pub mod keygen;
pub mod ordering;
pub mod session;
pub mod table;
pub mod types;

pub use header::{HeaderLayout, HeaderState, NavItem, Theme, Viewport};
pub use keygen::{generate_key, KeyStrategy};
pub use ordering::{SortingStrategy, VerticalListSorting};
pub use session::{EditOrigin, EditSession};
pub use table::{BulkDeleteOutcome, TableModel};
pub use types::*;

#[cfg(test)]
mod tests;
