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

//! Row key generation
//!
//! Two policies are supported:
//! - **Sequential integer**: one above the largest numeric key (or `1`)
//! - **Random UUID**: a fresh version-4 UUID
//!
//! Keys that do not parse as a non-negative integer are ignored by the
//! sequential policy. The generated key is always the canonical decimal form
//! of a number larger than every numeric key, so it cannot collide with any
//! existing key.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{Row, RowKey};

/// Key generation policy
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStrategy {
    /// `max(numeric keys, 0) + 1`
    #[default]
    Int,
    /// Random version-4 UUID
    Uuid,
}

/// Generates a key for a new row appended to `rows`
///
/// # Example
/// ```
/// use editable_widgets::core::{generate_key, KeyStrategy, Row};
///
/// let rows = vec![Row::new("1"), Row::new("4"), Row::new("draft")];
/// assert_eq!(generate_key(KeyStrategy::Int, &rows).as_str(), "5");
/// ```
pub fn generate_key(strategy: KeyStrategy, rows: &[Row]) -> RowKey {
    match strategy {
        KeyStrategy::Int => next_sequential_key(rows.iter().map(|row| &row.key)),
        KeyStrategy::Uuid => RowKey::new(Uuid::new_v4().to_string()),
    }
}

/// Returns one above the largest numeric key, or `"1"` if there is none
pub fn next_sequential_key<'a, I>(keys: I) -> RowKey
where
    I: IntoIterator<Item = &'a RowKey>,
{
    let max = keys
        .into_iter()
        .filter_map(numeric_key)
        .max()
        .unwrap_or(0);

    // u64::MAX + 1 still fits
    RowKey::new((u128::from(max) + 1).to_string())
}

/// Parses a key as a non-negative integer
///
/// The whole trimmed key must be digits: `"12abc"` is text, not 12.
/// Returns `None` for anything else; negative keys could never raise the
/// maximum above zero, so they are treated the same as text.
pub fn numeric_key(key: &RowKey) -> Option<u64> {
    key.as_str().trim().parse::<u64>().ok()
}
