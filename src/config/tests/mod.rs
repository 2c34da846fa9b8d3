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

mod document_tests;
mod transaction_tests;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small but complete widget document
pub(crate) const SAMPLE_DOCUMENT: &str = r##"[table]
key_strategy = "int"
bulk_delete = "confirm"

[table.row_styles]
"2" = "background: #fff3cd;"

[[table.columns]]
field = "name"
title = "Name"

[[table.columns]]
field = "notes"
title = "Notes"
input_kind = "text-area"
width = 240

[[rows]]
key = "1"
name = "Ada"
notes = "First programmer"

[[rows]]
key = "2"
name = "Grace"
notes = "Compilers"

[header]
logo_uri = "logo.png"
theme = "dark"
dark_background = "#123"
route = "/pricing"

[[header.items]]
key = "home"
label = "Home"
href = "/"

[[header.items]]
key = "pricing"
label = "Pricing"
href = "/pricing"
"##;

/// Helper: writes a document into a fresh temp dir
pub(crate) fn write_document(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("widgets.toml");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
