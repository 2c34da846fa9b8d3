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

//! Layout builder
//!
//! Creates the demo window layout structure.

use gtk4::{prelude::*, Box as GtkBox, Orientation, ScrolledWindow};
use std::rc::Rc;

use crate::config::HeaderConfig;
use crate::core::TableModel;
use crate::ui::{
    components::{EditableTable, Header},
    Controller,
};

/// Builds the main layout
///
/// Creates a vertical box containing:
/// - The site header (default settings when the document has none)
/// - The editable table inside a scrolled window
///
/// # Returns
///
/// Tuple of (main_vbox, header, table)
pub fn build_main_layout(controller: &Controller) -> (GtkBox, Rc<Header>, Rc<EditableTable>) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    let header_config = controller.header().unwrap_or_default();
    let header = Rc::new(Header::new(&header_config));
    main_vbox.append(header.widget());

    let model = TableModel::new(controller.rows(), controller.columns(), controller.options());
    let table = Rc::new(EditableTable::new(model));

    let table_box = GtkBox::new(Orientation::Vertical, 10);
    table_box.set_margin_start(10);
    table_box.set_margin_end(10);
    table_box.set_margin_top(10);
    table_box.set_margin_bottom(10);
    table_box.append(table.widget());

    let scrolled_window = ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&table_box)
        .build();
    main_vbox.append(&scrolled_window);

    (main_vbox, header, table)
}

/// Route the demo starts on
pub fn initial_route(header: Option<&HeaderConfig>) -> String {
    header.map(|config| config.route.clone()).unwrap_or_else(|| "/".to_string())
}
