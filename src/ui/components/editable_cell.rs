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

//! Editable cell adapter
//!
//! Turns one column of one row into a widget: a label while viewing, an
//! `Entry` or `TextView` while editing.

use gtk4::{prelude::*, Entry, Label, PolicyType, ScrolledWindow, TextView, Widget, WrapMode};

use crate::core::{Column, InputKind, Row};

/// Builds the read-only cell
pub fn build_label(column: &Column, row: &Row) -> Widget {
    let text = column.render(row);

    let label = Label::builder().label(&text).xalign(0.0).build();
    label.set_ellipsize(gtk4::pango::EllipsizeMode::End);
    if text.chars().count() > 40 {
        label.set_tooltip_text(Some(&text));
    }
    size_cell(&label, column);

    label.upcast()
}

/// Builds the editor for `column`, pre-filled from the working copy
///
/// `on_change` receives the full text after every keystroke.
pub fn build_editor<F>(column: &Column, working: &Row, on_change: F) -> Widget
where
    F: Fn(String) + 'static,
{
    let current = working.text(&column.field);

    match column.input_kind {
        InputKind::Text => {
            let entry = Entry::builder()
                .text(&current)
                .placeholder_text(&column.title)
                .build();
            entry.connect_changed(move |entry| on_change(entry.text().to_string()));
            size_cell(&entry, column);
            entry.upcast()
        }
        InputKind::TextArea => {
            let text_view = TextView::builder().wrap_mode(WrapMode::WordChar).build();
            let buffer = text_view.buffer();
            buffer.set_text(&current);
            buffer.connect_changed(move |buffer| {
                let (start, end) = buffer.bounds();
                on_change(buffer.text(&start, &end, false).to_string());
            });

            let scrolled = ScrolledWindow::builder()
                .hscrollbar_policy(PolicyType::Never)
                .min_content_height(60)
                .child(&text_view)
                .build();
            size_cell(&scrolled, column);
            scrolled.upcast()
        }
    }
}

fn size_cell(widget: &impl IsA<Widget>, column: &Column) {
    match column.width {
        Some(width) => widget.set_size_request(width, -1),
        None => widget.set_hexpand(true),
    }
}
