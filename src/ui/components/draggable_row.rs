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

//! Draggable row adapter
//!
//! A `DragSource` on the handle carries the row key as a string; a
//! `DropTarget` on the row reports `(active, over)` when something lands.

use gtk4::{gdk, glib, prelude::*, DragSource, DropTarget, Widget};
use std::rc::Rc;

use crate::core::RowKey;

/// Style class of the row being dragged
pub const DRAGGING_CLASS: &str = "dragging";

/// Callbacks around one drag gesture
pub struct DragHooks {
    /// Drag started
    pub on_begin: Rc<dyn Fn(&RowKey)>,
    /// Drag finished, dropped or not
    pub on_end: Rc<dyn Fn(&RowKey)>,
}

/// Makes `handle` start a drag of `key`, styling `row` while it moves
pub fn attach_drag_source(handle: &impl IsA<Widget>, row: &impl IsA<Widget>, key: &RowKey, hooks: DragHooks) {
    let source = DragSource::builder().actions(gdk::DragAction::MOVE).build();

    let payload = key.as_str().to_string();
    source.connect_prepare(move |_, _, _| Some(gdk::ContentProvider::for_value(&payload.to_value())));

    {
        let row = row.clone().upcast::<Widget>();
        let key = key.clone();
        let on_begin = hooks.on_begin.clone();
        source.connect_drag_begin(move |_, _| {
            row.add_css_class(DRAGGING_CLASS);
            on_begin(&key);
        });
    }

    {
        let row = row.clone().upcast::<Widget>();
        let key = key.clone();
        let on_end = hooks.on_end.clone();
        source.connect_drag_end(move |_, _, _| {
            row.remove_css_class(DRAGGING_CLASS);
            on_end(&key);
        });
    }

    handle.add_controller(source);
}

/// Makes `row` accept drops of other rows
pub fn attach_drop_target<F>(row: &impl IsA<Widget>, over: &RowKey, on_drop: F)
where
    F: Fn(RowKey, RowKey) + 'static,
{
    let target = DropTarget::new(glib::Type::STRING, gdk::DragAction::MOVE);
    let over = over.clone();

    target.connect_drop(move |_, value, _, _| match value.get::<String>() {
        Ok(active) => {
            on_drop(RowKey::new(active), over.clone());
            true
        }
        Err(e) => {
            log::warn!("⚠ Ignoring drop with unexpected payload: {}", e);
            false
        }
    });

    row.add_controller(target);
}
