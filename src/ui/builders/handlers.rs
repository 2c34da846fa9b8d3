//! Event handler setup
//!
//! Wires up all event handlers for the demo window:
//! - Row persistence
//! - Live reload from disk
//! - Route entry and header navigation
//! - Window width driving the header breakpoint
//! - Drops in the external drag context

use gtk4::{glib, prelude::*, ApplicationWindow, Entry, Label};
use std::rc::Rc;
use std::time::Duration;

use crate::core::DragContext;
use crate::ui::components::{EditableTable, Header};
use crate::ui::file_watcher::FileWatcher;
use crate::ui::Controller;

/// How often the file watcher is polled
const WATCH_INTERVAL: Duration = Duration::from_millis(500);

/// Wires up all event handlers for the demo window
pub fn wire_up_handlers(
    window:      &ApplicationWindow,
    controller:  Rc<Controller>,
    header:      Rc<Header>,
    table:       Rc<EditableTable>,
    route_entry: &Entry,
) {
    // ============================================================================
    // Persist every row change
    // ============================================================================
    let controller_for_save = controller.clone();
    let window_for_save = window.clone();

    table.connect_rows_changed(move |rows| {
        if let Err(e) = controller_for_save.persist_rows(rows) {
            log::error!("❌ Failed to save rows: {}", e);

            let error_dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("Save Failed")
                .detail(format!("Failed to save the document:\n\n{}", e))
                .buttons(vec!["OK"])
                .build();

            error_dialog.show(Some(&window_for_save));
        }
    });

    // ============================================================================
    // External drag context: the host applies the move itself
    // ============================================================================
    if controller.options().drag_context == DragContext::External {
        let table_for_drag = Rc::downgrade(&table);
        table.connect_drag_end(move |active, over| {
            log::debug!("↕️ Host received drop of {} onto {:?}", active, over);
            if let Some(table) = table_for_drag.upgrade() {
                table.reorder(active, over);
            }
        });
    }

    // ============================================================================
    // Route entry ↔ header
    // ============================================================================
    let header_for_route = header.clone();
    route_entry.connect_activate(move |entry| {
        header_for_route.set_route(entry.text().as_str());
    });

    let entry_for_navigate = route_entry.clone();
    header.connect_navigate(move |href| {
        entry_for_navigate.set_text(href);
    });

    let document_label = Label::new(
        controller
            .document_path()
            .file_name()
            .and_then(|name| name.to_str()),
    );
    header.append_extra(&document_label);

    // ============================================================================
    // Breakpoint
    // ============================================================================
    header.set_viewport_width(window.default_width());
    let header_for_width = header.clone();
    window.connect_default_width_notify(move |window| {
        header_for_width.set_viewport_width(window.default_width());
    });

    // ============================================================================
    // Live reload
    // ============================================================================
    match FileWatcher::new(controller.document_path()) {
        Ok(watcher) => {
            glib::timeout_add_local(WATCH_INTERVAL, move || {
                if watcher.check_for_changes() {
                    match controller.reload() {
                        Ok(Some(rows)) => table.set_rows(rows),
                        Ok(None) => {}
                        Err(e) => log::warn!("⚠ Document changed but could not be reloaded: {}", e),
                    }
                }
                glib::ControlFlow::Continue
            });
        }
        Err(e) => log::warn!("⚠ Live reload disabled: {}", e),
    }
}
