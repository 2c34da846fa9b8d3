//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, reload) and
//! their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow};
use std::rc::Rc;

use crate::ui::components::EditableTable;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

/// Sets up the reload action
///
/// Re-reads the document from disk and replaces the table rows, the same
/// way the file watcher does.
pub fn setup_reload_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    table: Rc<EditableTable>,
) {
    let reload_action = gio::SimpleAction::new("reload", None);
    let window_for_reload = window.clone();

    reload_action.connect_activate(move |_, _| {
        log::debug!("🔄 Reload clicked");

        match controller.load_document() {
            Ok(count) => {
                table.set_rows(controller.rows());
                log::info!("✅ Reloaded {} row(s)", count);
            }
            Err(e) => {
                log::error!("❌ Reload failed: {}", e);

                let error_dialog = gtk4::AlertDialog::builder()
                    .modal(true)
                    .message("Reload Failed")
                    .detail(format!("Failed to reload the document:\n\n{}", e))
                    .buttons(vec!["OK"])
                    .build();

                error_dialog.show(Some(&window_for_reload));
            }
        }
    });

    app.add_action(&reload_action);
    app.set_accels_for_action("app.reload", &["<Control>r"]);
}
