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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates the demo
//! window. It uses the Controller to load and persist the document.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds main window (header + table)
//!   └─ Connects components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::ConfigError;
use crate::ui::builders::layout::initial_route;
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::{actions, Controller};

/// GTK4 Application showing a widget document
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App for the given document
    ///
    /// # Example
    ///
    /// ```no_run
    /// use editable_widgets::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(PathBuf::from("widgets.toml"))?;
    /// app.run();
    /// # Ok::<(), editable_widgets::config::ConfigError>(())
    /// ```
    pub fn new(document_path: PathBuf) -> Result<Self, ConfigError> {
        let app = Application::builder()
            .application_id("com.tidynest.editable-widgets")
            .build();

        let controller = Controller::new(document_path)?;
        // Surface document errors before the window opens
        controller.load_document()?;

        Ok(Self {
            app,
            controller: Rc::new(controller),
        })
    }

    /// Runs the GTK4 application
    ///
    /// Blocks until the application exits.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        self.app.run_with_args::<&str>(&[])
    }

    /// Loads the application stylesheet
    fn load_css() {
        let Some(display) = gdk::Display::default() else {
            log::warn!("⚠ Could not connect to a display, skipping styles");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Editable Widgets")
            .default_width(1000)
            .default_height(700)
            .build();

        let route = initial_route(controller.header().as_ref());
        let (header_bar, route_entry) = build_header_bar(&route);
        window.set_titlebar(Some(&header_bar));

        let (main_vbox, header, table) = build_main_layout(&controller);
        window.set_child(Some(&main_vbox));

        actions::setup_quit_action(app);
        actions::setup_reload_action(app, &window, controller.clone(), table.clone());

        wire_up_handlers(&window, controller, header, table, &route_entry);

        window.present();
    }
}
