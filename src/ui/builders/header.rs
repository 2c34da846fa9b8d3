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

//! Header bar builder
//!
//! Creates the window header bar with the route entry and menu

use gtk4::{gio::Menu, Entry, HeaderBar, MenuButton};

/// Builds the window header bar
///
/// Creates a HeaderBar containing:
/// - A route entry (stands in for the host router)
/// - A menu button with Reload (app.reload) and Quit (app.quit)
///
/// # Returns
///
/// The configured HeaderBar and the route entry
pub fn build_header_bar(initial_route: &str) -> (HeaderBar, Entry) {
    let header_bar = HeaderBar::new();

    // Menu options
    let menu = Menu::new();
    menu.append(Some("Reload Document"), Some("app.reload"));
    menu.append(Some("Quit"), Some("app.quit"));

    // Menu button
    let menu_button = MenuButton::new();
    menu_button.set_icon_name("open-menu-symbolic");
    menu_button.set_menu_model(Some(&menu));

    let route_entry = Entry::builder()
        .text(initial_route)
        .placeholder_text("/route")
        .tooltip_text("Current route, press Enter to navigate")
        .width_chars(18)
        .build();

    header_bar.pack_start(&route_entry);
    header_bar.pack_end(&menu_button);

    (header_bar, route_entry)
}
