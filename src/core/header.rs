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

//! Header navigation state
//!
//! Tracks which navigation item is current and whether the drawer is open.
//! The current item follows the active route: the host pushes route
//! changes in with `sync_route`, the header never pushes them back.
//!
//! Layout depends on the viewport width. Below `NARROW_BREAKPOINT` the
//! items collapse into a drawer opened from a button.

use log::debug;
use serde::{Deserialize, Serialize};

/// Widths below this many pixels use the narrow (drawer) layout
pub const NARROW_BREAKPOINT: i32 = 576;

/// Default header background in the dark theme
pub const DEFAULT_DARK_BACKGROUND: &str = "#001528";

/// Default header background in the light theme
pub const DEFAULT_LIGHT_BACKGROUND: &str = "#ffffff";

/// One navigation entry
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NavItem {
    /// Identifier, also matched against route paths
    pub key: String,
    /// Text shown in the menu
    pub label: String,
    /// Link target
    pub href: String,
}

impl NavItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: href.into(),
        }
    }

    /// Returns true if this item belongs to the given route path
    ///
    /// A route matches by link target (`/pricing` ↔ href `/pricing`) or by
    /// identifier with surrounding slashes ignored (`/pricing` ↔ `pricing`).
    pub fn matches_route(&self, route: &str) -> bool {
        self.href == route || self.key == route || self.key == route.trim_matches('/')
    }
}

/// Colour theme of the header
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// CSS class carried by the header container
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Text colour of the extras slot
    pub fn foreground(self) -> &'static str {
        match self {
            Theme::Dark => "#ffffff",
            Theme::Light => "#000000",
        }
    }
}

/// Viewport class derived from the available width
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_width(width: i32) -> Self {
        if width < NARROW_BREAKPOINT {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

/// How the header arranges its items and extras
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderLayout {
    /// Items in a row, extras at the end
    Horizontal,
    /// A button opening a drawer that holds the items and the extras
    Drawer,
    /// Narrow viewport without items: extras only, inline
    Inline,
}

/// Current-item and drawer state of one header
#[derive(Clone, Debug)]
pub struct HeaderState {
    items: Vec<NavItem>,
    current: String,
    drawer_open: bool,
    viewport: Viewport,
}

impl HeaderState {
    /// Creates the state for the given items and active route
    ///
    /// # Example
    /// ```
    /// use editable_widgets::core::header::{HeaderState, NavItem};
    ///
    /// let state = HeaderState::new(
    ///     vec![NavItem::new("pricing", "Pricing", "/pricing")],
    ///     "/pricing",
    /// );
    /// assert_eq!(state.current(), "pricing");
    /// ```
    pub fn new(items: Vec<NavItem>, route: &str) -> Self {
        let mut state = Self {
            items,
            current: String::new(),
            drawer_open: false,
            viewport: Viewport::default(),
        };
        state.sync_route(route);
        state
    }

    /// Navigation items in display order
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Identifier of the current item
    ///
    /// If the route matches no item this is the raw route, which highlights
    /// nothing.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Current item, if the route matched one
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.key == self.current)
    }

    /// Returns true if the item with this key is current
    pub fn is_current(&self, key: &str) -> bool {
        self.current == key
    }

    /// Follows a route change
    ///
    /// Returns true if the current item changed.
    pub fn sync_route(&mut self, route: &str) -> bool {
        let next = self
            .items
            .iter()
            .find(|item| item.matches_route(route))
            .map(|item| item.key.clone())
            .unwrap_or_else(|| route.to_string());

        if next == self.current {
            return false;
        }

        debug!("🧭 route {} selects '{}'", route, next);
        self.current = next;
        true
    }

    /// Handles a click on a navigation item
    ///
    /// In the narrow layout this also closes the drawer. Unknown keys are
    /// ignored. Returns true if the key was known.
    pub fn select(&mut self, key: &str) -> bool {
        if !self.items.iter().any(|item| item.key == key) {
            debug!("🧭 ignoring unknown item '{}'", key);
            return false;
        }

        self.current = key.to_string();
        if self.viewport == Viewport::Narrow {
            self.drawer_open = false;
        }
        true
    }

    /// Returns true if the drawer is showing
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Opens the drawer (only meaningful in the drawer layout)
    pub fn open_drawer(&mut self) -> bool {
        if self.layout() != HeaderLayout::Drawer {
            return false;
        }
        self.drawer_open = true;
        true
    }

    /// Closes the drawer
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Current viewport class
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Reacts to a width change
    ///
    /// Leaving the narrow layout closes the drawer. Returns true if the
    /// viewport class changed.
    pub fn set_viewport_width(&mut self, width: i32) -> bool {
        let viewport = Viewport::from_width(width);
        if viewport == self.viewport {
            return false;
        }

        self.viewport = viewport;
        if viewport == Viewport::Wide {
            self.drawer_open = false;
        }
        debug!("📐 viewport is now {:?} ({}px)", viewport, width);
        true
    }

    /// Layout for the current viewport
    pub fn layout(&self) -> HeaderLayout {
        match self.viewport {
            Viewport::Wide => HeaderLayout::Horizontal,
            Viewport::Narrow if self.items.is_empty() => HeaderLayout::Inline,
            Viewport::Narrow => HeaderLayout::Drawer,
        }
    }
}

/// Builds the stylesheet of a header
///
/// Background overrides replace the theme defaults; extras text follows
/// the theme.
pub fn header_css(dark_background: Option<&str>, light_background: Option<&str>) -> String {
    let dark = dark_background.unwrap_or(DEFAULT_DARK_BACKGROUND);
    let light = light_background.unwrap_or(DEFAULT_LIGHT_BACKGROUND);

    format!(
        ".horizontal-menu-container {{ padding: 0 8px; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06); }}\n\
         .horizontal-menu-container.dark, .menu-drawer.dark {{ background-color: {dark}; }}\n\
         .horizontal-menu-container.light, .menu-drawer.light {{ background-color: {light}; }}\n\
         .branding-logo {{ padding: 8px; }}\n\
         .right-menu-items {{ padding: 8px; }}\n\
         .horizontal-menu-container.dark .right-menu-items, .drawer-children.dark {{ color: {dark_fg}; }}\n\
         .horizontal-menu-container.light .right-menu-items, .drawer-children.light {{ color: {light_fg}; }}\n\
         .menu-item-selected {{ font-weight: bold; border-bottom: 2px solid @accent_color; }}\n\
         .drawer-button {{ margin-right: 6px; }}\n",
        dark = dark,
        light = light,
        dark_fg = Theme::Dark.foreground(),
        light_fg = Theme::Light.foreground(),
    )
}
