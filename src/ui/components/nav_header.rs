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

//! Responsive navigation header
//!
//! Logo on the left, navigation items and a host-supplied extras box on
//! the right. Below 576 px the items move into a drawer popover; with no
//! items at all the extras simply stay inline.

use gtk4::{
    gdk, prelude::*, Align, Box as GtkBox, Button, CssProvider, Image, MenuButton, Orientation,
    Popover, Widget,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::HeaderConfig;
use crate::core::header::header_css;
use crate::core::{HeaderLayout, HeaderState, NavItem};

/// Width of the drawer popover
const DRAWER_WIDTH: i32 = 250;

/// Style class of the item matching the current route
const SELECTED_CLASS: &str = "menu-item-selected";

type NavigateCallback = Box<dyn Fn(&str)>;

/// Site header with route-synced selection
pub struct Header {
    inner: Rc<HeaderView>,
}

struct HeaderView {
    /// Root widget
    widget: GtkBox,
    items_box: GtkBox,
    extras: GtkBox,
    inline_slot: GtkBox,
    drawer_items: GtkBox,
    drawer_slot: GtkBox,
    drawer_button: MenuButton,
    drawer: Popover,
    state: RefCell<HeaderState>,
    navigate: RefCell<Option<NavigateCallback>>,
}

impl Header {
    /// Builds the header from its document settings
    pub fn new(config: &HeaderConfig) -> Self {
        let theme = config.theme.css_class();

        let provider = CssProvider::new();
        provider.load_from_string(&header_css(
            config.dark_background.as_deref(),
            config.light_background.as_deref(),
        ));
        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => log::warn!("⚠ No display, header theme will not apply"),
        }

        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(8)
            .build();
        widget.add_css_class("horizontal-menu-container");
        widget.add_css_class(theme);

        let logo = Button::builder().tooltip_text("Home").build();
        logo.add_css_class("flat");
        logo.add_css_class("branding-logo");
        if config.logo_uri.is_empty() {
            logo.set_label("⌂");
        } else {
            let image = Image::from_file(&config.logo_uri);
            image.set_pixel_size(32);
            logo.set_child(Some(&image));
        }

        let items_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(4)
            .hexpand(true)
            .halign(Align::End)
            .build();

        let extras = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(6)
            .build();
        extras.add_css_class("right-menu-items");

        let inline_slot = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .halign(Align::End)
            .build();
        inline_slot.append(&extras);

        let drawer_items = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(4)
            .build();
        let drawer_slot = GtkBox::new(Orientation::Vertical, 0);
        let drawer_content = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(8)
            .width_request(DRAWER_WIDTH)
            .build();
        drawer_content.add_css_class("drawer-children");
        drawer_content.add_css_class(theme);
        drawer_content.append(&drawer_items);
        drawer_content.append(&drawer_slot);

        let drawer = Popover::builder().child(&drawer_content).build();
        drawer.add_css_class("menu-drawer");
        drawer.add_css_class(theme);

        let drawer_button = MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .popover(&drawer)
            .halign(Align::End)
            .hexpand(true)
            .build();
        drawer_button.add_css_class("drawer-button");

        widget.append(&logo);
        widget.append(&items_box);
        widget.append(&drawer_button);
        widget.append(&inline_slot);

        let inner = Rc::new(HeaderView {
            widget,
            items_box,
            extras,
            inline_slot,
            drawer_items,
            drawer_slot,
            drawer_button,
            drawer,
            state: RefCell::new(HeaderState::new(config.items.clone(), &config.route)),
            navigate: RefCell::new(None),
        });

        {
            let view = Rc::downgrade(&inner);
            logo.connect_clicked(move |_| {
                if let Some(view) = view.upgrade() {
                    view.state.borrow_mut().sync_route("/");
                    view.update();
                    view.emit_navigate("/");
                }
            });
        }

        {
            let view = Rc::downgrade(&inner);
            inner.drawer.connect_show(move |_| {
                if let Some(view) = view.upgrade() {
                    view.state.borrow_mut().open_drawer();
                }
            });
        }

        {
            let view = Rc::downgrade(&inner);
            inner.drawer.connect_closed(move |_| {
                if let Some(view) = view.upgrade() {
                    view.state.borrow_mut().close_drawer();
                }
            });
        }

        inner.rebuild_items();
        inner.update();
        Self { inner }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.inner.widget
    }

    /// Adds a host widget to the extras area
    pub fn append_extra(&self, child: &impl IsA<Widget>) {
        self.inner.extras.append(child);
    }

    /// Follows a route change pushed by the host
    pub fn set_route(&self, route: &str) {
        if self.inner.state.borrow_mut().sync_route(route) {
            self.inner.update();
        }
    }

    /// Key of the highlighted item (or the raw route if none matches)
    pub fn current(&self) -> String {
        self.inner.state.borrow().current().to_string()
    }

    /// Switches layout when the available width crosses the breakpoint
    pub fn set_viewport_width(&self, width: i32) {
        if self.inner.state.borrow_mut().set_viewport_width(width) {
            self.inner.update();
        }
    }

    /// Registers the navigation handler; receives the chosen href
    pub fn connect_navigate<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        *self.inner.navigate.borrow_mut() = Some(Box::new(callback));
    }
}

impl HeaderView {
    /// Creates one button per item in both the bar and the drawer
    fn rebuild_items(self: &Rc<Self>) {
        for container in [&self.items_box, &self.drawer_items] {
            while let Some(child) = container.first_child() {
                container.remove(&child);
            }
        }

        let items: Vec<NavItem> = self.state.borrow().items().to_vec();
        for item in &items {
            self.items_box.append(&self.item_button(item));
            self.drawer_items.append(&self.item_button(item));
        }
    }

    fn item_button(self: &Rc<Self>, item: &NavItem) -> Button {
        let button = Button::builder().label(&item.label).build();
        button.add_css_class("flat");
        button.set_widget_name(&item.key);

        let view = Rc::downgrade(self);
        let key = item.key.clone();
        let href = item.href.clone();
        button.connect_clicked(move |_| {
            let Some(view) = view.upgrade() else {
                return;
            };
            let selected = view.state.borrow_mut().select(&key);
            if selected {
                view.update();
                view.emit_navigate(&href);
            }
        });

        button
    }

    /// Applies layout, drawer visibility and selection from the state
    fn update(&self) {
        let (layout, drawer_open, current) = {
            let state = self.state.borrow();
            (state.layout(), state.drawer_open(), state.current().to_string())
        };

        for container in [&self.items_box, &self.drawer_items] {
            let mut child = container.first_child();
            while let Some(button) = child {
                if button.widget_name().as_str() == current {
                    button.add_css_class(SELECTED_CLASS);
                } else {
                    button.remove_css_class(SELECTED_CLASS);
                }
                child = button.next_sibling();
            }
        }

        self.items_box.set_visible(layout == HeaderLayout::Horizontal);
        self.drawer_button.set_visible(layout == HeaderLayout::Drawer);

        match layout {
            HeaderLayout::Drawer => self.move_extras(&self.drawer_slot),
            HeaderLayout::Horizontal | HeaderLayout::Inline => self.move_extras(&self.inline_slot),
        }

        if layout == HeaderLayout::Drawer && drawer_open {
            self.drawer.popup();
        } else if self.drawer.is_visible() {
            self.drawer.popdown();
        }
    }

    fn move_extras(&self, target: &GtkBox) {
        if let Some(parent) = self.extras.parent() {
            if &parent == target.upcast_ref::<Widget>() {
                return;
            }
            if let Ok(parent) = parent.downcast::<GtkBox>() {
                parent.remove(&self.extras);
            }
        }
        target.append(&self.extras);
    }

    fn emit_navigate(&self, href: &str) {
        log::debug!("🧭 Navigate to {}", href);
        if let Some(callback) = self.navigate.borrow().as_ref() {
            callback(href);
        }
    }
}
