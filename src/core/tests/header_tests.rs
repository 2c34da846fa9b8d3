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

//! Header navigation tests

use crate::core::header::{header_css, DEFAULT_DARK_BACKGROUND, NARROW_BREAKPOINT};
use crate::core::{HeaderLayout, HeaderState, NavItem, Theme, Viewport};

fn site_items() -> Vec<NavItem> {
    vec![
        NavItem::new("home", "Home", "/"),
        NavItem::new("pricing", "Pricing", "/pricing"),
        NavItem::new("docs", "Docs", "/docs"),
    ]
}

#[test]
fn test_initial_route_selects_item() {
    let state = HeaderState::new(site_items(), "/pricing");
    assert_eq!(state.current(), "pricing");
    assert_eq!(state.current_item().unwrap().label, "Pricing");
}

#[test]
fn test_route_change_resyncs_without_click() {
    let mut state = HeaderState::new(site_items(), "/pricing");

    assert!(state.sync_route("/docs"));

    assert_eq!(state.current(), "docs");
    assert!(state.is_current("docs"));
    assert!(!state.is_current("pricing"));
}

#[test]
fn test_root_route_matches_by_href() {
    let state = HeaderState::new(site_items(), "/");
    assert_eq!(state.current(), "home");
}

#[test]
fn test_route_matching_by_key_ignores_slashes() {
    let items = vec![NavItem::new("blog", "Blog", "https://example.com/blog")];
    let state = HeaderState::new(items, "/blog/");
    assert_eq!(state.current(), "blog");
}

#[test]
fn test_unknown_route_highlights_nothing() {
    let state = HeaderState::new(site_items(), "/careers");
    assert_eq!(state.current(), "/careers");
    assert!(state.current_item().is_none());
}

#[test]
fn test_same_route_reports_no_change() {
    let mut state = HeaderState::new(site_items(), "/docs");
    assert!(!state.sync_route("/docs"));
}

#[test]
fn test_select_ignores_unknown_keys() {
    let mut state = HeaderState::new(site_items(), "/");
    assert!(!state.select("nowhere"));
    assert_eq!(state.current(), "home");
}

#[test]
fn test_viewport_breakpoint() {
    assert_eq!(Viewport::from_width(NARROW_BREAKPOINT - 1), Viewport::Narrow);
    assert_eq!(Viewport::from_width(NARROW_BREAKPOINT), Viewport::Wide);
}

#[test]
fn test_narrow_selection_closes_drawer() {
    let mut state = HeaderState::new(site_items(), "/");
    state.set_viewport_width(400);
    assert_eq!(state.layout(), HeaderLayout::Drawer);

    assert!(state.open_drawer());
    assert!(state.drawer_open());

    assert!(state.select("docs"));
    assert_eq!(state.current(), "docs");
    assert!(!state.drawer_open(), "Choosing an item closes the drawer");
}

#[test]
fn test_wide_layout_never_opens_drawer() {
    let mut state = HeaderState::new(site_items(), "/");
    state.set_viewport_width(1200);

    assert_eq!(state.layout(), HeaderLayout::Horizontal);
    assert!(!state.open_drawer());
    assert!(!state.drawer_open());
}

#[test]
fn test_widening_closes_drawer() {
    let mut state = HeaderState::new(site_items(), "/");
    state.set_viewport_width(320);
    state.open_drawer();

    assert!(state.set_viewport_width(1024));
    assert!(!state.drawer_open());
}

#[test]
fn test_narrow_without_items_is_inline() {
    let mut state = HeaderState::new(Vec::new(), "/");
    state.set_viewport_width(300);

    assert_eq!(state.layout(), HeaderLayout::Inline);
    assert!(!state.open_drawer());
}

#[test]
fn test_header_css_uses_overrides() {
    let css = header_css(None, Some("#fafafa"));
    assert!(css.contains(DEFAULT_DARK_BACKGROUND));
    assert!(css.contains("#fafafa"));
    assert!(css.contains(Theme::Dark.foreground()));
}

#[test]
fn test_theme_classes() {
    assert_eq!(Theme::Dark.css_class(), "dark");
    assert_eq!(Theme::default(), Theme::Light);
}
