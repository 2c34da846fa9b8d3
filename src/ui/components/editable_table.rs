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

//! Editable table component
//!
//! GTK view over a [`TableModel`]. Every user action goes to the model and
//! the list is rebuilt from the model afterwards, so the widgets never hold
//! state of their own.
//!
//! ```text
//! [Delete Selected Rows]              (only while something is selected)
//! ┌───┬───┬──────────┬──────────┬──────────────┐
//! │ ⠿ │ ☐ │ Name     │ Notes    │ Actions      │
//! ├───┼───┼──────────┼──────────┼──────────────┤
//! │ ⠿ │ ☐ │ Ada      │ ...      │ Edit  Delete │
//! │ ⠿ │ ☑ │ [Grace ] │ [...]    │  ✓  ✗        │
//! └───┴───┴──────────┴──────────┴──────────────┘
//! [➕ Add row]
//! ```

use gtk4::{
    gdk, gio, glib, prelude::*, Align, Box as GtkBox, Button, CheckButton, CssProvider, Label,
    ListBox, Orientation, SelectionMode,
};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crate::core::types::{row_css_class, row_styles_css};
use crate::core::{
    ActionAlign, BulkDeleteOutcome, Column, DragContext, Row, RowKey, TableModel, TableOptions,
};
use crate::ui::components::draggable_row::{attach_drag_source, attach_drop_target, DragHooks};
use crate::ui::components::editable_cell::{build_editor, build_label};

/// Host callback for drops in the external drag context
pub type DragEndCallback = Box<dyn Fn(&RowKey, Option<&RowKey>)>;

/// Editable, sortable, deletable table widget
///
/// # Example
/// ```no_run
/// use editable_widgets::core::{Column, Row, TableModel, TableOptions};
/// use editable_widgets::ui::components::EditableTable;
///
/// let model = TableModel::new(
///     vec![Row::new("1").with_field("name", "Ada")],
///     vec![Column::new("name", "Name")],
///     TableOptions::default(),
/// );
/// let table = EditableTable::new(model);
/// table.connect_rows_changed(|rows| println!("{} rows", rows.len()));
/// ```
pub struct EditableTable {
    inner: Rc<TableView>,
}

struct TableView {
    /// Root widget
    widget: GtkBox,
    list_box: ListBox,
    bulk_bar: GtkBox,
    add_button: Button,
    css_provider: CssProvider,
    model: RefCell<TableModel>,
    drag_end: RefCell<Option<DragEndCallback>>,
    /// Set when a drop target accepted the current drag
    dropped: Cell<bool>,
}

/// Everything a rebuild needs, copied out of the model
struct Snapshot {
    rows: Vec<Row>,
    columns: Vec<Column>,
    options: TableOptions,
    editing: Option<Row>,
    selection: BTreeSet<RowKey>,
    can_begin_edit: bool,
}

impl EditableTable {
    /// Creates the widget and renders the model's rows
    pub fn new(model: TableModel) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(6)
            .build();
        widget.add_css_class("editable-table");

        let bulk_bar = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .halign(action_halign(model.options().align))
            .build();
        let bulk_button = Button::builder().label("Delete Selected Rows").build();
        bulk_button.add_css_class("destructive-action");
        bulk_bar.append(&bulk_button);
        bulk_bar.set_visible(false);

        let list_box = ListBox::builder()
            .selection_mode(SelectionMode::None)
            .build();
        list_box.add_css_class("boxed-list");

        let add_button = Button::builder()
            .label("➕ Add row")
            .halign(Align::Start)
            .build();
        add_button.add_css_class("suggested-action");
        add_button.set_visible(model.options().addable);

        widget.append(&bulk_bar);
        widget.append(&list_box);
        widget.append(&add_button);

        let css_provider = CssProvider::new();
        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &css_provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => log::warn!("⚠ No display, row styles will not apply"),
        }

        let inner = Rc::new(TableView {
            widget,
            list_box,
            bulk_bar,
            add_button,
            css_provider,
            model: RefCell::new(model),
            drag_end: RefCell::new(None),
            dropped: Cell::new(false),
        });

        {
            let view = Rc::downgrade(&inner);
            bulk_button.connect_clicked(move |_| {
                if let Some(view) = view.upgrade() {
                    view.request_bulk_delete();
                }
            });
        }

        {
            let view = Rc::downgrade(&inner);
            inner.add_button.connect_clicked(move |_| {
                if let Some(view) = view.upgrade() {
                    let key = view.model.borrow_mut().add_row();
                    log::debug!("➕ Add row clicked, editing {}", key);
                    view.refresh();
                }
            });
        }

        inner.refresh();
        Self { inner }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.inner.widget
    }

    /// Registers a listener for every row replacement made by a user action
    pub fn connect_rows_changed<F>(&self, listener: F)
    where
        F: Fn(&[Row]) + 'static,
    {
        self.inner.model.borrow_mut().connect_rows_changed(listener);
    }

    /// Registers the host callback for drops in the external drag context
    ///
    /// Receives the dragged key and the key it was dropped on, or `None`
    /// when it was dropped outside any row.
    pub fn connect_drag_end<F>(&self, callback: F)
    where
        F: Fn(&RowKey, Option<&RowKey>) + 'static,
    {
        *self.inner.drag_end.borrow_mut() = Some(Box::new(callback));
    }

    /// Replaces the rows from outside and re-renders
    pub fn set_rows(&self, rows: Vec<Row>) {
        self.inner.model.borrow_mut().set_rows(rows);
        self.inner.refresh();
    }

    /// Applies a reorder decided by the host (external drag context)
    pub fn reorder(&self, active: &RowKey, over: Option<&RowKey>) -> bool {
        let moved = self.inner.model.borrow_mut().reorder(active, over);
        if moved {
            self.inner.refresh();
        }
        moved
    }

    /// Current rows
    pub fn rows(&self) -> Vec<Row> {
        self.inner.model.borrow().rows().to_vec()
    }

    /// Re-renders from the model
    pub fn refresh(&self) {
        self.inner.refresh();
    }
}

impl TableView {
    fn snapshot(&self) -> Snapshot {
        let model = self.model.borrow();
        Snapshot {
            rows: model.rows().to_vec(),
            columns: model.columns().to_vec(),
            options: model.options().clone(),
            editing: model.session().map(|session| session.working().clone()),
            selection: model.selection().clone(),
            can_begin_edit: model.can_begin_edit(),
        }
    }

    /// Rebuilds every row from the model
    fn refresh(self: &Rc<Self>) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        let snapshot = self.snapshot();
        self.css_provider
            .load_from_string(&row_styles_css(&snapshot.options.row_styles));

        self.list_box.append(&title_row(&snapshot));
        for row in &snapshot.rows {
            let widget = self.build_row(row, &snapshot);
            self.list_box.append(&widget);
        }

        self.add_button.set_sensitive(snapshot.editing.is_none());
        self.update_bulk_bar();
    }

    /// Shows "Delete Selected Rows" only while something is selected
    fn update_bulk_bar(&self) {
        let model = self.model.borrow();
        self.bulk_bar
            .set_visible(model.options().multi_delete && !model.selection().is_empty());
    }

    fn build_row(self: &Rc<Self>, row: &Row, snapshot: &Snapshot) -> GtkBox {
        let options = &snapshot.options;
        let editing = snapshot.editing.as_ref().filter(|working| working.key == row.key);

        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();
        if options.row_styles.contains_key(&row.key) {
            widget.add_css_class(&row_css_class(&row.key));
        }

        if options.draggable {
            let handle = Label::builder().label("⠿").tooltip_text("Drag to reorder").build();
            handle.add_css_class("drag-handle");
            attach_drag_source(&handle, &widget, &row.key, self.drag_hooks());
            widget.append(&handle);

            let view = Rc::downgrade(self);
            attach_drop_target(&widget, &row.key, move |active, over| {
                if let Some(view) = view.upgrade() {
                    view.handle_drop(active, Some(over));
                }
            });
        }

        if options.multi_delete {
            let check = CheckButton::builder()
                .active(snapshot.selection.contains(&row.key))
                .build();
            let view = Rc::downgrade(self);
            let key = row.key.clone();
            check.connect_toggled(move |check| {
                if let Some(view) = view.upgrade() {
                    view.model.borrow_mut().set_selected(&key, check.is_active());
                    view.update_bulk_bar();
                }
            });
            widget.append(&check);
        }

        for column in &snapshot.columns {
            let cell = match editing {
                // A renderer owns the cell in both modes
                Some(working) if column.renderer.is_some() => build_label(column, working),
                Some(working) => {
                    let view = Rc::downgrade(self);
                    let field = column.field.clone();
                    build_editor(column, working, move |text| {
                        if let Some(view) = view.upgrade() {
                            view.model.borrow_mut().update_field(&field, text);
                        }
                    })
                }
                None => build_label(column, row),
            };
            widget.append(&cell);
        }

        if options.has_action_column() {
            widget.append(&self.build_actions(row, editing.is_some(), snapshot));
        }

        widget
    }

    fn build_actions(self: &Rc<Self>, row: &Row, editing: bool, snapshot: &Snapshot) -> GtkBox {
        let actions = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(6)
            .halign(action_halign(snapshot.options.align))
            .build();

        if editing {
            let save = Button::builder().label("✓").tooltip_text("Save").build();
            save.add_css_class("suggested-action");
            self.on_click(&save, |view| view.model.borrow_mut().commit_edit());

            let cancel = Button::builder().label("✗").tooltip_text("Cancel").build();
            self.on_click(&cancel, |view| view.model.borrow_mut().cancel_edit());

            actions.append(&save);
            actions.append(&cancel);
            return actions;
        }

        if snapshot.options.editable {
            let edit = Button::builder().label("Edit").build();
            edit.set_sensitive(snapshot.can_begin_edit);
            let key = row.key.clone();
            self.on_click(&edit, move |view| view.model.borrow_mut().begin_edit(&key));
            actions.append(&edit);
        }

        if snapshot.options.deletable {
            let delete = Button::builder().label("Delete").build();
            delete.add_css_class("destructive-action");
            let view = Rc::downgrade(self);
            let key = row.key.clone();
            delete.connect_clicked(move |_| {
                if let Some(view) = view.upgrade() {
                    view.confirm_delete_row(key.clone());
                }
            });
            actions.append(&delete);
        }

        actions
    }

    /// Runs `action` on click and re-renders when it reports a change
    fn on_click<F>(self: &Rc<Self>, button: &Button, action: F)
    where
        F: Fn(&TableView) -> bool + 'static,
    {
        let view: Weak<TableView> = Rc::downgrade(self);
        button.connect_clicked(move |_| {
            if let Some(view) = view.upgrade() {
                if action(&view) {
                    view.refresh();
                }
            }
        });
    }

    fn confirm_delete_row(self: &Rc<Self>, key: RowKey) {
        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message("Sure to delete?")
            .buttons(vec!["Cancel", "Delete"])
            .cancel_button(0)
            .default_button(0)
            .build();

        let view = Rc::downgrade(self);
        dialog.choose(self.parent_window().as_ref(), None::<&gio::Cancellable>, move |response| {
            match response {
                Ok(1) => {
                    if let Some(view) = view.upgrade() {
                        if view.model.borrow_mut().delete_row(&key) {
                            view.refresh();
                        }
                    }
                }
                Ok(_) => log::debug!("🚫 Delete of {} cancelled", key),
                Err(e) => log::warn!("❌ Delete dialog error: {}", e),
            }
        });
    }

    fn request_bulk_delete(self: &Rc<Self>) {
        let outcome = self.model.borrow_mut().request_delete_selected();

        match outcome {
            BulkDeleteOutcome::NothingSelected => {}
            BulkDeleteOutcome::Deleted(_) => self.refresh(),
            BulkDeleteOutcome::AwaitingConfirmation => {
                let dialog = gtk4::AlertDialog::builder()
                    .modal(true)
                    .message("Really Delete Selected Rows?")
                    .buttons(vec!["Cancel", "Delete"])
                    .cancel_button(0)
                    .default_button(0)
                    .build();

                let view = Rc::downgrade(self);
                dialog.choose(self.parent_window().as_ref(), None::<&gio::Cancellable>, move |response| {
                    let Some(view) = view.upgrade() else {
                        return;
                    };
                    if matches!(response, Ok(1)) {
                        view.model.borrow_mut().confirm_delete_selected();
                        view.refresh();
                    } else {
                        view.model.borrow_mut().dismiss_delete_selected();
                    }
                });
            }
        }
    }

    fn drag_hooks(self: &Rc<Self>) -> DragHooks {
        let on_begin = {
            let view = Rc::downgrade(self);
            Rc::new(move |_: &RowKey| {
                if let Some(view) = view.upgrade() {
                    view.dropped.set(false);
                }
            })
        };

        let on_end = {
            let view = Rc::downgrade(self);
            Rc::new(move |active: &RowKey| {
                if let Some(view) = view.upgrade() {
                    if !view.dropped.get() {
                        view.handle_drop(active.clone(), None);
                    }
                }
            })
        };

        DragHooks { on_begin, on_end }
    }

    /// Finishes a drag: reorders here or hands it to the host
    fn handle_drop(self: &Rc<Self>, active: RowKey, over: Option<RowKey>) {
        self.dropped.set(over.is_some());

        // Rebuilding inside the drop signal would destroy the target mid-emission
        let view = Rc::downgrade(self);
        glib::idle_add_local_once(move || {
            let Some(view) = view.upgrade() else {
                return;
            };

            let context = view.model.borrow().options().drag_context;
            match context {
                DragContext::SelfManaged => {
                    let moved = view.model.borrow_mut().reorder(&active, over.as_ref());
                    if moved {
                        view.refresh();
                    }
                }
                DragContext::External => match view.drag_end.borrow().as_ref() {
                    Some(callback) => callback(&active, over.as_ref()),
                    None => log::debug!("↕️ External drag of {} with no drag-end handler", active),
                },
            }
        });
    }

    fn parent_window(&self) -> Option<gtk4::Window> {
        self.widget.root().and_downcast::<gtk4::Window>()
    }
}

fn title_row(snapshot: &Snapshot) -> GtkBox {
    let options = &snapshot.options;
    let header = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(12)
        .margin_start(10)
        .margin_end(10)
        .margin_top(5)
        .margin_bottom(5)
        .build();
    header.add_css_class("table-title-row");

    if options.draggable {
        header.append(&Label::new(Some(" ")));
    }
    if options.multi_delete {
        // Keeps titles aligned with the checkboxes
        let spacer = CheckButton::builder().sensitive(false).opacity(0.0).build();
        header.append(&spacer);
    }
    for column in &snapshot.columns {
        let title = Label::builder().label(&column.title).xalign(0.0).build();
        title.add_css_class("heading");
        match column.width {
            Some(width) => title.set_size_request(width, -1),
            None => title.set_hexpand(true),
        }
        header.append(&title);
    }
    if options.has_action_column() {
        let actions = Label::builder().label("Actions").build();
        actions.add_css_class("heading");
        header.append(&actions);
    }

    header
}

fn action_halign(align: ActionAlign) -> Align {
    match align {
        ActionAlign::Left => Align::Start,
        ActionAlign::Center => Align::Center,
        ActionAlign::Right => Align::End,
    }
}
