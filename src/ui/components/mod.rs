//! UI Components
//!
//! Reusable GTK4 widgets.
//!
//! # Components
//!
//! - `editable_table.rs` - Editable, sortable, deletable table
//! - `nav_header.rs` - Responsive navigation header
//! - `editable_cell.rs` - Label/editor for one cell
//! - `draggable_row.rs` - Drag source and drop target wiring

mod draggable_row;
mod editable_cell;
mod editable_table;
mod nav_header;

pub use draggable_row::DRAGGING_CLASS;
pub use editable_table::{DragEndCallback, EditableTable};
pub use nav_header::Header;
