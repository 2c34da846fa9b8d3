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

//! GTK4 user interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: `TableModel`, `HeaderState` (in `core`) and `DocumentStore` (in `config`)
//! - **View**: GTK4 components (in `components/` submodule)
//! - **Controller**: Mediates between document and View (in `controller.rs`)
//!
//! Only the controller and the file watcher are built without the `gui`
//! feature; everything touching GTK needs it.
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports and initialisation
//! ├── app.rs          // GTK4 Application setup
//! ├── controller.rs   // MVC Controller
//! ├── file_watcher.rs // Document change notifications
//! ├── actions.rs      // GTK action setup (quit, reload)
//! ├── builders/       // UI building functions
//! └── components/     // Reusable UI widgets
//! ```

#[cfg(feature = "gui")]
mod actions;
#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
mod builders;
#[cfg(feature = "gui")]
pub mod components;
pub mod controller;
pub mod file_watcher;

#[cfg(feature = "gui")]
pub use app::App;
pub use controller::Controller;

#[cfg(test)]
mod tests;
