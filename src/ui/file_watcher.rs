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

//! File system watcher for the widget document
//!
//! Uses OS-level file watching via the notify crate. Saves replace the
//! document by rename, which drops a watch on the file itself, so the
//! parent directory is watched and events are filtered by path.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

/// Watches a widget document for modifications
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl FileWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(directory, RecursiveMode::NonRecursive)?;

        Ok(FileWatcher {
            _watcher: watcher,
            rx,
            path,
        })
    }

    /// Checks for document modification events (non-blocking)
    ///
    /// Drains every pending event so one save reports one change.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            match event_result {
                Ok(event) if is_document_change(&event, &self.path) => changed = true,
                Ok(_) => {}
                Err(e) => log::warn!("⚠ File watcher error: {}", e),
            }
        }

        changed
    }
}

/// True when the event modifies or (re)creates the watched file
fn is_document_change(event: &Event, path: &Path) -> bool {
    let relevant = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
    let file_name = path.file_name();

    relevant
        && event
            .paths
            .iter()
            .any(|changed| changed == path || (file_name.is_some() && changed.file_name() == file_name))
}
