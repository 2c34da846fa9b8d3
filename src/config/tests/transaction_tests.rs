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

//! DocumentTransaction tests

use std::fs;

use super::{write_document, SAMPLE_DOCUMENT};
use crate::config::{ConfigError, DocumentStore, DocumentTransaction};

#[test]
fn test_transaction_basic_flow() {
    let (_temp_dir, path) = write_document(SAMPLE_DOCUMENT);
    let store = DocumentStore::new(path.clone()).unwrap();

    let tx = DocumentTransaction::begin(&store).unwrap();
    assert_eq!(store.list_backups().unwrap().len(), 1, "begin() takes a backup");

    let new_content = "[[rows]]\nkey = \"5\"\nname = \"Barbara\"\n";
    tx.commit(new_content).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), new_content);

    let backups = store.list_backups().unwrap();
    assert_eq!(backups.len(), 1, "Backup should still exist after commit");
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), SAMPLE_DOCUMENT);
}

#[test]
fn test_rollback_without_commit_leaves_original() {
    let (_temp_dir, path) = write_document(SAMPLE_DOCUMENT);
    let store = DocumentStore::new(path.clone()).unwrap();

    let tx = DocumentTransaction::begin(&store).unwrap();
    tx.rollback().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_DOCUMENT);
}

#[test]
fn test_rollback_restores_after_external_change() {
    let (_temp_dir, path) = write_document(SAMPLE_DOCUMENT);
    let store = DocumentStore::new(path.clone()).unwrap();

    let tx = DocumentTransaction::begin(&store).unwrap();
    fs::write(&path, "garbage").unwrap();

    tx.rollback().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_DOCUMENT);
    assert!(tx.backup_path().is_some());
}

#[test]
fn test_commit_with_validation_accepts_warnings() {
    let (_temp_dir, path) = write_document(SAMPLE_DOCUMENT);
    let store = DocumentStore::new(path.clone()).unwrap();
    // "nickname" has no column: warning only
    let content = "[[rows]]\nkey = \"1\"\nnickname = \"Countess\"\n";

    store.begin_transaction().unwrap().commit_with_validation(content).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_commit_with_validation_blocks_errors() {
    let (_temp_dir, path) = write_document(SAMPLE_DOCUMENT);
    let store = DocumentStore::new(path.clone()).unwrap();
    let content = "[header]\ndark_background = \"navy\"\n";

    let result = store.begin_transaction().unwrap().commit_with_validation(content);

    match result {
        Err(ConfigError::ValidationFailed(message)) => assert!(message.contains("1 validation error")),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_DOCUMENT);
}

#[test]
fn test_commit_with_validation_blocks_unparseable_content() {
    let (_temp_dir, path) = write_document(SAMPLE_DOCUMENT);
    let store = DocumentStore::new(path.clone()).unwrap();

    let result = store.begin_transaction().unwrap().commit_with_validation("[[rows]");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_DOCUMENT);
}
