//! Widget document validation.
//!
//! Runs over a parsed [`WidgetDocument`] and collects every issue into a
//! [`ValidationReport`]. Error-level issues block a commit; warnings are
//! reported but allowed through.
//!
//! # Example
//! ```
//! use editable_widgets::config::{parse_document, validator::DocumentValidator};
//!
//! let document = parse_document("[[rows]]\nkey = \"1\"\n[[rows]]\nkey = \"1\"\n")?;
//! let report = DocumentValidator::new().validate(&document);
//!
//! assert!(report.has_errors(), "Duplicate keys are rejected");
//! # Ok::<(), editable_widgets::config::ConfigError>(())
//! ```

use regex::Regex;
use std::collections::BTreeSet;

use crate::config::WidgetDocument;
use crate::core::keygen::{numeric_key, KeyStrategy};

/// Validation severity level
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationLevel {
    /// Blocks commit
    Error,
    /// Allows commit but is reported
    Warning,
}

/// A single validation issue found in the document
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    /// Where the issue is, e.g. `row 2` or `header item 0`
    pub location: String,
    /// Severity level
    pub validation_level: ValidationLevel,
    /// Human-readable description of the issue
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

/// Complete validation report for a document
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the report contains any Error-level issues
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.validation_level == ValidationLevel::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(ValidationLevel::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(ValidationLevel::Warning)
    }

    fn count(&self, level: ValidationLevel) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.validation_level == level)
            .count()
    }

    /// Adds an Error-level issue to the report
    pub fn add_error(&mut self, location: impl Into<String>, message: String) {
        self.issues.push(ValidationIssue {
            location: location.into(),
            validation_level: ValidationLevel::Error,
            message,
            suggestion: None,
        });
    }

    /// Adds a Warning-level issue to the report
    pub fn add_warning(
        &mut self,
        location: impl Into<String>,
        message: String,
        suggestion: Option<String>,
    ) {
        self.issues.push(ValidationIssue {
            location: location.into(),
            validation_level: ValidationLevel::Warning,
            message,
            suggestion,
        });
    }
}

/// Document validator
pub struct DocumentValidator {
    hex_color: Regex,
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::expect_used)]
fn build_hex_color_pattern() -> Regex {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex colour pattern should be valid regex")
}

impl DocumentValidator {
    pub fn new() -> Self {
        Self {
            hex_color: build_hex_color_pattern(),
        }
    }

    /// True for `#rgb` and `#rrggbb`
    pub fn is_hex_color(&self, value: &str) -> bool {
        self.hex_color.is_match(value)
    }

    /// Validates a whole document
    pub fn validate(&self, document: &WidgetDocument) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_columns(document, &mut report);
        self.check_rows(document, &mut report);
        self.check_row_styles(document, &mut report);
        self.check_header(document, &mut report);

        report
    }

    fn check_columns(&self, document: &WidgetDocument, report: &mut ValidationReport) {
        let mut seen = BTreeSet::new();

        for (index, column) in document.table.columns.iter().enumerate() {
            let location = format!("column {}", index);

            if column.field.trim().is_empty() {
                report.add_error(location, "Column field is empty".to_string());
                continue;
            }
            if column.field == "key" {
                report.add_error(
                    location,
                    "Column field 'key' is reserved for the row key".to_string(),
                );
                continue;
            }
            if !seen.insert(column.field.as_str()) {
                report.add_error(location, format!("Duplicate column field '{}'", column.field));
            }
        }
    }

    fn check_rows(&self, document: &WidgetDocument, report: &mut ValidationReport) {
        let fields: BTreeSet<&str> = document
            .table
            .columns
            .iter()
            .map(|column| column.field.as_str())
            .collect();
        let int_keys = document.table.options.key_strategy == KeyStrategy::Int;
        let mut seen = BTreeSet::new();

        for (index, row) in document.rows.iter().enumerate() {
            let location = format!("row {}", index);

            if row.key.as_str().trim().is_empty() {
                report.add_error(location.clone(), "Row key is empty".to_string());
            } else if !seen.insert(&row.key) {
                report.add_error(location.clone(), format!("Duplicate row key '{}'", row.key));
            } else if int_keys && numeric_key(&row.key).is_none() {
                report.add_warning(
                    location.clone(),
                    format!("Key '{}' is not numeric", row.key),
                    Some("Integer key generation ignores non-numeric keys".to_string()),
                );
            }

            for field in row.fields.keys() {
                if !fields.contains(field.as_str()) {
                    report.add_warning(
                        location.clone(),
                        format!("Field '{}' has no column", field),
                        Some(format!("Add a [[table.columns]] entry with field = \"{}\"", field)),
                    );
                }
            }
        }
    }

    fn check_row_styles(&self, document: &WidgetDocument, report: &mut ValidationReport) {
        for key in document.table.options.row_styles.keys() {
            if !document.rows.iter().any(|row| &row.key == key) {
                report.add_warning(
                    "table.row_styles",
                    format!("Style for unknown row key '{}'", key),
                    None,
                );
            }
        }
    }

    fn check_header(&self, document: &WidgetDocument, report: &mut ValidationReport) {
        let Some(header) = &document.header else {
            return;
        };

        for (name, value) in [
            ("dark_background", &header.dark_background),
            ("light_background", &header.light_background),
        ] {
            if let Some(colour) = value {
                if !self.is_hex_color(colour) {
                    report.add_error(
                        format!("header.{}", name),
                        format!("'{}' is not a hex colour", colour),
                    );
                }
            }
        }

        let mut seen = BTreeSet::new();
        for (index, item) in header.items.iter().enumerate() {
            let location = format!("header item {}", index);

            if !seen.insert(item.key.as_str()) {
                report.add_error(location.clone(), format!("Duplicate item key '{}'", item.key));
            }
            if item.label.trim().is_empty() {
                report.add_warning(location, format!("Item '{}' has an empty label", item.key), None);
            }
        }
    }
}
