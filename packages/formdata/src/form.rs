use std::collections::HashMap;

use crate::error::ValidationError;
use crate::file::{FileHandle, FormFile};
use crate::validator::{Target, Validator};
use crate::value::FormValue;

/// Decoded multipart form plus the validation errors collected against it.
///
/// `values` and `files` are independent namespaces: a key may appear in
/// either, both or neither. Both mappings are read-only after construction;
/// only the error list grows.
#[derive(Debug, Default)]
pub struct FormData {
    values: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<FileHandle>>,
    errors: Vec<ValidationError>,
}

impl FormData {
    pub fn new(
        values: HashMap<String, Vec<String>>,
        files: HashMap<String, Vec<FileHandle>>,
    ) -> Self {
        Self {
            values,
            files,
            errors: Vec::new(),
        }
    }

    /// True if `key` was submitted as a value, even with no entries.
    pub fn exists(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True if `key` was submitted as a file, even with no entries.
    pub fn file_exists(&self, key: &str) -> bool {
        self.files.contains_key(key)
    }

    pub fn get(&self, key: &str) -> FormValue<'_> {
        FormValue::new(self.values.get(key).map(Vec::as_slice).unwrap_or_default())
    }

    pub fn get_file(&self, key: &str) -> FormFile<'_> {
        FormFile::new(self.files.get(key).map(Vec::as_slice).unwrap_or_default())
    }

    /// Value field names, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// File field names, sorted.
    pub fn file_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.files.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors formatted as `'<key>': <message>`, in the order they were
    /// recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Appends a validation error. Errors are never removed.
    pub fn add_error(&mut self, key: &str, message: &str) {
        tracing::debug!(key, message, "form validation failed");
        self.errors.push(ValidationError::new(key, message));
    }

    /// Starts a rule chain over the values submitted under `key`.
    pub fn validate(&mut self, key: &str) -> Validator<'_> {
        Validator::new(self, key, Target::Values)
    }

    /// Starts a rule chain over the files submitted under `key`.
    pub fn validate_file(&mut self, key: &str) -> Validator<'_> {
        Validator::new(self, key, Target::Files)
    }
}
