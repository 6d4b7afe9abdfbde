//! Field-keyed validation errors shared by the dashboard forms.
//!
//! # Invariants
//! - One message per field; the first rule that fails for a field wins.
//! - Iteration order is stable (field name order).

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures collected from one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already failed.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Records `message` when `value` is blank after trim.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    /// Converts the collected state into a submission result.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::FormErrors;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FormErrors::new();
        errors.insert("title", "first");
        errors.insert("title", "second");
        assert_eq!(errors.get("title"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn require_flags_whitespace_only_values() {
        let mut errors = FormErrors::new();
        errors.require("title", "   ", "Title is required");
        errors.require("assignee", "Sarah", "Assignee is required");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title"]);
        assert_eq!(errors.to_string(), "title: Title is required");
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FormErrors::new().into_result().is_ok());
    }
}
