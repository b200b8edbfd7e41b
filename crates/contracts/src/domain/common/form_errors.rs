use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "Ce champ est requis";

/// Upper bound on stored text fields
pub const MAX_TEXT_LENGTH: usize = 255;

/// Per-field validation messages of a draft. Empty means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, REQUIRED_MESSAGE);
        }
    }

    pub fn max_length(&mut self, field: &str, value: &str) {
        if value.chars().count() > MAX_TEXT_LENGTH {
            self.add(
                field,
                format!("Ce champ ne doit pas dépasser {} caractères", MAX_TEXT_LENGTH),
            );
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All messages joined, for single-line error reporting
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FormErrors::new();
        errors.require("name", "  ");
        errors.add("name", "autre");
        assert_eq!(errors.get("name"), Some(REQUIRED_MESSAGE));
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_length_limit_counts_chars() {
        let mut errors = FormErrors::new();
        errors.max_length("name", &"é".repeat(MAX_TEXT_LENGTH));
        assert!(errors.is_valid());
        errors.max_length("name", &"é".repeat(MAX_TEXT_LENGTH + 1));
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn test_summary() {
        let mut errors = FormErrors::new();
        errors.add("price", "négatif");
        errors.add("name", "requis");
        assert_eq!(errors.summary(), "name: requis; price: négatif");
    }
}
