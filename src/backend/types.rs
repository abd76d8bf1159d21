//! Shared types for backend communication

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the navigable label and the extra info of a suggestion
pub const LABEL_SEPARATOR: &str = " - ";

/// One autocomplete candidate as sent by the backend,
/// e.g. `"Dr. Jane Doe - Cardiology"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion(String);

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Full display text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text before the first `" - "`, trimmed. The whole string when there
    /// is no separator.
    pub fn search_term(&self) -> &str {
        self.0
            .split(LABEL_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim()
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Suggestion {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_before_separator() {
        let s = Suggestion::from("Dr. Jane Doe - Cardiology");
        assert_eq!(s.search_term(), "Dr. Jane Doe");
    }

    #[test]
    fn test_search_term_first_separator_only() {
        let s = Suggestion::from("  Cho Ray - Hospital - District 5");
        assert_eq!(s.search_term(), "Cho Ray");
    }

    #[test]
    fn test_search_term_without_separator() {
        assert_eq!(Suggestion::from(" Pediatrics ").search_term(), "Pediatrics");
        // a bare hyphen is not the separator
        assert_eq!(Suggestion::from("Ba-Vi Clinic").search_term(), "Ba-Vi Clinic");
    }

    #[test]
    fn test_deserialize_plain_strings() {
        let list: Vec<Suggestion> = serde_json::from_str(r#"["Jane - Cardio","James - Neuro"]"#).unwrap();
        assert_eq!(list, vec![Suggestion::from("Jane - Cardio"), Suggestion::from("James - Neuro")]);
    }
}
