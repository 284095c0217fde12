//! Validation error collector attached to domain entities.
//!
//! A `Notification` accumulates field-level and global errors instead of
//! failing on the first violation, so a caller can batch-report everything
//! before deciding whether to reject. Each entity owns exactly one
//! notification for its whole life; it is never shared across entities.

use indexmap::IndexMap;

/// One slot in the collector. Field errors hold a message list; global
/// errors are keyed by their own message text and carry no list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Field(Vec<String>),
    Global,
}

/// Insertion-ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: IndexMap<String, Entry>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error message.
    ///
    /// With a field, the message joins that field's list unless an identical
    /// message is already present. Without a field, the message is stored as
    /// a global error keyed by its own text.
    pub fn add_error(&mut self, message: impl Into<String>, field: Option<&str>) {
        let message = message.into();
        match field {
            Some(field) => {
                let entry = self
                    .errors
                    .entry(field.to_string())
                    .or_insert_with(|| Entry::Field(Vec::new()));
                if let Entry::Field(messages) = entry {
                    if !messages.contains(&message) {
                        messages.push(message);
                    }
                }
            }
            None => {
                self.errors.insert(message.clone(), Entry::Global);
            }
        }
    }

    /// Overwrite the error list for a field, or set one-or-more global
    /// errors (each keyed by its own text).
    pub fn set_error(&mut self, messages: Vec<String>, field: Option<&str>) {
        match field {
            Some(field) => {
                self.errors.insert(field.to_string(), Entry::Field(messages));
            }
            None => {
                for message in messages {
                    self.errors.insert(message.clone(), Entry::Global);
                }
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Merge another notification's errors into this one, preserving the
    /// other collector's recording order. Field lists are replaced, not
    /// appended.
    pub fn copy_errors(&mut self, other: &Notification) {
        for (key, entry) in &other.errors {
            match entry {
                Entry::Field(messages) => self.set_error(messages.clone(), Some(key)),
                Entry::Global => self.add_error(key.clone(), None),
            }
        }
    }

    /// Serialize to an ordered sequence mixing per-field error-group objects
    /// (`{field: [messages]}`) and bare global-error strings, in the order
    /// the errors were recorded.
    pub fn to_json(&self) -> Vec<serde_json::Value> {
        self.errors
            .iter()
            .map(|(key, entry)| match entry {
                Entry::Field(messages) => serde_json::json!({ key: messages }),
                Entry::Global => serde_json::Value::String(key.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_an_error_to_a_specific_field() {
        let mut notification = Notification::new();
        notification.add_error("must be valid", Some("email"));

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!({"email": ["must be valid"]})]
        );
    }

    #[test]
    fn does_not_duplicate_identical_messages_for_a_field() {
        let mut notification = Notification::new();
        notification.add_error("required", Some("name"));
        notification.add_error("required", Some("name"));

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!({"name": ["required"]})]
        );
    }

    #[test]
    fn keeps_distinct_messages_for_a_field() {
        let mut notification = Notification::new();
        notification.add_error("required", Some("name"));
        notification.add_error("too short", Some("name"));

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!({"name": ["required", "too short"]})]
        );
    }

    #[test]
    fn stores_global_errors_keyed_by_their_own_text() {
        let mut notification = Notification::new();
        notification.add_error("Something went wrong", None);

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!("Something went wrong")]
        );
    }

    #[test]
    fn set_error_overwrites_previous_field_errors() {
        let mut notification = Notification::new();
        notification.add_error("Old error", Some("name"));
        notification.set_error(vec!["New error".into()], Some("name"));

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!({"name": ["New error"]})]
        );
    }

    #[test]
    fn set_error_accepts_multiple_messages_for_a_field() {
        let mut notification = Notification::new();
        notification.set_error(vec!["Error 1".into(), "Error 2".into()], Some("password"));

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!({"password": ["Error 1", "Error 2"]})]
        );
    }

    #[test]
    fn set_error_accepts_multiple_global_messages() {
        let mut notification = Notification::new();
        notification.set_error(vec!["Error A".into(), "Error B".into()], None);

        assert_eq!(
            notification.to_json(),
            vec![serde_json::json!("Error A"), serde_json::json!("Error B")]
        );
    }

    #[test]
    fn detects_whether_it_has_errors() {
        let mut notification = Notification::new();
        assert!(!notification.has_errors());

        notification.add_error("Missing value", Some("field"));
        assert!(notification.has_errors());
    }

    #[test]
    fn copies_errors_from_another_notification() {
        let mut other = Notification::new();
        other.add_error("must be valid", Some("email"));
        other.set_error(vec!["required".into()], Some("name"));

        let mut notification = Notification::new();
        notification.copy_errors(&other);

        assert_eq!(
            notification.to_json(),
            vec![
                serde_json::json!({"email": ["must be valid"]}),
                serde_json::json!({"name": ["required"]}),
            ]
        );
    }

    #[test]
    fn serializes_mixed_entries_in_recording_order() {
        let mut notification = Notification::new();
        notification.add_error("invalid", Some("email"));
        notification.add_error("Something is wrong", None);

        assert_eq!(
            notification.to_json(),
            vec![
                serde_json::json!({"email": ["invalid"]}),
                serde_json::json!("Something is wrong"),
            ]
        );
    }
}
