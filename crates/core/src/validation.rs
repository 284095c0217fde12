//! Pure validator functions populating a [`Notification`].

use crate::notification::Notification;

/// Maximum accepted length for a category name, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Check the `name` invariants (non-empty, at most [`NAME_MAX_LEN`] chars)
/// and record violations under the `"name"` key.
///
/// Never fails; callers consult `notification.has_errors()`.
pub fn validate_name(name: &str, notification: &mut Notification) {
    if name.is_empty() {
        notification.add_error("name should not be empty", Some("name"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        notification.add_error(
            "name must be shorter than or equal to 255 characters",
            Some("name"),
        );
    }
}
