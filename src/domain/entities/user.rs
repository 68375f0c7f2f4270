//! User entity - the plain person record

use crate::domain::ports::Notifier;
use crate::domain::value_objects::{escape_control, Notification, NotificationKind};

/// A person that can receive a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    /// Create a new user with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Notifier for User {
    fn notification(&self) -> Notification {
        Notification::new(
            NotificationKind::User,
            self.name(),
            None,
            format!("User: Sending user email to {}", escape_control(self.name())),
        )
    }
}
