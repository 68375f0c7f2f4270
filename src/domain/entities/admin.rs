//! Admin entity - a `User` plus an email address
//!
//! `Admin` embeds the `User` it was built from and forwards `name()` to it.
//! There is no second copy of the name.

use crate::domain::ports::Notifier;
use crate::domain::value_objects::{escape_control, Notification, NotificationKind};

use super::User;

/// An administrator: an embedded user and an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    user: User,
    email: String,
}

impl Admin {
    /// Create an admin from an existing user
    pub fn new(user: User, email: impl Into<String>) -> Self {
        Self {
            user,
            email: email.into(),
        }
    }

    /// The embedded user record
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Display name, read through the embedded user
    pub fn name(&self) -> &str {
        self.user.name()
    }

    /// Email address
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Notifier for Admin {
    fn notification(&self) -> Notification {
        // `{:?}` on a str quotes and escapes it
        Notification::new(
            NotificationKind::Admin,
            self.name(),
            Some(self.email()),
            format!(
                "Admin: Sending admin email to {}. The email address is {:?}.",
                escape_control(self.name()),
                self.email()
            ),
        )
    }
}
