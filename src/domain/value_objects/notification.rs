//! Notification value object - what a notifier has to say
//!
//! The `message` is built by the concrete notifier; `Display` writes it
//! verbatim so text output never depends on `kind`. A message is always a
//! single line: notifiers pass free text through `escape_control` first.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Escape control characters (`\n`, `\r`, `\t`, ...) so `text` cannot
/// break a line. Everything else is left as is.
pub fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_debug());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Which record shape produced a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    User,
    Admin,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::User => write!(f, "user"),
            NotificationKind::Admin => write!(f, "admin"),
        }
    }
}

/// A single rendered notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    kind: NotificationKind,
    recipient: String,
    email: Option<String>,
    message: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        recipient: impl Into<String>,
        email: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            recipient: recipient.into(),
            email: email.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Name of the person being notified
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The human-readable line, without trailing newline
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
