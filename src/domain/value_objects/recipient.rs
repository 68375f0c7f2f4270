//! Recipient value object - a roster entry as written in config
//!
//! ```toml
//! [[recipients]]
//! kind = "admin"
//! name = "john smith"
//! email = "john@example.com"
//! ```

use serde::de::Error as _;
use serde::Deserialize;

use crate::domain::entities::{Admin, User};
use crate::domain::ports::Notifier;
use crate::domain::value_objects::NotificationKind;
use crate::error::{NotifierError, NotifierResult};

/// One entry of the notification roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    User { name: String },
    Admin { name: String, email: String },
}

/// On-disk shape of a roster entry.
///
/// A plain struct rather than a tagged enum so unknown keys inside an entry
/// still reach `serde_ignored` and show up as config warnings.
#[derive(Debug, Deserialize)]
struct RecipientDe {
    kind: NotificationKind,
    name: String,
    #[serde(default)]
    email: Option<String>,
}

impl<'de> Deserialize<'de> for Recipient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let RecipientDe { kind, name, email } = RecipientDe::deserialize(deserializer)?;
        match (kind, email) {
            (NotificationKind::User, None) => Ok(Recipient::User { name }),
            (NotificationKind::User, Some(_)) => Err(D::Error::custom(
                "`email` is only allowed for kind = \"admin\"",
            )),
            (NotificationKind::Admin, Some(email)) => Ok(Recipient::Admin { name, email }),
            (NotificationKind::Admin, None) => Err(D::Error::missing_field("email")),
        }
    }
}

impl Recipient {
    /// Validate the entry and build the matching notifier.
    ///
    /// `index` is the position in the roster and only used for error reporting.
    pub fn into_notifier(self, index: usize) -> NotifierResult<Box<dyn Notifier>> {
        match self {
            Recipient::User { name } => {
                let name = non_blank(name, index, "name")?;
                Ok(Box::new(User::new(name)))
            }
            Recipient::Admin { name, email } => {
                let name = non_blank(name, index, "name")?;
                let email = non_blank(email, index, "email")?;
                Ok(Box::new(Admin::new(User::new(name), email)))
            }
        }
    }
}

fn non_blank(value: String, index: usize, field: &str) -> NotifierResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NotifierError::InvalidRecipient {
            index,
            reason: format!("{field} must not be empty"),
        });
    }
    Ok(trimmed.to_string())
}
