//! Value objects

pub mod notification;
pub mod recipient;

pub use notification::{escape_control, Notification, NotificationKind};
pub use recipient::Recipient;
