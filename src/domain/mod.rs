//! Domain Layer
//!
//! The records that can be notified and the capability they share.
//!
//! ## Structure
//!
//! - `entities/` - Record shapes (`User`, and `Admin` which embeds a `User`)
//! - `value_objects/` - Immutable values (`Notification`, `Recipient`)
//! - `ports/` - Trait boundaries (`Notifier`, `NotificationSink`)
//!
//! Nothing in here touches stdout except the provided `Notifier::notify`.

pub mod entities;
pub mod ports;
pub mod value_objects;
