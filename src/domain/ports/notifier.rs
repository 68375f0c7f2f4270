//! Notifier capability
//!
//! Anything that can describe a notification of itself can be notified.
//! Callers hold a `&dyn Notifier` and the concrete type picks the message.

use std::io::{self, Write};

use crate::domain::value_objects::Notification;

/// The "can notify" capability.
pub trait Notifier {
    /// Build the notification this value sends.
    fn notification(&self) -> Notification;

    /// Send the notification: one line on stdout.
    ///
    /// Cannot fail and returns nothing. A failed write (closed pipe) is
    /// logged and dropped.
    fn notify(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", self.notification()).and_then(|()| stdout.flush())
        {
            tracing::warn!(error = %err, "failed to write notification");
        }
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notification(&self) -> Notification {
        (**self).notification()
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notification(&self) -> Notification {
        (**self).notification()
    }
}
