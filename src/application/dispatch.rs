//! Notification dispatch
//!
//! The caller only ever sees `&dyn Notifier`. Which message gets sent is
//! decided by the concrete type behind the reference at call time.

use tracing::debug;

use crate::domain::entities::{Admin, User};
use crate::domain::ports::{NotificationSink, Notifier};
use crate::domain::value_objects::NotificationKind;

/// Name used by the demo sequence
const DEMO_NAME: &str = "john smith";
/// Email used by the demo sequence
const DEMO_EMAIL: &str = "john@example.com";

/// Invoke `notify` on any notifier.
pub fn dispatch(notifier: &dyn Notifier) {
    notifier.notify();
}

/// Counts of what a dispatch run sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub users: usize,
    pub admins: usize,
}

impl DispatchSummary {
    pub fn total(&self) -> usize {
        self.users + self.admins
    }

    fn record(&mut self, kind: NotificationKind) {
        match kind {
            NotificationKind::User => self.users += 1,
            NotificationKind::Admin => self.admins += 1,
        }
    }
}

/// Sends notifiers to a sink
pub struct Dispatcher<'a> {
    sink: &'a dyn NotificationSink,
}

impl<'a> Dispatcher<'a> {
    pub fn new(sink: &'a dyn NotificationSink) -> Self {
        Self { sink }
    }

    /// Build the notifier's notification and deliver it.
    pub fn send(&self, notifier: &dyn Notifier) -> NotificationKind {
        let notification = notifier.notification();
        debug!(
            kind = %notification.kind(),
            recipient = notification.recipient(),
            "delivering notification"
        );
        self.sink.deliver(&notification);
        notification.kind()
    }

    /// Send every notifier in order.
    pub fn send_all(&self, roster: &[Box<dyn Notifier>]) -> DispatchSummary {
        let mut summary = DispatchSummary::default();
        for notifier in roster {
            summary.record(self.send(notifier.as_ref()));
        }
        summary
    }
}

/// Notify a user, then an admin built from that same user, through one
/// `&dyn Notifier` slot that is rebound between the two calls.
pub fn run_demo(dispatcher: &Dispatcher<'_>) -> DispatchSummary {
    let user = User::new(DEMO_NAME);
    let admin = Admin::new(user.clone(), DEMO_EMAIL);

    let mut summary = DispatchSummary::default();

    let mut slot: &dyn Notifier = &user;
    summary.record(dispatcher.send(slot));

    slot = &admin;
    summary.record(dispatcher.send(slot));

    summary
}
