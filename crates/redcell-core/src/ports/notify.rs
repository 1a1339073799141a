//! Notification sink port.

use crate::domain::Notification;

/// Where adapters drop notifications they raise on their own, e.g. the
/// HTTP layer reporting a failed request. The store's state handle
/// implements this by queueing onto the notification list.
pub trait NotificationSink: Send + Sync {
    fn push(&self, notification: Notification);
}
