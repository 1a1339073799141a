//! User-facing notifications queued in the store.

use std::time::Duration;

use uuid::Uuid;

/// One queued notification.
///
/// Identity is the generated `id`; two notifications may carry the same
/// content and still be removed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub content: String,
    pub color: Option<NotificationColor>,
    /// How long the consumer should display it. `None` means until dismissed.
    pub timeout: Option<Duration>,
    /// Marks long-running work, e.g. a save in flight.
    pub show_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationColor {
    Success,
    Error,
}

impl Notification {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            color: None,
            timeout: None,
            show_progress: false,
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(content).with_color(NotificationColor::Success)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(content).with_color(NotificationColor::Error)
    }

    /// A progress notification, shown until explicitly removed.
    pub fn progress(content: impl Into<String>) -> Self {
        let mut notification = Self::new(content);
        notification.show_progress = true;
        notification
    }

    pub fn with_color(mut self, color: NotificationColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_content_gets_distinct_ids() {
        let first = Notification::success("Created");
        let second = Notification::success("Created");
        assert_eq!(first.content, second.content);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn builders_set_the_expected_fields() {
        let saving = Notification::progress("saving");
        assert!(saving.show_progress);
        assert_eq!(saving.color, None);

        let failure = Notification::error("Request failed").with_timeout(Duration::from_secs(10));
        assert_eq!(failure.color, Some(NotificationColor::Error));
        assert_eq!(failure.timeout, Some(Duration::from_secs(10)));
        assert!(!failure.show_progress);
    }
}
