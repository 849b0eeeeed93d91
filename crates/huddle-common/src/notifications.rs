use std::collections::VecDeque;

/// A modal alert shown to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
}

impl Notification {
    pub fn alert(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: Some(subtitle.into()),
            body: body.into(),
        }
    }

    /// The alert shown when the token fetch or the session connect fails.
    pub fn connection_failure(message: impl Into<String>) -> Self {
        Self::alert(
            "Error occurred!",
            "There was an error connecting to the session:",
            message,
        )
    }
}

/// Alerts waiting for the user, oldest first. Holds at most `capacity`;
/// pushing past that drops the oldest.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// The alert currently on screen, if any.
    pub fn pending_alert(&self) -> Option<&Notification> {
        self.items.front()
    }

    /// Dismiss the alert on screen. Returns `false` if there was none.
    pub fn dismiss_alert(&mut self) -> bool {
        self.items.pop_front().is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}
