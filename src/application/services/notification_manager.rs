use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// Queue of transient notifications; only the front one is shown.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        self.queue.push_back(notification);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Advances the queue: starts the front notification's display clock and
    /// drops it once expired.
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_front_notification_is_shown() {
        let mut manager = NotificationManager::default();
        manager.error("Error", "Die eingegebene Login-Nr. ist falsch.");

        let current = manager.current().expect("notification queued");
        assert_eq!(current.level, NotificationLevel::Error);

        manager.tick();
        assert!(manager.current().is_some());
    }

    #[test]
    fn test_expired_front_gives_way_to_next() {
        let mut manager = NotificationManager::default();
        manager.info("1", "Erste");
        manager.info("2", "Zweite");
        assert_eq!(manager.current().map(|n| n.title.as_str()), Some("1"));

        manager.tick();
        manager.queue.front_mut().unwrap().displayed_at =
            Some(Instant::now() - Duration::from_secs(10));
        manager.tick();

        assert_eq!(manager.current().map(|n| n.title.as_str()), Some("2"));
    }

    #[test]
    fn test_custom_duration_is_applied() {
        let mut manager = NotificationManager::new(Duration::from_secs(7));
        manager.info("Hinweis", "ok");
        assert_eq!(manager.current().unwrap().duration, Duration::from_secs(7));
    }
}
