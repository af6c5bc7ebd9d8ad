//! Transient notification banners.
//!
//! A banner slides in, stays for `notification_visible_ms`, slides out for
//! `notification_exit_ms` and is removed. Banners are independent: there is
//! no queue and no stacking limit.

use ulid::Ulid;

use crate::chrome::PageChrome;
use crate::config::InteractionConfig;
use crate::surface::Surface;

/// Banner severity, which selects its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Background colour of the banner.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Info => "#3b82f6",
        }
    }
}

/// Unique identifier for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(Ulid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

impl Notification {
    /// CSS classes, e.g. `notification notification-error`.
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    /// Inline style for the banner in its current phase.
    pub fn style(&self) -> String {
        let animation = match self.phase {
            NotificationPhase::Entering => "slideInRight 0.3s ease",
            NotificationPhase::Leaving => "slideOutRight 0.3s ease forwards",
        };
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 2rem; \
             border-radius: 10px; color: white; font-weight: 600; z-index: 3000; \
             max-width: 300px; background: {}; animation: {};",
            self.severity.color(),
            animation
        )
    }
}

/// Banners currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    /// Show a banner. The caller is responsible for running its lifecycle.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId::new();
        let message = message.into();
        tracing::debug!(%id, severity = severity.as_str(), %message, "Notification shown");
        self.items.push(Notification {
            id,
            message,
            severity,
            phase: NotificationPhase::Entering,
        });
        id
    }

    /// Start the exit animation. Returns false if the banner is gone.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.phase = NotificationPhase::Leaving;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Drive one banner from shown to removed.
pub async fn run_lifecycle<C: Surface<PageChrome>>(
    mut chrome: C,
    id: NotificationId,
    config: &InteractionConfig,
) {
    tokio::time::sleep(config.notification_visible()).await;
    chrome.update(|c| c.notifications.begin_exit(id));
    tokio::time::sleep(config.notification_exit()).await;
    chrome.update(|c| c.notifications.remove(id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Success.color(), "#10b981");
        assert_eq!(Severity::Error.color(), "#ef4444");
        assert_eq!(Severity::Info.color(), "#3b82f6");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_push_exit_remove() {
        let mut list = Notifications::default();
        let a = list.push("first", Severity::Info);
        let b = list.push("second", Severity::Error);
        assert_eq!(list.len(), 2);

        assert!(list.begin_exit(a));
        assert_eq!(list.get(a).unwrap().phase, NotificationPhase::Leaving);
        assert!(list.get(a).unwrap().style().contains("slideOutRight"));
        assert!(list.get(b).unwrap().style().contains("slideInRight"));

        assert!(list.remove(a));
        assert!(!list.remove(a));
        assert!(!list.begin_exit(a));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_class_names() {
        let mut list = Notifications::default();
        let id = list.push("oops", Severity::Error);
        assert_eq!(list.get(id).unwrap().class(), "notification notification-error");
    }
}
