//! Notification Banner Components
//!
//! Renders the page's banners. Entering and leaving animations come from the
//! banner phase; removal happens when the owning lifecycle task drops the
//! banner from the list.

use artfolio_core::{Notification, Notifications};
use dioxus::prelude::*;

/// One fixed-position banner.
#[component]
pub fn NotificationBanner(notification: Notification) -> Element {
    rsx! {
        div {
            class: "{notification.class()}",
            role: if notification.severity == artfolio_core::Severity::Error { "alert" } else { "status" },
            style: "{notification.style()}",
            "{notification.message}"
        }
    }
}

/// All banners currently on screen. Banners overlap; there is no queue.
#[component]
pub fn NotificationStack(notifications: Notifications) -> Element {
    rsx! {
        for notification in notifications.iter().cloned() {
            NotificationBanner {
                key: "{notification.id}",
                notification,
            }
        }
    }
}
