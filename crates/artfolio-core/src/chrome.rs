//! Page-wide overlay state: scroll lock, notification stack and confetti.
//!
//! These are the only pieces of state that more than one controller touches.

use crate::confetti::Confetti;
use crate::notify::Notifications;

/// Which dialog holds the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOwner {
    PortfolioModal,
    SuccessDialog,
}

/// Document-wide "body overflow hidden" flag.
///
/// The dialog that opened last owns it; only that owner's close releases it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    owner: Option<LockOwner>,
}

impl ScrollLock {
    pub fn acquire(&mut self, owner: LockOwner) {
        if self.owner != Some(owner) {
            tracing::debug!(?owner, previous = ?self.owner, "Scroll lock acquired");
        }
        self.owner = Some(owner);
    }

    /// Release if `owner` holds the lock. Returns whether it was released.
    pub fn release(&mut self, owner: LockOwner) -> bool {
        if self.owner == Some(owner) {
            self.owner = None;
            tracing::debug!(?owner, "Scroll lock released");
            true
        } else {
            false
        }
    }

    pub fn owner(&self) -> Option<LockOwner> {
        self.owner
    }

    pub fn is_locked(&self) -> bool {
        self.owner.is_some()
    }

    /// Value for `document.body.style.overflow`.
    pub fn overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            "auto"
        }
    }
}

/// Overlay state shared across the page's controllers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageChrome {
    pub scroll_lock: ScrollLock,
    pub notifications: Notifications,
    pub confetti: Confetti,
}
