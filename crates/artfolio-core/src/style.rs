//! Animation keyframes installed once at startup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Keyframes and helper rules the controllers rely on.
pub const KEYFRAMES: &str = r#"
@keyframes slideInRight {
  from { opacity: 0; transform: translateX(100px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slideOutRight {
  from { opacity: 1; transform: translateX(0); }
  to { opacity: 0; transform: translateX(100px); }
}

@keyframes confettiFall {
  0% { transform: translateY(-10px) rotateZ(0deg); opacity: 1; }
  100% { transform: translateY(100vh) rotateZ(720deg); opacity: 0; }
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fadeOut {
  from { opacity: 1; }
  to { opacity: 0; }
}

.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.3);
  transform: scale(0);
  animation: rippleEffect 0.6s linear;
  pointer-events: none;
}

@keyframes rippleEffect {
  to { transform: scale(4); opacity: 0; }
}

.animate-in {
  animation-play-state: running !important;
}
"#;

/// Guard for a stylesheet that must be installed at most once.
#[derive(Debug, Default)]
pub struct StyleGuard {
    installed: AtomicBool,
}

impl StyleGuard {
    pub const fn new() -> Self {
        Self {
            installed: AtomicBool::new(false),
        }
    }

    /// The stylesheet on the first call, `None` afterwards.
    pub fn claim(&self, sheet: &'static str) -> Option<&'static str> {
        if self.installed.swap(true, Ordering::SeqCst) {
            tracing::debug!("Keyframes already installed");
            None
        } else {
            Some(sheet)
        }
    }
}

static KEYFRAMES_GUARD: StyleGuard = StyleGuard::new();

/// Claim the process-wide keyframes. Only the first caller gets them.
pub fn claim_keyframes() -> Option<&'static str> {
    KEYFRAMES_GUARD.claim(KEYFRAMES)
}
