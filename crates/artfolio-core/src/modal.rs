//! Dialog state machine.
//!
//! ```text
//! Closed ──open──▶ Open ──begin_close──▶ Closing ──finish_close(ticket)──▶ Closed
//!                   ▲                       │
//!                   └─────────open──────────┘
//! ```
//!
//! Every `open` bumps a generation counter. A close ticket only completes if
//! no `open` happened since it was issued, so a stale exit timer can never
//! hide a freshly reopened dialog.

use crate::art::placeholder_data_uri;
use crate::chrome::{LockOwner, PageChrome};
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalPhase<C> {
    Closed,
    Open(C),
    Closing(C),
}

/// Proof that a close was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState<C> {
    phase: ModalPhase<C>,
    generation: u64,
}

impl<C> Default for ModalState<C> {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Closed,
            generation: 0,
        }
    }
}

impl<C> ModalState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `content`, replacing whatever was shown or closing.
    pub fn open(&mut self, content: C) {
        self.generation += 1;
        self.phase = ModalPhase::Open(content);
    }

    /// Start the exit animation. `None` unless the dialog is open.
    pub fn begin_close(&mut self) -> Option<CloseTicket> {
        match std::mem::replace(&mut self.phase, ModalPhase::Closed) {
            ModalPhase::Open(content) => {
                self.phase = ModalPhase::Closing(content);
                Some(CloseTicket(self.generation))
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Hide the dialog if `ticket` is still current.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if ticket.0 != self.generation || !matches!(self.phase, ModalPhase::Closing(_)) {
            return false;
        }
        self.phase = ModalPhase::Closed;
        true
    }

    /// Hide immediately, without an exit animation.
    pub fn close_now(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.phase = ModalPhase::Closed;
        was_visible
    }

    pub fn phase(&self) -> &ModalPhase<C> {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Open(_))
    }

    /// Open or still animating out.
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    pub fn content(&self) -> Option<&C> {
        match &self.phase {
            ModalPhase::Open(c) | ModalPhase::Closing(c) => Some(c),
            ModalPhase::Closed => None,
        }
    }

    /// CSS `display` value.
    pub fn display(&self) -> &'static str {
        if self.is_visible() {
            "block"
        } else {
            "none"
        }
    }

    /// CSS `animation` value for the current phase.
    pub fn animation(&self) -> &'static str {
        match self.phase {
            ModalPhase::Open(_) => "fadeIn 0.3s ease",
            ModalPhase::Closing(_) => "fadeOut 0.3s ease",
            ModalPhase::Closed => "none",
        }
    }
}

/// A portfolio piece as the page lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioPiece {
    pub title: String,
    pub description: String,
}

impl PortfolioPiece {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// What the lightbox shows for a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
}

impl From<&PortfolioPiece> for LightboxView {
    fn from(piece: &PortfolioPiece) -> Self {
        let title = piece.title.trim().to_string();
        Self {
            image_src: placeholder_data_uri(&title),
            image_alt: title.clone(),
            description: piece.description.trim().to_string(),
            title,
        }
    }
}

/// Open a dialog and take the scroll lock.
pub fn open<C, M, P>(mut modal: M, mut chrome: P, owner: LockOwner, content: C)
where
    M: Surface<ModalState<C>>,
    P: Surface<PageChrome>,
{
    modal.update(|m| m.open(content));
    chrome.update(|c| c.scroll_lock.acquire(owner));
    tracing::debug!(?owner, "Dialog opened");
}

/// Animate a dialog out, then hide it and release the scroll lock.
///
/// Returns false if the dialog was not open or was reopened meanwhile.
pub async fn close<C, M, P>(
    mut modal: M,
    mut chrome: P,
    owner: LockOwner,
    exit: std::time::Duration,
) -> bool
where
    M: Surface<ModalState<C>>,
    P: Surface<PageChrome>,
{
    let Some(ticket) = modal.update(|m| m.begin_close()) else {
        return false;
    };

    tokio::time::sleep(exit).await;

    if modal.update(|m| m.finish_close(ticket)) {
        chrome.update(|c| c.scroll_lock.release(owner));
        tracing::debug!(?owner, "Dialog closed");
        true
    } else {
        false
    }
}

/// Release `owner`'s scroll lock for a dialog torn down mid-flight, such as
/// a page unmounting while its close animation is still running.
pub fn abandon<P: Surface<PageChrome>>(mut chrome: P, owner: LockOwner) -> bool {
    let released = chrome.update(|c| c.scroll_lock.release(owner));
    if released {
        tracing::debug!(?owner, "Dialog abandoned with scroll lock held");
    }
    released
}

/// Hide a dialog without animation and release the scroll lock.
pub fn close_now<C, M, P>(mut modal: M, mut chrome: P, owner: LockOwner) -> bool
where
    M: Surface<ModalState<C>>,
    P: Surface<PageChrome>,
{
    let closed = modal.update(|m| m.close_now());
    if closed {
        chrome.update(|c| c.scroll_lock.release(owner));
    }
    closed
}
