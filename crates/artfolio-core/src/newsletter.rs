//! Newsletter signup.
//!
//! Unlike the contact form there is no per-field annotation: an invalid
//! address is reported with an error notification.

use crate::chrome::PageChrome;
use crate::config::InteractionConfig;
use crate::notify::{NotificationId, Severity};
use crate::submit::SubmitControl;
use crate::surface::Surface;
use crate::validate::is_valid_email;

pub const SUBMIT_LABEL: &str = "Join";
pub const PENDING_LABEL: &str = "Signing up...";
pub const INVALID_MESSAGE: &str = "Please enter a valid email address";
pub const JOINED_MESSAGE: &str = "Successfully signed up for the Art Club!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    submit: SubmitControl,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

impl NewsletterForm {
    pub fn new(submit_label: &str) -> Self {
        Self {
            email: String::new(),
            submit: SubmitControl::new(submit_label),
        }
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterOutcome {
    /// A signup is already in flight
    Busy,
    /// Address rejected; an error banner was shown
    Rejected(NotificationId),
    /// Signup finished; a success banner was shown
    Joined(NotificationId),
}

impl NewsletterOutcome {
    /// Banner whose lifecycle the caller must run.
    pub fn notification(&self) -> Option<NotificationId> {
        match self {
            NewsletterOutcome::Busy => None,
            NewsletterOutcome::Rejected(id) | NewsletterOutcome::Joined(id) => Some(*id),
        }
    }
}

/// Run one signup attempt end to end.
pub async fn submit<F, P>(mut form: F, mut chrome: P, config: &InteractionConfig) -> NewsletterOutcome
where
    F: Surface<NewsletterForm>,
    P: Surface<PageChrome>,
{
    let email = form.inspect(|f| {
        if f.submit.is_pending() {
            None
        } else {
            Some(f.email.trim().to_string())
        }
    });
    let Some(email) = email else {
        return NewsletterOutcome::Busy;
    };

    if email.is_empty() || !is_valid_email(&email) {
        let id = chrome.update(|c| c.notifications.push(INVALID_MESSAGE, Severity::Error));
        return NewsletterOutcome::Rejected(id);
    }

    form.update(|f| f.submit.pending(PENDING_LABEL, false));
    tracing::info!("Newsletter signup started");

    tokio::time::sleep(config.newsletter_latency()).await;

    form.update(|f| {
        f.email.clear();
        f.submit.restore();
    });
    let id = chrome.update(|c| c.notifications.push(JOINED_MESSAGE, Severity::Success));
    NewsletterOutcome::Joined(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[tokio::test(start_paused = true)]
    async fn test_invalid_email_keeps_input() {
        let form = Rc::new(RefCell::new(NewsletterForm::default()));
        let chrome = Rc::new(RefCell::new(PageChrome::default()));
        form.borrow_mut().email = "not-an-email".into();

        let outcome = submit(form.clone(), chrome.clone(), &InteractionConfig::default()).await;

        let NewsletterOutcome::Rejected(id) = outcome else {
            panic!("expected rejection, got {:?}", outcome);
        };
        let chrome = chrome.borrow();
        let banner = chrome.notifications.get(id).unwrap();
        assert_eq!(banner.message, INVALID_MESSAGE);
        assert_eq!(banner.severity, Severity::Error);
        assert_eq!(form.borrow().email, "not-an-email");
        assert!(!form.borrow().submit_control().is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_submit_is_busy() {
        let form = Rc::new(RefCell::new(NewsletterForm::default()));
        let chrome = Rc::new(RefCell::new(PageChrome::default()));
        form.borrow_mut().submit.pending(PENDING_LABEL, false);
        form.borrow_mut().email = "ok@site.org".into();

        let outcome = submit(form.clone(), chrome.clone(), &InteractionConfig::default()).await;

        assert_eq!(outcome, NewsletterOutcome::Busy);
        assert_eq!(outcome.notification(), None);
        assert!(chrome.borrow().notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_trimmed_email_joins() {
        let form = Rc::new(RefCell::new(NewsletterForm::default()));
        let chrome = Rc::new(RefCell::new(PageChrome::default()));
        form.borrow_mut().email = "  ok@site.org  ".into();

        let outcome = submit(form.clone(), chrome.clone(), &InteractionConfig::default()).await;

        assert!(matches!(outcome, NewsletterOutcome::Joined(_)));
        assert!(form.borrow().email.is_empty());
        assert_eq!(form.borrow().submit_control().label(), SUBMIT_LABEL);
    }
}
