//! End-to-end timing tests for the interaction flows.
//!
//! Every test runs on a paused clock and steps time by hand, so the
//! assertions pin down exact millisecond boundaries.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::poll;
use rand::rngs::StdRng;
use rand::SeedableRng;

use artfolio_core::contact::{self, ContactOutcome, SENDING_LABEL, SUBMIT_LABEL};
use artfolio_core::modal::{self, LightboxView, ModalState, PortfolioPiece};
use artfolio_core::newsletter::{self, NewsletterOutcome, JOINED_MESSAGE, PENDING_LABEL};
use artfolio_core::{
    confetti, motion, nav, notify, ContactField, ContactForm, FieldError, InteractionConfig, LockOwner,
    NewsletterForm, NotificationPhase, PageChrome, Particle, ParticleId, Ripple, RippleSet, Severity,
};

fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn filled_contact_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada Lovelace");
    form.set(ContactField::Email, "ada@engine.org");
    form.set(ContactField::ProjectType, "book-cover");
    form.set(ContactField::Message, "Cover art for a monograph");
    form
}

// ============================================================================
// Contact form
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_contact_each_missing_field_blocks_submission() {
    let config = InteractionConfig::default();

    for field in ContactField::REQUIRED {
        let mut form = filled_contact_form();
        form.set(field, "  ");
        let form = shared(form);
        let dialog = shared(ModalState::<()>::new());
        let chrome = shared(PageChrome::default());

        let outcome = contact::submit(
            form.clone(),
            Some(dialog.clone()),
            chrome.clone(),
            &config,
            StdRng::seed_from_u64(1),
        )
        .await;

        let ContactOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection for {}", field.name());
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field), Some(FieldError::Required));
        assert_eq!(form.borrow().errors().len(), 1);
        assert!(!form.borrow().submit_control().is_disabled());
        assert!(!dialog.borrow().is_visible());
        assert!(chrome.borrow().confetti.is_empty());
    }
}

#[tokio::test(start_paused = true)]
async fn test_contact_revalidation_clears_fixed_fields() {
    let config = InteractionConfig::default();
    let form = shared(ContactForm::default());
    let chrome = shared(PageChrome::default());

    let outcome = contact::submit(
        form.clone(),
        None::<Rc<RefCell<ModalState<()>>>>,
        chrome.clone(),
        &config,
        StdRng::seed_from_u64(1),
    )
    .await;
    assert!(matches!(outcome, ContactOutcome::Rejected(ref e) if e.len() == 4));

    {
        let mut f = form.borrow_mut();
        f.set(ContactField::Name, "Ada");
        f.set(ContactField::ProjectType, "mural");
        f.set(ContactField::Message, "Hi");
        f.set(ContactField::Email, "not-an-email");
    }

    let outcome = contact::submit(
        form.clone(),
        None::<Rc<RefCell<ModalState<()>>>>,
        chrome.clone(),
        &config,
        StdRng::seed_from_u64(1),
    )
    .await;
    let ContactOutcome::Rejected(errors) = outcome else {
        panic!("malformed email must be rejected");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(ContactField::Email), Some(FieldError::InvalidEmail));
}

#[tokio::test(start_paused = true)]
async fn test_contact_end_to_end_timing() {
    let config = InteractionConfig::default();
    let form = shared(filled_contact_form());
    let dialog = shared(ModalState::<()>::new());
    let chrome = shared(PageChrome::default());

    let mut flow = Box::pin(contact::submit(
        form.clone(),
        Some(dialog.clone()),
        chrome.clone(),
        &config,
        StdRng::seed_from_u64(9),
    ));

    assert!(poll!(flow.as_mut()).is_pending());
    {
        let f = form.borrow();
        assert!(f.submit_control().is_disabled());
        assert_eq!(f.submit_control().label(), SENDING_LABEL);
        assert_eq!(f.submit_control().style(), "background: #ccc;");
        assert!(f.errors().is_empty());
    }

    tokio::time::advance(ms(1999)).await;
    assert!(poll!(flow.as_mut()).is_pending());
    assert!(form.borrow().submit_control().is_disabled());
    assert!(!dialog.borrow().is_visible());

    tokio::time::advance(ms(1)).await;
    let outcome = match poll!(flow.as_mut()) {
        std::task::Poll::Ready(outcome) => outcome,
        std::task::Poll::Pending => panic!("submission should finish at 2000ms"),
    };

    let ContactOutcome::Sent { particles } = outcome else {
        panic!("expected a sent outcome");
    };
    assert_eq!(particles.len(), 50);

    let f = form.borrow();
    assert!(!f.submit_control().is_disabled());
    assert_eq!(f.submit_control().label(), SUBMIT_LABEL);
    assert_eq!(f.submit_control().style(), "");
    for field in ContactField::REQUIRED {
        assert_eq!(f.value(field), "");
    }

    assert!(dialog.borrow().is_open());
    let c = chrome.borrow();
    assert_eq!(c.scroll_lock.owner(), Some(LockOwner::SuccessDialog));
    assert_eq!(c.confetti.len(), 50);
}

#[tokio::test(start_paused = true)]
async fn test_contact_busy_while_pending() {
    let config = InteractionConfig::default();
    let form = shared(filled_contact_form());
    let chrome = shared(PageChrome::default());
    let none = None::<Rc<RefCell<ModalState<()>>>>;

    let mut first = Box::pin(contact::submit(
        form.clone(),
        none.clone(),
        chrome.clone(),
        &config,
        StdRng::seed_from_u64(2),
    ));
    assert!(poll!(first.as_mut()).is_pending());

    let second = contact::submit(
        form.clone(),
        none,
        chrome.clone(),
        &config,
        StdRng::seed_from_u64(2),
    )
    .await;
    assert_eq!(second, ContactOutcome::Busy);
    assert!(matches!(first.await, ContactOutcome::Sent { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_success_dialog_closes_immediately() {
    let dialog = shared(ModalState::<()>::new());
    let chrome = shared(PageChrome::default());

    modal::open(dialog.clone(), chrome.clone(), LockOwner::SuccessDialog, ());
    assert_eq!(chrome.borrow().scroll_lock.overflow(), "hidden");

    assert!(modal::close_now(dialog.clone(), chrome.clone(), LockOwner::SuccessDialog));
    assert_eq!(dialog.borrow().display(), "none");
    assert_eq!(chrome.borrow().scroll_lock.overflow(), "auto");
    assert!(!modal::close_now(dialog.clone(), chrome.clone(), LockOwner::SuccessDialog));
}

// ============================================================================
// Newsletter
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_newsletter_rejects_bad_email() {
    let config = InteractionConfig::default();
    let form = shared(NewsletterForm::default());
    let chrome = shared(PageChrome::default());
    form.borrow_mut().email = "bad-email".to_string();

    let outcome = newsletter::submit(form.clone(), chrome.clone(), &config).await;

    let NewsletterOutcome::Rejected(id) = outcome else {
        panic!("expected rejection");
    };
    let c = chrome.borrow();
    let banner = c.notifications.get(id).unwrap();
    assert_eq!(banner.severity, Severity::Error);
    assert_eq!(form.borrow().email, "bad-email");
    assert!(!form.borrow().submit_control().is_disabled());
}

#[tokio::test(start_paused = true)]
async fn test_newsletter_rejects_blank_email() {
    let config = InteractionConfig::default();
    let form = shared(NewsletterForm::default());
    let chrome = shared(PageChrome::default());
    form.borrow_mut().email = "   ".to_string();

    let outcome = newsletter::submit(form.clone(), chrome.clone(), &config).await;
    assert!(matches!(outcome, NewsletterOutcome::Rejected(_)));
}

#[tokio::test(start_paused = true)]
async fn test_newsletter_end_to_end_timing() {
    let config = InteractionConfig::default();
    let form = shared(NewsletterForm::default());
    let chrome = shared(PageChrome::default());
    form.borrow_mut().email = "  ok@site.org ".to_string();

    let mut flow = Box::pin(newsletter::submit(form.clone(), chrome.clone(), &config));
    assert!(poll!(flow.as_mut()).is_pending());
    assert_eq!(form.borrow().submit_control().label(), PENDING_LABEL);
    assert!(form.borrow().submit_control().is_disabled());
    assert!(chrome.borrow().notifications.is_empty());

    tokio::time::advance(ms(1499)).await;
    assert!(poll!(flow.as_mut()).is_pending());
    assert_eq!(form.borrow().email, "  ok@site.org ");

    tokio::time::advance(ms(1)).await;
    let outcome = match poll!(flow.as_mut()) {
        std::task::Poll::Ready(outcome) => outcome,
        std::task::Poll::Pending => panic!("signup should finish at 1500ms"),
    };

    let NewsletterOutcome::Joined(id) = outcome else {
        panic!("expected success");
    };
    assert_eq!(form.borrow().email, "");
    assert!(!form.borrow().submit_control().is_disabled());
    let c = chrome.borrow();
    let banner = c.notifications.get(id).unwrap();
    assert_eq!(banner.severity, Severity::Success);
    assert_eq!(banner.message, JOINED_MESSAGE);
}

// ============================================================================
// Notifications and confetti
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_notification_lifecycle() {
    let config = InteractionConfig::default();
    let chrome = shared(PageChrome::default());
    let id = chrome
        .borrow_mut()
        .notifications
        .push("Saved", Severity::Info);

    let mut life = Box::pin(notify::run_lifecycle(chrome.clone(), id, &config));
    assert!(poll!(life.as_mut()).is_pending());

    tokio::time::advance(ms(2999)).await;
    assert!(poll!(life.as_mut()).is_pending());
    assert_eq!(
        chrome.borrow().notifications.get(id).unwrap().phase,
        NotificationPhase::Entering
    );

    tokio::time::advance(ms(1)).await;
    assert!(poll!(life.as_mut()).is_pending());
    assert_eq!(
        chrome.borrow().notifications.get(id).unwrap().phase,
        NotificationPhase::Leaving
    );

    tokio::time::advance(ms(299)).await;
    assert!(poll!(life.as_mut()).is_pending());
    assert!(chrome.borrow().notifications.get(id).is_some());

    tokio::time::advance(ms(1)).await;
    assert!(poll!(life.as_mut()).is_ready());
    assert!(chrome.borrow().notifications.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_notifications_are_independent() {
    let config = InteractionConfig::default();
    let chrome = shared(PageChrome::default());
    let a = chrome.borrow_mut().notifications.push("a", Severity::Info);

    let first = notify::run_lifecycle(chrome.clone(), a, &config);
    let second = async {
        tokio::time::sleep(ms(1000)).await;
        let b = chrome.borrow_mut().notifications.push("b", Severity::Success);
        assert_eq!(chrome.borrow().notifications.len(), 2);
        notify::run_lifecycle(chrome.clone(), b, &config).await;
    };
    let check = async {
        tokio::time::sleep(ms(3500)).await;
        let c = chrome.borrow();
        assert_eq!(c.notifications.len(), 1);
        assert!(c.notifications.get(a).is_none());
    };

    tokio::join!(first, second, check);
    assert!(chrome.borrow().notifications.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_confetti_removed_at_fixed_lifetime() {
    let config = InteractionConfig::default();
    let chrome = shared(PageChrome::default());

    let slow = Particle {
        id: ParticleId::new(),
        color: confetti::PALETTE[2],
        left_vw: 50.0,
        fall: ms(4990),
    };
    let slow_id = chrome.borrow_mut().confetti.insert(slow);

    let start = tokio::time::Instant::now();
    confetti::run_lifetime(chrome.clone(), slow_id, &config).await;

    assert_eq!(start.elapsed(), ms(5000));
    assert!(chrome.borrow().confetti.get(slow_id).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_burst_lifetimes_all_expire_together() {
    let config = InteractionConfig::default();
    let chrome = shared(PageChrome::default());
    let mut rng = StdRng::seed_from_u64(11);
    let ids = chrome.borrow_mut().confetti.burst(&mut rng, &config);
    assert_eq!(chrome.borrow().confetti.len(), 50);

    let lifetimes = ids
        .into_iter()
        .map(|id| confetti::run_lifetime(chrome.clone(), id, &config));
    let mut all = Box::pin(futures::future::join_all(lifetimes));

    assert!(poll!(all.as_mut()).is_pending());
    tokio::time::advance(ms(4999)).await;
    assert!(poll!(all.as_mut()).is_pending());
    assert_eq!(chrome.borrow().confetti.len(), 50);

    tokio::time::advance(ms(1)).await;
    assert!(poll!(all.as_mut()).is_ready());
    assert!(chrome.borrow().confetti.is_empty());
}

// ============================================================================
// Portfolio modal
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_modal_reflects_latest_piece() {
    let lightbox = shared(ModalState::<LightboxView>::new());
    let chrome = shared(PageChrome::default());
    let fox = PortfolioPiece::new("Fox Lanterns", "Gouache");
    let heron = PortfolioPiece::new("Heron at Dusk", "Ink wash");

    modal::open(lightbox.clone(), chrome.clone(), LockOwner::PortfolioModal, LightboxView::from(&fox));
    modal::open(lightbox.clone(), chrome.clone(), LockOwner::PortfolioModal, LightboxView::from(&heron));

    let view = lightbox.borrow().content().cloned().unwrap();
    assert_eq!(view.title, "Heron at Dusk");
    assert_eq!(view.description, "Ink wash");
    assert_eq!(chrome.borrow().scroll_lock.owner(), Some(LockOwner::PortfolioModal));
}

#[tokio::test(start_paused = true)]
async fn test_modal_close_converges_after_exit_animation() {
    let config = InteractionConfig::default();
    let piece = PortfolioPiece::new("Moth", "Charcoal");

    // Close button, backdrop click and Escape all run the same close flow.
    for path in ["close-button", "backdrop", "escape"] {
        let lightbox = shared(ModalState::<LightboxView>::new());
        let chrome = shared(PageChrome::default());
        modal::open(lightbox.clone(), chrome.clone(), LockOwner::PortfolioModal, LightboxView::from(&piece));

        let mut flow = Box::pin(modal::close(
            lightbox.clone(),
            chrome.clone(),
            LockOwner::PortfolioModal,
            config.modal_close(),
        ));
        assert!(poll!(flow.as_mut()).is_pending(), "{}", path);
        assert_eq!(lightbox.borrow().display(), "block");
        assert_eq!(lightbox.borrow().animation(), "fadeOut 0.3s ease");
        assert_eq!(chrome.borrow().scroll_lock.overflow(), "hidden");

        tokio::time::advance(ms(299)).await;
        assert!(poll!(flow.as_mut()).is_pending());
        assert_eq!(chrome.borrow().scroll_lock.overflow(), "hidden");

        tokio::time::advance(ms(1)).await;
        assert_eq!(poll!(flow.as_mut()), std::task::Poll::Ready(true));
        assert_eq!(lightbox.borrow().display(), "none");
        assert_eq!(chrome.borrow().scroll_lock.overflow(), "auto");
    }
}

#[tokio::test(start_paused = true)]
async fn test_reopen_during_exit_keeps_modal_open() {
    let config = InteractionConfig::default();
    let lightbox = shared(ModalState::<LightboxView>::new());
    let chrome = shared(PageChrome::default());
    let first = PortfolioPiece::new("First", "one");
    let second = PortfolioPiece::new("Second", "two");

    modal::open(lightbox.clone(), chrome.clone(), LockOwner::PortfolioModal, LightboxView::from(&first));
    let mut closing = Box::pin(modal::close(
        lightbox.clone(),
        chrome.clone(),
        LockOwner::PortfolioModal,
        config.modal_close(),
    ));
    assert!(poll!(closing.as_mut()).is_pending());

    tokio::time::advance(ms(100)).await;
    modal::open(lightbox.clone(), chrome.clone(), LockOwner::PortfolioModal, LightboxView::from(&second));

    tokio::time::advance(ms(200)).await;
    assert_eq!(poll!(closing.as_mut()), std::task::Poll::Ready(false));
    assert!(lightbox.borrow().is_open());
    assert_eq!(lightbox.borrow().content().unwrap().title, "Second");
    assert!(chrome.borrow().scroll_lock.is_locked());
}

#[tokio::test(start_paused = true)]
async fn test_close_when_already_closed_is_noop() {
    let config = InteractionConfig::default();
    let lightbox = shared(ModalState::<LightboxView>::new());
    let chrome = shared(PageChrome::default());

    let closed = modal::close(
        lightbox.clone(),
        chrome.clone(),
        LockOwner::PortfolioModal,
        config.modal_close(),
    )
    .await;
    assert!(!closed);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_during_exit_releases_lock() {
    let config = InteractionConfig::default();
    let lightbox = shared(ModalState::<LightboxView>::new());
    let chrome = shared(PageChrome::default());
    let piece = PortfolioPiece::new("Heron", "Ink");

    modal::open(lightbox.clone(), chrome.clone(), LockOwner::PortfolioModal, LightboxView::from(&piece));
    let mut closing = Box::pin(modal::close(
        lightbox.clone(),
        chrome.clone(),
        LockOwner::PortfolioModal,
        config.modal_close(),
    ));
    assert!(poll!(closing.as_mut()).is_pending());
    tokio::time::advance(ms(100)).await;

    // The page goes away and takes the close task with it.
    drop(closing);
    tokio::time::advance(ms(500)).await;
    assert_eq!(chrome.borrow().scroll_lock.overflow(), "hidden");

    assert!(modal::abandon(chrome.clone(), LockOwner::PortfolioModal));
    assert_eq!(chrome.borrow().scroll_lock.overflow(), "auto");
    assert!(!modal::abandon(chrome.clone(), LockOwner::PortfolioModal));
}

#[tokio::test(start_paused = true)]
async fn test_abandon_leaves_other_owner_locked() {
    let chrome = shared(PageChrome::default());
    let success = shared(ModalState::<()>::new());
    modal::open(success.clone(), chrome.clone(), LockOwner::SuccessDialog, ());

    assert!(!modal::abandon(chrome.clone(), LockOwner::PortfolioModal));
    assert_eq!(chrome.borrow().scroll_lock.owner(), Some(LockOwner::SuccessDialog));
}

// ============================================================================
// Navigation and motion
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_ripple_removed_after_animation() {
    let config = InteractionConfig::default();
    let set = shared(RippleSet::default());
    let id = set.borrow_mut().push(Ripple::at(10.0, 5.0, 80.0, 24.0));

    let mut flow = Box::pin(nav::run_ripple(set.clone(), id, &config));
    assert!(poll!(flow.as_mut()).is_pending());

    tokio::time::advance(ms(599)).await;
    assert!(poll!(flow.as_mut()).is_pending());
    assert_eq!(set.borrow().len(), 1);

    tokio::time::advance(ms(1)).await;
    assert!(poll!(flow.as_mut()).is_ready());
    assert!(set.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_hue_cycle_rerandomizes_each_period() {
    let config = InteractionConfig::default();
    let hues = shared(vec![0.0]);

    let mut cycle = Box::pin(motion::run_hue_cycle(
        hues.clone(),
        &config,
        StdRng::seed_from_u64(11),
    ));
    assert!(poll!(cycle.as_mut()).is_pending());

    tokio::time::advance(ms(4999)).await;
    assert!(poll!(cycle.as_mut()).is_pending());
    assert_eq!(*hues.borrow(), vec![0.0]);

    tokio::time::advance(ms(1)).await;
    assert!(poll!(cycle.as_mut()).is_pending());
    let first = hues.borrow()[0];
    assert_ne!(first, 0.0);
    assert!((0.0..360.0).contains(&first));

    tokio::time::advance(ms(5000)).await;
    assert!(poll!(cycle.as_mut()).is_pending());
    assert_ne!(hues.borrow()[0], first);
}
