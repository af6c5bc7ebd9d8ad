//! Artfolio Core Library
//!
//! Interaction behaviour for an illustration portfolio site, kept free of
//! any UI framework so it can be tested on a paused clock.
//!
//! ## Overview
//!
//! Each page wires a handful of independent controllers:
//!
//! - **Navigation**: header style from scroll offset, in-page anchors, ripples
//! - **Portfolio modal**: lightbox with placeholder artwork and exit animation
//! - **Contact form**: field validation, simulated send, success dialog, confetti
//! - **Newsletter**: email check, simulated signup, notification banners
//! - **Scroll reveal**: one-shot `animate-in` marking
//! - **Decorative motion**: parallax, staggered float, hue cycle, hover tilt
//!
//! State lives in the UI; the async flows here borrow it through a
//! [`Surface`] and express every delay with `tokio::time`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::{cell::RefCell, rc::Rc};
//! use artfolio_core::{newsletter, InteractionConfig, NewsletterForm, PageChrome};
//!
//! let config = InteractionConfig::default();
//! let form = Rc::new(RefCell::new(NewsletterForm::default()));
//! let chrome = Rc::new(RefCell::new(PageChrome::default()));
//!
//! form.borrow_mut().email = "ok@site.org".into();
//! let outcome = newsletter::submit(form.clone(), chrome.clone(), &config).await;
//! ```

pub mod art;
pub mod chrome;
pub mod config;
pub mod confetti;
pub mod contact;
pub mod error;
pub mod layout;
pub mod logging;
pub mod modal;
pub mod motion;
pub mod nav;
pub mod newsletter;
pub mod notify;
pub mod reveal;
pub mod style;
pub mod submit;
pub mod surface;
pub mod tasks;
pub mod validate;

// Re-exports
pub use chrome::{LockOwner, PageChrome, ScrollLock};
pub use config::InteractionConfig;
pub use confetti::{Confetti, Particle, ParticleId};
pub use contact::{ContactForm, ContactOutcome};
pub use error::{ArtfolioError, Result};
pub use layout::{Controller, PageLayout, CONTACT_PAGE, PORTFOLIO_PAGE};
pub use modal::{LightboxView, ModalPhase, ModalState, PortfolioPiece};
pub use nav::{HeaderStyle, Ripple, RippleId, RippleSet};
pub use newsletter::{NewsletterForm, NewsletterOutcome};
pub use notify::{Notification, NotificationId, NotificationPhase, Notifications, Severity};
pub use reveal::{ElementBounds, RevealRule, RevealTracker};
pub use submit::SubmitControl;
pub use surface::Surface;
pub use tasks::{TaskKey, TaskSet};
pub use validate::{is_valid_email, ContactField, FieldError, FieldErrors, FormSnapshot};
