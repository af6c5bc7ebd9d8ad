//! Artfolio UI Components
//!
//! Dioxus leaf components for the portfolio site. They render state owned by
//! the page controllers and report user intent through event handlers; none
//! of them schedules work of its own.
//!
//! ## Palette
//!
//! - **Violet (#8B5CF6)**: Primary actions, links
//! - **Coral (#F97316)**: Accents, hover states
//! - **Paper (#ffffff)**: Header and card backgrounds
//! - **Danger (#ef4444)**: Field errors, error banners

pub mod components;

pub use components::*;
