//! Reusable UI components for the portfolio pages.
//!
//! Overlay components (banners, confetti, ripples) are absolutely or fixed
//! positioned and expect the keyframes from `artfolio_core::style`.

mod button;
mod confetti;
mod input;
mod notification;
mod ripple;

pub use button::*;
pub use confetti::*;
pub use input::*;
pub use notification::*;
pub use ripple::*;
