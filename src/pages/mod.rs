//! Page components for Artfolio.

mod contact;
mod portfolio;

pub use contact::Contact;
pub use portfolio::Portfolio;
