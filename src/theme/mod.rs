//! Visual theme for Artfolio.

mod styles;

pub use styles::GLOBAL_STYLES;
