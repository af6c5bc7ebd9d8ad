//! Console logging setup.
//!
//! The binary calls [`init`] once at startup. `RUST_LOG` wins over the
//! verbosity flag when it is set.

use tracing_subscriber::EnvFilter;

use crate::error::{ArtfolioError, Result};

/// Default filter directive for a verbosity level (`-v` count).
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "artfolio=info,artfolio_core=info,artfolio_ui=info",
        1 => "artfolio=debug,artfolio_core=debug,artfolio_ui=debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ArtfolioError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directives() {
        assert!(default_directive(0).contains("artfolio_core=info"));
        assert!(default_directive(1).contains("artfolio_core=debug"));
        assert_eq!(default_directive(4), "trace");
    }

    #[test]
    fn test_directives_parse() {
        for level in 0..3 {
            assert!(EnvFilter::try_new(default_directive(level)).is_ok());
        }
    }
}
