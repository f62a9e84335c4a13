//! Optional tracing setup for programs embedding the client.
//!
//! `BIG3_LOG` takes `EnvFilter` directives, so the client's own events can be
//! raised independently of the host program:
//!
//! ```text
//! BIG3_LOG=warn,big3_client=debug
//! ```

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Environment variable read by [`init`].
pub const LOG_ENV: &str = "BIG3_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

static INIT: OnceLock<()> = OnceLock::new();

/// Build a filter from directive text, falling back to `info` when the text
/// is absent, blank or does not parse.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a fmt subscriber filtered by `BIG3_LOG`.
///
/// Only the first call does anything. If the host already set a global
/// subscriber, that one stays in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = filter_from(std::env::var(LOG_ENV).ok().as_deref());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
