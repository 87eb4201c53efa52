use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "info,yomu=debug,tower_http=debug";

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default filter. Output is human-readable on a
/// terminal and JSON lines otherwise.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if atty::is(atty::Stream::Stdout) {
        registry.with(fmt::layer()).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}
