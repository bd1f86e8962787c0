//! Tracing subscriber setup for binaries and tests embedding the crate

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "formcheck=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`
///
/// Falls back to `default_filter` (or [`DEFAULT_FILTER`]) when the variable is
/// missing or unparsable. Returns `false` if a global subscriber was already
/// installed.
pub fn init(default_filter: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or(DEFAULT_FILTER)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_reports_existing_subscriber() {
        let _ = init(Some("formcheck=debug"));
        assert!(!init(None));
    }
}
