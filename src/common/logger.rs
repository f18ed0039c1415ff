use tracing_subscriber::EnvFilter;

use crate::configs::Config;

/// Initialize the global tracing subscriber from the `[logging]` section.
///
/// `RUST_LOG` wins over the configured level/filter string when set.
/// Calling this more than once panics, like any global subscriber install.
pub fn init(config: &Config) {
    let log_level = config
        .logging
        .as_ref()
        .and_then(|l| l.level.as_deref())
        .unwrap_or("info");

    let filters = config
        .logging
        .as_ref()
        .and_then(|l| l.filters.as_deref())
        .unwrap_or("");

    let filter_str = if filters.is_empty() {
        log_level.to_string()
    } else {
        format!("{},{}", log_level, filters)
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
