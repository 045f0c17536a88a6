use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RELGATE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr subscriber. `--log-level` wins over `RELGATE_LOG`.
pub(crate) fn init(level: Option<&str>) {
    let directive = resolve_directive(level, std::env::var(LOG_ENV).ok().as_deref());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_directive(flag: Option<&str>, env_value: Option<&str>) -> String {
    [flag, env_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_and_blank_values_fall_through() {
        assert_eq!(resolve_directive(Some("debug"), Some("info")), "debug");
        assert_eq!(resolve_directive(Some("  "), Some("info")), "info");
        assert_eq!(resolve_directive(None, None), "warn");
    }
}
