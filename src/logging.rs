use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "pasture",
    "pasture_calendar",
    "pasture_schema",
    "pasture_harvest",
    "pasture_session",
];

/// Builds the filter directive for a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing for the workspace crates.
///
/// `RUST_LOG` overrides `verbosity` if set. Does nothing if a global
/// subscriber is already installed.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        let d = default_directives(1);
        assert_eq!(d.split(',').count(), CRATE_TARGETS.len());
        assert!(d.contains("pasture_session=info"));
        assert!(default_directives(7).contains("pasture_schema=trace"));
    }
}
