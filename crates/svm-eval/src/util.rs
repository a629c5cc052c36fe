//! Shared internal utilities for svm-eval-rs.

use log::LevelFilter;

/// Install the stderr logger used by the command-line tools.
///
/// Diagnostics default to `info`; `RUST_LOG` overrides the filter and `quiet`
/// turns everything off. Calling this more than once is harmless.
pub fn init_logging(quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(LevelFilter::Off);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
        log::info!("still alive");
    }
}
