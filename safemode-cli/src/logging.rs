//! Logging init: stderr, filtered by `RUST_LOG` or the `-v` count.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,safemode=debug",
        _ => "warn,safemode=trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();
}
