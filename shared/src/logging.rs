use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `ECOMET_LOG` wins over `RUST_LOG`; both fall back to `default_level`.
///
/// Output goes to stderr so it never interleaves with transcript text on stdout.
/// Calling this twice is harmless; the second install is ignored.
pub fn init(default_level: &str) {
    let filter = std::env::var("ECOMET_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
