use std::io;
use tracing_subscriber::{fmt, fmt::MakeWriter, EnvFilter};

const DEFAULT_FILTER: &str = "info,service=info";

/// Stream the subscriber writes to.
/// Long-running processes log to stdout; a CLI whose stdout carries its
/// results logs to stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

/// Initialize a compact human-readable subscriber writing to stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,service=info`
pub fn init_logging_default() {
    init_logging("compact", LogTarget::Stdout);
}

/// Initialize a JSON subscriber writing to stdout.
/// Store-level persistence events are emitted at debug; raise with
/// `RUST_LOG=info,service::storage=debug`.
pub fn init_logging_json() {
    init_logging("json", LogTarget::Stdout);
}

/// Pick the subscriber by the configured format name and output stream.
/// Unknown names fall back to the compact layout.
pub fn init_logging(format: &str, target: LogTarget) {
    match target {
        LogTarget::Stdout => init_with_writer(format, io::stdout),
        LogTarget::Stderr => init_with_writer(format, io::stderr),
    }
}

fn init_with_writer<W>(format: &str, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = match format {
        "json" => fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .with_writer(writer)
            .try_init(),
        _ => fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .with_writer(writer)
            .try_init(),
    };
}
