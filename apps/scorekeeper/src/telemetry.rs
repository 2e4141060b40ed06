use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter variable; falls back to `RUST_LOG`, then `warn`.
pub const LOG_VAR: &str = "SCOREKEEPER_LOG";

pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
