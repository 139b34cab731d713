//! `env_logger` setup shared by both subcommands.

use std::io::Write;

use env_logger::{Builder, Env};

/// Default filter: `info` when verbose, `warn` otherwise. `RUST_LOG` wins over both.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Install the global logger; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
