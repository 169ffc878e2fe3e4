//! Logging setup.
//!
//! Console logging on stderr, controlled via the `RUST_LOG` environment
//! variable. The default level is `warn` so the history table is the only
//! thing a normal run prints; `RUST_LOG=debug` traces store mutations and
//! git invocations.

use log::LevelFilter;
use std::io::Write;

pub fn init() {
    let default_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(default_level)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok(); // Ignore error if logger is already initialized
}
