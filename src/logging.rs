//! Logger installation for the library and the `brolly` binary.
use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` turns on debug output for
/// this crate, which includes every easing change and teleport; without it
/// only info and above are shown.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        format!("{},brolly={}", LevelFilter::Info, LevelFilter::Debug)
    } else {
        LevelFilter::Info.to_string()
    };

    let env = Env::default().default_filter_or(default_filter);
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // A second call finds a logger already installed; tests rely on that
    // being harmless.
    if builder.try_init().is_err() {
        debug!("Logger already initialised");
    }
}
