//! Logging setup
//!
//! The library logs through the `log` facade. The binary installs an
//! `env_logger` writing to stderr so stdout stays clean for rendered output.
//! `-v` flags pick the level; `RUST_LOG` overrides it.

use std::io::Write;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Level for a number of `-v` flags
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger writing `level: message` lines to stderr
pub fn builder(verbosity: u8) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}: {}", level_label(record.level()), record.args()));
    builder
}

/// Install the stderr logger
///
/// Calling it again only changes the level.
pub fn init(verbosity: u8) {
    if builder(verbosity).try_init().is_err() {
        log::set_max_level(level_for(verbosity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
