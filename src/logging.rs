// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! Logging setup for command-line programs.

use slog::{Drain, Level, LevelFilter, Logger};


/// Map a count of `-v` flags minus a count of `-q` flags to a log level.
/// Zero gives `Info`.
pub fn verbosity_level(verbosity: i32) -> Level {
    match verbosity {
        v if v <= -2 => Level::Error,
        -1 => Level::Warning,
        0 => Level::Info,
        1 => Level::Debug,
        _ => Level::Trace,
    }
}


/// Create a `slog` logger that writes to standard error, dropping messages
/// less severe than *level*.
pub fn default_log(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::Block)
        .build().fuse();
    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}
