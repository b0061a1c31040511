// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use std::io::Write;

/// Environment variable holding the maximum log level.
pub const LEVEL_VAR: &str = "SHOWPORT_LOG";

pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Stdout carries the report, so records go to stderr.
        let _ = writeln!(
            std::io::stderr().lock(),
            "{} {} > {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

pub static LOGGER: Logger = Logger;

/// Level named by `value`, falling back to `Warn` when unset or unrecognised.
#[must_use]
pub fn level_from(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Warn)
}

pub fn init() -> Result<(), log::SetLoggerError> {
    let level = level_from(std::env::var(LEVEL_VAR).ok().as_deref());
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
