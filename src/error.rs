// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

/// Bad command line. Reported with the usage text; the process still exits successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Argument count was zero or not a multiple of three.
    GroupCount(usize),
    /// Third argument of a group did not start with a mode letter.
    InvalidMode(String),
}

impl core::fmt::Display for UsageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GroupCount(_) => f.write_str("Not enough arguments - Base Extended Mode"),
            Self::InvalidMode(_) => f.write_str("Invalid Mode - s|S|e|E|n|N"),
        }
    }
}

impl std::error::Error for UsageError {}

#[derive(Debug)]
pub enum Error {
    /// `iopl` refused the requested level.
    Privilege { level: u8, source: std::io::Error },
    /// Writing the report to stdout failed.
    Output(std::io::Error),
    Logger(log::SetLoggerError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Privilege { level, source } => write!(f, "iopl({level}): {source}"),
            Self::Output(source) => write!(f, "stdout: {source}"),
            Self::Logger(source) => write!(f, "logger: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Privilege { source, .. } | Self::Output(source) => Some(source),
            Self::Logger(source) => Some(source),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(value: log::SetLoggerError) -> Self {
        Self::Logger(value)
    }
}
