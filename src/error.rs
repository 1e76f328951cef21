// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Audio(String),
    Host(HostError),
}

/// Reasons a notification cannot be attached to a host.
///
/// These are configuration errors: the caller asked for a host that the
/// screen hierarchy cannot provide. Nothing is registered when they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    /// No screen is currently visible to act as the top-most host.
    NoTopMostScreen,

    /// The hierarchy has no root window for status bar contexts.
    NoRootWindow,

    /// The host id is not (or no longer) part of the hierarchy.
    UnknownHost(u64),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoTopMostScreen => write!(f, "no top-most screen is visible"),
            HostError::NoRootWindow => write!(f, "no root window available"),
            HostError::UnknownHost(id) => write!(f, "unknown host #{}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
            Error::Host(e) => write!(f, "Host Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HostError> for Error {
    fn from(err: HostError) -> Self {
        Error::Host(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
