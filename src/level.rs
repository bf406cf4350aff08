use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::LevelParseError;

/// Verbosity threshold for a filter instance.
///
/// Levels form a closed, totally ordered set:
/// `None < Error < Warning < Info < Verbose < Debug < All`.
/// A message is emitted when its level is at or below the configured
/// threshold, so `None` silences everything and `All` lets everything
/// through.
///
/// `Debug` and above will log raw credential values and must be used with
/// caution.
///
/// The textual configuration form is the variant name (`"Warning"`,
/// `"Debug"`, …); both [`FromStr`] and serde go through the same mapping,
/// and an unrecognized name is rejected at configuration-load time.
///
/// # Examples
///
/// ```
/// use auth_relay::LogLevel;
///
/// assert!(LogLevel::Error < LogLevel::Debug);
/// assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
/// assert!("loud".parse::<LogLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No output at all.
    None,
    /// Unrecoverable processing failures.
    Error,
    /// Recoverable anomalies, e.g. a response that could not be produced.
    Warning,
    /// Notable per-request events such as credential-source mismatches.
    Info,
    /// Request-flow narration.
    Verbose,
    /// Carrier-level detail. Logs raw credential values.
    Debug,
    /// Everything. Logs raw credential values.
    All,
}

impl LogLevel {
    /// Returns the textual configuration form of this level.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "None",
            LogLevel::Error => "Error",
            LogLevel::Warning => "Warning",
            LogLevel::Info => "Info",
            LogLevel::Verbose => "Verbose",
            LogLevel::Debug => "Debug",
            LogLevel::All => "All",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(LogLevel::None),
            "Error" => Ok(LogLevel::Error),
            "Warning" => Ok(LogLevel::Warning),
            "Info" => Ok(LogLevel::Info),
            "Verbose" => Ok(LogLevel::Verbose),
            "Debug" => Ok(LogLevel::Debug),
            "All" => Ok(LogLevel::All),
            other => Err(LevelParseError::new(other)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
