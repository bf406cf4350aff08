use std::fmt;

use crate::level::LogLevel;

/// An instance-held logging capability gated by a [`LogLevel`] threshold.
///
/// `RelayLog` replaces process-wide log state with an explicit value owned by
/// each filter instance: the instance name travels with every message, and
/// the verbosity threshold is testable per instance. Emission is
/// fire-and-forget through `tracing`; failures never propagate into request
/// processing.
///
/// Level mapping onto `tracing`: `Error` → `error!`, `Warning` → `warn!`,
/// `Info` → `info!`, `Verbose` → `debug!`, `Debug` and `All` → `trace!`.
#[derive(Debug, Clone)]
pub struct RelayLog {
    name: String,
    threshold: LogLevel,
}

impl RelayLog {
    /// Creates a logging capability for the named instance.
    pub fn new(name: impl Into<String>, threshold: LogLevel) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }

    /// Returns the instance name used for log attribution.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when a message at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.threshold
    }

    /// Emits a message at the given level if the threshold allows it.
    ///
    /// Use with `format_args!`:
    /// ```
    /// # use auth_relay::{LogLevel, RelayLog};
    /// let log = RelayLog::new("edge", LogLevel::Info);
    /// log.log(LogLevel::Info, format_args!("initializing"));
    /// ```
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        match level {
            LogLevel::None => {}
            LogLevel::Error => tracing::error!(instance = %self.name, "{}", args),
            LogLevel::Warning => tracing::warn!(instance = %self.name, "{}", args),
            LogLevel::Info => tracing::info!(instance = %self.name, "{}", args),
            LogLevel::Verbose => tracing::debug!(instance = %self.name, "{}", args),
            LogLevel::Debug | LogLevel::All => {
                tracing::trace!(instance = %self.name, "{}", args)
            }
        }
    }
}
