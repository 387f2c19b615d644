//! Log severities understood by an interpreter's logging capability.

use std::fmt;

/// Severity of a record emitted through [`Interpreter::log`](crate::Interpreter::log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Something went wrong with the message.
    Error,
    /// Worth attention, not a failure.
    Warning,
    /// Informational, e.g. a dump of an unroutable payload.
    Info,
    /// Verbose diagnostics.
    Debug,
}

impl Severity {
    /// Lower-case name of the severity.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
