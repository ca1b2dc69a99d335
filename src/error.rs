//! Error types for shape-evo
//!
//! Every command failure is non-fatal: the command returns early with all
//! population state untouched, and the host forwards the message to its
//! user-facing report surface.

use thiserror::Error;

/// Error type for engine commands
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No specimens to operate on
    #[error("No specimens to operate on")]
    EmptyInput,

    /// Pairing requires at least two specimens
    #[error("Mixing needs at least two specimens, got {got}")]
    InsufficientSelection {
        /// Number of specimens that were actually selected
        got: usize,
    },

    /// The requested child count resolves to zero
    #[error("Requested children per couple resolves to zero")]
    ZeroOffspring,
}

/// How the host should present a command failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing to do; not a user mistake
    Warning,
    /// The user asked for something the engine cannot honor
    Error,
}

impl CommandError {
    /// Severity for the host's message surface
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyInput => Severity::Warning,
            Self::InsufficientSelection { .. } | Self::ZeroOffspring => Severity::Error,
        }
    }
}

/// Result type alias for engine commands
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display() {
        assert_eq!(
            CommandError::EmptyInput.to_string(),
            "No specimens to operate on"
        );
        assert_eq!(
            CommandError::InsufficientSelection { got: 1 }.to_string(),
            "Mixing needs at least two specimens, got 1"
        );
        assert_eq!(
            CommandError::ZeroOffspring.to_string(),
            "Requested children per couple resolves to zero"
        );
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(CommandError::EmptyInput.severity(), Severity::Warning);
        assert_eq!(
            CommandError::InsufficientSelection { got: 1 }.severity(),
            Severity::Error
        );
        assert_eq!(CommandError::ZeroOffspring.severity(), Severity::Error);
    }
}
