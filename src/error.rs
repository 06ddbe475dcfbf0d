//! Error types for race configuration and execution.

use std::fmt;

use crate::types::ErrorCode;

/// Errors that can occur while building an [`Engine`](crate::engine::Engine)
/// from a board and roster. Fatal at setup; no race begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The board's `length` was not a positive integer.
    InvalidBoardLength(i32),
    /// The roster was empty.
    EmptyRoster,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardLength(len) => {
                write!(f, "board length must be positive, got {len}")
            }
            ConfigError::EmptyRoster => write!(f, "roster must contain at least one racer"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced once a race is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Setup failed before any turn was run.
    Config(ConfigError),
    /// The resolver or turn driver hit a bound from §4.3 and aborted the race.
    Loop(ErrorCode),
    /// An ability or modifier violated its contract (e.g. mutated `finished`
    /// directly, or a movement primitive was asked to move an unknown racer).
    ContractViolation(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "configuration error: {e}"),
            GameError::Loop(code) => write!(f, "{code}"),
            GameError::ContractViolation(msg) => write!(f, "contract violation: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_error_code_verbatim() {
        let e = GameError::Loop(ErrorCode::CriticalLoopDetected);
        assert_eq!(e.to_string(), "CRITICAL_LOOP_DETECTED");
    }
}
