//! Error types for the slot engine

use thiserror::Error;

/// Input rejected by one of the prompt parsers.
///
/// Always recoverable: the shell prints a corrective message and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No input given")]
    Empty,

    #[error("Please enter a number")]
    NotANumber,

    #[error("Amount must be greater than 0")]
    NotPositive,

    #[error("Value must be between {min} and {max}")]
    OutOfRange { min: u64, max: u64 },
}

/// Core error type
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid session state: cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    #[error("Insufficient funds: bet of {total_bet} exceeds balance of {balance}")]
    InsufficientFunds { balance: u64, total_bet: u64 },

    #[error("Balance overflow: cannot credit {winnings} to balance of {balance}")]
    BalanceOverflow { balance: u64, winnings: u64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
