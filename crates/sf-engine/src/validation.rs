//! Prompt input parsing
//!
//! Every parser is pure: the shell calls it in a loop until it returns `Ok`.
//! Only plain decimal digits are accepted, so `-5` and `+5` are not numbers.

use crate::config::{BetLimits, MAX_DEPOSIT};
use crate::error::ValidationError;

fn parse_digits(raw: &str) -> Result<Option<u64>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber);
    }
    // All digits but too large for u64
    Ok(raw.parse::<u64>().ok())
}

/// Parse an integer in `min..=max`
pub fn parse_bounded(raw: &str, min: u64, max: u64) -> Result<u64, ValidationError> {
    match parse_digits(raw)? {
        Some(value) if (min..=max).contains(&value) => Ok(value),
        _ => Err(ValidationError::OutOfRange { min, max }),
    }
}

/// Parse an initial deposit: a positive integer up to [`MAX_DEPOSIT`]
pub fn parse_deposit(raw: &str) -> Result<u64, ValidationError> {
    match parse_digits(raw)? {
        Some(0) => Err(ValidationError::NotPositive),
        Some(amount) if amount <= MAX_DEPOSIT => Ok(amount),
        _ => Err(ValidationError::OutOfRange {
            min: 1,
            max: MAX_DEPOSIT,
        }),
    }
}

/// Parse the number of lines to bet on
pub fn parse_lines(raw: &str, limits: &BetLimits) -> Result<usize, ValidationError> {
    parse_bounded(raw, 1, limits.max_lines as u64).map(|lines| lines as usize)
}

/// Parse the bet per line
pub fn parse_bet(raw: &str, limits: &BetLimits) -> Result<u64, ValidationError> {
    parse_bounded(raw, limits.min_bet, limits.max_bet)
}

/// Whether the round prompt answer ends the session
pub fn is_quit(raw: &str, quit_token: &str) -> bool {
    raw.trim() == quit_token
}

/// A validated bet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet {
    lines: usize,
    per_line: u64,
}

impl Bet {
    /// Build a bet, checking both parts against the limits
    pub fn new(lines: usize, per_line: u64, limits: &BetLimits) -> Result<Self, ValidationError> {
        if lines == 0 || lines > limits.max_lines {
            return Err(ValidationError::OutOfRange {
                min: 1,
                max: limits.max_lines as u64,
            });
        }
        if !(limits.min_bet..=limits.max_bet).contains(&per_line) {
            return Err(ValidationError::OutOfRange {
                min: limits.min_bet,
                max: limits.max_bet,
            });
        }
        Ok(Self { lines, per_line })
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn per_line(&self) -> u64 {
        self.per_line
    }

    /// `per_line × lines`
    pub fn total(&self) -> u64 {
        self.per_line.saturating_mul(self.lines as u64)
    }
}
