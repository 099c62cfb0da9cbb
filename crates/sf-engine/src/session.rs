//! Player session: balance, lifecycle and statistics

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::MAX_DEPOSIT;
use crate::error::{SlotError, SlotResult, ValidationError};

/// Session lifecycle
///
/// ```text
/// AwaitingDeposit ──deposit──> Idle ──quit──> Ended
///                               │  ^
///                               └──┘ settle / aborted round
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    AwaitingDeposit,
    Idle,
    Ended,
}

impl SessionState {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            SessionState::AwaitingDeposit => "awaiting deposit",
            SessionState::Idle => "idle",
            SessionState::Ended => "ended",
        }
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds that produced a grid
    pub total_spins: u64,
    /// Rounds skipped because the bet exceeded the balance
    pub aborted_spins: u64,
    pub total_bet: u64,
    pub total_win: u64,
    pub wins: u64,
    pub losses: u64,
    /// Largest single-spin payout
    pub max_win: u64,
}

impl SessionStats {
    /// Return to player, in percent
    pub fn rtp(&self) -> f64 {
        if self.total_bet > 0 {
            (self.total_win as f64 / self.total_bet as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Share of spins that paid anything, in percent
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Winnings minus stake, saturating at the `i64` range
pub fn net_change(total_bet: u64, winnings: u64) -> i64 {
    let net = i128::from(winnings) - i128::from(total_bet);
    i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX })
}

/// A single player's session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    balance: u64,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingDeposit,
            balance: 0,
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    fn expect_state(&self, expected: SessionState, action: &'static str) -> SlotResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SlotError::InvalidState {
                action,
                state: self.state.label(),
            })
        }
    }

    /// Open the session with a positive deposit
    pub fn deposit(&mut self, amount: u64) -> SlotResult<u64> {
        self.expect_state(SessionState::AwaitingDeposit, "deposit")?;
        if amount == 0 {
            return Err(ValidationError::NotPositive.into());
        }
        if amount > MAX_DEPOSIT {
            return Err(ValidationError::OutOfRange {
                min: 1,
                max: MAX_DEPOSIT,
            }
            .into());
        }
        self.balance = amount;
        self.state = SessionState::Idle;
        info!("Session opened with deposit of {amount}");
        Ok(self.balance)
    }

    /// Whether a stake can be paid from the current balance
    pub fn can_cover(&self, total_bet: u64) -> bool {
        total_bet <= self.balance
    }

    /// Count a round skipped for insufficient funds. Balance is untouched.
    pub fn record_aborted(&mut self) -> SlotResult<()> {
        self.expect_state(SessionState::Idle, "record a round")?;
        self.stats.aborted_spins += 1;
        Ok(())
    }

    /// Apply a resolved spin: `balance - total_bet + winnings`.
    /// Returns the net change. Nothing changes when the result would not fit.
    pub fn settle(&mut self, total_bet: u64, winnings: u64) -> SlotResult<i64> {
        self.expect_state(SessionState::Idle, "settle a spin")?;
        if !self.can_cover(total_bet) {
            return Err(SlotError::InsufficientFunds {
                balance: self.balance,
                total_bet,
            });
        }

        let balance = (self.balance - total_bet).checked_add(winnings).ok_or(
            SlotError::BalanceOverflow {
                balance: self.balance,
                winnings,
            },
        )?;
        self.balance = balance;

        let stats = &mut self.stats;
        stats.total_spins += 1;
        stats.total_bet = stats.total_bet.saturating_add(total_bet);
        stats.total_win = stats.total_win.saturating_add(winnings);
        if winnings > 0 {
            stats.wins += 1;
        } else {
            stats.losses += 1;
        }
        stats.max_win = stats.max_win.max(winnings);

        Ok(net_change(total_bet, winnings))
    }

    /// End the session, returning the final balance
    pub fn quit(&mut self) -> SlotResult<u64> {
        self.expect_state(SessionState::Idle, "quit")?;
        self.state = SessionState::Ended;
        info!(
            "Session ended with balance {} after {} spins",
            self.balance, self.stats.total_spins
        );
        Ok(self.balance)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
