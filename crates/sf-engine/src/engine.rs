//! Slot machine — composes generator, paytable and session

use log::{debug, warn};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::SlotConfig;
use crate::error::{SlotError, SlotResult, ValidationError};
use crate::paytable::{Evaluation, PayTable};
use crate::session::{Session, SessionState, SessionStats};
use crate::spin::{Grid, SpinGenerator};
use crate::validation::Bet;

/// A spin that was paid for and evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Round counter, starting at 1
    pub round: u64,
    pub grid: Grid,
    pub lines: usize,
    pub bet_per_line: u64,
    pub total_bet: u64,
    pub evaluation: Evaluation,
    pub balance_before: u64,
    pub balance_after: u64,
    /// `winnings - total_bet`
    pub net_change: i64,
}

impl SpinOutcome {
    pub fn winnings(&self) -> u64 {
        self.evaluation.total_win
    }

    pub fn winning_lines(&self) -> Vec<usize> {
        self.evaluation.winning_lines()
    }
}

/// Outcome of one betting round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Stake exceeded the balance. No grid was drawn and nothing changed.
    InsufficientFunds { balance: u64, total_bet: u64 },
    Resolved(SpinOutcome),
}

impl RoundOutcome {
    /// Balance change caused by the round
    pub fn net_change(&self) -> i64 {
        match self {
            RoundOutcome::InsufficientFunds { .. } => 0,
            RoundOutcome::Resolved(spin) => spin.net_change,
        }
    }

    pub fn spin(&self) -> Option<&SpinOutcome> {
        match self {
            RoundOutcome::Resolved(spin) => Some(spin),
            RoundOutcome::InsufficientFunds { .. } => None,
        }
    }
}

/// Slot machine
///
/// Owns the validated configuration, the spin generator (with its random
/// source), the paytable and the player's session.
pub struct SlotMachine<R = ChaCha8Rng> {
    config: SlotConfig,
    generator: SpinGenerator<R>,
    paytable: PayTable,
    session: Session,
    round: u64,
}

impl SlotMachine<ChaCha8Rng> {
    /// Machine with an OS-seeded random source
    pub fn new(config: SlotConfig) -> SlotResult<Self> {
        Self::with_rng(config, ChaCha8Rng::from_os_rng())
    }

    /// Machine with a fixed seed for reproducible play
    pub fn seeded(config: SlotConfig, seed: u64) -> SlotResult<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SlotMachine<R> {
    /// Create with a caller-supplied random source
    pub fn with_rng(config: SlotConfig, rng: R) -> SlotResult<Self> {
        config.validate()?;
        let generator = SpinGenerator::with_rng(config.grid, config.symbols.clone(), rng)?;
        let paytable = PayTable::new(config.symbols.clone());

        Ok(Self {
            config,
            generator,
            paytable,
            session: Session::new(),
            round: 0,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn paytable(&self) -> &PayTable {
        &self.paytable
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn balance(&self) -> u64 {
        self.session.balance()
    }

    pub fn stats(&self) -> &SessionStats {
        self.session.stats()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SESSION FLOW
    // ═══════════════════════════════════════════════════════════════════════════

    /// Open the session
    pub fn deposit(&mut self, amount: u64) -> SlotResult<u64> {
        self.session.deposit(amount)
    }

    /// Build a bet against this machine's limits
    pub fn bet(&self, lines: usize, per_line: u64) -> Result<Bet, ValidationError> {
        Bet::new(lines, per_line, &self.config.limits)
    }

    /// Play one round. The funds check happens before any grid is drawn.
    pub fn play_round(&mut self, bet: Bet) -> SlotResult<RoundOutcome> {
        if self.session.state() != SessionState::Idle {
            return Err(SlotError::InvalidState {
                action: "play a round",
                state: self.session.state().label(),
            });
        }
        // Bets may come from another machine's limits
        let bet = self.bet(bet.lines(), bet.per_line())?;
        let total_bet = bet.total();
        let balance = self.session.balance();

        if !self.session.can_cover(total_bet) {
            warn!("Spin aborted: bet {total_bet} exceeds balance {balance}");
            self.session.record_aborted()?;
            return Ok(RoundOutcome::InsufficientFunds { balance, total_bet });
        }

        self.round += 1;
        let grid = self.generator.generate();
        let evaluation = self.paytable.evaluate(&grid, bet.lines(), bet.per_line());
        let net_change = self.session.settle(total_bet, evaluation.total_win)?;

        debug!(
            "Round {}: bet {} x {} lines, won {} on lines {:?}, balance {} -> {}",
            self.round,
            bet.per_line(),
            bet.lines(),
            evaluation.total_win,
            evaluation.winning_lines(),
            balance,
            self.session.balance()
        );

        Ok(RoundOutcome::Resolved(SpinOutcome {
            round: self.round,
            grid,
            lines: bet.lines(),
            bet_per_line: bet.per_line(),
            total_bet,
            evaluation,
            balance_before: balance,
            balance_after: self.session.balance(),
            net_change,
        }))
    }

    /// End the session, returning the final balance
    pub fn quit(&mut self) -> SlotResult<u64> {
        self.session.quit()
    }
}
