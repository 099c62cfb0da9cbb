//! Paytable and win calculation

use serde::{Deserialize, Serialize};

use crate::spin::Grid;
use crate::symbols::SymbolSet;

/// A win on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    /// Line number as shown to the player (1 = top row)
    pub line: usize,
    /// Winning symbol ID
    pub symbol_id: u32,
    /// Win amount (symbol value × bet per line)
    pub win_amount: u64,
}

/// Result of evaluating a grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Line wins, ascending by line
    pub line_wins: Vec<LineWin>,
    /// Total win amount
    pub total_win: u64,
}

impl Evaluation {
    /// Check if this is a winning spin
    pub fn is_win(&self) -> bool {
        self.total_win > 0
    }

    /// Winning line numbers, ascending
    pub fn winning_lines(&self) -> Vec<usize> {
        self.line_wins.iter().map(|w| w.line).collect()
    }
}

/// Line payouts for a symbol set
#[derive(Debug, Clone)]
pub struct PayTable {
    symbols: SymbolSet,
}

impl PayTable {
    pub fn new(symbols: SymbolSet) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Evaluate the first `lines` rows of `grid`.
    ///
    /// A row wins when every reel shows the same symbol on it. Rows beyond
    /// `lines` are never looked at; `lines` is capped at the grid height.
    pub fn evaluate(&self, grid: &Grid, lines: usize, bet_per_line: u64) -> Evaluation {
        let mut line_wins = Vec::new();

        for row in 0..lines.min(grid.rows()) {
            if let Some(win) = self.evaluate_line(grid, row, bet_per_line) {
                line_wins.push(win);
            }
        }

        let total_win = line_wins
            .iter()
            .fold(0u64, |acc, w| acc.saturating_add(w.win_amount));

        Evaluation {
            line_wins,
            total_win,
        }
    }

    fn evaluate_line(&self, grid: &Grid, row: usize, bet_per_line: u64) -> Option<LineWin> {
        let mut symbols = grid.row(row);
        let first = symbols.next()?;
        if !symbols.all(|s| s == first) {
            return None;
        }

        let symbol = self.symbols.get(first)?;
        Some(LineWin {
            line: row + 1,
            symbol_id: first,
            win_amount: symbol.value.saturating_mul(bet_per_line),
        })
    }
}

/// Evaluate with an explicit symbol table: `(total winnings, winning lines)`
pub fn evaluate(
    grid: &Grid,
    lines: usize,
    bet_per_line: u64,
    symbols: &SymbolSet,
) -> (u64, Vec<usize>) {
    let eval = PayTable::new(symbols.clone()).evaluate(grid, lines, bet_per_line);
    let winning_lines = eval.winning_lines();
    (eval.total_win, winning_lines)
}
