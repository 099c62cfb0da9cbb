//! Slot machine configuration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::symbols::SymbolSet;

/// Maximum number of lines a player may bet on
pub const MAX_LINES: usize = 3;
/// Largest accepted bet per line
pub const MAX_BET: u64 = 100;
/// Smallest accepted bet per line
pub const MIN_BET: u64 = 1;
/// Largest accepted opening deposit. Leaves headroom so winnings can always
/// be credited without overflowing the balance.
pub const MAX_DEPOSIT: u64 = 1_000_000_000_000;
/// Rows drawn per reel
pub const ROWS: usize = 3;
/// Number of reels (columns)
pub const COLS: usize = 3;

/// Grid specification (reels × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: usize,
    /// Number of visible rows per reel
    pub rows: usize,
}

impl GridSpec {
    /// Classic 3×3
    pub fn classic_3x3() -> Self {
        Self {
            reels: COLS,
            rows: ROWS,
        }
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.reels * self.rows
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::classic_3x3()
    }
}

/// Betting limits enforced on every round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLimits {
    /// Lines are `1..=max_lines`
    pub max_lines: usize,
    pub min_bet: u64,
    pub max_bet: u64,
}

impl Default for BetLimits {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            min_bet: MIN_BET,
            max_bet: MAX_BET,
        }
    }
}

/// Complete machine configuration
///
/// Immutable once a [`crate::SlotMachine`] is built from it; the generator and
/// the pay table each receive it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Machine name
    pub name: String,
    /// Grid specification
    pub grid: GridSpec,
    /// Symbol weights and values
    pub symbols: SymbolSet,
    /// Betting limits
    pub limits: BetLimits,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            name: "Classic Slot".into(),
            grid: GridSpec::default(),
            symbols: SymbolSet::standard(),
            limits: BetLimits::default(),
        }
    }
}

impl SlotConfig {
    /// Check every structural constraint the engine relies on
    pub fn validate(&self) -> SlotResult<()> {
        if self.grid.reels == 0 || self.grid.rows == 0 {
            return Err(SlotError::InvalidConfiguration(
                "grid must have at least 1 reel and 1 row".into(),
            ));
        }
        validate_symbols(&self.symbols, self.grid.rows)?;

        let limits = &self.limits;
        if limits.max_lines == 0 || limits.max_lines > self.grid.rows {
            return Err(SlotError::InvalidConfiguration(format!(
                "max_lines must be between 1 and {} (grid rows), got {}",
                self.grid.rows, limits.max_lines
            )));
        }
        if limits.min_bet == 0 || limits.min_bet > limits.max_bet {
            return Err(SlotError::InvalidConfiguration(format!(
                "bet range {}..={} is empty or starts at 0",
                limits.min_bet, limits.max_bet
            )));
        }
        Ok(())
    }

    /// Export config as JSON
    pub fn to_json(&self) -> SlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlotError::Serialization(e.to_string()))
    }

    /// Import config from JSON. The result is validated.
    pub fn from_json(json: &str) -> SlotResult<Self> {
        let config: SlotConfig =
            serde_json::from_str(json).map_err(|e| SlotError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Symbol table constraints for drawing `rows` symbols without replacement
pub(crate) fn validate_symbols(symbols: &SymbolSet, rows: usize) -> SlotResult<()> {
    if symbols.is_empty() {
        return Err(SlotError::InvalidConfiguration(
            "symbol set is empty".into(),
        ));
    }
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for s in &symbols.symbols {
        if !ids.insert(s.id) {
            return Err(SlotError::InvalidConfiguration(format!(
                "duplicate symbol id {}",
                s.id
            )));
        }
        if !names.insert(s.name.as_str()) {
            return Err(SlotError::InvalidConfiguration(format!(
                "duplicate symbol name {}",
                s.name
            )));
        }
    }
    if let Some(s) = symbols.symbols.iter().find(|s| s.weight == 0) {
        return Err(SlotError::InvalidConfiguration(format!(
            "symbol {} has zero weight",
            s.name
        )));
    }
    if let Some(s) = symbols.symbols.iter().find(|s| s.value == 0) {
        return Err(SlotError::InvalidConfiguration(format!(
            "symbol {} has zero value",
            s.name
        )));
    }
    let bag_size = symbols.bag_size();
    if rows > bag_size {
        return Err(SlotError::InvalidConfiguration(format!(
            "cannot draw {rows} rows without replacement from a bag of {bag_size} symbols"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;

    #[test]
    fn test_default_config_is_valid() {
        let config = SlotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.total_positions(), 9);
        assert_eq!(config.limits.max_lines, 3);
        assert_eq!(config.limits.min_bet, 1);
        assert_eq!(config.limits.max_bet, 100);
    }

    #[test]
    fn test_rows_exceeding_bag_rejected() {
        let config = SlotConfig {
            grid: GridSpec { reels: 3, rows: 4 },
            symbols: SymbolSet::new(vec![Symbol::new(1, "X", 3, 1)]),
            limits: BetLimits {
                max_lines: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SlotError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_max_lines_beyond_rows_rejected() {
        let config = SlotConfig {
            limits: BetLimits {
                max_lines: 4,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_bet_range_rejected() {
        let config = SlotConfig {
            limits: BetLimits {
                max_lines: 3,
                min_bet: 10,
                max_bet: 5,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let config = SlotConfig {
            symbols: SymbolSet::new(vec![
                Symbol::new(1, "A", 0, 5),
                Symbol::new(2, "B", 10, 4),
            ]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        // Same id twice would merge both weights into one bag entry
        let mut config = SlotConfig::default();
        config.symbols.symbols[1].id = 1;
        let json = serde_json::to_string(&config).unwrap();
        assert!(matches!(
            SlotConfig::from_json(&json),
            Err(SlotError::InvalidConfiguration(_))
        ));

        let mut config = SlotConfig::default();
        config.symbols.symbols[3].name = "A".into();
        assert!(matches!(
            config.validate(),
            Err(SlotError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_json_import_validates() {
        let mut config = SlotConfig::default();
        config.grid.rows = 0;
        let json = serde_json::to_string(&config).unwrap();
        assert!(SlotConfig::from_json(&json).is_err());

        let json = SlotConfig::default().to_json().unwrap();
        assert_eq!(SlotConfig::from_json(&json).unwrap(), SlotConfig::default());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(matches!(
            SlotConfig::from_json("{ not json"),
            Err(SlotError::Serialization(_))
        ));
    }
}
