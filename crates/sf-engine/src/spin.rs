//! Reel grid and spin generation

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GridSpec, validate_symbols};
use crate::error::{SlotError, SlotResult};
use crate::symbols::SymbolSet;

/// A spun grid, stored reel by reel (`columns[reel][row]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: Vec<Vec<u32>>,
}

impl Grid {
    /// Build from reels. Every reel must have the same height.
    pub fn from_columns(columns: Vec<Vec<u32>>) -> SlotResult<Self> {
        let rows = columns.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || columns.iter().any(|c| c.len() != rows) {
            return Err(SlotError::InvalidConfiguration(
                "grid reels must be non-empty and of equal height".into(),
            ));
        }
        Ok(Self { columns })
    }

    /// Build from rows as they appear on screen, top to bottom
    pub fn from_rows(rows: &[Vec<u32>]) -> SlotResult<Self> {
        let reels = rows.first().map(Vec::len).unwrap_or(0);
        if reels == 0 || rows.iter().any(|r| r.len() != reels) {
            return Err(SlotError::InvalidConfiguration(
                "grid rows must be non-empty and of equal width".into(),
            ));
        }
        let columns = (0..reels)
            .map(|reel| rows.iter().map(|row| row[reel]).collect())
            .collect();
        Ok(Self { columns })
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Vec<u32>] {
        &self.columns
    }

    pub fn symbol_at(&self, reel: usize, row: usize) -> Option<u32> {
        self.columns.get(reel).and_then(|c| c.get(row)).copied()
    }

    /// Symbols on one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = u32> + '_ {
        self.columns.iter().filter_map(move |c| c.get(row).copied())
    }
}

/// Draw a grid: each reel samples `rows` symbols without replacement from its
/// own fresh bag.
pub fn generate_grid<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    reels: usize,
    symbols: &SymbolSet,
) -> SlotResult<Grid> {
    if reels == 0 || rows == 0 {
        return Err(SlotError::InvalidConfiguration(
            "grid must have at least 1 reel and 1 row".into(),
        ));
    }
    validate_symbols(symbols, rows)?;
    Ok(draw(rng, rows, reels, &symbols.bag()))
}

fn draw<R: Rng + ?Sized>(rng: &mut R, rows: usize, reels: usize, full_bag: &[u32]) -> Grid {
    let mut columns = Vec::with_capacity(reels);
    for _ in 0..reels {
        let mut bag = full_bag.to_vec();
        let mut column = Vec::with_capacity(rows);
        for _ in 0..rows {
            // Order inside the bag is irrelevant, so swap_remove keeps the draw uniform
            let idx = rng.random_range(0..bag.len());
            column.push(bag.swap_remove(idx));
        }
        columns.push(column);
    }
    Grid { columns }
}

/// Spin generator with an injected random source
pub struct SpinGenerator<R = ChaCha8Rng> {
    grid: GridSpec,
    symbols: SymbolSet,
    /// Full bag, cloned per reel on every spin
    bag: Vec<u32>,
    rng: R,
}

impl SpinGenerator<ChaCha8Rng> {
    /// Seeded generator for reproducible spins
    pub fn seeded(grid: GridSpec, symbols: SymbolSet, seed: u64) -> SlotResult<Self> {
        Self::with_rng(grid, symbols, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_os_rng(grid: GridSpec, symbols: SymbolSet) -> SlotResult<Self> {
        Self::with_rng(grid, symbols, ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> SpinGenerator<R> {
    /// Create with a caller-supplied random source. Fails fast when the
    /// layout cannot be sampled without replacement.
    pub fn with_rng(grid: GridSpec, symbols: SymbolSet, rng: R) -> SlotResult<Self> {
        if grid.reels == 0 || grid.rows == 0 {
            return Err(SlotError::InvalidConfiguration(
                "grid must have at least 1 reel and 1 row".into(),
            ));
        }
        validate_symbols(&symbols, grid.rows)?;
        let bag = symbols.bag();
        Ok(Self {
            grid,
            symbols,
            bag,
            rng,
        })
    }

    /// Spin once
    pub fn generate(&mut self) -> Grid {
        draw(&mut self.rng, self.grid.rows, self.grid.reels, &self.bag)
    }

    pub fn grid_spec(&self) -> GridSpec {
        self.grid
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }
}
