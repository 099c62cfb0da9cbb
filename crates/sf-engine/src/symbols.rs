//! Symbol definitions and reel bags

use serde::{Deserialize, Serialize};

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Display name (e.g., "A", "B")
    pub name: String,
    /// Relative frequency: copies of this symbol placed in each reel bag
    pub weight: u32,
    /// Payout multiplier applied to the per-line bet
    pub value: u64,
}

impl Symbol {
    /// Create a symbol
    pub fn new(id: u32, name: impl Into<String>, weight: u32, value: u64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            value,
        }
    }
}

/// The set of symbols a machine draws from and pays on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Create a set from explicit symbols
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Classic four-symbol table. Rarer symbols pay more.
    pub fn standard() -> Self {
        Self::new(vec![
            Symbol::new(1, "A", 2, 5),
            Symbol::new(2, "B", 4, 4),
            Symbol::new(3, "C", 6, 3),
            Symbol::new(4, "D", 8, 2),
        ])
    }

    /// Get symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Get symbol by display name
    pub fn by_name(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Display name for an ID, `?` when unknown
    pub fn name_of(&self, id: u32) -> &str {
        self.get(id).map(|s| s.name.as_str()).unwrap_or("?")
    }

    /// Sum of all weights, i.e. the size of one reel bag
    pub fn bag_size(&self) -> usize {
        self.symbols.iter().map(|s| s.weight as usize).sum()
    }

    /// Build one reel bag: `weight` copies of every symbol ID
    pub fn bag(&self) -> Vec<u32> {
        let mut bag = Vec::with_capacity(self.bag_size());
        for symbol in &self.symbols {
            bag.extend(std::iter::repeat_n(symbol.id, symbol.weight as usize));
        }
        bag
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::standard()
    }
}
