//! # sf-engine — Slot Engine for SlotForge
//!
//! A classic line slot: the player deposits, bets on up to three horizontal
//! lines, each reel is drawn from its own weighted bag without replacement and
//! a line pays when every reel shows the same symbol on it.
//!
//! The crate performs no I/O. Prompting and printing live in the `slotforge`
//! binary; everything here is a pure function of the configuration, the
//! injected random source and the player's input.
//!
//! ## Architecture
//!
//! ```text
//! SlotMachine
//!     │
//!     ├── SlotConfig (grid, symbol weights/values, bet limits)
//!     ├── SpinGenerator (per-reel bags, seedable RNG)
//!     ├── PayTable (line evaluation)
//!     └── Session (balance, lifecycle, stats)
//!           │
//!           v
//!     RoundOutcome → render_grid / format_lines
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod paytable;
pub mod render;
pub mod session;
pub mod spin;
pub mod symbols;
pub mod validation;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use paytable::*;
pub use render::*;
pub use session::*;
pub use spin::*;
pub use symbols::*;
pub use validation::*;
