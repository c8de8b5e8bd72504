//! Game core: configuration, state, level progression and turn orchestration
//!
//! The single `GameState` value lives inside the `ProgressMachine`; everything
//! else reads it through accessors or mutates it through machine operations.

pub mod config;
pub mod controller;
pub mod progress;
pub mod state;
pub mod traits;

pub use config::{ConfigError, GameConfig};
pub use controller::{GameController, Refusal, StartReport, TurnOutcome, TurnReport};
pub use progress::{GuessError, Outcome, Phase, ProgressMachine};
pub use state::{GameState, HistoryEntry};
pub use traits::{Validator, ValidatorError, WordSource, WordSourceError};
