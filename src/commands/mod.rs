//! Command implementations

pub mod play;
pub mod reset;
pub mod transcript;

pub use play::run_play;
pub use reset::run_reset;
pub use transcript::run_transcript;
