//! Terminal output formatting
//!
//! Display utilities for game state and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_absent_letters, print_guess_row, print_level_intro, print_loss_banner, print_status,
    print_transcript, print_win_banner,
};
