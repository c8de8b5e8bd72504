//! Saved-session transcript

use crate::game::GameConfig;
use crate::output::{print_absent_letters, print_status, print_transcript};
use crate::persist::{KvStore, SessionStore};
use colored::Colorize;

/// Print the saved session's guess history without touching it
pub fn run_transcript<K: KvStore>(config: &GameConfig, session: &SessionStore<K>) {
    let Some(state) = session.load(config) else {
        println!("No saved session.");
        return;
    };

    print_status(&state, config);
    print_transcript(&state, config);
    print_absent_letters(&state);

    if state.is_over() {
        let summary = if state.is_won() {
            "Session finished: won.".green()
        } else {
            "Session finished: lost.".red()
        };
        println!("\n{summary}");
    }
}
