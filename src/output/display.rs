//! Display functions for game state

use super::formatters::{feedback_to_emoji, join_letters, lives_bar};
use crate::core::{FeedbackMark, Word};
use crate::game::{GameConfig, GameState, HistoryEntry};
use colored::Colorize;

/// Print one guess as a row of colored tiles plus its emoji form
pub fn print_guess_row(entry: &HistoryEntry) {
    print!("  ");
    for (&letter, mark) in entry.guess.bytes().iter().zip(entry.feedback.iter()) {
        let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
        let tile = match mark {
            FeedbackMark::Correct => tile.black().on_green(),
            FeedbackMark::Present => tile.black().on_yellow(),
            FeedbackMark::Absent => tile.white().on_bright_black(),
        };
        print!("{tile}");
    }
    println!("   {}", feedback_to_emoji(&entry.feedback));
}

/// Print the level and lives line
pub fn print_status(state: &GameState, config: &GameConfig) {
    let number = config.level_number(state.current_level());
    let bar = lives_bar(state.lives_remaining(), config.max_lives);
    let bar = if state.lives_remaining() * 2 >= config.max_lives {
        bar.green()
    } else if state.lives_remaining() > 2 {
        bar.yellow()
    } else {
        bar.red()
    };

    println!(
        "\n{} {}   Lives: {} {}",
        format!("Level {number} of {}", config.level_count())
            .bright_cyan()
            .bold(),
        format!("({} letters)", state.current_level()).cyan(),
        bar,
        format!("{}/{}", state.lives_remaining(), config.max_lives).bright_yellow(),
    );
}

/// Print the intro for a freshly set up level, including the repeat hint
pub fn print_level_intro(state: &GameState, config: &GameConfig) {
    let number = config.level_number(state.current_level());
    println!(
        "\n{}",
        format!(
            "Level {number}: Guess the {}-letter word.",
            state.current_level()
        )
        .bright_cyan()
        .bold()
    );

    if !state.duplicate_letters().is_empty() {
        println!(
            "{}",
            format!(
                "Hint: repeated letters in this word: {}",
                join_letters(state.duplicate_letters())
            )
            .cyan()
        );
    }
}

/// Print the letters ruled out so far this level, if any
pub fn print_absent_letters(state: &GameState) {
    if state.absent_letters().is_empty() {
        return;
    }
    println!(
        "{}",
        format!("Not in the word: {}", join_letters(state.absent_letters())).bright_black()
    );
}

/// Print the whole guess history, grouped by level
pub fn print_transcript(state: &GameState, config: &GameConfig) {
    if state.guess_history().is_empty() {
        println!("{}", "No guesses yet.".bright_black());
        return;
    }

    let mut current_length = 0;
    for entry in state.guess_history() {
        if entry.word_length != current_length {
            current_length = entry.word_length;
            let number = config.level_number(current_length);
            println!(
                "\n{}",
                format!("Level {number} ({current_length} letters)")
                    .bright_cyan()
                    .bold()
            );
        }
        print_guess_row(entry);
    }
}

/// Print the victory banner with session totals
pub fn print_win_banner(state: &GameState, config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "{}",
        format!("🎉 You beat the game! All {} levels cleared.", config.level_count())
            .green()
            .bold()
    );
    println!(
        "   {} guesses used, {} lives to spare",
        state.guess_history().len(),
        state.lives_remaining()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the defeat banner, revealing the target
pub fn print_loss_banner(target: &Word, state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "{}",
        format!(
            "❌ Out of lives! The word was {}. Game Over!",
            target.text().to_uppercase()
        )
        .red()
        .bold()
    );
    println!("   {} guesses played", state.guess_history().len());
    println!("{}", "═".repeat(60).cyan());
}
