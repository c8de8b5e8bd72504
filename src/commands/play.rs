//! Interactive game mode
//!
//! The full climb at a terminal prompt: resume or start a session, read
//! guesses, render feedback and handle the end of the game.

use crate::game::{
    GameController, Refusal, StartReport, TurnOutcome, Validator, WordSource,
};
use crate::output::{
    print_absent_letters, print_guess_row, print_level_intro, print_loss_banner, print_status,
    print_transcript, print_win_banner,
};
use crate::persist::KvStore;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// word can be found to start a level with.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<S, V, K>(mut controller: GameController<'_, S, V, K>) -> Result<(), String>
where
    S: WordSource,
    V: Validator,
    K: KvStore,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Word Climb - Progressive Word Guessing            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = controller.config().clone();
    println!(
        "Climb from {}-letter to {}-letter words on one pool of {} lives.",
        config.start_level, config.end_level, config.max_lives
    );
    println!("Clear a level by guessing its word; every guess costs a life.\n");
    println!("  🟩 letter in the right spot");
    println!("  🟨 letter in the word, wrong spot");
    println!("  ⬜ letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' to start over\n");

    match controller
        .start()
        .map_err(|e| format!("Could not start the game: {e}"))?
    {
        StartReport::Fresh { .. } => {
            print_status(controller.state(), controller.config());
            print_level_intro(controller.state(), controller.config());
        }
        StartReport::Resumed { level } => {
            let number = controller.config().level_number(level);
            println!("{}", format!("Game resumed at Level {number}.").bright_cyan());
            print_transcript(controller.state(), controller.config());
            print_status(controller.state(), controller.config());
            print_level_intro(controller.state(), controller.config());
        }
        StartReport::SessionOver { won } => {
            if won {
                println!("{}", "Game previously won!".green().bold());
            } else if let Some(target) = controller.state().target_word() {
                println!(
                    "{}",
                    format!(
                        "Game previously lost. The word was {}.",
                        target.text().to_uppercase()
                    )
                    .red()
                );
            } else {
                println!("{}", "Game previously lost.".red());
            }
            print_transcript(controller.state(), controller.config());

            if !offer_new_game(&mut controller)? {
                return Ok(());
            }
        }
    }

    loop {
        print_absent_letters(controller.state());

        let Some(input) = read_input("Your guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                start_new(&mut controller)?;
                continue;
            }
            _ => {}
        }

        let report = match controller.submit_guess(&input) {
            Ok(report) => report,
            Err(Refusal::Empty) => continue,
            Err(refusal) => {
                println!("{}", refusal.to_string().yellow());
                continue;
            }
        };

        print_guess_row(&report.entry);

        match report.outcome {
            TurnOutcome::Continue => {
                print_status(controller.state(), controller.config());
            }
            TurnOutcome::LevelCleared { cleared, .. } => {
                println!(
                    "{}",
                    format!("Correct! The word was {}.", cleared.text().to_uppercase())
                        .green()
                        .bold()
                );
                println!("{}", "Level Complete! Preparing next level...".green());
                print_status(controller.state(), controller.config());
                print_level_intro(controller.state(), controller.config());
            }
            TurnOutcome::Won { target } => {
                println!(
                    "{}",
                    format!("Correct! The word was {}.", target.text().to_uppercase())
                        .green()
                        .bold()
                );
                print_win_banner(controller.state(), controller.config());

                if !offer_new_game(&mut controller)? {
                    return Ok(());
                }
            }
            TurnOutcome::Lost { target } => {
                print_loss_banner(&target, controller.state());

                if !offer_new_game(&mut controller)? {
                    return Ok(());
                }
            }
            TurnOutcome::NextLevelUnavailable { cleared, error } => {
                println!(
                    "{}",
                    format!("Correct! The word was {}.", cleared.text().to_uppercase())
                        .green()
                        .bold()
                );
                println!("{}", format!("Failed to start the next level: {error}").red());
                println!(
                    "{}",
                    "Your progress is saved; restart to try again.".yellow()
                );
                return Ok(());
            }
        }
    }
}

/// Ask to start over; true means a new session is running
fn offer_new_game<S, V, K>(
    controller: &mut GameController<'_, S, V, K>,
) -> Result<bool, String>
where
    S: WordSource,
    V: Validator,
    K: KvStore,
{
    let answer = read_input("Play again? (yes/no)")?;
    match answer.as_deref().map(str::to_lowercase).as_deref() {
        Some("yes" | "y") => {
            start_new(controller)?;
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

fn start_new<S, V, K>(controller: &mut GameController<'_, S, V, K>) -> Result<(), String>
where
    S: WordSource,
    V: Validator,
    K: KvStore,
{
    controller
        .new_game()
        .map_err(|e| format!("Could not start a new game: {e}"))?;
    println!("\n🔄 New game started!\n");
    print_status(controller.state(), controller.config());
    print_level_intro(controller.state(), controller.config());
    Ok(())
}

/// Get user input with a prompt; `None` means stdin closed
fn read_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
