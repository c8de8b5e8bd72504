//! Word Climb - CLI
//!
//! Progressive word-guessing game: climb from five-letter to nine-letter
//! words on one shared pool of lives, with the session saved between runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordclimb::{
    commands::{run_play, run_reset, run_transcript},
    game::{GameConfig, GameController},
    persist::{FileStore, MemoryStore, SessionStore},
    wordlists::Lexicon,
};

#[derive(Parser)]
#[command(
    name = "wordclimb",
    about = "Progressive word-guessing game: one pool of lives, words that grow a letter per level",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length of the first level
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_START_LEVEL)]
    start_level: usize,

    /// Word length of the final level
    #[arg(long, global = true, default_value_t = GameConfig::DEFAULT_END_LEVEL)]
    end_level: usize,

    /// Guesses for the whole climb
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_MAX_LIVES)]
    lives: u32,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Directory for saved sessions (default: the platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the climb (default)
    Play {
        /// Play a throwaway session: never save, never resume
        #[arg(long)]
        no_save: bool,
    },

    /// Show the saved session's guess history
    Transcript,

    /// Delete the saved session
    Reset,
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let cli = Cli::parse();
    let config = GameConfig::new(cli.start_level, cli.end_level, cli.lives)?;

    let command = cli.command.unwrap_or(Commands::Play { no_save: false });

    match command {
        Commands::Play { no_save } => {
            let lexicon = load_lexicon(&cli.wordlist)?;
            if !lexicon.covers(config.start_level..=config.end_level) {
                anyhow::bail!(
                    "wordlist is missing words for some lengths between {} and {}",
                    config.start_level,
                    config.end_level
                );
            }

            if no_save {
                let session = SessionStore::new(MemoryStore::new());
                let controller = GameController::new(config, &lexicon, &lexicon, &session);
                run_play(controller).map_err(|e| anyhow::anyhow!(e))
            } else {
                let session = SessionStore::new(open_file_store(cli.data_dir)?);
                let controller = GameController::new(config, &lexicon, &lexicon, &session);
                run_play(controller).map_err(|e| anyhow::anyhow!(e))
            }
        }
        Commands::Transcript => {
            let session = SessionStore::new(open_file_store(cli.data_dir)?);
            run_transcript(&config, &session);
            Ok(())
        }
        Commands::Reset => {
            let session = SessionStore::new(open_file_store(cli.data_dir)?);
            run_reset(&session);
            Ok(())
        }
    }
}

/// Load the lexicon based on the -w flag
fn load_lexicon(wordlist_mode: &str) -> Result<Lexicon> {
    match wordlist_mode {
        "embedded" => Ok(Lexicon::embedded()),
        path => Ok(Lexicon::from_file(path)?),
    }
}

/// Open the session store, preferring an explicit --data-dir
fn open_file_store(data_dir: Option<PathBuf>) -> Result<FileStore> {
    match data_dir {
        Some(dir) => Ok(FileStore::new(dir)),
        None => FileStore::in_user_data_dir("wordclimb")
            .ok_or_else(|| anyhow::anyhow!("no user data directory available; pass --data-dir")),
    }
}
