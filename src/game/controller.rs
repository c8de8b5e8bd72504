//! Session orchestration
//!
//! The controller glues the state machine to its collaborators: it resumes
//! or starts sessions, screens raw input before any life is spent, drives
//! level transitions and decides when the session is persisted. Front ends
//! only ever talk to this type.

use crate::core::{Word, WordError};
use crate::game::progress::{GuessError, Outcome, Phase, ProgressMachine};
use crate::game::state::{GameState, HistoryEntry};
use crate::game::traits::{Validator, WordSource, WordSourceError};
use crate::game::GameConfig;
use crate::persist::{KvStore, SessionStore};
use log::info;
use std::fmt;

/// A guess turned away before it cost anything
///
/// Refusals never touch lives, history or the saved session; the player
/// simply tries again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// The session already ended
    GameOver,
    /// No target word is assigned yet
    NoActiveLevel,
    /// Blank input
    Empty,
    /// Input contains something other than ASCII letters
    NotLetters,
    /// Input length does not match the level's word length
    WrongLength { expected: usize },
    /// The dictionary does not know this word
    UnknownWord { guess: String },
    /// The dictionary could not be reached; neither accepted nor rejected
    Unverifiable { guess: String },
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over. Start a new game to keep playing."),
            Self::NoActiveLevel => write!(f, "No level is ready yet."),
            Self::Empty => write!(f, "Enter a word."),
            Self::NotLetters => write!(f, "Words may only use the letters a-z."),
            Self::WrongLength { expected } => {
                write!(f, "Guess must be {expected} letters long.")
            }
            Self::UnknownWord { guess } => {
                write!(f, "'{}' is not a valid word.", guess.to_uppercase())
            }
            Self::Unverifiable { .. } => {
                write!(f, "Error checking word. Please try again.")
            }
        }
    }
}

/// Where the session stands after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Wrong word, lives remain; same level continues
    Continue,
    /// Level cleared and the next level is ready
    LevelCleared { cleared: Word, next_level: usize },
    /// The final level was cleared
    Won { target: Word },
    /// The last life went to a wrong word
    Lost { target: Word },
    /// Level cleared but no word could be found for the next level; the
    /// session ends unsaved so a restart can retry from the last snapshot
    NextLevelUnavailable {
        cleared: Word,
        error: WordSourceError,
    },
}

/// Everything a front end needs to render one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub entry: HistoryEntry,
    pub outcome: TurnOutcome,
    pub lives_remaining: u32,
}

/// How a session came to be running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartReport {
    /// No usable save existed; a new session began
    Fresh { level: usize },
    /// A saved mid-session state was picked up
    Resumed { level: usize },
    /// The save holds a finished session; nothing is running
    SessionOver { won: bool },
}

/// Drives one session end to end
pub struct GameController<'a, S, V, K> {
    machine: ProgressMachine,
    source: &'a S,
    validator: &'a V,
    session: &'a SessionStore<K>,
}

impl<'a, S, V, K> GameController<'a, S, V, K>
where
    S: WordSource,
    V: Validator,
    K: KvStore,
{
    #[must_use]
    pub fn new(
        config: GameConfig,
        source: &'a S,
        validator: &'a V,
        session: &'a SessionStore<K>,
    ) -> Self {
        Self {
            machine: ProgressMachine::new(config),
            source,
            validator,
            session,
        }
    }

    /// Resume the saved session if one exists, otherwise start fresh
    ///
    /// A saved session that already ended is reported as such without
    /// touching it; the front end decides whether to start over.
    ///
    /// # Errors
    /// Returns `WordSourceError` when a level had to be set up and no word
    /// could be found. The session is then over and deliberately not saved.
    pub fn start(&mut self) -> Result<StartReport, WordSourceError> {
        if let Some(state) = self.session.load(self.machine.config()) {
            let config = self.machine.config().clone();
            self.machine = ProgressMachine::from_state(config, state);

            if self.machine.state().is_over() {
                return Ok(StartReport::SessionOver {
                    won: self.machine.state().is_won(),
                });
            }
            if self.machine.state().target_word().is_none() {
                // Saved before a level finished setting up; pick a word now
                self.begin_and_save()?;
            }
            let level = self.machine.state().current_level();
            info!("resumed saved session at level {level}");
            return Ok(StartReport::Resumed { level });
        }
        self.new_game()
    }

    /// Throw away any saved session and begin a fresh one
    ///
    /// # Errors
    /// Returns `WordSourceError` when no first word could be found.
    pub fn new_game(&mut self) -> Result<StartReport, WordSourceError> {
        self.machine.reset();
        self.session.clear();
        self.begin_and_save()?;
        let level = self.machine.state().current_level();
        info!("started fresh session at level {level}");
        Ok(StartReport::Fresh { level })
    }

    /// Screen raw input and, if it survives, play it as a guess
    ///
    /// The pipeline is: trim, normalize, shape checks, dictionary check,
    /// then the state machine. Only a guess that passes every gate costs a
    /// life.
    ///
    /// # Errors
    /// Returns the [`Refusal`] explaining why the input was not played.
    pub fn submit_guess(&mut self, raw: &str) -> Result<TurnReport, Refusal> {
        if self.machine.state().is_over() {
            return Err(Refusal::GameOver);
        }
        let Some(target) = self.machine.state().target_word().cloned() else {
            return Err(Refusal::NoActiveLevel);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Refusal::Empty);
        }
        let guess = match Word::new(trimmed) {
            Ok(word) => word,
            Err(WordError::Empty) => return Err(Refusal::Empty),
            Err(_) => return Err(Refusal::NotLetters),
        };
        if guess.len() != target.len() {
            return Err(Refusal::WrongLength {
                expected: target.len(),
            });
        }

        match self.validator.word_exists(&guess) {
            Ok(true) => {}
            Ok(false) => {
                return Err(Refusal::UnknownWord {
                    guess: guess.text().to_string(),
                });
            }
            Err(_) => {
                return Err(Refusal::Unverifiable {
                    guess: guess.text().to_string(),
                });
            }
        }

        let entry = match self.machine.record_guess(&guess) {
            Ok(entry) => entry,
            Err(GuessError::GameOver) => return Err(Refusal::GameOver),
            Err(GuessError::NoTargetWord) => return Err(Refusal::NoActiveLevel),
            Err(GuessError::LengthMismatch { expected, .. }) => {
                return Err(Refusal::WrongLength { expected });
            }
        };

        let outcome = match self.machine.evaluate_outcome() {
            Outcome::Continue => {
                self.session.save(self.machine.state());
                TurnOutcome::Continue
            }
            Outcome::Won => {
                self.machine.finish(true);
                self.session.save(self.machine.state());
                info!(
                    "session won with {} lives left",
                    self.machine.state().lives_remaining()
                );
                TurnOutcome::Won { target }
            }
            Outcome::Lost => {
                self.machine.finish(false);
                self.session.save(self.machine.state());
                info!("session lost at level {}", self.machine.state().current_level());
                TurnOutcome::Lost { target }
            }
            Outcome::LevelComplete => {
                self.machine.advance_level();
                match self.machine.begin_level(self.source) {
                    Ok(()) => {
                        self.session.save(self.machine.state());
                        TurnOutcome::LevelCleared {
                            cleared: target,
                            next_level: self.machine.state().current_level(),
                        }
                    }
                    Err(error) => TurnOutcome::NextLevelUnavailable {
                        cleared: target,
                        error,
                    },
                }
            }
        };

        Ok(TurnReport {
            entry,
            outcome,
            lives_remaining: self.machine.state().lives_remaining(),
        })
    }

    /// Read-only view of the session state
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.machine.state()
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.machine.config()
    }

    /// Current phase of the underlying machine
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    fn begin_and_save(&mut self) -> Result<(), WordSourceError> {
        self.machine.begin_level(self.source)?;
        self.session.save(self.machine.state());
        Ok(())
    }
}
