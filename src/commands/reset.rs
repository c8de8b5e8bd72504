//! Saved-session removal

use crate::persist::{KvStore, SessionStore};

/// Delete the saved session, if any
pub fn run_reset<K: KvStore>(session: &SessionStore<K>) {
    session.clear();
    println!("Saved session cleared.");
}
