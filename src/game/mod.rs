//! Round state and submission arbitration
//!
//! A round is the root word, the words accepted so far and the score. The
//! `GameState` owns the current round and is the only thing that mutates it.

mod outcome;
mod state;

pub use outcome::{Rejection, Submission};
pub use state::{FALLBACK_ROOT, GameState, Round};
