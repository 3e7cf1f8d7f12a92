use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single user-submitted instruction to change one player's score.
///
/// The input widgets validate `Add` amounts to be strictly positive before
/// submitting; the ledger documents (but does not reject) what happens when
/// that validation is bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PointEvent {
    /// Add this many points to the player's score.
    Add(u32),
    /// Take back the most recent scoring turn.
    Undo,
    /// Record a turn that scored nothing, shown as "X" in the history.
    Mark,
}
