use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::player::Player;

pub type GameId = Uuid;

/// Rule toggles chosen on the setup screen, fixed for the lifetime of one
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSettings {
    pub target_score: u32,
    pub win_on_current_day: bool,
    pub win_on_one: bool,
}

/// A finished game as handed to the history store, before an id, date and
/// timestamp are assigned.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameDraft {
    pub players: Vec<Player>,
    pub winner: Player,
    pub target_score: u32,
    pub settings: GameSettings,
}

/// An archived game. Written exactly once when a win is acknowledged,
/// immutable thereafter, removed only by clearing the whole history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameRecord {
    pub id: GameId,
    pub date: String, // local date as shown in the history list
    pub timestamp: i64, // epoch millis
    pub players: Vec<Player>,
    pub winner: Player,
    pub target_score: u32,
    pub settings: GameSettings,
}

/// Aggregates derived from the full archive on every read. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameStats {
    pub total_games: u32,
    pub player_wins: HashMap<String, u32>,
    pub average_score: u32,
    pub highest_score: u32,
    pub most_frequent_winner: String,
}
