use std::collections::HashMap;

use anyhow::Result;
use chrono::{Local, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use score_types::{GameDraft, GameRecord, GameStats};

use crate::store::BlobStore;

/// Slot name holding the archived game collection.
pub const HISTORY_KEY: &str = "score-game-history";

/// Archive of completed games over a [`BlobStore`] slot, plus the stats
/// reduction over the whole collection.
///
/// The collection is append-only and read back in insertion order. Every
/// write replaces the whole blob.
pub struct HistoryRepository<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> HistoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Archive a finished game, assigning its id, display date and
    /// timestamp. Returns the record as persisted.
    pub fn record_game(&mut self, draft: GameDraft) -> Result<GameRecord> {
        let mut games = self.list_games();

        let record = GameRecord {
            id: Uuid::new_v4(),
            date: Local::now().format("%d/%m/%Y").to_string(),
            timestamp: Utc::now().timestamp_millis(),
            players: draft.players,
            winner: draft.winner,
            target_score: draft.target_score,
            settings: draft.settings,
        };

        games.push(record.clone());
        let payload = serde_json::to_string(&games)?;
        self.store.set(HISTORY_KEY, &payload)?;

        info!(
            "Recorded game {} ({} players, winner {})",
            record.id,
            record.players.len(),
            record.winner.name
        );
        Ok(record)
    }

    /// All archived games, oldest first. Missing, unreadable or unparsable
    /// storage reads as an empty archive, never an error.
    pub fn list_games(&self) -> Vec<GameRecord> {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("History slot unreadable, starting empty: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(games) => games,
            Err(err) => {
                warn!("History slot failed to parse, starting empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Delete the whole archive. Irreversible.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear(HISTORY_KEY)?;
        info!("Cleared game history");
        Ok(())
    }

    /// Reduce the full archive into summary statistics. Recomputed on every
    /// call; nothing is cached or maintained incrementally.
    pub fn compute_stats(&self) -> GameStats {
        let games = self.list_games();
        if games.is_empty() {
            return GameStats::default();
        }

        let mut player_wins: HashMap<String, u32> = HashMap::new();
        let mut total_score: u64 = 0;
        let mut highest_score: u32 = 0;

        for game in &games {
            *player_wins.entry(game.winner.name.clone()).or_insert(0) += 1;
            for player in &game.players {
                total_score += u64::from(player.score);
                highest_score = highest_score.max(player.score);
            }
        }

        // Legacy divisor: the FIRST game's player count stands in for every
        // game's, so the figure is exact only when all games share a player
        // count. Kept as shipped; a per-game average would change outputs.
        let divisor = (games.len() * games[0].players.len()).max(1);
        let average_score = (total_score as f64 / divisor as f64).round() as u32;

        // Ties keep the earliest recorded winner.
        let mut most_frequent_winner = String::new();
        let mut best_count = 0u32;
        for game in &games {
            let count = player_wins[&game.winner.name];
            if count > best_count {
                best_count = count;
                most_frequent_winner = game.winner.name.clone();
            }
        }

        GameStats {
            total_games: games.len() as u32,
            player_wins,
            average_score,
            highest_score,
            most_frequent_winner,
        }
    }
}
