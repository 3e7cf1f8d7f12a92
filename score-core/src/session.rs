use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use score_types::{GameDraft, GameSettings, Player, PlayerId, PointEvent};

use crate::ledger::ScoreLedger;
use crate::win::{current_day_of_month, win_triggered};

/// Display palette cycled over players at session start.
pub const PLAYER_COLORS: [&str; 5] = ["blue", "green", "purple", "orange", "pink"];

/// Result of applying one point event: the player's post-event snapshot and
/// whether this event is the one that won the game.
#[derive(Debug, Clone, Serialize)]
pub struct EventOutcome {
    pub player: Player,
    pub win_triggered: bool,
}

/// Result of taking back the last scoring turn for correction. `reopened`
/// carries the removed value so the caller can pre-fill its input, or `None`
/// when there was nothing to take back.
#[derive(Debug, Clone, Serialize)]
pub struct EditOutcome {
    pub player: Player,
    pub reopened: Option<u32>,
}

/// One live game: the players, the fixed rule settings, and the winner slot.
///
/// Events are applied synchronously, one at a time, and the winner slot is
/// updated inside the same transition that mutates the ledger. Two
/// back-to-back qualifying events therefore cannot both claim the win. After
/// a win the ledger keeps accepting events, but the recorded winner never
/// changes.
#[derive(Debug)]
pub struct GameSession {
    players: Vec<Player>,
    settings: GameSettings,
    winner: Option<Player>,
}

impl GameSession {
    /// Start a session from the setup screen's inputs. Blank names fall back
    /// to the player's one-based index, and colors cycle through the palette.
    pub fn new(names: Vec<String>, settings: GameSettings) -> Self {
        let players = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.trim().to_string();
                Player {
                    id: Uuid::new_v4(),
                    name: if name.is_empty() {
                        (index + 1).to_string()
                    } else {
                        name
                    },
                    score: 0,
                    history: Vec::new(),
                    color: PLAYER_COLORS[index % PLAYER_COLORS.len()].to_string(),
                }
            })
            .collect();

        Self {
            players,
            settings,
            winner: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The frozen snapshot of the first player whose event won, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Apply a point event for one player, evaluating win conditions on the
    /// local calendar day.
    pub fn apply_event(&mut self, player_id: PlayerId, event: PointEvent) -> Result<EventOutcome> {
        self.apply_event_with_day(player_id, event, current_day_of_month())
    }

    /// Same as [`GameSession::apply_event`], with the day-of-month injected.
    /// The day-match rule reads the calendar at evaluation time, so tests
    /// pass a fixed day here.
    pub fn apply_event_with_day(
        &mut self,
        player_id: PlayerId,
        event: PointEvent,
        day_of_month: u32,
    ) -> Result<EventOutcome> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| anyhow!("Player not in game: {}", player_id))?;

        let delta = ScoreLedger::apply(player, event);
        let snapshot = player.clone();
        debug!(
            "Applied {:?} to player {}: score {} (delta {})",
            event, snapshot.name, snapshot.score, delta
        );

        let mut won = false;
        if self.winner.is_none()
            && win_triggered(snapshot.score, delta, &self.settings, day_of_month)
        {
            self.winner = Some(snapshot.clone());
            won = true;
            info!(
                "Player {} wins at {} points (target {})",
                snapshot.name, snapshot.score, self.settings.target_score
            );
        }

        Ok(EventOutcome {
            player: snapshot,
            win_triggered: won,
        })
    }

    /// Take back the last scoring turn so it can be corrected. Returns the
    /// reopened value; the corrected amount re-enters through
    /// [`GameSession::apply_event`], which is where wins are evaluated.
    pub fn edit_last_turn(&mut self, player_id: PlayerId) -> Result<EditOutcome> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| anyhow!("Player not in game: {}", player_id))?;

        let reopened = ScoreLedger::reverse_last_numeric(player);

        Ok(EditOutcome {
            player: player.clone(),
            reopened,
        })
    }

    /// Rename a player mid-game. Blank input is ignored.
    pub fn rename_player(&mut self, player_id: PlayerId, name: &str) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| anyhow!("Player not in game: {}", player_id))?;

        let name = name.trim();
        if !name.is_empty() {
            player.name = name.to_string();
        }

        Ok(())
    }

    /// The finished game, ready for the history store, once a win has been
    /// acknowledged. The winner's entry in the player list is the frozen
    /// win-time snapshot; events applied after the win stay visible for the
    /// other players only.
    pub fn completed(&self) -> Option<GameDraft> {
        let winner = self.winner.clone()?;
        let players = self
            .players
            .iter()
            .map(|p| {
                if p.id == winner.id {
                    winner.clone()
                } else {
                    p.clone()
                }
            })
            .collect();

        Some(GameDraft {
            players,
            winner,
            target_score: self.settings.target_score,
            settings: self.settings.clone(),
        })
    }
}
