use score_types::{Player, PointEvent, TurnEntry};

/// Per-player score mutation rules.
///
/// Every path that takes back a scoring turn goes through
/// [`ScoreLedger::reverse_last_numeric`], so undo and edit-last-turn cannot
/// drift apart.
pub struct ScoreLedger;

impl ScoreLedger {
    /// Apply one point event to a player and return the effective score
    /// delta, signed. The delta is what win evaluation runs against, not the
    /// event's face value.
    pub fn apply(player: &mut Player, event: PointEvent) -> i64 {
        match event {
            PointEvent::Add(points) if points > 0 => {
                player.score += points;
                player.history.push(TurnEntry::Points(points));
                points as i64
            }
            PointEvent::Add(_) => {
                // Callers enforce points > 0. A zero add that slips through
                // degenerates to a bare history pop, score untouched.
                player.history.pop();
                0
            }
            PointEvent::Mark => {
                player.history.push(TurnEntry::Mark);
                0
            }
            PointEvent::Undo => match Self::reverse_last_numeric(player) {
                Some(points) => -(points as i64),
                None => 0,
            },
        }
    }

    /// Remove the most recent numeric turn and reverse its score effect,
    /// flooring the score at zero. Returns the removed value, or `None` when
    /// the history holds no numeric turn (the event is then a no-op).
    pub fn reverse_last_numeric(player: &mut Player) -> Option<u32> {
        let index = player
            .history
            .iter()
            .rposition(|entry| matches!(entry, TurnEntry::Points(_)))?;

        match player.history.remove(index) {
            TurnEntry::Points(points) => {
                player.score = player.score.saturating_sub(points);
                Some(points)
            }
            TurnEntry::Mark => None,
        }
    }
}
