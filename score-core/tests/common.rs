use score_core::GameSession;
use score_types::{GameSettings, Player, PlayerId, TurnEntry};

/// Settings with only the target-score rule active.
pub fn target_only_settings(target_score: u32) -> GameSettings {
    GameSettings {
        target_score,
        win_on_current_day: false,
        win_on_one: false,
    }
}

/// Settings with every rule toggle on, as the setup screen defaults to.
pub fn all_rules_settings(target_score: u32) -> GameSettings {
    GameSettings {
        target_score,
        win_on_current_day: true,
        win_on_one: true,
    }
}

/// Creates a session for the given player names with a 100-point target.
pub fn create_session(names: &[&str]) -> GameSession {
    create_session_with_settings(names, target_only_settings(100))
}

pub fn create_session_with_settings(names: &[&str], settings: GameSettings) -> GameSession {
    GameSession::new(names.iter().map(|n| n.to_string()).collect(), settings)
}

/// Id of the player at `index`, in setup order.
pub fn player_id(session: &GameSession, index: usize) -> PlayerId {
    session.players()[index].id
}

/// Sum of the numeric entries still present in a player's history.
pub fn history_sum(player: &Player) -> u32 {
    player.history.iter().filter_map(TurnEntry::points).sum()
}
