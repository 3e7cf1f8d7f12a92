use chrono::Datelike;
use score_types::GameSettings;

/// Day of month (1-31) on the local clock, the input to the day-match rule.
pub fn current_day_of_month() -> u32 {
    chrono::Local::now().day()
}

/// Decide whether a score mutation ends the game.
///
/// Evaluated against the post-event score and the effective signed delta the
/// event produced. An undo can leave the score at or above the target and
/// still fire the first rule, while its negative delta can never match the
/// day or one rules.
pub fn win_triggered(
    new_score: u32,
    delta: i64,
    settings: &GameSettings,
    day_of_month: u32,
) -> bool {
    if new_score >= settings.target_score {
        return true;
    }

    if settings.win_on_current_day && delta == i64::from(day_of_month) {
        return true;
    }

    if settings.win_on_one && delta == 1 {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(target_score: u32, win_on_current_day: bool, win_on_one: bool) -> GameSettings {
        GameSettings {
            target_score,
            win_on_current_day,
            win_on_one,
        }
    }

    #[test]
    fn test_target_score_fires_at_and_above() {
        let rules = settings(100, false, false);
        assert!(win_triggered(100, 10, &rules, 15));
        assert!(win_triggered(105, 10, &rules, 15));
        assert!(!win_triggered(99, 10, &rules, 15));
    }

    #[test]
    fn test_day_match_fires_below_target() {
        let rules = settings(100, true, false);
        assert!(win_triggered(40, 15, &rules, 15));
        assert!(!win_triggered(40, 14, &rules, 15));
    }

    #[test]
    fn test_day_match_disabled() {
        let rules = settings(100, false, false);
        assert!(!win_triggered(40, 15, &rules, 15));
    }

    #[test]
    fn test_one_match() {
        let rules = settings(100, false, true);
        assert!(win_triggered(1, 1, &rules, 15));
        assert!(!win_triggered(2, 2, &rules, 15));
    }

    #[test]
    fn test_negative_delta_never_matches_day_or_one() {
        let rules = settings(100, true, true);
        // An undo of 15 points on day 15 must not fire.
        assert!(!win_triggered(40, -15, &rules, 15));
        assert!(!win_triggered(40, -1, &rules, 15));
    }

    #[test]
    fn test_undo_can_still_leave_score_over_target() {
        let rules = settings(100, false, false);
        assert!(win_triggered(103, -5, &rules, 15));
    }

    #[test]
    fn test_current_day_is_in_calendar_range() {
        let day = current_day_of_month();
        assert!((1..=31).contains(&day));
    }
}
