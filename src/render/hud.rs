//! HUD and game-over panel text

use crate::sim::Snapshot;

pub const CONTROLS_HINT: &str = "[esc] to close, [r] to reset";

/// Status line shown above the playfield while frogs remain
pub fn status_line(snapshot: &Snapshot) -> String {
    format!(
        "FROGS: {}   SCORE: {}   TIME: {}",
        snapshot.lives,
        snapshot.score,
        snapshot.elapsed_ms / 1000
    )
}

/// Lines to draw for this snapshot, top to bottom.
/// An empty string marks a blank spacer line.
pub fn hud_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = match &snapshot.game_over {
        Some(summary) => vec![
            "GAME OVER".to_string(),
            format!("score: {}", summary.score),
            format!("time: {}s", summary.time_secs),
            format!("time bonus: {}", summary.time_bonus),
            String::new(),
            format!("TOTAL: {}", summary.total),
        ],
        None => vec![status_line(snapshot)],
    };
    lines.push(CONTROLS_HINT.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Round;

    #[test]
    fn test_status_line() {
        let mut round = Round::with_seed(GameConfig::default(), 2);
        round.lives = 3;
        round.score = 200;
        round.elapsed_ms = 12_340;
        let lines = hud_lines(&round.snapshot());
        assert_eq!(lines, vec!["FROGS: 3   SCORE: 200   TIME: 12", CONTROLS_HINT]);
    }

    #[test]
    fn test_game_over_panel() {
        let mut round = Round::with_seed(GameConfig::default(), 2);
        round.lives = 0;
        round.score = 300;
        round.elapsed_ms = 130_000;
        let lines = hud_lines(&round.snapshot());
        assert_eq!(lines[0], "GAME OVER");
        assert_eq!(lines[1], "score: 300");
        assert_eq!(lines[2], "time: 130s");
        assert_eq!(lines[3], "time bonus: 0");
        assert_eq!(lines[5], "TOTAL: 300");
        assert_eq!(lines.last().map(String::as_str), Some(CONTROLS_HINT));
    }
}
