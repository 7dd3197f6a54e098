//! Fixed timestep simulation tick
//!
//! Core game loop step. Order within an active tick:
//! reset check, frog input, traffic, collision/scoring, clock, cooldowns.

use super::autopilot;
use super::rules::{self, Outcome};
use super::state::{GameEvent, Round, RoundPhase};
use super::token::Direction;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// At most one hop request
    pub direction: Option<Direction>,
    /// Restart the round (debounced)
    pub reset: bool,
    /// Idle/demo mode - autopilot drives the frog
    pub idle_mode: bool,
}

impl TickInput {
    pub fn hop(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Default::default()
        }
    }
}

/// Advance the round by one fixed tick
pub fn tick(round: &mut Round, input: &TickInput) {
    round.events.clear();
    round.tick_count += 1;

    // Reset consumes the whole tick
    if input.reset && round.reset_cooldown == 0 {
        round.reset();
        return;
    }
    round.reset_cooldown = round.reset_cooldown.saturating_sub(1);

    if round.phase() == RoundPhase::GameOver {
        return;
    }

    let direction = if input.idle_mode {
        autopilot::choose(round)
    } else {
        input.direction
    };

    let config = round.config().clone();

    if let Some(dir) = direction {
        let accepted = round.frog.accepts_input();
        if round
            .frog
            .handle_input(dir, config.grid_width, config.grid_height, config.jump_delay)
        {
            round.events.push(GameEvent::Hop);
        } else if accepted {
            round.events.push(GameEvent::Bump);
        }
    }

    round.lanes.advance();

    match rules::apply(
        &mut round.frog,
        &round.lanes,
        &mut round.lives,
        &mut round.score,
        &config,
    ) {
        Outcome::Squashed => {
            log::debug!("Frog squashed at {:?}", round.frog.position());
            round.events.push(GameEvent::Squashed);
        }
        Outcome::ReachedGoal => {
            log::debug!("Frog home, score {}", round.score);
            round.events.push(GameEvent::ReachedGoal);
        }
        Outcome::None => {}
    }

    if round.lives == 0 {
        round.events.push(GameEvent::GameOver);
        log::info!(
            "Game over: score {} time {}s bonus {} total {}",
            round.score,
            round.elapsed_ms / 1000,
            round.time_bonus(),
            round.total()
        );
    }

    round.elapsed_ms += u64::from(config.tick_ms);

    if round.frog.tick(config.start_position()) {
        round.events.push(GameEvent::Respawned);
    }

    round.check_invariants();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::lane::{Lane, LaneSet};
    use crate::sim::token::FrogPhase;
    use proptest::prelude::*;

    /// Traffic that never reaches the playfield during a test
    fn quiet_traffic(config: &GameConfig) -> LaneSet {
        let lanes = (0..config.lanes())
            .map(|_| Lane::new(0.01, 1000.0, 900.0))
            .collect();
        LaneSet::from_lanes(lanes, config)
    }

    /// Traffic with a car parked over column 0 of every lane
    fn parked_traffic(config: &GameConfig) -> LaneSet {
        let lanes = (0..config.lanes())
            .map(|_| Lane::new(0.01, 1000.0, 0.0))
            .collect();
        LaneSet::from_lanes(lanes, config)
    }

    fn quiet_round() -> Round {
        let config = GameConfig::default();
        let mut round = Round::with_seed(config.clone(), 12345);
        round.lanes = quiet_traffic(&config);
        round
    }

    fn idle(round: &mut Round, ticks: u32) {
        for _ in 0..ticks {
            tick(round, &TickInput::default());
        }
    }

    /// Hop, then wait out the jump cooldown
    fn hop(round: &mut Round, dir: Direction) {
        tick(round, &TickInput::hop(dir));
        let delay = round.config().jump_delay;
        idle(round, delay.saturating_sub(1));
    }

    #[test]
    fn test_clock_advances() {
        let mut round = quiet_round();
        idle(&mut round, 50);
        assert_eq!(round.elapsed_ms, 1000);
        assert_eq!(round.tick_count, 50);
    }

    #[test]
    fn test_hop_rate_limited() {
        let mut round = quiet_round();
        tick(&mut round, &TickInput::hop(Direction::Up));
        assert_eq!(round.frog.position(), (5, 5));
        assert_eq!(round.events, vec![GameEvent::Hop]);

        // Holding the key during the cooldown does nothing
        for _ in 0..6 {
            tick(&mut round, &TickInput::hop(Direction::Up));
            assert_eq!(round.frog.position(), (5, 5));
            assert!(round.events.is_empty());
        }
        tick(&mut round, &TickInput::hop(Direction::Up));
        assert_eq!(round.frog.position(), (5, 5));
        assert_eq!(round.frog.jump_cooldown, 0);

        tick(&mut round, &TickInput::hop(Direction::Up));
        assert_eq!(round.frog.position(), (5, 4));
    }

    #[test]
    fn test_bump_at_edge() {
        let mut round = quiet_round();
        tick(&mut round, &TickInput::hop(Direction::Down));
        assert_eq!(round.frog.position(), (5, 6));
        assert_eq!(round.frog.facing, Direction::Down);
        assert_eq!(round.events, vec![GameEvent::Bump]);
        assert_eq!(round.frog.jump_cooldown, 0);
    }

    #[test]
    fn test_goal_scenario() {
        let mut round = quiet_round();
        for _ in 0..5 {
            hop(&mut round, Direction::Up);
        }
        assert_eq!(round.frog.position(), (5, 1));
        assert_eq!(round.lives, 5);

        tick(&mut round, &TickInput::hop(Direction::Up));
        assert_eq!(round.score, 100);
        assert_eq!(round.lives, 4);
        assert!(round.events.contains(&GameEvent::ReachedGoal));
        assert_eq!(round.frog.phase(), FrogPhase::Celebrating);
        assert_eq!(round.frog.position(), (5, 0));

        // Celebration pause: one tick already spent, respawn on the last one
        let anim = round.config().celebrate_anim_ticks;
        tick(&mut round, &TickInput::hop(Direction::Left));
        assert_eq!(round.frog.position(), (5, 0));
        idle(&mut round, anim - 3);
        assert_eq!(round.frog.position(), (5, 0));
        tick(&mut round, &TickInput::default());
        assert!(round.events.contains(&GameEvent::Respawned));
        assert_eq!(round.frog.position(), (5, 6));
        assert_eq!(round.frog.facing, Direction::Up);
        assert_eq!(round.score, 100);
        assert_eq!(round.lives, 4);
    }

    #[test]
    fn test_traffic_moves_while_frozen() {
        let config = GameConfig::default();
        let mut round = Round::with_seed(config.clone(), 77);

        round.frog.kill(config.death_anim_ticks);
        let before: Vec<f32> = round.lanes.lanes().iter().map(|l| l.offset).collect();
        tick(&mut round, &TickInput::default());
        assert_eq!(round.frog.phase(), FrogPhase::Dying);
        for (lane, old) in round.lanes.lanes().iter().zip(&before) {
            assert_ne!(lane.offset, *old);
        }

        // Let the death play out, then freeze the frog on the goal pause instead
        idle(&mut round, config.death_anim_ticks);
        round.frog.celebrate(config.celebrate_anim_ticks);
        let before: Vec<f32> = round.lanes.lanes().iter().map(|l| l.offset).collect();
        tick(&mut round, &TickInput::hop(Direction::Up));
        assert_eq!(round.frog.phase(), FrogPhase::Celebrating);
        assert_eq!(round.frog.position(), config.start_position());
        for (lane, old) in round.lanes.lanes().iter().zip(&before) {
            assert_ne!(lane.offset, *old);
        }
    }

    #[test]
    fn test_last_life_game_over() {
        let config = GameConfig::default();
        let mut round = Round::with_seed(config.clone(), 1);
        round.lanes = parked_traffic(&config);
        round.lives = 1;
        round.score = 200;
        round.frog.x = 0;

        tick(&mut round, &TickInput::hop(Direction::Up));
        assert_eq!(round.lives, 0);
        assert_eq!(round.phase(), RoundPhase::GameOver);
        assert!(round.events.contains(&GameEvent::Squashed));
        assert!(round.events.contains(&GameEvent::GameOver));

        let elapsed = round.elapsed_ms;
        let lanes = round.lanes.clone();
        let frog = round.frog.clone();
        for _ in 0..100 {
            tick(&mut round, &TickInput::hop(Direction::Right));
        }
        assert_eq!(round.elapsed_ms, elapsed);
        assert_eq!(round.score, 200);
        assert_eq!(round.lanes, lanes);
        assert_eq!(round.frog, frog);
    }

    #[test]
    fn test_reset_debounce() {
        let mut round = quiet_round();
        tick(&mut round, &TickInput::reset());
        assert_eq!(round.events, vec![GameEvent::Reset]);
        assert_eq!(round.reset_cooldown, 20);

        round.score = 500;
        round.lives = 2;
        tick(&mut round, &TickInput::reset());
        assert_eq!(round.score, 500);
        assert_eq!(round.lives, 2);
        assert!(!round.events.contains(&GameEvent::Reset));
        assert_eq!(round.reset_cooldown, 19);

        idle(&mut round, 19);
        assert_eq!(round.reset_cooldown, 0);

        tick(&mut round, &TickInput::reset());
        assert_eq!(round.score, 0);
        assert_eq!(round.lives, 5);
        assert_eq!(round.elapsed_ms, 0);
        assert_eq!(round.frog.position(), (5, 6));
        assert_eq!(round.reset_cooldown, 20);
    }

    #[test]
    fn test_reset_from_game_over() {
        let mut round = quiet_round();
        round.lives = 0;
        round.score = 300;
        tick(&mut round, &TickInput::reset());
        assert_eq!(round.phase(), RoundPhase::Active);
        assert_eq!(round.lives, 5);
        assert_eq!(round.score, 0);
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig::default();
        let mut a = Round::with_seed(config.clone(), 99999);
        let mut b = Round::with_seed(config, 99999);

        let inputs = [
            TickInput::hop(Direction::Up),
            TickInput::default(),
            TickInput::hop(Direction::Left),
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
        ];
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.lanes, b.lanes);
        assert_eq!(a.frog, b.frog);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.score, b.score);
    }

    fn any_input() -> impl Strategy<Value = TickInput> {
        (
            prop::option::of(prop::sample::select(Direction::ALL.to_vec())),
            prop::bool::weighted(0.02),
        )
            .prop_map(|(direction, reset)| TickInput {
                direction,
                reset,
                idle_mode: false,
            })
    }

    proptest! {
        #[test]
        fn prop_round_invariants(
            seed in any::<u64>(),
            inputs in prop::collection::vec(any_input(), 1..600),
        ) {
            let config = GameConfig::default();
            let mut round = Round::with_seed(config.clone(), seed);
            let mut last_score = 0;
            for input in &inputs {
                let was_reset = input.reset && round.reset_cooldown == 0;
                tick(&mut round, input);
                let frog = &round.frog;
                prop_assert!((0..config.grid_width).contains(&frog.x));
                prop_assert!((0..config.grid_height).contains(&frog.y));
                prop_assert!(frog.death_cooldown == 0 || frog.score_cooldown == 0);
                for lane in round.lanes.lanes() {
                    prop_assert!(lane.offset < lane.spacing);
                }
                if !was_reset {
                    prop_assert!(round.score >= last_score);
                }
                last_score = round.score;
            }
        }
    }
}
