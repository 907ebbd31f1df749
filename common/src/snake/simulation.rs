use crate::config::Validate;
use crate::{debug_log, log};
use super::entity::Snake;
use super::input::{Clock, InputSource, RandomSource};
use super::snapshot::SnakeSnapshot;
use super::types::{GameState, Key, Position};
use super::world::{ApplePlacement, WorldSettings};

const MAX_APPLE_PLACEMENT_ATTEMPTS: usize = 1024;

/// Single-player snake on a wrap-around grid, advanced once per rendered frame.
pub struct SnakeSimulation<R: RandomSource> {
    settings: WorldSettings,
    rng: R,
    snake: Snake,
    apple: Option<Position>,
    score: u32,
    state: GameState,
    timer: f32,
}

impl<R: RandomSource> SnakeSimulation<R> {
    pub fn new(settings: WorldSettings, rng: R) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid world settings: {}", e))?;

        let timer = settings.move_interval;
        Ok(Self {
            settings,
            rng,
            snake: Snake::default(),
            apple: None,
            score: 0,
            state: GameState::Playing,
            timer,
        })
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<Position> {
        self.apple
    }

    pub fn snapshot(&self) -> SnakeSnapshot<'_> {
        SnakeSnapshot {
            head: self.snake.head,
            direction: self.snake.direction,
            body: &self.snake.body,
            apple: self.apple,
            score: self.score,
            state: self.state,
            world_width: self.settings.width,
            world_height: self.settings.height,
            cell_size: self.settings.cell_size,
        }
    }

    /// Samples the clock and runs one tick.
    pub fn frame<C, I>(&mut self, clock: &mut C, input: &I)
    where
        C: Clock + ?Sized,
        I: InputSource + ?Sized,
    {
        let delta = clock.delta_time();
        self.tick(delta, input);
    }

    pub fn tick<I: InputSource + ?Sized>(&mut self, delta: f32, input: &I) {
        match self.state {
            GameState::Playing => {
                self.query_input(input);
                self.update_snake(delta);
                self.check_apple_collision();
                self.place_apple_if_missing();
            }
            GameState::GameOver => {
                if input.is_pressed(Key::Restart) {
                    self.reset();
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.snake = Snake::default();
        self.apple = None;
        self.score = 0;
        self.state = GameState::Playing;
        self.timer = self.settings.move_interval;
        log!("New game started");
    }

    fn query_input<I: InputSource + ?Sized>(&mut self, input: &I) {
        for (key, direction) in Key::DIRECTIONS {
            if input.is_pressed(key) && self.snake.try_turn(direction) {
                debug_log!("Turned {:?} at ({}, {})", direction, self.snake.head.x, self.snake.head.y);
                return;
            }
        }
    }

    fn update_snake(&mut self, delta: f32) {
        self.timer -= delta;
        if self.timer > 0.0 {
            return;
        }

        self.timer = self.settings.move_interval;
        let previous_head = self.snake.advance(&self.settings);
        if self.snake.head_hits_body() {
            self.state = GameState::GameOver;
            log!(
                "Game over: ran into own body at ({}, {}). Score: {}",
                self.snake.head.x,
                self.snake.head.y,
                self.score
            );
        }
        self.snake.shift_body(previous_head);
        self.snake.end_step();
    }

    fn check_apple_collision(&mut self) {
        if self.apple != Some(self.snake.head) {
            return;
        }

        self.snake.grow();
        self.score += self.settings.points_per_apple;
        self.apple = None;
        debug_log!(
            "Apple eaten at ({}, {}). Length: {}, score: {}",
            self.snake.head.x,
            self.snake.head.y,
            self.snake.len(),
            self.score
        );
    }

    fn place_apple_if_missing(&mut self) {
        if self.apple.is_some() {
            return;
        }

        let max_column = (self.settings.columns() - 1) as u32;
        let max_row = (self.settings.rows() - 1) as u32;
        let cell_size = self.settings.cell_size;

        for _ in 0..MAX_APPLE_PLACEMENT_ATTEMPTS {
            let candidate = Position::new(
                self.rng.uniform_int(max_column) as i32 * cell_size,
                self.rng.uniform_int(max_row) as i32 * cell_size,
            );
            if !self.apple_rejected_at(candidate) {
                self.apple = Some(candidate);
                debug_log!("Apple placed at ({}, {})", candidate.x, candidate.y);
                return;
            }
        }

        debug_log!(
            "No free cell for an apple after {} attempts, retrying next frame",
            MAX_APPLE_PLACEMENT_ATTEMPTS
        );
    }

    fn apple_rejected_at(&self, candidate: Position) -> bool {
        let on_head = candidate == self.snake.head;
        let on_body = self.snake.occupies_body(candidate);
        match self.settings.apple_placement {
            ApplePlacement::Original => on_head && on_body,
            ApplePlacement::AvoidSnake => on_head || on_body,
        }
    }

    #[cfg(test)]
    fn place_snake(&mut self, head: Position, direction: super::types::Direction, body: &[Position]) {
        self.snake = Snake::new(head, direction);
        self.snake.body.extend(body.iter().copied());
    }

    #[cfg(test)]
    fn set_apple(&mut self, apple: Option<Position>) {
        self.apple = apple;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::logger::{LogLevel, init_logger};
    use crate::snake::{Direction, PressedKeys};

    /// Hands out queued values, then repeats `fallback`; clamped to the requested bound.
    struct ScriptedRandom {
        values: VecDeque<u32>,
        fallback: u32,
    }

    impl ScriptedRandom {
        fn new(values: &[u32], fallback: u32) -> Self {
            Self {
                values: values.iter().copied().collect(),
                fallback,
            }
        }

        fn constant(value: u32) -> Self {
            Self::new(&[], value)
        }
    }

    impl RandomSource for ScriptedRandom {
        fn uniform_int(&mut self, max_inclusive: u32) -> u32 {
            self.values
                .pop_front()
                .unwrap_or(self.fallback)
                .min(max_inclusive)
        }
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn new_sim(
        settings: WorldSettings,
        rng: ScriptedRandom,
    ) -> Result<SnakeSimulation<ScriptedRandom>, String> {
        init_logger(None, LogLevel::Info);
        SnakeSimulation::new(settings, rng)
    }

    // Apple parked at (320, 320), well away from row 0.
    fn create_sim() -> SnakeSimulation<ScriptedRandom> {
        new_sim(WorldSettings::default(), ScriptedRandom::constant(10)).unwrap()
    }

    fn no_keys() -> PressedKeys {
        PressedKeys::new()
    }

    fn body(sim: &SnakeSimulation<ScriptedRandom>) -> Vec<Position> {
        sim.snake().body.iter().copied().collect()
    }

    #[test]
    fn test_new_starts_at_origin_moving_right() {
        let sim = create_sim();
        assert_eq!(sim.snake().head, Position::ORIGIN);
        assert_eq!(sim.snake().direction, Direction::Right);
        assert!(sim.snake().is_empty());
        assert_eq!(sim.apple(), None);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.state(), GameState::Playing);
    }

    #[test]
    fn test_new_rejects_invalid_world() {
        let settings = WorldSettings {
            height: 470,
            ..WorldSettings::default()
        };
        assert!(SnakeSimulation::new(settings, ScriptedRandom::constant(0)).is_err());
    }

    #[test]
    fn test_no_movement_before_interval_elapses() {
        let mut sim = create_sim();
        sim.place_snake(p(64, 0), Direction::Right, &[p(0, 0), p(32, 0)]);

        for _ in 0..9 {
            sim.tick(0.1, &no_keys());
            assert_eq!(sim.snake().head, p(64, 0));
            assert_eq!(body(&sim), vec![p(0, 0), p(32, 0)]);
        }
    }

    #[test]
    fn test_step_fires_when_timer_reaches_zero() {
        let mut sim = create_sim();
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(32, 0));
    }

    #[test]
    fn test_large_delta_moves_only_one_cell() {
        let mut sim = create_sim();
        sim.tick(5.0, &no_keys());
        assert_eq!(sim.snake().head, p(32, 0));
        sim.tick(0.5, &no_keys());
        assert_eq!(sim.snake().head, p(32, 0));
    }

    #[test]
    fn test_first_tick_places_apple() {
        let mut sim = create_sim();
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(320, 320)));
    }

    #[test]
    fn test_n_steps_keep_length_and_wrap() {
        let mut sim = create_sim();
        sim.place_snake(p(64, 0), Direction::Right, &[p(0, 0), p(32, 0)]);

        for _ in 0..25 {
            sim.tick(1.0, &no_keys());
        }

        // 64 + 25 * 32 = 864, wrapped across a 640 wide world once.
        assert_eq!(sim.snake().head, p(224, 0));
        assert_eq!(sim.snake().len(), 2);
        assert_eq!(body(&sim), vec![p(160, 0), p(192, 0)]);
        assert_eq!(sim.state(), GameState::Playing);
    }

    #[test]
    fn test_wrap_right_edge_to_zero() {
        let mut sim = create_sim();
        sim.place_snake(p(608, 64), Direction::Right, &[]);
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(0, 64));
    }

    #[test]
    fn test_wrap_left_edge_to_last_column() {
        let mut sim = create_sim();
        sim.place_snake(p(0, 64), Direction::Left, &[]);
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(608, 64));
    }

    #[test]
    fn test_wrap_vertical_edges() {
        let mut sim = create_sim();
        sim.place_snake(p(64, 448), Direction::Up, &[]);
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(64, 0));

        sim.place_snake(p(64, 0), Direction::Down, &[]);
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(64, 448));
    }

    #[test]
    fn test_eating_apple_scores_and_grows() {
        let mut sim = new_sim(
            WorldSettings::default(),
            ScriptedRandom::new(&[1, 0], 10),
        )
        .unwrap();

        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(32, 0)));

        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(32, 0));
        assert_eq!(sim.score(), 20);
        assert_eq!(body(&sim), vec![p(32, 0)]);
        // Re-rolled in the same frame.
        assert_eq!(sim.apple(), Some(p(320, 320)));

        // The new segment sits under the head until the next step.
        assert_eq!(sim.snapshot().visible_body_segments().count(), 0);

        sim.tick(1.0, &no_keys());
        assert_eq!(sim.snake().head, p(64, 0));
        assert_eq!(body(&sim), vec![p(32, 0)]);
        assert_eq!(
            sim.snapshot().visible_body_segments().collect::<Vec<_>>(),
            vec![p(32, 0)]
        );
    }

    #[test]
    fn test_apple_is_absent_right_after_collision() {
        let mut sim = create_sim();
        sim.set_apple(Some(p(32, 0)));
        sim.update_snake(1.0);
        sim.check_apple_collision();
        assert_eq!(sim.apple(), None);
        assert_eq!(sim.score(), 20);
        assert_eq!(sim.snake().len(), 1);
    }

    #[test]
    fn test_points_per_apple_is_configurable() {
        let settings = WorldSettings {
            points_per_apple: 5,
            ..WorldSettings::default()
        };
        let mut sim = new_sim(settings, ScriptedRandom::constant(10)).unwrap();
        sim.set_apple(Some(p(32, 0)));
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.score(), 5);
    }

    #[test]
    fn test_opposite_direction_is_rejected() {
        let mut sim = create_sim();
        sim.tick(0.25, &PressedKeys::from([Key::Left]));
        assert_eq!(sim.snake().direction, Direction::Right);

        sim.tick(0.75, &PressedKeys::from([Key::Left]));
        assert_eq!(sim.snake().head, p(32, 0));
    }

    #[test]
    fn test_one_turn_per_step() {
        let mut sim = create_sim();
        sim.tick(0.25, &PressedKeys::from([Key::Up]));
        assert_eq!(sim.snake().direction, Direction::Up);

        sim.tick(0.25, &PressedKeys::from([Key::Left]));
        assert_eq!(sim.snake().direction, Direction::Up);

        sim.tick(0.5, &no_keys());
        assert_eq!(sim.snake().head, p(0, 32));

        sim.tick(0.25, &PressedKeys::from([Key::Left]));
        assert_eq!(sim.snake().direction, Direction::Left);
    }

    #[test]
    fn test_turn_priority_skips_rejected_keys() {
        let mut sim = create_sim();
        sim.tick(0.1, &PressedKeys::from([Key::Down, Key::Up, Key::Left, Key::Right]));
        assert_eq!(sim.snake().direction, Direction::Up);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut sim = create_sim();
        // Curled up: moving left from (64, 64) lands on the segment at (32, 64).
        sim.place_snake(
            p(64, 64),
            Direction::Left,
            &[p(32, 64), p(32, 96), p(64, 96)],
        );

        sim.tick(1.0, &no_keys());
        assert_eq!(sim.state(), GameState::GameOver);
        assert_eq!(sim.snake().head, p(32, 64));
        assert!(sim.snapshot().is_game_over());

        let frozen_body = body(&sim);
        for _ in 0..5 {
            sim.tick(1.0, &PressedKeys::from([Key::Up, Key::Down]));
            assert_eq!(sim.snake().head, p(32, 64));
            assert_eq!(body(&sim), frozen_body);
            assert_eq!(sim.state(), GameState::GameOver);
        }
    }

    #[test]
    fn test_fatal_step_still_checks_apple() {
        let mut sim = create_sim();
        sim.place_snake(
            p(64, 64),
            Direction::Left,
            &[p(32, 64), p(32, 96), p(64, 96)],
        );
        // Original placement lets an apple sit under a body segment.
        sim.set_apple(Some(p(32, 64)));

        sim.tick(1.0, &no_keys());
        assert_eq!(sim.state(), GameState::GameOver);
        assert_eq!(sim.score(), 20);
        assert_eq!(sim.snake().len(), 4);
        assert_eq!(
            body(&sim),
            vec![p(32, 64), p(32, 96), p(64, 96), p(64, 64)]
        );
        assert_eq!(sim.apple(), Some(p(320, 320)));
    }

    #[test]
    fn test_collision_checks_pre_shift_body() {
        let mut sim = create_sim();
        // The tail segment at (96, 0) would move away in this step, but the
        // check runs before the shift.
        sim.place_snake(p(64, 0), Direction::Right, &[p(96, 0), p(0, 0), p(32, 0)]);
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.state(), GameState::GameOver);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut sim = create_sim();
        sim.place_snake(
            p(64, 64),
            Direction::Left,
            &[p(32, 64), p(32, 96), p(64, 96)],
        );
        sim.score = 60;
        sim.tick(1.0, &no_keys());
        assert_eq!(sim.state(), GameState::GameOver);

        sim.tick(0.1, &no_keys());
        assert_eq!(sim.state(), GameState::GameOver);

        sim.tick(0.1, &PressedKeys::from([Key::Restart]));
        assert_eq!(sim.state(), GameState::Playing);
        assert_eq!(sim.score(), 0);
        assert!(sim.snake().is_empty());
        assert_eq!(sim.snake().head, Position::ORIGIN);
        assert_eq!(sim.snake().direction, Direction::Right);
        assert!(!sim.snake().direction_locked());
        assert_eq!(sim.apple(), None);

        // Timer is back at a full interval.
        sim.tick(0.75, &no_keys());
        assert_eq!(sim.snake().head, Position::ORIGIN);
        sim.tick(0.25, &no_keys());
        assert_eq!(sim.snake().head, p(32, 0));
    }

    #[test]
    fn test_restart_key_ignored_while_playing() {
        let mut sim = create_sim();
        sim.score = 40;
        sim.tick(0.1, &PressedKeys::from([Key::Restart]));
        assert_eq!(sim.score(), 40);
    }

    #[test]
    fn test_original_placement_allows_apple_on_body() {
        let mut sim =
            new_sim(WorldSettings::default(), ScriptedRandom::new(&[1, 2], 10))
                .unwrap();
        sim.place_snake(p(64, 0), Direction::Up, &[p(32, 64), p(64, 64)]);
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(32, 64)));
    }

    #[test]
    fn test_original_placement_rejects_cell_on_head_and_body() {
        let mut sim =
            new_sim(WorldSettings::default(), ScriptedRandom::new(&[2, 0], 10))
                .unwrap();
        sim.place_snake(p(64, 0), Direction::Up, &[p(64, 0)]);
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(320, 320)));
    }

    #[test]
    fn test_original_placement_allows_apple_on_bare_head() {
        let mut sim =
            new_sim(WorldSettings::default(), ScriptedRandom::new(&[2, 0], 10))
                .unwrap();
        sim.place_snake(p(64, 0), Direction::Up, &[p(64, 32)]);
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(64, 0)));
    }

    #[test]
    fn test_avoid_snake_placement_skips_body_and_head() {
        let settings = WorldSettings {
            apple_placement: ApplePlacement::AvoidSnake,
            ..WorldSettings::default()
        };
        let mut sim =
            new_sim(settings, ScriptedRandom::new(&[1, 2, 2, 0, 3, 3], 10)).unwrap();
        sim.place_snake(p(64, 0), Direction::Up, &[p(32, 64), p(64, 64)]);
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(96, 96)));
    }

    #[test]
    fn test_placement_gives_up_when_every_roll_is_rejected() {
        let settings = WorldSettings {
            apple_placement: ApplePlacement::AvoidSnake,
            ..WorldSettings::default()
        };
        let mut sim = new_sim(settings, ScriptedRandom::constant(0)).unwrap();
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), None);
        assert_eq!(sim.state(), GameState::Playing);
    }

    #[test]
    fn test_random_bounds_exclude_partial_last_cell() {
        let mut sim = new_sim(WorldSettings::default(), ScriptedRandom::constant(u32::MAX))
            .unwrap();
        sim.tick(0.0, &no_keys());
        assert_eq!(sim.apple(), Some(p(608, 448)));
    }

    #[test]
    fn test_frame_uses_clock_delta() {
        let mut sim = create_sim();
        let mut clock = crate::snake::FixedClock::new(0.5);
        sim.frame(&mut clock, &no_keys());
        assert_eq!(sim.snake().head, Position::ORIGIN);
        sim.frame(&mut clock, &no_keys());
        assert_eq!(sim.snake().head, p(32, 0));
    }
}
