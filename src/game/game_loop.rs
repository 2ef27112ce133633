// GameLoop struct
//
// Owns the snake, the food and the random number generator, and sequences one
// fixed-rate tick: input, direction, movement, rendering, food, collision.

use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::Grid;
use crate::input_system::{InputEvent, InputSource};
use crate::render::{Drawable, RenderSink};
use crate::snake::Snake;
use rand::Rng;
use sdl2::pixels::Color;

use super::{FrameClock, SessionStats, TickOutcome};

pub struct GameLoop<R: Rng> {
    grid: Grid,
    snake: Snake,
    /// `None` while the board is full and no food can be placed
    food: Option<Food>,
    food_color: Color,
    rng: R,
    stats: SessionStats,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let grid = config.grid();
        let snake = Snake::new(grid, config.snake_color.into());
        let food_color = config.food_color.into();
        let food = Food::spawn(grid, food_color, &snake.occupied_cells(), &mut rng);

        GameLoop {
            grid,
            snake,
            food,
            food_color,
            rng,
            stats: SessionStats::new(),
        }
    }

    #[cfg(test)]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    #[cfg(test)]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Run one tick with the input events gathered since the last one.
    ///
    /// A quit event ends the game before any simulation work is done.
    pub fn tick(&mut self, events: &[InputEvent], sink: &mut dyn RenderSink) -> Result<TickOutcome, String> {
        if events.contains(&InputEvent::Quit) {
            return Ok(TickOutcome::Quit);
        }

        for event in events {
            if let InputEvent::KeyPress(direction) = *event {
                // Snake::queue_direction re-checks this
                if !self.snake.direction().is_opposite(direction) {
                    self.snake.queue_direction(direction);
                }
            }
        }

        self.snake.apply_queued_direction();
        self.snake.advance();

        sink.fill_background()?;
        self.snake.draw(sink)?;
        if let Some(food) = &self.food {
            food.draw(sink)?;
        }

        self.resolve_food();
        self.resolve_self_collision();

        sink.present();

        self.stats.ticks += 1;
        Ok(TickOutcome::Continue)
    }

    /// Drive ticks at the clock's rate until the input source asks to quit.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        sink: &mut dyn RenderSink,
        clock: &mut FrameClock,
    ) -> Result<SessionStats, String> {
        loop {
            clock.wait();

            let events = input.poll();
            if self.tick(&events, sink)? == TickOutcome::Quit {
                break;
            }
        }

        log::info!(
            "Session over: {} ticks, {} food eaten, {} resets, best length {}",
            self.stats.ticks,
            self.stats.food_eaten,
            self.stats.resets,
            self.stats.best_length
        );

        Ok(self.stats.clone())
    }

    fn resolve_food(&mut self) {
        let head = self.snake.head_cell();
        let eaten = self.food.as_ref().is_some_and(|food| food.position == head);

        if eaten {
            self.snake.grow();
            self.stats.food_eaten += 1;
            log::debug!("Food eaten at {:?}, target length {}", head, self.snake.target_length());

            let occupied = self.snake.occupied_cells();
            match Food::randomize_position(self.grid, &occupied, &mut self.rng) {
                Some(cell) => {
                    if let Some(food) = self.food.as_mut() {
                        food.position = cell;
                    }
                }
                None => {
                    log::warn!("Board is full, growth paused until space frees up");
                    self.food = None;
                }
            }
        } else if self.food.is_none() {
            self.food = Food::spawn(self.grid, self.food_color, &self.snake.occupied_cells(), &mut self.rng);
            if let Some(food) = &self.food {
                log::info!("Space freed up, food placed at {:?}", food.position);
            }
        }
    }

    fn resolve_self_collision(&mut self) {
        self.stats.record_length(self.snake.len());

        if self.snake.collides_with_self() {
            log::info!("Snake ran into itself at length {}, resetting", self.snake.len());
            self.stats.resets += 1;
            self.snake.reset();
        }
    }

    #[cfg(test)]
    fn place_food_at(&mut self, cell: crate::grid::Cell) {
        if let Some(food) = self.food.as_mut() {
            food.position = cell;
        } else {
            self.food = Food::spawn(self.grid, self.food_color, &Default::default(), &mut self.rng);
            self.place_food_at(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Direction};
    use crate::input_system::scripted::ScriptedInput;
    use crate::render::recording::{DrawCommand, RecordingSink};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    const KEY_DOWN: InputEvent = InputEvent::KeyPress(Direction::Down);

    fn new_game(config: &GameConfig) -> GameLoop<StdRng> {
        GameLoop::new(config, StdRng::seed_from_u64(2024))
    }

    fn tick_with(game: &mut GameLoop<StdRng>, events: &[InputEvent]) -> TickOutcome {
        let mut sink = RecordingSink::new();
        game.tick(events, &mut sink).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = new_game(&GameConfig::default());

        assert_eq!(game.snake().head_cell(), Cell::new(16, 12));
        assert_eq!(game.snake().len(), 1);

        let food = game.food().unwrap();
        assert_ne!(food.position, game.snake().head_cell());
    }

    #[test]
    fn test_five_ticks_without_input() {
        let mut game = new_game(&GameConfig::default());
        game.place_food_at(Cell::new(0, 0));

        for step in 1..=5 {
            assert_eq!(tick_with(&mut game, &[]), TickOutcome::Continue);
            assert_eq!(game.snake().head_cell(), Cell::new(16 + step, 12));
            assert_eq!(game.snake().len(), 1);
        }
    }

    #[test]
    fn test_head_wraps_past_right_edge() {
        let mut game = new_game(&GameConfig::default());
        game.place_food_at(Cell::new(0, 0));

        for _ in 0..16 {
            tick_with(&mut game, &[]);
        }

        assert_eq!(game.snake().head_cell(), Cell::new(0, 12));
        assert_eq!(game.snake().len(), 1);
    }

    #[test]
    fn test_eating_food_one_cell_ahead() {
        let mut game = new_game(&GameConfig::default());
        let food_cell = Cell::new(17, 12);
        game.place_food_at(food_cell);

        tick_with(&mut game, &[]);

        let snake = game.snake();
        assert_eq!(snake.target_length(), 2);
        assert_eq!(snake.head_cell(), food_cell);
        assert_eq!(game.stats().food_eaten, 1);

        let food = game.food().unwrap();
        assert_ne!(food.position, food_cell);
        assert!(!snake.positions().contains(&food.position));

        // The body catches up with the target on the next advance
        game.place_food_at(Cell::new(0, 0));
        tick_with(&mut game, &[KEY_DOWN]);

        let snake = game.snake();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.last_removed(), None);
        assert_eq!(snake.positions()[1], food_cell);
    }

    #[test]
    fn test_reverse_key_is_ignored() {
        let mut game = new_game(&GameConfig::default());
        game.place_food_at(Cell::new(0, 0));

        tick_with(&mut game, &[InputEvent::KeyPress(Direction::Left)]);

        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.snake().head_cell(), Cell::new(17, 12));
    }

    #[test]
    fn test_turn_applies_on_same_tick() {
        let mut game = new_game(&GameConfig::default());
        game.place_food_at(Cell::new(0, 0));

        tick_with(&mut game, &[InputEvent::KeyPress(Direction::Up)]);

        assert_eq!(game.snake().direction(), Direction::Up);
        assert_eq!(game.snake().head_cell(), Cell::new(16, 11));
    }

    #[test]
    fn test_quit_stops_before_any_work() {
        let mut game = new_game(&GameConfig::default());
        let mut sink = RecordingSink::new();

        let outcome = game
            .tick(&[InputEvent::KeyPress(Direction::Up), InputEvent::Quit], &mut sink)
            .unwrap();

        assert_eq!(outcome, TickOutcome::Quit);
        assert_eq!(game.snake().head_cell(), Cell::new(16, 12));
        assert_eq!(game.snake().direction(), Direction::Right);
        assert!(sink.commands.is_empty());
        assert_eq!(game.stats().ticks, 0);
    }

    #[test]
    fn test_frame_draw_order() {
        let mut game = new_game(&GameConfig::default());
        game.place_food_at(Cell::new(0, 0));

        let mut sink = RecordingSink::new();
        game.tick(&[], &mut sink).unwrap();

        let green = Color::RGB(0, 255, 0);
        let red = Color::RGB(255, 0, 0);
        assert_eq!(
            sink.last_frame(),
            &[
                DrawCommand::FillBackground,
                DrawCommand::Erase(Cell::new(16, 12)),
                DrawCommand::Cell(Cell::new(17, 12), green),
                DrawCommand::Cell(Cell::new(0, 0), red),
            ]
        );
        assert_eq!(sink.frames_presented(), 1);
    }

    #[test]
    fn test_self_collision_resets_snake() {
        let mut game = new_game(&GameConfig::default());

        // Grow to a target length of 5 heading right
        for col in 17..=20 {
            game.place_food_at(Cell::new(col, 12));
            tick_with(&mut game, &[]);
        }
        game.place_food_at(Cell::new(0, 0));
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.snake().target_length(), 5);

        tick_with(&mut game, &[InputEvent::KeyPress(Direction::Up)]);
        tick_with(&mut game, &[InputEvent::KeyPress(Direction::Left)]);
        assert_eq!(game.stats().resets, 0);

        tick_with(&mut game, &[KEY_DOWN]);

        let snake = game.snake();
        assert_eq!(game.stats().resets, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.head_cell(), Cell::new(16, 12));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(game.stats().best_length, 5);
    }

    #[test]
    fn test_full_board_pauses_growth() {
        let config = GameConfig {
            grid_width: 2,
            grid_height: 1,
            ..GameConfig::default()
        };
        let mut game = new_game(&config);

        // The only free cell on a 2x1 board
        assert_eq!(game.food().unwrap().position, Cell::new(0, 0));

        tick_with(&mut game, &[]);
        assert_eq!(game.food().unwrap().position, Cell::new(1, 0));

        // Snake now covers both cells, so there is nowhere left for food
        assert_eq!(tick_with(&mut game, &[]), TickOutcome::Continue);
        assert_eq!(game.snake().len(), 2);
        assert!(game.food().is_none());

        tick_with(&mut game, &[]);
        assert_eq!(game.stats().resets, 1);

        tick_with(&mut game, &[]);
        assert_eq!(game.food().unwrap().position, Cell::new(1, 0));
    }

    #[test]
    fn test_length_bounded_by_target_over_many_ticks() {
        let mut game = new_game(&GameConfig::default());
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

        for step in 0..500 {
            if step % 3 == 0 {
                let ahead = Cell::new(
                    (game.snake().head_cell().col + 1) % 32,
                    game.snake().head_cell().row,
                );
                if !game.snake().positions().contains(&ahead) {
                    game.place_food_at(ahead);
                }
            }
            let before = game.stats().clone();
            tick_with(&mut game, &[InputEvent::KeyPress(turns[(step / 5) % turns.len()])]);

            let snake = game.snake();
            assert!(snake.len() <= snake.target_length());

            let after = game.stats();
            if after.food_eaten > before.food_eaten && after.resets == before.resets {
                if let Some(food) = game.food() {
                    assert!(!snake.positions().contains(&food.position));
                }
            }
        }
    }

    #[test]
    fn test_run_until_quit() {
        let mut game = new_game(&GameConfig::default());
        game.place_food_at(Cell::new(0, 0));

        let mut input = ScriptedInput::new(vec![vec![], vec![], vec![]]);
        let mut sink = RecordingSink::new();
        let mut clock = FrameClock::new(Duration::ZERO);

        let stats = game.run(&mut input, &mut sink, &mut clock).unwrap();

        assert_eq!(stats.ticks, 3);
        assert_eq!(input.polls, 4);
        assert_eq!(sink.frames_presented(), 3);
        assert_eq!(game.snake().head_cell(), Cell::new(19, 12));
    }
}
