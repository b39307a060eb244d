mod direction;
mod food;
mod snake;
pub(crate) use self::direction::{Axis, Direction};
pub(crate) use self::food::PlacementError;
use self::food::Food;
use self::snake::Snake;
use crate::board::{Board, Point};
use crate::clock::FrameClock;
use crate::command::Command;
use crate::consts;
use crate::input::{self, TermGuard};
use crate::options::Options;
use anyhow::Context;
use crossterm::terminal::ClearType;
use crossterm::{cursor, queue, style, terminal};
use rand::Rng;
use std::fmt::Write as _;
use std::io::{self, Write};

/// One whole game of snake: the board, the entities, the pacing clock, and
/// the per-tick control flow that ties them together.
///
/// All mutable state lives here and is threaded through the single loop
/// thread; the bounded key wait in [`input::read_key`] is the only
/// suspension point per tick.
#[derive(Debug)]
pub(crate) struct GameSession<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    food: Food,
    clock: FrameClock,
    dev_mode: bool,
    relocate_food: bool,
    total_frames: u64,
    /// The most recently drawn board, kept so the game-over screen shows
    /// the state before the fatal move rather than the head inside a wall
    last_board: String,
}

impl GameSession {
    pub(crate) fn new(options: &Options) -> Result<GameSession, PlacementError> {
        GameSession::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub(crate) fn new_with_rng(
        options: &Options,
        mut rng: R,
    ) -> Result<GameSession<R>, PlacementError> {
        let board = Board::new(options.width, options.height);
        let spawn = Point::new(options.width / 2, options.height / 2);
        let snake = Snake::new(spawn, options.growth_interval);
        let food = Food::place(&mut rng, &board, &snake)?;
        let mut game = GameSession {
            rng,
            board,
            snake,
            food,
            clock: FrameClock::new(options.fps, options.fps_factor),
            dev_mode: false,
            relocate_food: false,
            total_frames: 0,
            last_board: String::new(),
        };
        game.last_board = game.render_board();
        Ok(game)
    }

    /// Play until the player quits or the snake collides.  The terminal is
    /// modified for the duration and restored on every exit path.
    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TermGuard::acquire().context("failed to prepare the terminal")?;
        let outcome = self.run_loop();
        guard.restore();
        outcome
    }

    fn run_loop(&mut self) -> anyhow::Result<()> {
        let mut stdout = io::stdout();
        let mut timeout = consts::DEFAULT_POLL_TIMEOUT;
        loop {
            self.clock.begin_frame();
            let command = input::read_key(timeout)?.and_then(Command::from_key_event);
            let turn = match self.apply_command(command) {
                Flow::Quit => return Ok(()),
                Flow::Turn(turn) => turn,
            };
            match self.advance(turn)? {
                TickOutcome::Collision => {
                    // final frame: summary line over the board as last drawn
                    draw_screen(&mut stdout, &self.game_over_screen())?;
                    return Ok(());
                }
                TickOutcome::Alive => (),
            }
            let screen = self.frame_screen();
            draw_screen(&mut stdout, &screen)?;
            self.total_frames += 1;
            timeout = self.clock.end_frame_and_wait();
        }
    }

    /// Apply one tick's command, returning the turn request (if any) for the
    /// movement step.  Dev commands are no-ops until the one-way dev-mode
    /// latch has been set.
    fn apply_command(&mut self, command: Option<Command>) -> Flow {
        let Some(command) = command else {
            return Flow::Turn(None);
        };
        if command.is_dev() && !self.dev_mode {
            return Flow::Turn(None);
        }
        match command {
            Command::Quit => return Flow::Quit,
            Command::Turn(direction) => return Flow::Turn(Some(direction)),
            Command::EnableDevMode => self.dev_mode = true,
            Command::GrowBurst => self.snake.grow_burst(consts::GROW_BURST),
            Command::GrowBurstLarge => self.snake.grow_burst(consts::GROW_BURST_LARGE),
            Command::GrowReset => self.snake.reset_growth(),
            Command::SpeedUp => self.clock.speed_up(),
            Command::SpeedUpSmall => self.clock.speed_up_small(),
            Command::RelocateFood => self.relocate_food = true,
        }
        Flow::Turn(None)
    }

    /// One state transition: resolve the direction, move the snake (growing
    /// if it eats), then run the collision checks.  Food is relocated after
    /// the move so the new body is excluded.
    fn advance(&mut self, turn: Option<Direction>) -> Result<TickOutcome, PlacementError> {
        let direction = self.snake.resolve(turn);
        self.clock.set_axis(direction.axis());
        let Some(new_head) = direction.advance(self.snake.head()) else {
            return Ok(TickOutcome::Collision);
        };
        if new_head == self.food.pos {
            self.snake.begin_growth();
            self.relocate_food = true;
        }
        self.snake.step_to(new_head);
        if self.board.is_wall(new_head) || self.snake.self_collision() {
            return Ok(TickOutcome::Collision);
        }
        if self.relocate_food {
            self.food.relocate(&mut self.rng, &self.board, &self.snake)?;
            self.relocate_food = false;
        }
        Ok(TickOutcome::Alive)
    }

    /// Render the per-tick screen, refreshing the board cache the game-over
    /// screen reads from
    fn frame_screen(&mut self) -> String {
        self.last_board = self.render_board();
        format!("{}\n{}", self.stats_line(), self.last_board)
    }

    fn game_over_screen(&self) -> String {
        let mut line = format!(
            "{}{} Game Over > Score: {:0pad$}",
            consts::LEFT_MARGIN,
            consts::GAME_TITLE,
            self.snake.score(),
            pad = consts::STAT_PAD,
        );
        if self.dev_mode {
            line.push_str(" [DevMode]");
        }
        format!("{line}\n{}", self.last_board)
    }

    fn stats_line(&self) -> String {
        let mut line = format!(
            "{}{} points: {:0pad$}",
            consts::LEFT_MARGIN,
            consts::GAME_TITLE,
            self.snake.score(),
            pad = consts::STAT_PAD,
        );
        if self.dev_mode {
            let _ = write!(
                line,
                ", length: {:0pad$}, total frames: {:0pad$}, FPS: {:0pad$}",
                self.snake.len(),
                self.total_frames,
                self.clock.fps(),
                pad = consts::STAT_PAD,
            );
        }
        line
    }

    fn render_board(&self) -> String {
        self.board.render(&[self.food.layer(), self.snake.layer()])
    }
}

/// Replace the visible output area with `screen`.  Lines are emitted one at
/// a time because raw mode leaves `\n` without an implicit carriage return.
fn draw_screen<W: Write>(out: &mut W, screen: &str) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in screen.split('\n') {
        queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
    }
    out.flush()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Quit,
    Turn(Option<Direction>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TickOutcome {
    Alive,
    Collision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn session() -> GameSession<ChaCha12Rng> {
        GameSession::new_with_rng(&Options::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
            .unwrap()
    }

    #[test]
    fn spawn_state() {
        let game = session();
        assert_eq!(
            game.snake.body,
            [Point::new(40, 12), Point::new(39, 12), Point::new(38, 12)],
        );
        assert!(game.board.is_interior(game.food.pos));
        assert!(!game.snake.occupies(game.food.pos));
        assert_eq!(game.snake.score(), 0);
    }

    #[test]
    fn straight_tick() {
        let mut game = session();
        game.food.pos = Point::new(10, 10);
        assert_eq!(game.advance(None).unwrap(), TickOutcome::Alive);
        assert_eq!(
            game.snake.body,
            [Point::new(41, 12), Point::new(40, 12), Point::new(39, 12)],
        );
        assert_eq!(game.snake.score(), 0);
    }

    #[test]
    fn reversal_command_is_a_no_op() {
        let mut game = session();
        game.food.pos = Point::new(10, 10);
        assert_eq!(
            game.advance(Some(Direction::West)).unwrap(),
            TickOutcome::Alive
        );
        assert_eq!(game.snake.head(), Point::new(41, 12));
    }

    #[test]
    fn eating_grows_and_relocates() {
        let mut game = session();
        game.food.pos = Point::new(41, 12);
        assert_eq!(game.advance(None).unwrap(), TickOutcome::Alive);
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.snake.score(), 1);
        let food = game.food.pos;
        assert_ne!(food, Point::new(41, 12));
        assert!((1..=78).contains(&food.x));
        assert!((1..=22).contains(&food.y));
        assert!(!game.snake.occupies(food));
    }

    #[test]
    fn wall_collision_ends_the_tick() {
        let mut game = session();
        game.food.pos = Point::new(10, 10);
        game.snake.body =
            VecDeque::from([Point::new(78, 12), Point::new(77, 12), Point::new(76, 12)]);
        assert_eq!(game.advance(None).unwrap(), TickOutcome::Collision);
        assert_eq!(game.snake.head(), Point::new(79, 12));
        assert_eq!(game.snake.score(), 0);
    }

    #[test]
    fn self_collision_ends_the_tick() {
        let mut game = session();
        game.food.pos = Point::new(10, 10);
        game.snake.body = VecDeque::from([
            Point::new(40, 12),
            Point::new(39, 12),
            Point::new(39, 11),
            Point::new(40, 11),
            Point::new(41, 11),
        ]);
        assert_eq!(
            game.advance(Some(Direction::North)).unwrap(),
            TickOutcome::Collision
        );
    }

    #[test]
    fn score_tracks_length() {
        let mut game = session();
        for _ in 0..10 {
            game.food.pos = game
                .snake
                .heading()
                .advance(game.snake.head())
                .unwrap();
            assert_eq!(game.advance(None).unwrap(), TickOutcome::Alive);
            assert_eq!(game.snake.score(), game.snake.len() - 3);
        }
        assert_eq!(game.snake.score(), 10);
    }

    #[test]
    fn dev_commands_require_the_latch() {
        let mut game = session();
        assert_eq!(game.apply_command(Some(Command::GrowBurst)), Flow::Turn(None));
        assert_eq!(game.snake.growth_interval, consts::GROWTH_INTERVAL);
        assert_eq!(
            game.apply_command(Some(Command::EnableDevMode)),
            Flow::Turn(None)
        );
        assert!(game.dev_mode);
        assert_eq!(game.apply_command(Some(Command::GrowBurst)), Flow::Turn(None));
        assert_eq!(game.snake.growth_interval, consts::GROW_BURST);
    }

    #[test]
    fn quit_and_turn_flow() {
        let mut game = session();
        assert_eq!(game.apply_command(Some(Command::Quit)), Flow::Quit);
        assert_eq!(
            game.apply_command(Some(Command::Turn(Direction::North))),
            Flow::Turn(Some(Direction::North))
        );
        assert_eq!(game.apply_command(None), Flow::Turn(None));
    }

    #[test]
    fn dev_relocate_moves_the_food() {
        let mut game = session();
        game.dev_mode = true;
        game.food.pos = Point::new(10, 10);
        game.apply_command(Some(Command::RelocateFood));
        assert!(game.relocate_food);
        assert_eq!(game.advance(None).unwrap(), TickOutcome::Alive);
        assert_ne!(game.food.pos, Point::new(10, 10));
        assert!(!game.relocate_food);
    }

    #[test]
    fn frame_screen_layout() {
        let mut game =
            GameSession::new_with_rng(&small_options(), ChaCha12Rng::seed_from_u64(RNG_SEED))
                .unwrap();
        game.food.pos = Point::new(2, 2);
        assert_eq!(
            game.frame_screen(),
            concat!(
                " & Sidewinder > points: 0000\n",
                " ############\n",
                " #          #\n",
                " # *        #\n",
                " #          #\n",
                " #   &&&    #\n",
                " #          #\n",
                " #          #\n",
                " ############",
            ),
        );
        assert_eq!(game.frame_screen(), game.frame_screen());
    }

    #[test]
    fn game_over_screen_carries_the_score() {
        let mut game = session();
        let line = game.game_over_screen();
        assert!(line.starts_with(" & Sidewinder > Game Over > Score: 0000\n"));
        assert!(!line.contains("[DevMode]"));
        game.dev_mode = true;
        assert!(game
            .game_over_screen()
            .starts_with(" & Sidewinder > Game Over > Score: 0000 [DevMode]\n"));
    }

    #[test]
    fn game_over_keeps_the_last_drawn_board() {
        let mut game =
            GameSession::new_with_rng(&small_options(), ChaCha12Rng::seed_from_u64(RNG_SEED))
                .unwrap();
        game.food.pos = Point::new(2, 2);
        game.snake.body =
            VecDeque::from([Point::new(10, 4), Point::new(9, 4), Point::new(8, 4)]);
        let _ = game.frame_screen();
        assert_eq!(game.advance(None).unwrap(), TickOutcome::Collision);
        // the head that hit the wall is not drawn over it
        assert_eq!(
            game.game_over_screen(),
            concat!(
                " & Sidewinder > Game Over > Score: 0000\n",
                " ############\n",
                " #          #\n",
                " # *        #\n",
                " #          #\n",
                " #       &&&#\n",
                " #          #\n",
                " #          #\n",
                " ############",
            ),
        );
    }

    #[test]
    fn dev_stats_line() {
        let mut game = session();
        game.dev_mode = true;
        game.total_frames = 7;
        assert_eq!(
            game.stats_line(),
            " & Sidewinder > points: 0000, length: 0003, total frames: 0007, FPS: 0016",
        );
    }

    fn small_options() -> Options {
        Options {
            width: 12,
            height: 8,
            ..Options::default()
        }
    }
}
