//! Assorted constants & hard-coded configuration
use std::time::Duration;

/// Title shown in the stats line and on the game-over screen
pub(crate) const GAME_TITLE: &str = "& Sidewinder >";

/// Left margin prefixed to every rendered row and status line
pub(crate) const LEFT_MARGIN: &str = " ";

/// Glyph for the snake's head and body segments
pub(crate) const SNAKE_SYMBOL: char = '&';

/// Glyph for the food dot
pub(crate) const FOOD_SYMBOL: char = '*';

/// Glyph for the frame wall around the board
pub(crate) const WALL_SYMBOL: char = '#';

/// Glyph for empty board cells
pub(crate) const BACKGROUND_SYMBOL: char = ' ';

/// Default board width in cells, wall included
pub(crate) const BOARD_WIDTH: u16 = 80;

/// Default board height in cells, wall included
pub(crate) const BOARD_HEIGHT: u16 = 24;

/// Smallest playable board width
pub(crate) const MIN_BOARD_WIDTH: u16 = 10;

/// Smallest playable board height
pub(crate) const MIN_BOARD_HEIGHT: u16 = 8;

/// Default target frame rate while the snake moves east or west
pub(crate) const FPS_HORIZONTAL: u32 = 16;

/// Default vertical/horizontal frame-rate ratio.  Terminal cells are taller
/// than they are wide, so vertical movement is paced slower to keep the
/// apparent speed uniform.
pub(crate) const FPS_FACTOR: f64 = 0.65;

/// Snake length at spawn
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default growth permitted per throttle reset (1 food = 1 cell)
pub(crate) const GROWTH_INTERVAL: usize = 1;

/// Growth burst granted by the `i` dev command
pub(crate) const GROW_BURST: usize = 40;

/// Growth burst granted by the `u` dev command
pub(crate) const GROW_BURST_LARGE: usize = 140;

/// Horizontal frame rate set by the `e` dev command
pub(crate) const DEV_FPS: u32 = 25;

/// Input-poll timeout used before the frame clock has produced one
pub(crate) const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(200);

/// Floor for the adaptive input-poll timeout
pub(crate) const MIN_POLL_TIMEOUT: Duration = Duration::from_millis(1);

/// A frame slower than this resets the timing baseline instead of sleeping
pub(crate) const STALL_LIMIT: Duration = Duration::from_secs(1);

/// Attempt cap for the food-placement rejection sampler
pub(crate) const PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Digits used when zero-padding the score and dev-mode stats
pub(crate) const STAT_PAD: usize = 4;
