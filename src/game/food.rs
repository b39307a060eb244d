use super::snake::Snake;
use crate::board::{Board, Cell, EntityLayer, Point};
use crate::consts;
use rand::Rng;
use thiserror::Error;

/// The food dot.  Always strictly interior, never on a snake segment, and
/// never re-placed onto its own previous position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) pos: Point,
}

impl Food {
    /// Place the first dot of the session
    pub(super) fn place<R: Rng>(
        rng: &mut R,
        board: &Board,
        snake: &Snake,
    ) -> Result<Food, PlacementError> {
        sample(rng, board, snake, None).map(|pos| Food { pos })
    }

    /// Move the dot after it has been eaten (or on the dev relocate command)
    pub(super) fn relocate<R: Rng>(
        &mut self,
        rng: &mut R,
        board: &Board,
        snake: &Snake,
    ) -> Result<(), PlacementError> {
        self.pos = sample(rng, board, snake, Some(self.pos))?;
        Ok(())
    }

    pub(super) fn layer(&self) -> EntityLayer {
        EntityLayer::Single(Cell::new(self.pos, consts::FOOD_SYMBOL))
    }
}

/// Rejection-sample a free interior cell.  The attempt cap turns a
/// degenerate near-full board into a reportable error instead of a hang.
fn sample<R: Rng>(
    rng: &mut R,
    board: &Board,
    snake: &Snake,
    previous: Option<Point>,
) -> Result<Point, PlacementError> {
    for _ in 0..consts::PLACEMENT_ATTEMPTS {
        let pos = Point::new(
            rng.random_range(1..=board.width() - 2),
            rng.random_range(1..=board.height() - 2),
        );
        if snake.occupies(pos) || previous == Some(pos) {
            continue;
        }
        return Ok(pos);
    }
    Err(PlacementError {
        attempts: consts::PLACEMENT_ATTEMPTS,
    })
}

#[derive(Debug, Error)]
#[error("no free cell found for the food after {attempts} attempts")]
pub(crate) struct PlacementError {
    attempts: u32,
}
