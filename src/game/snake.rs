use super::direction::Direction;
use crate::board::{Cell, EntityLayer, Point};
use crate::consts;
use std::collections::VecDeque;

/// The player: an ordered run of body segments, head first.
///
/// Growth is governed by a throttle: segments are added (by skipping the
/// tail removal) while `len < target_len`.  Eating raises the target by
/// `growth_interval`, re-arming the throttle; dev commands may also widen
/// the interval to force multi-tick bursts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// Body segments, head at the front
    pub(super) body: VecDeque<Point>,

    /// Length the throttle is growing toward; equal to the length at the
    /// last growth reset plus the interval in force at that point
    pub(super) target_len: usize,

    /// Length gain granted per growth reset
    pub(super) growth_interval: usize,
}

impl Snake {
    /// Spawn a snake of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// heading east with its head at `head`
    pub(super) fn new(head: Point, growth_interval: usize) -> Snake {
        let body = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|i| Point::new(head.x - i as u16, head.y))
            .collect::<VecDeque<_>>();
        // target starts at the spawn length, so nothing grows until the
        // first growth reset no matter how wide the interval is
        let target_len = body.len();
        Snake {
            body,
            target_len,
            growth_interval,
        }
    }

    pub(super) fn head(&self) -> Point {
        *self.body.front().expect("snake body should never be empty")
    }

    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    /// Score is derived from length, never tracked separately
    pub(super) fn score(&self) -> usize {
        self.len() - consts::INITIAL_SNAKE_LENGTH
    }

    /// The direction of travel, inferred from the two foremost segments
    pub(super) fn heading(&self) -> Direction {
        let head = self.body[0];
        let neck = self.body[1];
        if head.x > neck.x {
            Direction::East
        } else if head.x < neck.x {
            Direction::West
        } else if head.y < neck.y {
            Direction::North
        } else {
            Direction::South
        }
    }

    /// Resolve this tick's effective direction: a perpendicular turn command
    /// wins; a parallel or reversal command is ignored; no command means
    /// continue straight.
    pub(super) fn resolve(&self, command: Option<Direction>) -> Direction {
        let heading = self.heading();
        match command {
            Some(turn) if turn != heading && turn != heading.reverse() => turn,
            _ => heading,
        }
    }

    /// Whether the throttle permits another segment this tick
    pub(super) fn growth_pending(&self) -> bool {
        self.len() < self.target_len
    }

    /// Advance the head to `new_head`, dropping the tail unless growth is
    /// pending
    pub(super) fn step_to(&mut self, new_head: Point) {
        if !self.growth_pending() {
            self.body.pop_back();
        }
        self.body.push_front(new_head);
    }

    /// Re-arm the throttle from the current length (eating)
    pub(super) fn begin_growth(&mut self) {
        self.target_len = self.len() + self.growth_interval;
    }

    /// Dev command: re-arm the throttle with a widened interval
    pub(super) fn grow_burst(&mut self, interval: usize) {
        self.growth_interval = interval;
        self.target_len = self.len() + interval;
    }

    /// Dev command: restore the default interval and halt any in-flight
    /// burst
    pub(super) fn reset_growth(&mut self) {
        self.growth_interval = consts::GROWTH_INTERVAL;
        self.target_len = self.target_len.min(self.len());
    }

    /// Does the head coincide with any other body segment?
    pub(super) fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }

    pub(super) fn occupies(&self, pos: Point) -> bool {
        self.body.contains(&pos)
    }

    pub(super) fn layer(&self) -> EntityLayer {
        EntityLayer::Multiple(
            self.body
                .iter()
                .map(|&pos| Cell::new(pos, consts::SNAKE_SYMBOL))
                .collect(),
        )
    }
}
