use super::direction::Direction;
use super::field::{Field, Point};
use crate::consts;
use std::collections::VecDeque;

/// The snake: its body and where it is heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake, head first
    pub(super) body: VecDeque<Point>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// A direction change requested since the last move, to be applied on
    /// the next one
    pub(super) pending: Option<Direction>,
}

impl Snake {
    /// Create the starting snake: [`INITIAL_SNAKE_LENGTH`] cells in a row,
    /// with its head on [`INITIAL_HEAD_CELL`], facing right
    ///
    /// [`INITIAL_SNAKE_LENGTH`]: consts::INITIAL_SNAKE_LENGTH
    /// [`INITIAL_HEAD_CELL`]: consts::INITIAL_HEAD_CELL
    pub(super) fn new(field: Field) -> Snake {
        let (col, row) = consts::INITIAL_HEAD_CELL;
        let body = (0..consts::INITIAL_SNAKE_LENGTH)
            .map(|i| field.cell_at(col - i, row))
            .collect();
        Snake {
            body,
            direction: Direction::Right,
            pending: None,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Point {
        *self.body.front().expect("snake body should never be empty")
    }

    /// Return the positions of the cells in the snake, head first
    pub(super) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Request that the snake turn to face `direction` on its next move.
    /// Turning straight back the way the snake is moving is refused.  Returns
    /// whether the request was accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.pending = Some(direction);
            true
        }
    }

    /// Apply any pending turn and move the head forwards one cell, keeping
    /// the tail in place.  Returns the new head position.
    pub(super) fn advance(&mut self, cell: i32) -> Point {
        if let Some(d) = self.pending.take() {
            self.direction = d;
        }
        let head = self.direction.advance(self.head(), cell);
        self.body.push_front(head);
        head
    }

    /// Remove the last cell of the tail
    pub(super) fn shed_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Has the head run into another part of the body?
    pub(super) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }
}
