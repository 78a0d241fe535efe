use super::field::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the point one step of `distance` away from `pos` in this
    /// direction
    pub(crate) fn advance(self, pos: Point, distance: i32) -> Point {
        let Point { x, y } = pos;
        match self {
            Direction::Up => Point::new(x, y - distance),
            Direction::Down => Point::new(x, y + distance),
            Direction::Left => Point::new(x - distance, y),
            Direction::Right => Point::new(x + distance, y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
