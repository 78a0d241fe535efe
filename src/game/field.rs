use crate::consts;
use thiserror::Error;

/// A position on the playing field, measured in field units.  Positions
/// produced by the game are always multiples of the cell size, but may lie
/// outside of the field after the snake has run into a wall.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// Geometry of the playing field: a `width` × `height` rectangle divided into
/// square cells of side `cell`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    pub(super) width: i32,
    pub(super) height: i32,
    pub(super) cell: i32,
}

impl Field {
    /// The smallest number of columns & rows a field can have; anything
    /// smaller can't hold the starting snake.
    pub(crate) const MIN_COLUMNS: u32 = consts::INITIAL_HEAD_CELL.0.unsigned_abs() + 1;
    pub(crate) const MIN_ROWS: u32 = consts::INITIAL_HEAD_CELL.1.unsigned_abs() + 1;

    /// The largest number of columns & rows a field can have
    pub(crate) const MAX_COLUMNS: u32 = 1000;
    pub(crate) const MAX_ROWS: u32 = 1000;

    /// Construct a field, checking that the cell size is nonzero, that it
    /// evenly divides both dimensions, and that the field is neither too
    /// small nor too large.
    pub(crate) fn new(width: u32, height: u32, cell: u32) -> Result<Field, FieldError> {
        if cell == 0 {
            return Err(FieldError::ZeroCell);
        }
        for (dimension, length) in [("width", width), ("height", height)] {
            if length % cell != 0 {
                return Err(FieldError::Misaligned {
                    dimension,
                    length,
                    cell,
                });
            }
        }
        let columns = width / cell;
        let rows = height / cell;
        if columns < Field::MIN_COLUMNS || rows < Field::MIN_ROWS {
            return Err(FieldError::TooSmall { columns, rows });
        }
        if columns > Field::MAX_COLUMNS || rows > Field::MAX_ROWS {
            return Err(FieldError::TooLarge { columns, rows });
        }
        let (Ok(width), Ok(height), Ok(cell)) = (
            i32::try_from(width),
            i32::try_from(height),
            i32::try_from(cell),
        ) else {
            return Err(FieldError::OutOfRange);
        };
        Ok(Field {
            width,
            height,
            cell,
        })
    }

    pub(crate) fn width(self) -> i32 {
        self.width
    }

    pub(crate) fn height(self) -> i32 {
        self.height
    }

    pub(crate) fn cell(self) -> i32 {
        self.cell
    }

    pub(crate) fn columns(self) -> i32 {
        self.width / self.cell
    }

    pub(crate) fn rows(self) -> i32 {
        self.height / self.cell
    }

    /// The point at the middle of the field (not necessarily cell-aligned)
    pub(crate) fn center(self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// Is `p` inside the field?
    pub(crate) fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Return the position of the cell at column `col` and row `row`
    pub(crate) fn cell_at(self, col: i32, row: i32) -> Point {
        Point::new(col * self.cell, row * self.cell)
    }

    /// Iterate over the positions of all cells in the field in row-major
    /// order
    pub(crate) fn cells(self) -> impl Iterator<Item = Point> {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}

impl Default for Field {
    fn default() -> Field {
        Field {
            width: consts::FIELD_WIDTH,
            height: consts::FIELD_HEIGHT,
            cell: consts::CELL_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum FieldError {
    #[error("cell size must be nonzero")]
    ZeroCell,
    #[error("field {dimension} {length} is not a multiple of the cell size {cell}")]
    Misaligned {
        dimension: &'static str,
        length: u32,
        cell: u32,
    },
    #[error(
        "field must be at least {min_columns}x{min_rows} cells, but it is {columns}x{rows}",
        min_columns = Field::MIN_COLUMNS,
        min_rows = Field::MIN_ROWS
    )]
    TooSmall { columns: u32, rows: u32 },
    #[error(
        "field must be at most {max_columns}x{max_rows} cells, but it is {columns}x{rows}",
        max_columns = Field::MAX_COLUMNS,
        max_rows = Field::MAX_ROWS
    )]
    TooLarge { columns: u32, rows: u32 },
    #[error("field dimensions are out of range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_field() {
        let field = Field::default();
        assert_eq!(Field::new(600, 400, 20), Ok(field));
        assert_eq!(field.columns(), 30);
        assert_eq!(field.rows(), 20);
        assert_eq!(field.center(), Point::new(300, 200));
    }

    #[rstest]
    #[case(600, 400, 0, FieldError::ZeroCell)]
    #[case(610, 400, 20, FieldError::Misaligned { dimension: "width", length: 610, cell: 20 })]
    #[case(600, 390, 20, FieldError::Misaligned { dimension: "height", length: 390, cell: 20 })]
    #[case(100, 400, 20, FieldError::TooSmall { columns: 5, rows: 20 })]
    #[case(600, 0, 20, FieldError::TooSmall { columns: 30, rows: 0 })]
    #[case(1001, 400, 1, FieldError::TooLarge { columns: 1001, rows: 400 })]
    #[case(600, 20_020, 20, FieldError::TooLarge { columns: 30, rows: 1001 })]
    #[case(4_294_967_280, 400, 20, FieldError::TooLarge { columns: 214_748_364, rows: 20 })]
    #[case(3_000_000_000, 3_000_000_000, 3_000_000, FieldError::OutOfRange)]
    fn invalid_field(
        #[case] width: u32,
        #[case] height: u32,
        #[case] cell: u32,
        #[case] err: FieldError,
    ) {
        assert_eq!(Field::new(width, height, cell), Err(err));
    }

    #[test]
    fn too_small_message() {
        let err = FieldError::TooSmall {
            columns: 5,
            rows: 20,
        };
        assert_eq!(err.to_string(), "field must be at least 6x6 cells, but it is 5x20");
    }

    #[test]
    fn too_large_message() {
        let err = FieldError::TooLarge {
            columns: 30,
            rows: 1001,
        };
        assert_eq!(err.to_string(), "field must be at most 1000x1000 cells, but it is 30x1001");
    }

    #[test]
    fn largest_field() {
        let field = Field::new(1000, 1000, 1).unwrap();
        assert_eq!(field.columns(), 1000);
        assert_eq!(field.rows(), 1000);
    }

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(580, 380), true)]
    #[case(Point::new(600, 100), false)]
    #[case(Point::new(100, 400), false)]
    #[case(Point::new(-20, 100), false)]
    #[case(Point::new(100, -20), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        assert_eq!(Field::default().contains(p), inside);
    }

    #[test]
    fn cells_cover_field() {
        let field = Field::new(120, 140, 20).unwrap();
        let cells = field.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 42);
        assert_eq!(cells.first(), Some(&Point::new(0, 0)));
        assert_eq!(cells.get(1), Some(&Point::new(20, 0)));
        assert_eq!(cells.get(6), Some(&Point::new(0, 20)));
        assert_eq!(cells.last(), Some(&Point::new(100, 120)));
        assert!(cells.iter().all(|&p| field.contains(p)));
    }
}
