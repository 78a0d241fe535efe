//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Default width of the playing field, in field units
pub(crate) const FIELD_WIDTH: i32 = 600;

/// Default height of the playing field, in field units
pub(crate) const FIELD_HEIGHT: i32 = 400;

/// Default side length of a grid cell, in field units
pub(crate) const CELL_SIZE: i32 = 20;

/// Column & row of the cell on which the snake's head starts
pub(crate) const INITIAL_HEAD_CELL: (i32, i32) = (5, 5);

/// Number of cells in the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Number of terminal columns used to draw one cell of the field, so that
/// cells come out roughly square
pub(crate) const COLUMNS_PER_CELL: u16 = 2;

/// Glyph for filled rectangles (the snake's segments)
pub(crate) const FILL_SYMBOL: char = '█';

/// Glyph for filled ellipses (the food)
pub(crate) const ELLIPSE_SYMBOL: char = '●';

/// Default color of the snake
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Default color of the food
pub(crate) const FOOD_COLOR: Color = Color::Red;

/// Default color of text drawn over the field
pub(crate) const TEXT_COLOR: Color = Color::White;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
