mod scene;
pub(crate) use self::scene::Scene;
use crate::consts;
use crate::game::{Game, GameState, Point};
use enum_map::Enum;
use ratatui::style::Color;
use serde::Deserialize;

/// A category of shapes on a [`Surface`] that are cleared & redrawn together.
/// Layers are drawn in declaration order.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Layer {
    Snake,
    Food,
    Overlay,
}

/// Text labels displayed outside of the playing field
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Label {
    /// The current score
    Score,

    /// The caption of the button that pauses & resumes the game
    PauseButton,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Font {
    Normal,
    Banner,
}

/// An axis-aligned rectangle in field units
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Bounds {
    /// The bounds of the grid cell whose top-left corner is at `p`
    pub(crate) fn cell(p: Point, size: i32) -> Bounds {
        Bounds {
            x: p.x,
            y: p.y,
            width: size,
            height: size,
        }
    }
}

/// Something that the game can be drawn on.  Coordinates are in field units.
pub(crate) trait Surface {
    /// Erase everything previously drawn on `layer`
    fn clear(&mut self, layer: Layer);

    fn fill_rect(&mut self, layer: Layer, bounds: Bounds, color: Color);

    fn fill_ellipse(&mut self, layer: Layer, bounds: Bounds, color: Color);

    /// Draw `content` centered on `anchor`.  `content` may contain multiple
    /// lines.
    fn text(&mut self, layer: Layer, anchor: Point, content: &str, font: Font, color: Color);

    fn set_label(&mut self, label: Label, content: &str);
}

/// Colors used for drawing the game
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Palette {
    pub(crate) snake: Color,
    pub(crate) food: Color,
    pub(crate) text: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            snake: consts::SNAKE_COLOR,
            food: consts::FOOD_COLOR,
            text: consts::TEXT_COLOR,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub(crate) fn new(palette: Palette) -> Renderer {
        Renderer { palette }
    }

    /// Draw the current state of `game` on `surface`, replacing whatever was
    /// drawn before
    pub(crate) fn render<R, S: Surface>(&self, game: &Game<R>, surface: &mut S) {
        let cell = game.field().cell();
        surface.clear(Layer::Snake);
        for p in game.segments() {
            surface.fill_rect(Layer::Snake, Bounds::cell(p, cell), self.palette.snake);
        }
        surface.clear(Layer::Food);
        if let Some(food) = game.food() {
            surface.fill_ellipse(Layer::Food, Bounds::cell(food, cell), self.palette.food);
        }
        surface.set_label(Label::Score, &format!("Score: {}", game.score()));
        surface.clear(Layer::Overlay);
        let center = game.field().center();
        match game.state() {
            GameState::Playing => surface.set_label(Label::PauseButton, "Pause"),
            GameState::Paused => {
                surface.set_label(Label::PauseButton, "Play");
                surface.text(
                    Layer::Overlay,
                    center,
                    "Paused",
                    Font::Normal,
                    self.palette.text,
                );
            }
            GameState::GameOver => {
                surface.set_label(Label::PauseButton, "Pause");
                surface.text(
                    Layer::Overlay,
                    center,
                    &format!("Game Over\nScore: {}", game.score()),
                    Font::Banner,
                    self.palette.text,
                );
            }
        }
    }
}
