use super::{Bounds, Font, Label, Layer, Surface};
use crate::consts;
use crate::game::{Field, Point};
use crate::util::center_rect;
use enum_map::EnumMap;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A [`Surface`] that records what is drawn on it, layer by layer, so that it
/// can be displayed in a terminal as a [`Widget`].
///
/// The scene is laid out as a score bar, the playing field inside a border,
/// and a bar of buttons.  Each cell of the field takes up
/// [`COLUMNS_PER_CELL`][consts::COLUMNS_PER_CELL] columns and one row of the
/// terminal.  Anything drawn outside of the field is clipped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scene {
    field: Field,
    layers: EnumMap<Layer, Vec<Shape>>,
    labels: EnumMap<Label, String>,
}

impl Scene {
    pub(crate) fn new(field: Field) -> Scene {
        Scene {
            field,
            layers: EnumMap::default(),
            labels: EnumMap::default(),
        }
    }

    /// The size of the terminal area needed to show the entire scene
    pub(crate) fn size(&self) -> Size {
        let columns = u16::try_from(self.field.columns()).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.field.rows()).unwrap_or(u16::MAX);
        Size {
            width: columns
                .saturating_mul(consts::COLUMNS_PER_CELL)
                .saturating_add(2),
            height: rows.saturating_add(4),
        }
    }

    #[cfg(test)]
    pub(crate) fn shapes(&self, layer: Layer) -> &[Shape] {
        &self.layers[layer]
    }

    #[cfg(test)]
    pub(crate) fn label(&self, label: Label) -> &str {
        &self.labels[label]
    }
}

impl Surface for Scene {
    fn clear(&mut self, layer: Layer) {
        self.layers[layer].clear();
    }

    fn fill_rect(&mut self, layer: Layer, bounds: Bounds, color: Color) {
        self.layers[layer].push(Shape::Rect { bounds, color });
    }

    fn fill_ellipse(&mut self, layer: Layer, bounds: Bounds, color: Color) {
        self.layers[layer].push(Shape::Ellipse { bounds, color });
    }

    fn text(&mut self, layer: Layer, anchor: Point, content: &str, font: Font, color: Color) {
        self.layers[layer].push(Shape::Text {
            anchor,
            content: content.to_owned(),
            font,
            color,
        });
    }

    fn set_label(&mut self, label: Label, content: &str) {
        content.clone_into(&mut self.labels[label]);
    }
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, self.size());
        let [score_area, field_area, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" {}", self.labels[Label::Score]),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        Block::bordered().render(field_area, buf);
        let mut canvas = Canvas {
            area: field_area.inner(Margin::new(1, 1)),
            cell: self.field.cell(),
            buf,
        };
        for shapes in self.layers.values() {
            for shape in shapes {
                canvas.draw(shape);
            }
        }

        Line::from_iter([
            Span::raw(" Restart ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(") — "),
            Span::raw(self.labels[Label::PauseButton].as_str()),
            Span::raw(" ("),
            Span::styled("p", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(button_area, buf);
    }
}

/// A primitive drawn on a [`Scene`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Shape {
    Rect {
        bounds: Bounds,
        color: Color,
    },
    Ellipse {
        bounds: Bounds,
        color: Color,
    },
    Text {
        anchor: Point,
        content: String,
        font: Font,
        color: Color,
    },
}

/// The region of a buffer in which the playing field is drawn.  Positions
/// passed to `put()` are terminal cells relative to the top-left corner of
/// the region.
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    cell: i32,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw(&mut self, shape: &Shape) {
        match *shape {
            Shape::Rect { bounds, color } => {
                self.fill(bounds, consts::FILL_SYMBOL, consts::COLUMNS_PER_CELL, color);
            }
            Shape::Ellipse { bounds, color } => self.fill(bounds, consts::ELLIPSE_SYMBOL, 1, color),
            Shape::Text {
                anchor,
                ref content,
                font,
                color,
            } => {
                let style = match font {
                    Font::Normal => Style::new().fg(color),
                    Font::Banner => Style::new().fg(color).add_modifier(Modifier::BOLD),
                };
                self.text(anchor, content, style);
            }
        }
    }

    /// Draw `symbol` on the first `span` terminal columns of every field
    /// cell that `bounds` overlaps
    fn fill(&mut self, bounds: Bounds, symbol: char, span: u16, color: Color) {
        if bounds.width <= 0 || bounds.height <= 0 {
            return;
        }
        let style = Style::new().fg(color);
        let first_col = bounds.x.div_euclid(self.cell);
        let last_col = (bounds.x + bounds.width - 1).div_euclid(self.cell);
        let first_row = bounds.y.div_euclid(self.cell);
        let last_row = (bounds.y + bounds.height - 1).div_euclid(self.cell);
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let x = col * i32::from(consts::COLUMNS_PER_CELL);
                for dx in 0..i32::from(span) {
                    self.put(x + dx, row, symbol, style);
                }
            }
        }
    }

    fn text(&mut self, anchor: Point, content: &str, style: Style) {
        let center_x = (anchor.x * i32::from(consts::COLUMNS_PER_CELL)).div_euclid(self.cell);
        let center_y = anchor.y.div_euclid(self.cell);
        let qty = i32::try_from(content.lines().count()).unwrap_or(i32::MAX);
        for (y, line) in (center_y - qty / 2..).zip(content.lines()) {
            let width = i32::try_from(line.width()).unwrap_or(i32::MAX);
            let mut x = center_x - width / 2;
            for ch in line.chars() {
                self.put(x, y, ch, style);
                x += ch.width().map_or(0, |w| i32::try_from(w).unwrap_or(0));
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, symbol: char, style: Style) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((self.area.x + x, self.area.y + y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small_scene() -> Scene {
        let mut scene = Scene::new(Field::new(360, 140, 20).unwrap());
        scene.set_label(Label::Score, "Score: 2");
        scene.set_label(Label::PauseButton, "Pause");
        scene
    }

    #[test]
    fn size() {
        assert_eq!(Scene::new(Field::default()).size(), Size::new(62, 24));
        assert_eq!(small_scene().size(), Size::new(38, 11));
    }

    #[test]
    fn draw_playing() {
        let mut scene = small_scene();
        scene.fill_rect(
            Layer::Snake,
            Bounds::cell(Point::new(100, 100), 20),
            Color::Green,
        );
        scene.fill_rect(
            Layer::Snake,
            Bounds::cell(Point::new(80, 100), 20),
            Color::Green,
        );
        // Off the field; should be clipped
        scene.fill_rect(
            Layer::Snake,
            Bounds::cell(Point::new(-20, 100), 20),
            Color::Green,
        );
        scene.fill_ellipse(
            Layer::Food,
            Bounds::cell(Point::new(200, 40), 20),
            Color::Red,
        );
        let area = Rect::new(0, 0, 38, 11);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 2",
            "┌────────────────────────────────────┐",
            "│                                    │",
            "│                                    │",
            "│                    ●               │",
            "│                                    │",
            "│                                    │",
            "│        ████                        │",
            "│                                    │",
            "└────────────────────────────────────┘",
            " Restart (r) — Pause (p) — Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 38, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(9, 7, 4, 1), Style::new().fg(Color::Green));
        expected.set_style(Rect::new(21, 4, 1, 1), Style::new().fg(Color::Red));
        expected.set_style(Rect::new(10, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(22, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(33, 10, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_game_over() {
        let mut scene = small_scene();
        scene.text(
            Layer::Overlay,
            Point::new(180, 70),
            "Game Over\nScore: 2",
            Font::Banner,
            Color::White,
        );
        scene.set_label(Label::PauseButton, "Play");
        let area = Rect::new(0, 0, 38, 11);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 2",
            "┌────────────────────────────────────┐",
            "│                                    │",
            "│                                    │",
            "│              Game Over             │",
            "│              Score: 2              │",
            "│                                    │",
            "│                                    │",
            "│                                    │",
            "└────────────────────────────────────┘",
            " Restart (r) — Play (p) — Quit (q)",
        ]);
        let banner = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
        expected.set_style(Rect::new(0, 0, 38, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(15, 4, 9, 1), banner);
        expected.set_style(Rect::new(15, 5, 8, 1), banner);
        expected.set_style(Rect::new(10, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(21, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(32, 10, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn clear_layer() {
        let mut scene = small_scene();
        scene.fill_ellipse(
            Layer::Food,
            Bounds::cell(Point::new(200, 40), 20),
            Color::Red,
        );
        scene.fill_rect(
            Layer::Snake,
            Bounds::cell(Point::new(100, 100), 20),
            Color::Green,
        );
        scene.clear(Layer::Food);
        assert!(scene.shapes(Layer::Food).is_empty());
        assert_eq!(scene.shapes(Layer::Snake).len(), 1);
    }

    #[test]
    fn text_is_clipped_to_field() {
        let mut scene = small_scene();
        scene.text(
            Layer::Overlay,
            Point::new(0, 0),
            "Hello",
            Font::Normal,
            Color::White,
        );
        let area = Rect::new(0, 0, 38, 11);
        let mut buffer = Buffer::empty(area);
        scene.render(area, &mut buffer);
        assert_eq!(buffer[(1, 2)].symbol(), "l");
        assert_eq!(buffer[(2, 2)].symbol(), "l");
        assert_eq!(buffer[(3, 2)].symbol(), "o");
        assert_eq!(buffer[(0, 2)].symbol(), "│");
        assert_eq!(buffer[(0, 1)].symbol(), "┌");
    }
}
