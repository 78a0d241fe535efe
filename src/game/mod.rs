mod direction;
mod field;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::field::{Field, FieldError, Point};
use self::snake::Snake;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use tracing::{debug, info};

/// The complete state of one game of snake
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    field: Field,
    snake: Snake,
    /// `None` only once the snake has filled the entire field
    food: Option<Point>,
    score: u32,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(field: Field, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            field,
            snake: Snake::new(field),
            food: None,
            score: 0,
            state: GameState::Playing,
        };
        game.place_food();
        info!(
            width = field.width(),
            height = field.height(),
            cell = field.cell(),
            "Starting new game"
        );
        game
    }

    /// Advance the game by one tick: move the snake one cell, eat the food
    /// if it's there, and check for collisions.  Does nothing unless the
    /// game is being played.
    pub(crate) fn step(&mut self) {
        if !self.playing() {
            return;
        }
        let head = self.snake.advance(self.field.cell());
        if self.food == Some(head) {
            self.score += 1;
            debug!(score = self.score, "Snake ate the food");
            self.place_food();
        } else {
            self.snake.shed_tail();
        }
        if !self.field.contains(head) || self.snake.bites_itself() {
            info!(
                score = self.score,
                x = head.x,
                y = head.y,
                "Snake crashed; game over"
            );
            self.state = GameState::GameOver;
        }
    }

    /// Throw away the current game and start a fresh one on the same field
    pub(crate) fn restart(&mut self) {
        self.snake = Snake::new(self.field);
        self.score = 0;
        self.state = GameState::Playing;
        self.place_food();
        info!("Game restarted");
    }

    /// Put the food on a cell chosen uniformly at random from those not
    /// occupied by the snake.  If there are no such cells, the game ends.
    fn place_food(&mut self) {
        let occupied = self.snake.body().iter().copied().collect::<HashSet<_>>();
        self.food = self
            .field
            .cells()
            .filter(|p| !occupied.contains(p))
            .choose(&mut self.rng);
        if self.food.is_none() {
            info!(score = self.score, "Snake filled the board; game over");
            self.state = GameState::GameOver;
        }
    }
}

impl<R> Game<R> {
    /// Ask for the snake to turn to `direction` on the next tick.  Requests
    /// to reverse straight into the snake's own body are ignored, as is
    /// everything sent while the game isn't being played.  If several turns
    /// are requested between ticks, the last accepted one wins.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if self.playing() && !self.snake.turn(direction) {
            debug!(?direction, "Ignoring request to reverse direction");
        }
    }

    /// Pause a running game or resume a paused one
    pub(crate) fn toggle_pause(&mut self) {
        match self.state {
            GameState::Playing => self.pause(),
            GameState::Paused => {
                info!("Resuming game");
                self.state = GameState::Playing;
            }
            GameState::GameOver => (),
        }
    }

    pub(crate) fn pause(&mut self) {
        if self.playing() {
            info!("Pausing game");
            self.state = GameState::Paused;
        }
    }

    pub(crate) fn playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn field(&self) -> Field {
        self.field
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn food(&self) -> Option<Point> {
        self.food
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> Point {
        self.snake.head()
    }

    /// The direction the snake moved in on the most recent tick
    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Iterate over the positions of the snake's segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.snake.body().iter().copied()
    }
}

#[cfg(test)]
impl<R> Game<R> {
    /// Construct a game in progress with the snake laid out along `body`
    /// (head first) and moving in `direction`
    pub(crate) fn with_layout<I: IntoIterator<Item = Point>>(
        field: Field,
        body: I,
        direction: Direction,
        food: Option<Point>,
        rng: R,
    ) -> Game<R> {
        Game {
            rng,
            field,
            snake: Snake {
                body: body.into_iter().collect(),
                direction,
                pending: None,
            },
            food,
            score: 0,
            state: GameState::Playing,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Playing,
    Paused,
    GameOver,
}
