use crate::command::Command;
use crate::config::Settings;
use crate::game::{Direction, Game};
use crate::render::{Renderer, Scene};
use crate::scheduler::Ticker;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// The game controller: owns the game state and runs the event loop that
/// ticks, renders, and dispatches input
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    renderer: Renderer,
    scene: Scene,
    ticker: Ticker,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(settings: Settings, rng: R) -> App<R> {
        App {
            game: Game::new(settings.field, rng),
            renderer: Renderer::new(settings.palette),
            scene: Scene::new(settings.field),
            ticker: Ticker::new(settings.tick_period),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.renderer.render(&self.game, &mut self.scene);
        terminal.draw(|frame| frame.render_widget(&self.scene, frame.area()))?;
        Ok(())
    }

    /// Wait until either the next tick is due or an input event arrives, and
    /// act on whichever happens first
    fn process_input(&mut self) -> io::Result<()> {
        let tick_due = match self.next_wait(Instant::now()) {
            Some(wait) => wait.is_zero() || !poll(wait)?,
            None => false,
        };
        if tick_due {
            self.tick();
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    /// Return how long to wait for input before the next tick is due.  Ticks
    /// are only scheduled while the game is being played; otherwise, the
    /// ticker is disarmed and `None` is returned.
    fn next_wait(&mut self, now: Instant) -> Option<Duration> {
        if self.game.playing() {
            Some(self.ticker.arm(now))
        } else {
            self.ticker.disarm();
            None
        }
    }

    fn tick(&mut self) {
        self.game.step();
        self.ticker.disarm();
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            self.game.pause();
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => {
                info!(score = self.game.score(), "Quitting");
                self.quitting = true;
            }
            Command::Up => self.game.set_direction(Direction::Up),
            Command::Down => self.game.set_direction(Direction::Down),
            Command::Left => self.game.set_direction(Direction::Left),
            Command::Right => self.game.set_direction(Direction::Right),
            Command::Pause => self.game.toggle_pause(),
            Command::Restart => {
                self.game.restart();
                self.ticker.disarm();
            }
        }
    }
}
