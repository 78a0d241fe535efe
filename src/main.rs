mod app;
mod command;
mod config;
mod consts;
mod game;
mod render;
mod scheduler;
mod util;
use crate::app::App;
use crate::config::{Config, ConfigError};
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use lexopt::{Arg, Parser};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable used to set the log filter
const LOG_FILTER_VAR: &str = "GRIDSNAKE_LOG";

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play snake in the terminal

Options:
  -c, --config <path>    Read configuration from the given file
  -l, --log-file <path>  Write log messages to the given file
  -h, --help             Display this help message and exit
  -V, --version          Show the program version and exit

Controls:
  Arrow keys, WASD, HJKL  Steer the snake
  p, Space, Esc           Pause/resume
  r                       Restart
  q, Ctrl-C               Quit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Play(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Play(args))
    }
}

fn main() -> ExitCode {
    let args = match Invocation::from_parser(Parser::from_env()) {
        Ok(Invocation::Play(args)) => args,
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage information.");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }
    let config = load_config(args.config.as_deref())?;
    let settings = config.settings().context("invalid configuration")?;
    let mut terminal = ratatui::init();
    let r = execute!(terminal.backend_mut(), EnableFocusChange)
        .and_then(|()| App::new(settings, rand::rng()).run(terminal));
    let _ = execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    io_result(r)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = if let Some(p) = path {
        info!(path = %p.display(), "Loading configuration");
        Config::load(p, false)
    } else {
        match Config::default_path() {
            Ok(p) => {
                info!(path = %p.display(), "Loading configuration");
                Config::load(&p, true)
            }
            Err(ConfigError::NoPath) => {
                warn!("Could not determine configuration directory; using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    };
    config.context("failed to load configuration")
}

/// Send log messages to the file at `path`, filtered by the
/// `GRIDSNAKE_LOG` environment variable.  Nothing is logged to the terminal,
/// as that's where the game is.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize logging")
}

fn io_result(r: io::Result<()>) -> anyhow::Result<()> {
    match r {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("terminal I/O failed"),
    }
}
