//! `raci` — record and view a RACI responsibility matrix.
//!
//! # Usage
//!
//! ```
//! raci                                   # interactive matrix
//! raci add "Approve budget" --ceo A --board-advisor I
//! raci list [--json]
//! raci delete 3
//! raci --db ~/raci.db --config ~/.config/raci/raci.toml
//! ```

mod app;
mod commands;
mod form;
mod settings;
mod ui;

use std::{
  fs::File,
  io,
  path::PathBuf,
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::{Args, Parser, Subcommand};
use commands::AddRequest;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use raci_core::activity::ActivityId;
use raci_store_sqlite::SqliteStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "raci", version, about = "Record and view a RACI responsibility matrix")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "raci.toml")]
  config: PathBuf,

  /// SQLite database file (overrides `db_path` from config and environment).
  #[arg(long, value_name = "FILE")]
  db: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Open the interactive matrix (the default).
  Tui,
  /// Print the matrix and legend.
  List {
    /// Print records as JSON instead of a table.
    #[arg(long)]
    json: bool,
  },
  /// Record a new activity.
  Add(AddArgs),
  /// Delete an activity by id. Deleting an unknown id is not an error.
  Delete {
    #[arg(allow_hyphen_values = true)]
    id: ActivityId,
  },
  /// Print the colour legend.
  Legend,
}

/// Codes are R, A, C, I (any case) or blank.
#[derive(Args, Debug)]
struct AddArgs {
  /// Activity or decision name.
  title: String,

  #[arg(long, value_name = "CODE", default_value = "")]
  ceo: String,

  #[arg(long, value_name = "CODE", default_value = "")]
  area_president: String,

  #[arg(long, value_name = "CODE", default_value = "")]
  executive_director: String,

  #[arg(long, value_name = "CODE", default_value = "")]
  board_advisor: String,

  #[arg(long, value_name = "CODE", default_value = "")]
  executive_manager: String,
}

impl From<AddArgs> for AddRequest {
  fn from(a: AddArgs) -> Self {
    AddRequest {
      title: a.title,
      codes: [
        a.ceo,
        a.area_president,
        a.executive_director,
        a.board_advisor,
        a.executive_manager,
      ],
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let settings = Settings::load(&cli.config, cli.db.as_deref())?;
  let command = cli.command.unwrap_or(Command::Tui);

  init_tracing(&command, &settings)?;

  if let Command::Legend = command {
    return Ok(commands::write_legend(&mut io::stdout(), true)?);
  }

  let store = SqliteStore::open(&settings.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.db_path))?;

  let mut stdout = io::stdout();
  let result = match command {
    Command::Tui => run_tui(store.clone()).await,
    Command::List { json } => commands::list(&store, json, &mut stdout).await,
    Command::Add(args) => commands::add(&store, args.into(), &mut stdout).await,
    Command::Delete { id } => commands::delete(&store, id, &mut stdout).await,
    Command::Legend => Ok(()),
  };

  store.close().await.context("failed to close store")?;
  result
}

/// Log to stderr for one-shot commands. The TUI owns the terminal, so it only
/// logs when a `log_file` is configured.
fn init_tracing(command: &Command, settings: &Settings) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  match (command, &settings.log_file) {
    (_, Some(path)) => {
      let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    (Command::Tui, None) => {}
    (_, None) => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
  }
  Ok(())
}

// ─── Terminal UI ──────────────────────────────────────────────────────────────

async fn run_tui(store: SqliteStore) -> Result<()> {
  let mut app = App::new(store);

  // Load initial data before touching the terminal.
  app.reload().await?;

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
          if !app.handle_key(key).await? {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
