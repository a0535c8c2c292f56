mod app;
mod domain;
mod input;
mod labels;
mod list;
mod listeners;
mod logging;
mod persistence;
mod ui;
mod viewport;

use anyhow::{bail, Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{checkbox, Filter, ItemId, SearchResult};
use list::{ListError, TodoList};
use persistence::{
    config_file, ensure_data_dir, init_local_data_dir, load_config, log_file, save_config, todos_file,
    AppConfig, JsonFileStore, Storage,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "A small terminal to-do list with filters, search, and inline editing", long_about = None)]
struct Cli {
    /// Use this data directory instead of the discovered one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .ticklist directory in the current directory
    Init,
    /// Add an item
    Add {
        text: String,
    },
    /// Print the list
    List {
        /// all, pending, or done
        #[arg(short, long, default_value = "all")]
        filter: Filter,
        /// Only show items containing this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Flip an item between pending and done
    Toggle {
        id: ItemId,
    },
    /// Rename an item
    Edit {
        id: ItemId,
        text: String,
    },
    /// Delete an item
    Rm {
        id: ItemId,
    },
    /// Delete every completed item
    ClearDone,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Some(Commands::Init) => {
            logging::init_stderr(cli.verbose)?;
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_data_dir(&cwd)?;
            let config_path = config_file(&dir);
            if !config_path.exists() {
                save_config(&config_path, &AppConfig::default())?;
            }
            println!("Initialized ticklist directory: {}", dir.display());
            println!();
            println!("ticklist will now use this local directory for its list.");
            println!("Run 'ticklist' to open it.");
            Ok(())
        }
        Some(command) => {
            logging::init_stderr(cli.verbose)?;
            run_headless(command, data_dir)
        }
        None => {
            // Run the normal TUI application
            run_tui(data_dir, cli.verbose)
        }
    }
}

/// One-shot commands against the stored list
fn run_headless(command: Commands, data_dir: Option<&Path>) -> Result<()> {
    let dir = ensure_data_dir(data_dir)?;
    let store = JsonFileStore::new(todos_file(&dir));
    let mut list = TodoList::new(store.load().unwrap_or_default());

    let changed = match command {
        Commands::Add { text } => match list.add(&text) {
            Ok(id) => {
                println!("Added #{id}");
                true
            }
            Err(ListError::EmptyInput) => {
                println!("Nothing to add: text is empty");
                false
            }
            Err(e) => bail!(e),
        },
        Commands::List { filter, search } => {
            print_list(&list, filter, search.as_deref());
            false
        }
        Commands::Toggle { id } => {
            if !list.toggle(id) {
                bail!("No item with id {id}");
            }
            if let Some(item) = list.get(id) {
                println!("{} #{} {}", checkbox(item.completed), item.id, item.text);
            }
            true
        }
        Commands::Edit { id, text } => match list.rename(id, &text) {
            Ok(true) => {
                println!("Renamed #{id}");
                true
            }
            Ok(false) => bail!("No item with id {id}"),
            Err(ListError::EmptyInput) => {
                println!("Nothing to change: text is empty");
                false
            }
            Err(e) => bail!(e),
        },
        Commands::Rm { id } => {
            if !list.delete(id) {
                bail!("No item with id {id}");
            }
            println!("Deleted #{id}");
            true
        }
        Commands::ClearDone => {
            let removed = list.delete_completed();
            println!("Deleted {removed} completed item(s)");
            removed > 0
        }
        Commands::Init => false,
    };

    if changed {
        store
            .save(list.items())
            .with_context(|| format!("Failed to write {}", store.path().display()))?;
    }
    Ok(())
}

fn print_list(list: &TodoList, filter: Filter, search: Option<&str>) {
    if list.is_empty() {
        println!("No items yet. Add one with 'ticklist add <TEXT>'.");
        return;
    }

    let shown = list.filtered(filter, false);
    let items = match search {
        Some(query) => match list.search(&shown, query) {
            SearchResult::NoQuery => shown,
            SearchResult::Matches(matches) => matches,
        },
        None => shown,
    };

    for item in &items {
        println!("{} #{} {}", checkbox(item.completed), item.id, item.text);
    }
    let counts = list.counts();
    println!("{} / {} done", counts.completed, counts.total);
}

fn run_tui(data_dir: Option<&Path>, verbose: u8) -> Result<()> {
    // Ensure data directory exists
    let dir = ensure_data_dir(data_dir)?;

    // The terminal belongs to the UI, so logs go to a file
    logging::init_file(&log_file(&dir), verbose)?;
    info!(data_dir = %dir.display(), "starting ticklist");

    let config = load_config(config_file(&dir))?;
    let store = JsonFileStore::new(todos_file(&dir));

    // Create app state
    let mut app = AppState::new(Box::new(store), &config);
    let (columns, _rows) = terminal::size()?;
    app.on_resize(columns);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    app.teardown();

    // Print any errors
    if let Err(err) = result {
        error!(error = %format!("{err:#}"), "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle one event at a time
        if event::poll(POLL_INTERVAL)? {
            let should_quit = input::handle_event(app, event::read()?)?;
            if should_quit {
                return Ok(());
            }
        }
    }
}
