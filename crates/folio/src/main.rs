use folio_config::PreferenceFile;
use folio_theme::{TerminalAppearance, ThemeResolver};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

mod actions;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use middleware::{
    app_config_middleware::AppConfigMiddleware, bootstrap_middleware::BootstrapMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    projects_middleware::ProjectsMiddleware, theme_middleware::ThemeMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> io::Result<()> {
    // GITHUB_TOKEN may live in a .env file
    dotenvy::dotenv().ok();

    let log_file = logger::init();
    log::info!("Starting folio");
    if let Some(path) = &log_file {
        log::debug!("Logging to {}", path.display());
    }

    // Initialize store with middleware
    let mut store = Store::new(AppState::default());

    let resolver = ThemeResolver::new(
        Box::new(PreferenceFile::default_location()),
        Box::new(TerminalAppearance::from_env()),
    );

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(BootstrapMiddleware::new()));
    store.add_middleware(Box::new(AppConfigMiddleware::new())); // Load app config early
    store.add_middleware(Box::new(ThemeMiddleware::new(resolver)));
    store.add_middleware(Box::new(ProjectsMiddleware::new()?)); // GitHub client & listing
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting folio");
    Ok(())
}

/// Maximum time budget for processing actions before rendering
const ACTION_BUDGET: Duration = Duration::from_millis(16); // ~60fps frame budget

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    // Queue bootstrap so the first frame renders before any loading happens
    store
        .dispatcher()
        .dispatch(Action::Bootstrap(BootstrapAction::Start));

    loop {
        // Process pending actions with a time budget to avoid blocking renders
        let start = Instant::now();

        while let Some(action) = store.dispatcher().pop() {
            store.dispatch(action);

            // Check budget after each action - remaining actions stay in queue
            if start.elapsed() >= ACTION_BUDGET {
                break;
            }
        }

        terminal.draw(|frame| {
            views::render(store.state(), frame.area(), frame);
        })?;

        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
