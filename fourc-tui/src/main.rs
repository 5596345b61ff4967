use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fourc_core::Catalog;
use fourc_tui::app::{AppState, Overlay};
use fourc_tui::{input, logging, ui, Settings};

#[derive(Parser)]
#[command(name = "fourc-tui", about = "Present FourC leadership sessions in the terminal")]
struct Args {
    /// Settings file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with sessions.json and articles.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        settings.data_dir = dir;
    }
    if let Some(path) = args.log_file {
        settings.log_file = Some(path);
    }

    // A broken log destination should not keep the presenter from starting.
    let log_result = logging::init(&settings.log_path(), &settings.log_level);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let mut app = build_app(&settings);
    if let Err(e) = log_result {
        app.push_error(format!("{e:#}"), "logging".into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

/// Load the catalog and apply start-up settings. A catalog that fails to
/// load leaves the app running on an empty one with the error recorded.
fn build_app(settings: &Settings) -> AppState {
    let (catalog, load_error) = match Catalog::load(&settings.data_dir) {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            (Catalog::default(), Some(e))
        }
    };

    let mut app = AppState::new(catalog, settings.data_dir.clone());
    app.set_panel(settings.start_panel);
    if settings.show_welcome {
        app.overlay = Overlay::Welcome;
    }
    if let Some(e) = load_error {
        app.push_error(e.to_string(), format!("data dir {}", settings.data_dir.display()));
    }
    app
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll for ~20 FPS tick
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
