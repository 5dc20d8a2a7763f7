use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use placepick::app::App;
use placepick::config::{Config, load_config};
use placepick::error::PlacepickError;
use placepick::places::{GoogleMapsClient, spawn_worker};

/// How long to wait for a terminal event before polling the places worker again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive address autocomplete picker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Language code for suggestions (overrides the config file)
    #[arg(long)]
    language: Option<String>,

    /// Restrict suggestions to a country code (overrides the config file)
    #[arg(long)]
    region: Option<String>,

    /// Text to start with
    #[arg(short, long)]
    initial: Option<String>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)
            .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
    }

    // Config errors surface before the terminal is touched
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    log::info!("Starting with {:?}", config);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = run(&mut terminal, &config, args.initial.as_deref());

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    if let Some(text) = result? {
        println!("{}", text);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<(), PlacepickError> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(language) = &args.language {
        config.places.language = Some(language.clone());
    }
    if let Some(region) = &args.region {
        config.places.region = Some(region.clone());
    }
}

/// Run the event loop; returns the confirmed text, if any
fn run(
    terminal: &mut DefaultTerminal,
    config: &Config,
    initial: Option<&str>,
) -> Result<Option<String>> {
    let mut app = App::new(config);

    let api_key = config.places.read_api_key();
    let handle = spawn_worker(
        GoogleMapsClient::load(config.places.clone(), api_key),
        config.places.timeout(),
    );
    app.mount(handle);

    if let Some(text) = initial {
        app.set_text(text);
    }

    loop {
        app.poll_places();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app.output().map(str::to_string))
}
