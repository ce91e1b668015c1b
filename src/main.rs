//! Notetex - plain-text notes with verbal math to LaTeX.
//!
//! This binary provides the CLI host for the notetex converter and previewer,
//! reading notes from a file or stdin and optionally watching the file.

mod cli;
mod guide;
mod session;
mod watch;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use notetex_config::Config;
use notetex_core::Result;
use notetex_store::{DocumentStore, FsStore, OpenOutcome, OpenRequest, SaveOutcome, SaveRequest};
use session::Session;
use std::io::{self, Read, Write};
use watch::FileWatcher;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    if cli.show_guide {
        print!("{}", guide::SYNTAX_GUIDE);
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Notetex v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    debug!("Loaded config: {:?}", config);

    let mut session = initial_session(cli, &config);
    debug!("View mode: {}", session.view());

    let save_request = SaveRequest {
        default_name: config.files.default_name.clone(),
        extension: config.files.extension.clone(),
    };
    let open_request = OpenRequest {
        extensions: config.files.open_extensions.clone(),
    };

    let mut store = FsStore::new();
    if let Some(ref output) = cli.output {
        store = store.with_save_path(output);
    }
    if let Some(ref file) = cli.file {
        store = store.with_open_path(file);
    }

    if cli.watch {
        run_watch(cli, &config, &mut session, &mut store, &save_request)
    } else if cli.should_read_stdin() {
        run_stdin(cli, &mut session, &mut store, &save_request)
    } else {
        run_file(cli, &mut session, &mut store, &open_request, &save_request)
    }
}

/// A session showing the requested view, flipped by `--toggle`.
fn initial_session(cli: &Cli, config: &Config) -> Session {
    let mut session = Session::new(cli.view.unwrap_or(config.view.mode));
    if cli.toggle {
        session.toggle_view();
    }
    session
}

/// Load configuration with optional overrides.
///
/// A broken user config or override is reported and the defaults are used.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        match Config::parse_override(config_arg) {
            Ok(override_config) => {
                config.merge(&override_config);
                debug!("Merged config override: {}", config_arg);
            }
            Err(e) => {
                error!("Failed to load config {}: {}", config_arg, e);
            }
        }
    }

    config
}

/// Convert text read from stdin.
fn run_stdin(
    cli: &Cli,
    session: &mut Session,
    store: &mut FsStore,
    save_request: &SaveRequest,
) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        info!("Reading notes from the terminal; end input with Ctrl-D");
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    session.update(&text);

    emit(session)?;
    if cli.output.is_some() {
        save(session, store, save_request)?;
    }
    Ok(())
}

/// Convert the input file once.
fn run_file(
    cli: &Cli,
    session: &mut Session,
    store: &mut FsStore,
    open_request: &OpenRequest,
    save_request: &SaveRequest,
) -> Result<()> {
    match store.open(open_request)? {
        OpenOutcome::Opened(opened) => {
            debug!("Opened {}", opened.path.display());
            session.update(&opened.content);
        }
        OpenOutcome::Canceled => {
            debug!("No input file");
            return Ok(());
        }
    }

    emit(session)?;
    if cli.output.is_some() {
        save(session, store, save_request)?;
    }
    Ok(())
}

/// Reconvert the input file each time it settles after a change.
///
/// Save failures are reported and watching continues.
fn run_watch(
    cli: &Cli,
    config: &Config,
    session: &mut Session,
    store: &mut FsStore,
    save_request: &SaveRequest,
) -> Result<()> {
    let Some(ref file) = cli.file else {
        return Ok(());
    };

    let interval = cli
        .debounce
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| config.view.debounce_interval());
    let mut watcher = FileWatcher::new(file, interval);
    info!("Watching {} (debounce {:?})", watcher.path().display(), interval);

    watcher.run(|content| {
        session.update(content);
        if let Err(e) = emit(session) {
            error!("Failed to write output: {}", e);
        }
        if cli.output.is_some() && !session.latex().is_empty() {
            if let Err(e) = save(session, store, save_request) {
                error!("{}", e);
            }
        }
    })?;
    Ok(())
}

/// Print the current view to stdout.
fn emit(session: &Session) -> io::Result<()> {
    let output = session.display();
    if output.is_empty() {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", output)?;
    out.flush()
}

fn save(session: &Session, store: &mut FsStore, save_request: &SaveRequest) -> Result<()> {
    match session.save(store, save_request)? {
        SaveOutcome::Saved(path) => info!("Saved LaTeX to {}", path.display()),
        SaveOutcome::Canceled => debug!("Save canceled"),
    }
    Ok(())
}
