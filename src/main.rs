use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use nodelens::app::state::AppState;
use nodelens::config::Config;
use nodelens::file::loader::{load_document, load_document_from_stdin};
use nodelens::input::InputHandler;
use nodelens::store::FileFormat;
use nodelens::theme::{get_builtin_theme, list_builtin_themes};
use nodelens::ui::UI;

/// nodelens - A terminal-based node inspector for JSON documents
#[derive(Parser)]
#[command(name = "nodelens")]
#[command(version)]
#[command(about = "A terminal-based node inspector for JSON documents", long_about = None)]
struct Cli {
    /// Document to inspect (omit to read from stdin if piped, or open a sample document)
    file: Option<String>,

    /// Theme name (default: default-dark)
    #[arg(short, long, default_value = "default-dark")]
    theme: String,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
/// Without this, panic messages would be hidden or garbled, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state
        // Use stderr to avoid interfering with stdout pipes
        use std::io::Write;

        // Exit alternate screen
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        // Show cursor
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        // Ensure output is flushed
        let _ = io::stderr().flush();

        // Call the default panic handler to print the panic message and backtrace
        default_panic(panic_info);
    }));
}

/// A small nested document shown when nodelens is started without input.
fn sample_document() -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "user": {
            "name": "Alice",
            "email": "alice@example.com"
        },
        "count": 42,
        "active": true
    }))
    .expect("sample document serializes")
}

fn main() -> Result<()> {
    // Initialize logging (stderr, WARN by default; RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    // Set up panic hook to restore terminal before showing panic info
    // This ensures panics are visible when terminal is in raw mode
    setup_panic_hook();

    let cli = Cli::parse();

    // Load the document BEFORE terminal setup (stdin might carry the
    // document, so it must be consumed before taking over the terminal)
    let (contents, format, filename, stdin_was_piped) = if let Some(file_path) = cli.file {
        let (contents, format) = load_document(&file_path)?;
        (contents, format, Some(file_path), false)
    } else if !io::stdin().is_terminal() {
        let (contents, format) = load_document_from_stdin()?;
        (contents, format, None, true)
    } else {
        (sample_document(), FileFormat::Json, None, false)
    };

    // Setup terminal
    // Termion can use /dev/tty directly when stdin is piped, no redirection needed
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Load config; CLI theme overrides config theme
    let config = Config::load();
    let theme_name = if !cli.theme.is_empty() {
        cli.theme.clone()
    } else {
        config.theme.clone()
    };

    let theme = get_builtin_theme(&theme_name).unwrap_or_else(|| {
        tracing::warn!(
            "theme '{}' not found (available: {}), using default-dark",
            theme_name,
            list_builtin_themes().join(", ")
        );
        get_builtin_theme("default-dark").unwrap()
    });
    let ui = UI::new(theme);
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut state = AppState::new(contents, format, filename, config);

    // Main event loop
    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state);

    // Cleanup
    // Termion handles cleanup automatically through Drop guards
    // But we still want to show the cursor before exiting
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut AppState,
) -> Result<()> {
    loop {
        // A store write with skip_update = false re-derives the node list
        state.process_update_request();

        // Render UI
        ui.render(terminal, state)?;

        // Handle input
        if let Some(event) = input_handler.poll_event()? {
            input_handler.handle_event(event, state);
        }

        if state.should_quit() {
            break;
        }
    }

    Ok(())
}
