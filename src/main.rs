use bookshelf::app::{App, AppMessage};
use bookshelf::cli::{parse_args, version_line, CliCommand, CliOverrides, USAGE};
use bookshelf::logging::init_logging;
use bookshelf::startup::{clear_stored_session, run_preflight_checks, StartupConfig};
use bookshelf::terminal::{setup_panic_hook, TerminalManager};
use bookshelf::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let overrides = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Logout(overrides) => return run_logout(&overrides),
        CliCommand::RunTui(overrides) => overrides,
    };

    color_eyre::install()?;

    let config = StartupConfig::from_env().with_overrides(&overrides);
    init_logging(&config.log_path(), &config.log_filter)?;
    tracing::info!(api = %config.api_base_url, data_dir = %config.data_dir.display(), "starting");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // One runtime for preflight and the TUI
    let runtime = tokio::runtime::Runtime::new()?;

    // Restore the session before the first frame so the right screen shows
    let startup = runtime.block_on(run_preflight_checks(&config))?;

    runtime.block_on(async {
        let mut app = App::new(startup.session, startup.books_api);
        app.start();

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();

        if let Err(e) = &result {
            tracing::error!(error = %e, "tui exited with error");
        }
        result
    })?;

    tracing::info!("exiting");
    Ok(())
}

/// `--logout`: clear the stored session without starting the TUI.
fn run_logout(overrides: &CliOverrides) -> Result<()> {
    color_eyre::install()?;
    let config = StartupConfig::from_env().with_overrides(overrides);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(clear_stored_session(&config))?;
    println!("Signed out. Stored session cleared from {}", config.storage_path().display());
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // 16ms tick drives the spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => return Ok(()),
                }
            }

            // Handle results from spawned backend and session tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
