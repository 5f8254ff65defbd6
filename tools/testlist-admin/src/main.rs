//! Testlist-Admin: test case browser for the admin console.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to a local admin server (default)
//! testlist-admin
//!
//! # Remote server, with logs
//! testlist-admin --endpoint http://ci.example.com:8080 --log-file testlist.log
//!
//! # Built-in data, no server required
//! testlist-admin --demo
//! ```

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use testlist_admin::config::{AdminConfig, Args};
use testlist_admin::{input, logging, ui, TestSource};
use testlist_view::{update, Msg, TestListView};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AdminConfig::from_args(args).context("Invalid configuration")?;
    logging::init_logging(&config.log).context("Failed to initialize logging")?;

    let source = TestSource::from_config(&config).context("Failed to create API client")?;
    info!(endpoint = %config.resource_url(), demo = config.demo, "Starting testlist-admin");

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = ?err, "testlist-admin exited with error");
    }
    result
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    source: TestSource,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Msg>(16);
    let mut view = TestListView::new();

    let cmd = update(&mut view, Msg::Render);
    source.execute(cmd, &tx);

    loop {
        terminal.draw(|frame| ui::render(frame, &view))?;

        // Fetch completions
        while let Ok(msg) = rx.try_recv() {
            let cmd = update(&mut view, msg);
            if !source.execute(cmd, &tx) {
                return Ok(());
            }
        }

        // Handle input with timeout so fetch results get picked up
        if event::poll(Duration::from_millis(100))? {
            let msg = match event::read()? {
                Event::Key(key) => input::map_key(&view, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    input::map_mouse(&view, mouse, area)
                }
                _ => None,
            };

            if let Some(msg) = msg {
                let cmd = update(&mut view, msg);
                if !source.execute(cmd, &tx) {
                    return Ok(());
                }
            }
        }

        if view.should_quit() {
            return Ok(());
        }
    }
}
