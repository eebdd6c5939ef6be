use listdeck::app::{tick_interval, App, AppMessage};
use listdeck::cli::{parse_args, run_cli_command};
use listdeck::startup::{init_logging, AppConfig};
use listdeck::terminal::{setup_panic_hook, TerminalManager};
use listdeck::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let Some(options) = run_cli_command(parse_args(std::env::args())) else {
        return Ok(());
    };

    color_eyre::install()?;
    let config = AppConfig::from_env().apply_cli(&options);
    // A missing log location is not fatal; the TUI still works.
    if let Err(err) = init_logging(&config) {
        eprintln!("listdeck: logging disabled: {err}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    tracing::info!(base_url = %config.base_url, route = config.initial_route.path(), "starting");

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Owned here so select! can borrow it alongside `app`.
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // Initial fetch for the starting route.
    app.tick();

    let mut ticker = tick_interval();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => app.quit(),
                }
            }

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

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }
    }
}
