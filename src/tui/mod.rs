pub mod app;
pub mod bus;
pub mod theme;
pub mod views;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::api::{sections_from_hits, GrafanaClient};
use crate::config::Config;
use crate::deletion::ConfirmDeleteModal;

use self::app::{App, View};
use self::bus::{UiBus, UiMessage};
use self::theme::Theme;
use self::views::confirm::render_confirm;
use self::views::list::render_list;

async fn reload(client: &GrafanaClient, app: &mut App) {
    match client.search(app.query.as_deref()).await {
        Ok(hits) => app.replace_sections(sections_from_hits(hits)),
        Err(e) => {
            warn!(error = %e, "search failed");
            app.toast(format!("Search failed: {e}"));
        }
    }
}

/// Applies everything the modal announced after a successful delete.
/// Returns whether the listing has to be fetched again.
fn drain_bus(rx: &mut UnboundedReceiver<UiMessage>, app: &mut App) -> bool {
    let mut navigated = false;
    while let Ok(msg) = rx.try_recv() {
        match msg {
            UiMessage::Navigate(path) => {
                info!(%path, "navigate");
                app.location = path;
                navigated = true;
            }
            UiMessage::Action(action) => app.apply(action),
        }
    }
    navigated
}

/// What the event loop does after a key has been handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Reload,
    Quit,
}

/// Applies one key press to the browser state and the confirm modal.
pub async fn handle_key(
    app: &mut App,
    modal: &mut ConfirmDeleteModal,
    rx: &mut UnboundedReceiver<UiMessage>,
    code: KeyCode,
) -> KeyOutcome {
    if !modal.is_open() {
        match code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.prev(),
            KeyCode::Char(' ') => app.toggle_selected(),
            KeyCode::Char('a') => app.toggle_all(),
            KeyCode::Enter => app.toggle_expand(),
            KeyCode::Char('r') => return KeyOutcome::Reload,
            KeyCode::Char('d') => {
                if app.deletion_request().is_empty() {
                    app.toast("Nothing selected".to_string());
                } else {
                    modal.open();
                }
            }
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('n') => modal.dismiss(),
        KeyCode::Char('y') | KeyCode::Enter => {
            let request = app.deletion_request();
            match modal.confirm(&request).await {
                Ok(()) => {
                    if drain_bus(rx, app) {
                        app.query = None;
                    }
                    app.toast("Deleted".to_string());
                }
                Err(e) => {
                    warn!(error = %e, "delete failed");
                    app.toast(format!("Delete failed: {e}"));
                }
            }
            // Part of a failed batch may already be gone
            return KeyOutcome::Reload;
        }
        _ => {}
    }
    KeyOutcome::Continue
}

fn read_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            return Ok(Some(k));
        }
    }
    Ok(None)
}

async fn run_loop<B, K>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    modal: &mut ConfirmDeleteModal,
    rx: &mut UnboundedReceiver<UiMessage>,
    client: &GrafanaClient,
    mut next_key: K,
) -> Result<()>
where
    B: Backend,
    K: FnMut(Duration) -> io::Result<Option<KeyEvent>>,
{
    let theme = Theme::default();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(200);

    loop {
        app.view = if modal.is_open() { View::ConfirmDelete } else { View::List };
        terminal.draw(|f| {
            render_list(f, app, &theme);
            if app.view == View::ConfirmDelete {
                render_confirm(f, app, &theme);
            }
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_millis(0));

        if let Some(k) = next_key(timeout)? {
            if k.kind == KeyEventKind::Press {
                match handle_key(app, modal, rx, k.code).await {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Reload => reload(client, app).await,
                    KeyOutcome::Continue => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}

pub async fn launch(config: &Config, query: Option<String>) -> Result<()> {
    let client = GrafanaClient::from_config(config)?;
    let (bus, mut rx) = UiBus::channel();
    let bus = Arc::new(bus);
    let mut modal = ConfirmDeleteModal::new(Arc::new(client.clone()), bus.clone(), bus)
        .with_listing_path(config.listing_path.clone());

    let mut app = App::new(Vec::new());
    app.query = query;
    // Fetch before the terminal switches so connection errors stay readable
    let hits = client.search(app.query.as_deref()).await?;
    app.replace_sections(sections_from_hits(hits));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app, &mut modal, &mut rx, &client, read_key).await;

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    res
}
