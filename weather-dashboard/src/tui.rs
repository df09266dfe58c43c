//! Interactive full-screen loop.
//!
//! Every fetch runs as its own task and reports back over a channel; results
//! are applied in arrival order and nothing is ever cancelled.

use std::{
    io::{self, Stdout},
    time::Duration,
};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        execute,
        terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    },
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};
use weather_core::{Dashboard, FetchError, ProxyClient, WeatherSnapshot};

use crate::view;

/// Outcome of one fetch, tagged with the city it was issued for.
type FetchResult = (String, Result<WeatherSnapshot, FetchError>);

const FRAME: Duration = Duration::from_millis(33);

/// What a key press asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Fetch,
    Quit,
}

pub async fn run(client: ProxyClient, mut dashboard: Dashboard) -> anyhow::Result<()> {
    info!(api = %client.api_url(), city = %dashboard.city(), "dashboard starting");

    let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();
    spawn_fetch(&client, &tx, dashboard.start_fetch());

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &client, &tx, &mut rx, &mut dashboard);
    restore_terminal(&mut terminal)?;

    info!("dashboard stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: &ProxyClient,
    tx: &UnboundedSender<FetchResult>,
    rx: &mut UnboundedReceiver<FetchResult>,
    dashboard: &mut Dashboard,
) -> anyhow::Result<()> {
    loop {
        while let Ok((city, result)) = rx.try_recv() {
            dashboard.finish_fetch(&city, result);
        }

        terminal.draw(|f| view::draw(f, dashboard))?;

        if !event::poll(FRAME)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(dashboard, key) {
            Action::Continue => {}
            Action::Fetch => spawn_fetch(client, tx, dashboard.start_fetch()),
            Action::Quit => return Ok(()),
        }
    }
}

fn handle_key(dashboard: &mut Dashboard, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Enter => match dashboard.submit_search() {
            Some(_) => Action::Fetch,
            None => Action::Continue,
        },
        KeyCode::Backspace => {
            dashboard.pop_char();
            Action::Continue
        }
        KeyCode::Char(c) => {
            dashboard.push_char(c);
            Action::Continue
        }
        _ => Action::Continue,
    }
}

fn spawn_fetch(client: &ProxyClient, tx: &UnboundedSender<FetchResult>, city: String) {
    let client = client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        debug!(%city, "fetching weather");
        let result = client.fetch(&city).await;
        // The receiver is gone once the dashboard has exited.
        let _ = tx.send((city, result));
    });
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;
    Ok(())
}
