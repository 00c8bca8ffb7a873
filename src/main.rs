use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use ipl_terminal::config::AppConfig;
use ipl_terminal::provider::spawn_provider;
use ipl_terminal::state::{
    AppState, Delta, ProviderCommand, Route, Screen, ViewAction, apply_delta,
};
use ipl_terminal::team_api::CcbpClient;
use ipl_terminal::ui::{card_capacity, ui};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn navigate(&mut self, route: Route) {
        self.state.navigate(route, self.cmd_tx.as_ref());
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.state.help_overlay = !self.state.help_overlay;
                return;
            }
            _ => {}
        }

        let action = if let Screen::TeamMatches(view) = &mut self.state.screen {
            view.on_key(key.code)
        } else {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.state.select_next();
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.state.select_prev();
                    None
                }
                KeyCode::Enter => self.state.selected_team_route().map(ViewAction::Navigate),
                _ => None,
            }
        };

        if let Some(ViewAction::Navigate(route)) = action {
            self.navigate(route);
        }
    }
}

fn initial_route(config: &AppConfig) -> Route {
    let arg = std::env::args().nth(1);
    let raw = arg.or_else(|| config.initial_team.clone());
    raw.and_then(|raw| Route::parse(&raw)).unwrap_or(Route::Home)
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let config = AppConfig::from_env();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let source = CcbpClient::new(config.api_base.clone(), config.http_timeout);
    spawn_provider(tx, cmd_rx, Box::new(source));

    let mut app = App::new(Some(cmd_tx));
    app.navigate(initial_route(&config));
    let res = run_app(&mut terminal, &mut app, rx, config.tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        let size = terminal.size()?;
        if let Some(view) = app.state.team_view_mut() {
            view.set_card_capacity(card_capacity(size));
        }

        terminal.draw(|f| ui(f, &app.state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
