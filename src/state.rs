use std::collections::VecDeque;
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;

use crate::stats::{PieSegment, StatsBucket, match_stats, pie_segments};
use crate::team_api::{MatchRecord, TeamMatchesData};
use crate::teams::{self, KNOWN_TEAMS};

pub const TEAM_MATCHES_PREFIX: &str = "/team-matches/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    TeamMatches { id: String },
}

impl Route {
    /// Accepts `/`, `/team-matches/{id}`, or a bare team code.
    pub fn parse(raw: &str) -> Option<Route> {
        let path = raw.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }
        if let Some(id) = path.strip_prefix(TEAM_MATCHES_PREFIX) {
            let id = id.trim_end_matches('/');
            if id.is_empty() || id.contains('/') {
                return None;
            }
            return Some(Route::TeamMatches { id: id.to_string() });
        }
        if path.starts_with('/') || path.contains('/') {
            return None;
        }
        Some(Route::TeamMatches {
            id: path.to_string(),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::TeamMatches { id } => format!("{TEAM_MATCHES_PREFIX}{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Navigate(Route),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded(TeamMatchesData),
    Failed(String),
}

/// Declarative description of what the team matches view shows, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Loader,
    Banner { src: &'a str },
    LatestMatch(&'a MatchRecord),
    PieChart {
        segments: [PieSegment; 3],
        legend: [StatsBucket; 3],
    },
    BackButton,
    MatchCards(&'a [MatchRecord]),
    Failure { message: &'a str },
}

#[derive(Debug, Clone)]
pub struct TeamMatchesView {
    pub mount: u64,
    pub team_id: String,
    pub status: LoadStatus,
    pub card_scroll: usize,
    card_capacity: usize,
    initialized: bool,
}

impl TeamMatchesView {
    pub fn new(mount: u64, team_id: impl Into<String>) -> Self {
        Self {
            mount,
            team_id: team_id.into(),
            status: LoadStatus::Loading,
            card_scroll: 0,
            card_capacity: 1,
            initialized: false,
        }
    }

    /// Requests the team's matches. Only the first call sends anything.
    pub fn initialize(&mut self, cmd_tx: &Sender<ProviderCommand>) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;
        cmd_tx
            .send(ProviderCommand::FetchTeamMatches {
                mount: self.mount,
                team_id: self.team_id.clone(),
            })
            .context("provider is not running")
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn data(&self) -> Option<&TeamMatchesData> {
        match &self.status {
            LoadStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Leaves `Loading` exactly once; later results are ignored.
    pub fn finish(&mut self, result: Result<TeamMatchesData, String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.status = match result {
            Ok(data) => LoadStatus::Loaded(data),
            Err(message) => LoadStatus::Failed(message),
        };
        self.card_scroll = 0;
        true
    }

    pub fn stats(&self) -> Option<[StatsBucket; 3]> {
        self.data().map(|data| match_stats(&data.recent_matches))
    }

    pub fn container_class(&self) -> String {
        teams::container_class(&self.team_id)
    }

    pub fn view_sections(&self) -> Vec<Section<'_>> {
        match &self.status {
            LoadStatus::Loading => vec![Section::Loader],
            LoadStatus::Loaded(data) => {
                let legend = match_stats(&data.recent_matches);
                vec![
                    Section::Banner {
                        src: &data.team_banner_url,
                    },
                    Section::LatestMatch(&data.latest_match),
                    Section::PieChart {
                        segments: pie_segments(&legend),
                        legend,
                    },
                    Section::BackButton,
                    Section::MatchCards(&data.recent_matches),
                ]
            }
            LoadStatus::Failed(message) => vec![Section::Failure { message }, Section::BackButton],
        }
    }

    /// Number of match cards the last layout could show at once.
    pub fn set_card_capacity(&mut self, capacity: usize) {
        self.card_capacity = capacity.max(1);
        self.card_scroll = self.card_scroll.min(self.max_card_scroll());
    }

    /// Last scroll offset that still changes what is on screen.
    pub fn max_card_scroll(&self) -> usize {
        let total = self.data().map(|d| d.recent_matches.len()).unwrap_or(0);
        total.saturating_sub(self.card_capacity)
    }

    pub fn on_key(&mut self, code: KeyCode) -> Option<ViewAction> {
        match code {
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => {
                Some(ViewAction::Navigate(Route::Home))
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.card_scroll < self.max_card_scroll() {
                    self.card_scroll += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.card_scroll = self.card_scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    TeamMatches(TeamMatchesView),
}

#[derive(Debug)]
pub enum ProviderCommand {
    FetchTeamMatches { mount: u64, team_id: String },
}

#[derive(Debug)]
pub enum Delta {
    TeamMatchesLoaded { mount: u64, data: TeamMatchesData },
    TeamMatchesFailed { mount: u64, error: String },
    Log(String),
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub home_selected: usize,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
    next_mount: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            home_selected: 0,
            help_overlay: false,
            logs: VecDeque::new(),
            next_mount: 1,
        }
    }

    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::Home => Route::Home,
            Screen::TeamMatches(view) => Route::TeamMatches {
                id: view.team_id.clone(),
            },
        }
    }

    pub fn team_view(&self) -> Option<&TeamMatchesView> {
        match &self.screen {
            Screen::TeamMatches(view) => Some(view),
            Screen::Home => None,
        }
    }

    pub fn team_view_mut(&mut self) -> Option<&mut TeamMatchesView> {
        match &mut self.screen {
            Screen::TeamMatches(view) => Some(view),
            Screen::Home => None,
        }
    }

    /// Replaces the current screen. A team route always mounts a fresh view,
    /// which is initialized right away when a provider channel is available.
    pub fn navigate(&mut self, route: Route, cmd_tx: Option<&Sender<ProviderCommand>>) {
        match route {
            Route::Home => {
                self.screen = Screen::Home;
            }
            Route::TeamMatches { id } => {
                let mount = self.next_mount;
                self.next_mount += 1;
                let mut view = TeamMatchesView::new(mount, id);
                match cmd_tx {
                    Some(tx) => {
                        if let Err(err) = view.initialize(tx) {
                            self.push_log(format!("[WARN] Team matches request failed: {err}"));
                            view.finish(Err(format!("{err:#}")));
                        } else {
                            self.push_log(format!(
                                "[INFO] Fetching matches for {}",
                                view.team_id
                            ));
                        }
                    }
                    None => self.push_log("[INFO] Team matches fetch unavailable"),
                }
                self.screen = Screen::TeamMatches(view);
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.home_selected + 1 < KNOWN_TEAMS.len() {
            self.home_selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.home_selected = self.home_selected.saturating_sub(1);
    }

    pub fn selected_team_route(&self) -> Option<Route> {
        KNOWN_TEAMS.get(self.home_selected).map(|t| Route::TeamMatches {
            id: t.code.to_string(),
        })
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::TeamMatchesLoaded { mount, data } => {
            let count = data.recent_matches.len();
            match state.team_view_mut() {
                Some(view) if view.mount == mount => {
                    let team = view.team_id.clone();
                    if view.finish(Ok(data)) {
                        state.push_log(format!("[INFO] Loaded {count} recent matches for {team}"));
                    }
                }
                _ => state.push_log(format!("[INFO] Dropped response for unmounted view #{mount}")),
            }
        }
        Delta::TeamMatchesFailed { mount, error } => match state.team_view_mut() {
            Some(view) if view.mount == mount => {
                let team = view.team_id.clone();
                if view.finish(Err(error.clone())) {
                    state.push_log(format!("[WARN] Team matches error for {team}: {error}"));
                }
            }
            _ => state.push_log(format!("[INFO] Dropped error for unmounted view #{mount}")),
        },
        Delta::Log(msg) => state.push_log(msg),
    }
}
