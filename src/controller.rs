//! Dashboard state and the rules for when its two fetches run.
//!
//! The [`Dashboard`] owns all view state and is only mutated from the task
//! that owns it. Fetches run on the tokio blocking pool and report back over a
//! channel; [`Dashboard::process_next`] applies one completion at a time.
//!
//! Each effect (catalog, bets) numbers its requests. A completion is applied
//! only if it carries the latest number issued for its effect, so a slow,
//! older response can never overwrite what a newer one already delivered.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::LotteryApi;
use crate::auth::TokenSource;
use crate::error::FetchError;
use crate::model::{Bet, Game};
use crate::notice::{Notifier, Resource};
use crate::projector::{self, DisplayRow};
use crate::view::DashboardView;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub games: Vec<Game>,
    pub bets: Vec<Bet>,
    pub selected_filter: Option<Game>,
    pub games_loading: bool,
    pub bets_loading: bool,
}

#[derive(Debug)]
enum Completion {
    Games { request: u64, result: Result<Vec<Game>, FetchError> },
    Bets { request: u64, result: Result<Vec<Bet>, FetchError> },
}

pub struct Dashboard<A, T, N> {
    api: Arc<A>,
    auth: T,
    notifier: N,
    state: DashboardState,
    // Token the latest bets request was issued with
    token: String,
    games_request: u64,
    bets_request: u64,
    in_flight: usize,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<A, T, N> Dashboard<A, T, N>
where
    A: LotteryApi,
    T: TokenSource,
    N: Notifier,
{
    /// Mount the view: request the catalog once and the unfiltered bets list.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(api: A, auth: T, notifier: N) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let token = auth.token();
        let mut dashboard = Self {
            api: Arc::new(api),
            auth,
            notifier,
            state: DashboardState::default(),
            token,
            games_request: 0,
            bets_request: 0,
            in_flight: 0,
            completions_tx,
            completions_rx,
        };
        dashboard.load_games();
        dashboard.load_bets();
        dashboard
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn games(&self) -> &[Game] {
        &self.state.games
    }

    pub fn bets(&self) -> &[Bet] {
        &self.state.bets
    }

    pub fn selected_filter(&self) -> Option<&Game> {
        self.state.selected_filter.as_ref()
    }

    pub fn games_loading(&self) -> bool {
        self.state.games_loading
    }

    pub fn bets_loading(&self) -> bool {
        self.state.bets_loading
    }

    /// Number of fetches issued but not yet applied or discarded.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Display rows for the current bets, projected against the current catalog.
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.state.bets.iter().map(|bet| projector::project(bet, &self.state.games)).collect()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(&self.state)
    }

    /// React to the game selector. Picking the active game again clears the filter.
    pub fn select(&mut self, game_id: i64) {
        let mut game = self.state.games.iter().find(|g| g.id == game_id).cloned();
        if self.state.selected_filter.as_ref().map(|g| g.id) == game.as_ref().map(|g| g.id) {
            game = None;
        }

        if game != self.state.selected_filter {
            info!(game_id, filter = ?game.as_ref().map(|g| g.type_field.as_str()), "Filter changed");
            self.state.selected_filter = game;
            self.load_bets();
        }
    }

    /// Re-read the auth store and re-fetch bets if the token changed.
    pub fn sync_auth(&mut self) {
        let token = self.auth.token();
        if token != self.token {
            info!("Auth token changed");
            self.token = token;
            self.load_bets();
        }
    }

    /// Wait for the next fetch to settle and apply it.
    /// Returns false when nothing is in flight.
    pub async fn process_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.completions_rx.recv().await {
            Some(completion) => {
                self.in_flight -= 1;
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Apply completions until every issued fetch has settled.
    pub async fn run_until_idle(&mut self) {
        while self.process_next().await {}
    }

    fn load_games(&mut self) {
        self.games_request += 1;
        let request = self.games_request;
        self.state.games_loading = true;
        debug!(request, "Requesting games catalog");

        let api = Arc::clone(&self.api);
        self.spawn_fetch(move || api.fetch_games(), move |result| Completion::Games { request, result });
    }

    fn load_bets(&mut self) {
        self.bets_request += 1;
        let request = self.bets_request;
        self.state.bets_loading = true;

        let api = Arc::clone(&self.api);
        let token = self.token.clone();
        let game_type = self.state.selected_filter.as_ref().map(|g| g.type_field.clone());
        debug!(request, filter = ?game_type, "Requesting bets");

        self.spawn_fetch(
            move || api.fetch_bets(&token, game_type.as_deref()),
            move |result| Completion::Bets { request, result },
        );
    }

    fn spawn_fetch<R, F, W>(&mut self, fetch: F, wrap: W)
    where
        R: Send + 'static,
        F: FnOnce() -> Result<R, FetchError> + Send + 'static,
        W: FnOnce(Result<R, FetchError>) -> Completion + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::task::spawn_blocking(fetch).await {
                Ok(result) => result,
                Err(e) => Err(FetchError::Transport(format!("fetch task join error: {}", e))),
            };
            // The receiver lives as long as the dashboard
            let _ = tx.send(wrap(result));
        });
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Games { request, result } => {
                if request != self.games_request {
                    debug!(request, latest = self.games_request, "Discarding stale games response");
                    return;
                }
                self.state.games_loading = false;
                match result {
                    Ok(games) => {
                        info!(request, count = games.len(), "Games catalog loaded");
                        self.state.games = games;
                    }
                    Err(e) => self.report(Resource::Games, &e),
                }
            }
            Completion::Bets { request, result } => {
                if request != self.bets_request {
                    debug!(request, latest = self.bets_request, "Discarding stale bets response");
                    return;
                }
                self.state.bets_loading = false;
                match result {
                    Ok(bets) => {
                        info!(request, count = bets.len(), "Bets loaded");
                        self.state.bets = bets;
                    }
                    Err(e) => self.report(Resource::Bets, &e),
                }
            }
        }
    }

    fn report(&self, resource: Resource, error: &FetchError) {
        warn!(resource = %resource, error = %error, classified = error.is_classified(), "Fetch failed");
        self.notifier.notify(&error.notice_text(resource));
    }
}
