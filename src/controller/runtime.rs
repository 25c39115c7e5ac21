//! Event loop that owns the controller, the refresh timer and the fetch lifecycle

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};
use uuid::Uuid;
use crate::{
    errors::DashboardResult,
    network::QuoteSource,
    storage::PreferenceStore,
    types::{DashboardView, Theme, ViewState},
};
use super::{Command, DashboardController, RefreshGate, RefreshTimer, RefreshTrigger};

struct FetchOutcome {
    cycle_id: Uuid,
    result: DashboardResult<Value>,
}

pub struct DashboardRuntime<S: QuoteSource> {
    controller: DashboardController,
    gate: RefreshGate,
    source: Arc<S>,
    preferences: PreferenceStore,
    refresh_interval: Duration,
    commands_tx: mpsc::Sender<Command>,
    commands_rx: mpsc::Receiver<Command>,
    outcomes_tx: mpsc::Sender<FetchOutcome>,
    outcomes_rx: mpsc::Receiver<FetchOutcome>,
    views_tx: watch::Sender<DashboardView>,
}

impl<S: QuoteSource> DashboardRuntime<S> {
    /// The theme is restored from `preferences`; everything else starts from `view_state`.
    pub fn new(
        source: S,
        preferences: PreferenceStore,
        view_state: ViewState,
        refresh_interval: Duration,
    ) -> Self {
        let theme = preferences.load_theme();
        let controller = DashboardController::new(view_state, theme);
        let (commands_tx, commands_rx) = mpsc::channel(64);
        let (outcomes_tx, outcomes_rx) = mpsc::channel(4);
        let (views_tx, _) = watch::channel(controller.view().clone());

        Self {
            controller,
            gate: RefreshGate::new(),
            source: Arc::new(source),
            preferences,
            refresh_interval,
            commands_tx,
            commands_rx,
            outcomes_tx,
            outcomes_rx,
            views_tx,
        }
    }

    /// Handle for issuing commands from other tasks (prompt, signal handler).
    pub fn commands(&self) -> mpsc::Sender<Command> {
        self.commands_tx.clone()
    }

    /// Every recomputed view is published here.
    pub fn subscribe(&self) -> watch::Receiver<DashboardView> {
        self.views_tx.subscribe()
    }

    /// Runs until a `Shutdown` command arrives. The periodic timer is cancelled on the way out.
    pub async fn run(mut self) -> DashboardView {
        let timer = RefreshTimer::start(self.refresh_interval, self.commands_tx.clone());
        info!(
            "🔄 Refreshing every {}s (plus manual refreshes)",
            self.refresh_interval.as_secs()
        );

        self.request_refresh(RefreshTrigger::Startup);

        loop {
            tokio::select! {
                Some(command) = self.commands_rx.recv() => {
                    if command == Command::Shutdown {
                        info!("Shutdown requested, stopping dashboard loop...");
                        break;
                    }
                    self.handle_command(command);
                }
                Some(outcome) = self.outcomes_rx.recv() => {
                    self.handle_outcome(outcome);
                }
            }
        }

        timer.cancel();
        self.controller.view().clone()
    }

    fn handle_command(&mut self, command: Command) {
        debug!(?command, "Applying command");

        match command {
            Command::Refresh(trigger) => {
                self.request_refresh(trigger);
                return;
            }
            Command::SetQuery(query) => self.controller.set_query(query),
            Command::SetSort(key, direction) => self.controller.set_sort(key, direction),
            Command::ToggleSort(key) => self.controller.toggle_sort(key),
            Command::SetFeeRate(rate) => self.controller.set_fee_rate_pct(rate),
            Command::SetInvestment(amount) => self.controller.set_investment(amount),
            Command::SetTheme(theme) => self.change_theme(theme),
            Command::ToggleTheme => self.change_theme(self.controller.theme().toggled()),
            Command::Shutdown => return,
        }

        self.publish();
    }

    fn change_theme(&mut self, theme: Theme) {
        self.controller.set_theme(theme);
        if let Err(e) = self.preferences.save_theme(theme) {
            // The theme still applies for this session
            warn!("{}", e.user_message());
        }
    }

    fn request_refresh(&mut self, trigger: RefreshTrigger) {
        if !self.gate.try_begin() {
            debug!(?trigger, "Refresh already in flight, queued");
            return;
        }
        self.spawn_fetch(trigger);
    }

    fn spawn_fetch(&self, trigger: RefreshTrigger) {
        let cycle_id = Uuid::new_v4();
        let source = Arc::clone(&self.source);
        let outcomes = self.outcomes_tx.clone();

        debug!(%cycle_id, ?trigger, "Starting refresh");
        tokio::spawn(async move {
            let result = source.fetch_quotes().await;
            // Receiver only disappears once the loop has shut down
            let _ = outcomes.send(FetchOutcome { cycle_id, result }).await;
        });
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome) {
        debug!(cycle_id = %outcome.cycle_id, ok = outcome.result.is_ok(), "Refresh finished");
        self.controller.apply_refresh(outcome.result, Utc::now());
        self.publish();

        if self.gate.finish() {
            self.spawn_fetch(RefreshTrigger::Queued);
        }
    }

    fn publish(&self) {
        self.views_tx.send_replace(self.controller.view().clone());
    }
}
