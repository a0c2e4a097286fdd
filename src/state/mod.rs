//! State management for Palpiteiro.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod checker_state;
mod history_state;
mod suggestions_state;

pub use app_state::{AppState, InputMode, TextInput, View};
pub use checker_state::{CONTEST_CHOICES, CheckerState};
pub use history_state::HistoryState;
pub use suggestions_state::SuggestionsState;

use crate::error::Result;
use crate::model::{RefreshStatus, Results, Suggestions};
use crate::query::{FetchResult, Query};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    NextView,
    PreviousView,
    SetInputMode(InputMode),

    // Backend queries (side effects run by the app)
    LoadResults,
    RefetchResults,
    GenerateSuggestions,
    UpdateBackend,
    CopySelectedBet,

    // Query completions
    ResultsLoaded(FetchResult<Results>),
    SuggestionsLoaded(FetchResult<Suggestions>),
    BackendUpdated(FetchResult<RefreshStatus>),

    // History
    OpenDetail,

    // Checker
    PreviousContest,
    NextContest,
    CheckBet,

    // Text input
    InputChar(char),
    InputText(String),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    SubmitInput,
    CancelInput,

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        duration_secs: u64,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
            duration_secs,
            created_at: Instant::now(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message, 3)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message, 3)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, message, 5)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, message, 10)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= Duration::from_secs(self.duration_secs)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Results, statistics and history (cached).
    pub results: Query<Results>,
    /// Generated suggestions (manual trigger).
    pub suggestions: Query<Suggestions>,
    /// Backend ingestion status (manual trigger).
    pub refresh: Query<RefreshStatus>,
    /// Suggestions view state.
    pub palpites: SuggestionsState,
    /// History view state.
    pub history: HistoryState,
    /// Checker view state.
    pub checker: CheckerState,
    /// Rows moved by PageUp/PageDown.
    page_size: usize,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender and results freshness window.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, results_stale_after: Duration) -> Self {
        Self {
            app: AppState::default(),
            results: Query::cached(results_stale_after),
            suggestions: Query::manual(),
            refresh: Query::manual(),
            palpites: SuggestionsState::default(),
            history: HistoryState::default(),
            checker: CheckerState::default(),
            page_size: 10,
            action_tx,
        }
    }

    /// Set the number of rows moved by PageUp/PageDown.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Whether any backend request is in flight.
    pub fn is_loading(&self) -> bool {
        self.results.is_loading() || self.suggestions.is_loading() || self.refresh.is_loading()
    }

    /// Drop the notification once it has been shown long enough.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .app
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.app.notification = None;
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.app.notification = Some(notification);
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.set_view(view),
            Action::NextView => self.set_view(self.app.current_view.next()),
            Action::PreviousView => self.set_view(self.app.current_view.previous()),
            Action::SetInputMode(mode) => self.app.input_mode = mode,

            // Side effects are started by the app before reaching the store.
            Action::LoadResults
            | Action::RefetchResults
            | Action::GenerateSuggestions
            | Action::UpdateBackend
            | Action::CopySelectedBet => {}

            // Query completions
            Action::ResultsLoaded(result) => self.results_loaded(result),
            Action::SuggestionsLoaded(result) => self.suggestions_loaded(result),
            Action::BackendUpdated(result) => self.backend_updated(result),

            // History
            Action::OpenDetail => {
                self.history.detail_contest = self
                    .history
                    .highlighted(self.results.data())
                    .map(|d| d.contest);
            }

            // Checker
            Action::PreviousContest => self.checker.step_contest(-1, self.results.data()),
            Action::NextContest => self.checker.step_contest(1, self.results.data()),
            Action::CheckBet => self.check_bet(),

            // Text input
            Action::InputChar(c) => self.edit_input(|input| input.push_char(c)),
            Action::InputText(text) => {
                self.edit_input(|input| text.chars().for_each(|c| input.push_char(c)))
            }
            Action::InputBackspace => self.edit_input(TextInput::pop_char),
            Action::InputDelete => self.edit_input(TextInput::delete_char),
            Action::CursorLeft => self.edit_input(TextInput::cursor_left),
            Action::CursorRight => self.edit_input(TextInput::cursor_right),
            Action::SubmitInput => {
                let mode = self.app.input_mode;
                self.app.input_mode = InputMode::Normal;
                if mode == InputMode::Insert {
                    self.check_bet();
                }
            }
            Action::CancelInput => {
                if self.app.input_mode == InputMode::Search {
                    self.edit_input(TextInput::clear);
                }
                self.app.input_mode = InputMode::Normal;
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-(self.page_size as isize)),
            Action::PageDown => self.scroll(self.page_size as isize),
            Action::GoToTop => self.scroll(isize::MIN),
            Action::GoToBottom => self.scroll(isize::MAX),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => self.notify(notification),
            Action::DismissNotification => self.app.notification = None,

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn set_view(&mut self, view: View) {
        self.app.current_view = view;
        self.app.input_mode = InputMode::Normal;
        match view {
            View::History => self.history.clamp(self.results.data()),
            View::Checker => self.checker.step_contest(0, self.results.data()),
            _ => {}
        }
    }

    fn results_loaded(&mut self, result: FetchResult<Results>) {
        match &result {
            Ok(results) => tracing::info!(
                latest = results.latest.contest,
                history = results.history.len(),
                "results loaded"
            ),
            Err(failure) => tracing::warn!(%failure, "results failed"),
        }
        self.results.resolve(result, tokio::time::Instant::now());
        self.history.clamp(self.results.data());
        self.checker.step_contest(0, self.results.data());
    }

    fn suggestions_loaded(&mut self, result: FetchResult<Suggestions>) {
        match &result {
            Ok(suggestions) => {
                tracing::info!(bets = suggestions.bets.len(), "suggestions generated");
                self.palpites.selected_index = (!suggestions.bets.is_empty()).then_some(0);
                self.notify(Notification::success(
                    "Palpites Gerados!",
                    format!(
                        "{} novos palpites baseados em {} sorteios.",
                        suggestions.bets.len(),
                        suggestions.based_on.total_draws
                    ),
                ));
            }
            Err(failure) => {
                tracing::warn!(%failure, "suggestions failed");
                self.notify(Notification::error(
                    "Erro",
                    "Não foi possível gerar os palpites. Tente novamente.",
                ));
            }
        }
        self.suggestions.resolve(result, tokio::time::Instant::now());
    }

    fn backend_updated(&mut self, result: FetchResult<RefreshStatus>) {
        match &result {
            Ok(status) => {
                tracing::info!(status = %status.status, new_draws = ?status.new_draws, "backend updated");
                self.notify(Notification::success("Base atualizada", status.summary()));
                self.results.invalidate();
                if let Err(e) = self.dispatch(Action::LoadResults) {
                    tracing::warn!(error = %e, "could not schedule results reload");
                }
            }
            Err(failure) => {
                tracing::warn!(%failure, "backend update failed");
                self.notify(Notification::error(
                    "Erro ao atualizar",
                    failure.to_string(),
                ));
            }
        }
        self.refresh.resolve(result, tokio::time::Instant::now());
    }

    fn check_bet(&mut self) {
        match self.checker.check(self.results.data()) {
            Ok(result) => {
                tracing::debug!(contest = result.contest, tier = %result.tier, "conference done");
            }
            Err(e) => self.notify(Notification::error("Conferência", e.to_string())),
        }
    }

    /// Apply an edit to the text field of the active input mode.
    fn edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        match self.app.input_mode {
            InputMode::Search => {
                edit(&mut self.history.search);
                self.history.selected_index = None;
                self.history.clamp(self.results.data());
            }
            InputMode::Insert => edit(&mut self.checker.numbers),
            InputMode::Normal => {}
        }
    }

    fn scroll(&mut self, delta: isize) {
        fn step(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
            if len == 0 {
                return None;
            }
            let current = current.unwrap_or(0);
            Some(current.saturating_add_signed(delta).min(len - 1))
        }

        match self.app.current_view {
            View::History => {
                let len = self.history.filtered(self.results.data()).len();
                self.history.selected_index = step(self.history.selected_index, delta, len);
            }
            View::Suggestions => {
                let len = self.suggestions.data().map_or(0, |s| s.bets.len());
                self.palpites.selected_index = step(self.palpites.selected_index, delta, len);
            }
            View::Checker => self.checker.step_contest(delta, self.results.data()),
            View::Dashboard => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bet, Draw, Provenance};
    use crate::query::FetchFailure;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn results() -> Results {
        let history: Vec<Draw> = (0..60)
            .map(|i| {
                let contest = 3200 - i;
                let numbers = if i == 0 { (1..=15).collect() } else { (11..=25).collect() };
                Draw::new(contest, format!("{:02}/08/2024", (i % 28) + 1), numbers)
            })
            .collect();
        Results {
            latest: history[0].clone(),
            total_draws: 3200,
            frequencies: BTreeMap::from([(1, 10), (2, 9)]),
            hot: vec![1, 2],
            cold: vec![25],
            history,
        }
    }

    fn suggestions() -> Suggestions {
        Suggestions {
            bets: vec![Bet::new((1..=15).collect()); 7],
            fixed: vec![1],
            generated_at_raw: String::new(),
            generated_at: None,
            based_on: Provenance {
                total_draws: 3200,
                last_contest: 3200,
            },
        }
    }

    fn store() -> (Store, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Store::new(tx, Duration::from_secs(300)), rx)
    }

    fn type_text(store: &mut Store, text: &str) {
        for c in text.chars() {
            store.reduce(Action::InputChar(c));
        }
    }

    #[test]
    fn test_history_search_filters_and_selects() {
        let (mut store, _rx) = store();
        store.reduce(Action::ResultsLoaded(Ok(results())));
        store.reduce(Action::SetView(View::History));
        assert_eq!(store.history.selected_index, Some(0));

        store.reduce(Action::SetInputMode(InputMode::Search));
        type_text(&mut store, "3199");
        let filtered = store.history.filtered(store.results.data());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].contest, 3199);

        store.reduce(Action::SubmitInput);
        store.reduce(Action::OpenDetail);
        assert_eq!(
            store.history.detail(store.results.data()).map(|d| d.contest),
            Some(3199)
        );

        store.reduce(Action::SetInputMode(InputMode::Search));
        store.reduce(Action::CancelInput);
        assert!(store.history.search.is_empty());
        assert_eq!(store.history.filtered(store.results.data()).len(), 60);
    }

    #[test]
    fn test_checker_flow() {
        let (mut store, _rx) = store();
        store.reduce(Action::ResultsLoaded(Ok(results())));
        store.reduce(Action::SetView(View::Checker));
        assert_eq!(store.checker.selected_contest, Some(3200));

        store.reduce(Action::SetInputMode(InputMode::Insert));
        type_text(&mut store, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,16");
        store.reduce(Action::SubmitInput);

        let result = store.checker.result.clone().unwrap();
        assert_eq!(result.total, 14);
        assert_eq!(result.misses, vec![16]);
        assert_eq!(store.app.input_mode, InputMode::Normal);

        // A bad check keeps the previous result and raises an error.
        store.reduce(Action::SetInputMode(InputMode::Insert));
        for _ in 0..3 {
            store.reduce(Action::InputBackspace);
        }
        store.reduce(Action::SubmitInput);
        assert_eq!(store.checker.result, Some(result));
        let notification = store.app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
    }

    #[test]
    fn test_contest_choices_capped() {
        let (mut store, _rx) = store();
        store.reduce(Action::ResultsLoaded(Ok(results())));
        store.reduce(Action::SetView(View::Checker));
        store.reduce(Action::GoToBottom);
        assert_eq!(store.checker.selected_contest, Some(3200 - (CONTEST_CHOICES as u32 - 1)));
        store.reduce(Action::PreviousContest);
        assert_eq!(store.checker.selected_contest, Some(3200 - (CONTEST_CHOICES as u32 - 2)));
        store.reduce(Action::GoToTop);
        assert_eq!(store.checker.selected_contest, Some(3200));
    }

    #[test]
    fn test_checker_opened_before_results() {
        let (mut store, _rx) = store();
        store.reduce(Action::SetView(View::Checker));
        assert_eq!(store.checker.selected_contest, None);

        store.reduce(Action::ResultsLoaded(Ok(results())));
        assert_eq!(store.checker.selected_contest, Some(3200));

        store.reduce(Action::SetInputMode(InputMode::Insert));
        type_text(&mut store, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15");
        store.reduce(Action::SubmitInput);
        assert_eq!(store.checker.result.as_ref().map(|r| r.total), Some(15));
    }

    #[test]
    fn test_checker_keeps_contest_on_newer_draw() {
        let (mut store, _rx) = store();
        store.reduce(Action::ResultsLoaded(Ok(results())));
        store.reduce(Action::SetView(View::Checker));
        store.reduce(Action::ScrollDown);
        store.reduce(Action::ScrollDown);
        assert_eq!(store.checker.selected_contest, Some(3198));

        let mut newer = results();
        let draw = Draw::new(3201, "30/08/2024", (1..=15).collect());
        newer.latest = draw.clone();
        newer.history.insert(0, draw);
        store.reduce(Action::ResultsLoaded(Ok(newer)));

        assert_eq!(store.checker.selected_contest, Some(3198));
        let selected = store.checker.selected_draw(store.results.data());
        assert_eq!(selected.map(|d| d.contest), Some(3198));
    }

    #[test]
    fn test_suggestions_notifications() {
        let (mut store, _rx) = store();
        store.reduce(Action::SuggestionsLoaded(Ok(suggestions())));
        assert_eq!(store.palpites.selected_index, Some(0));
        let notification = store.app.notification.clone().unwrap();
        assert_eq!(notification.message, "7 novos palpites baseados em 3200 sorteios.");

        store.reduce(Action::SetView(View::Suggestions));
        store.reduce(Action::PageDown);
        assert_eq!(store.palpites.selected_index, Some(6));

        store.reduce(Action::SuggestionsLoaded(Err(FetchFailure::Timeout)));
        assert_eq!(
            store.app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
        // Previous bets remain visible.
        assert_eq!(store.suggestions.data().map(|s| s.bets.len()), Some(7));
    }

    #[test]
    fn test_backend_update_schedules_results_reload() {
        let (mut store, mut rx) = store();
        store.reduce(Action::ResultsLoaded(Ok(results())));
        assert!(!store.results.should_fetch(tokio::time::Instant::now(), false));

        store.reduce(Action::BackendUpdated(Ok(RefreshStatus {
            status: "ok".into(),
            message: "Atualizado".into(),
            new_draws: Some(1),
        })));

        assert!(store.results.should_fetch(tokio::time::Instant::now(), false));
        assert!(matches!(rx.try_recv(), Ok(Action::LoadResults)));
    }

    #[test]
    fn test_notification_expiry() {
        let (mut store, _rx) = store();
        store.reduce(Action::ShowNotification(Notification::info("Copiado!", "ok")));
        let shown = store.app.notification.as_ref().unwrap().created_at;

        store.expire_notification(shown + Duration::from_secs(1));
        assert!(store.app.notification.is_some());
        store.expire_notification(shown + Duration::from_secs(3));
        assert!(store.app.notification.is_none());
    }
}
