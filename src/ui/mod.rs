//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod theme;
mod widgets;

pub use layout::{Layout, centered_rect};
pub use theme::Theme;

use crate::config::{Config, KeyBindings};
use crate::state::{Store, View};
use ratatui::Frame;
use widgets::{Conferidor, Dashboard, HelpPanel, Historico, Palpites, Sidebar, StatusBar};

/// Main UI renderer.
pub struct Ui {
    theme: Theme,
    keys: KeyBindings,
}

impl Ui {
    /// Create a renderer from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            theme: Theme::from_config(&config.theme),
            keys: config.keybindings.clone(),
        }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());
        let (theme, keys) = (&self.theme, &self.keys);

        StatusBar::render(frame, layout.status_area, store, &keys.help, theme);
        Sidebar::render(frame, layout.sidebar_area, store, keys, theme);

        // Render main content based on current view
        match store.app.current_view {
            View::Dashboard => Dashboard::render(frame, layout.main_area, store, &keys.refresh, theme),
            View::Suggestions => Palpites::render(frame, layout.main_area, store, keys, theme),
            View::History => Historico::render(frame, layout.main_area, store, keys, theme),
            View::Checker => Conferidor::render(frame, layout.main_area, store, keys, theme),
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), keys, theme);
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draw, Results};
    use crate::query::FetchFailure;
    use crate::state::{Action, InputMode};
    use ratatui::{Terminal, backend::TestBackend};
    use std::collections::BTreeMap;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn loaded_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, Duration::from_secs(300));
        let history: Vec<Draw> = (0..3)
            .map(|i| Draw::new(3200 - i, "02/09/2024", (1..=15).collect()))
            .collect();
        store.reduce(Action::ResultsLoaded(Ok(Results {
            latest: history[0].clone(),
            total_draws: 3200,
            frequencies: BTreeMap::from([(1, 1800), (25, 1500)]),
            hot: vec![1],
            cold: vec![25],
            history,
        })));
        store
    }

    fn draw(store: &Store) -> String {
        let ui = Ui::new(&Config::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| ui.render(frame, store)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_every_view_renders() {
        let mut store = loaded_store();
        for view in View::ALL {
            store.reduce(Action::SetView(view));
            let screen = draw(&store);
            assert!(screen.contains("Palpiteiro"));
        }
    }

    #[test]
    fn test_dashboard_shows_latest_contest() {
        let store = loaded_store();
        let screen = draw(&store);
        assert!(screen.contains("#3200"));
        assert!(screen.contains("Conectado"));
    }

    #[test]
    fn test_checker_result_rendered() {
        let mut store = loaded_store();
        store.reduce(Action::SetView(View::Checker));
        store.reduce(Action::SetInputMode(InputMode::Insert));
        store.reduce(Action::InputText(
            "1,2,3,4,5,6,7,8,9,10,11,12,13,14,16".to_string(),
        ));
        store.reduce(Action::SubmitInput);
        let screen = draw(&store);
        assert!(screen.contains("14 acertos"));
    }

    #[test]
    fn test_failed_load_shows_retry_in_every_view() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, Duration::from_secs(300));
        store.reduce(Action::ResultsLoaded(Err(FetchFailure::Timeout)));
        for view in [View::Dashboard, View::History, View::Checker] {
            store.reduce(Action::SetView(view));
            let screen = draw(&store);
            assert!(screen.contains("Erro de conexão"), "{:?}", view);
            assert!(screen.contains("Pressione r para tentar novamente."), "{:?}", view);
            assert!(!screen.contains("Carregando"), "{:?}", view);
        }
    }

    #[test]
    fn test_failed_refetch_keeps_data_with_warning() {
        let mut store = loaded_store();
        assert!(!draw(&store).contains("Falha ao atualizar"));

        store.reduce(Action::ResultsLoaded(Err(FetchFailure::Status(502))));
        let screen = draw(&store);
        assert!(screen.contains("#3200"));
        assert!(screen.contains("Falha ao atualizar: Erro da API: 502."));
    }

    #[test]
    fn test_help_overlay() {
        let mut store = loaded_store();
        store.reduce(Action::ToggleHelp);
        assert!(draw(&store).contains("Ajuda"));
    }
}
