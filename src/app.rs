//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::{ApiClient, LotteryApi};
use crate::clipboard;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::EventHandler;
use crate::query::Loader;
use crate::state::{Action, Notification, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Runs backend requests.
    loader: Loader,
    /// Renderer.
    ui: Ui,
    /// Whether mouse capture was enabled.
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Build the client before touching the terminal so errors print normally.
        let api: Arc<dyn LotteryApi> = Arc::new(ApiClient::new(config.api.clone())?);
        tracing::info!(base_url = %config.api.base_url, "using backend");

        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(Error::terminal("stdout is not a terminal"));
        }

        // Set up terminal
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let store = Store::new(action_tx.clone(), config.cache.results_stale_after())
            .with_page_size(config.ui.page_size);
        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );
        let loader = Loader::new(api, action_tx);
        let ui = Ui::new(&config);

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            loader,
            ui,
            mouse_capture: config.ui.mouse_support,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Results load eagerly on start.
        self.store.dispatch(Action::LoadResults)?;

        // Main event loop
        loop {
            self.store.expire_notification(Instant::now());

            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                self.ui.render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action)?;
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("shutting down");
        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::LoadResults => {
                self.loader.load_results(&mut self.store.results, false);
            }
            Action::RefetchResults => {
                self.loader.load_results(&mut self.store.results, true);
            }
            Action::GenerateSuggestions => {
                self.loader.generate_suggestions(&mut self.store.suggestions);
            }
            Action::UpdateBackend => {
                if self.loader.update_backend(&mut self.store.refresh) {
                    self.store.reduce(Action::ShowNotification(Notification::info(
                        "Atualizando",
                        "Buscando novos concursos...",
                    )));
                }
            }
            Action::CopySelectedBet => self.copy_selected_bet()?,
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }

        Ok(())
    }

    /// Copy the highlighted suggestion to the clipboard.
    fn copy_selected_bet(&mut self) -> Result<()> {
        let Some(text) = self
            .store
            .palpites
            .selected_bet(self.store.suggestions.data())
            .map(|bet| bet.to_clipboard_text())
        else {
            self.store.reduce(Action::ShowNotification(Notification::warning(
                "Nada para copiar",
                "Gere e selecione um palpite primeiro.",
            )));
            return Ok(());
        };

        clipboard::copy(self.terminal.backend_mut(), &text)?;
        tracing::debug!(%text, "bet copied");
        self.store.reduce(Action::ShowNotification(Notification::success(
            "Copiado!",
            "Números copiados para a área de transferência.",
        )));
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}
