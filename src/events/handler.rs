//! Event handler for processing input events.

use super::InputEvent;
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for input before yielding.
    tick_rate: Duration,
    /// Store reference for state-aware handling.
    store_snapshot: StoreSnapshot,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Copy, Default)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    show_help: bool,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings, tick_rate: Duration) -> Self {
        Self {
            keybindings,
            tick_rate,
            store_snapshot: StoreSnapshot::default(),
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = StoreSnapshot {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            show_help: store.app.show_help,
        };
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Mouse(mouse) => return Ok(self.handle_mouse(mouse)),
                CrosstermEvent::Paste(text) if self.is_editing() => {
                    return Ok(Some(Action::InputText(text)));
                }
                // Terminal will automatically redraw
                _ => {}
            }
        }
        Ok(None)
    }

    fn is_editing(&self) -> bool {
        self.store_snapshot.input_mode != InputMode::Normal
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.store_snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Search | InputMode::Insert => self.handle_editing_mode(key),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = InputEvent::from(key);
        let bindings = &self.keybindings;

        // Global shortcuts
        if input.matches(&bindings.quit)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Some(Action::Quit);
        }
        if input.matches(&bindings.help) {
            return Some(Action::ToggleHelp);
        }
        if self.store_snapshot.show_help {
            // Any other key closes the help overlay.
            return Some(Action::ToggleHelp);
        }
        if input.matches(&bindings.refresh) {
            return Some(Action::RefetchResults);
        }

        // View switching
        let views = [
            (&bindings.dashboard, View::Dashboard),
            (&bindings.suggestions, View::Suggestions),
            (&bindings.history, View::History),
            (&bindings.checker, View::Checker),
        ];
        if let Some((_, view)) = views.iter().find(|(binding, _)| input.matches(binding)) {
            return Some(Action::SetView(*view));
        }
        match key.code {
            KeyCode::Tab => return Some(Action::NextView),
            KeyCode::BackTab => return Some(Action::PreviousView),
            _ => {}
        }

        // Navigation
        if input.matches(&bindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&bindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        match key.code {
            KeyCode::PageUp => return Some(Action::PageUp),
            KeyCode::PageDown => return Some(Action::PageDown),
            KeyCode::Home => return Some(Action::GoToTop),
            KeyCode::End => return Some(Action::GoToBottom),
            _ => {}
        }

        // View-specific actions
        let action = match self.store_snapshot.current_view {
            View::Dashboard => self.handle_dashboard_view(input),
            View::Suggestions => self.handle_suggestions_view(input),
            View::History => self.handle_history_view(input),
            View::Checker => self.handle_checker_view(input),
        };
        if action.is_some() {
            return action;
        }

        if input.matches(&bindings.back) {
            return Some(Action::DismissNotification);
        }
        None
    }

    fn handle_dashboard_view(&self, input: InputEvent) -> Option<Action> {
        input
            .matches(&self.keybindings.update)
            .then_some(Action::UpdateBackend)
    }

    fn handle_suggestions_view(&self, input: InputEvent) -> Option<Action> {
        if input.matches(&self.keybindings.generate) {
            return Some(Action::GenerateSuggestions);
        }
        if input.matches(&self.keybindings.copy) || input.matches(&self.keybindings.select) {
            return Some(Action::CopySelectedBet);
        }
        None
    }

    fn handle_history_view(&self, input: InputEvent) -> Option<Action> {
        if input.matches(&self.keybindings.search) {
            return Some(Action::SetInputMode(InputMode::Search));
        }
        if input.matches(&self.keybindings.select) {
            return Some(Action::OpenDetail);
        }
        None
    }

    fn handle_checker_view(&self, input: InputEvent) -> Option<Action> {
        let bindings = &self.keybindings;
        if input.matches(&bindings.edit) {
            return Some(Action::SetInputMode(InputMode::Insert));
        }
        if input.matches(&bindings.select) {
            return Some(Action::CheckBet);
        }
        if input.matches(&bindings.previous_contest) || input.matches("Left") {
            return Some(Action::PreviousContest);
        }
        if input.matches(&bindings.next_contest) || input.matches("Right") {
            return Some(Action::NextContest);
        }
        None
    }

    fn handle_editing_mode(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Esc => Some(Action::CancelInput),
            KeyCode::Enter => Some(Action::SubmitInput),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Delete => Some(Action::InputDelete),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            _ => InputEvent::from(key).text_char().map(Action::InputChar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn handler_for(view: View, mode: InputMode) -> EventHandler {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, Duration::from_secs(300));
        store.reduce(Action::SetView(view));
        store.reduce(Action::SetInputMode(mode));

        let mut handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(10));
        handler.update_store_snapshot(&store);
        handler
    }

    fn press(handler: &EventHandler, code: KeyCode) -> Option<Action> {
        handler.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_view_keys() {
        let handler = handler_for(View::Dashboard, InputMode::Normal);
        assert!(matches!(
            press(&handler, KeyCode::Char('4')),
            Some(Action::SetView(View::Checker))
        ));
        assert!(matches!(press(&handler, KeyCode::Tab), Some(Action::NextView)));
        assert!(matches!(press(&handler, KeyCode::Char('u')), Some(Action::UpdateBackend)));
        assert!(matches!(press(&handler, KeyCode::Char('r')), Some(Action::RefetchResults)));
    }

    #[test]
    fn test_view_specific_keys() {
        let palpites = handler_for(View::Suggestions, InputMode::Normal);
        assert!(matches!(
            press(&palpites, KeyCode::Char('g')),
            Some(Action::GenerateSuggestions)
        ));
        assert!(matches!(
            press(&palpites, KeyCode::Char('c')),
            Some(Action::CopySelectedBet)
        ));

        let history = handler_for(View::History, InputMode::Normal);
        assert!(matches!(
            press(&history, KeyCode::Char('/')),
            Some(Action::SetInputMode(InputMode::Search))
        ));
        assert!(matches!(press(&history, KeyCode::Enter), Some(Action::OpenDetail)));
        // Generate only applies on the suggestions view.
        assert!(press(&history, KeyCode::Char('g')).is_none());

        let checker = handler_for(View::Checker, InputMode::Normal);
        assert!(matches!(press(&checker, KeyCode::Char('l')), Some(Action::NextContest)));
        assert!(matches!(press(&checker, KeyCode::Left), Some(Action::PreviousContest)));
        assert!(matches!(press(&checker, KeyCode::Enter), Some(Action::CheckBet)));
    }

    #[test]
    fn test_editing_mode_captures_text() {
        let handler = handler_for(View::Checker, InputMode::Insert);
        // 'q' is text while editing, not quit.
        assert!(matches!(
            press(&handler, KeyCode::Char('q')),
            Some(Action::InputChar('q'))
        ));
        assert!(matches!(press(&handler, KeyCode::Enter), Some(Action::SubmitInput)));
        assert!(matches!(press(&handler, KeyCode::Esc), Some(Action::CancelInput)));
        assert!(matches!(
            press(&handler, KeyCode::Backspace),
            Some(Action::InputBackspace)
        ));
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = handler_for(View::Dashboard, InputMode::Normal);
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(handler.handle_key(key).is_none());
    }
}
