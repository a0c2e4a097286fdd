//! Application-level state.

use super::Notification;

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Suggestions,
    History,
    Checker,
}

impl View {
    /// Views in sidebar order.
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Suggestions,
        View::History,
        View::Checker,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Suggestions => "Palpites",
            Self::History => "Histórico",
            Self::Checker => "Conferidor",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing the history search term.
    Search,
    /// Typing bet numbers in the checker.
    Insert,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

/// A single-line text field with a cursor.
///
/// The cursor is a char index, so multi-byte input stays valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the input buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    /// Insert a character at the cursor.
    pub fn push_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Remove the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }
}

impl From<&str> for TextInput {
    fn from(s: &str) -> Self {
        Self {
            buffer: s.to_string(),
            cursor: s.chars().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle() {
        assert_eq!(View::Dashboard.next(), View::Suggestions);
        assert_eq!(View::Checker.next(), View::Dashboard);
        assert_eq!(View::Dashboard.previous(), View::Checker);
    }

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "1,3".chars() {
            input.push_char(c);
        }
        input.cursor_left();
        input.push_char('2');
        assert_eq!(input.as_str(), "1,23");

        input.pop_char();
        assert_eq!(input.as_str(), "1,3");
        input.delete_char();
        assert_eq!(input.as_str(), "1,");
        input.cursor_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_text_input_multibyte() {
        let mut input = TextInput::from("São");
        input.cursor_left();
        input.pop_char();
        assert_eq!(input.as_str(), "So");
        input.push_char('ã');
        assert_eq!(input.as_str(), "São");
    }
}
