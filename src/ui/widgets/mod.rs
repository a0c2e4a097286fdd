//! TUI widgets.

mod ball;
mod conferidor;
mod dashboard;
mod help;
mod historico;
mod notifications;
mod palpites;
mod sidebar;
mod status_bar;

pub use conferidor::Conferidor;
pub use dashboard::Dashboard;
pub use help::HelpPanel;
pub use historico::Historico;
pub use notifications::render_notification;
pub use palpites::Palpites;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::TextInput;
use crate::ui::Theme;

/// Single-line text field; places the terminal cursor while `editing`.
fn text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    placeholder: &str,
    editing: bool,
    theme: &Theme,
) {
    let content = if input.is_empty() && !editing {
        Span::styled(placeholder.to_string(), theme.dim())
    } else {
        Span::raw(input.as_str().to_string())
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(theme.border_style(editing));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if editing && inner.width > 0 {
        let offset = (input.cursor() as u16).min(inner.width - 1);
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}
