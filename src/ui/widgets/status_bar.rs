//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::query::QueryStatus;
use crate::state::{InputMode, Store};
use crate::ui::Theme;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, help_key: &str, theme: &Theme) {
        let connection_status = match (store.results.status(), store.results.error()) {
            (QueryStatus::Success, _) => {
                Span::styled("● Conectado", Style::default().fg(Color::Green))
            }
            (QueryStatus::Failed, Some(failure)) if failure.is_connectivity() => {
                Span::styled("○ Sem conexão", Style::default().fg(Color::Red))
            }
            (QueryStatus::Failed, _) => {
                Span::styled("○ Erro na API", Style::default().fg(Color::Red))
            }
            (QueryStatus::Loading | QueryStatus::Idle, _) => {
                Span::styled("◌ Conectando", Style::default().fg(Color::Yellow))
            }
        };

        let mode = match store.app.input_mode {
            InputMode::Normal => Span::raw(""),
            InputMode::Search => {
                Span::styled(" BUSCA ", Style::default().fg(Color::Black).bg(Color::Yellow))
            }
            InputMode::Insert => {
                Span::styled(" EDIÇÃO ", Style::default().fg(Color::Black).bg(Color::Yellow))
            }
        };

        let loading = if store.is_loading() {
            Span::styled(
                " Carregando... ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let help_hint = Span::styled(
            format!(" {} ajuda ", help_key),
            Style::default().fg(theme.muted),
        );

        let left_content = vec![
            Span::styled(
                " Palpiteiro ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            connection_status,
            Span::raw(" | "),
            Span::raw(store.app.current_view.title()),
            Span::raw(" "),
            mode,
            loading,
        ];

        let status_line = Line::from(left_content);

        // Right-align the help hint.
        let padding = (area.width as usize).saturating_sub(status_line.width() + help_hint.width());

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, area);
    }
}
