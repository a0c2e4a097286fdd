//! Navigation sidebar widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::config::KeyBindings;
use crate::state::{Store, View};
use crate::ui::Theme;

/// Sidebar listing the views.
pub struct Sidebar;

impl Sidebar {
    /// Render the sidebar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Brand
                Constraint::Min(0),    // Views
                Constraint::Length(2), // Latest contest
            ])
            .split(inner);

        let brand = Paragraph::new(vec![
            Line::from(Span::styled(" 🍀 Palpiteiro", theme.heading())),
            Line::from(Span::styled("    Lotofácil V2", theme.dim())),
        ]);
        frame.render_widget(brand, chunks[0]);

        let items: Vec<ListItem> = View::ALL
            .iter()
            .map(|view| {
                let key = match view {
                    View::Dashboard => &keys.dashboard,
                    View::Suggestions => &keys.suggestions,
                    View::History => &keys.history,
                    View::Checker => &keys.checker,
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", key), theme.dim()),
                    Span::raw(view.title()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(
            View::ALL
                .iter()
                .position(|v| *v == store.app.current_view),
        );
        frame.render_stateful_widget(list, chunks[1], &mut state);

        if let Some(results) = store.results.data() {
            let footer = Paragraph::new(vec![
                Line::from(Span::styled(" Último concurso", theme.dim())),
                Line::from(format!(" #{} · {}", results.latest.contest, results.latest.date)),
            ]);
            frame.render_widget(footer, chunks[2]);
        }
    }
}
