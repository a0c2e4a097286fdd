//! Suggestions view: generated bets with fixed numbers highlighted.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::ball::{BallKind, ball_row};
use super::dashboard::render_placeholder;
use crate::config::KeyBindings;
use crate::model::Suggestions;
use crate::state::Store;
use crate::ui::Theme;

/// Suggestions view.
pub struct Palpites;

impl Palpites {
    /// Render the suggestions view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings, theme: &Theme) {
        let Some(suggestions) = store.suggestions.data() else {
            let text = if store.suggestions.is_loading() {
                "Gerando palpites...".to_string()
            } else {
                format!("Pressione {} para gerar palpites", keys.generate)
            };
            render_placeholder(frame, area, &text, theme);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Provenance and fixed numbers
                Constraint::Min(0),    // Bets
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self::render_header(frame, chunks[0], suggestions, theme);
        Self::render_bets(frame, chunks[1], store, suggestions, theme);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", keys.copy), theme.heading()),
            Span::styled("copiar  ", theme.dim()),
            Span::styled(format!("{} ", keys.generate), theme.heading()),
            Span::styled("gerar novamente", theme.dim()),
        ]));
        frame.render_widget(hints, chunks[2]);
    }

    fn render_header(frame: &mut Frame, area: Rect, suggestions: &Suggestions, theme: &Theme) {
        let mut fixed = vec![Span::styled("Números fixos: ", theme.dim())];
        fixed.extend(ball_row(&suggestions.fixed, |_| BallKind::Hot, theme));

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Gerado em ", theme.dim()),
                Span::raw(suggestions.generated_at_display()),
                Span::styled(" · baseado em ", theme.dim()),
                Span::raw(format!("{} sorteios", suggestions.based_on.total_draws)),
                Span::styled(" até o concurso ", theme.dim()),
                Span::raw(format!("#{}", suggestions.based_on.last_contest)),
            ]),
            Line::from(fixed),
        ])
        .block(
            Block::default()
                .title(" Palpites Inteligentes ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        );
        frame.render_widget(header, area);
    }

    fn render_bets(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        suggestions: &Suggestions,
        theme: &Theme,
    ) {
        let items: Vec<ListItem> = suggestions
            .bets
            .iter()
            .enumerate()
            .map(|(i, bet)| {
                let mut spans = vec![Span::styled(format!("Palpite {}  ", i + 1), theme.dim())];
                spans.extend(ball_row(
                    &bet.numbers,
                    |n| {
                        if suggestions.is_fixed(n) {
                            BallKind::Hot
                        } else {
                            BallKind::Primary
                        }
                    },
                    theme,
                ));
                ListItem::new(vec![Line::from(spans), Line::from("")])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Palpites ({}) ", suggestions.bets.len()))
                    .borders(Borders::ALL)
                    .border_style(theme.border_style(false)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(store.palpites.selected_index);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
