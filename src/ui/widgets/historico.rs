//! History view: searchable draw table with a detail panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::ball::{BallKind, ball_lines};
use super::dashboard::{render_error, render_placeholder};
use super::text_field;
use crate::config::KeyBindings;
use crate::model::{Draw, pad};
use crate::state::{InputMode, Store};
use crate::ui::Theme;

/// Numbers shown per row before collapsing into "+N mais".
const PREVIEW_NUMBERS: usize = 5;

/// History view.
pub struct Historico;

impl Historico {
    /// Render the history view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Min(0),    // Table and detail
            ])
            .split(area);

        let searching = store.app.input_mode == InputMode::Search;
        let placeholder = format!("Pressione {} para buscar por concurso ou data", keys.search);
        text_field(
            frame,
            chunks[0],
            " Buscar ",
            &store.history.search,
            &placeholder,
            searching,
            theme,
        );

        let results = match (store.results.data(), store.results.error()) {
            (Some(results), _) => results,
            (None, Some(failure)) => {
                render_error(frame, chunks[1], failure, &keys.refresh, theme);
                return;
            }
            (None, None) => {
                render_placeholder(frame, chunks[1], "Carregando histórico...", theme);
                return;
            }
        };

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let draws = store.history.filtered(Some(results));
        let total = results.history.len();
        Self::render_table(frame, body[0], &draws, total, store.history.selected_index, theme);

        match store.history.detail(Some(results)) {
            Some(draw) => render_detail(frame, body[1], draw, theme),
            None => render_placeholder(
                frame,
                body[1],
                &format!("{} para ver os detalhes", keys.select),
                theme,
            ),
        }
    }

    fn render_table(
        frame: &mut Frame,
        area: Rect,
        draws: &[&Draw],
        total: usize,
        selected: Option<usize>,
        theme: &Theme,
    ) {
        let header_cells = ["Concurso", "Data", "Dezenas"].iter().map(|h| {
            Cell::from(*h).style(theme.heading())
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = draws.iter().map(|draw| {
            Row::new(vec![
                Cell::from(format!("#{}", draw.contest)),
                Cell::from(draw.date.clone()),
                Cell::from(preview(&draw.numbers)),
            ])
            .height(1)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Histórico ({}/{}) ", draws.len(), total))
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(selected);

        frame.render_stateful_widget(table, area, &mut state);
    }
}

/// First numbers of a draw followed by the count of hidden ones.
fn preview(numbers: &[u8]) -> String {
    let shown: Vec<String> = numbers.iter().take(PREVIEW_NUMBERS).map(|&n| pad(n)).collect();
    let hidden = numbers.len().saturating_sub(PREVIEW_NUMBERS);
    if hidden == 0 {
        shown.join(" ")
    } else {
        format!("{} +{} mais", shown.join(" "), hidden)
    }
}

fn render_detail(frame: &mut Frame, area: Rect, draw: &Draw, theme: &Theme) {
    let date = match draw.weekday() {
        Some(weekday) => format!("{} · {}", draw.date, weekday),
        None => draw.date.clone(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Concurso #{}", draw.contest),
            theme.heading(),
        )),
        Line::from(Span::styled(date, theme.dim())),
        Line::from(""),
    ];
    for line in ball_lines(&draw.numbers, 5, |_| BallKind::Primary, theme) {
        lines.push(line);
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Detalhes ")
            .borders(Borders::ALL)
            .border_style(theme.border_style(false)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_collapses_rest() {
        let numbers: Vec<u8> = (1..=15).collect();
        assert_eq!(preview(&numbers), "01 02 03 04 05 +10 mais");
        assert_eq!(preview(&[3, 9]), "03 09");
    }
}
