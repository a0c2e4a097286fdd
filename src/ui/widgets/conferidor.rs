//! Checker view: compare a typed bet against a past draw.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ball::{BallKind, ball_row};
use super::dashboard::{render_error, render_placeholder};
use super::text_field;
use crate::config::KeyBindings;
use crate::conference::ConferenceResult;
use crate::model::Draw;
use crate::state::{CONTEST_CHOICES, CheckerState, InputMode, Store};
use crate::ui::Theme;

/// Checker view.
pub struct Conferidor;

impl Conferidor {
    /// Render the checker view.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings, theme: &Theme) {
        let results = store.results.data();
        let Some(draw) = store.checker.selected_draw(results) else {
            match (results, store.results.error()) {
                (None, Some(failure)) => render_error(frame, area, failure, &keys.refresh, theme),
                (None, None) => render_placeholder(frame, area, "Carregando concursos...", theme),
                (Some(_), _) => render_placeholder(frame, area, "Nenhum concurso disponível", theme),
            }
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Contest selector
                Constraint::Length(3), // Numbers input
                Constraint::Length(3), // Drawn numbers
                Constraint::Min(0),    // Result
                Constraint::Length(1), // Hints
            ])
            .split(area);

        let choices = CheckerState::choices(results).len();
        let index = store.checker.position(results).unwrap_or(0);
        let selector = Paragraph::new(Line::from(vec![
            Span::styled(format!("◀ {}  ", keys.previous_contest), theme.dim()),
            Span::styled(
                format!("Concurso #{}", draw.contest),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" · {}", draw.date)),
            Span::styled(format!("  {} ▶", keys.next_contest), theme.dim()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Concurso ({}/{}, últimos {}) ",
                    index + 1,
                    choices,
                    CONTEST_CHOICES
                ))
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        );
        frame.render_widget(selector, chunks[0]);

        text_field(
            frame,
            chunks[1],
            " Seus números (15, separados por vírgula ou espaço) ",
            &store.checker.numbers,
            &format!("Pressione {} para digitar", keys.edit),
            store.app.input_mode == InputMode::Insert,
            theme,
        );

        let result = store
            .checker
            .result
            .as_ref()
            .filter(|r| r.contest == draw.contest);
        render_drawn(frame, chunks[2], draw, result, theme);

        match &store.checker.result {
            Some(result) => render_result(frame, chunks[3], result, theme),
            None => render_placeholder(
                frame,
                chunks[3],
                &format!("{} para conferir", keys.select),
                theme,
            ),
        }

        let hints = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", keys.edit), theme.heading()),
            Span::styled("editar  ", theme.dim()),
            Span::styled(format!("{} ", keys.select), theme.heading()),
            Span::styled("conferir  ", theme.dim()),
            Span::styled(
                format!("{}/{} ", keys.previous_contest, keys.next_contest),
                theme.heading(),
            ),
            Span::styled("concurso", theme.dim()),
        ]));
        frame.render_widget(hints, chunks[4]);
    }
}

/// Drawn numbers, marking hits when a result for this draw exists.
fn render_drawn(
    frame: &mut Frame,
    area: Rect,
    draw: &Draw,
    result: Option<&ConferenceResult>,
    theme: &Theme,
) {
    let line = Line::from(ball_row(
        &draw.numbers,
        |n| match result {
            Some(r) if r.hits.contains(&n) => BallKind::Hit,
            _ => BallKind::Primary,
        },
        theme,
    ));
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Números sorteados ")
            .borders(Borders::ALL)
            .border_style(theme.border_style(false)),
    );
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, result: &ConferenceResult, theme: &Theme) {
    let headline_style = if result.tier.is_prize() {
        Style::default()
            .fg(theme.ball_hit)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.dim().add_modifier(Modifier::BOLD)
    };

    let mut hits = vec![Span::styled("Acertos: ", theme.dim())];
    hits.extend(ball_row(&result.hits, |_| BallKind::Hit, theme));
    let mut misses = vec![Span::styled("Erros:   ", theme.dim())];
    misses.extend(ball_row(&result.misses, |_| BallKind::Miss, theme));

    let lines = vec![
        Line::from(Span::styled(
            format!("{} acertos", result.total),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(result.tier.headline(), headline_style)),
        Line::from(""),
        Line::from(hits),
        Line::from(""),
        Line::from(misses),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" Resultado · concurso #{} ", result.contest))
            .borders(Borders::ALL)
            .border_style(theme.border_style(result.tier.is_prize())),
    );
    frame.render_widget(paragraph, area);
}
