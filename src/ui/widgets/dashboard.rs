//! Dashboard view: latest draw and number statistics.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};

use super::ball::{BallKind, ball_row};
use crate::model::{Results, pad};
use crate::query::FetchFailure;
use crate::state::Store;
use crate::ui::Theme;

/// Dashboard view.
pub struct Dashboard;

impl Dashboard {
    /// Render the dashboard.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, refresh_key: &str, theme: &Theme) {
        match (store.results.data(), store.results.error()) {
            (Some(results), failure) => {
                Self::render_results(frame, area, results, failure, refresh_key, theme)
            }
            (None, Some(failure)) => render_error(frame, area, failure, refresh_key, theme),
            (None, None) => render_placeholder(frame, area, "Carregando resultados...", theme),
        }
    }

    fn render_results(
        frame: &mut Frame,
        area: Rect,
        results: &Results,
        failure: Option<&FetchFailure>,
        refresh_key: &str,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(u16::from(failure.is_some())), // Refetch error
                Constraint::Length(4),                              // Stat cards
                Constraint::Length(3),                              // Latest numbers
                Constraint::Min(0),                                 // Hot/cold charts
            ])
            .split(area);

        // Older data stays on screen after a failed refetch.
        if let Some(failure) = failure {
            let warning = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" ⚠ Falha ao atualizar: {}. ", failure),
                    Style::default().fg(theme.ball_miss).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("Exibindo dados anteriores, {} tenta novamente.", refresh_key),
                    theme.dim(),
                ),
            ]));
            frame.render_widget(warning, chunks[0]);
        }

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);

        let latest = &results.latest;
        let date = match latest.weekday() {
            Some(weekday) => format!("{} ({})", latest.date, weekday),
            None => latest.date.clone(),
        };
        stat_card(frame, cards[0], "Último Concurso", format!("#{}", latest.contest), theme);
        stat_card(frame, cards[1], "Data do Sorteio", date, theme);
        stat_card(frame, cards[2], "Total de Sorteios", results.total_draws.to_string(), theme);

        let numbers = Paragraph::new(Line::from(ball_row(
            &latest.numbers,
            |_| BallKind::Primary,
            theme,
        )))
        .block(
            Block::default()
                .title(" Último Resultado ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        );
        frame.render_widget(numbers, chunks[2]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);

        frequency_chart(
            frame,
            charts[0],
            " 🔥 Números Quentes ",
            &results.hot,
            results,
            BallKind::Hot,
            theme,
        );
        frequency_chart(
            frame,
            charts[1],
            " ❄ Números Frios ",
            &results.cold,
            results,
            BallKind::Cold,
            theme,
        );
    }
}

fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, theme: &Theme) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), theme.dim())),
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false)),
    );
    frame.render_widget(card, area);
}

fn frequency_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    numbers: &[u8],
    results: &Results,
    kind: BallKind,
    theme: &Theme,
) {
    let colour = match kind {
        BallKind::Cold => theme.ball_cold,
        _ => theme.ball_hot,
    };
    let bars: Vec<Bar> = numbers
        .iter()
        .take(10)
        .map(|&n| {
            let frequency = results.frequency(n);
            Bar::default()
                .value(u64::from(frequency))
                .label(Line::from(pad(n)))
                .text_value(frequency.to_string())
                .style(Style::default().fg(colour))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .value_style(
            Style::default()
                .fg(theme.ball_text)
                .bg(colour)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(theme.dim());

    frame.render_widget(chart, area);
}

/// Error panel with a retry hint.
pub fn render_error(
    frame: &mut Frame,
    area: Rect,
    failure: &FetchFailure,
    refresh_key: &str,
    theme: &Theme,
) {
    let title = if failure.is_connectivity() {
        " Erro de conexão "
    } else {
        " Erro na API "
    };
    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Não foi possível carregar os resultados.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(failure.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            format!("Pressione {} para tentar novamente.", refresh_key),
            theme.dim(),
        )),
    ];
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.ball_miss)),
        );
    frame.render_widget(paragraph, area);
}

/// Centered placeholder text inside a bordered block.
pub fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line_area = Rect {
        y: inner.y + inner.height / 2,
        height: 1.min(inner.height),
        ..inner
    };
    let paragraph = Paragraph::new(Span::styled(
        text.to_string(),
        theme.dim().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);
}
