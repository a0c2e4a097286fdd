//! Lottery ball rendering.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::model::pad;
use crate::ui::Theme;

/// Colour variant of a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Primary,
    Hit,
    Miss,
    Hot,
    Cold,
}

impl BallKind {
    fn style(self, theme: &Theme) -> Style {
        let bg = match self {
            BallKind::Primary => theme.ball_primary,
            BallKind::Hit => theme.ball_hit,
            BallKind::Miss => theme.ball_miss,
            BallKind::Hot => theme.ball_hot,
            BallKind::Cold => theme.ball_cold,
        };
        Style::default()
            .bg(bg)
            .fg(theme.ball_text)
            .add_modifier(Modifier::BOLD)
    }
}

/// A single ball, e.g. ` 07 `.
pub fn ball(number: u8, kind: BallKind, theme: &Theme) -> Span<'static> {
    Span::styled(format!(" {} ", pad(number)), kind.style(theme))
}

/// A row of balls separated by a space.
pub fn ball_row(
    numbers: &[u8],
    kind: impl Fn(u8) -> BallKind,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(numbers.len() * 2);
    for (i, &n) in numbers.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(ball(n, kind(n), theme));
    }
    spans
}

/// Balls wrapped into lines of `per_line`.
pub fn ball_lines(
    numbers: &[u8],
    per_line: usize,
    kind: impl Fn(u8) -> BallKind,
    theme: &Theme,
) -> Vec<Line<'static>> {
    numbers
        .chunks(per_line.max(1))
        .map(|chunk| Line::from(ball_row(chunk, &kind, theme)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_is_zero_padded() {
        let theme = Theme::default();
        let span = ball(7, BallKind::Primary, &theme);
        assert_eq!(span.content, " 07 ");
        assert_eq!(span.style.bg, Some(theme.ball_primary));
    }

    #[test]
    fn test_ball_row_kinds_and_spacing() {
        let theme = Theme::default();
        let spans = ball_row(
            &[3, 16],
            |n| if n <= 15 { BallKind::Hit } else { BallKind::Miss },
            &theme,
        );
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " 03   16 ");
        assert_eq!(spans[0].style.bg, Some(theme.ball_hit));
        assert_eq!(spans[2].style.bg, Some(theme.ball_miss));
    }

    #[test]
    fn test_ball_lines_chunking() {
        let theme = Theme::default();
        let numbers: Vec<u8> = (1..=15).collect();
        let lines = ball_lines(&numbers, 5, |_| BallKind::Primary, &theme);
        assert_eq!(lines.len(), 3);
    }
}
