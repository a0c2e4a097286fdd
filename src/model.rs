//! Domain types for Lotofácil draws and bets.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use std::collections::BTreeMap;

/// Lowest number on a Lotofácil ticket.
pub const MIN_NUMBER: u8 = 1;
/// Highest number on a Lotofácil ticket.
pub const MAX_NUMBER: u8 = 25;
/// Numbers drawn per contest and marked per bet.
pub const NUMBERS_PER_DRAW: usize = 15;

/// Check whether a value is a valid Lotofácil number.
pub fn in_range(n: i64) -> bool {
    (i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER)).contains(&n)
}

/// Format a number the way it is printed on tickets (`07`).
pub fn pad(n: u8) -> String {
    format!("{:02}", n)
}

/// Format a list of numbers as `01, 02, 13`.
pub fn format_numbers(numbers: &[u8]) -> String {
    numbers.iter().map(|n| pad(*n)).collect::<Vec<_>>().join(", ")
}

/// One official draw (concurso).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Contest number, unique per draw.
    pub contest: u32,
    /// Draw date as published by the backend (usually `dd/mm/yyyy`).
    pub date: String,
    /// Drawn numbers, ascending.
    pub numbers: Vec<u8>,
}

impl Draw {
    pub fn new(contest: u32, date: impl Into<String>, mut numbers: Vec<u8>) -> Self {
        numbers.sort_unstable();
        Self {
            contest,
            date: date.into(),
            numbers,
        }
    }

    /// Parse the published date into a calendar date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%d/%m/%Y")
            .or_else(|_| NaiveDate::parse_from_str(&self.date, "%Y-%m-%d"))
            .ok()
    }

    /// Weekday name in Portuguese, when the date parses.
    pub fn weekday(&self) -> Option<&'static str> {
        self.calendar_date().map(|d| weekday_pt(d.weekday()))
    }

    /// Whether the draw holds 15 distinct numbers in range.
    pub fn is_well_formed(&self) -> bool {
        is_valid_ticket(&self.numbers)
    }

    /// Substring match over contest number and date, case-sensitive.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.contest.to_string().contains(term) || self.date.contains(term)
    }
}

fn weekday_pt(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// A 15-number bet (palpite/aposta).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    /// Numbers, ascending.
    pub numbers: Vec<u8>,
}

impl Bet {
    pub fn new(mut numbers: Vec<u8>) -> Self {
        numbers.sort_unstable();
        Self { numbers }
    }

    pub fn is_well_formed(&self) -> bool {
        is_valid_ticket(&self.numbers)
    }

    /// Text copied to the clipboard.
    pub fn to_clipboard_text(&self) -> String {
        format_numbers(&self.numbers)
    }
}

fn is_valid_ticket(numbers: &[u8]) -> bool {
    let mut seen = [false; MAX_NUMBER as usize + 1];
    numbers.len() == NUMBERS_PER_DRAW
        && numbers.iter().all(|&n| {
            let fresh = in_range(i64::from(n)) && !seen[n as usize];
            if fresh {
                seen[n as usize] = true;
            }
            fresh
        })
}

/// Aggregated results and statistics from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Results {
    /// Most recent draw.
    pub latest: Draw,
    /// Total number of draws known to the backend.
    pub total_draws: u32,
    /// Draw count per number.
    pub frequencies: BTreeMap<u8, u32>,
    /// Most frequently drawn numbers, hottest first.
    pub hot: Vec<u8>,
    /// Least frequently drawn numbers, coldest first.
    pub cold: Vec<u8>,
    /// Draw history, newest first.
    pub history: Vec<Draw>,
}

impl Results {
    /// Frequency of a number, zero when absent.
    pub fn frequency(&self, number: u8) -> u32 {
        self.frequencies.get(&number).copied().unwrap_or(0)
    }

    /// History entries matching a search term.
    pub fn search(&self, term: &str) -> Vec<&Draw> {
        self.history.iter().filter(|d| d.matches(term)).collect()
    }
}

/// Where a batch of suggestions came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub total_draws: u32,
    pub last_contest: u32,
}

/// A batch of generated bets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub bets: Vec<Bet>,
    /// Hot numbers repeated across most bets.
    pub fixed: Vec<u8>,
    /// Generation timestamp as sent by the backend.
    pub generated_at_raw: String,
    /// Parsed generation time, in local wall-clock terms.
    pub generated_at: Option<NaiveDateTime>,
    pub based_on: Provenance,
}

impl Suggestions {
    pub fn is_fixed(&self, number: u8) -> bool {
        self.fixed.contains(&number)
    }

    /// Generation time formatted as `dd/mm/yyyy HH:MM:SS`, or the raw text.
    pub fn generated_at_display(&self) -> String {
        self.generated_at
            .map(|t| t.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| self.generated_at_raw.clone())
    }
}

/// Outcome of asking the backend to ingest new draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshStatus {
    pub status: String,
    pub message: String,
    pub new_draws: Option<u32>,
}

impl RefreshStatus {
    /// One-line summary for a notification.
    pub fn summary(&self) -> String {
        match self.new_draws {
            Some(n) => format!("{} ({} novos concursos)", self.message, n),
            None => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(contest: u32, date: &str) -> Draw {
        Draw::new(contest, date, (1..=15).rev().collect())
    }

    #[test]
    fn test_draw_numbers_sorted() {
        let d = draw(3000, "01/02/2024");
        assert_eq!(d.numbers, (1..=15).collect::<Vec<u8>>());
        assert!(d.is_well_formed());
    }

    #[test]
    fn test_calendar_date_formats() {
        assert_eq!(
            draw(1, "01/02/2024").calendar_date(),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert_eq!(
            draw(1, "2024-02-01").calendar_date(),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
        assert_eq!(draw(1, "ontem").calendar_date(), None);
        assert_eq!(draw(1, "01/02/2024").weekday(), Some("quinta-feira"));
    }

    #[test]
    fn test_draw_matches_is_case_sensitive_substring() {
        let d = Draw::new(3105, "15/Jun/2024", vec![]);
        assert!(d.matches(""));
        assert!(d.matches("310"));
        assert!(d.matches("Jun"));
        assert!(!d.matches("jun"));
        assert!(!d.matches("2025"));
    }

    #[test]
    fn test_malformed_tickets() {
        assert!(!Bet::new((1..=14).collect()).is_well_formed());
        let mut repeated: Vec<u8> = (1..=14).collect();
        repeated.push(14);
        assert!(!Bet::new(repeated).is_well_formed());
        let mut out_of_range: Vec<u8> = (1..=14).collect();
        out_of_range.push(26);
        assert!(!Bet::new(out_of_range).is_well_formed());
    }

    #[test]
    fn test_clipboard_text_is_zero_padded() {
        let bet = Bet::new(vec![13, 2, 1]);
        assert_eq!(bet.to_clipboard_text(), "01, 02, 13");
    }

    #[test]
    fn test_refresh_summary() {
        let status = RefreshStatus {
            status: "ok".into(),
            message: "Base atualizada".into(),
            new_draws: Some(2),
        };
        assert_eq!(status.summary(), "Base atualizada (2 novos concursos)");
    }
}
