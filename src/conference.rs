//! Bet conference: checking a hand-entered bet against a past draw.

use crate::model::{Draw, NUMBERS_PER_DRAW, in_range};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Why a conference could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConferenceError {
    #[error("Selecione um concurso: escolha o concurso que deseja conferir.")]
    NoDrawSelected,
    #[error("Números inválidos: digite exatamente 15 números entre 1 e 25 (encontrados {found}).")]
    WrongCount { found: usize },
}

/// Prize tier reached by a number of hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrizeTier {
    None,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Top,
}

impl PrizeTier {
    /// Classify a hit count.
    pub fn from_hits(hits: usize) -> Self {
        match hits {
            15.. => Self::Top,
            14 => Self::Fourteen,
            13 => Self::Thirteen,
            12 => Self::Twelve,
            11 => Self::Eleven,
            _ => Self::None,
        }
    }

    pub fn is_prize(self) -> bool {
        self != Self::None
    }

    /// Short label, e.g. `14 acertos`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "15 acertos",
            Self::Fourteen => "14 acertos",
            Self::Thirteen => "13 acertos",
            Self::Twelve => "12 acertos",
            Self::Eleven => "11 acertos",
            Self::None => "Sem premiação",
        }
    }

    /// Headline shown under the score.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Top => "🏆 PRÊMIO PRINCIPAL!",
            Self::Fourteen => "💰 14 acertos - Prêmio!",
            Self::Thirteen => "💵 13 acertos - Prêmio!",
            Self::Twelve => "🎫 12 acertos - Prêmio!",
            Self::Eleven => "🎟️ 11 acertos - Prêmio!",
            Self::None => "Sem premiação",
        }
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of checking a bet against a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceResult {
    /// Contest the bet was checked against.
    pub contest: u32,
    /// Bet numbers present in the draw, ascending.
    pub hits: Vec<u8>,
    /// Bet numbers absent from the draw, ascending.
    pub misses: Vec<u8>,
    /// Number of hits.
    pub total: usize,
    pub tier: PrizeTier,
}

/// Extract candidate numbers from free text.
///
/// Tokens are separated by any run of commas and whitespace. Each token is
/// read by its leading integer (`7.5` reads as 7); tokens without one and
/// values outside 1..=25 are dropped. Duplicates are kept.
pub fn parse_numbers(input: &str) -> Vec<u8> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(leading_integer)
        .filter(|n| in_range(*n))
        .filter_map(|n| u8::try_from(n).ok())
        .collect()
}

fn leading_integer(token: &str) -> Option<i64> {
    let (sign, rest) = match token.strip_prefix(['+', '-']) {
        Some(rest) => (&token[..1], rest),
        None => ("", token),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    format!("{}{}", sign, &rest[..digits]).parse().ok()
}

/// Check a free-text bet against a draw.
pub fn check(input: &str, draw: Option<&Draw>) -> Result<ConferenceResult, ConferenceError> {
    let draw = draw.ok_or(ConferenceError::NoDrawSelected)?;

    let numbers = parse_numbers(input);
    if numbers.len() != NUMBERS_PER_DRAW {
        return Err(ConferenceError::WrongCount {
            found: numbers.len(),
        });
    }

    let drawn: HashSet<u8> = draw.numbers.iter().copied().collect();
    let (mut hits, mut misses): (Vec<u8>, Vec<u8>) =
        numbers.into_iter().partition(|n| drawn.contains(n));
    hits.sort_unstable();
    misses.sort_unstable();

    let total = hits.len();
    tracing::debug!(contest = draw.contest, total, "bet checked");

    Ok(ConferenceResult {
        contest: draw.contest,
        hits,
        misses,
        total,
        tier: PrizeTier::from_hits(total),
    })
}
