//! Data conversion utilities for API responses.

use super::wire::{AtualizarResponse, PalpitesResponse, ResultadosResponse, WireDraw};
use crate::model::{Bet, Draw, Provenance, RefreshStatus, Results, Suggestions};
use chrono::{DateTime, Local, NaiveDateTime};
use std::collections::BTreeMap;

/// Converts API responses to domain types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a results payload.
    pub fn convert_results(response: ResultadosResponse) -> Results {
        let frequencies = response
            .frequencia_numeros
            .into_iter()
            .filter_map(|(key, count)| match key.trim().parse::<u8>() {
                Ok(number) => Some((number, count)),
                Err(_) => {
                    tracing::warn!(key = %key, "ignoring non-numeric frequency key");
                    None
                }
            })
            .collect::<BTreeMap<_, _>>();

        Results {
            latest: Self::convert_draw(response.ultimo_concurso),
            total_draws: response.total_sorteios,
            frequencies,
            hot: response.numeros_quentes,
            cold: response.numeros_frios,
            history: response
                .historico
                .into_iter()
                .map(Self::convert_draw)
                .collect(),
        }
    }

    /// Convert a single draw, keeping it even when malformed.
    pub fn convert_draw(draw: WireDraw) -> Draw {
        let draw = Draw::new(draw.concurso, draw.data, draw.dezenas);
        if !draw.is_well_formed() {
            tracing::warn!(
                contest = draw.contest,
                numbers = ?draw.numbers,
                "draw does not hold 15 distinct numbers in 1..=25"
            );
        }
        draw
    }

    /// Convert a suggestions payload.
    pub fn convert_suggestions(response: PalpitesResponse) -> Suggestions {
        let bets: Vec<Bet> = response.palpites.into_iter().map(Bet::new).collect();
        for (index, bet) in bets.iter().enumerate() {
            if !bet.is_well_formed() {
                tracing::warn!(bet = index + 1, numbers = ?bet.numbers, "malformed suggested bet");
            }
        }

        Suggestions {
            bets,
            fixed: response.numeros_fixos,
            generated_at: Self::parse_timestamp(&response.data_geracao),
            generated_at_raw: response.data_geracao,
            based_on: Provenance {
                total_draws: response.baseado_em.total_sorteios,
                last_contest: response.baseado_em.ultimo_concurso,
            },
        }
    }

    /// Convert a refresh-status payload.
    pub fn convert_refresh(response: AtualizarResponse) -> RefreshStatus {
        RefreshStatus {
            status: response.status,
            message: response.message,
            new_draws: response.novos_concursos,
        }
    }

    /// Parse an RFC 3339 timestamp into local time, or a naive ISO timestamp as-is.
    fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Local).naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    }
}
