//! JSON shapes returned by the backend.
//!
//! Field names mirror the backend payloads; [`super::DataConverter`] turns
//! them into domain types.

use serde::Deserialize;
use std::collections::HashMap;

/// One draw entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WireDraw {
    pub concurso: u32,
    pub data: String,
    pub dezenas: Vec<u8>,
}

/// `GET /api/resultados`
#[derive(Debug, Clone, Deserialize)]
pub struct ResultadosResponse {
    pub ultimo_concurso: WireDraw,
    pub total_sorteios: u32,
    /// Keyed by the number's decimal text.
    #[serde(default)]
    pub frequencia_numeros: HashMap<String, u32>,
    #[serde(default)]
    pub numeros_quentes: Vec<u8>,
    #[serde(default)]
    pub numeros_frios: Vec<u8>,
    #[serde(default)]
    pub historico: Vec<WireDraw>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseadoEm {
    pub total_sorteios: u32,
    pub ultimo_concurso: u32,
}

/// `GET /api/palpites`
#[derive(Debug, Clone, Deserialize)]
pub struct PalpitesResponse {
    pub palpites: Vec<Vec<u8>>,
    #[serde(default)]
    pub numeros_fixos: Vec<u8>,
    #[serde(default)]
    pub data_geracao: String,
    pub baseado_em: BaseadoEm,
}

/// `GET /api/atualizar`
#[derive(Debug, Clone, Deserialize)]
pub struct AtualizarResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub novos_concursos: Option<u32>,
}
