//! Bet checker (Conferidor) state.

use super::TextInput;
use crate::conference::{self, ConferenceError, ConferenceResult};
use crate::model::{Draw, Results};

/// How many recent contests the checker offers.
pub const CONTEST_CHOICES: usize = 50;

/// State for the checker view.
#[derive(Debug, Default)]
pub struct CheckerState {
    /// Contest number picked in the selector.
    pub selected_contest: Option<u32>,
    /// Free-text bet numbers.
    pub numbers: TextInput,
    /// Last successful check.
    pub result: Option<ConferenceResult>,
}

impl CheckerState {
    /// Contests offered for checking, newest first.
    pub fn choices(results: Option<&Results>) -> &[Draw] {
        results
            .map(|r| &r.history[..r.history.len().min(CONTEST_CHOICES)])
            .unwrap_or_default()
    }

    /// Position of the selected contest among the choices.
    pub fn position(&self, results: Option<&Results>) -> Option<usize> {
        let contest = self.selected_contest?;
        Self::choices(results)
            .iter()
            .position(|d| d.contest == contest)
    }

    /// Currently selected draw.
    pub fn selected_draw<'a>(&self, results: Option<&'a Results>) -> Option<&'a Draw> {
        self.position(results)
            .map(|i| &Self::choices(results)[i])
    }

    /// Move the selection by `delta` positions.
    ///
    /// A selection that is missing from the choices restarts at the newest
    /// contest. Without choices the selection is left alone.
    pub fn step_contest(&mut self, delta: isize, results: Option<&Results>) {
        let choices = Self::choices(results);
        if choices.is_empty() {
            return;
        }
        let index = match self.position(results) {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(choices.len() - 1),
        };
        self.selected_contest = Some(choices[index].contest);
    }

    /// Check the typed numbers; on failure the previous result stays.
    pub fn check(&mut self, results: Option<&Results>) -> Result<&ConferenceResult, ConferenceError> {
        let result = conference::check(self.numbers.as_str(), self.selected_draw(results))?;
        Ok(&*self.result.insert(result))
    }
}
