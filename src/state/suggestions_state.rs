//! Suggestions view state.

use crate::model::{Bet, Suggestions};

/// State for the suggestions view.
#[derive(Debug, Default)]
pub struct SuggestionsState {
    /// Highlighted bet.
    pub selected_index: Option<usize>,
}

impl SuggestionsState {
    pub fn selected_bet<'a>(&self, suggestions: Option<&'a Suggestions>) -> Option<&'a Bet> {
        self.selected_index
            .and_then(|i| suggestions?.bets.get(i))
    }
}
