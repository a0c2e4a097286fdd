//! Draw history browsing state.

use super::TextInput;
use crate::model::{Draw, Results};

/// State for the history view.
#[derive(Debug, Default)]
pub struct HistoryState {
    /// Search term over contest number and date.
    pub search: TextInput,
    /// Highlighted row in the filtered list.
    pub selected_index: Option<usize>,
    /// Contest shown in the detail panel.
    pub detail_contest: Option<u32>,
}

impl HistoryState {
    /// Draws matching the current search term.
    pub fn filtered<'a>(&self, results: Option<&'a Results>) -> Vec<&'a Draw> {
        results
            .map(|r| r.search(self.search.as_str()))
            .unwrap_or_default()
    }

    /// Draw under the highlight.
    pub fn highlighted<'a>(&self, results: Option<&'a Results>) -> Option<&'a Draw> {
        self.selected_index
            .and_then(|i| self.filtered(results).get(i).copied())
    }

    /// Draw shown in the detail panel.
    pub fn detail<'a>(&self, results: Option<&'a Results>) -> Option<&'a Draw> {
        let contest = self.detail_contest?;
        results?.history.iter().find(|d| d.contest == contest)
    }

    /// Keep the highlight inside the filtered list.
    pub fn clamp(&mut self, results: Option<&Results>) {
        let len = self.filtered(results).len();
        self.selected_index = match (len, self.selected_index) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }
}
