use crate::models::coin::CoinRecord;
use super::coin_repository::CoinRepository;

/// Tracks which coin the chart targets and the current search term.
///
/// Only ids are stored; records are re-derived from the repository on
/// every event, so a selection can never outlive its snapshot.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected_chart_coin_id: Option<String>,
    search_term: String,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_chart_coin_id.as_deref()
    }

    /// The selected record in `repo`, if it is still present.
    pub fn selected<'a>(&self, repo: &'a CoinRepository) -> Option<&'a CoinRecord> {
        self.selected_id().and_then(|id| repo.find_by_id(id))
    }

    /// Point the chart at `id`. Returns the record when it exists; an
    /// unknown id leaves the selection untouched and returns `None`.
    pub fn select<'a>(&mut self, repo: &'a CoinRepository, id: &str) -> Option<&'a CoinRecord> {
        match repo.find_by_id(id) {
            Some(coin) => {
                self.selected_chart_coin_id = Some(coin.id.clone());
                Some(coin)
            }
            None => {
                log::debug!("Ignoring selection of unknown coin id {id:?}");
                None
            }
        }
    }

    /// Re-validate the selection against a freshly loaded snapshot: keep it
    /// if the coin survived, otherwise fall back to the first record.
    pub fn resync<'a>(&mut self, repo: &'a CoinRepository) -> Option<&'a CoinRecord> {
        let kept = self.selected_id().and_then(|id| repo.find_by_id(id));
        let coin = kept.or_else(|| repo.first());
        self.selected_chart_coin_id = coin.map(|c| c.id.clone());
        coin
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Record the search term and return the filtered records. The chart
    /// selection is not affected.
    pub fn set_search<'a>(&mut self, repo: &'a CoinRepository, term: &str) -> Vec<&'a CoinRecord> {
        self.search_term = term.to_string();
        repo.search(term)
    }

    /// Records matching the current search term.
    pub fn filtered<'a>(&self, repo: &'a CoinRepository) -> Vec<&'a CoinRecord> {
        repo.search(&self.search_term)
    }
}
