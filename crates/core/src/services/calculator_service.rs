use crate::errors::CoreError;
use crate::models::coin::ExchangeRate;
use crate::models::portfolio::{CalculatorInputs, PortfolioEntry, ProfitReport};
use crate::models::settings::NumberLocale;
use crate::models::view::Tone;
use crate::storage::manager::PortfolioStorage;
use super::coin_repository::CoinRepository;
use super::format;

/// A saved entry read back by `prepare_restore`.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedEntry {
    /// Coin is listed; inputs now hold the entry
    Ready(PortfolioEntry),
    /// Coin is missing from the current snapshot
    Stale(PortfolioEntry),
}

/// Unrealized profit/loss calculator with single-entry persistence.
///
/// Holds the form state (inputs) and the result panel (`Some` = visible).
#[derive(Debug, Clone)]
pub struct CalculatorService {
    locale: NumberLocale,
    inputs: CalculatorInputs,
    result: Option<ProfitReport>,
}

impl CalculatorService {
    pub fn new(locale: NumberLocale) -> Self {
        Self {
            locale,
            inputs: CalculatorInputs::default(),
            result: None,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    /// Replace the form contents (what the user typed or picked).
    pub fn set_inputs(&mut self, inputs: CalculatorInputs) {
        self.inputs = inputs;
    }

    /// The visible result panel, if any.
    pub fn result(&self) -> Option<&ProfitReport> {
        self.result.as_ref()
    }

    /// Validate the current inputs, persist them and compute profit.
    ///
    /// On any error nothing is persisted and the result panel keeps its
    /// previous state.
    pub fn calculate(
        &mut self,
        repo: &CoinRepository,
        rate: &ExchangeRate,
        storage: &mut PortfolioStorage,
    ) -> Result<ProfitReport, CoreError> {
        let amount = parse_number(&self.inputs.amount);
        let buy_price = parse_number(&self.inputs.buy_price);
        let (Some(amount), Some(buy_price_usd)) = (amount, buy_price) else {
            return Err(CoreError::Validation(CoreError::FILL_VALUES_ALERT.to_string()));
        };

        if !repo.is_loaded() {
            return Err(CoreError::NotLoaded);
        }
        let coin = repo
            .find_by_id(&self.inputs.coin_id)
            .ok_or_else(|| CoreError::CoinNotFound(self.inputs.coin_id.clone()))?;

        storage.save(&PortfolioEntry::new(coin.id.clone(), amount, buy_price_usd))?;

        let current_value_local = amount * coin.price_usd * rate.value;
        let initial_value_local = amount * buy_price_usd * rate.value;
        let profit_local = current_value_local - initial_value_local;

        let report = ProfitReport {
            coin_id: coin.id.clone(),
            current_value_local,
            initial_value_local,
            profit_local,
            current_value_display: format::currency(current_value_local, &self.locale),
            profit_display: format::currency(profit_local, &self.locale),
            profit_tone: Tone::for_value(profit_local),
        };
        self.result = Some(report.clone());
        Ok(report)
    }

    /// Load the saved entry and, if its coin is in `repo`, copy it into the
    /// inputs so the caller can re-run `calculate`. A stale entry leaves the
    /// inputs untouched.
    pub fn prepare_restore(
        &mut self,
        repo: &CoinRepository,
        storage: &PortfolioStorage,
    ) -> Result<Option<SavedEntry>, CoreError> {
        let Some(entry) = storage.load()? else {
            return Ok(None);
        };
        if repo.find_by_id(&entry.coin_id).is_none() {
            log::warn!(
                "Saved portfolio references {:?}, which is no longer listed; skipping restore",
                entry.coin_id
            );
            return Ok(Some(SavedEntry::Stale(entry)));
        }
        self.inputs = entry.to_inputs();
        Ok(Some(SavedEntry::Ready(entry)))
    }

    /// Delete the saved entry, empty the numeric inputs and hide the result.
    pub fn clear(&mut self, storage: &mut PortfolioStorage) -> Result<(), CoreError> {
        storage.clear()?;
        self.inputs.amount.clear();
        self.inputs.buy_price.clear();
        self.result = None;
        Ok(())
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new(NumberLocale::default())
    }
}

/// Parse a form number. Whitespace is trimmed and a lone decimal comma is
/// accepted ("0,5"). Non-finite values are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn parse_number_variants() {
        assert_eq!(parse_number("0.5"), Some(0.5));
        assert_eq!(parse_number(" 60000 "), Some(60000.0));
        assert_eq!(parse_number("0,5"), Some(0.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1,000.5"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
