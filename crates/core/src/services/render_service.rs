use crate::models::coin::{CoinRecord, ExchangeRate};
use crate::models::sentiment::SentimentReading;
use crate::models::settings::{DashboardConfig, NumberLocale};
use crate::models::view::{
    CoinRow, Direction, ListRow, SelectOption, SentimentDisplay, TickerItem, Tone,
};
use super::format;

/// Turns repository state (plus the exchange rate) into display structures.
///
/// Every method is a pure mapping; nothing here touches dashboard state.
#[derive(Debug, Clone)]
pub struct RenderService {
    locale: NumberLocale,
    ticker_limit: usize,
    list_limit: usize,
}

impl RenderService {
    pub fn new(locale: NumberLocale, ticker_limit: usize, list_limit: usize) -> Self {
        Self {
            locale,
            ticker_limit,
            list_limit,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.locale.clone(), config.ticker_limit, config.list_limit)
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Marquee items for the leading records, duplicated end-to-end once so
    /// the scroll can loop seamlessly.
    pub fn ticker<'a>(&self, coins: impl IntoIterator<Item = &'a CoinRecord>) -> Vec<TickerItem> {
        let mut items: Vec<TickerItem> = coins
            .into_iter()
            .take(self.ticker_limit)
            .map(|c| {
                let direction = Direction::for_change(c.change_percent_24h);
                TickerItem {
                    symbol: c.symbol.clone(),
                    price_usd: format::usd(c.price_usd),
                    change: format!(
                        "({} {})",
                        direction.arrow(),
                        format::percent(c.change_percent_24h)
                    ),
                    direction,
                }
            })
            .collect();
        items.extend_from_within(..);
        items
    }

    /// Ranked list rows, capped at the list limit. An empty input yields a
    /// single `NothingFound` row.
    pub fn list<'a>(
        &self,
        coins: impl IntoIterator<Item = &'a CoinRecord>,
        rate: &ExchangeRate,
    ) -> Vec<ListRow> {
        let rows: Vec<ListRow> = coins
            .into_iter()
            .take(self.list_limit)
            .map(|c| ListRow::Coin(self.coin_row(c, rate)))
            .collect();

        if rows.is_empty() {
            vec![ListRow::NothingFound]
        } else {
            rows
        }
    }

    fn coin_row(&self, coin: &CoinRecord, rate: &ExchangeRate) -> CoinRow {
        CoinRow {
            coin_id: coin.id.clone(),
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            price_local: format!(
                "{} {}",
                self.locale.currency_symbol,
                format::grouped(coin.price_local(rate), &self.locale)
            ),
            price_usd: format::usd(coin.price_usd),
            change: format::percent(coin.change_percent_24h),
            change_tone: Tone::for_value(coin.change_percent_24h),
        }
    }

    /// `(id → "name (symbol)")` options for a coin select control.
    pub fn select_options<'a>(
        &self,
        coins: impl IntoIterator<Item = &'a CoinRecord>,
    ) -> Vec<SelectOption> {
        coins
            .into_iter()
            .map(|c| SelectOption {
                value: c.id.clone(),
                label: format!("{} ({})", c.name, c.symbol),
            })
            .collect()
    }

    /// Sentiment widget state; `None` means the fetch failed.
    pub fn sentiment(&self, reading: Option<&SentimentReading>) -> SentimentDisplay {
        match reading {
            Some(r) => SentimentDisplay::Available {
                label: format!("{} ({})", r.value, r.classification),
                bar_width_percent: r.value.min(100),
                band: r.band(),
            },
            None => SentimentDisplay::Unavailable,
        }
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}
