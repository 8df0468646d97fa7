pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    chart::ChartPanel,
    coin::{CoinRecord, ExchangeRate},
    portfolio::{CalculatorInputs, ProfitReport, RestoreOutcome},
    settings::DashboardConfig,
    view::{DashboardView, ListRow, LoadSummary},
};
use providers::registry::ProviderSet;
use services::{
    calculator_service::{CalculatorService, SavedEntry},
    chart_service::{ChartService, ChartSurface, RandomSource},
    coin_repository::CoinRepository,
    market_service::MarketService,
    render_service::RenderService,
    selection_service::SelectionController,
};
use storage::kv::{KeyValueStore, MemoryStore};
use storage::manager::PortfolioStorage;

use errors::CoreError;

/// Main entry point for the Coin Dashboard core library.
/// Owns all dashboard state and the services that act on it; front-ends
/// forward user events here and render what comes back.
#[must_use]
pub struct CoinDashboard {
    config: DashboardConfig,
    providers: ProviderSet,
    market_service: MarketService,
    repository: CoinRepository,
    rate: ExchangeRate,
    selection: SelectionController,
    renderer: RenderService,
    calculator: CalculatorService,
    chart: ChartService,
    storage: PortfolioStorage,
    view: DashboardView,
}

impl std::fmt::Debug for CoinDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinDashboard")
            .field("providers", &self.providers)
            .field("coins", &self.repository.len())
            .field("rate", &self.rate)
            .field("selected", &self.selection.selected_id())
            .field("search", &self.selection.search_term())
            .finish()
    }
}

impl CoinDashboard {
    /// Dashboard with the default providers and an in-memory store.
    pub fn new(config: DashboardConfig) -> Self {
        let providers = ProviderSet::new_with_defaults(&config);
        Self::with_parts(config, providers, Box::new(MemoryStore::new()))
    }

    /// Dashboard with the default providers, persisting to a JSON file
    /// (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_file_store(
        config: DashboardConfig,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, CoreError> {
        let store = storage::kv::FileStore::open(path)?;
        let providers = ProviderSet::new_with_defaults(&config);
        Ok(Self::with_parts(config, providers, Box::new(store)))
    }

    /// Dashboard from explicit providers and store (tests, custom front-ends).
    pub fn with_parts(
        config: DashboardConfig,
        providers: ProviderSet,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let rate = ExchangeRate::fallback(config.fallback_exchange_rate);
        let renderer = RenderService::from_config(&config);
        let calculator = CalculatorService::new(config.locale.clone());
        let chart = ChartService::from_config(&config);
        let storage = PortfolioStorage::new(store, config.storage_key.clone());

        Self {
            providers,
            market_service: MarketService::new(),
            repository: CoinRepository::new(),
            rate,
            selection: SelectionController::new(),
            renderer,
            calculator,
            chart,
            storage,
            view: DashboardView::empty(rate),
            config,
        }
    }

    /// Swap the randomness behind the synthetic chart.
    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.chart.set_random_source(rng);
    }

    /// Attach the charting collaborator that draws each new chart.
    pub fn set_chart_surface(&mut self, surface: Box<dyn ChartSurface>) {
        self.chart.set_surface(surface);
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Run a full load cycle: fetch, replace the coin snapshot, render every
    /// view, select and chart a coin, then restore the saved calculation.
    ///
    /// A ticker failure returns `CoreError::InitializationFailed` and leaves
    /// the previously displayed state untouched.
    pub async fn load(&mut self) -> Result<LoadSummary, CoreError> {
        let snapshot = self.market_service.load(&self.providers, self.rate).await?;

        self.repository.load_all(snapshot.coins);
        self.rate = snapshot.rate;
        self.view.sentiment = self.renderer.sentiment(snapshot.sentiment.as_ref());
        self.render_views();

        if let Some(coin) = self.selection.resync(&self.repository) {
            self.chart.update(coin, &self.rate, self.renderer.locale());
        }

        log::info!(
            "Loaded {} coins (rate {:.4}, {:?})",
            self.repository.len(),
            self.rate.value,
            self.rate.source
        );

        let restore = match self.restore().await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Could not restore saved portfolio: {e}");
                RestoreOutcome::NothingSaved
            }
        };

        Ok(LoadSummary {
            coin_count: self.repository.len(),
            rate: self.rate,
            sentiment_available: snapshot.sentiment.is_some(),
            restore,
        })
    }

    fn render_views(&mut self) {
        let all = self.repository.all();
        self.view.ticker = self.renderer.ticker(all);
        self.view.calculator_options = self.renderer.select_options(all);
        self.view.chart_options = self.renderer.select_options(all);
        self.view.rate = self.rate;
        let filtered = self.selection.filtered(&self.repository);
        self.view.list = self.renderer.list(filtered, &self.rate);
    }

    // ── User Events ─────────────────────────────────────────────────

    /// Search input changed: re-render the coin list only.
    pub fn on_search(&mut self, term: &str) -> &[ListRow] {
        let filtered = self.selection.set_search(&self.repository, term);
        self.view.list = self.renderer.list(filtered, &self.rate);
        &self.view.list
    }

    /// Chart select changed. Unknown ids are ignored (`None`).
    pub fn on_chart_select(&mut self, coin_id: &str) -> Option<&ChartPanel> {
        let coin = self.selection.select(&self.repository, coin_id)?;
        Some(self.chart.update(coin, &self.rate, self.renderer.locale()))
    }

    /// A coin row in the list was clicked. Unknown ids are ignored (`None`).
    pub fn on_list_click(&mut self, coin_id: &str) -> Option<&ChartPanel> {
        self.on_chart_select(coin_id)
    }

    // ── Calculator ──────────────────────────────────────────────────

    /// Replace the calculator form contents without calculating.
    pub fn set_calculator_inputs(&mut self, inputs: CalculatorInputs) {
        self.calculator.set_inputs(inputs);
    }

    /// Fill the form and calculate, persisting the entry on success.
    pub fn calculate(
        &mut self,
        coin_id: &str,
        amount: &str,
        buy_price_usd: &str,
    ) -> Result<ProfitReport, CoreError> {
        self.calculator
            .set_inputs(CalculatorInputs::new(coin_id, amount, buy_price_usd));
        self.calculate_current()
    }

    /// Calculate from whatever the form currently holds.
    pub fn calculate_current(&mut self) -> Result<ProfitReport, CoreError> {
        self.calculator
            .calculate(&self.repository, &self.rate, &mut self.storage)
    }

    /// Repopulate the form from the saved entry and, after the configured
    /// delay, re-run the calculation.
    pub async fn restore(&mut self) -> Result<RestoreOutcome, CoreError> {
        if !self.repository.is_loaded() {
            return Err(CoreError::NotLoaded);
        }
        match self.calculator.prepare_restore(&self.repository, &self.storage)? {
            None => Ok(RestoreOutcome::NothingSaved),
            Some(SavedEntry::Stale(entry)) => Ok(RestoreOutcome::Stale {
                coin_id: entry.coin_id,
            }),
            Some(SavedEntry::Ready(_)) => {
                pause(self.config.restore_delay()).await;
                let report = self.calculate_current()?;
                Ok(RestoreOutcome::Restored(report))
            }
        }
    }

    /// Delete the saved entry and reset the form and result panel.
    pub fn clear_calculator(&mut self) -> Result<(), CoreError> {
        self.calculator.clear(&mut self.storage)
    }

    #[must_use]
    pub fn calculator_inputs(&self) -> &CalculatorInputs {
        self.calculator.inputs()
    }

    /// The result panel; `None` means hidden.
    #[must_use]
    pub fn calculator_result(&self) -> Option<&ProfitReport> {
        self.calculator.result()
    }

    // ── State Inspection ────────────────────────────────────────────

    #[must_use]
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ChartPanel> {
        self.chart.current()
    }

    #[must_use]
    pub fn selected_coin(&self) -> Option<&CoinRecord> {
        self.selection.selected(&self.repository)
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.selection.search_term()
    }

    #[must_use]
    pub fn repository(&self) -> &CoinRepository {
        &self.repository
    }

    #[must_use]
    pub fn exchange_rate(&self) -> ExchangeRate {
        self.rate
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

/// Suspend for `delay`. On WASM the select options are filled synchronously
/// before restore runs, so there is nothing to wait for.
#[cfg(not(target_arch = "wasm32"))]
async fn pause(delay: std::time::Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn pause(_delay: std::time::Duration) {}
