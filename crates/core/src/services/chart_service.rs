use chrono::{Duration, Utc};

use crate::models::chart::{ChartPanel, ChartPoint, PriceChart};
use crate::models::coin::{CoinRecord, ExchangeRate};
use crate::models::settings::{DashboardConfig, NumberLocale};
use super::format;

/// Uniform random numbers in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Operating-system randomness via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_unit(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        if let Err(e) = getrandom::getrandom(&mut buf) {
            log::warn!("getrandom failed ({e}); using an unperturbed chart point");
            return 0.5;
        }
        // 53 high bits → exactly representable fraction in [0, 1)
        (u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v.clamp(0.0, 1.0)
    }
}

/// The external charting collaborator. It only draws what it is given.
pub trait ChartSurface: Send {
    /// Drop the currently drawn chart instance.
    fn discard(&mut self);

    /// Draw a brand-new chart instance.
    fn replace(&mut self, chart: &PriceChart);
}

/// Surface that draws nothing (headless use).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl ChartSurface for NullSurface {
    fn discard(&mut self) {}

    fn replace(&mut self, _chart: &PriceChart) {}
}

/// Builds the synthetic price chart for the selected coin.
///
/// Values are `price × (1 + u)` with `u` uniform in `[-jitter, +jitter]`.
/// They are a presentational stand-in, not historical data.
pub struct ChartService {
    points: usize,
    jitter: f64,
    rng: Box<dyn RandomSource>,
    surface: Box<dyn ChartSurface>,
    current: Option<ChartPanel>,
}

impl ChartService {
    pub fn new(points: usize, jitter: f64) -> Self {
        Self::with_parts(points, jitter, Box::new(OsRandom), Box::new(NullSurface))
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.chart_points, config.chart_jitter)
    }

    pub fn with_parts(
        points: usize,
        jitter: f64,
        rng: Box<dyn RandomSource>,
        surface: Box<dyn ChartSurface>,
    ) -> Self {
        Self {
            points,
            jitter: jitter.abs(),
            rng,
            surface,
            current: None,
        }
    }

    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    pub fn set_surface(&mut self, surface: Box<dyn ChartSurface>) {
        self.surface = surface;
    }

    /// The chart currently on screen.
    pub fn current(&self) -> Option<&ChartPanel> {
        self.current.as_ref()
    }

    /// Generate the series for `coin`, oldest point first ("-5h" … "now").
    pub fn generate(&mut self, coin: &CoinRecord) -> PriceChart {
        let now = Utc::now();
        let points = (0..self.points)
            .map(|i| {
                let hours_ago = (self.points - 1 - i) as i64;
                let offset = (self.rng.next_unit() * 2.0 - 1.0) * self.jitter;
                ChartPoint {
                    label: hour_label(hours_ago),
                    timestamp: now - Duration::hours(hours_ago),
                    price_usd: coin.price_usd * (1.0 + offset),
                }
            })
            .collect();

        PriceChart {
            coin_id: coin.id.clone(),
            points,
        }
    }

    /// Discard any previous chart and draw a fresh one for `coin`, along with
    /// the select value and price readouts.
    pub fn update(
        &mut self,
        coin: &CoinRecord,
        rate: &ExchangeRate,
        locale: &NumberLocale,
    ) -> &ChartPanel {
        let chart = self.generate(coin);

        if self.current.take().is_some() {
            self.surface.discard();
        }
        self.surface.replace(&chart);

        self.current.insert(ChartPanel {
            selected_coin_id: coin.id.clone(),
            price_local: format::currency(coin.price_local(rate), locale),
            price_usd: format!("$ {}", format::fixed2(coin.price_usd)),
            chart,
        })
    }
}

impl std::fmt::Debug for ChartService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartService")
            .field("points", &self.points)
            .field("jitter", &self.jitter)
            .field("current", &self.current.as_ref().map(|c| &c.selected_coin_id))
            .finish()
    }
}

fn hour_label(hours_ago: i64) -> String {
    if hours_ago == 0 {
        "now".to_string()
    } else {
        format!("-{hours_ago}h")
    }
}
