use std::fmt::Write;

use coin_dashboard_core::models::coin::RateSource;
use coin_dashboard_core::models::view::{ListRow, SentimentDisplay, Tone};
use coin_dashboard_core::CoinDashboard;

/// Plain-text rendition of every dashboard section.
pub fn dashboard(d: &CoinDashboard) -> String {
    let mut out = String::new();
    let view = d.view();

    // Ticker: one pass is enough in a terminal
    let half = view.ticker.len() / 2;
    let ticker: Vec<String> = view.ticker[..half]
        .iter()
        .map(|t| format!("{} {} {}", t.symbol, t.price_usd, t.change))
        .collect();
    let _ = writeln!(out, "{}", ticker.join("  |  "));
    let _ = writeln!(out);

    let rate_note = match view.rate.source {
        RateSource::Live => "live",
        RateSource::Fallback => "fallback",
    };
    let _ = writeln!(
        out,
        "USD/{}: {:.4} ({rate_note})",
        d.config().local_currency,
        view.rate.value
    );
    match &view.sentiment {
        SentimentDisplay::Available {
            label,
            bar_width_percent,
            band,
        } => {
            let filled = usize::from(*bar_width_percent) / 5;
            let _ = writeln!(
                out,
                "Fear & Greed: {label} [{}{}] {band}",
                "#".repeat(filled),
                ".".repeat(20 - filled.min(20))
            );
        }
        SentimentDisplay::Unavailable => {
            let _ = writeln!(out, "Fear & Greed: {}", SentimentDisplay::UNAVAILABLE_TEXT);
        }
    }
    let _ = writeln!(out);

    if !d.search_term().is_empty() {
        let _ = writeln!(out, "Search: {:?}", d.search_term());
    }
    for row in &view.list {
        match row {
            ListRow::Coin(c) => {
                let sign = match c.change_tone {
                    Tone::Positive => "+",
                    Tone::Negative => "",
                };
                let _ = writeln!(
                    out,
                    "{:<28} {:>20} {:>16} {:>9}",
                    format!("{} ({})", c.name, c.symbol),
                    c.price_local,
                    c.price_usd,
                    format!("{sign}{}", c.change)
                );
            }
            ListRow::NothingFound => {
                let _ = writeln!(out, "{}", ListRow::NOTHING_FOUND_TEXT);
            }
        }
    }
    let _ = writeln!(out);

    if let Some(panel) = d.chart() {
        let _ = writeln!(
            out,
            "Chart {}: {} / {}",
            panel.selected_coin_id, panel.price_local, panel.price_usd
        );
        for p in &panel.chart.points {
            let _ = writeln!(out, "  {:>4}  {:.2}", p.label, p.price_usd);
        }
        let _ = writeln!(out);
    }

    if let Some(result) = d.calculator_result() {
        let inputs = d.calculator_inputs();
        let _ = writeln!(
            out,
            "Holding: {} × {} bought at ${}",
            inputs.amount, inputs.coin_id, inputs.buy_price
        );
        let _ = writeln!(out, "Current value: {}", result.current_value_display);
        let _ = writeln!(
            out,
            "Profit: {} ({:?})",
            result.profit_display, result.profit_tone
        );
    }

    out
}
