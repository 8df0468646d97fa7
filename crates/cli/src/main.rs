mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use coin_dashboard_core::errors::CoreError;
use coin_dashboard_core::models::portfolio::RestoreOutcome;
use coin_dashboard_core::models::settings::DashboardConfig;
use coin_dashboard_core::CoinDashboard;

#[derive(Parser, Debug)]
#[command(author, version, about = "Crypto ticker, sentiment, profit calculator and price chart")]
struct Cli {
    /// JSON configuration file (any omitted field keeps its default)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the saved portfolio entry is kept
    #[arg(long, default_value = "coin-dashboard.json")]
    store: PathBuf,

    /// Filter the coin list by name or symbol
    #[arg(long)]
    search: Option<String>,

    /// Coin id to chart instead of the top-ranked coin
    #[arg(long)]
    chart: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate (and save) the profit of a holding
    Calc {
        coin_id: String,
        amount: String,
        /// Buy price per coin in USD
        buy_price: String,
    },
    /// Delete the saved holding
    Clear,
}

fn load_config(path: Option<&PathBuf>) -> Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or("warn,coin_dashboard_core=info,coin_dashboard=info"),
    )
    .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let mut dashboard = CoinDashboard::with_file_store(config, &cli.store)?;

    let summary = match dashboard.load().await {
        Ok(summary) => summary,
        Err(CoreError::InitializationFailed(alert)) => {
            eprintln!("{alert}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if let RestoreOutcome::Stale { coin_id } = &summary.restore {
        eprintln!("Saved holding refers to {coin_id}, which is no longer listed.");
    }

    if let Some(term) = &cli.search {
        dashboard.on_search(term);
    }
    if let Some(id) = &cli.chart {
        if dashboard.on_chart_select(id).is_none() {
            eprintln!("Unknown coin id {id:?}; keeping the current chart.");
        }
    }

    match &cli.command {
        Some(Command::Calc {
            coin_id,
            amount,
            buy_price,
        }) => match dashboard.calculate(coin_id, amount, buy_price) {
            Ok(_) => {}
            Err(CoreError::Validation(alert)) => eprintln!("{alert}"),
            Err(e) => return Err(e.into()),
        },
        Some(Command::Clear) => dashboard.clear_calculator()?,
        None => {}
    }

    print!("{}", render::dashboard(&dashboard));
    Ok(())
}
