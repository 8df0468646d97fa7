// ═══════════════════════════════════════════════════════════════════
// Provider Tests — CoinPaprika, AwesomeAPI, Alternative.me parsing,
// ProviderSet wiring
// ═══════════════════════════════════════════════════════════════════

use coin_dashboard_core::errors::CoreError;
use coin_dashboard_core::models::sentiment::SentimentBand;
use coin_dashboard_core::models::settings::DashboardConfig;
use coin_dashboard_core::providers::alternative_me::AlternativeMeProvider;
use coin_dashboard_core::providers::awesomeapi::AwesomeApiProvider;
use coin_dashboard_core::providers::coinpaprika::CoinPaprikaProvider;
use coin_dashboard_core::providers::registry::ProviderSet;
use coin_dashboard_core::providers::traits::{
    ExchangeRateProvider, SentimentProvider, TickerProvider,
};

// ═══════════════════════════════════════════════════════════════════
//  CoinPaprika — ticker normalization
// ═══════════════════════════════════════════════════════════════════

mod coinpaprika {
    use super::*;

    const TICKERS: &str = r#"[
        {"id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": 1,
         "quotes": {"USD": {"price": 65000.0, "percent_change_24h": -1.5}}},
        {"id": "eth-ethereum", "name": "Ethereum", "symbol": "ETH", "rank": 2,
         "quotes": {"USD": {"price": 3200.5, "percent_change_24h": 2.25}}},
        {"id": "usdt-tether", "name": "Tether", "symbol": "USDT", "rank": 3,
         "quotes": {"USD": {"price": 1.0}}}
    ]"#;

    #[test]
    fn maps_nested_usd_quote() {
        let coins = CoinPaprikaProvider::parse_tickers(TICKERS).unwrap();
        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0].id, "btc-bitcoin");
        assert_eq!(coins[0].name, "Bitcoin");
        assert_eq!(coins[0].symbol, "BTC");
        assert_eq!(coins[0].price_usd, 65000.0);
        assert_eq!(coins[0].change_percent_24h, -1.5);
    }

    #[test]
    fn preserves_api_order() {
        let coins = CoinPaprikaProvider::parse_tickers(TICKERS).unwrap();
        let ids: Vec<&str> = coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["btc-bitcoin", "eth-ethereum", "usdt-tether"]);
    }

    #[test]
    fn missing_change_defaults_to_zero() {
        let coins = CoinPaprikaProvider::parse_tickers(TICKERS).unwrap();
        assert_eq!(coins[2].change_percent_24h, 0.0);
    }

    #[test]
    fn null_change_defaults_to_zero() {
        let body = r#"[{"id": "a", "name": "A", "symbol": "A",
            "quotes": {"USD": {"price": 2.0, "percent_change_24h": null}}}]"#;
        let coins = CoinPaprikaProvider::parse_tickers(body).unwrap();
        assert_eq!(coins[0].change_percent_24h, 0.0);
    }

    #[test]
    fn string_numbers_are_accepted() {
        let body = r#"[{"id": "a", "name": "A", "symbol": "A",
            "quotes": {"USD": {"price": "12.5", "percent_change_24h": "-0.75"}}}]"#;
        let coins = CoinPaprikaProvider::parse_tickers(body).unwrap();
        assert_eq!(coins[0].price_usd, 12.5);
        assert_eq!(coins[0].change_percent_24h, -0.75);
    }

    #[test]
    fn non_numeric_change_defaults_to_zero() {
        let body = r#"[{"id": "a", "name": "A", "symbol": "A",
            "quotes": {"USD": {"price": 2.0, "percent_change_24h": "n/a"}}}]"#;
        let coins = CoinPaprikaProvider::parse_tickers(body).unwrap();
        assert_eq!(coins[0].change_percent_24h, 0.0);
    }

    #[test]
    fn entries_without_usable_price_are_skipped() {
        let body = r#"[
            {"id": "no-quotes", "name": "X", "symbol": "X"},
            {"id": "no-usd", "name": "X", "symbol": "X", "quotes": {}},
            {"id": "no-price", "name": "X", "symbol": "X", "quotes": {"USD": {}}},
            {"id": "bad-price", "name": "X", "symbol": "X", "quotes": {"USD": {"price": "abc"}}},
            {"id": "negative", "name": "X", "symbol": "X", "quotes": {"USD": {"price": -3.0}}},
            {"id": "ok", "name": "Ok", "symbol": "OK", "quotes": {"USD": {"price": 0.0}}}
        ]"#;
        let coins = CoinPaprikaProvider::parse_tickers(body).unwrap();
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].id, "ok");
    }

    #[test]
    fn every_record_is_finite() {
        let coins = CoinPaprikaProvider::parse_tickers(TICKERS).unwrap();
        assert!(coins
            .iter()
            .all(|c| c.price_usd.is_finite() && c.change_percent_24h.is_finite()));
    }

    #[test]
    fn empty_array_is_ok() {
        let coins = CoinPaprikaProvider::parse_tickers("[]").unwrap();
        assert!(coins.is_empty());
    }

    #[test]
    fn non_array_body_is_api_error() {
        let err = CoinPaprikaProvider::parse_tickers(r#"{"error": "rate limited"}"#).unwrap_err();
        match err {
            CoreError::Api { provider, .. } => assert_eq!(provider, "CoinPaprika"),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn name() {
        assert_eq!(CoinPaprikaProvider::default().name(), "CoinPaprika");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AwesomeAPI — exchange rate
// ═══════════════════════════════════════════════════════════════════

mod awesomeapi {
    use super::*;

    #[test]
    fn bid_string_is_parsed() {
        let body = r#"{"USDBRL": {"code": "USD", "codein": "BRL", "bid": "5.4321", "ask": "5.44"}}"#;
        let rate = AwesomeApiProvider::parse_rate(body, "USDBRL").unwrap();
        assert!((rate - 5.4321).abs() < 1e-12);
    }

    #[test]
    fn bid_number_is_parsed() {
        let body = r#"{"USDEUR": {"bid": 0.92}}"#;
        let rate = AwesomeApiProvider::parse_rate(body, "USDEUR").unwrap();
        assert_eq!(rate, 0.92);
    }

    #[test]
    fn missing_pair_is_api_error() {
        let body = r#"{"USDEUR": {"bid": "0.92"}}"#;
        let err = AwesomeApiProvider::parse_rate(body, "USDBRL").unwrap_err();
        assert!(err.to_string().contains("USDBRL"));
    }

    #[test]
    fn invalid_bid_is_api_error() {
        let body = r#"{"USDBRL": {"bid": "soon"}}"#;
        assert!(matches!(
            AwesomeApiProvider::parse_rate(body, "USDBRL"),
            Err(CoreError::Api { .. })
        ));
    }

    #[test]
    fn zero_or_negative_bid_is_rejected() {
        assert!(AwesomeApiProvider::parse_rate(r#"{"USDBRL": {"bid": "0"}}"#, "USDBRL").is_err());
        assert!(AwesomeApiProvider::parse_rate(r#"{"USDBRL": {"bid": -1}}"#, "USDBRL").is_err());
    }

    #[test]
    fn garbage_body_is_api_error() {
        assert!(matches!(
            AwesomeApiProvider::parse_rate("<html>", "USDBRL"),
            Err(CoreError::Api { .. })
        ));
    }

    #[test]
    fn name() {
        assert_eq!(AwesomeApiProvider::default().name(), "AwesomeAPI");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Alternative.me — sentiment index
// ═══════════════════════════════════════════════════════════════════

mod alternative_me {
    use super::*;

    #[test]
    fn leading_entry_is_used() {
        let body = r#"{"name": "Fear and Greed Index", "data": [
            {"value": "45", "value_classification": "Fear", "timestamp": "1700000000"},
            {"value": "80", "value_classification": "Extreme Greed", "timestamp": "1699913600"}
        ]}"#;
        let reading = AlternativeMeProvider::parse_sentiment(body).unwrap();
        assert_eq!(reading.value, 45);
        assert_eq!(reading.classification, "Fear");
        assert_eq!(reading.band(), SentimentBand::Warning);
        assert_eq!(reading.timestamp.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn numeric_value_and_missing_timestamp() {
        let body = r#"{"data": [{"value": 76, "value_classification": "Greed"}]}"#;
        let reading = AlternativeMeProvider::parse_sentiment(body).unwrap();
        assert_eq!(reading.value, 76);
        assert!(reading.timestamp.is_none());
    }

    #[test]
    fn value_is_clamped() {
        let body = r#"{"data": [{"value": "140", "value_classification": "?"}]}"#;
        assert_eq!(AlternativeMeProvider::parse_sentiment(body).unwrap().value, 100);
    }

    #[test]
    fn empty_data_is_api_error() {
        let err = AlternativeMeProvider::parse_sentiment(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, CoreError::Api { .. }));
    }

    #[test]
    fn non_numeric_value_is_api_error() {
        let body = r#"{"data": [{"value": "high", "value_classification": "Greed"}]}"#;
        assert!(AlternativeMeProvider::parse_sentiment(body).is_err());
    }

    #[test]
    fn name() {
        assert_eq!(AlternativeMeProvider::default().name(), "Alternative.me");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ProviderSet
// ═══════════════════════════════════════════════════════════════════

mod provider_set {
    use super::*;

    #[test]
    fn defaults_are_wired_in_load_order() {
        let set = ProviderSet::new_with_defaults(&DashboardConfig::default());
        assert_eq!(set.names(), ["AwesomeAPI", "Alternative.me", "CoinPaprika"]);
    }

    #[test]
    fn exchange_rate_pair_follows_local_currency() {
        let config = DashboardConfig {
            local_currency: "eur".into(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.exchange_rate_pair(), "USDEUR");
    }

    #[test]
    fn debug_lists_provider_names() {
        let set = ProviderSet::new_with_defaults(&DashboardConfig::default());
        let dbg = format!("{set:?}");
        assert!(dbg.contains("CoinPaprika"));
        assert!(dbg.contains("AwesomeAPI"));
        assert!(dbg.contains("Alternative.me"));
    }
}
