pub mod calculator_service;
pub mod chart_service;
pub mod coin_repository;
pub mod format;
pub mod market_service;
pub mod render_service;
pub mod selection_service;
