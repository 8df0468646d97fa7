pub mod chart;
pub mod coin;
pub mod portfolio;
pub mod sentiment;
pub mod settings;
pub mod view;
