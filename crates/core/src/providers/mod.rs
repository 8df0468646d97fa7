pub mod registry;
pub mod traits;
mod wire;

// API provider implementations
pub mod alternative_me;
pub mod awesomeapi;
pub mod coinpaprika;
