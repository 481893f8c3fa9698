pub mod adapters;
pub mod config;
pub mod export;
pub mod logging;
