pub mod config;
pub mod credentials;
pub mod ecomet_client;
