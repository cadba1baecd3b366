// State stores
// Client configuration and profile data sources

pub mod config_store;
pub mod profiles;
