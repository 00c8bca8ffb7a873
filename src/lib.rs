pub mod config;
pub mod http_client;
pub mod provider;
pub mod state;
pub mod stats;
pub mod team_api;
pub mod teams;
pub mod ui;
