// authgate - HTTP bridge gateway for an external authentication service

pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod upstream;
pub mod utils;
