pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod query;
pub mod store;
