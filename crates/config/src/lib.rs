//! Configuration management for the directory graph tools.
//!
//! This crate provides types and loaders for the connection settings used to
//! reach the remote directory API, built from `.env` files, environment
//! variables and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
