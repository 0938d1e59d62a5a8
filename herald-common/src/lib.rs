//! Shared building blocks for the herald notification actions
//!
//! This crate provides:
//! - Validated email address types (`Address`, `AddressList`)
//! - Site-wide configuration (default sender address)
//! - Logging initialization

pub mod address;
pub mod config;
pub mod logging;

pub use address::{Address, AddressError, AddressList};
pub use config::{ConfigError, SiteConfig};
pub use tracing;
