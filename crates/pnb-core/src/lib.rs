//! Core domain + application logic for the phone-number lookup bot.
//!
//! This crate is intentionally framework-agnostic. Telegram / the lookup HTTP
//! API live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod format;
pub mod logging;
pub mod lookup;
pub mod messaging;
pub mod pipeline;
pub mod query;

pub use errors::{Error, Result};
