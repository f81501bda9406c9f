//! Powertrain types shared between the mode selector and its callers.

pub mod config;
pub mod error;
pub mod state;
