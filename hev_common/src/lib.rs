//! HEV Common Library
//!
//! Shared types and configuration loading utilities for the HEV workspace
//! crates.
//!
//! # Module Structure
//!
//! - [`powertrain`] - Vehicle snapshot, drive modes, validation and thresholds
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Workspace-wide constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use hev_common::prelude::*;
//!
//! let state = VehicleState::new(35.0, 25.0, 0.0, 75.0, 1200.0, 0.0);
//! assert!(state.validate().is_ok());
//! ```

pub mod config;
pub mod consts;
pub mod powertrain;
pub mod prelude;
