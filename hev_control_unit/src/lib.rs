//! # HEV Control Unit Library
//!
//! Drive mode selection for a hybrid powertrain. Once per control cycle the
//! drive-by-wire loop hands over a telemetry snapshot. The controller
//! validates it, runs the priority cascade, and returns the selected
//! [`DriveMode`](hev::powertrain::state::DriveMode) with the engine on/off
//! demand.
//!
//! ## Priority Cascade
//!
//! 1. **Regen**: braking or steep descent while moving, battery not full
//! 2. **Critical battery**: SoC below the low threshold → engine only
//! 3. **Max power**: hard throttle, steep climb or heavy load → hybrid
//! 4. **Electric**: slow, gentle, charged, flat and light → electric only
//! 5. **Highway cruise**: fast at moderate throttle → engine only
//! 6. **Default**: hybrid
//!
//! ## Statelessness
//!
//! The selector and controller hold only read-only thresholds. Each call
//! depends on its input snapshot alone, and instances can be shared across
//! threads without locking.

pub mod config;
pub mod controller;
pub mod scenario;
pub mod selector;
