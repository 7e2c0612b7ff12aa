//! Host input subsystem seam.
//!
//! The tracker never talks to a concrete XR runtime; it goes through the
//! [`InputBackend`] trait. Device handles are opaque and non-owning — the
//! backend owns the devices, and a handle may stop being valid at any tick.
//!
//! # Invariants
//! - Device absence is a normal state, never an error.
//! - Handles are re-resolved by polling, one cheap check per tick.

mod backend;
mod resolver;

pub use backend::{DeviceId, InputBackend, NullBackend, ScriptedBackend, TrackingNode};
pub use resolver::DeviceSlot;
