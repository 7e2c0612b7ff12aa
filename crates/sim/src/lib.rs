//! Keyboard/mouse simulation fallback for running without a headset.
//!
//! This crate is engine-agnostic: it defines its own key and pointer-button
//! vocabulary rather than leaking windowing types, and the host maps its raw
//! events into a per-tick [`SimInput`] snapshot. The same fallback logic then
//! drives desktop windows, headless demos, and tests.
//!
//! # Invariants
//! - Deltas scale linearly with elapsed tick duration (frame-rate
//!   independent).
//! - The four gesture sub-states (left/right x translating/rotating) are
//!   independent; any combination can be active in one tick.

mod fallback;
mod input;

pub use fallback::{HandDelta, SimConfig, SimGestures, hand_delta};
pub use input::{PointerButton, SimInput, SimKey};
