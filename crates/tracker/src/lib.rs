//! Hand-controller proxy tracking.
//!
//! A [`HandProxyTracker`] mirrors the pose of two XR hand controllers onto
//! two scene objects, layering keyboard/mouse simulation deltas on top when
//! the fallback is enabled. One synchronous [`HandProxyTracker::update`] per
//! frame; the frame clock lives with the host.
//!
//! # Invariants
//! - Each hand role holds at most one device handle and exactly one visual
//!   after attach.
//! - No tick-path operation errors: absent devices, partial pose reads, and
//!   missing visuals all degrade to "do nothing this tick".
//! - Simulation deltas layer on top of device poses by default; the
//!   `exclusive_sim` option suppresses them for a hand whose device drove
//!   the visual this tick.

mod binder;
mod config;
mod tracker;

pub use binder::apply_device_pose;
pub use config::{ConfigError, TrackerConfig};
pub use tracker::{AttachError, HandProxyTracker, HandState};
