//! Minimal deterministic scene-object store.
//!
//! Objects are stored in a BTreeMap for deterministic iteration order. An
//! object is a transform, an optional renderer-enabled flag, and a list of
//! child object ids.
//!
//! # Invariants
//! - Iteration order is deterministic (BTreeMap).
//! - Visibility toggling reaches descendant renderers when the root object
//!   has no renderer of its own.

mod store;

pub use store::{Scene, SceneObject};
