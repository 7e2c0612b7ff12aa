//! Developer tooling for handproxy.
//!
//! Read-only queries against tracker and scene state for debugging and CLI
//! output. Nothing here mutates anything.

mod inspector;

pub use inspector::{HandSummary, TrackerInspector, TrackerSummary};
