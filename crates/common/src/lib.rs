//! Shared types for the handproxy workspace.

mod types;

pub use types::{HandRole, ObjectId, Pose, Transform};
