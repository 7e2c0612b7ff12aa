use crate::backend::{DeviceId, InputBackend, TrackingNode};
use handproxy_common::HandRole;

/// Per-hand device binding: one role, one tracking node, at most one handle.
///
/// The slot does not own the device. It polls: if the held handle is absent
/// or invalid, the next [`DeviceSlot::ensure_resolved`] call re-queries the
/// backend. No backoff, no rate limiting — the steady-state behavior is
/// simply "try again next tick".
#[derive(Debug, Clone, Copy)]
pub struct DeviceSlot {
    role: HandRole,
    node: TrackingNode,
    handle: Option<DeviceId>,
}

impl DeviceSlot {
    pub fn new(role: HandRole) -> Self {
        Self {
            role,
            node: role.into(),
            handle: None,
        }
    }

    pub fn role(&self) -> HandRole {
        self.role
    }

    pub fn node(&self) -> TrackingNode {
        self.node
    }

    /// The currently held handle, unvalidated.
    pub fn handle(&self) -> Option<DeviceId> {
        self.handle
    }

    /// Look up the first device the backend lists for this node.
    ///
    /// Selection is deterministic given the backend's enumeration order;
    /// this slot imposes no ordering of its own.
    pub fn resolve<B: InputBackend>(backend: &B, node: TrackingNode) -> Option<DeviceId> {
        backend.devices_for_node(node).first().copied()
    }

    /// Make sure the held handle is valid, re-resolving if it is not.
    ///
    /// Returns the handle that should drive this tick, or None when no
    /// device exists for the node. Absence is a normal state.
    pub fn ensure_resolved<B: InputBackend>(&mut self, backend: &B) -> Option<DeviceId> {
        match self.handle {
            Some(id) if backend.is_valid(id) => Some(id),
            previous => {
                self.handle = Self::resolve(backend, self.node);
                match (previous, self.handle) {
                    (Some(_), None) => {
                        tracing::debug!(role = %self.role, "device lost, none available")
                    }
                    (_, Some(id)) => {
                        tracing::debug!(role = %self.role, id = id.0, "device acquired")
                    }
                    (None, None) => {}
                }
                self.handle
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{NullBackend, ScriptedBackend};

    #[test]
    fn stays_empty_when_no_devices() {
        let backend = NullBackend::new();
        let mut slot = DeviceSlot::new(HandRole::Left);
        assert_eq!(slot.ensure_resolved(&backend), None);
        assert_eq!(slot.handle(), None);
    }

    #[test]
    fn picks_first_device_for_node() {
        let mut backend = ScriptedBackend::new();
        let first = backend.connect(TrackingNode::LeftHand);
        let _second = backend.connect(TrackingNode::LeftHand);

        let mut slot = DeviceSlot::new(HandRole::Left);
        assert_eq!(slot.ensure_resolved(&backend), Some(first));
    }

    #[test]
    fn ignores_devices_on_other_node() {
        let mut backend = ScriptedBackend::new();
        backend.connect(TrackingNode::RightHand);

        let mut slot = DeviceSlot::new(HandRole::Left);
        assert_eq!(slot.ensure_resolved(&backend), None);
    }

    #[test]
    fn valid_handle_is_kept() {
        let mut backend = ScriptedBackend::new();
        let first = backend.connect(TrackingNode::RightHand);

        let mut slot = DeviceSlot::new(HandRole::Right);
        slot.ensure_resolved(&backend);

        // A later arrival must not displace a valid handle.
        backend.connect(TrackingNode::RightHand);
        assert_eq!(slot.ensure_resolved(&backend), Some(first));
    }

    #[test]
    fn reresolves_next_tick_after_disconnect() {
        let mut backend = ScriptedBackend::new();
        let first = backend.connect(TrackingNode::LeftHand);

        let mut slot = DeviceSlot::new(HandRole::Left);
        assert_eq!(slot.ensure_resolved(&backend), Some(first));

        backend.disconnect(first);
        let replacement = backend.connect(TrackingNode::LeftHand);
        assert_eq!(slot.ensure_resolved(&backend), Some(replacement));
    }

    #[test]
    fn disconnect_with_no_replacement_leaves_slot_empty() {
        let mut backend = ScriptedBackend::new();
        let only = backend.connect(TrackingNode::LeftHand);

        let mut slot = DeviceSlot::new(HandRole::Left);
        slot.ensure_resolved(&backend);
        backend.disconnect(only);

        assert_eq!(slot.ensure_resolved(&backend), None);
    }
}
