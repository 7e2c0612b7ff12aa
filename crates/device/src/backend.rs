use glam::{Quat, Vec3};
use handproxy_common::HandRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tracking node on the XR rig that devices can be associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrackingNode {
    LeftHand,
    RightHand,
}

impl From<HandRole> for TrackingNode {
    fn from(role: HandRole) -> Self {
        match role {
            HandRole::Left => TrackingNode::LeftHand,
            HandRole::Right => TrackingNode::RightHand,
        }
    }
}

/// Opaque handle to an input device owned by the backend.
///
/// Holding a `DeviceId` grants nothing: validity must be queried every time,
/// and a handle can go stale whenever the device disconnects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u64);

/// The host input subsystem as seen by the tracker.
///
/// All queries are synchronous and non-blocking with immediate pass/fail
/// results. Position and rotation are queried independently — a device may
/// report one but not the other.
pub trait InputBackend {
    /// All devices currently associated with the given tracking node, in the
    /// backend's stable order.
    fn devices_for_node(&self, node: TrackingNode) -> Vec<DeviceId>;

    /// Whether the handle still refers to a connected device.
    fn is_valid(&self, id: DeviceId) -> bool;

    /// Current position of the device, if it reports one this tick.
    fn try_get_position(&self, id: DeviceId) -> Option<Vec3>;

    /// Current rotation of the device, if it reports one this tick.
    fn try_get_rotation(&self, id: DeviceId) -> Option<Quat>;
}

/// Backend for running without a headset: no devices, ever.
#[derive(Debug, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl InputBackend for NullBackend {
    fn devices_for_node(&self, _node: TrackingNode) -> Vec<DeviceId> {
        Vec::new()
    }

    fn is_valid(&self, _id: DeviceId) -> bool {
        false
    }

    fn try_get_position(&self, _id: DeviceId) -> Option<Vec3> {
        None
    }

    fn try_get_rotation(&self, _id: DeviceId) -> Option<Quat> {
        None
    }
}

#[derive(Debug, Clone)]
struct ScriptedDevice {
    node: TrackingNode,
    connected: bool,
    position: Option<Vec3>,
    rotation: Option<Quat>,
}

/// Scriptable backend for tests and headless demos.
///
/// Devices are connected and disconnected explicitly, and each device reports
/// whatever pose fields the script last set. Enumeration order per node is
/// connection order, which keeps resolution deterministic.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    devices: BTreeMap<DeviceId, ScriptedDevice>,
    next_id: u64,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a new device at the given node. It reports no pose until the
    /// script sets one.
    pub fn connect(&mut self, node: TrackingNode) -> DeviceId {
        let id = DeviceId(self.next_id);
        self.next_id += 1;
        self.devices.insert(
            id,
            ScriptedDevice {
                node,
                connected: true,
                position: None,
                rotation: None,
            },
        );
        id
    }

    /// Disconnect a device. Its handle reports invalid from now on and it no
    /// longer appears in node enumeration.
    pub fn disconnect(&mut self, id: DeviceId) {
        if let Some(dev) = self.devices.get_mut(&id) {
            dev.connected = false;
        }
    }

    pub fn set_position(&mut self, id: DeviceId, position: Option<Vec3>) {
        if let Some(dev) = self.devices.get_mut(&id) {
            dev.position = position;
        }
    }

    pub fn set_rotation(&mut self, id: DeviceId, rotation: Option<Quat>) {
        if let Some(dev) = self.devices.get_mut(&id) {
            dev.rotation = rotation;
        }
    }

    /// Set both pose fields at once.
    pub fn set_pose(&mut self, id: DeviceId, position: Vec3, rotation: Quat) {
        self.set_position(id, Some(position));
        self.set_rotation(id, Some(rotation));
    }
}

impl InputBackend for ScriptedBackend {
    fn devices_for_node(&self, node: TrackingNode) -> Vec<DeviceId> {
        // BTreeMap keys ascend by id, and ids ascend by connection order.
        self.devices
            .iter()
            .filter(|(_, dev)| dev.connected && dev.node == node)
            .map(|(id, _)| *id)
            .collect()
    }

    fn is_valid(&self, id: DeviceId) -> bool {
        self.devices.get(&id).is_some_and(|dev| dev.connected)
    }

    fn try_get_position(&self, id: DeviceId) -> Option<Vec3> {
        let dev = self.devices.get(&id)?;
        if !dev.connected {
            return None;
        }
        dev.position
    }

    fn try_get_rotation(&self, id: DeviceId) -> Option<Quat> {
        let dev = self.devices.get(&id)?;
        if !dev.connected {
            return None;
        }
        dev.rotation
    }
}
