use handproxy_common::ObjectId;
use handproxy_device::{DeviceId, InputBackend};
use handproxy_scene::Scene;

/// Copy the device pose onto the visual, field by field.
///
/// Position and rotation are queried independently; whichever read succeeds
/// overwrites the corresponding transform component, and a failed read leaves
/// that component at its previous value. Writes are direct, last-read-wins —
/// no interpolation. An invalid handle or missing visual makes the whole call
/// a no-op.
///
/// Returns true when at least one field was applied.
pub fn apply_device_pose<B: InputBackend>(
    backend: &B,
    handle: DeviceId,
    scene: &mut Scene,
    visual: ObjectId,
) -> bool {
    if !backend.is_valid(handle) || !scene.contains(visual) {
        return false;
    }

    let mut applied = false;
    if let Some(position) = backend.try_get_position(handle) {
        applied |= scene.set_position(visual, position);
    }
    if let Some(rotation) = backend.try_get_rotation(handle) {
        applied |= scene.set_rotation(visual, rotation);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use handproxy_device::{ScriptedBackend, TrackingNode};
    use handproxy_scene::SceneObject;

    fn setup() -> (ScriptedBackend, DeviceId, Scene, ObjectId) {
        let mut backend = ScriptedBackend::new();
        let device = backend.connect(TrackingNode::LeftHand);
        let mut scene = Scene::new();
        let visual = scene.spawn(SceneObject::primitive("proxy", 0.01));
        (backend, device, scene, visual)
    }

    #[test]
    fn full_pose_overwrites_both_fields() {
        let (mut backend, device, mut scene, visual) = setup();
        let rot = Quat::from_axis_angle(Vec3::Y, 1.0);
        backend.set_pose(device, Vec3::new(0.1, 1.2, -0.3), rot);

        assert!(apply_device_pose(&backend, device, &mut scene, visual));
        let t = scene.get(visual).unwrap().transform;
        assert_eq!(t.position, Vec3::new(0.1, 1.2, -0.3));
        assert_eq!(t.rotation, rot);
    }

    #[test]
    fn position_only_leaves_rotation_untouched() {
        let (mut backend, device, mut scene, visual) = setup();
        let prior = Quat::from_axis_angle(Vec3::X, 0.7);
        scene.set_rotation(visual, prior);
        backend.set_position(device, Some(Vec3::ONE));

        assert!(apply_device_pose(&backend, device, &mut scene, visual));
        let t = scene.get(visual).unwrap().transform;
        assert_eq!(t.position, Vec3::ONE);
        assert_eq!(t.rotation, prior);
    }

    #[test]
    fn rotation_only_leaves_position_untouched() {
        let (mut backend, device, mut scene, visual) = setup();
        scene.set_position(visual, Vec3::new(5.0, 0.0, 0.0));
        backend.set_rotation(device, Some(Quat::from_axis_angle(Vec3::Z, 0.2)));

        assert!(apply_device_pose(&backend, device, &mut scene, visual));
        let t = scene.get(visual).unwrap().transform;
        assert_eq!(t.position, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn no_pose_fields_applies_nothing() {
        let (backend, device, mut scene, visual) = setup();
        let before = scene.get(visual).unwrap().transform;

        assert!(!apply_device_pose(&backend, device, &mut scene, visual));
        assert_eq!(scene.get(visual).unwrap().transform, before);
    }

    #[test]
    fn invalid_handle_is_a_noop() {
        let (mut backend, device, mut scene, visual) = setup();
        backend.set_pose(device, Vec3::ONE, Quat::IDENTITY);
        backend.disconnect(device);
        let before = scene.get(visual).unwrap().transform;

        assert!(!apply_device_pose(&backend, device, &mut scene, visual));
        assert_eq!(scene.get(visual).unwrap().transform, before);
    }

    #[test]
    fn missing_visual_is_a_noop() {
        let (mut backend, device, mut scene, _visual) = setup();
        backend.set_pose(device, Vec3::ONE, Quat::IDENTITY);
        let ghost = ObjectId::new();

        assert!(!apply_device_pose(&backend, device, &mut scene, ghost));
    }
}
