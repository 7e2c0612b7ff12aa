use glam::{Quat, Vec3};
use handproxy_common::{ObjectId, Transform};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A scene entity: transform, optional renderer, children.
///
/// `renderer_enabled` is `None` for objects that carry no renderer at all
/// (e.g. an empty grouping node whose children do the drawing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    pub renderer_enabled: Option<bool>,
    pub children: Vec<ObjectId>,
}

impl SceneObject {
    /// An empty node with no renderer.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            renderer_enabled: None,
            children: Vec::new(),
        }
    }

    /// A renderable primitive at identity, uniformly scaled.
    pub fn primitive(name: impl Into<String>, uniform_scale: f32) -> Self {
        Self {
            name: name.into(),
            transform: Transform {
                scale: Vec3::splat(uniform_scale),
                ..Transform::default()
            },
            renderer_enabled: Some(true),
            children: Vec::new(),
        }
    }
}

/// The scene-object store.
///
/// All mutations go through explicit operations. Lookups on missing ids
/// return `None`/`false` rather than erroring — the tracker treats a missing
/// visual as "do nothing this tick".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    objects: BTreeMap<ObjectId, SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Read-only access to all objects (BTreeMap for deterministic iteration).
    pub fn objects(&self) -> &BTreeMap<ObjectId, SceneObject> {
        &self.objects
    }

    /// Insert an object. Returns its id.
    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId::new();
        self.objects.insert(id, object);
        id
    }

    /// Remove an object. Returns the data if it existed. Children are not
    /// despawned; they stay in the scene as roots of their own subtrees.
    pub fn despawn(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id);
        if removed.is_some() {
            tracing::debug!(?id, "despawned scene object");
        }
        removed
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Register `child` under `parent`. Returns false if either id is
    /// missing, for a self-link, or when the link already exists.
    pub fn add_child(&mut self, parent: ObjectId, child: ObjectId) -> bool {
        if parent == child || !self.objects.contains_key(&child) {
            return false;
        }
        match self.objects.get_mut(&parent) {
            Some(p) if !p.children.contains(&child) => {
                p.children.push(child);
                true
            }
            _ => false,
        }
    }

    pub fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.transform.position = position;
                true
            }
            None => false,
        }
    }

    pub fn set_rotation(&mut self, id: ObjectId, rotation: Quat) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.transform.rotation = rotation;
                true
            }
            None => false,
        }
    }

    /// Displace an object in world space.
    pub fn translate_world(&mut self, id: ObjectId, delta: Vec3) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.transform.position += delta;
                true
            }
            None => false,
        }
    }

    /// Rotate an object about a world-space axis.
    pub fn rotate_world(&mut self, id: ObjectId, axis: Vec3, angle: f32) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.transform.rotation =
                    (Quat::from_axis_angle(axis, angle) * obj.transform.rotation).normalize();
                true
            }
            None => false,
        }
    }

    /// Rotate an object about one of its local axes.
    pub fn rotate_local(&mut self, id: ObjectId, axis: Vec3, angle: f32) -> bool {
        match self.objects.get_mut(&id) {
            Some(obj) => {
                obj.transform.rotation =
                    (obj.transform.rotation * Quat::from_axis_angle(axis, angle)).normalize();
                true
            }
            None => false,
        }
    }

    /// Set visibility on an object: its own renderer if it has one, otherwise
    /// every renderer in its descendant subtree. Returns the number of
    /// renderers touched.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> usize {
        let Some(obj) = self.objects.get_mut(&id) else {
            return 0;
        };
        if obj.renderer_enabled.is_some() {
            obj.renderer_enabled = Some(visible);
            return 1;
        }

        // No renderer on the root: walk the subtree. The visited set keeps
        // the walk terminating (and each renderer counted once) even if the
        // child graph carries a cycle.
        let mut touched = 0;
        let mut visited = BTreeSet::from([id]);
        let mut pending = obj.children.clone();
        while let Some(child) = pending.pop() {
            if !visited.insert(child) {
                continue;
            }
            if let Some(obj) = self.objects.get_mut(&child) {
                if obj.renderer_enabled.is_some() {
                    obj.renderer_enabled = Some(visible);
                    touched += 1;
                }
                pending.extend(obj.children.iter().copied());
            }
        }
        touched
    }
}
