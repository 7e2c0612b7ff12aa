use crate::binder::apply_device_pose;
use crate::config::TrackerConfig;
use glam::Vec3;
use handproxy_common::{HandRole, ObjectId};
use handproxy_device::{DeviceId, DeviceSlot, InputBackend};
use handproxy_scene::{Scene, SceneObject};
use handproxy_sim::{SimInput, hand_delta};

/// Errors from attaching a tracker to a scene.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error("{role} visual {id:?} not found in scene")]
    MissingVisual { role: HandRole, id: ObjectId },
    #[error("left and right hands configured with the same visual {0:?}")]
    SharedVisual(ObjectId),
}

/// One hand's binding: device slot, visual, and who owns the visual.
#[derive(Debug, Clone, Copy)]
struct HandSlot {
    slot: DeviceSlot,
    visual: ObjectId,
    /// Created by the tracker at attach; despawned at detach. Externally
    /// supplied visuals are never despawned.
    owned: bool,
}

/// Read-only view of one hand's binding, for tooling.
#[derive(Debug, Clone, Copy)]
pub struct HandState {
    pub role: HandRole,
    pub handle: Option<DeviceId>,
    pub visual: ObjectId,
    pub owned: bool,
}

/// Mirrors two hand controllers onto two scene objects.
///
/// Per tick: resolve the device handle (re-resolving when invalid), apply
/// whatever pose fields the device reports, then layer simulation deltas on
/// top if the fallback is enabled. The tracker runs for its entire attached
/// lifetime; there is no pause or cancellation.
pub struct HandProxyTracker {
    config: TrackerConfig,
    hands: [HandSlot; 2],
    invisible: bool,
}

impl HandProxyTracker {
    /// Bind both hands, creating placeholder visuals where none were
    /// configured, and apply the initial visibility.
    pub fn attach(scene: &mut Scene, config: TrackerConfig) -> Result<Self, AttachError> {
        if let (Some(l), Some(r)) = (config.left_visual, config.right_visual)
            && l == r
        {
            return Err(AttachError::SharedVisual(l));
        }

        let externals = [
            (HandRole::Left, config.left_visual),
            (HandRole::Right, config.right_visual),
        ];

        // Validate every external id before spawning anything, so a failed
        // attach leaves the scene exactly as it found it.
        for (role, external) in externals {
            if let Some(id) = external
                && !scene.contains(id)
            {
                return Err(AttachError::MissingVisual { role, id });
            }
        }

        let [left, right] = externals.map(|(role, external)| match external {
            Some(id) => HandSlot {
                slot: DeviceSlot::new(role),
                visual: id,
                owned: false,
            },
            None => {
                let id = scene.spawn(SceneObject::primitive(
                    format!("{role}_hand_proxy"),
                    config.proxy_scale,
                ));
                tracing::info!(%role, ?id, scale = config.proxy_scale, "created proxy visual");
                HandSlot {
                    slot: DeviceSlot::new(role),
                    visual: id,
                    owned: true,
                }
            }
        });

        let invisible = config.make_invisible;
        let mut tracker = Self {
            config,
            hands: [left, right],
            invisible: false,
        };
        if invisible {
            tracker.set_invisible(scene, true);
        }
        Ok(tracker)
    }

    /// One tick. `dt` is the elapsed frame time in seconds; `input` is this
    /// tick's simulation snapshot, or None when the host provides none.
    pub fn update<B: InputBackend>(
        &mut self,
        backend: &B,
        scene: &mut Scene,
        input: Option<&SimInput>,
        dt: f32,
    ) {
        for hand in &mut self.hands {
            let role = hand.slot.role();

            // Authoritative device pose first.
            let device_applied = match hand.slot.ensure_resolved(backend) {
                Some(handle) => apply_device_pose(backend, handle, scene, hand.visual),
                None => false,
            };

            // Simulation deltas layer on top of whatever the device wrote
            // this tick, unless exclusive_sim suppresses them for this hand.
            if !self.config.simulate {
                continue;
            }
            if self.config.exclusive_sim && device_applied {
                continue;
            }
            let Some(input) = input else { continue };

            let delta = hand_delta(role, input, &self.config.sim_config(), dt);
            if delta.is_zero() {
                continue;
            }
            scene.translate_world(hand.visual, delta.translation);
            if delta.yaw != 0.0 {
                scene.rotate_world(hand.visual, Vec3::Y, delta.yaw);
            }
            if delta.pitch != 0.0 {
                scene.rotate_local(hand.visual, Vec3::X, delta.pitch);
            }
        }
    }

    /// Update visibility of both visuals immediately.
    pub fn set_invisible(&mut self, scene: &mut Scene, invisible: bool) {
        self.invisible = invisible;
        for hand in &self.hands {
            let touched = scene.set_visible(hand.visual, !invisible);
            tracing::debug!(
                role = %hand.slot.role(),
                invisible,
                renderers = touched,
                "visibility updated"
            );
        }
    }

    /// Whether the visuals are currently hidden.
    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    /// Despawn tracker-owned visuals. Externally supplied visuals stay.
    pub fn detach(self, scene: &mut Scene) {
        for hand in &self.hands {
            if hand.owned {
                scene.despawn(hand.visual);
            }
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The visual bound to a role.
    pub fn visual(&self, role: HandRole) -> ObjectId {
        self.hand(role).visual
    }

    /// The device handle currently held for a role, if any.
    pub fn handle(&self, role: HandRole) -> Option<DeviceId> {
        self.hand(role).slot.handle()
    }

    /// Read-only view of both hand bindings.
    pub fn hand_states(&self) -> [HandState; 2] {
        self.hands.map(|hand| HandState {
            role: hand.slot.role(),
            handle: hand.slot.handle(),
            visual: hand.visual,
            owned: hand.owned,
        })
    }

    fn hand(&self, role: HandRole) -> &HandSlot {
        match role {
            HandRole::Left => &self.hands[0],
            HandRole::Right => &self.hands[1],
        }
    }
}
