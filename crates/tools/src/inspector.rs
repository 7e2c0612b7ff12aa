use handproxy_common::HandRole;
use handproxy_scene::Scene;
use handproxy_sim::{SimGestures, SimInput};
use handproxy_tracker::HandProxyTracker;

/// Tracker inspector for developer tooling.
///
/// Provides read-only snapshots of tracker and scene state for debugging
/// and CLI output.
pub struct TrackerInspector;

impl TrackerInspector {
    /// Produce a summary of the tracker state against the given scene.
    pub fn summary(tracker: &HandProxyTracker, scene: &Scene) -> TrackerSummary {
        let hands = tracker.hand_states().map(|state| {
            let transform = scene.get(state.visual).map(|obj| obj.transform);
            HandSummary {
                role: state.role,
                device: state.handle.map(|id| id.0),
                visual_present: transform.is_some(),
                owned: state.owned,
                position: transform.map(|t| [t.position.x, t.position.y, t.position.z]),
            }
        });
        TrackerSummary {
            hands,
            invisible: tracker.is_invisible(),
            scene_objects: scene.object_count(),
        }
    }

    /// The four gesture sub-states for this tick's input.
    pub fn gestures(input: &SimInput) -> SimGestures {
        SimGestures::observe(input)
    }
}

/// Summary of one hand's binding.
#[derive(Debug, Clone, Copy)]
pub struct HandSummary {
    pub role: HandRole,
    pub device: Option<u64>,
    pub visual_present: bool,
    pub owned: bool,
    pub position: Option<[f32; 3]>,
}

/// Summary of tracker state for the inspector.
#[derive(Debug, Clone)]
pub struct TrackerSummary {
    pub hands: [HandSummary; 2],
    pub invisible: bool,
    pub scene_objects: usize,
}

impl std::fmt::Display for TrackerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for hand in &self.hands {
            let device = match hand.device {
                Some(id) => format!("device#{id}"),
                None => "no device".to_string(),
            };
            let pos = match hand.position {
                Some([x, y, z]) => format!("({x:.2}, {y:.2}, {z:.2})"),
                None => "missing visual".to_string(),
            };
            writeln!(
                f,
                "{}: {} pos={} {}",
                hand.role,
                device,
                pos,
                if hand.owned { "owned" } else { "external" }
            )?;
        }
        write!(
            f,
            "invisible={} scene_objects={}",
            self.invisible, self.scene_objects
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handproxy_sim::SimKey;
    use handproxy_tracker::TrackerConfig;

    #[test]
    fn summary_reflects_attached_tracker() {
        let mut scene = Scene::new();
        let tracker = HandProxyTracker::attach(&mut scene, TrackerConfig::default()).unwrap();

        let summary = TrackerInspector::summary(&tracker, &scene);
        assert_eq!(summary.scene_objects, 2);
        assert!(!summary.invisible);
        assert!(summary.hands.iter().all(|h| h.visual_present && h.owned));
        assert!(summary.hands.iter().all(|h| h.device.is_none()));
    }

    #[test]
    fn summary_display_names_both_hands() {
        let mut scene = Scene::new();
        let tracker = HandProxyTracker::attach(&mut scene, TrackerConfig::default()).unwrap();

        let text = TrackerInspector::summary(&tracker, &scene).to_string();
        assert!(text.contains("left:"));
        assert!(text.contains("right:"));
        assert!(text.contains("no device"));
    }

    #[test]
    fn gestures_pass_through() {
        let mut input = SimInput::new();
        input.press(SimKey::ArrowUp);
        let g = TrackerInspector::gestures(&input);
        assert!(g.right_translating);
        assert!(!g.left_translating);
    }
}
