//! Decor spinning: named model nodes rotate continuously in every state.

use glam::Quat;
use scene_core::{NodeId, SceneGraph};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinAxis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug)]
pub struct Spinner {
    pub node: NodeId,
    pub axis: SpinAxis,
    /// Radians per second; sign sets direction.
    pub rate: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SpinSet {
    spinners: Vec<Spinner>,
}

impl SpinSet {
    pub fn push(&mut self, s: Spinner) {
        self.spinners.push(s);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spinners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spinners.is_empty()
    }

    /// Rotate every registered node around its local axis.
    pub fn update(&self, scene: &mut SceneGraph, dt: f32) {
        for s in &self.spinners {
            let delta = match s.axis {
                SpinAxis::X => Quat::from_rotation_x(s.rate * dt),
                SpinAxis::Y => Quat::from_rotation_y(s.rate * dt),
            };
            let t = &mut scene.node_mut(s.node).transform;
            t.rotation = (t.rotation * delta).normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use scene_core::{SceneNode, Transform};

    #[test]
    fn spinners_accumulate_rotation_over_ticks() {
        let mut scene = SceneGraph::new();
        let id = scene.push(SceneNode::group("fan_hub", Transform::default()));
        let mut set = SpinSet::default();
        set.push(Spinner {
            node: id,
            axis: SpinAxis::Y,
            rate: std::f32::consts::FRAC_PI_2,
        });
        set.update(&mut scene, 1.0);
        set.update(&mut scene, 1.0);
        // Two quarter turns about Y map +X to -X.
        let spun = scene.node(id).transform.rotation * Vec3::X;
        assert!((spun + Vec3::X).length() < 1e-4);
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut scene = SceneGraph::new();
        let id = scene.push(SceneNode::group("fan_hub", Transform::default()));
        let before = scene.node(id).transform.rotation;
        SpinSet::default().update(&mut scene, 1.0);
        assert_eq!(scene.node(id).transform.rotation, before);
    }
}
