//! Pointer-hover scale feedback on the project slates.
//!
//! Runs on every pointer move in every view state. Scale tweens live on
//! their own channels, so they never interfere with an in-flight camera
//! move.

use crate::facade::controller::ControllerState;
use crate::Channel;
use glam::Vec3;
use scene_core::pick::{pick, Ray};
use scene_core::{NodeId, SceneGraph};
use tween_core::{Ease, Tweens};

pub const HOVER_SCALE: f32 = 1.1;
pub const HOVER_EASE_SECS: f32 = 0.3;

/// Re-pick under the pointer and restyle on change: the node left behind
/// eases back to unit scale, the newly hovered one eases up.
pub fn update_hover(
    state: &mut ControllerState,
    hover_nodes: &[NodeId],
    scene: &SceneGraph,
    tweens: &mut Tweens<Channel>,
    ray: &Ray,
) {
    let hovered = pick(ray, scene, hover_nodes).first().map(|h| h.node);
    if hovered == state.hovered {
        return;
    }
    if let Some(prev) = state.hovered {
        let from = scene.node(prev).transform.scale;
        tweens.animate(
            Channel::Scale(prev),
            from,
            Vec3::ONE,
            HOVER_EASE_SECS,
            Ease::Out,
        );
    }
    if let Some(next) = hovered {
        let from = scene.node(next).transform.scale;
        tweens.animate(
            Channel::Scale(next),
            from,
            Vec3::splat(HOVER_SCALE),
            HOVER_EASE_SECS,
            Ease::Out,
        );
    }
    state.hovered = hovered;
}
