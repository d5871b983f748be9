//! Click-driven view-state transitions.
//!
//! The exhibit has three modes: idle orbit with the vending screen cycling,
//! the open vending view with project slates shown, and a camera focus on
//! one slate. Clicks route through picking; Back and Learn More arrive as
//! explicit host actions.

use crate::facade::controller::{ControllerState, ViewState};
use crate::systems::cycler::FrameCycler;
use crate::{Channel, HostEvent, UiControl};
use glam::Vec3;
use scene_core::pick::{pick, Ray};
use scene_core::{Camera, NodeId, OrbitControls, SceneGraph};
use tween_core::{Ease, Tweens};

/// Identity of the interactive nodes, fixed at startup.
#[derive(Clone, Debug)]
pub struct ExhibitNodes {
    pub screen: NodeId,
    pub placeholders: Vec<NodeId>,
}

impl ExhibitNodes {
    /// Pick candidates for a click: the screen plus every slate. Hidden
    /// nodes are skipped by the picker, so each mode only sees what it
    /// shows.
    #[must_use]
    pub fn click_candidates(&self) -> Vec<NodeId> {
        let mut v = Vec::with_capacity(self.placeholders.len() + 1);
        v.push(self.screen);
        v.extend_from_slice(&self.placeholders);
        v
    }
}

/// Tuning for the focus/home camera moves.
#[derive(Clone, Debug)]
pub struct ViewCfg {
    pub home_eye: Vec3,
    pub home_target: Vec3,
    /// Camera move duration, both directions.
    pub focus_secs: f32,
    /// Eye offset along the slate's facing normal.
    pub focus_back_off: f32,
    /// Eye lift above the slate center.
    pub focus_lift: f32,
    pub learn_more_url: String,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            home_eye: Vec3::new(10.0, 10.0, 10.0),
            home_target: Vec3::ZERO,
            focus_secs: 1.5,
            focus_back_off: 0.8,
            focus_lift: 0.3,
            learn_more_url: String::new(),
        }
    }
}

/// Mutable collaborators the transitions act on, borrowed per call so the
/// session keeps ownership.
pub struct ViewCtx<'a> {
    pub scene: &'a mut SceneGraph,
    pub camera: &'a Camera,
    pub orbit: &'a mut OrbitControls,
    pub tweens: &'a mut Tweens<Channel>,
    pub cycler: &'a mut FrameCycler,
}

/// Route a click ray to the transition it triggers, if any.
pub fn handle_click(
    state: &mut ControllerState,
    nodes: &ExhibitNodes,
    cfg: &ViewCfg,
    ctx: &mut ViewCtx<'_>,
    ray: &Ray,
    out: &mut Vec<HostEvent>,
) {
    if !state.audio_started {
        state.audio_started = true;
        out.push(HostEvent::PlayAudio);
    }
    let candidates = nodes.click_candidates();
    let hits = pick(ray, ctx.scene, &candidates);
    let Some(first) = hits.first() else {
        return;
    };
    if first.node == nodes.screen {
        open_vending(state, nodes, ctx, out);
    } else {
        focus_project(state, first.node, cfg, ctx, out);
    }
}

/// `Idle -> VendingOpen`: hide the screen, pause cycling, show the slates
/// and the overlay controls.
pub fn open_vending(
    state: &mut ControllerState,
    nodes: &ExhibitNodes,
    ctx: &mut ViewCtx<'_>,
    out: &mut Vec<HostEvent>,
) {
    let prev = state.view;
    ctx.scene.node_mut(nodes.screen).visible = false;
    ctx.cycler.stop();
    for &p in &nodes.placeholders {
        ctx.scene.node_mut(p).visible = true;
    }
    out.push(HostEvent::UiVisible(UiControl::LearnMore, true));
    out.push(HostEvent::UiVisible(UiControl::Back, true));
    state.view = ViewState::VendingOpen;
    log::info!(target: "view", "{prev:?} -> VendingOpen");
}

/// `VendingOpen|ProjectFocus -> ProjectFocus(target)`: lock rotation and
/// fly the camera to an offset pose in front of the slate. Clicking a
/// different slate while focused re-targets the same channels, so the
/// newest destination always wins.
pub fn focus_project(
    state: &mut ControllerState,
    target: NodeId,
    cfg: &ViewCfg,
    ctx: &mut ViewCtx<'_>,
    out: &mut Vec<HostEvent>,
) {
    if state.view == ViewState::Idle {
        // Slates are hidden (and unpickable) while idle.
        return;
    }
    ctx.orbit.rotate = false;
    ctx.orbit.pan = false;
    ctx.orbit.zoom = true;
    let t = &ctx.scene.node(target).transform;
    let pos = t.translation;
    let eye_to =
        pos + t.rotation * Vec3::new(0.0, 0.0, cfg.focus_back_off) + Vec3::Y * cfg.focus_lift;
    ctx.tweens.animate(
        Channel::CameraEye,
        ctx.camera.eye,
        eye_to,
        cfg.focus_secs,
        Ease::InOut,
    );
    ctx.tweens.animate(
        Channel::CameraTarget,
        ctx.camera.target,
        pos,
        cfg.focus_secs,
        Ease::InOut,
    );
    out.push(HostEvent::UiVisible(UiControl::LearnMore, true));
    out.push(HostEvent::UiVisible(UiControl::Back, true));
    let prev = state.view;
    state.view = ViewState::ProjectFocus(target);
    log::info!(target: "view", "{prev:?} -> ProjectFocus({target:?})");
}

/// `VendingOpen|ProjectFocus -> Idle`: restore orbit, fly home, hide the
/// slates and overlay, show the screen, resume cycling.
pub fn go_back(
    state: &mut ControllerState,
    nodes: &ExhibitNodes,
    cfg: &ViewCfg,
    ctx: &mut ViewCtx<'_>,
    out: &mut Vec<HostEvent>,
) {
    if state.view == ViewState::Idle {
        return;
    }
    ctx.orbit.rotate = true;
    ctx.orbit.zoom = true;
    ctx.orbit.pan = false;
    ctx.tweens.animate(
        Channel::CameraEye,
        ctx.camera.eye,
        cfg.home_eye,
        cfg.focus_secs,
        Ease::InOut,
    );
    ctx.tweens.animate(
        Channel::CameraTarget,
        ctx.camera.target,
        cfg.home_target,
        cfg.focus_secs,
        Ease::InOut,
    );
    out.push(HostEvent::UiVisible(UiControl::LearnMore, false));
    out.push(HostEvent::UiVisible(UiControl::Back, false));
    for &p in &nodes.placeholders {
        ctx.scene.node_mut(p).visible = false;
    }
    ctx.scene.node_mut(nodes.screen).visible = true;
    ctx.cycler.start();
    let prev = state.view;
    state.view = ViewState::Idle;
    log::info!(target: "view", "{prev:?} -> Idle");
}

/// Learn More opens the external link without changing state; it only
/// exists while the vending view or a focus is active.
pub fn learn_more(state: &ControllerState, cfg: &ViewCfg, out: &mut Vec<HostEvent>) {
    if state.view == ViewState::Idle {
        return;
    }
    out.push(HostEvent::OpenUrl(cfg.learn_more_url.clone()));
}
