//! Read-only controller state consumed by the host and renderer.

use scene_core::NodeId;

/// Exactly one view mode is active at a time; transitions only happen
/// through the operations in `systems::view_state`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Free orbit, vending screen cycling.
    #[default]
    Idle,
    /// Screen hidden, project slates shown, cycling paused.
    VendingOpen,
    /// Camera animated toward one slate; re-targetable without Back.
    ProjectFocus(NodeId),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ControllerState {
    pub view: ViewState,
    pub hovered: Option<NodeId>,
    pub audio_started: bool,
}

impl ControllerState {
    #[inline]
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }
    #[inline]
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }
}
