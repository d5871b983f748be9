//! client_core: the view-state controller for the exhibit client.
//!
//! Pointer rays arrive from `scene_core` picking; the controller mutates
//! scene visibility and orbit capabilities, drives tween channels, and
//! pushes [`HostEvent`]s for the surfaces the host owns (UI overlay, URL
//! opening, the audio device).

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use scene_core::NodeId;

pub mod facade {
    pub mod controller;
}
pub mod systems {
    pub mod bounds;
    pub mod cycler;
    pub mod hover;
    pub mod spin;
    pub mod view_state;
}

/// Events the controller emits for the host to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    UiVisible(UiControl, bool),
    OpenUrl(String),
    /// One-shot cue on the first user interaction.
    PlayAudio,
}

/// Overlay controls the host owns; the controller only toggles them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiControl {
    LearnMore,
    Back,
}

/// Tween channels the controller drives. Camera eye and look-target are
/// separate channels so a later request supersedes each independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    CameraEye,
    CameraTarget,
    Scale(NodeId),
}
