//! client_runtime: session assembly and the host-facing surface.
//!
//! `Session` owns the scene, camera, controller state, and timers, and
//! exposes the pointer/tick API a render host drives. The renderer reads
//! camera pose, node transforms, visibility, and texture data from here;
//! asset failures leave log lines and blank surfaces, never a dead session.

use anyhow::Result;
use client_core::facade::controller::{ControllerState, ViewState};
use client_core::systems::bounds;
use client_core::systems::cycler::FrameCycler;
use client_core::systems::hover;
use client_core::systems::spin::{SpinAxis, SpinSet, Spinner};
use client_core::systems::view_state::{self, ExhibitNodes, ViewCfg, ViewCtx};
use client_core::{Channel, HostEvent};
use data_runtime::configs::display::{self, BloomParams};
use data_runtime::configs::exhibit::{self, SpinAxisCfg, DEFAULT_SPIN_RATE};
use data_runtime::loader;
use data_runtime::project::ProjectSpec;
use glam::{Vec2, Vec3};
use scene_core::pick::Ray;
use scene_core::{Aabb, Camera, OrbitControls, SceneGraph, SceneNode, Transform};
use std::path::{Path, PathBuf};
use tween_core::Tweens;
use vt_assets::TextureCpu;

/// 2x2 slate layout around the screen center: TL, TR, BL, BR.
const GRID_CORNERS: [(f32, f32); 4] = [(-1.0, 1.0), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

pub struct Session {
    scene: SceneGraph,
    camera: Camera,
    orbit: OrbitControls,
    state: ControllerState,
    nodes: ExhibitNodes,
    view_cfg: ViewCfg,
    tweens: Tweens<Channel>,
    cycler: FrameCycler,
    spin: SpinSet,
    bloom: BloomParams,
    music: PathBuf,
    projects: Vec<ProjectSpec>,
    screen_texture: Option<TextureCpu>,
    project_textures: Vec<Option<TextureCpu>>,
    events: Vec<HostEvent>,
}

impl Session {
    /// Build the exhibit from configs and assets. Config parse failures are
    /// startup errors; missing assets only degrade visuals.
    pub fn new() -> Result<Self> {
        let display_cfg = display::load_default()?;
        let exhibit_cfg = exhibit::load_default()?;
        let projects = loader::load_projects().unwrap_or_else(|e| {
            log::warn!(target: "assets", "projects manifest: {e:#}; continuing without links");
            Vec::new()
        });

        // Backdrop model; the exhibit stays interactive without it.
        let model_path = loader::asset_path(exhibit_cfg.model());
        let mut scene = match vt_assets::gltf::load_scene(&model_path) {
            Ok(s) => s,
            Err(e) => {
                log::error!(target: "assets", "backdrop model: {e:#}");
                SceneGraph::new()
            }
        };

        // Spinning decor is looked up by name in the model.
        let mut spin = SpinSet::default();
        for s in exhibit_cfg.spinners() {
            match scene.find_by_name(&s.node) {
                Some(id) => spin.push(Spinner {
                    node: id,
                    axis: match s.axis {
                        SpinAxisCfg::X => SpinAxis::X,
                        SpinAxisCfg::Y => SpinAxis::Y,
                    },
                    rate: s.rate.unwrap_or(DEFAULT_SPIN_RATE),
                }),
                None => log::warn!(target: "scene", "spinner node '{}' not in model", s.node),
            }
        }

        // Code-built display surfaces: the vending screen and four slates.
        let screen_pos = exhibit_cfg.screen_pos();
        let screen = scene.push(SceneNode::mesh(
            "vending_screen",
            Transform {
                translation: screen_pos,
                scale: exhibit_cfg.screen_scale(),
                ..Transform::default()
            },
            Aabb {
                min: Vec3::new(-1.0, -1.0, 0.0),
                max: Vec3::new(1.0, 1.0, 0.0),
            },
        ));
        let grid = exhibit_cfg.grid_offset();
        let half = exhibit_cfg.slate_size() * 0.5;
        let slate_bounds = Aabb {
            min: -half,
            max: half,
        };
        let mut placeholders = Vec::with_capacity(GRID_CORNERS.len());
        for (i, &(sx, sy)) in GRID_CORNERS.iter().enumerate() {
            let name = projects
                .get(i)
                .map_or_else(|| format!("project{}", i + 1), |p| p.name.clone());
            let mut node = SceneNode::mesh(
                name,
                Transform {
                    translation: screen_pos + Vec3::new(grid.x * sx, grid.y * sy, 0.01),
                    ..Transform::default()
                },
                slate_bounds,
            );
            node.visible = false;
            placeholders.push(scene.push(node));
        }

        // Preload slate textures with loading-screen progress.
        let tex_paths: Vec<PathBuf> = projects
            .iter()
            .map(|p| loader::asset_path(&p.texture))
            .collect();
        let project_textures = vt_assets::loadset::load_all(
            &tex_paths,
            |p| vt_assets::load_texture(p),
            |done, total| log::info!(target: "assets", "loading {done}/{total}"),
        );

        // First frame goes up immediately; the cycler swaps the rest.
        let frames: Vec<PathBuf> = exhibit_cfg
            .frames()
            .iter()
            .map(loader::asset_path)
            .collect();
        let screen_texture = frames.first().and_then(|p| match vt_assets::load_texture(p) {
            Ok(t) => Some(t),
            Err(e) => {
                log::error!(target: "assets", "initial frame: {e:#}");
                None
            }
        });
        let mut cycler = FrameCycler::new(frames, exhibit_cfg.frame_period_secs());
        cycler.start();

        let camera = Camera::new(
            display_cfg.home_eye(),
            Vec3::ZERO,
            display_cfg.fovy(),
            16.0 / 9.0,
        );
        let orbit = OrbitControls::new(display_cfg.min_distance(), display_cfg.max_distance());
        let view_cfg = ViewCfg {
            home_eye: display_cfg.home_eye(),
            home_target: Vec3::ZERO,
            learn_more_url: exhibit_cfg.learn_more_url(),
            ..ViewCfg::default()
        };

        Ok(Self {
            scene,
            camera,
            orbit,
            state: ControllerState::default(),
            nodes: ExhibitNodes {
                screen,
                placeholders,
            },
            view_cfg,
            tweens: Tweens::new(),
            cycler,
            spin,
            bloom: display_cfg.bloom(),
            music: loader::asset_path(exhibit_cfg.music()),
            projects,
            screen_texture,
            project_textures,
            events: Vec::new(),
        })
    }

    /// Click routed through picking; `ndc` is in [-1,1] on both axes.
    pub fn handle_click(&mut self, ndc: Vec2) {
        let ray = Ray::from_ndc(ndc, &self.camera);
        let mut ctx = ViewCtx {
            scene: &mut self.scene,
            camera: &self.camera,
            orbit: &mut self.orbit,
            tweens: &mut self.tweens,
            cycler: &mut self.cycler,
        };
        view_state::handle_click(
            &mut self.state,
            &self.nodes,
            &self.view_cfg,
            &mut ctx,
            &ray,
            &mut self.events,
        );
    }

    /// Pointer move drives hover feedback in every view state.
    pub fn handle_move(&mut self, ndc: Vec2) {
        let ray = Ray::from_ndc(ndc, &self.camera);
        hover::update_hover(
            &mut self.state,
            &self.nodes.placeholders,
            &self.scene,
            &mut self.tweens,
            &ray,
        );
    }

    /// The explicit Back action (overlay button or Escape).
    pub fn back(&mut self) {
        let mut ctx = ViewCtx {
            scene: &mut self.scene,
            camera: &self.camera,
            orbit: &mut self.orbit,
            tweens: &mut self.tweens,
            cycler: &mut self.cycler,
        };
        view_state::go_back(
            &mut self.state,
            &self.nodes,
            &self.view_cfg,
            &mut ctx,
            &mut self.events,
        );
    }

    pub fn learn_more(&mut self) {
        view_state::learn_more(&self.state, &self.view_cfg, &mut self.events);
    }

    /// Advance every time-driven system by `dt` seconds and drain the
    /// events the host applies.
    pub fn tick(&mut self, dt: f32) -> Vec<HostEvent> {
        let scene = &mut self.scene;
        let camera = &mut self.camera;
        self.tweens.advance(dt, |ch, v| match ch {
            Channel::CameraEye => camera.eye = v,
            Channel::CameraTarget => camera.target = v,
            Channel::Scale(id) => scene.node_mut(id).transform.scale = v,
        });
        self.cycler
            .tick(dt, &mut self.screen_texture, |p| vt_assets::load_texture(p));
        self.spin.update(&mut self.scene, dt);
        self.camera.eye = bounds::clamp_radial(
            self.camera.eye,
            self.orbit.min_distance,
            self.orbit.max_distance,
        );
        std::mem::take(&mut self.events)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.state.view()
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    #[must_use]
    pub fn orbit(&self) -> &OrbitControls {
        &self.orbit
    }

    #[must_use]
    pub fn bloom(&self) -> BloomParams {
        self.bloom
    }

    /// Ambience track the audio host starts when [`HostEvent::PlayAudio`]
    /// arrives.
    #[must_use]
    pub fn music(&self) -> &Path {
        &self.music
    }

    #[must_use]
    pub fn projects(&self) -> &[ProjectSpec] {
        &self.projects
    }

    /// Current vending-screen frame, if its texture arrived.
    #[must_use]
    pub fn screen_texture(&self) -> Option<&TextureCpu> {
        self.screen_texture.as_ref()
    }

    /// Slate texture by grid slot, if it loaded.
    #[must_use]
    pub fn project_texture(&self, slot: usize) -> Option<&TextureCpu> {
        self.project_textures.get(slot).and_then(Option::as_ref)
    }

    /// Interactive node ids, mostly for tests and debug overlays.
    #[must_use]
    pub fn exhibit_nodes(&self) -> &ExhibitNodes {
        &self.nodes
    }
}
