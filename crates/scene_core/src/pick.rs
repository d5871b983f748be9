//! Pointer picking: NDC ray construction and ordered AABB hit tests.

use crate::camera::Camera;
use crate::geom::ray_aabb_enter_t;
use crate::{NodeId, SceneGraph};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Unproject a pointer position in normalized device coordinates
    /// ([-1,1] on both axes, y up) through the camera. Device-pixel to NDC
    /// conversion is the caller's job, once per event.
    #[must_use]
    pub fn from_ndc(ndc: Vec2, camera: &Camera) -> Self {
        let inv = camera.view_proj().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            dir: (far - near).normalize_or_zero(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub t: f32,
}

/// Intersect `ray` with the world-space bounds of each candidate, nearest
/// first. Invisible nodes and group nodes never hit; a degenerate ray or an
/// empty candidate set yields an empty list.
#[must_use]
pub fn pick(ray: &Ray, scene: &SceneGraph, candidates: &[NodeId]) -> SmallVec<[Hit; 4]> {
    let mut hits: SmallVec<[Hit; 4]> = SmallVec::new();
    if ray.dir == Vec3::ZERO {
        return hits;
    }
    for &id in candidates {
        if !scene.node(id).visible {
            continue;
        }
        let Some(bounds) = scene.world_bounds(id) else {
            continue;
        };
        if let Some(t) = ray_aabb_enter_t(ray.origin, ray.dir, bounds.min, bounds.max) {
            hits.push(Hit { node: id, t });
        }
    }
    hits.sort_by(|a, b| a.t.total_cmp(&b.t));
    hits
}
