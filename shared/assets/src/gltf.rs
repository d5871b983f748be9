//! glTF scene import.
//!
//! Produces a `scene_core::SceneGraph` rather than GPU meshes: the exhibit
//! only needs names, transforms, and pick bounds from the backdrop model.

use anyhow::{Context, Result};
use glam::{Quat, Vec3};
use scene_core::{Aabb, NodeId, NodeKind, SceneGraph, SceneNode, Transform};
use std::path::Path;

/// Import a `.gltf`/`.glb` file as a node arena. Node names are preserved;
/// nodes with mesh data are tagged with local bounds taken from the
/// primitives' position accessors.
pub fn load_scene(path: &Path) -> Result<SceneGraph> {
    let (doc, _buffers, _images) =
        gltf::import(path).with_context(|| format!("import glTF: {}", path.display()))?;
    let source = doc
        .default_scene()
        .or_else(|| doc.scenes().next())
        .context("glTF has no scenes")?;
    let mut scene = SceneGraph::new();
    for node in source.nodes() {
        visit(&node, None, &mut scene);
    }
    Ok(scene)
}

fn visit(node: &gltf::Node<'_>, parent: Option<NodeId>, scene: &mut SceneGraph) {
    let (t, r, s) = node.transform().decomposed();
    let transform = Transform {
        translation: Vec3::from(t),
        rotation: Quat::from_array(r),
        scale: Vec3::from(s),
    };
    let kind = node
        .mesh()
        .and_then(|m| mesh_bounds(&m))
        .map_or(NodeKind::Group, |local_bounds| NodeKind::Mesh {
            local_bounds,
        });
    let name = node
        .name()
        .map_or_else(|| format!("node{}", node.index()), str::to_owned);
    let id = scene.push(SceneNode {
        name,
        transform,
        visible: true,
        kind,
        parent,
    });
    for child in node.children() {
        visit(&child, Some(id), scene);
    }
}

fn mesh_bounds(mesh: &gltf::Mesh<'_>) -> Option<Aabb> {
    mesh.primitives()
        .map(|p| {
            let b = p.bounding_box();
            Aabb {
                min: Vec3::from(b.min),
                max: Vec3::from(b.max),
            }
        })
        .reduce(Aabb::union)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_scene(Path::new("assets/definitely-not-here.glb")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely-not-here"));
    }

    #[test]
    fn minimal_gltf_preserves_names_and_hierarchy() {
        let json = r#"{
            "asset": {"version": "2.0"},
            "scene": 0,
            "scenes": [{"nodes": [0]}],
            "nodes": [
                {"name": "counter", "children": [1]},
                {"name": "fan_hub", "translation": [0.0, 2.0, 0.0]}
            ]
        }"#;
        let path = std::env::temp_dir().join("vt_assets_minimal_scene.gltf");
        std::fs::write(&path, json).expect("write temp gltf");
        let scene = load_scene(&path).expect("import");
        assert_eq!(scene.len(), 2);
        let fan = scene.find_by_name("fan_hub").expect("fan node");
        assert_eq!(scene.node(fan).parent, scene.find_by_name("counter"));
        let world = scene.world_matrix(fan).transform_point3(Vec3::ZERO);
        assert!((world.y - 2.0).abs() < 1e-6);
        // No mesh data anywhere, so the typed walk sees nothing.
        assert_eq!(scene.mesh_nodes().count(), 0);
    }

    #[test]
    fn mesh_nodes_are_tagged_with_primitive_bounds() {
        // One triangle at (0,0,0) (1,0,0) (0,1,0), positions inline as a
        // base64 data URI.
        let json = r#"{
            "asset": {"version": "2.0"},
            "scene": 0,
            "scenes": [{"nodes": [0, 1]}],
            "nodes": [
                {"name": "slate", "mesh": 0},
                {"name": "frame"}
            ],
            "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
            "accessors": [{
                "bufferView": 0,
                "componentType": 5126,
                "count": 3,
                "type": "VEC3",
                "min": [0.0, 0.0, 0.0],
                "max": [1.0, 1.0, 0.0]
            }],
            "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
            "buffers": [{
                "byteLength": 36,
                "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
            }]
        }"#;
        let path = std::env::temp_dir().join("vt_assets_mesh_bounds.gltf");
        std::fs::write(&path, json).expect("write temp gltf");
        let scene = load_scene(&path).expect("import");
        let meshes: Vec<_> = scene.mesh_nodes().collect();
        assert_eq!(meshes.len(), 1);
        assert_eq!(scene.node(meshes[0]).name, "slate");
        let bounds = scene.world_bounds(meshes[0]).expect("mesh bounds");
        assert!((bounds.min - Vec3::ZERO).length() < 1e-6);
        assert!((bounds.max - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }
}
