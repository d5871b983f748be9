use data_runtime::configs::{display, exhibit};
use data_runtime::loader;
use glam::Vec3;

#[test]
fn workspace_configs_load_and_resolve() {
    let d = display::load_default().expect("display cfg");
    assert!(d.min_distance() < d.max_distance());
    assert_eq!(d.home_eye(), Vec3::new(10.0, 10.0, 10.0));

    let e = exhibit::load_default().expect("exhibit cfg");
    assert_eq!(e.frames().len(), 5);
    assert!((e.frame_period_secs() - 1.0).abs() < f32::EPSILON);
    assert_eq!(e.spinners().len(), 3);
}

#[test]
fn asset_paths_resolve_under_the_workspace_root() {
    let p = loader::asset_path("assets/frames/frame1.png");
    // The workspace root carries the top-level Cargo.toml next to data/.
    assert!(p.parent().is_some());
    assert!(p.ends_with("assets/frames/frame1.png"));
}
