use client_core::facade::controller::ViewState;
use client_core::{HostEvent, UiControl};
use client_runtime::Session;
use glam::{Vec2, Vec3};

/// Screen-space position of a world point under the session camera.
fn ndc_of(s: &Session, world: Vec3) -> Vec2 {
    let clip = s.camera().view_proj().project_point3(world);
    Vec2::new(clip.x, clip.y)
}

#[test]
fn full_exhibit_flow_reaches_focus_and_returns_home() {
    let mut s = Session::new().expect("session");
    let nodes = s.exhibit_nodes().clone();
    let screen_pos = s.scene().node(nodes.screen).transform.translation;

    s.handle_click(ndc_of(&s, screen_pos));
    assert_eq!(s.view(), ViewState::VendingOpen);
    let events = s.tick(0.016);
    assert!(events.contains(&HostEvent::UiVisible(UiControl::Back, true)));
    assert!(events.contains(&HostEvent::PlayAudio));

    let p1 = nodes.placeholders[1];
    let slate_pos = s.scene().node(p1).transform.translation;
    s.handle_click(ndc_of(&s, slate_pos));
    assert_eq!(s.view(), ViewState::ProjectFocus(p1));

    // Ride the 1.5 s camera move to completion; the focus pose sits inside
    // the radial bounds, so the clamp leaves it alone.
    let _ = s.tick(1.6);
    let expect = slate_pos + Vec3::new(0.0, 0.3, 0.8);
    assert!((s.camera().eye - expect).length() < 1e-3);
    assert!((s.camera().target - slate_pos).length() < 1e-3);

    s.back();
    assert_eq!(s.view(), ViewState::Idle);
    assert!(s.scene().node(nodes.screen).visible);
    assert!(nodes
        .placeholders
        .iter()
        .all(|&p| !s.scene().node(p).visible));

    // The home pose lies outside the orbit range, so the per-tick clamp
    // rescales the arrived eye onto the max radius along (1,1,1).
    let _ = s.tick(1.6);
    let eye = s.camera().eye;
    assert!((eye.length() - s.orbit().max_distance).abs() < 1e-3);
    assert!((eye.normalize() - Vec3::ONE.normalize()).length() < 1e-4);
}

#[test]
fn refocus_from_focus_retargets_without_back() {
    let mut s = Session::new().expect("session");
    let nodes = s.exhibit_nodes().clone();
    let screen_pos = s.scene().node(nodes.screen).transform.translation;
    s.handle_click(ndc_of(&s, screen_pos));

    let a = nodes.placeholders[2];
    let b = nodes.placeholders[3];
    s.handle_click(ndc_of(&s, s.scene().node(a).transform.translation));
    assert_eq!(s.view(), ViewState::ProjectFocus(a));
    s.handle_click(ndc_of(&s, s.scene().node(b).transform.translation));
    assert_eq!(s.view(), ViewState::ProjectFocus(b));

    let _ = s.tick(1.6);
    let b_pos = s.scene().node(b).transform.translation;
    assert!((s.camera().target - b_pos).length() < 1e-3);
}

#[test]
fn hover_scales_only_the_slate_under_the_pointer() {
    let mut s = Session::new().expect("session");
    let nodes = s.exhibit_nodes().clone();
    let screen_pos = s.scene().node(nodes.screen).transform.translation;
    s.handle_click(ndc_of(&s, screen_pos));

    let p0 = nodes.placeholders[0];
    s.handle_move(ndc_of(&s, s.scene().node(p0).transform.translation));
    let _ = s.tick(0.4);
    let scale = s.scene().node(p0).transform.scale;
    assert!((scale - Vec3::splat(1.1)).length() < 1e-4);

    // Pointer leaves everything; the slate eases back to unit scale.
    s.handle_move(Vec2::new(0.99, -0.99));
    let _ = s.tick(0.4);
    let scale = s.scene().node(p0).transform.scale;
    assert!((scale - Vec3::ONE).length() < 1e-4);
}

#[test]
fn learn_more_emits_the_configured_url_only_when_open() {
    let mut s = Session::new().expect("session");
    s.learn_more();
    assert!(s.tick(0.016).iter().all(|e| !matches!(e, HostEvent::OpenUrl(_))));

    let nodes = s.exhibit_nodes().clone();
    let screen_pos = s.scene().node(nodes.screen).transform.translation;
    s.handle_click(ndc_of(&s, screen_pos));
    s.learn_more();
    let events = s.tick(0.016);
    assert!(events
        .iter()
        .any(|e| matches!(e, HostEvent::OpenUrl(url) if !url.is_empty())));
}
