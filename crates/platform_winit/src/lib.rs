//! platform_winit: window + input loop (winit 0.30).
//!
//! Provides a minimal `run()` that creates a window and drives a
//! `client_runtime::Session` via winit's ApplicationHandler API. Device
//! pixels are converted to NDC exactly once per pointer event; Escape and
//! L stand in for the overlay's Back and Learn More controls. A renderer
//! would hook `RedrawRequested` and read poses/textures off the session.

use client_core::HostEvent;
use client_runtime::Session;
use glam::Vec2;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

#[derive(Default)]
struct App {
    window: Option<Window>,
    session: Option<Session>,
    cursor: Option<PhysicalPosition<f64>>,
    last_time: Option<Instant>,
}

fn ndc_from_pixels(pos: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Option<Vec2> {
    if size.width == 0 || size.height == 0 {
        return None;
    }
    let nx = (pos.x / f64::from(size.width)) * 2.0 - 1.0;
    let ny = -((pos.y / f64::from(size.height)) * 2.0 - 1.0);
    Some(Vec2::new(nx as f32, ny as f32))
}

/// The host side of the controller contract: overlay visibility, outbound
/// links, and the ambience cue. Headless shell, so these land in the log.
fn apply_host_events(session: &Session, events: &[HostEvent]) {
    for ev in events {
        match ev {
            HostEvent::UiVisible(ctl, shown) => {
                log::info!(target: "ui", "{ctl:?} {}", if *shown { "shown" } else { "hidden" });
            }
            HostEvent::OpenUrl(url) => log::info!(target: "ui", "open {url}"),
            HostEvent::PlayAudio => {
                log::info!(target: "audio", "ambience start: {}", session.music().display());
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = event_loop
                .create_window(WindowAttributes::default().with_title("Vitrine"))
                .expect("create window");
            let mut session = match Session::new() {
                Ok(s) => s,
                Err(e) => {
                    log::error!("session init failed: {e:#}");
                    event_loop.exit();
                    return;
                }
            };
            let size = window.inner_size();
            session.resize(size.width, size.height);
            self.window = Some(window);
            self.session = Some(session);
            self.last_time = Some(Instant::now());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(session)) = (&self.window, &mut self.session) else {
            return;
        };
        if window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => session.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
                if let Some(ndc) = ndc_from_pixels(position, window.inner_size()) {
                    session.handle_move(ndc);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(ndc) = self
                    .cursor
                    .and_then(|pos| ndc_from_pixels(pos, window.inner_size()))
                {
                    session.handle_click(ndc);
                }
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => session.back(),
                    PhysicalKey::Code(KeyCode::KeyL) => session.learn_more(),
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => {
                // Renderer hook point; the shell itself presents nothing.
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let (Some(window), Some(session)) = (&self.window, &mut self.session) else {
            return;
        };
        let now = Instant::now();
        let dt = self
            .last_time
            .map_or(0.0, |t| now.duration_since(t).as_secs_f32());
        self.last_time = Some(now);
        let events = session.tick(dt);
        apply_host_events(session, &events);
        window.request_redraw();
    }
}

pub fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_corners_map_to_ndc_corners() {
        let size = PhysicalSize::new(800, 600);
        let tl = ndc_from_pixels(PhysicalPosition::new(0.0, 0.0), size).unwrap();
        assert!((tl - Vec2::new(-1.0, 1.0)).length() < 1e-6);
        let br = ndc_from_pixels(PhysicalPosition::new(800.0, 600.0), size).unwrap();
        assert!((br - Vec2::new(1.0, -1.0)).length() < 1e-6);
        let center = ndc_from_pixels(PhysicalPosition::new(400.0, 300.0), size).unwrap();
        assert!(center.length() < 1e-6);
    }

    #[test]
    fn degenerate_window_yields_no_ndc() {
        assert!(ndc_from_pixels(PhysicalPosition::new(1.0, 1.0), PhysicalSize::new(0, 0)).is_none());
    }
}
