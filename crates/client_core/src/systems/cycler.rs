//! Timer-driven frame cycling on the vending display surface.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tween_core::Interval;

/// Advances a frame index once per period and swaps the display texture.
/// The timer is a value, not a registration: a second `start` cannot create
/// a second schedule, so double-advancing is impossible by construction.
pub struct FrameCycler {
    frames: Vec<PathBuf>,
    index: usize,
    interval: Interval,
}

impl FrameCycler {
    #[must_use]
    pub fn new(frames: Vec<PathBuf>, period_secs: f32) -> Self {
        Self {
            frames,
            index: 0,
            interval: Interval::new(period_secs),
        }
    }

    /// Begin cycling. No-op while already running.
    pub fn start(&mut self) {
        self.interval.start();
    }

    /// Cancel the schedule; safe when not running.
    pub fn stop(&mut self) {
        self.interval.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_running()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Step to the next frame (wrapping) and request its texture. On
    /// success the display slot is swapped; on failure the previous texture
    /// stays and the error is logged.
    pub fn advance<T>(&mut self, slot: &mut Option<T>, load: impl FnOnce(&Path) -> Result<T>) {
        if self.frames.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.frames.len();
        let path = &self.frames[self.index];
        match load(path) {
            Ok(tex) => *slot = Some(tex),
            Err(e) => {
                log::error!(target: "assets", "frame texture {}: {e:#}", path.display());
            }
        }
    }

    /// Drive the cycle timer; each elapsed period fires one `advance`.
    pub fn tick<T>(
        &mut self,
        dt: f32,
        slot: &mut Option<T>,
        mut load: impl FnMut(&Path) -> Result<T>,
    ) {
        for _ in 0..self.interval.tick(dt) {
            self.advance(slot, &mut load);
        }
    }
}
