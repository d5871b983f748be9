//! Superseding property tweens.
//!
//! Channels are keyed; issuing a new `animate` on a channel that is still
//! running replaces it outright, so the last request always wins. This
//! mirrors how fire-and-forget tween facilities overwrite an in-flight
//! animation on the same target/property.

use crate::ease::Ease;
use glam::Vec3;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    fn sample(&self) -> Vec3 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Clone, Debug)]
pub struct Tweens<K> {
    channels: HashMap<K, Tween>,
}

impl<K> Default for Tweens<K> {
    fn default() -> Self {
        Self {
            channels: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> Tweens<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `key` from `from` to `to` over `duration` seconds. Replaces
    /// any tween already running on the channel.
    pub fn animate(&mut self, key: K, from: Vec3, to: Vec3, duration: f32, ease: Ease) {
        self.channels.insert(
            key,
            Tween {
                from,
                to,
                duration,
                elapsed: 0.0,
                ease,
            },
        );
    }

    /// Drop the tween on `key`, if any; returns whether one was running.
    pub fn cancel(&mut self, key: K) -> bool {
        self.channels.remove(&key).is_some()
    }

    #[must_use]
    pub fn is_animating(&self, key: K) -> bool {
        self.channels.contains_key(&key)
    }

    /// End value of the tween on `key`, if one is running.
    #[must_use]
    pub fn target_of(&self, key: K) -> Option<Vec3> {
        self.channels.get(&key).map(|t| t.to)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Advance every channel by `dt` and hand each new sample to `apply`.
    /// Channels that reach their target this step are removed after their
    /// final (exact) sample is applied.
    pub fn advance(&mut self, dt: f32, mut apply: impl FnMut(K, Vec3)) {
        self.channels.retain(|key, tw| {
            tw.elapsed = (tw.elapsed + dt).min(tw.duration);
            apply(*key, tw.sample());
            !tw.done()
        });
    }
}
