//! tween_core: time-based animation facilities.
//!
//! Everything here advances from the host tick with an explicit `dt` —
//! no OS timers, no threads. The session is single-threaded cooperative:
//! one writer per animated value, so the only discipline needed is the
//! superseding rule in [`tween::Tweens`] and the single-timer rule in
//! [`schedule::Interval`].

pub mod ease;
pub mod schedule;
pub mod tween;

pub use ease::Ease;
pub use schedule::Interval;
pub use tween::Tweens;
