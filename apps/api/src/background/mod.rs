#![allow(dead_code)]

// Decorative background: randomized layout generation plus the clock that
// rotates its conic gradient. Visual only; nothing downstream reads it.

pub mod clock;
pub mod generator;
pub mod handlers;
pub mod palette;
pub mod variant;

use rand::Rng;

use crate::background::clock::AnimationClock;

pub use generator::{generate, BackgroundLayout};
pub use variant::BackgroundVariant;

/// A background for the lifetime of one mount.
///
/// The layout is generated once in `mount` and returned unchanged on every
/// read. The clock starts with the mount and stops when this is dropped.
#[derive(Debug)]
pub struct MountedBackground {
    layout: BackgroundLayout,
    clock: AnimationClock,
}

impl MountedBackground {
    pub fn mount(variant: BackgroundVariant) -> Self {
        Self::mount_with(variant, &mut rand::thread_rng())
    }

    pub fn mount_with<R: Rng + ?Sized>(variant: BackgroundVariant, rng: &mut R) -> Self {
        Self {
            layout: generate(variant, rng),
            clock: AnimationClock::start(),
        }
    }

    pub fn layout(&self) -> &BackgroundLayout {
        &self.layout
    }

    /// Current gradient angle in degrees, or `None` for variants without one.
    pub fn gradient_angle(&self) -> Option<f32> {
        self.layout
            .gradient
            .map(|g| g.angle_at(self.clock.time()))
    }
}
