//! Background layout generation.
//!
//! Every random parameter is drawn here, once per element. Renderers only
//! read the resulting `BackgroundLayout`, so a mounted background keeps the
//! same motion on every repaint. Colors and outlines are assigned by index
//! (`index % palette.len()`) so the mix stays balanced.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;

use crate::background::palette::{cyclic, Hue, QUAD, TRIAD};
use crate::background::variant::BackgroundVariant;

pub const PARTICLE_COUNT: usize = 80;
pub const FLOATING_SHAPE_COUNT: usize = 12;
pub const WAVE_BAND_COUNT: usize = 6;
pub const RIPPLE_COUNT: usize = 4;
pub const GEOMETRIC_SHAPE_COUNT: usize = 20;

/// Uniform position range, in percent of the container.
const POSITION_PCT: Range<f32> = 0.0..100.0;

const PARTICLE_SIZE_PX: Range<f32> = 2.0..6.0;
const PARTICLE_DRIFT_PX: Range<f32> = -100.0..100.0;
const PARTICLE_DURATION_S: Range<f32> = 10.0..25.0;
const PARTICLE_DELAY_S: Range<f32> = 0.0..20.0;
const PARTICLE_ALPHA: f32 = 0.7;

const FLOATING_SIZE_PX: Range<f32> = 10.0..30.0;
const FLOATING_DRIFT_PX: Range<f32> = -50.0..50.0;
const FLOATING_DURATION_S: Range<f32> = 15.0..35.0;
const FLOATING_DELAY_STEP_S: f32 = 2.0;

const WAVE_ALPHA: f32 = 0.6;
const RIPPLE_SIZE_PX: f32 = 50.0;
const RIPPLE_DURATION_S: f32 = 6.0;

const GEOMETRIC_SIZE_PX: Range<f32> = 20.0..50.0;
const GEOMETRIC_DRIFT_PX: Range<f32> = -100.0..100.0;
const GEOMETRIC_DURATION_S: Range<f32> = 15.0..40.0;
const GEOMETRIC_DELAY_STEP_S: f32 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Layout types
// ────────────────────────────────────────────────────────────────────────────

/// Peak offset of an element's looping drift, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drift {
    pub x_px: f32,
    pub y_px: f32,
}

/// Loop timing. `delay_s` desynchronizes elements that share a duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    pub duration_s: f32,
    pub delay_s: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: f32,
    pub hue: Hue,
    pub color: String,
    pub drift: Drift,
    pub motion: Motion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outline {
    Circle,
    /// Rounded square rotated 45°.
    Diamond,
    Square,
}

const FLOATING_OUTLINES: [Outline; 4] = [
    Outline::Circle,
    Outline::Diamond,
    Outline::Square,
    Outline::Circle,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingShape {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: f32,
    pub hue: Hue,
    pub outline: Outline,
    pub drift: Drift,
    pub motion: Motion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveBand {
    pub top_pct: f32,
    pub hue: Hue,
    pub color: String,
    pub motion: Motion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ripple {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub motion: Motion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometricKind {
    Triangle,
    Square,
    Hexagon,
    Circle,
}

const GEOMETRIC_KINDS: [GeometricKind; 4] = [
    GeometricKind::Triangle,
    GeometricKind::Square,
    GeometricKind::Hexagon,
    GeometricKind::Circle,
];

impl GeometricKind {
    /// CSS clip path, or `None` when the element's own border shape is used.
    pub fn clip_path(self) -> Option<&'static str> {
        match self {
            GeometricKind::Triangle => Some("polygon(50% 0%, 0% 100%, 100% 100%)"),
            GeometricKind::Hexagon => {
                Some("polygon(30% 0%, 70% 0%, 100% 50%, 70% 100%, 30% 100%, 0% 50%)")
            }
            GeometricKind::Square | GeometricKind::Circle => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricShape {
    pub kind: GeometricKind,
    pub clip_path: Option<&'static str>,
    pub hue: Hue,
    pub x_pct: f32,
    pub y_pct: f32,
    pub size_px: f32,
    pub drift: Drift,
    pub motion: Motion,
}

/// A conic gradient whose starting angle follows the animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConicGradient {
    pub degrees_per_unit: f32,
    pub origin_x_pct: f32,
    pub origin_y_pct: f32,
}

impl ConicGradient {
    /// Starting angle in `[0, 360)` for the given clock time.
    pub fn angle_at(&self, time: f32) -> f32 {
        (time * self.degrees_per_unit).rem_euclid(360.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundLayout {
    pub variant: BackgroundVariant,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub particles: Vec<Particle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub floating_shapes: Vec<FloatingShape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wave_bands: Vec<WaveBand>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ripples: Vec<Ripple>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geometric_shapes: Vec<GeometricShape>,
    pub gradient: Option<ConicGradient>,
}

impl BackgroundLayout {
    fn empty(variant: BackgroundVariant) -> Self {
        Self {
            variant,
            particles: Vec::new(),
            floating_shapes: Vec::new(),
            wave_bands: Vec::new(),
            ripples: Vec::new(),
            geometric_shapes: Vec::new(),
            gradient: None,
        }
    }

    pub fn element_count(&self) -> usize {
        self.particles.len()
            + self.floating_shapes.len()
            + self.wave_bands.len()
            + self.ripples.len()
            + self.geometric_shapes.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates a fresh layout for `variant`, drawing from `rng`.
pub fn generate<R: Rng + ?Sized>(variant: BackgroundVariant, rng: &mut R) -> BackgroundLayout {
    let mut layout = BackgroundLayout::empty(variant);

    match variant {
        BackgroundVariant::Particles => {
            layout.particles = (0..PARTICLE_COUNT)
                .map(|i| particle(i, &mut *rng))
                .collect();
            layout.floating_shapes = (0..FLOATING_SHAPE_COUNT)
                .map(|i| floating_shape(i, &mut *rng))
                .collect();
            layout.gradient = Some(ConicGradient {
                degrees_per_unit: 60.0,
                origin_x_pct: 50.0,
                origin_y_pct: 50.0,
            });
        }
        BackgroundVariant::Waves => {
            layout.wave_bands = (0..WAVE_BAND_COUNT).map(wave_band).collect();
            layout.ripples = (0..RIPPLE_COUNT).map(ripple).collect();
        }
        BackgroundVariant::Geometric => {
            layout.geometric_shapes = (0..GEOMETRIC_SHAPE_COUNT)
                .map(|i| geometric_shape(i, &mut *rng))
                .collect();
            layout.gradient = Some(ConicGradient {
                degrees_per_unit: 30.0,
                origin_x_pct: 30.0,
                origin_y_pct: 70.0,
            });
        }
        BackgroundVariant::Default => {}
    }

    layout
}

fn drift<R: Rng + ?Sized>(range: Range<f32>, rng: &mut R) -> Drift {
    Drift {
        x_px: rng.gen_range(range.clone()),
        y_px: rng.gen_range(range),
    }
}

fn particle<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Particle {
    let hue = cyclic(&TRIAD, index);
    Particle {
        x_pct: rng.gen_range(POSITION_PCT),
        y_pct: rng.gen_range(POSITION_PCT),
        size_px: rng.gen_range(PARTICLE_SIZE_PX),
        hue,
        color: hue.rgba(PARTICLE_ALPHA),
        drift: drift(PARTICLE_DRIFT_PX, rng),
        motion: Motion {
            duration_s: rng.gen_range(PARTICLE_DURATION_S),
            delay_s: rng.gen_range(PARTICLE_DELAY_S),
        },
    }
}

fn floating_shape<R: Rng + ?Sized>(index: usize, rng: &mut R) -> FloatingShape {
    FloatingShape {
        x_pct: rng.gen_range(POSITION_PCT),
        y_pct: rng.gen_range(POSITION_PCT),
        size_px: rng.gen_range(FLOATING_SIZE_PX),
        hue: cyclic(&QUAD, index),
        outline: cyclic(&FLOATING_OUTLINES, index),
        drift: drift(FLOATING_DRIFT_PX, rng),
        motion: Motion {
            duration_s: rng.gen_range(FLOATING_DURATION_S),
            delay_s: index as f32 * FLOATING_DELAY_STEP_S,
        },
    }
}

fn wave_band(index: usize) -> WaveBand {
    let hue = cyclic(&TRIAD, index);
    let i = index as f32;
    WaveBand {
        top_pct: 20.0 + i * 15.0,
        hue,
        color: hue.rgba(WAVE_ALPHA),
        motion: Motion {
            duration_s: 8.0 + i * 2.0,
            delay_s: i * 3.0,
        },
    }
}

fn ripple(index: usize) -> Ripple {
    let i = index as f32;
    Ripple {
        left_pct: 25.0 + i * 20.0,
        top_pct: 30.0 + i * 15.0,
        size_px: RIPPLE_SIZE_PX,
        motion: Motion {
            duration_s: RIPPLE_DURATION_S,
            delay_s: i * 1.5,
        },
    }
}

fn geometric_shape<R: Rng + ?Sized>(index: usize, rng: &mut R) -> GeometricShape {
    let kind = cyclic(&GEOMETRIC_KINDS, index);
    GeometricShape {
        kind,
        clip_path: kind.clip_path(),
        hue: cyclic(&QUAD, index),
        size_px: rng.gen_range(GEOMETRIC_SIZE_PX),
        x_pct: rng.gen_range(POSITION_PCT),
        y_pct: rng.gen_range(POSITION_PCT),
        drift: drift(GEOMETRIC_DRIFT_PX, rng),
        motion: Motion {
            duration_s: rng.gen_range(GEOMETRIC_DURATION_S),
            delay_s: index as f32 * GEOMETRIC_DELAY_STEP_S,
        },
    }
}
