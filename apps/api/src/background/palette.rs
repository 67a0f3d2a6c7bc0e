use serde::Serialize;

/// Accent hues shared by every background variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Blue,
    Purple,
    Green,
    Pink,
}

/// Particles and wave bands cycle through three hues.
pub const TRIAD: [Hue; 3] = [Hue::Blue, Hue::Purple, Hue::Green];
/// Outlined shapes cycle through four.
pub const QUAD: [Hue; 4] = [Hue::Blue, Hue::Purple, Hue::Green, Hue::Pink];

impl Hue {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Hue::Blue => (59, 130, 246),
            Hue::Purple => (139, 92, 246),
            Hue::Green => (16, 185, 129),
            Hue::Pink => (244, 114, 182),
        }
    }

    /// CSS `rgba(...)` string at the given opacity.
    pub fn rgba(self, alpha: f32) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

/// Picks `palette[index % len]`, so consecutive elements alternate evenly.
pub fn cyclic<T: Copy>(palette: &[T], index: usize) -> T {
    palette[index % palette.len()]
}
