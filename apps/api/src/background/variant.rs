use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundVariant {
    #[default]
    Particles,
    Waves,
    Geometric,
    /// Plain animated gradient with no generated elements.
    Default,
}

impl BackgroundVariant {
    /// Case-insensitive lookup. Unknown names fall back to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "particles" => BackgroundVariant::Particles,
            "waves" => BackgroundVariant::Waves,
            "geometric" => BackgroundVariant::Geometric,
            _ => BackgroundVariant::Default,
        }
    }
}
