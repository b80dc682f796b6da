//! Player-facing settings and their fixed pacing presets.

use std::time::Duration;

use strum::{Display, EnumIter, EnumString};

/// Interval between two revealed dialogue characters when dialogue animation
/// is enabled.
pub const DIALOGUE_CHAR_INTERVAL: Duration = Duration::from_millis(30);

/// Movement pacing presets. The delay is re-read every time a step is
/// scheduled, so changing the preset mid-route affects the very next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedPreset {
    /// Fixed preset-to-delay mapping.
    pub fn delay(self) -> Duration {
        match self {
            SpeedPreset::Slow => Duration::from_millis(400),
            SpeedPreset::Normal => Duration::from_millis(200),
            SpeedPreset::Fast => Duration::from_millis(100),
        }
    }
}

/// Authored locales. Only a subset carries complete string tables; lookups
/// fall back to English key-by-key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    En,
    Nl,
    Jp,
    Ru,
    Ar,
}

/// The session settings surface. Read fresh by the runtime at every
/// scheduling decision; persisted as one JSON document by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    pub movement: SpeedPreset,
    pub language: Language,
    pub show_labels: bool,
    pub animate_dialogue: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            movement: SpeedPreset::default(),
            language: Language::default(),
            show_labels: true,
            animate_dialogue: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn presets_map_to_fixed_delays() {
        assert_eq!(SpeedPreset::Slow.delay(), Duration::from_millis(400));
        assert_eq!(SpeedPreset::Normal.delay(), Duration::from_millis(200));
        assert_eq!(SpeedPreset::Fast.delay(), Duration::from_millis(100));
    }

    #[test]
    fn presets_round_trip_through_strings() {
        assert_eq!(SpeedPreset::Fast.to_string(), "fast");
        assert_eq!(SpeedPreset::from_str("slow").unwrap(), SpeedPreset::Slow);
        assert!(SpeedPreset::from_str("warp").is_err());
    }

    #[test]
    fn default_settings_match_the_first_run_experience() {
        let settings = Settings::default();
        assert_eq!(settings.movement, SpeedPreset::Normal);
        assert_eq!(settings.language, Language::En);
        assert!(settings.show_labels);
        assert!(settings.animate_dialogue);
    }
}
