use crate::color::HexColor;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Preset list applied when the configuration carries none.
pub const DEFAULT_PRESETS: [&str; 3] = ["#ff0000", "#00ff00", "#0000ff"];

/// Construction-time configuration shared by every component of one picker.
///
/// Defaults are injected in [`PickerConfig::resolve`] and nowhere else, so
/// sibling components cannot drift apart on what the fallback color is.
/// Components hold the resolved config behind an `Arc` and never mutate it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PickerConfig {
    /// Ordered preset swatches. The first entry doubles as the fallback
    /// substituted for invalid hex input. Presets are trusted verbatim and
    /// are never validated.
    pub presets: Vec<HexColor>,
    /// Initially selected color. Defaults to the first preset.
    pub initial: Option<HexColor>,
}

impl PickerConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Substitute the default presets if none were configured. This runs
    /// exactly once, before any component sees the config; the order of a
    /// non-empty preset list is preserved untouched.
    pub fn resolve(mut self) -> Self {
        if self.presets.is_empty() {
            self.presets = DEFAULT_PRESETS.iter().copied().map(HexColor::from).collect();
        }
        self
    }

    /// The color substituted for input that fails hex validation.
    pub fn fallback(&self) -> HexColor {
        self.presets
            .first()
            .cloned()
            .unwrap_or_else(|| HexColor::from(DEFAULT_PRESETS[0]))
    }

    /// The color a selection display starts with: the configured `initial`
    /// if present, else the first preset.
    pub fn initial_color(&self) -> HexColor {
        self.initial.clone().unwrap_or_else(|| self.fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_default_presets() {
        let config = PickerConfig::default().resolve();
        let presets: Vec<_> = config.presets.iter().map(HexColor::as_str).collect();
        assert_eq!(presets, ["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn configured_presets_are_kept_verbatim_in_order() {
        let config = PickerConfig {
            presets: vec![
                HexColor::from("#123abc"),
                HexColor::from("red"),
                HexColor::from("#FFFFFF"),
            ],
            initial: None,
        }
        .resolve();

        let presets: Vec<_> = config.presets.iter().map(HexColor::as_str).collect();
        assert_eq!(presets, ["#123abc", "red", "#FFFFFF"]);
    }

    #[test]
    fn fallback_is_the_first_preset() {
        let config = PickerConfig::default().resolve();
        assert_eq!(config.fallback().as_str(), "#ff0000");

        let config = PickerConfig {
            presets: vec![HexColor::from("#8080ff")],
            initial: None,
        }
        .resolve();
        assert_eq!(config.fallback().as_str(), "#8080ff");
    }

    #[test]
    fn initial_color_prefers_configured_initial() {
        let config = PickerConfig {
            presets: vec![HexColor::from("#00ff00")],
            initial: Some(HexColor::from("#abcdef")),
        }
        .resolve();
        assert_eq!(config.initial_color().as_str(), "#abcdef");

        let config = PickerConfig::default().resolve();
        assert_eq!(config.initial_color().as_str(), "#ff0000");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PickerConfig::from_json(
            r##"{"presets": ["#ff8080", "#80ff80"], "initial": "#80ff80"}"##,
        )
        .unwrap();
        assert_eq!(config.presets.len(), 2);
        assert_eq!(config.initial_color().as_str(), "#80ff80");

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = PickerConfig::from_json(&json).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn absent_fields_parse_as_defaults() {
        let config = PickerConfig::from_json("{}").unwrap().resolve();
        assert_eq!(config.fallback().as_str(), "#ff0000");
        assert_eq!(config.initial, None);
    }
}
