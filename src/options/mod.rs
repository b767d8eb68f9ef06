//! Centralized controller options with TOML preset support.
//!
//! Gesture toggles, speeds, damping, distance limits and the key table are
//! consolidated here. Options serialize to/from TOML so hosts can ship
//! control presets ("slow inspection", "no inertia", ...).

mod damping;
mod distance;
mod gestures;
mod keybindings;
mod speeds;

use std::path::Path;

pub use damping::DampingOptions;
pub use distance::DistanceOptions;
pub use gestures::GestureOptions;
pub use keybindings::KeyBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use speeds::SpeedOptions;

use crate::error::TrackballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[speeds]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct TrackballOptions {
    /// Gesture enable flags.
    pub gestures: GestureOptions,
    /// Per-gesture sensitivity.
    pub speeds: SpeedOptions,
    /// Inertia settings.
    pub damping: DampingOptions,
    /// Camera-to-target distance limits.
    pub distance: DistanceOptions,
    /// Keyboard binding table.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl TrackballOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TrackballOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrackballError::Io`] if the file cannot be read and
    /// [`TrackballError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content =
            std::fs::read_to_string(path).map_err(TrackballError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        log::debug!("loaded trackball options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TrackballError::OptionsParse`] if serialization fails and
    /// [`TrackballError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackballError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackballError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeySlot;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = TrackballOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: TrackballOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert!(parsed.distance.max.is_infinite());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[speeds]
rotate = 2.0
";
        let opts: TrackballOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.speeds.rotate, 2.0);
        // Everything else should be default
        assert_eq!(opts.speeds.pan, 0.3);
        assert_eq!(opts.damping.dynamic_damping_factor, 0.15);
        assert!(opts.gestures.spin);
    }

    #[test]
    fn partial_keybindings_merge_over_defaults() {
        let toml_str = r#"
[keybindings.bindings]
rotate-up = "ArrowUp"
lock-pan = "KeyP"
"#;
        let opts: TrackballOptions = toml::from_str(toml_str).unwrap();
        let keys = &opts.keybindings;
        assert!(keys.matches(KeySlot::RotateUp, "ArrowUp"));
        assert!(!keys.matches(KeySlot::RotateUp, "KeyW"));
        assert_eq!(keys.slots_for("KeyP"), &[KeySlot::LockPan]);
        // Untouched slots keep their defaults
        assert_eq!(keys.key_for(KeySlot::RotateDown), Some("KeyS"));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = TrackballOptions::default();
        assert_eq!(
            opts.keybindings.slots_for("KeyW"),
            &[KeySlot::RotateUp]
        );
        assert_eq!(opts.keybindings.slots_for("PageDown"), &[
            KeySlot::SpinRight
        ]);
        assert!(opts.keybindings.slots_for("KeyZ").is_empty());
    }

    #[test]
    fn one_key_can_fill_several_slots() {
        let mut keys = KeyBindings::default();
        keys.bind(KeySlot::LockRotate, "AltLeft");
        assert_eq!(keys.slots_for("AltLeft"), &[
            KeySlot::LockRotate,
            KeySlot::ModifierAlt
        ]);
        assert!(keys.slots_for("AltRight").is_empty());
    }

    #[test]
    fn empty_key_unbinds_slot() {
        let mut keys = KeyBindings::default();
        keys.bind(KeySlot::Focus, "");
        assert_eq!(keys.key_for(KeySlot::Focus), None);
        assert!(keys.slots_for("KeyF").is_empty());
    }

    #[test]
    fn damping_advance_snaps_or_eases() {
        let mut damping = DampingOptions::default();
        assert!((damping.advance(0.0, 1.0) - 0.15).abs() < 1e-6);
        damping.static_moving = true;
        assert_eq!(damping.advance(0.0, 1.0), 1.0);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("trackball-presets-{}", std::process::id()));
        let mut opts = TrackballOptions::default();
        opts.damping.static_moving = true;
        opts.distance.max = 50.0;
        opts.save(&dir.join("snappy.toml")).unwrap();

        let loaded = TrackballOptions::load(&dir.join("snappy.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(TrackballOptions::list_presets(&dir), vec!["snappy"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("trackball-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[speeds\nrotate = ").unwrap();

        let err = TrackballOptions::load(&path).unwrap_err();
        assert!(matches!(err, TrackballError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(TrackballOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("gestures"));
        assert!(props.contains_key("speeds"));
        assert!(props.contains_key("damping"));
        assert!(props.contains_key("distance"));
        // The key table is not UI-exposed
        assert!(!props.contains_key("keybindings"));

        let distance = &props["distance"]["properties"];
        assert!(distance.get("min").is_some());
        assert!(distance.get("max").is_none());
    }
}
