//! Centralized view options with TOML preset support.
//!
//! Every tuning constant of the view controller (camera bounds, rotation
//! sensitivity, auto-rotation timing, zoom transition, orbiter path, star
//! shell, asset locations, home location, keybindings) lives here. Options serialize
//! to/from TOML for view presets.

mod assets;
mod camera;
mod orbiter;
mod rotation;
mod starfield;
mod zoom;

use std::path::Path;

pub use assets::AssetOptions;
pub use camera::CameraOptions;
pub use orbiter::OrbiterOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use starfield::StarfieldOptions;
pub use zoom::{ZoomBlend, ZoomOptions};

use crate::error::GlobeError;
use crate::input::KeyBindings;
use crate::util::geo::GeoLocation;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rotation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and distance parameters.
    pub camera: CameraOptions,
    /// Free rotation, input sensitivity and auto-rotation.
    pub rotation: RotationOptions,
    /// Zoom-focus transition.
    pub zoom: ZoomOptions,
    /// Decorative orbiting model.
    pub orbiter: OrbiterOptions,
    /// Background stars.
    pub starfield: StarfieldOptions,
    /// Texture, model and font locations.
    pub assets: AssetOptions,
    /// Location targeted by the "zoom home" action.
    pub home: GeoLocation,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::OptionsParse`] if `content` is not valid TOML
    /// or a field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, GlobeError> {
        toml::from_str(content)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::Io`] if the file cannot be read, or
    /// [`GlobeError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, GlobeError> {
        let content = std::fs::read_to_string(path).map_err(GlobeError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::OptionsParse`] on serialization failure, or
    /// [`GlobeError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GlobeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlobeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlobeError::Io)?;
        }
        std::fs::write(path, content).map_err(GlobeError::Io)
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

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[rotation]
auto_rotate_delay_ms = 500.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.rotation.auto_rotate_delay_ms, 500.0);
        // Everything else should be default
        assert_eq!(opts.rotation.smoothing, 0.1);
        assert_eq!(opts.camera.min_distance, 1.5);
        assert_eq!(opts.zoom.blend, ZoomBlend::ConstantRate);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, GlobeError::OptionsParse(_)));
    }

    #[test]
    fn enum_fields_use_snake_case() {
        let toml_str = r#"
[zoom]
blend = "eased"
easing = "linear"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.zoom.blend, ZoomBlend::Eased);
        assert_eq!(
            opts.zoom.easing,
            crate::util::easing::EasingFunction::Linear
        );
    }

    #[test]
    fn distance_bounds_are_ordered() {
        let camera = CameraOptions {
            min_distance: 4.0,
            max_distance: 2.0,
            ..CameraOptions::default()
        };
        assert_eq!(camera.distance_bounds(), (2.0, 4.0));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("globeview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.home.name = "Reykjavík".into();
        opts.save(&dir.join("north.toml")).unwrap();

        let loaded = Options::load(&dir.join("north.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["north".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn keybinding_lookup() {
        use crate::view::ViewCommand;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(ViewCommand::ExitZoom)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("rotation"));
        assert!(props.contains_key("zoom"));
        assert!(props.contains_key("orbiter"));
        assert!(props.contains_key("home"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let rotation = &props["rotation"]["properties"];
        assert!(rotation.get("auto_rotate_delay_ms").is_some());
        assert!(rotation.get("scroll_boost_decay").is_none());
    }
}
