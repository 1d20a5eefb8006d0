//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera, controls, animation, display,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! preset can be passed to the viewer on the command line.

mod animation;
mod camera;
mod controls;
mod display;
mod keybindings;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EduError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and zoom parameters.
    pub camera: CameraOptions,
    /// Drag and auto-rotation parameters.
    pub controls: ControlOptions,
    /// Per-object animation parameters.
    pub animation: AnimationOptions,
    /// Background, lights, loading delay.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, EduError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| EduError::OptionsParse(e.to_string()))?;
        opts.camera = opts.camera.sanitized();
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, EduError> {
        let content = std::fs::read_to_string(path).map_err(EduError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), EduError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EduError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EduError::Io)?;
        }
        std::fs::write(path, content).map_err(EduError::Io)
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
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
zoom_speed = 0.05
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_speed, 0.05);
        assert_eq!(opts.camera.min_distance, 2.0);
        assert_eq!(opts.camera.max_distance, 10.0);
        assert_eq!(opts.controls.rotate_speed, 0.01);
        assert_eq!(opts.display.loading_delay_ms, 500);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, EduError::OptionsParse(_)));
    }

    #[test]
    fn nan_camera_values_are_replaced_on_load() {
        let opts = Options::from_toml(
            "[camera]\nmin_distance = nan\nzoom_speed = inf\n",
        )
        .unwrap();
        assert_eq!(opts.camera.min_distance, 2.0);
        assert_eq!(opts.camera.max_distance, 10.0);
        assert_eq!(opts.camera.zoom_speed, 0.01);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyN"), Some(KeyAction::NextModel));
        assert_eq!(
            opts.keybindings.lookup("Digit4"),
            Some(KeyAction::SelectGeography)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_bindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
next_model = "Tab"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Tab"), Some(KeyAction::NextModel));
        assert_eq!(opts.keybindings.lookup("KeyN"), None);
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Reset));
        assert_eq!(
            opts.keybindings.lookup("Digit1"),
            Some(KeyAction::SelectBiology)
        );
        assert_eq!(opts.keybindings.lookup("KeyM"), Some(KeyAction::ToggleMode));
    }

    #[test]
    fn rebinding_to_a_taken_key_drops_the_old_owner() {
        let toml_str = r#"
[keybindings.bindings]
reset = "KeyM"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyM"), Some(KeyAction::Reset));
        assert!(!opts
            .keybindings
            .bindings
            .contains_key(&KeyAction::ToggleMode));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn save_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("eduverse-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.controls.auto_rotate = false;
        opts.save(&dir.join("still.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["still".to_owned()]);
        let loaded = Options::load(&dir.join("still.toml")).unwrap();
        assert!(!loaded.controls.auto_rotate);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
