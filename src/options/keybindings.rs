use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `NextModel` → `"KeyN"`). Loaded
    /// entries are merged over the defaults.
    #[serde(deserialize_with = "merge_with_defaults")]
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::NextModel, "KeyN".into()),
            (KeyAction::ToggleMode, "KeyM".into()),
            (KeyAction::ToggleAutoRotate, "Space".into()),
            (KeyAction::Reset, "Escape".into()),
            (KeyAction::SelectBiology, "Digit1".into()),
            (KeyAction::SelectSpace, "Digit2".into()),
            (KeyAction::SelectMath, "Digit3".into()),
            (KeyAction::SelectGeography, "Digit4".into()),
            (KeyAction::SelectChemistry, "Digit5".into()),
            (KeyAction::SelectPhysics, "Digit6".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

/// Overlay a partial bindings table on the default map. A default whose key
/// was claimed by a loaded entry for another action is dropped.
fn merge_with_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let loaded = HashMap::<KeyAction, String>::deserialize(deserializer)?;
    let mut bindings = KeybindingOptions::default().bindings;
    bindings.retain(|action, key| {
        !loaded.iter().any(|(a, k)| a != action && k == key)
    });
    bindings.extend(loaded);
    Ok(bindings)
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
