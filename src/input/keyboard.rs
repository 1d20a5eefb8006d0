use serde::{Deserialize, Serialize};

use crate::engine::command::EduCommand;
use crate::subject::SubjectId;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// next_model = "KeyN"
/// select_space = "Digit2"
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    NextModel,
    ToggleMode,
    ToggleAutoRotate,
    Reset,
    SelectBiology,
    SelectSpace,
    SelectMath,
    SelectGeography,
    SelectChemistry,
    SelectPhysics,
}

impl KeyAction {
    /// Convert to the corresponding parameterless [`EduCommand`].
    #[must_use]
    pub fn to_command(self) -> EduCommand {
        let select = EduCommand::SelectSubject;
        match self {
            Self::NextModel => EduCommand::NextModel,
            Self::ToggleMode => EduCommand::ToggleMode,
            Self::ToggleAutoRotate => EduCommand::ToggleAutoRotate,
            Self::Reset => EduCommand::Reset,
            Self::SelectBiology => select(SubjectId::Biology),
            Self::SelectSpace => select(SubjectId::Space),
            Self::SelectMath => select(SubjectId::Math),
            Self::SelectGeography => select(SubjectId::Geography),
            Self::SelectChemistry => select(SubjectId::Chemistry),
            Self::SelectPhysics => select(SubjectId::Physics),
        }
    }
}
