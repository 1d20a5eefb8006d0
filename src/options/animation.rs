use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Per-object behavior animation.
pub struct AnimationOptions {
    /// Run behavior markers each frame.
    #[schemars(title = "Animate Objects")]
    pub enabled: bool,
    /// Multiplier on elapsed time for time-driven behaviors.
    #[schemars(title = "Time Scale", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub time_scale: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            time_scale: 1.0,
        }
    }
}
