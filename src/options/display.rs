use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Background, lights, and the loading placeholder delay.
pub struct DisplayOptions {
    /// Clear color as an sRGB `0xRRGGBB` literal.
    #[schemars(skip)]
    pub background: u32,
    /// Ambient light color (sRGB hex).
    #[schemars(skip)]
    pub ambient_color: u32,
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub ambient_intensity: f32,
    /// Position the directional light shines from.
    #[schemars(skip)]
    pub light_position: [f32; 3],
    /// Directional light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub light_intensity: f32,
    /// How long the "Loading 3D scene..." placeholder shows after a subject
    /// is picked.
    #[schemars(title = "Loading Delay (ms)", range(min = 0, max = 2000))]
    pub loading_delay_ms: u64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            background: 0x0a0a0a,
            ambient_color: 0x404040,
            ambient_intensity: 0.6,
            light_position: [10.0, 10.0, 5.0],
            light_intensity: 1.0,
            loading_delay_ms: 500,
        }
    }
}
