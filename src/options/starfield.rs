use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Starfield", inline)]
#[serde(default)]
/// Background star shell.
pub struct StarfieldOptions {
    /// Number of stars.
    #[schemars(title = "Star Count", range(min = 0, max = 20000))]
    pub count: u32,
    /// Inner radius of the star shell.
    #[schemars(skip)]
    pub inner_radius: f32,
    /// Outer radius of the star shell.
    #[schemars(skip)]
    pub outer_radius: f32,
    /// Smallest point size.
    #[schemars(skip)]
    pub min_size: f32,
    /// Largest point size.
    #[schemars(skip)]
    pub max_size: f32,
    /// Seed for deterministic generation.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for StarfieldOptions {
    fn default() -> Self {
        Self {
            count: 2000,
            inner_radius: 50.0,
            outer_radius: 150.0,
            min_size: 0.5,
            max_size: 2.0,
            seed: 0x5747_4c42,
        }
    }
}
