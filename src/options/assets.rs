use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Assets", inline)]
#[serde(default)]
/// Where textures, the orbiter model and the nametag font come from.
///
/// Locations starting with `http://` or `https://` are downloaded; anything
/// else is read from disk.
pub struct AssetOptions {
    /// Whether to load assets at startup at all.
    #[schemars(title = "Load Assets")]
    pub load_on_start: bool,
    /// Directory or URL prefix for the planet textures.
    #[schemars(skip)]
    pub texture_base: String,
    /// Secondary prefix tried when a texture fails to load.
    #[schemars(skip)]
    pub texture_fallback_base: String,
    /// Orbiter model location.
    #[schemars(skip)]
    pub orbiter_model: String,
    /// Nametag font location.
    #[schemars(skip)]
    pub nametag_font: String,
    /// Secondary nametag font location.
    #[schemars(skip)]
    pub nametag_font_fallback: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            load_on_start: true,
            texture_base: "https://threejs.org/examples/textures/planets/"
                .into(),
            texture_fallback_base: "https://raw.githubusercontent.com/mrdoob/three.js/dev/examples/textures/planets/"
                .into(),
            orbiter_model: "assets/models/orbiter.glb".into(),
            nametag_font:
                "https://threejs.org/examples/fonts/helvetiker_regular.typeface.json"
                    .into(),
            nametag_font_fallback: "https://raw.githubusercontent.com/mrdoob/three.js/dev/examples/fonts/helvetiker_regular.typeface.json"
                .into(),
        }
    }
}
