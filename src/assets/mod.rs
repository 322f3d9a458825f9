//! Named texture, model and font resources.
//!
//! Loading never blocks the frame loop and never fails outright: each
//! request resolves primary → fallback → placeholder on a background
//! thread ([`AssetLoader`]), and the frame loop installs finished assets
//! into an [`AssetRegistry`] by polling.

/// Fetching raw bytes from disk or the network.
pub mod fetch;
/// Background loader thread and the frame-side registry.
pub mod loader;
/// Primary → fallback → placeholder resolution.
pub mod resolve;

pub use fetch::{AssetFetcher, DefaultFetcher, FileFetcher};
#[cfg(feature = "net")]
pub use fetch::HttpFetcher;
pub use loader::{AssetLoader, AssetRegistry};
pub use resolve::{placeholder, resolve};

use crate::options::AssetOptions;
use crate::scene::BodyKind;

/// Well-known asset names.
pub mod names {
    /// Daytime surface colour.
    pub const EARTH_DAY: &str = "earth_day";
    /// Surface normal map.
    pub const EARTH_NORMAL: &str = "earth_normal";
    /// Ocean specular mask.
    pub const EARTH_SPECULAR: &str = "earth_specular";
    /// Cloud layer with alpha.
    pub const EARTH_CLOUDS: &str = "earth_clouds";
    /// City lights for the night side.
    pub const EARTH_NIGHT: &str = "earth_night";
    /// Orbiter model.
    pub const ORBITER_MODEL: &str = "orbiter_model";
    /// Nametag font.
    pub const NAMETAG_FONT: &str = "nametag_font";
}

/// What kind of resource an asset is; decides its placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Encoded image.
    Texture,
    /// Encoded 3D model.
    Model,
    /// Typeface description.
    Font,
}

/// One named resource with an optional second location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    /// Registry key.
    pub name: String,
    /// Resource kind.
    pub kind: AssetKind,
    /// First location tried.
    pub primary: String,
    /// Location tried when the primary fails.
    pub fallback: Option<String>,
}

impl AssetRequest {
    /// Request with no fallback location.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: AssetKind,
        primary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            primary: primary.into(),
            fallback: None,
        }
    }

    /// Add a fallback location.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Payload of a resolved asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetData {
    /// Bytes as fetched (encoded image, model or font file).
    Encoded(Vec<u8>),
    /// Decoded RGBA8 pixels.
    Rgba {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// `width * height * 4` bytes.
        pixels: Vec<u8>,
    },
    /// Inert stand-in with no content.
    Empty,
}

/// Which stage produced an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    /// Primary location.
    Primary,
    /// Fallback location.
    Fallback,
    /// Built-in placeholder.
    Placeholder,
}

/// A resolved asset, ready to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Registry key.
    pub name: String,
    /// Resource kind.
    pub kind: AssetKind,
    /// Payload.
    pub data: AssetData,
    /// Stage that produced the payload.
    pub source: AssetSource,
}

/// The textures, model and font the globe scene uses.
#[must_use]
pub fn default_catalog(options: &AssetOptions) -> Vec<AssetRequest> {
    let textures = [
        (names::EARTH_DAY, "earth_atmos_2048.jpg"),
        (names::EARTH_NORMAL, "earth_normal_2048.jpg"),
        (names::EARTH_SPECULAR, "earth_specular_2048.jpg"),
        (names::EARTH_CLOUDS, "earth_clouds_1024.png"),
        (names::EARTH_NIGHT, "earth_lights_2048.jpg"),
    ];

    let mut catalog: Vec<AssetRequest> = textures
        .into_iter()
        .map(|(name, file)| {
            AssetRequest::new(
                name,
                AssetKind::Texture,
                join(&options.texture_base, file),
            )
            .with_fallback(join(&options.texture_fallback_base, file))
        })
        .collect();

    catalog.push(AssetRequest::new(
        names::ORBITER_MODEL,
        AssetKind::Model,
        options.orbiter_model.clone(),
    ));
    catalog.push(
        AssetRequest::new(
            names::NAMETAG_FONT,
            AssetKind::Font,
            options.nametag_font.clone(),
        )
        .with_fallback(options.nametag_font_fallback.clone()),
    );
    catalog
}

/// Body that becomes drawable once the named asset is installed.
///
/// The atmosphere needs no asset; normal, specular and night maps only
/// refine an already visible globe.
#[must_use]
pub fn body_for_asset(name: &str) -> Option<BodyKind> {
    match name {
        names::EARTH_DAY => Some(BodyKind::Globe),
        names::EARTH_CLOUDS => Some(BodyKind::Clouds),
        names::ORBITER_MODEL => Some(BodyKind::Orbiter),
        names::NAMETAG_FONT => Some(BodyKind::Nametag),
        _ => None,
    }
}

fn join(base: &str, file: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        format!("{base}{file}")
    } else {
        format!("{base}/{file}")
    }
}
