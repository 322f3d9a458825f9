use super::fetch::AssetFetcher;
use super::{Asset, AssetData, AssetKind, AssetRequest, AssetSource};

/// Grey used for the placeholder texture.
const PLACEHOLDER_RGBA: [u8; 4] = [96, 96, 104, 255];

/// Resolve a request: primary, then fallback, then placeholder.
///
/// Failures are logged and substituted; this never fails.
pub fn resolve<F: AssetFetcher + ?Sized>(
    request: &AssetRequest,
    fetcher: &F,
) -> Asset {
    let installed = |data: Vec<u8>, source| Asset {
        name: request.name.clone(),
        kind: request.kind,
        data: AssetData::Encoded(data),
        source,
    };

    match fetcher.fetch(&request.primary) {
        Ok(data) => return installed(data, AssetSource::Primary),
        Err(e) => log::warn!("asset '{}': {e}", request.name),
    }

    if let Some(fallback) = &request.fallback {
        match fetcher.fetch(fallback) {
            Ok(data) => {
                log::info!("asset '{}' loaded from fallback", request.name);
                return installed(data, AssetSource::Fallback);
            }
            Err(e) => log::warn!("asset '{}' fallback: {e}", request.name),
        }
    }

    log::warn!("asset '{}' replaced by placeholder", request.name);
    Asset {
        name: request.name.clone(),
        kind: request.kind,
        data: placeholder(request.kind),
        source: AssetSource::Placeholder,
    }
}

/// Inert stand-in: a flat 2×2 texture, or nothing for models and fonts.
#[must_use]
pub fn placeholder(kind: AssetKind) -> AssetData {
    match kind {
        AssetKind::Texture => AssetData::Rgba {
            width: 2,
            height: 2,
            pixels: PLACEHOLDER_RGBA.repeat(4),
        },
        AssetKind::Model | AssetKind::Font => AssetData::Empty,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::GlobeError;

    /// Serves only the listed locations and records every attempt.
    struct ScriptedFetcher {
        available: Vec<&'static str>,
        attempts: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(available: Vec<&'static str>) -> Self {
            Self {
                available,
                attempts: Mutex::new(Vec::new()),
            }
        }
    }

    impl AssetFetcher for ScriptedFetcher {
        fn fetch(&self, location: &str) -> Result<Vec<u8>, GlobeError> {
            self.attempts.lock().unwrap().push(location.to_owned());
            if self.available.contains(&location) {
                Ok(location.as_bytes().to_vec())
            } else {
                Err(GlobeError::AssetFetch {
                    url: location.to_owned(),
                    reason: "404".into(),
                })
            }
        }
    }

    fn request() -> AssetRequest {
        AssetRequest::new("earth_day", AssetKind::Texture, "primary.jpg")
            .with_fallback("fallback.jpg")
    }

    #[test]
    fn primary_wins() {
        let fetcher = ScriptedFetcher::new(vec!["primary.jpg", "fallback.jpg"]);
        let asset = resolve(&request(), &fetcher);
        assert_eq!(asset.source, AssetSource::Primary);
        assert_eq!(fetcher.attempts.lock().unwrap().len(), 1);
    }

    #[test]
    fn fallback_after_primary_failure() {
        let fetcher = ScriptedFetcher::new(vec!["fallback.jpg"]);
        let asset = resolve(&request(), &fetcher);
        assert_eq!(asset.source, AssetSource::Fallback);
        assert_eq!(asset.data, AssetData::Encoded(b"fallback.jpg".to_vec()));
    }

    #[test]
    fn placeholder_when_everything_fails() {
        let fetcher = ScriptedFetcher::new(vec![]);
        let asset = resolve(&request(), &fetcher);
        assert_eq!(asset.source, AssetSource::Placeholder);
        assert_eq!(
            *fetcher.attempts.lock().unwrap(),
            vec!["primary.jpg".to_owned(), "fallback.jpg".to_owned()]
        );
        match asset.data {
            AssetData::Rgba {
                width,
                height,
                pixels,
            } => {
                assert_eq!((width, height), (2, 2));
                assert_eq!(pixels.len(), 16);
            }
            other => panic!("unexpected placeholder {other:?}"),
        }
    }

    #[test]
    fn model_placeholder_is_empty() {
        let fetcher = ScriptedFetcher::new(vec![]);
        let req = AssetRequest::new("orbiter_model", AssetKind::Model, "m.glb");
        let asset = resolve(&req, &fetcher);
        assert_eq!(asset.data, AssetData::Empty);
        assert_eq!(fetcher.attempts.lock().unwrap().len(), 1);
    }
}
