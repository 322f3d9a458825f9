use std::path::Path;

use crate::error::GlobeError;

/// Fetches the raw bytes at a location.
pub trait AssetFetcher: Send {
    /// Bytes at `location`.
    ///
    /// # Errors
    ///
    /// Returns the I/O or [`GlobeError::AssetFetch`] failure that kept the
    /// bytes from being read.
    fn fetch(&self, location: &str) -> Result<Vec<u8>, GlobeError>;
}

/// Reads locations as filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl AssetFetcher for FileFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, GlobeError> {
        std::fs::read(Path::new(location)).map_err(|e| {
            GlobeError::AssetFetch {
                url: location.to_owned(),
                reason: e.to_string(),
            }
        })
    }
}

/// Downloads `http(s)://` locations.
#[cfg(feature = "net")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

#[cfg(feature = "net")]
impl AssetFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, GlobeError> {
        let fail = |reason: String| GlobeError::AssetFetch {
            url: location.to_owned(),
            reason,
        };
        log::debug!("downloading {location}");
        ureq::get(location)
            .call()
            .map_err(|e| fail(e.to_string()))?
            .into_body()
            .read_to_vec()
            .map_err(|e| fail(format!("failed to read response: {e}")))
    }
}

/// Routes URLs to HTTP (when the `net` feature is on) and everything else
/// to the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFetcher;

impl AssetFetcher for DefaultFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, GlobeError> {
        if is_url(location) {
            fetch_url(location)
        } else {
            FileFetcher.fetch(location)
        }
    }
}

#[cfg(feature = "net")]
fn fetch_url(location: &str) -> Result<Vec<u8>, GlobeError> {
    HttpFetcher.fetch(location)
}

#[cfg(not(feature = "net"))]
fn fetch_url(location: &str) -> Result<Vec<u8>, GlobeError> {
    Err(GlobeError::AssetFetch {
        url: location.to_owned(),
        reason: "built without network support".into(),
    })
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_fetcher_reads_and_reports_missing() {
        let dir = std::env::temp_dir().join("globeview_fetch_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tex.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let loc = path.to_string_lossy();
        assert_eq!(DefaultFetcher.fetch(&loc).unwrap(), vec![1, 2, 3]);

        let missing = dir.join("missing.bin");
        let err = FileFetcher.fetch(&missing.to_string_lossy()).unwrap_err();
        assert!(matches!(err, GlobeError::AssetFetch { .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn url_detection() {
        assert!(is_url("https://threejs.org/x.jpg"));
        assert!(is_url("http://localhost/x.jpg"));
        assert!(!is_url("assets/x.jpg"));
    }
}
