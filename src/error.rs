//! Crate-level error types.

use std::fmt;

/// Errors produced by the globeview crate.
///
/// The view controller itself never fails; these cover the surrounding
/// plumbing (presets on disk, asset fetches, the native window).
#[derive(Debug)]
pub enum GlobeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An asset could not be fetched from the given URL.
    AssetFetch {
        /// URL that was requested.
        url: String,
        /// Human-readable failure reason.
        reason: String,
    },
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for GlobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AssetFetch { url, reason } => {
                write!(f, "failed to fetch {url}: {reason}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GlobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlobeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_fetch_display_names_url() {
        let err = GlobeError::AssetFetch {
            url: "https://example.invalid/earth.jpg".into(),
            reason: "404".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch https://example.invalid/earth.jpg: 404"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err: GlobeError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
    }
}
