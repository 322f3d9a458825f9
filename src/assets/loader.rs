//! Background asset loading.
//!
//! The loader thread resolves requests one at a time and sends finished
//! assets back over a channel. The frame loop drains that channel with
//! [`AssetRegistry::poll`], which never blocks.

use std::sync::mpsc;

use rustc_hash::FxHashMap;

use super::fetch::AssetFetcher;
use super::resolve::resolve;
use super::{Asset, AssetRequest};
use crate::error::GlobeError;

enum LoaderRequest {
    Load(AssetRequest),
    Shutdown,
}

/// Background thread that resolves [`AssetRequest`]s.
pub struct AssetLoader {
    request_tx: mpsc::Sender<LoaderRequest>,
    result_rx: mpsc::Receiver<Asset>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl AssetLoader {
    /// Spawn the loader thread with the given fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::ThreadSpawn`] if the thread fails to spawn.
    pub fn spawn<F: AssetFetcher + 'static>(
        fetcher: F,
    ) -> Result<Self, GlobeError> {
        let (request_tx, request_rx) = mpsc::channel::<LoaderRequest>();
        let (result_tx, result_rx) = mpsc::channel::<Asset>();

        let thread = std::thread::Builder::new()
            .name("asset-loader".into())
            .spawn(move || {
                Self::thread_loop(&fetcher, &request_rx, &result_tx);
            })
            .map_err(GlobeError::ThreadSpawn)?;

        Ok(Self {
            request_tx,
            result_rx,
            thread: Some(thread),
        })
    }

    /// Queue a request (non-blocking send).
    pub fn submit(&self, request: AssetRequest) {
        let _ = self.request_tx.send(LoaderRequest::Load(request));
    }

    /// Queue several requests.
    pub fn submit_all(&self, requests: impl IntoIterator<Item = AssetRequest>) {
        for request in requests {
            self.submit(request);
        }
    }

    /// Next finished asset, if any.
    pub fn try_recv(&self) -> Option<Asset> {
        self.result_rx.try_recv().ok()
    }

    /// Stop the thread once the current request is done and join it.
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(LoaderRequest::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn thread_loop<F: AssetFetcher>(
        fetcher: &F,
        request_rx: &mpsc::Receiver<LoaderRequest>,
        result_tx: &mpsc::Sender<Asset>,
    ) {
        while let Ok(LoaderRequest::Load(request)) = request_rx.recv() {
            let asset = resolve(&request, fetcher);
            if result_tx.send(asset).is_err() {
                // Receiver dropped; nobody wants the rest.
                break;
            }
        }
    }
}

impl Drop for AssetLoader {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Frame-side store of installed assets, keyed by name.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: FxHashMap<String, Asset>,
}

impl AssetRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install everything the loader has finished. Returns the names
    /// installed by this call.
    pub fn poll(&mut self, loader: &AssetLoader) -> Vec<String> {
        let mut installed = Vec::new();
        while let Some(asset) = loader.try_recv() {
            let name = asset.name.clone();
            if self.install(asset) {
                installed.push(name);
            }
        }
        installed
    }

    /// Install one asset. An asset already present under the same name is
    /// kept and the new one is dropped; returns whether it was installed.
    pub fn install(&mut self, asset: Asset) -> bool {
        if self.assets.contains_key(&asset.name) {
            log::debug!("asset '{}' already installed", asset.name);
            return false;
        }
        log::info!("installed asset '{}' ({:?})", asset.name, asset.source);
        let _ = self.assets.insert(asset.name.clone(), asset);
        true
    }

    /// Installed asset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    /// Whether `name` is installed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    /// Number of installed assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether nothing is installed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::assets::{AssetKind, AssetSource};

    struct EchoFetcher;

    impl AssetFetcher for EchoFetcher {
        fn fetch(&self, location: &str) -> Result<Vec<u8>, GlobeError> {
            if location.starts_with("ok:") {
                Ok(location.as_bytes().to_vec())
            } else {
                Err(GlobeError::AssetFetch {
                    url: location.to_owned(),
                    reason: "unreachable".into(),
                })
            }
        }
    }

    fn poll_until(
        registry: &mut AssetRegistry,
        loader: &AssetLoader,
        count: usize,
    ) -> Vec<String> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut names = Vec::new();
        while names.len() < count && Instant::now() < deadline {
            names.extend(registry.poll(loader));
            std::thread::sleep(Duration::from_millis(1));
        }
        names
    }

    #[test]
    fn loads_in_background_and_installs_once() {
        let loader = AssetLoader::spawn(EchoFetcher).unwrap();
        let mut registry = AssetRegistry::new();
        assert!(registry.poll(&loader).is_empty());

        loader.submit_all([
            AssetRequest::new("day", AssetKind::Texture, "ok:day.jpg"),
            AssetRequest::new("night", AssetKind::Texture, "bad:night.jpg"),
        ]);
        let names = poll_until(&mut registry, &loader, 2);
        assert_eq!(names, vec!["day".to_owned(), "night".to_owned()]);
        assert_eq!(registry.get("day").unwrap().source, AssetSource::Primary);
        assert_eq!(
            registry.get("night").unwrap().source,
            AssetSource::Placeholder
        );

        // A second result under the same name is ignored.
        loader.submit(AssetRequest::new("day", AssetKind::Texture, "ok:v2"));
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(asset) = loader.try_recv() {
                assert!(!registry.install(asset));
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn missing_asset_is_not_present() {
        let registry = AssetRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("earth_day"));
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut loader = AssetLoader::spawn(EchoFetcher).unwrap();
        loader.shutdown();
        loader.shutdown();
        assert!(loader.try_recv().is_none());
    }
}
