//! Application state managed by Tauri.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mediadock_core::{
    ConfigManager, DownloadId, DownloadQueue, JsonFilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore, Result, RestoreOutcome, ThemeStore,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Cancel flags of running simulated transfers, by download.
type SimulationMap = HashMap<DownloadId, Arc<AtomicBool>>;

/// Application state managed by Tauri.
pub struct AppState {
    /// Configuration manager (async-safe).
    pub(crate) config_manager: Arc<RwLock<ConfigManager>>,
    /// Active theme and its persistence.
    pub(crate) theme_store: Arc<RwLock<ThemeStore>>,
    /// The download queue store.
    pub(crate) download_queue: Arc<DownloadQueue>,
    /// Running simulated transfers with their cancellation flags.
    pub(crate) simulations: Arc<RwLock<SimulationMap>>,
}

impl AppState {
    /// Load configuration, open preference storage and restore the saved theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub async fn initialize() -> Result<(Self, RestoreOutcome)> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.config().clone();
        info!("Data directory: {}", config.data_directory.display());

        let storage = open_preferences(&config.data_directory);
        let (theme_store, outcome) = ThemeStore::restore(storage).await;
        info!("Active theme: {}", theme_store.current().id);

        let download_queue = DownloadQueue::with_config(config.queue);
        info!("Download queue initialized");

        let state = Self {
            config_manager: Arc::new(RwLock::new(config_manager)),
            theme_store: Arc::new(RwLock::new(theme_store)),
            download_queue: Arc::new(download_queue),
            simulations: Arc::new(RwLock::new(HashMap::new())),
        };
        Ok((state, outcome))
    }

    /// Move theme persistence to `data_directory`, carrying the active theme over.
    pub async fn rebind_preferences(&self, data_directory: &Path) -> Result<()> {
        let mut theme_store = self.theme_store.write().await;
        let active = theme_store.current().id;

        let mut rebound = ThemeStore::new(open_preferences(data_directory));
        let change = rebound.set_current(active).await?;
        if !change.persisted {
            warn!(
                "Theme preference not yet saved in {}",
                data_directory.display()
            );
        }
        *theme_store = rebound;
        Ok(())
    }

    /// Get a clone of the download queue Arc.
    pub fn download_queue_arc(&self) -> Arc<DownloadQueue> {
        Arc::clone(&self.download_queue)
    }

    /// Register a simulated transfer. Returns `false` if one is already running
    /// for `id`.
    pub async fn register_simulation(&self, id: DownloadId, cancel_flag: Arc<AtomicBool>) -> bool {
        let mut simulations = self.simulations.write().await;
        if simulations.contains_key(&id) {
            return false;
        }
        simulations.insert(id, cancel_flag);
        true
    }

    /// Forget a finished simulated transfer.
    pub async fn unregister_simulation(&self, id: DownloadId) {
        let mut simulations = self.simulations.write().await;
        simulations.remove(&id);
    }

    /// Request cancellation of the simulated transfer for `id`.
    pub async fn cancel_simulation(&self, id: DownloadId) -> bool {
        let simulations = self.simulations.read().await;
        if let Some(cancel_flag) = simulations.get(&id) {
            cancel_flag.store(true, Ordering::SeqCst);
            info!("Simulated transfer {} cancellation requested", id);
            true
        } else {
            debug!("No simulated transfer running for {}", id);
            false
        }
    }
}

/// JSON preference file in `data_directory`, or memory when the directory is unusable.
fn open_preferences(data_directory: &Path) -> Arc<dyn PreferenceStore> {
    match std::fs::create_dir_all(data_directory) {
        Ok(()) => Arc::new(JsonFilePreferenceStore::in_directory(data_directory)),
        Err(e) => {
            warn!(
                "Data directory {} unusable ({}), preferences will not persist",
                data_directory.display(),
                e
            );
            Arc::new(MemoryPreferenceStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadock_core::storage::SELECTED_THEME_KEY;
    use tempfile::TempDir;

    fn state_with(storage: Arc<dyn PreferenceStore>, config_dir: &Path) -> AppState {
        AppState {
            config_manager: Arc::new(RwLock::new(
                ConfigManager::with_path(config_dir.join("config.json")).expect("config"),
            )),
            theme_store: Arc::new(RwLock::new(ThemeStore::new(storage))),
            download_queue: Arc::new(DownloadQueue::new()),
            simulations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[tokio::test]
    async fn test_simulation_registry() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let state = state_with(Arc::new(MemoryPreferenceStore::new()), temp_dir.path());
        let id = DownloadId::new();
        let flag = Arc::new(AtomicBool::new(false));

        assert!(state.register_simulation(id, Arc::clone(&flag)).await);
        assert!(!state.register_simulation(id, Arc::new(AtomicBool::new(false))).await);

        assert!(state.cancel_simulation(id).await);
        assert!(flag.load(Ordering::SeqCst));

        state.unregister_simulation(id).await;
        assert!(!state.cancel_simulation(id).await);
    }

    #[tokio::test]
    async fn test_rebind_preferences_carries_theme() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let state = state_with(Arc::new(MemoryPreferenceStore::new()), temp_dir.path());
        state
            .theme_store
            .write()
            .await
            .set_current("dark-purple")
            .await
            .expect("known theme");

        let new_dir = temp_dir.path().join("data");
        state.rebind_preferences(&new_dir).await.expect("rebind");

        let saved = JsonFilePreferenceStore::in_directory(&new_dir)
            .get(SELECTED_THEME_KEY)
            .expect("read");
        assert_eq!(saved.as_deref(), Some("dark-purple"));
        assert_eq!(state.theme_store.read().await.current().id, "dark-purple");
    }
}
