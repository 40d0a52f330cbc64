//! Theme catalog and the active-theme store.
//!
//! The catalog is static and defined in [`THEMES`]; it never changes at
//! runtime. [`ThemeStore`] tracks which entry is active and persists the
//! choice through a [`PreferenceStore`] so the next process start can restore
//! it with [`ThemeStore::restore`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, ThemeError};
use crate::storage::{PreferenceStore, SELECTED_THEME_KEY};

/// Named color values of a theme, as CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Main brand color.
    pub primary: &'static str,
    /// Lighter variant of the primary color.
    pub primary_light: &'static str,
    /// Darker variant of the primary color.
    pub primary_dark: &'static str,
    /// Screen background.
    pub background: &'static str,
    /// Bars and elevated surfaces.
    pub surface: &'static str,
    /// Card background.
    pub card: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// Muted text.
    pub text_secondary: &'static str,
    /// Borders and dividers.
    pub border: &'static str,
    /// Secondary highlight.
    pub accent: &'static str,
    /// Completed / positive status.
    pub success: &'static str,
    /// Pending / attention status.
    pub warning: &'static str,
    /// Failed / destructive status.
    pub error: &'static str,
}

/// A named color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Stable identifier, `<category>-<name>`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Palette.
    pub colors: ThemeColors,
}

impl Theme {
    /// Category of the theme: the identifier prefix before the first `-`.
    #[must_use]
    pub fn category(&self) -> &'static str {
        self.id.split('-').next().unwrap_or(self.id)
    }
}

/// The theme catalog, in display order. The first entry is the default.
pub static THEMES: [Theme; 9] = [
    Theme {
        id: "light-classic",
        name: "Classic Light",
        colors: ThemeColors {
            primary: "#3B82F6",
            primary_light: "#60A5FA",
            primary_dark: "#1D4ED8",
            background: "#F8FAFC",
            surface: "#FFFFFF",
            card: "#FFFFFF",
            text: "#0F172A",
            text_secondary: "#64748B",
            border: "#E2E8F0",
            accent: "#8B5CF6",
            success: "#10B981",
            warning: "#F59E0B",
            error: "#EF4444",
        },
    },
    Theme {
        id: "light-ocean",
        name: "Ocean Breeze",
        colors: ThemeColors {
            primary: "#0EA5E9",
            primary_light: "#38BDF8",
            primary_dark: "#0369A1",
            background: "#F0F9FF",
            surface: "#FFFFFF",
            card: "#E0F2FE",
            text: "#0C4A6E",
            text_secondary: "#4B7A94",
            border: "#BAE6FD",
            accent: "#14B8A6",
            success: "#059669",
            warning: "#D97706",
            error: "#DC2626",
        },
    },
    Theme {
        id: "light-mint",
        name: "Fresh Mint",
        colors: ThemeColors {
            primary: "#10B981",
            primary_light: "#34D399",
            primary_dark: "#047857",
            background: "#F0FDF4",
            surface: "#FFFFFF",
            card: "#DCFCE7",
            text: "#14532D",
            text_secondary: "#4D7C5F",
            border: "#BBF7D0",
            accent: "#0EA5E9",
            success: "#16A34A",
            warning: "#CA8A04",
            error: "#DC2626",
        },
    },
    Theme {
        id: "dark-midnight",
        name: "Midnight",
        colors: ThemeColors {
            primary: "#6366F1",
            primary_light: "#818CF8",
            primary_dark: "#4338CA",
            background: "#0F172A",
            surface: "#1E293B",
            card: "#1E293B",
            text: "#F1F5F9",
            text_secondary: "#94A3B8",
            border: "#334155",
            accent: "#22D3EE",
            success: "#34D399",
            warning: "#FBBF24",
            error: "#F87171",
        },
    },
    Theme {
        id: "dark-purple",
        name: "Royal Purple",
        colors: ThemeColors {
            primary: "#A78BFA",
            primary_light: "#C4B5FD",
            primary_dark: "#7C3AED",
            background: "#120B1F",
            surface: "#1E1433",
            card: "#261A40",
            text: "#F5F3FF",
            text_secondary: "#A99BC9",
            border: "#3B2D5C",
            accent: "#F472B6",
            success: "#34D399",
            warning: "#FBBF24",
            error: "#F87171",
        },
    },
    Theme {
        id: "dark-forest",
        name: "Deep Forest",
        colors: ThemeColors {
            primary: "#22C55E",
            primary_light: "#4ADE80",
            primary_dark: "#15803D",
            background: "#0B1410",
            surface: "#13221A",
            card: "#1A2E23",
            text: "#ECFDF5",
            text_secondary: "#8FB8A0",
            border: "#284536",
            accent: "#EAB308",
            success: "#4ADE80",
            warning: "#FACC15",
            error: "#F87171",
        },
    },
    Theme {
        id: "amoled-black",
        name: "Pure Black",
        colors: ThemeColors {
            primary: "#FFFFFF",
            primary_light: "#E5E5E5",
            primary_dark: "#A3A3A3",
            background: "#000000",
            surface: "#0A0A0A",
            card: "#111111",
            text: "#FFFFFF",
            text_secondary: "#A3A3A3",
            border: "#262626",
            accent: "#3B82F6",
            success: "#22C55E",
            warning: "#EAB308",
            error: "#EF4444",
        },
    },
    Theme {
        id: "amoled-neon",
        name: "Neon Nights",
        colors: ThemeColors {
            primary: "#00FFF2",
            primary_light: "#7DFFF8",
            primary_dark: "#00B3AA",
            background: "#000000",
            surface: "#0A0A0F",
            card: "#14141E",
            text: "#E0E0E0",
            text_secondary: "#808090",
            border: "#262638",
            accent: "#FF00FF",
            success: "#00FF00",
            warning: "#FFAA00",
            error: "#FF0040",
        },
    },
    Theme {
        id: "sunset-orange",
        name: "Sunset",
        colors: ThemeColors {
            primary: "#F97316",
            primary_light: "#FB923C",
            primary_dark: "#C2410C",
            background: "#FFF7ED",
            surface: "#FFFFFF",
            card: "#FFEDD5",
            text: "#431407",
            text_secondary: "#9A5B3C",
            border: "#FED7AA",
            accent: "#E11D48",
            success: "#16A34A",
            warning: "#CA8A04",
            error: "#DC2626",
        },
    },
];

/// Look up a catalog entry by identifier.
#[must_use]
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// The default theme (first catalog entry).
#[must_use]
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Themes sharing a category, for the theme picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeCategory {
    /// Category key (identifier prefix).
    pub key: &'static str,
    /// Themes in catalog order.
    pub themes: Vec<&'static Theme>,
}

/// Group the catalog by category, categories in first-appearance order.
#[must_use]
pub fn themes_by_category() -> Vec<ThemeCategory> {
    let mut groups: Vec<ThemeCategory> = Vec::new();
    for theme in &THEMES {
        let key = theme.category();
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.themes.push(theme),
            None => groups.push(ThemeCategory {
                key,
                themes: vec![theme],
            }),
        }
    }
    groups
}

/// How the saved theme preference was handled at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RestoreOutcome {
    /// A saved theme was found and activated.
    Restored {
        /// The restored theme identifier.
        theme_id: String,
    },
    /// Nothing was saved; the default theme is active.
    NothingSaved,
    /// The saved preference could not be used; the default theme is active.
    Fallback {
        /// Why the preference was not used.
        reason: String,
    },
}

/// Result of a successful theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeChange {
    /// The now-active theme.
    pub theme: &'static Theme,
    /// Whether the choice was durably saved.
    pub persisted: bool,
}

/// Holds the active theme and persists changes to it.
pub struct ThemeStore {
    current: &'static Theme,
    storage: Arc<dyn PreferenceStore>,
}

impl ThemeStore {
    /// Create a store with the default theme active, without reading storage.
    #[must_use]
    pub fn new(storage: Arc<dyn PreferenceStore>) -> Self {
        Self {
            current: default_theme(),
            storage,
        }
    }

    /// Create a store, restoring the previously saved theme when possible.
    ///
    /// Storage is read on the blocking pool. Any failure (storage unreadable,
    /// unknown saved identifier) falls back to the default theme; the outcome
    /// says which case happened.
    pub async fn restore(storage: Arc<dyn PreferenceStore>) -> (Self, RestoreOutcome) {
        let reader = Arc::clone(&storage);
        let loaded = tokio::task::spawn_blocking(move || reader.get(SELECTED_THEME_KEY)).await;

        let mut store = Self::new(storage);
        let outcome = match loaded {
            Ok(Ok(Some(saved_id))) => match find_theme(&saved_id) {
                Some(theme) => {
                    store.current = theme;
                    RestoreOutcome::Restored {
                        theme_id: saved_id,
                    }
                }
                None => RestoreOutcome::Fallback {
                    reason: format!("saved theme '{saved_id}' is not in the catalog"),
                },
            },
            Ok(Ok(None)) => RestoreOutcome::NothingSaved,
            Ok(Err(e)) => RestoreOutcome::Fallback {
                reason: e.to_string(),
            },
            Err(e) => RestoreOutcome::Fallback {
                reason: format!("preference load task failed: {e}"),
            },
        };

        match &outcome {
            RestoreOutcome::Restored { theme_id } => info!("Restored saved theme '{}'", theme_id),
            RestoreOutcome::NothingSaved => debug!("No saved theme, using default"),
            RestoreOutcome::Fallback { reason } => {
                warn!("Could not restore saved theme, using default: {}", reason);
            }
        }

        (store, outcome)
    }

    /// The full catalog, in definition order.
    #[must_use]
    pub fn list_themes(&self) -> &'static [Theme] {
        &THEMES
    }

    /// The active theme.
    #[must_use]
    pub const fn current(&self) -> &'static Theme {
        self.current
    }

    /// Activate the theme with identifier `theme_id` and save the choice.
    ///
    /// An unknown identifier is an error and leaves the active theme as it
    /// was. The save runs on the blocking pool. A storage failure does not
    /// undo the change; it is logged and reported through
    /// [`ThemeChange::persisted`].
    pub async fn set_current(&mut self, theme_id: &str) -> Result<ThemeChange> {
        let theme = find_theme(theme_id).ok_or_else(|| ThemeError::UnknownTheme {
            id: theme_id.to_string(),
        })?;

        self.current = theme;
        info!("Theme set to '{}'", theme.id);

        let writer = Arc::clone(&self.storage);
        let saved =
            tokio::task::spawn_blocking(move || writer.set(SELECTED_THEME_KEY, theme.id)).await;

        let persisted = match saved {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!("Failed to save theme preference: {}", e);
                false
            }
            Err(e) => {
                warn!("Theme preference save task failed: {}", e);
                false
            }
        };

        Ok(ThemeChange { theme, persisted })
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, StorageError};
    use crate::storage::{MemoryPreferenceStore, MockPreferenceStore};

    fn memory_store() -> Arc<dyn PreferenceStore> {
        Arc::new(MemoryPreferenceStore::new())
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_catalog_colors_are_hex() {
        for theme in &THEMES {
            let c = theme.colors;
            for value in [
                c.primary,
                c.primary_light,
                c.primary_dark,
                c.background,
                c.surface,
                c.card,
                c.text,
                c.text_secondary,
                c.border,
                c.accent,
                c.success,
                c.warning,
                c.error,
            ] {
                assert!(value.starts_with('#') && value.len() == 7, "{}: {value}", theme.id);
            }
        }
    }

    #[test]
    fn test_category_is_id_prefix() {
        let theme = find_theme("dark-midnight").expect("theme exists");
        assert_eq!(theme.category(), "dark");
    }

    #[test]
    fn test_themes_by_category_order() {
        let groups = themes_by_category();
        let keys: Vec<_> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["light", "dark", "amoled", "sunset"]);
        assert_eq!(groups[0].themes.len(), 3);
        let total: usize = groups.iter().map(|g| g.themes.len()).sum();
        assert_eq!(total, THEMES.len());
    }

    #[test]
    fn test_new_store_uses_first_theme() {
        let store = ThemeStore::new(memory_store());
        assert_eq!(store.current().id, THEMES[0].id);
        assert_eq!(store.list_themes().len(), THEMES.len());
    }

    #[tokio::test]
    async fn test_set_current_valid() {
        let storage = Arc::new(MemoryPreferenceStore::new());
        let mut store = ThemeStore::new(storage.clone());

        let change = store.set_current("dark-purple").await.expect("known theme");
        assert!(change.persisted);
        assert_eq!(store.current().id, "dark-purple");
        assert_eq!(
            storage.get(SELECTED_THEME_KEY).expect("get").as_deref(),
            Some("dark-purple")
        );
    }

    #[tokio::test]
    async fn test_set_current_unknown_leaves_current() {
        let mut store = ThemeStore::new(memory_store());
        store.set_current("light-mint").await.expect("known theme");

        let result = store.set_current("nonexistent-id").await;
        assert!(matches!(
            result,
            Err(Error::Theme(ThemeError::UnknownTheme { .. }))
        ));
        assert_eq!(store.current().id, "light-mint");
    }

    #[tokio::test]
    async fn test_set_current_storage_failure_still_switches() {
        let mut mock = MockPreferenceStore::new();
        mock.expect_set().returning(|_, _| {
            Err(StorageError::Unavailable("disk full".to_string()).into())
        });

        let mut store = ThemeStore::new(Arc::new(mock));
        let change = store.set_current("amoled-black").await.expect("known theme");
        assert!(!change.persisted);
        assert_eq!(store.current().id, "amoled-black");
    }

    #[tokio::test]
    async fn test_set_current_writes_off_the_async_thread() {
        let caller = std::thread::current().id();
        let mut mock = MockPreferenceStore::new();
        mock.expect_set()
            .times(1)
            .returning(move |_, _| {
                assert_ne!(std::thread::current().id(), caller);
                Ok(())
            });

        let mut store = ThemeStore::new(Arc::new(mock));
        let change = store.set_current("dark-forest").await.expect("known theme");
        assert!(change.persisted);
    }

    #[tokio::test]
    async fn test_restore_saved_theme() {
        let storage: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::with_entry(
            SELECTED_THEME_KEY,
            "sunset-orange",
        ));

        let (store, outcome) = ThemeStore::restore(storage).await;
        assert_eq!(store.current().id, "sunset-orange");
        assert_eq!(
            outcome,
            RestoreOutcome::Restored {
                theme_id: "sunset-orange".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_restore_nothing_saved() {
        let (store, outcome) = ThemeStore::restore(memory_store()).await;
        assert_eq!(store.current().id, default_theme().id);
        assert_eq!(outcome, RestoreOutcome::NothingSaved);
    }

    #[tokio::test]
    async fn test_restore_unknown_saved_id_falls_back() {
        let storage: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::with_entry(
            SELECTED_THEME_KEY,
            "retired-theme",
        ));

        let (store, outcome) = ThemeStore::restore(storage).await;
        assert_eq!(store.current().id, default_theme().id);
        assert!(matches!(outcome, RestoreOutcome::Fallback { .. }));
    }

    #[tokio::test]
    async fn test_restore_storage_error_falls_back() {
        let mut mock = MockPreferenceStore::new();
        mock.expect_get().returning(|_| {
            Err(StorageError::Corrupted {
                path: "/tmp/preferences.json".into(),
                reason: "expected value".to_string(),
            }
            .into())
        });

        let (store, outcome) = ThemeStore::restore(Arc::new(mock)).await;
        assert_eq!(store.current().id, default_theme().id);
        match outcome {
            RestoreOutcome::Fallback { reason } => assert!(reason.contains("Corrupted")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
