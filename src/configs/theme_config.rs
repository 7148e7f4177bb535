use crate::utils::{ PlatformThemeStore, ThemeStore };

/// Raw `theme` value the site booted with, and the store it came from.
/// Built once in `App` and shared with the menu through context.
#[derive(Clone, Debug)]
pub struct InitialTheme {
    pub label: Option<String>,
    pub store: PlatformThemeStore,
}

impl InitialTheme {
    pub fn from_store(store: PlatformThemeStore) -> Self {
        let label = theme_label_from(&store);
        Self { label, store }
    }

    pub fn load() -> Self {
        Self::from_store(platform_store())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> PlatformThemeStore {
    crate::utils::DocumentCookieStore
}

/// Off the web there is no cookie jar; `SITE_THEME` plays its part.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> PlatformThemeStore {
    match std::env::var("SITE_THEME") {
        Ok(value) => PlatformThemeStore::with_value(value),
        Err(_) => {
            log::warn!("SITE_THEME not set, starting with the black theme");
            PlatformThemeStore::default()
        }
    }
}

pub fn theme_label_from<S: ThemeStore + ?Sized>(store: &S) -> Option<String> {
    match store.load() {
        Ok(value) => {
            log::info!("Initial theme: {}", value.as_deref().unwrap_or("<unset>"));
            value
        }
        Err(e) => {
            log::warn!("Could not read stored theme: {}", e);
            None
        }
    }
}
