use std::cell::RefCell;
use std::rc::Rc;
use lazy_static::lazy_static;
use regex::Regex;
use crate::error::DomError;
use crate::utils::theme_state::Theme;

pub const THEME_COOKIE: &str = "theme";

lazy_static! {
    static ref THEME_COOKIE_RE: Regex = Regex::new(r"(?:^|;)\s*theme=([^;]*)").unwrap();
}

/// Pulls the raw `theme` value out of a `document.cookie` string.
pub fn parse_theme_cookie(cookies: &str) -> Option<&str> {
    THEME_COOKIE_RE.captures(cookies)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Session cookie, site-wide.
pub fn theme_cookie(theme: Theme) -> String {
    format!("{}={}; path=/", THEME_COOKIE, theme.label())
}

/// Where the selected theme outlives the page.
pub trait ThemeStore {
    /// Raw stored value, unvalidated. Read once when the site boots.
    fn load(&self) -> Result<Option<String>, DomError>;

    fn persist(&self, theme: Theme) -> Result<(), DomError>;
}

/// Keeps every write in memory. Used off the web and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    initial: Option<String>,
    writes: Rc<RefCell<Vec<Theme>>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            initial: Some(value.into()),
            writes: Rc::default(),
        }
    }

    pub fn writes(&self) -> Vec<Theme> {
        self.writes.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, DomError> {
        Ok(self.writes
            .borrow()
            .last()
            .map(|theme| theme.label().to_string())
            .or_else(|| self.initial.clone()))
    }

    fn persist(&self, theme: Theme) -> Result<(), DomError> {
        log::info!("Setting cookie: {}", theme);
        self.writes.borrow_mut().push(theme);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::web::DocumentCookieStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;
    use super::*;
    use crate::utils::listener::document;

    /// Reads and writes `document.cookie`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DocumentCookieStore;

    fn html_document() -> Result<HtmlDocument, DomError> {
        document()?.dyn_into::<HtmlDocument>().map_err(|_| DomError::NoDocument)
    }

    impl ThemeStore for DocumentCookieStore {
        fn load(&self) -> Result<Option<String>, DomError> {
            let cookies = html_document()?.cookie().map_err(|e| DomError::cookie(&e))?;
            Ok(parse_theme_cookie(&cookies).map(str::to_string))
        }

        fn persist(&self, theme: Theme) -> Result<(), DomError> {
            log::info!("Setting cookie: {}", theme);
            html_document()?
                .set_cookie(&theme_cookie(theme))
                .map_err(|e| DomError::cookie(&e))
        }
    }
}

/// Store backing the menu on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformThemeStore = DocumentCookieStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformThemeStore = MemoryThemeStore;
