use std::cell::Cell;
use crate::error::DomError;
use crate::utils::{ Theme, ThemeStore };

/// A cookie jar that refuses every access, like a browser with cookies disabled.
#[allow(dead_code)]
#[derive(Default)]
pub struct BlockedThemeStore {
    pub attempts: Cell<usize>,
}

impl ThemeStore for BlockedThemeStore {
    fn load(&self) -> Result<Option<String>, DomError> {
        Err(DomError::Cookie("cookies are disabled".to_string()))
    }

    fn persist(&self, _theme: Theme) -> Result<(), DomError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(DomError::Cookie("cookies are disabled".to_string()))
    }
}
