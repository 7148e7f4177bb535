use crate::error::DomError;
use crate::utils::cookie::ThemeStore;
use crate::utils::theme_state::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuVisibility {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuVisibility {
    pub fn is_expanded(self) -> bool {
        self == MenuVisibility::Expanded
    }

    fn from_open(open: bool) -> Self {
        if open { MenuVisibility::Expanded } else { MenuVisibility::Collapsed }
    }
}

/// Global shortcuts, identified by their DOM key codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Escape,
    Menu,
    Theme,
}

impl MenuKey {
    pub const ESCAPE_CODE: u32 = 27;
    pub const MENU_CODE: u32 = 77;
    pub const THEME_CODE: u32 = 84;

    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            Self::ESCAPE_CODE => Some(MenuKey::Escape),
            Self::MENU_CODE => Some(MenuKey::Menu),
            Self::THEME_CODE => Some(MenuKey::Theme),
            _ => None,
        }
    }
}

/// Every input the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    BurgerClicked,
    LinkClicked,
    ThemeToggleClicked,
    KeyPressed(u32),
    DocumentClicked {
        inside: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    pub visibility: MenuVisibility,
    pub theme: Theme,
}

impl MenuState {
    pub fn new(theme: Theme) -> Self {
        Self {
            visibility: MenuVisibility::Collapsed,
            theme,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_expanded()
    }

    pub fn is_light_theme(&self) -> bool {
        self.theme.is_light()
    }

    /// `Some(open)` forces the visibility, `None` flips it.
    pub fn toggle_menu(&mut self, force: Option<bool>) {
        self.visibility = match force {
            Some(open) => MenuVisibility::from_open(open),
            None => MenuVisibility::from_open(!self.is_open()),
        };
    }

    /// Flips the theme and returns the theme now in effect, which is what must be persisted.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Returns the new theme when the key changed it.
    pub fn handle_global_key(&mut self, code: u32) -> Option<Theme> {
        match MenuKey::from_key_code(code)? {
            MenuKey::Escape => {
                self.toggle_menu(Some(false));
                None
            }
            MenuKey::Menu => {
                self.toggle_menu(None);
                None
            }
            MenuKey::Theme => Some(self.toggle_theme()),
        }
    }

    pub fn handle_outside_click(&mut self, inside: bool) {
        if !inside {
            self.toggle_menu(Some(false));
        }
    }

    /// Applies one event. Returns the resulting theme if the event toggled it.
    pub fn apply(&mut self, event: MenuEvent) -> Option<Theme> {
        match event {
            MenuEvent::BurgerClicked => {
                self.toggle_menu(None);
                None
            }
            MenuEvent::LinkClicked => {
                self.toggle_menu(Some(false));
                None
            }
            MenuEvent::ThemeToggleClicked => Some(self.toggle_theme()),
            MenuEvent::KeyPressed(code) => self.handle_global_key(code),
            MenuEvent::DocumentClicked { inside } => {
                self.handle_outside_click(inside);
                None
            }
        }
    }

    pub fn root_class(&self) -> &'static str {
        if self.is_open() { "menu visible" } else { "menu" }
    }
}

/// Runs the transition first, then persists the theme it produced.
/// The state change stands even when the store fails.
pub fn dispatch<S: ThemeStore + ?Sized>(
    state: &mut MenuState,
    store: &S,
    event: MenuEvent
) -> Result<(), DomError> {
    let before = *state;
    let changed = state.apply(event);
    if before != *state {
        log::debug!("{:?}: {:?} -> {:?}", event, before, state);
    }

    match changed {
        Some(theme) => store.persist(theme),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = MenuState::new(Theme::Light);
        assert_eq!(state.visibility, MenuVisibility::Collapsed);
        assert!(!state.is_open());
        assert!(state.is_light_theme());
    }

    #[test]
    fn test_burger_alternates_visibility() {
        let mut state = MenuState::default();
        for i in 0..7 {
            state.apply(MenuEvent::BurgerClicked);
            assert_eq!(state.is_open(), i % 2 == 0);
        }
    }

    #[test]
    fn test_force_sets_visibility_directly() {
        let mut state = MenuState::default();
        state.toggle_menu(Some(true));
        state.toggle_menu(Some(true));
        assert!(state.is_open());
        state.toggle_menu(Some(false));
        state.toggle_menu(Some(false));
        assert!(!state.is_open());
    }

    #[test]
    fn test_escape_only_collapses() {
        let mut state = MenuState::default();
        state.handle_global_key(MenuKey::ESCAPE_CODE);
        assert_eq!(state, MenuState::default());

        state.toggle_menu(None);
        state.handle_global_key(MenuKey::ESCAPE_CODE);
        assert!(!state.is_open());
    }

    #[test]
    fn test_m_key_matches_burger() {
        let mut by_key = MenuState::default();
        let mut by_click = MenuState::default();
        for _ in 0..4 {
            by_key.apply(MenuEvent::KeyPressed(MenuKey::MENU_CODE));
            by_click.apply(MenuEvent::BurgerClicked);
            assert_eq!(by_key, by_click);
        }
    }

    #[test]
    fn test_t_key_returns_new_theme() {
        let mut state = MenuState::new(Theme::Dark);
        assert_eq!(state.handle_global_key(MenuKey::THEME_CODE), Some(Theme::Light));
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.is_open());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut state = MenuState::new(Theme::Light);
        state.toggle_menu(None);
        let before = state;
        for code in [0, 13, 32, 65, 76, 78, 83, 85, 109, 116] {
            assert_eq!(state.handle_global_key(code), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_link_click_force_collapses() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::LinkClicked);
        assert!(!state.is_open());

        state.apply(MenuEvent::BurgerClicked);
        state.apply(MenuEvent::LinkClicked);
        assert!(!state.is_open());
    }

    #[test]
    fn test_document_click_collapses_only_from_outside() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::BurgerClicked);

        state.apply(MenuEvent::DocumentClicked { inside: true });
        assert!(state.is_open());

        state.apply(MenuEvent::DocumentClicked { inside: false });
        assert!(!state.is_open());
    }

    #[test]
    fn test_visibility_and_theme_are_independent() {
        let mut state = MenuState::new(Theme::Light);
        state.apply(MenuEvent::BurgerClicked);
        state.apply(MenuEvent::ThemeToggleClicked);
        assert_eq!(state.visibility, MenuVisibility::Expanded);
        assert_eq!(state.theme, Theme::Dark);

        state.apply(MenuEvent::KeyPressed(MenuKey::ESCAPE_CODE));
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_root_class_follows_visibility() {
        let mut state = MenuState::default();
        assert_eq!(state.root_class(), "menu");
        state.toggle_menu(None);
        assert_eq!(state.root_class(), "menu visible");
    }
}
