mod theme_state;
mod menu_state;
mod cookie;
pub mod listener;

pub use theme_state::{ Palette, Theme };
pub use menu_state::{ dispatch, MenuEvent, MenuKey, MenuState, MenuVisibility };
pub use cookie::{
    parse_theme_cookie,
    theme_cookie,
    MemoryThemeStore,
    PlatformThemeStore,
    ThemeStore,
    THEME_COOKIE,
};
#[cfg(target_arch = "wasm32")]
pub use cookie::DocumentCookieStore;
