pub mod theme_config;

pub use theme_config::{ platform_store, theme_label_from, InitialTheme };
