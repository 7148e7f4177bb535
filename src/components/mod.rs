mod icons;
mod navigation_menu;

pub use navigation_menu::{ NavigationMenu, MENU_ROOT_ID };
