mod views;
mod components;
mod utils;
mod routes;
pub mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::components::{ NavigationMenu, MENU_ROOT_ID };
pub use crate::error::DomError;
