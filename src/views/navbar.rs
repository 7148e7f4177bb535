use dioxus::prelude::*;
use crate::components::NavigationMenu;
use crate::configs::InitialTheme;
use crate::routes::Route;

/// Layout shared by every page: the side menu plus the routed content.
#[component]
pub fn Navbar() -> Element {
    let InitialTheme { label, .. } = use_context::<InitialTheme>();

    rsx! {
        NavigationMenu { theme: label }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
