use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "page-content",
            h1 { "Hello." }
            p {
                class: "muted",
                "Press M to open the menu, T to switch themes."
            }
        }
    }
}
