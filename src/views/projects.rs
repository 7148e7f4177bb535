use dioxus::prelude::*;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            class: "page-content",
            h1 { "Projects" }
            p { class: "muted", "Work in progress." }
        }
    }
}
