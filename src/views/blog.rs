use dioxus::prelude::*;

#[component]
pub fn Blog() -> Element {
    rsx! {
        section {
            class: "page-content",
            h1 { "Blog" }
            p { class: "muted", "Nothing published yet." }
        }
    }
}
