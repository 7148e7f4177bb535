use dioxus::prelude::*;

#[component]
pub fn LogoIcon() -> Element {
    rsx! {
        svg {
            width: "40",
            height: "40",
            view_box: "0 0 40 40",
            path {
                stroke_width: "2",
                d: "M8 32V8h10a8 8 0 0 1 0 16H8M22 24l10 8",
            }
        }
    }
}

/// Three bars. The first and last slide onto the middle one when the menu opens.
#[component]
pub fn BurgerIcon() -> Element {
    rsx! {
        svg {
            width: "32",
            height: "32",
            view_box: "0 0 32 32",
            path { stroke_width: "2", stroke_linecap: "round", d: "M4 8h24" }
            path { stroke_width: "2", stroke_linecap: "round", d: "M4 16h24" }
            path { stroke_width: "2", stroke_linecap: "round", d: "M4 24h24" }
        }
    }
}

#[component]
pub fn BlogIcon() -> Element {
    rsx! {
        svg {
            width: "32",
            height: "32",
            view_box: "0 0 32 32",
            path {
                stroke_width: "2",
                stroke_linejoin: "round",
                d: "M6 4h14l6 6v18H6zM20 4v6h6M10 16h12M10 21h12",
            }
        }
    }
}

#[component]
pub fn ProjectsIcon() -> Element {
    rsx! {
        svg {
            width: "32",
            height: "32",
            view_box: "0 0 32 32",
            path {
                stroke_width: "2",
                stroke_linejoin: "round",
                d: "M4 8h10l2 3h12v15H4zM4 14h24",
            }
        }
    }
}
