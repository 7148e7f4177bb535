use dioxus::prelude::*;
use crate::configs::{ platform_store, InitialTheme };
use crate::routes::Route;
use crate::utils::{ dispatch, MenuEvent, MenuState, PlatformThemeStore, Theme };
use super::icons::{ BlogIcon, BurgerIcon, LogoIcon, ProjectsIcon };

const MENU_CSS: Asset = asset!("/assets/styling/menu.css");

/// Element id of the menu root, used to tell inside clicks from outside ones.
pub const MENU_ROOT_ID: &str = "navigation-menu";

fn send(mut state: Signal<MenuState>, store: CopyValue<PlatformThemeStore>, event: MenuEvent) {
    let result = state.with_mut(|menu| dispatch(menu, &*store.read(), event));
    if let Err(e) = result {
        log::error!("Failed to persist theme: {}", e);
    }
}

/// Fixed side menu: logo, burger, theme toggle, and the blog/projects links
/// revealed while expanded.
///
/// `theme` is the raw configuration value; only `"white"` starts in the light theme.
#[component]
pub fn NavigationMenu(theme: Option<String>) -> Element {
    let state = use_signal(|| MenuState::new(Theme::from_config(theme.as_deref())));
    let store = use_hook(|| {
        let store = try_consume_context::<InitialTheme>()
            .map(|initial| initial.store)
            .unwrap_or_else(platform_store);
        CopyValue::new(store)
    });

    use_document_listeners(state, store);

    let menu = state();
    let root_css = menu.theme.root_css();

    rsx! {
        document::Link { rel: "stylesheet", href: MENU_CSS }
        style { "{root_css}" }

        div {
            id: MENU_ROOT_ID,
            class: menu.root_class(),

            Link {
                to: Route::Home,
                div { class: "logo", LogoIcon {} }
            }

            div {
                class: "blog",
                onclick: move |_| send(state, store, MenuEvent::LinkClicked),
                Link {
                    to: Route::Blog,
                    div {
                        h2 { "Blog" }
                        BlogIcon {}
                    }
                }
            }

            div {
                class: "burger",
                onclick: move |_| send(state, store, MenuEvent::BurgerClicked),
                BurgerIcon {}
            }

            div {
                class: "projects",
                onclick: move |_| send(state, store, MenuEvent::LinkClicked),
                Link {
                    to: Route::Projects,
                    div {
                        ProjectsIcon {}
                        h2 { "Projects" }
                    }
                }
            }

            div {
                class: "toggle",
                title: if menu.is_light_theme() { "Dark theme (T)" } else { "Light theme (T)" },
                onclick: move |_| send(state, store, MenuEvent::ThemeToggleClicked),
            }
        }
    }
}

/// Document `click` and `keydown` listeners for the mounted lifetime of the menu.
/// Registered on first render, released by `use_drop` on unmount.
#[cfg(target_arch = "wasm32")]
fn use_document_listeners(state: Signal<MenuState>, store: CopyValue<PlatformThemeStore>) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use web_sys::KeyboardEvent;
    use crate::utils::listener::{ document_listener, is_inside, DocumentListener };

    let listeners = use_hook(|| {
        let click = document_listener("click", move |event| {
            match is_inside(&event, MENU_ROOT_ID) {
                Ok(inside) => send(state, store, MenuEvent::DocumentClicked { inside }),
                Err(e) => log::warn!("Ignoring click: {}", e),
            }
        });
        let keydown = document_listener("keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                send(state, store, MenuEvent::KeyPressed(key.key_code()));
            }
        });

        let acquired: Vec<DocumentListener> = [click, keydown]
            .into_iter()
            .filter_map(|listener| {
                listener.map_err(|e| log::error!("Failed to attach listener: {}", e)).ok()
            })
            .collect();
        Rc::new(RefCell::new(acquired))
    });

    use_drop(move || {
        for listener in listeners.borrow_mut().drain(..) {
            log::debug!("Releasing document '{}' listener", listener.event_type());
        }
    });
}

/// Desktop and mobile renderers have no `web_sys` document, so the same listeners are
/// installed inside the webview and report back over the eval channel.
#[cfg(not(target_arch = "wasm32"))]
fn use_document_listeners(state: Signal<MenuState>, store: CopyValue<PlatformThemeStore>) {
    use crate::utils::listener::{ bridge_attach_script, ListenerMessage, BRIDGE_RELEASE_SCRIPT };

    use_hook(|| {
        let mut bridge = document::eval(&bridge_attach_script(MENU_ROOT_ID));
        spawn(async move {
            loop {
                match bridge.recv::<ListenerMessage>().await {
                    Ok(message) => send(state, store, message.into()),
                    Err(e) => {
                        log::warn!("Document listeners stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(|| {
        let _ = document::eval(BRIDGE_RELEASE_SCRIPT);
        log::debug!("Released document listeners");
    });
}
