use serde::Deserialize;
use crate::error::DomError;
use crate::utils::menu_state::MenuEvent;

/// Something listeners can be attached to and detached from by handle.
pub trait ListenerRegistrar {
    type Handle;

    fn add(&self, event_type: &'static str, handle: &Self::Handle) -> Result<(), DomError>;

    fn remove(&self, event_type: &'static str, handle: &Self::Handle) -> Result<(), DomError>;
}

/// A listener that lives exactly as long as this value.
///
/// The handle given to `add` is kept here, so dropping the guard removes that same handle.
pub struct ListenerGuard<R: ListenerRegistrar> {
    registrar: R,
    event_type: &'static str,
    handle: R::Handle,
}

impl<R: ListenerRegistrar> ListenerGuard<R> {
    pub fn new(registrar: R, event_type: &'static str, handle: R::Handle) -> Result<Self, DomError> {
        registrar.add(event_type, &handle)?;
        log::debug!("Attached '{}' listener", event_type);
        Ok(Self { registrar, event_type, handle })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl<R: ListenerRegistrar> Drop for ListenerGuard<R> {
    fn drop(&mut self) {
        match self.registrar.remove(self.event_type, &self.handle) {
            Ok(()) => log::debug!("Detached '{}' listener", self.event_type),
            Err(e) => log::error!("{}", e),
        }
    }
}

/// Outside-click rule. Before the root is mounted every click counts as inside;
/// a target that is not a node counts as outside.
pub fn click_is_inside<N>(root: Option<&N>, target: Option<&N>, contains: impl Fn(&N, &N) -> bool) -> bool {
    match (root, target) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(root), Some(target)) => contains(root, target),
    }
}

/// Events forwarded from document listeners installed through `document::eval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListenerMessage {
    Click {
        inside: bool,
    },
    Key {
        code: u32,
    },
}

impl From<ListenerMessage> for MenuEvent {
    fn from(message: ListenerMessage) -> Self {
        match message {
            ListenerMessage::Click { inside } => MenuEvent::DocumentClicked { inside },
            ListenerMessage::Key { code } => MenuEvent::KeyPressed(code),
        }
    }
}

/// Installs `click`/`keydown` listeners on `document` that report through `dioxus.send`.
/// The handlers are kept on `window.__siteMenu` so the release script removes the same functions.
pub fn bridge_attach_script(root_id: &str) -> String {
    format!(
        r#"
        const menu = window.__siteMenu = {{}};
        menu.click = (e) => {{
            const root = document.getElementById("{root_id}");
            const inside = !root || (e.target instanceof Node && root.contains(e.target));
            dioxus.send({{ kind: "click", inside }});
        }};
        menu.keydown = (e) => dioxus.send({{ kind: "key", code: e.keyCode }});
        document.addEventListener("click", menu.click);
        document.addEventListener("keydown", menu.keydown);
        "#
    )
}

pub const BRIDGE_RELEASE_SCRIPT: &str = r#"
    const menu = window.__siteMenu;
    if (menu) {
        document.removeEventListener("click", menu.click);
        document.removeEventListener("keydown", menu.keydown);
        delete window.__siteMenu;
    }
"#;

#[cfg(target_arch = "wasm32")]
pub use self::web::{ document, document_listener, is_inside, DocumentListener, DocumentRegistrar };

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ Document, Event, Node };
    use super::*;

    pub fn document() -> Result<Document, DomError> {
        web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)
    }

    pub struct DocumentRegistrar {
        document: Document,
    }

    impl ListenerRegistrar for DocumentRegistrar {
        type Handle = Closure<dyn FnMut(Event)>;

        fn add(&self, event_type: &'static str, handle: &Self::Handle) -> Result<(), DomError> {
            self.document
                .add_event_listener_with_callback(
                    event_type,
                    handle.as_ref().unchecked_ref::<js_sys::Function>()
                )
                .map_err(|e| DomError::listener(&e))
        }

        fn remove(&self, event_type: &'static str, handle: &Self::Handle) -> Result<(), DomError> {
            self.document
                .remove_event_listener_with_callback(
                    event_type,
                    handle.as_ref().unchecked_ref::<js_sys::Function>()
                )
                .map_err(|e| DomError::listener(&e))
        }
    }

    pub type DocumentListener = ListenerGuard<DocumentRegistrar>;

    pub fn document_listener<F>(event_type: &'static str, handler: F) -> Result<DocumentListener, DomError>
        where F: FnMut(Event) + 'static
    {
        let registrar = DocumentRegistrar { document: document()? };
        ListenerGuard::new(registrar, event_type, Closure::<dyn FnMut(Event)>::new(handler))
    }

    pub fn is_inside(event: &Event, root_id: &str) -> Result<bool, DomError> {
        let root = document()?.get_element_by_id(root_id).map(|root| root.unchecked_into::<Node>());
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        Ok(click_is_inside(root.as_ref(), target.as_ref(), |root, node| root.contains(Some(node))))
    }
}
