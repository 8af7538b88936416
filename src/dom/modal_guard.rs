// ============================================================================
// MODAL GUARD - global resources held while the details modal is mounted
// ============================================================================
// Both handles release on Drop, so every exit path (close button, Escape,
// backdrop, unmount) gives the listener and the body style back exactly once.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, KeyboardEvent};

use crate::utils::constants::ESCAPE_KEY_CODE;

pub fn is_escape(code: &str) -> bool {
    code == ESCAPE_KEY_CODE
}

/// Subscription to document `keydown` for one key code
pub struct KeyListener {
    document: Document,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn subscribe<F>(matches: fn(&str) -> bool, on_key: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let document = window()?.document()?;

        let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if matches(&event.code()) {
                on_key();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Err(e) =
            document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            log::error!("❌ keydown listener not registered: {:?}", e);
            return None;
        }
        log::debug!("⌨️ keydown listener registered");

        Some(Self { document, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
        log::debug!("⌨️ keydown listener removed");
    }
}

/// Blocks page scroll behind the modal; restores `overflow: unset` on drop
pub struct ScrollLock {
    body: HtmlElement,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = window()?.document()?.body()?;
        if let Err(e) = body.style().set_property("overflow", "hidden") {
            log::warn!("⚠️ Could not lock body scroll: {:?}", e);
            return None;
        }
        Some(Self { body })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self.body.style().set_property("overflow", "unset");
    }
}

/// Everything the modal holds on to while open
pub struct ModalGuard {
    _escape: Option<KeyListener>,
    _scroll: Option<ScrollLock>,
}

impl ModalGuard {
    pub fn acquire<F>(on_escape: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            _escape: KeyListener::subscribe(is_escape, on_escape),
            _scroll: ScrollLock::acquire(),
        }
    }
}
