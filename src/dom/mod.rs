pub mod modal_guard;

pub use modal_guard::{is_escape, KeyListener, ModalGuard, ScrollLock};
