pub mod pointer;
pub mod viewport;

pub use gloo_events::EventListener;
pub use pointer::{wire_pointer_tracking, PointerState};
pub use viewport::{wire_resize, wire_scroll};
