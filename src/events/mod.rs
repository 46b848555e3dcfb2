//! Event infrastructure: native callbacks, canonical events, translation.
//!
//! Translates the engine's listener callbacks into the string-keyed event
//! model the application layer consumes, so bindings above this crate never
//! touch engine listener types.

pub mod canonical;
pub mod native;
pub mod translation;

pub use canonical::{CanonicalEvent, EventName, Payload, PayloadValue};
pub use native::{CallbackKind, NativeCallback, NativeValue};
pub use translation::{is_swallowed, translate_native_callback};
