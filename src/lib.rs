//! # AR Event Bridge
//!
//! Bridges an AR engine's native listener interface to a string-keyed event
//! model for application layers that cannot depend on the engine's listener
//! types:
//! - A statically-typed listener surface covering every engine callback
//! - One translation table mapping callbacks to canonical `(name, payload)` events
//! - Sinks that receive those events, including an off-thread channel sink
//!
//! ## Architecture
//!
//! ```text
//!   AR engine thread
//!        │  listener callback (frameAvailable, error, effectSwitched, ...)
//!        ▼
//!   ┌──────────────────────────────┐
//!   │         EventBridge          │
//!   │  NativeCallback → translate  │──► swallowed (frames, reserved kinds)
//!   └──────────────┬───────────────┘
//!                  │ (eventName, payload)
//!                  ▼
//!             EventSink ──► ChannelSink ──► application thread
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod bridge;
pub mod engine;
pub mod events;
pub mod sink;
pub mod types;

// Internal utilities
pub mod observability;
pub mod validation;

pub use bridge::EventBridge;
pub use engine::{ArEngine, ArErrorKind, ArEventListener, Bitmap, PixelFormat};
pub use events::{CanonicalEvent, EventName, NativeCallback, NativeValue, Payload, PayloadValue};
pub use sink::{ChannelSink, EventEnvelope, EventSink};
pub use types::{Config, Error, Result};
