//! AR engine listener surface.
//!
//! The engine delivers its notifications through a single listener slot.
//! [`ArEventListener`] declares one statically-typed method per callback the
//! engine can invoke, so an implementation has to satisfy the whole surface
//! even for callbacks it ignores. [`ArEngine`] is the slot itself.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::types::Result;

// =============================================================================
// Engine values
// =============================================================================

/// Pixel layout of a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PixelFormat {
    Rgba8888,
    Argb8888,
    Rgb565,
    Yuv420,
}

/// Immutable image produced by the engine (screenshots, processed frames).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Bytes,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: impl Into<Bytes>) -> Self {
        Self {
            width,
            height,
            format,
            pixels: pixels.into(),
        }
    }
}

/// Error kind reported alongside an engine error callback.
///
/// The engine documents four kinds; newer engine builds report more, which
/// land in `Other` with their wire name intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArErrorKind {
    Debug,
    Info,
    Warning,
    Error,
    Other(String),
}

impl ArErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ArErrorKind::Debug => "DEBUG",
            ArErrorKind::Info => "INFO",
            ArErrorKind::Warning => "WARNING",
            ArErrorKind::Error => "ERROR",
            ArErrorKind::Other(name) => name,
        }
    }

    /// Map an engine wire name to a kind. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "DEBUG" => ArErrorKind::Debug,
            "INFO" => ArErrorKind::Info,
            "WARNING" => ArErrorKind::Warning,
            "ERROR" => ArErrorKind::Error,
            other => ArErrorKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ArErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Listener surface
// =============================================================================

/// Every callback the engine can deliver to its listener.
///
/// Invoked synchronously on whatever thread the engine chooses, usually its
/// own processing thread. Implementations must not block.
pub trait ArEventListener: Send + Sync {
    /// A processed frame is ready. Delivered once per rendered frame.
    fn frame_available(&self, frame: Option<Arc<Bitmap>>);

    fn screenshot_taken(&self, bitmap: Option<Arc<Bitmap>>);

    fn video_recording_prepared(&self);

    fn video_recording_started(&self);

    fn video_recording_finished(&self);

    fn video_recording_failed(&self);

    fn shutdown_finished(&self);

    fn initialized(&self);

    fn face_visibility_changed(&self, visible: bool);

    fn image_visibility_changed(&self, game_object_name: &str, visible: bool);

    fn error(&self, kind: Option<ArErrorKind>, message: Option<&str>);

    fn effect_switched(&self, slot: Option<&str>);
}

/// The engine's listener slot.
#[cfg_attr(test, mockall::automock)]
pub trait ArEngine {
    /// Replace the engine's active listener.
    ///
    /// Fails only when the engine handle itself is unusable.
    fn set_event_listener(&mut self, listener: Box<dyn ArEventListener>) -> Result<()>;
}
