//! Event translation: engine listener callbacks → canonical application events.
//!
//! Pure deterministic mapping. Every payload is built fresh per call.
//!
//! Translation rules:
//!   screenshotTaken        → screenshotTaken   {success, bitmap}
//!   videoRecordingStarted  → recordingStarted  {success: true}
//!   videoRecordingFinished → recordingStopped  {success: true}
//!   videoRecordingFailed   → error             {message: "Video recording failed"}
//!   initialized            → initialized       {success: true}
//!   error                  → error             {type, message}
//!   effectSwitched         → filterChanged     {filterPath}
//!   (all others)           → None (swallowed)
//!
//! Missing, null or mis-shaped arguments are defaulted. Invocations with
//! fewer arguments than their rule reads are dropped.

use super::canonical::{CanonicalEvent, EventName, Payload, PayloadValue};
use super::native::{CallbackKind, NativeCallback, NativeValue};

/// Message attached to the `error` event for a failed recording.
pub const RECORDING_FAILED_MESSAGE: &str = "Video recording failed";
/// `type` used when the engine reports an error without a kind.
pub const UNKNOWN_ERROR_TYPE: &str = "UNKNOWN";
/// `message` used when the engine reports an error without a message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Whether a callback kind is consumed without producing an event.
pub fn is_swallowed(kind: CallbackKind) -> bool {
    matches!(
        kind,
        CallbackKind::FrameAvailable
            | CallbackKind::VideoRecordingPrepared
            | CallbackKind::ShutdownFinished
            | CallbackKind::FaceVisibilityChanged
            | CallbackKind::ImageVisibilityChanged
    )
}

/// Translate a native callback into a canonical event.
///
/// Returns `None` for swallowed kinds and for invocations missing the
/// arguments their rule needs.
pub fn translate_native_callback(callback: &NativeCallback) -> Option<CanonicalEvent> {
    match callback.kind {
        CallbackKind::ScreenshotTaken => {
            let bitmap = match callback.arg(0)? {
                NativeValue::Image(bitmap) => Some(bitmap.clone()),
                _ => None,
            };

            Some(event(
                EventName::ScreenshotTaken,
                [
                    ("success", PayloadValue::Bool(bitmap.is_some())),
                    ("bitmap", PayloadValue::from(bitmap)),
                ],
            ))
        }

        CallbackKind::VideoRecordingStarted => Some(success(EventName::RecordingStarted)),

        CallbackKind::VideoRecordingFinished => Some(success(EventName::RecordingStopped)),

        CallbackKind::VideoRecordingFailed => Some(event(
            EventName::Error,
            [("message", PayloadValue::from(RECORDING_FAILED_MESSAGE))],
        )),

        CallbackKind::Initialized => Some(success(EventName::Initialized)),

        CallbackKind::Error => {
            if callback.args.len() < 2 {
                return None;
            }

            let error_type = match callback.arg(0)? {
                NativeValue::Null => UNKNOWN_ERROR_TYPE.to_string(),
                other => other.to_string(),
            };
            let message = match callback.arg(1)? {
                NativeValue::Text(message) => message.clone(),
                _ => UNKNOWN_ERROR_MESSAGE.to_string(),
            };

            Some(event(
                EventName::Error,
                [
                    ("type", PayloadValue::Text(error_type)),
                    ("message", PayloadValue::Text(message)),
                ],
            ))
        }

        CallbackKind::EffectSwitched => {
            let filter_path = match callback.arg(0)? {
                NativeValue::Text(path) => path.clone(),
                _ => String::new(),
            };

            Some(event(
                EventName::FilterChanged,
                [("filterPath", PayloadValue::Text(filter_path))],
            ))
        }

        // Frame notifications arrive once per rendered frame; forwarding them
        // would flood the sink. The rest are reserved and carry nothing yet.
        CallbackKind::FrameAvailable
        | CallbackKind::VideoRecordingPrepared
        | CallbackKind::ShutdownFinished
        | CallbackKind::FaceVisibilityChanged
        | CallbackKind::ImageVisibilityChanged => None,
    }
}

fn success(name: EventName) -> CanonicalEvent {
    event(name, [("success", PayloadValue::Bool(true))])
}

fn event<const N: usize>(name: EventName, entries: [(&str, PayloadValue); N]) -> CanonicalEvent {
    let payload: Payload = entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    CanonicalEvent { name, payload }
}
