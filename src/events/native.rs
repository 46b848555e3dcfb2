//! Native callback invocations as the engine delivers them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::engine::{ArErrorKind, Bitmap};
use crate::types::Error;

/// Method identity of a listener callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    FrameAvailable,
    ScreenshotTaken,
    VideoRecordingPrepared,
    VideoRecordingStarted,
    VideoRecordingFinished,
    VideoRecordingFailed,
    ShutdownFinished,
    Initialized,
    FaceVisibilityChanged,
    ImageVisibilityChanged,
    Error,
    EffectSwitched,
}

impl CallbackKind {
    pub const ALL: [CallbackKind; 12] = [
        CallbackKind::FrameAvailable,
        CallbackKind::ScreenshotTaken,
        CallbackKind::VideoRecordingPrepared,
        CallbackKind::VideoRecordingStarted,
        CallbackKind::VideoRecordingFinished,
        CallbackKind::VideoRecordingFailed,
        CallbackKind::ShutdownFinished,
        CallbackKind::Initialized,
        CallbackKind::FaceVisibilityChanged,
        CallbackKind::ImageVisibilityChanged,
        CallbackKind::Error,
        CallbackKind::EffectSwitched,
    ];

    /// Symbolic method name on the engine's listener interface.
    pub fn as_str(self) -> &'static str {
        match self {
            CallbackKind::FrameAvailable => "frameAvailable",
            CallbackKind::ScreenshotTaken => "screenshotTaken",
            CallbackKind::VideoRecordingPrepared => "videoRecordingPrepared",
            CallbackKind::VideoRecordingStarted => "videoRecordingStarted",
            CallbackKind::VideoRecordingFinished => "videoRecordingFinished",
            CallbackKind::VideoRecordingFailed => "videoRecordingFailed",
            CallbackKind::ShutdownFinished => "shutdownFinished",
            CallbackKind::Initialized => "initialized",
            CallbackKind::FaceVisibilityChanged => "faceVisibilityChanged",
            CallbackKind::ImageVisibilityChanged => "imageVisibilityChanged",
            CallbackKind::Error => "error",
            CallbackKind::EffectSwitched => "effectSwitched",
        }
    }
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallbackKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CallbackKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::unknown_callback(s))
    }
}

/// One untyped argument of a native invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Image(Arc<Bitmap>),
    ErrorKind(ArErrorKind),
}

impl NativeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Null => f.write_str("null"),
            NativeValue::Bool(b) => write!(f, "{}", b),
            NativeValue::Int(n) => write!(f, "{}", n),
            NativeValue::Float(x) => write!(f, "{}", x),
            NativeValue::Text(s) => f.write_str(s),
            NativeValue::Image(bitmap) => {
                write!(f, "Bitmap({}x{} {:?})", bitmap.width, bitmap.height, bitmap.format)
            }
            NativeValue::ErrorKind(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl From<Option<Arc<Bitmap>>> for NativeValue {
    fn from(value: Option<Arc<Bitmap>>) -> Self {
        value.map_or(NativeValue::Null, NativeValue::Image)
    }
}

impl From<Option<ArErrorKind>> for NativeValue {
    fn from(value: Option<ArErrorKind>) -> Self {
        value.map_or(NativeValue::Null, NativeValue::ErrorKind)
    }
}

impl From<Option<&str>> for NativeValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(NativeValue::Null, |s| NativeValue::Text(s.to_string()))
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::Text(value.to_string())
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Bool(value)
    }
}

/// An invocation arriving from the engine. Lives only for one translation.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeCallback {
    pub kind: CallbackKind,
    pub args: Vec<NativeValue>,
}

impl NativeCallback {
    pub fn new(kind: CallbackKind, args: Vec<NativeValue>) -> Self {
        Self { kind, args }
    }

    pub fn no_args(kind: CallbackKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
        }
    }

    /// Argument at `index`, or `None` when the engine passed fewer.
    pub fn arg(&self, index: usize) -> Option<&NativeValue> {
        self.args.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for kind in CallbackKind::ALL {
            assert_eq!(kind.as_str().parse::<CallbackKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "onFaceTracked".parse::<CallbackKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownCallback(name) if name == "onFaceTracked"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("ScreenshotTaken".parse::<CallbackKind>().is_err());
    }

    #[test]
    fn test_stringify_values() {
        assert_eq!(NativeValue::Null.to_string(), "null");
        assert_eq!(NativeValue::Int(7).to_string(), "7");
        assert_eq!(NativeValue::Text("lost face".into()).to_string(), "lost face");
        assert_eq!(NativeValue::ErrorKind(ArErrorKind::Warning).to_string(), "WARNING");
    }

    #[test]
    fn test_optional_conversions() {
        assert!(NativeValue::from(None::<&str>).is_null());
        assert!(NativeValue::from(None::<ArErrorKind>).is_null());
        assert_eq!(
            NativeValue::from(Some("mask.deepar")),
            NativeValue::Text("mask.deepar".to_string())
        );
    }
}
