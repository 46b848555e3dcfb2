//! EventBridge: the engine's listener, forwarding canonical events to a sink.
//!
//! Every listener method is a thin wrapper that packs its arguments into a
//! [`NativeCallback`] and hands it to one shared [`EventBridge::dispatch`],
//! so the translation table in [`crate::events::translation`] stays the only
//! place that knows what each callback means.
//!
//! The bridge holds no state besides its sink. It never returns data to the
//! engine and never raises into the engine's call stack; a panicking sink
//! unwinds through the engine's thread exactly as if the engine had called
//! the sink directly.

use std::sync::Arc;

use crate::engine::{ArEngine, ArErrorKind, ArEventListener, Bitmap};
use crate::events::{translate_native_callback, CallbackKind, NativeCallback, NativeValue};
use crate::sink::EventSink;
use crate::types::Result;

/// Listener that translates engine callbacks and forwards them to `S`.
#[derive(Debug)]
pub struct EventBridge<S> {
    sink: S,
}

impl<S: EventSink + 'static> EventBridge<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Install a bridge around `sink` as the engine's only listener.
    pub fn attach<E>(engine: &mut E, sink: S) -> Result<()>
    where
        E: ArEngine + ?Sized,
    {
        engine.set_event_listener(Box::new(Self::new(sink)))?;
        tracing::debug!("event bridge attached to engine");
        Ok(())
    }
}

impl<S: EventSink> EventBridge<S> {
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Translate one callback and forward the result, if any.
    pub fn dispatch(&self, callback: NativeCallback) {
        match translate_native_callback(&callback) {
            Some(event) => {
                tracing::debug!(
                    callback = callback.kind.as_str(),
                    event = event.name.as_str(),
                    "forwarding engine event"
                );
                self.sink.on_event(event.name.as_str(), event.payload);
            }
            None => {
                if callback.kind != CallbackKind::FrameAvailable {
                    tracing::trace!(
                        callback = callback.kind.as_str(),
                        args = callback.args.len(),
                        "engine callback not forwarded"
                    );
                }
            }
        }
    }

    /// Dispatch a callback identified only by its listener method name.
    ///
    /// For bindings that receive callbacks reflectively (JNI proxies, FFI
    /// shims). Names outside the listener surface are ignored.
    pub fn invoke(&self, method_name: &str, args: Vec<NativeValue>) {
        match method_name.parse::<CallbackKind>() {
            Ok(kind) => self.dispatch(NativeCallback::new(kind, args)),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring engine callback");
            }
        }
    }
}

impl<S: EventSink> ArEventListener for EventBridge<S> {
    fn frame_available(&self, frame: Option<Arc<Bitmap>>) {
        self.dispatch(NativeCallback::new(
            CallbackKind::FrameAvailable,
            vec![frame.into()],
        ));
    }

    fn screenshot_taken(&self, bitmap: Option<Arc<Bitmap>>) {
        self.dispatch(NativeCallback::new(
            CallbackKind::ScreenshotTaken,
            vec![bitmap.into()],
        ));
    }

    fn video_recording_prepared(&self) {
        self.dispatch(NativeCallback::no_args(CallbackKind::VideoRecordingPrepared));
    }

    fn video_recording_started(&self) {
        self.dispatch(NativeCallback::no_args(CallbackKind::VideoRecordingStarted));
    }

    fn video_recording_finished(&self) {
        self.dispatch(NativeCallback::no_args(CallbackKind::VideoRecordingFinished));
    }

    fn video_recording_failed(&self) {
        self.dispatch(NativeCallback::no_args(CallbackKind::VideoRecordingFailed));
    }

    fn shutdown_finished(&self) {
        self.dispatch(NativeCallback::no_args(CallbackKind::ShutdownFinished));
    }

    fn initialized(&self) {
        self.dispatch(NativeCallback::no_args(CallbackKind::Initialized));
    }

    fn face_visibility_changed(&self, visible: bool) {
        self.dispatch(NativeCallback::new(
            CallbackKind::FaceVisibilityChanged,
            vec![visible.into()],
        ));
    }

    fn image_visibility_changed(&self, game_object_name: &str, visible: bool) {
        self.dispatch(NativeCallback::new(
            CallbackKind::ImageVisibilityChanged,
            vec![game_object_name.into(), visible.into()],
        ));
    }

    fn error(&self, kind: Option<ArErrorKind>, message: Option<&str>) {
        self.dispatch(NativeCallback::new(
            CallbackKind::Error,
            vec![kind.into(), message.into()],
        ));
    }

    fn effect_switched(&self, slot: Option<&str>) {
        self.dispatch(NativeCallback::new(
            CallbackKind::EffectSwitched,
            vec![slot.into()],
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MockArEngine, PixelFormat};
    use crate::events::{Payload, PayloadValue};
    use crate::types::Error;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<(String, Payload)>>>,
    }

    impl EventSink for Recorder {
        fn on_event(&self, event_name: &str, payload: Payload) {
            self.events
                .lock()
                .unwrap()
                .push((event_name.to_string(), payload));
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<(String, Payload)> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    fn bridge() -> (EventBridge<Recorder>, Recorder) {
        let recorder = Recorder::default();
        (EventBridge::new(recorder.clone()), recorder)
    }

    #[test]
    fn test_typed_callbacks_forward() {
        let (bridge, recorder) = bridge();

        bridge.initialized();
        bridge.video_recording_started();
        bridge.video_recording_finished();
        bridge.video_recording_failed();
        bridge.effect_switched(Some("sunglasses.mask"));
        bridge.error(Some(ArErrorKind::Warning), Some("low light"));

        let names: Vec<_> = recorder.take().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "initialized",
                "recordingStarted",
                "recordingStopped",
                "error",
                "filterChanged",
                "error"
            ]
        );
    }

    #[test]
    fn test_typed_swallowed_callbacks() {
        let (bridge, recorder) = bridge();
        let frame = Arc::new(Bitmap::new(1, 1, PixelFormat::Rgb565, vec![0u8; 2]));

        bridge.frame_available(Some(frame));
        bridge.frame_available(None);
        bridge.video_recording_prepared();
        bridge.shutdown_finished();
        bridge.face_visibility_changed(true);
        bridge.image_visibility_changed("poster", false);

        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_typed_error_defaults() {
        let (bridge, recorder) = bridge();

        bridge.error(None, None);

        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1["type"], PayloadValue::from("UNKNOWN"));
        assert_eq!(events[0].1["message"], PayloadValue::from("Unknown error"));
    }

    #[test]
    fn test_typed_screenshot_none() {
        let (bridge, recorder) = bridge();

        bridge.screenshot_taken(None);

        let events = recorder.take();
        assert_eq!(events[0].0, "screenshotTaken");
        assert_eq!(events[0].1["success"], PayloadValue::Bool(false));
        assert!(events[0].1["bitmap"].is_null());
    }

    #[test]
    fn test_invoke_by_name() {
        let (bridge, recorder) = bridge();

        bridge.invoke("effectSwitched", vec![NativeValue::from("viking_helmet.deepar")]);
        bridge.invoke("error", vec![]);
        bridge.invoke("frameAvailable", vec![NativeValue::Null]);

        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1["filterPath"], PayloadValue::from("viking_helmet.deepar"));
    }

    #[test]
    fn test_invoke_unknown_name_ignored() {
        let (bridge, recorder) = bridge();

        bridge.invoke("onCameraPermission", vec![NativeValue::Bool(true)]);
        bridge.invoke("", vec![]);

        assert!(recorder.take().is_empty());
    }

    #[test]
    fn test_attach_installs_listener() {
        let mut engine = MockArEngine::new();
        engine
            .expect_set_event_listener()
            .times(1)
            .returning(|listener| {
                listener.initialized();
                Ok(())
            });

        let recorder = Recorder::default();
        EventBridge::attach(&mut engine, recorder.clone()).unwrap();

        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "initialized");
    }

    #[test]
    fn test_attach_propagates_engine_failure() {
        let mut engine = MockArEngine::new();
        engine
            .expect_set_event_listener()
            .times(1)
            .returning(|_| Err(Error::engine("handle released")));

        let recorder = Recorder::default();
        let err = EventBridge::attach(&mut engine, recorder).unwrap_err();
        assert!(matches!(err, Error::Engine(_)));
    }
}
