//! Event sinks: consumers of canonical events.
//!
//! The bridge calls [`EventSink::on_event`] on the engine's callback thread.
//! Any thread-affinity the consumer needs (a UI thread, an async runtime) is
//! the sink's job. [`ChannelSink`] covers the common case by stamping each
//! event into an [`EventEnvelope`] and posting it to a channel that the
//! owning thread drains.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::events::Payload;
use crate::types::{Result, SinkConfig};

/// Receiver of canonical events.
pub trait EventSink: Send + Sync {
    /// Called once per forwarded event. The payload is owned by the sink.
    fn on_event(&self, event_name: &str, payload: Payload);
}

impl<F> EventSink for F
where
    F: Fn(&str, Payload) + Send + Sync,
{
    fn on_event(&self, event_name: &str, payload: Payload) {
        self(event_name, payload)
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// A canonical event stamped for delivery to the application layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: Payload,
    /// Milliseconds since the Unix epoch at the time of forwarding.
    pub timestamp: i64,
    pub source: String,
}

impl EventEnvelope {
    pub fn new(event_type: impl Into<String>, data: Payload, source: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            timestamp: chrono::Utc::now().timestamp_millis(),
            source: source.into(),
        }
    }

    /// JSON form consumed by the application layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Channel sink
// =============================================================================

/// Sink that hands envelopes to another thread over an unbounded channel.
///
/// Sending never blocks the engine thread. Once the receiver is dropped,
/// events are discarded with a warning.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    source: String,
    tx: mpsc::UnboundedSender<EventEnvelope>,
}

impl ChannelSink {
    /// Create a sink and the receiver its envelopes arrive on.
    pub fn new(source: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<EventEnvelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                source: source.into(),
                tx,
            },
            rx,
        )
    }

    pub fn from_config(config: &SinkConfig) -> (Self, mpsc::UnboundedReceiver<EventEnvelope>) {
        Self::new(config.source.clone())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl EventSink for ChannelSink {
    fn on_event(&self, event_name: &str, payload: Payload) {
        let envelope = EventEnvelope::new(event_name, payload, self.source.as_str());
        if self.tx.send(envelope).is_err() {
            tracing::warn!(
                event = event_name,
                source = %self.source,
                "event receiver closed, dropping event"
            );
        }
    }
}
