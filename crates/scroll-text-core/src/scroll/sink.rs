//! Frame output
//!
//! The engine hands every rendered frame to a [`FrameSink`]. Sinks are called
//! synchronously from the tick task and are never awaited, so a sink doing
//! slow work must hand it off (spawn or send) itself.

use tokio::sync::mpsc;

/// Consumer of rendered frames
pub trait FrameSink: Send + Sync + 'static {
    fn emit(&self, frame: &str);
}

impl<F> FrameSink for F
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn emit(&self, frame: &str) {
        self(frame)
    }
}

impl FrameSink for mpsc::UnboundedSender<String> {
    fn emit(&self, frame: &str) {
        if self.send(frame.to_string()).is_err() {
            tracing::debug!("Frame dropped: receiver closed");
        }
    }
}
