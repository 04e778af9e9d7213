use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::protocol::PluginCommand;

/// Host-side handle for one key
pub trait ActionHandle: Send + Sync + 'static {
    /// Replace the title shown on the key
    fn set_title(&self, title: &str);
}

/// Host connection writing commands as JSON lines
pub struct JsonLineHost<W> {
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> JsonLineHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Handle addressing `context`
    pub fn handle(self: &Arc<Self>, context: impl Into<String>) -> ContextHandle<W> {
        ContextHandle {
            host: Arc::clone(self),
            context: context.into(),
        }
    }

    pub fn send(&self, command: &PluginCommand) {
        let line = match command.to_line() {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to encode host command: {}", e);
                return;
            }
        };

        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write host command: {}", e);
        }
    }
}

/// [`ActionHandle`] bound to a single context of a [`JsonLineHost`]
pub struct ContextHandle<W> {
    host: Arc<JsonLineHost<W>>,
    context: String,
}

impl<W: Write + Send + 'static> ActionHandle for ContextHandle<W> {
    fn set_title(&self, title: &str) {
        self.host
            .send(&PluginCommand::set_title(self.context.clone(), title));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Write target that can be inspected while shared
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(pub(crate) Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn lines(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_context_handle_writes_set_title() {
        let buffer = SharedBuffer::default();
        let host = Arc::new(JsonLineHost::new(buffer.clone()));
        let first = host.handle("a");
        let second = host.handle("b");

        first.set_title("HEL");
        second.set_title("ELL");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["context"], "a");
        assert_eq!(lines[0]["payload"]["title"], "HEL");
        assert_eq!(lines[1]["context"], "b");
        assert_eq!(lines[1]["event"], "setTitle");
    }
}
