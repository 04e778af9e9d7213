use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::controller::ScrollTextAction;
use super::host::JsonLineHost;
use super::title::TitleSource;
use crate::protocol::HostEvent;
use crate::scroll::ScrollOptions;

/// Routes host events to one controller per key context
pub struct Plugin<W> {
    host: Arc<JsonLineHost<W>>,
    defaults: ScrollOptions,
    title_source: Option<Arc<dyn TitleSource>>,
    actions: HashMap<String, ScrollTextAction>,
}

impl<W: Write + Send + 'static> Plugin<W> {
    pub fn new(host: Arc<JsonLineHost<W>>, defaults: ScrollOptions) -> Self {
        Self {
            host,
            defaults,
            title_source: None,
            actions: HashMap::new(),
        }
    }

    pub fn with_title_source(mut self, source: Arc<dyn TitleSource>) -> Self {
        self.title_source = Some(source);
        self
    }

    pub fn action(&self, context: &str) -> Option<&ScrollTextAction> {
        self.actions.get(context)
    }

    /// Number of keys currently visible
    pub fn active_count(&self) -> usize {
        self.actions.len()
    }

    /// Parse and dispatch one line of host input. Malformed lines are skipped.
    pub async fn handle_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match HostEvent::parse(line) {
            Ok(event) => self.handle_event(event).await,
            Err(e) => warn!("Skipping malformed host message: {}", e),
        }
    }

    pub async fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::WillAppear { context, payload } => {
                info!("Key appeared: {}", context);
                let action = self.action_for(&context);
                action.on_will_appear(payload.settings).await;
            }
            HostEvent::DidReceiveSettings { context, payload } => {
                debug!("Settings received for {}", context);
                let action = self.action_for(&context);
                action.on_did_receive_settings(payload.settings).await;
            }
            HostEvent::WillDisappear { context } => {
                info!("Key disappeared: {}", context);
                if let Some(mut action) = self.actions.remove(&context) {
                    action.on_will_disappear();
                }
            }
            HostEvent::KeyDown { context } => match self.actions.get_mut(&context) {
                Some(action) => action.on_key_down(),
                None => debug!("Key down for unknown context {}", context),
            },
            HostEvent::Unknown => debug!("Ignoring unhandled host event"),
        }
    }

    /// Stop every key
    pub fn shutdown(&mut self) {
        for (_, mut action) in self.actions.drain() {
            action.on_will_disappear();
        }
        info!("Plugin shut down");
    }

    fn action_for(&mut self, context: &str) -> &mut ScrollTextAction {
        let host = &self.host;
        let defaults = &self.defaults;
        let title_source = &self.title_source;
        self.actions.entry(context.to_string()).or_insert_with(|| {
            let action = ScrollTextAction::new(Arc::new(host.handle(context)), defaults.clone());
            match title_source {
                Some(source) => action.with_title_source(Arc::clone(source)),
                None => action,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::action::host::tests::SharedBuffer;

    fn plugin() -> (SharedBuffer, Plugin<SharedBuffer>) {
        let buffer = SharedBuffer::default();
        let host = Arc::new(JsonLineHost::new(buffer.clone()));
        (buffer, Plugin::new(host, ScrollOptions::default()))
    }

    const APPEAR_A: &str =
        r#"{"event":"willAppear","context":"a","payload":{"settings":{"text":"HELLO","windowSize":3}}}"#;

    #[tokio::test(start_paused = true)]
    async fn test_appear_writes_titles_for_context() {
        let (buffer, mut plugin) = plugin();
        plugin.handle_line(APPEAR_A).await;

        tokio::time::sleep(Duration::from_millis(350)).await;

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["context"], "a");
        assert_eq!(lines[0]["payload"]["title"], "HEL");
        assert_eq!(lines[1]["payload"]["title"], "ELL");
    }

    #[tokio::test(start_paused = true)]
    async fn test_contexts_are_independent() {
        let (buffer, mut plugin) = plugin();
        plugin.handle_line(APPEAR_A).await;
        plugin
            .handle_line(r#"{"event":"willAppear","context":"b","payload":{"settings":{"text":"OK"}}}"#)
            .await;
        plugin.handle_line(r#"{"event":"keyDown","context":"a"}"#).await;

        assert_eq!(plugin.active_count(), 2);
        assert!(plugin.action("a").unwrap().is_paused());
        assert!(!plugin.action("b").unwrap().is_paused());

        let lines = buffer.lines();
        assert_eq!(lines[1]["context"], "b");
        assert_eq!(lines[1]["payload"]["title"], "OK");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disappear_removes_context() {
        let (buffer, mut plugin) = plugin();
        plugin.handle_line(APPEAR_A).await;
        plugin.handle_line(r#"{"event":"willDisappear","context":"a"}"#).await;

        assert_eq!(plugin.active_count(), 0);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(buffer.lines().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_lines_are_skipped() {
        let (buffer, mut plugin) = plugin();
        plugin.handle_line("").await;
        plugin.handle_line("{oops").await;
        plugin.handle_line(r#"{"event":"systemDidWakeUp"}"#).await;
        plugin.handle_line(r#"{"event":"keyDown","context":"nobody"}"#).await;

        assert_eq!(plugin.active_count(), 0);
        assert!(buffer.lines().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_everything() {
        let (buffer, mut plugin) = plugin();
        plugin.handle_line(APPEAR_A).await;
        plugin.shutdown();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(plugin.active_count(), 0);
        assert_eq!(buffer.lines().len(), 1);
    }
}
