use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::host::ActionHandle;
use super::settings::ScrollTextSettings;
use super::title::TitleSource;
use crate::scroll::{ScrollEngine, ScrollOptions};

/// Controller for one scrolling-text key
///
/// Owns at most one live engine. Settings changes either update the engine
/// in place (pause-after-scroll only) or replace it.
pub struct ScrollTextAction {
    handle: Arc<dyn ActionHandle>,
    defaults: ScrollOptions,
    title_source: Option<Arc<dyn TitleSource>>,
    scroller: Option<ScrollEngine>,
    last_settings: ScrollTextSettings,
    /// Scrolling stopped by a key press
    paused: bool,
}

impl ScrollTextAction {
    pub fn new(handle: Arc<dyn ActionHandle>, defaults: ScrollOptions) -> Self {
        Self {
            handle,
            defaults,
            title_source: None,
            scroller: None,
            last_settings: ScrollTextSettings::default(),
            paused: false,
        }
    }

    /// Set the source consulted when the configured text is empty
    pub fn with_title_source(mut self, source: Arc<dyn TitleSource>) -> Self {
        self.title_source = Some(source);
        self
    }

    pub fn engine(&self) -> Option<&ScrollEngine> {
        self.scroller.as_ref()
    }

    /// True while scrolling is stopped by a key press
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn settings(&self) -> &ScrollTextSettings {
        &self.last_settings
    }

    pub async fn on_will_appear(&mut self, settings: ScrollTextSettings) {
        self.last_settings = settings;
        self.setup_scroller().await;
    }

    pub async fn on_did_receive_settings(&mut self, settings: ScrollTextSettings) {
        let previous = std::mem::replace(&mut self.last_settings, settings);

        if let Some(scroller) = self.scroller.as_mut() {
            if previous.differs_only_in_pause(&self.last_settings) {
                let pause_ms = self
                    .last_settings
                    .pause_after_scroll
                    .unwrap_or(self.defaults.pause_after_scroll_ms);
                debug!("Updating pause after scroll to {}ms", pause_ms);
                scroller.set_pause_after_scroll(pause_ms);
                return;
            }
        }

        self.setup_scroller().await;
    }

    pub fn on_will_disappear(&mut self) {
        if let Some(mut scroller) = self.scroller.take() {
            scroller.stop();
            debug!("Scroller released");
        }
    }

    /// Toggle scrolling on key press
    pub fn on_key_down(&mut self) {
        if self.paused {
            if let Some(scroller) = self.scroller.as_mut() {
                scroller.start();
            }
            self.paused = false;
            info!("Scrolling resumed");
        } else {
            if let Some(scroller) = self.scroller.as_mut() {
                scroller.stop();
            }
            self.paused = true;
            info!("Scrolling paused");
        }
    }

    /// Replace the engine with one built from the last settings
    async fn setup_scroller(&mut self) {
        let mut options = self.last_settings.resolve(&self.defaults);

        if options.text.trim().is_empty() {
            if let Some(title) = self.fetch_title().await {
                options.text = title;
            }
        }

        if let Some(mut previous) = self.scroller.take() {
            previous.stop();
        }

        let handle = Arc::clone(&self.handle);
        let sink = move |frame: &str| handle.set_title(frame);
        let mut scroller = match ScrollEngine::new(options, sink) {
            Ok(scroller) => scroller,
            Err(e) => {
                error!("Rejected scroll settings: {}", e);
                return;
            }
        };

        if !self.paused {
            scroller.start();
        }
        self.handle.set_title(&scroller.current_frame());

        info!(
            "Scroller ready: {} chars, window {}, {}ms, {} {}",
            scroller.text().chars().count(),
            scroller.window_size(),
            scroller.interval().as_millis(),
            scroller.mode(),
            scroller.direction()
        );
        self.scroller = Some(scroller);
    }

    async fn fetch_title(&self) -> Option<String> {
        let source = self.title_source.as_ref()?;
        match source.fetch_title().await {
            Ok(Some(title)) => {
                debug!("Using fetched title: {}", title);
                Some(title)
            }
            Ok(None) => {
                debug!("Title source returned nothing, keeping configured text");
                None
            }
            Err(e) => {
                warn!("Failed to fetch title: {}", e);
                None
            }
        }
    }
}

impl Drop for ScrollTextAction {
    fn drop(&mut self) {
        self.on_will_disappear();
    }
}
