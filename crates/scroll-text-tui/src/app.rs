use std::time::Duration;

use scroll_text_core::{ScrollDirection, ScrollEngine, ScrollMode, ScrollOptions};
use tokio::sync::mpsc;

use crate::input::Action;
use crate::theme::Theme;

const MIN_INTERVAL_MS: u64 = 50;
const INTERVAL_STEP_MS: u64 = 50;

/// Key preview state
///
/// The engine writes frames into a channel; the draw loop drains it before
/// every redraw, so the widget always shows the latest frame.
pub struct App {
    pub engine: ScrollEngine,
    frames: mpsc::UnboundedReceiver<String>,
    /// Latest frame shown on the key
    pub frame: String,
    /// Frames received since start
    pub frames_shown: u64,
    /// Scrolling stopped by the user
    pub paused: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    /// Build the engine and start scrolling. Must run inside a Tokio runtime.
    pub fn new(options: ScrollOptions, theme: Theme) -> scroll_text_core::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let mut engine = ScrollEngine::new(options, tx)?;
        let frame = engine.current_frame();
        engine.start();

        Ok(Self {
            engine,
            frames: rx,
            frame,
            frames_shown: 0,
            paused: false,
            should_quit: false,
            theme,
        })
    }

    /// Pull every frame emitted since the last call
    pub fn drain_frames(&mut self) {
        while let Ok(frame) = self.frames.try_recv() {
            self.frame = frame;
            self.frames_shown += 1;
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => self.toggle_pause(),
            Action::CycleMode => {
                let mode = match self.engine.mode() {
                    ScrollMode::Loop => ScrollMode::Bounce,
                    ScrollMode::Bounce => ScrollMode::Loop,
                };
                self.engine.set_mode(mode);
                self.refresh_frame();
            }
            Action::ToggleDirection => {
                let direction = match self.engine.direction() {
                    ScrollDirection::Left => ScrollDirection::Right,
                    ScrollDirection::Right => ScrollDirection::Left,
                };
                self.engine.set_direction(direction);
                self.refresh_frame();
            }
            Action::Faster => {
                let interval = self.interval_ms().saturating_sub(INTERVAL_STEP_MS);
                self.set_interval(interval.max(MIN_INTERVAL_MS));
            }
            Action::Slower => {
                let interval = self.interval_ms() + INTERVAL_STEP_MS;
                self.set_interval(interval);
            }
            Action::Wider => self.set_window(self.engine.window_size() + 1),
            Action::Narrower => self.set_window(self.engine.window_size().saturating_sub(1)),
            Action::None => {}
        }
    }

    fn toggle_pause(&mut self) {
        if self.paused {
            self.engine.start();
        } else {
            self.engine.stop();
        }
        self.paused = !self.paused;
    }

    fn interval_ms(&self) -> u64 {
        self.engine.interval().as_millis() as u64
    }

    fn set_interval(&mut self, interval_ms: u64) {
        if let Err(e) = self.engine.set_interval_ms(interval_ms) {
            tracing::warn!("Interval not changed: {}", e);
        }
    }

    fn set_window(&mut self, window_size: usize) {
        match self.engine.set_window_size(window_size) {
            Ok(()) => self.refresh_frame(),
            Err(e) => tracing::warn!("Window not changed: {}", e),
        }
    }

    fn refresh_frame(&mut self) {
        self.frame = self.engine.current_frame();
    }

    /// Short state label for the status bar
    pub fn state_label(&self) -> &'static str {
        if self.paused {
            "PAUSED"
        } else if self.engine.is_paused() {
            "DWELL"
        } else {
            "RUNNING"
        }
    }

    pub fn interval(&self) -> Duration {
        self.engine.interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(ScrollOptions::new("HELLO").with_window_size(3), Theme::default()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_keeps_latest_frame() {
        let mut app = app();
        assert_eq!(app.frame, "HEL");

        tokio::time::sleep(Duration::from_millis(650)).await;
        app.drain_frames();

        assert_eq!(app.frame, "LLO");
        assert_eq!(app.frames_shown, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_pause() {
        let mut app = app();
        app.apply(Action::TogglePause);
        assert!(app.paused);
        assert_eq!(app.state_label(), "PAUSED");
        assert!(!app.engine.is_running());

        app.apply(Action::TogglePause);
        assert!(app.engine.is_running());
        assert_eq!(app.state_label(), "RUNNING");
    }

    #[tokio::test(start_paused = true)]
    async fn test_adjustments() {
        let mut app = app();
        app.apply(Action::Wider);
        assert_eq!(app.frame, "HELL");

        app.apply(Action::CycleMode);
        assert_eq!(app.engine.mode(), ScrollMode::Bounce);

        app.apply(Action::Faster);
        assert_eq!(app.interval(), Duration::from_millis(250));

        for _ in 0..10 {
            app.apply(Action::Faster);
        }
        assert_eq!(app.interval(), Duration::from_millis(MIN_INTERVAL_MS));

        for _ in 0..10 {
            app.apply(Action::Narrower);
        }
        assert_eq!(app.engine.window_size(), 1);

        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
