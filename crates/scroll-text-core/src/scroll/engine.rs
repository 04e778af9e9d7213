//! L3 Molecular Layer: Scroll engine
//!
//! Combines cursor movement and frame rendering with two Tokio timers: a
//! repeating advance timer and a one-shot dwell timer armed after each
//! completed cycle. Both are tasks owned by the engine and cancelled by
//! aborting their handles.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use super::frame::render_frame;
use super::mode::{ScrollDirection, ScrollMode};
use super::motion::Cursor;
use super::options::{validate_interval_ms, validate_window_size, ScrollOptions};
use super::sink::FrameSink;
use crate::Result;

/// Mutable scroll state shared with the timer tasks
#[derive(Debug)]
struct EngineState {
    text: String,
    /// Length of `text` in chars
    len: usize,
    window_size: usize,
    interval: Duration,
    mode: ScrollMode,
    direction: ScrollDirection,
    cursor: Cursor,
    pause_after_scroll: Duration,
    /// A dwell is in progress
    is_paused: bool,
}

impl EngineState {
    fn current_frame(&self) -> String {
        render_frame(&self.text, self.window_size, self.cursor.position, self.mode)
    }
}

struct Shared {
    state: Mutex<EngineState>,
    dwell: Mutex<Option<JoinHandle<()>>>,
    sink: Box<dyn FrameSink>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dwell(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.dwell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// One firing of the advance timer
    fn tick(self: &Arc<Self>) {
        let (frame, dwell) = {
            let mut state = self.state();
            if state.is_paused {
                trace!("Tick skipped: dwell in progress");
                return;
            }

            let previous = state.cursor;
            let (len, window_size, mode, direction) =
                (state.len, state.window_size, state.mode, state.direction);
            state.cursor.advance(len, window_size, mode, direction);

            let completed = !state.pause_after_scroll.is_zero()
                && state
                    .cursor
                    .completed_cycle(&previous, len, window_size, mode, direction);
            if completed {
                state.is_paused = true;
            }

            trace!(position = state.cursor.position, "Tick");
            (state.current_frame(), completed.then_some(state.pause_after_scroll))
        };

        self.sink.emit(&frame);

        if let Some(duration) = dwell {
            self.arm_dwell(duration);
        }
    }

    fn arm_dwell(self: &Arc<Self>, duration: Duration) {
        debug!("Cycle complete, pausing for {}ms", duration.as_millis());
        let shared = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            time::sleep(duration).await;
            if let Some(shared) = shared.upgrade() {
                shared.state().is_paused = false;
                debug!("Dwell finished, scrolling resumes");
            }
        });

        if let Some(previous) = self.dwell().replace(handle) {
            previous.abort();
        }
    }

    fn cancel_dwell(&self) {
        if let Some(handle) = self.dwell().take() {
            handle.abort();
        }
    }
}

/// Spawn the repeating advance timer. The first firing comes one full
/// period after the call.
fn spawn_ticker(shared: Weak<Shared>, period: Duration) -> JoinHandle<()> {
    let first = Instant::now() + period;
    tokio::spawn(async move {
        let mut interval = time::interval_at(first, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            match shared.upgrade() {
                Some(shared) => shared.tick(),
                None => break,
            }
        }
    })
}

/// Scrolling-text frame generator
///
/// Owned by a single controller. `start` and the setters must be called from
/// within a Tokio runtime; the timer tasks run on that runtime and hand each
/// frame to the sink.
///
/// ```ignore
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
/// let mut engine = ScrollEngine::new(ScrollOptions::new("Now playing"), tx)?;
/// engine.start();
/// while let Some(frame) = rx.recv().await {
///     println!("{frame}");
/// }
/// ```
pub struct ScrollEngine {
    shared: Arc<Shared>,
    ticker: Option<JoinHandle<()>>,
}

impl ScrollEngine {
    /// Create a stopped engine
    ///
    /// Fails with a configuration error when the window size or interval is
    /// zero.
    pub fn new(options: ScrollOptions, sink: impl FrameSink) -> Result<Self> {
        options.validate()?;

        let state = EngineState {
            len: options.text.chars().count(),
            interval: options.interval(),
            pause_after_scroll: options.pause_after_scroll(),
            text: options.text,
            window_size: options.window_size,
            mode: options.mode,
            direction: options.direction,
            cursor: Cursor::default(),
            is_paused: false,
        };

        Ok(Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                dwell: Mutex::new(None),
                sink: Box::new(sink),
            }),
            ticker: None,
        })
    }

    /// Start the advance timer. No-op when already running.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let interval = self.shared.state().interval;
        debug!("Scroll engine started ({}ms interval)", interval.as_millis());
        self.ticker = Some(spawn_ticker(Arc::downgrade(&self.shared), interval));
    }

    /// Stop the advance timer and clear any dwell. The position is kept.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            debug!("Scroll engine stopped");
        }
        self.shared.cancel_dwell();
        self.shared.state().is_paused = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// True while a pause-after-scroll dwell is in progress
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.shared.state().is_paused
    }

    /// Frame for the current state, without advancing
    pub fn current_frame(&self) -> String {
        self.shared.state().current_frame()
    }

    pub fn position(&self) -> usize {
        self.shared.state().cursor.position
    }

    pub fn text(&self) -> String {
        self.shared.state().text.clone()
    }

    pub fn window_size(&self) -> usize {
        self.shared.state().window_size
    }

    pub fn interval(&self) -> Duration {
        self.shared.state().interval
    }

    pub fn mode(&self) -> ScrollMode {
        self.shared.state().mode
    }

    pub fn direction(&self) -> ScrollDirection {
        self.shared.state().direction
    }

    pub fn pause_after_scroll(&self) -> Duration {
        self.shared.state().pause_after_scroll
    }

    /// Replace the text and rewind to the start
    pub fn set_text(&mut self, text: impl Into<String>) {
        let mut state = self.shared.state();
        state.text = text.into();
        state.len = state.text.chars().count();
        state.cursor.position = 0;
    }

    /// Change the window width. The position is kept.
    pub fn set_window_size(&mut self, window_size: usize) -> Result<()> {
        validate_window_size(window_size)?;
        self.shared.state().window_size = window_size;
        Ok(())
    }

    /// Change the tick interval, restarting the timer when running
    pub fn set_interval_ms(&mut self, interval_ms: u64) -> Result<()> {
        validate_interval_ms(interval_ms)?;
        self.shared.state().interval = Duration::from_millis(interval_ms);
        if self.is_running() {
            self.stop();
            self.start();
        }
        Ok(())
    }

    /// Switch mode, rewinding to the start travelling forward
    pub fn set_mode(&mut self, mode: ScrollMode) {
        let mut state = self.shared.state();
        state.mode = mode;
        state.cursor = Cursor::default();
    }

    /// Switch loop direction and rewind to the start
    pub fn set_direction(&mut self, direction: ScrollDirection) {
        let mut state = self.shared.state();
        state.direction = direction;
        state.cursor.position = 0;
    }

    /// Change the dwell length. A dwell already in progress keeps its length.
    pub fn set_pause_after_scroll(&mut self, pause_ms: u64) {
        self.shared.state().pause_after_scroll = Duration::from_millis(pause_ms);
    }
}

impl Drop for ScrollEngine {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.shared.cancel_dwell();
    }
}

impl std::fmt::Debug for ScrollEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("state", &*self.shared.state())
            .field("running", &self.is_running())
            .finish()
    }
}
