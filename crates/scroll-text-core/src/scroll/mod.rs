//! Scrolling-text engine for button labels
//!
//! Produces successive fixed-width frames of a longer string, in loop or
//! bounce mode, with an optional dwell after each completed cycle.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `mode` - Scroll mode and direction
//! - `options` - Engine parameters and defaults
//! - `motion` - Cursor advance and cycle detection
//! - `frame` - Pure frame rendering and preview
//!
//! ## L3 Molecular Layer
//! - `engine` - Timer-driven engine combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use scroll_text_core::scroll::{ScrollEngine, ScrollOptions, ScrollMode};
//!
//! let options = ScrollOptions::new("Now playing: Song")
//!     .with_window_size(6)
//!     .with_mode(ScrollMode::Bounce);
//! let mut engine = ScrollEngine::new(options, |frame: &str| println!("{frame}"))?;
//!
//! // Show something before the first tick
//! println!("{}", engine.current_frame());
//! engine.start();
//! ```

// L4 Atomic Layer
pub mod frame;
pub mod mode;
pub mod motion;
pub mod options;
pub mod sink;

// L3 Molecular Layer
pub mod engine;

pub use engine::ScrollEngine;
pub use frame::{preview_frame, render_frame};
pub use mode::{ScrollDirection, ScrollMode};
pub use motion::Cursor;
pub use options::ScrollOptions;
pub use sink::FrameSink;
