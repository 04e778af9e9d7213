//! L4 Atomic Layer: Frame rendering
//!
//! Pure functions mapping `(text, window, position, mode)` to the characters
//! shown on the key. Lengths and offsets count Unicode scalar values.

use std::iter;

use super::mode::{ScrollDirection, ScrollMode};

/// Filler shown where the window runs past the end of the text
pub const FILLER: char = ' ';

/// Render the visible window of `text` starting at `position`
///
/// Text that fits in the window is returned unchanged. When the window
/// overruns the end, loop mode composes `tail + filler + head` and keeps the
/// first `window_size` characters, so the head never becomes visible in the
/// overrun frames; bounce mode pads the tail with filler.
pub fn render_frame(text: &str, window_size: usize, position: usize, mode: ScrollMode) -> String {
    let len = text.chars().count();
    if len <= window_size {
        return text.to_string();
    }

    let start = position.min(len);
    let end = start + window_size;
    if end <= len {
        return text.chars().skip(start).take(window_size).collect();
    }

    let overflow = end - len;
    let tail = text.chars().skip(start);
    let filler = iter::repeat(FILLER).take(overflow);
    match mode {
        ScrollMode::Loop => tail
            .chain(filler)
            .chain(text.chars().take(overflow))
            .take(window_size)
            .collect(),
        ScrollMode::Bounce => tail.chain(filler).collect(),
    }
}

/// Frame a given configuration would show at `position`, without an engine
///
/// Used by settings surfaces to preview an offset. The direction does not
/// change the window contents, only the order in which a running engine
/// visits positions.
pub fn preview_frame(
    text: &str,
    window_size: usize,
    position: usize,
    mode: ScrollMode,
    _direction: ScrollDirection,
) -> String {
    render_frame(text, window_size, position, mode)
}
