use anyhow::Result;

use scroll_text_core::{preview_frame, ScrollMode, ScrollOptions};

/// Print one frame per position, delimited so trailing filler is visible
pub fn run(options: &ScrollOptions, from: usize, count: Option<usize>) -> Result<()> {
    options.validate()?;

    let len = options.text.chars().count();
    let count = count.unwrap_or_else(|| cycle_positions(len, options.window_size, options.mode));

    for position in from..from + count {
        let frame = preview_frame(
            &options.text,
            options.window_size,
            position,
            options.mode,
            options.direction,
        );
        println!("{:>4} |{}|", position, frame);
    }

    Ok(())
}

/// Number of distinct positions the engine visits
fn cycle_positions(len: usize, window_size: usize, mode: ScrollMode) -> usize {
    if len <= window_size {
        return 1;
    }
    match mode {
        ScrollMode::Loop => len + 1,
        ScrollMode::Bounce => len - window_size + 1,
    }
}
