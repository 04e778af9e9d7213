//! L4 Atomic Layer: Cursor movement
//!
//! One step of the scroll position per tick, plus the test for whether that
//! step completed a full cycle.

use super::mode::{ScrollDirection, ScrollMode};

/// Scroll position and bounce travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the first visible character (loop: wrap cursor in `0..=len`)
    pub position: usize,
    /// Travelling towards the end of the text (bounce only)
    pub bounce_forward: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            position: 0,
            bounce_forward: true,
        }
    }
}

impl Cursor {
    /// Advance one step. No-op when the text fits in the window.
    pub fn advance(&mut self, len: usize, window_size: usize, mode: ScrollMode, direction: ScrollDirection) {
        if len <= window_size {
            return;
        }

        match mode {
            ScrollMode::Loop => {
                let span = len + 1;
                self.position = match direction {
                    ScrollDirection::Left => (self.position + 1) % span,
                    ScrollDirection::Right => (self.position + len) % span,
                };
            }
            ScrollMode::Bounce => {
                let far_end = len - window_size;
                if self.bounce_forward {
                    self.position += 1;
                    if self.position > far_end {
                        self.position = far_end;
                        self.bounce_forward = false;
                    }
                } else if self.position == 0 {
                    self.bounce_forward = true;
                } else {
                    self.position -= 1;
                }
            }
        }
    }

    /// Whether the step from `previous` to `self` completed a cycle
    ///
    /// Loop completes on the tick that wraps past the boundary it started
    /// from. Bounce completes whenever the step lands on the end it was
    /// travelling towards.
    pub fn completed_cycle(
        &self,
        previous: &Cursor,
        len: usize,
        window_size: usize,
        mode: ScrollMode,
        direction: ScrollDirection,
    ) -> bool {
        match mode {
            ScrollMode::Loop => match direction {
                ScrollDirection::Left => previous.position == len,
                ScrollDirection::Right => previous.position == 0,
            },
            ScrollMode::Bounce => {
                let far_end = len.saturating_sub(window_size);
                (previous.bounce_forward && self.position == far_end)
                    || (!previous.bounce_forward && self.position == 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(steps: usize, len: usize, window: usize, mode: ScrollMode, direction: ScrollDirection) -> Vec<usize> {
        let mut cursor = Cursor::default();
        (0..steps)
            .map(|_| {
                cursor.advance(len, window, mode, direction);
                cursor.position
            })
            .collect()
    }

    #[test]
    fn test_loop_left_wraps_modulo_len_plus_one() {
        assert_eq!(
            walk(7, 5, 3, ScrollMode::Loop, ScrollDirection::Left),
            vec![1, 2, 3, 4, 5, 0, 1]
        );
    }

    #[test]
    fn test_loop_right_runs_backwards() {
        assert_eq!(
            walk(7, 5, 3, ScrollMode::Loop, ScrollDirection::Right),
            vec![5, 4, 3, 2, 1, 0, 5]
        );
    }

    #[test]
    fn test_bounce_clamps_at_both_ends() {
        assert_eq!(
            walk(8, 5, 3, ScrollMode::Bounce, ScrollDirection::Left),
            vec![1, 2, 2, 1, 0, 0, 1, 2]
        );
    }

    #[test]
    fn test_fitting_text_never_moves() {
        assert_eq!(walk(3, 3, 3, ScrollMode::Loop, ScrollDirection::Left), vec![0, 0, 0]);
        assert_eq!(walk(3, 2, 4, ScrollMode::Bounce, ScrollDirection::Left), vec![0, 0, 0]);
    }

    #[test]
    fn test_bounce_direction_ignored() {
        assert_eq!(
            walk(5, 6, 2, ScrollMode::Bounce, ScrollDirection::Right),
            walk(5, 6, 2, ScrollMode::Bounce, ScrollDirection::Left)
        );
    }

    #[test]
    fn test_loop_cycle_completion() {
        let mut cursor = Cursor { position: 5, bounce_forward: true };
        let previous = cursor;
        cursor.advance(5, 3, ScrollMode::Loop, ScrollDirection::Left);
        assert!(cursor.completed_cycle(&previous, 5, 3, ScrollMode::Loop, ScrollDirection::Left));

        let mut cursor = Cursor::default();
        let previous = cursor;
        cursor.advance(5, 3, ScrollMode::Loop, ScrollDirection::Left);
        assert!(!cursor.completed_cycle(&previous, 5, 3, ScrollMode::Loop, ScrollDirection::Left));

        let mut cursor = Cursor::default();
        let previous = cursor;
        cursor.advance(5, 3, ScrollMode::Loop, ScrollDirection::Right);
        assert!(cursor.completed_cycle(&previous, 5, 3, ScrollMode::Loop, ScrollDirection::Right));
    }

    // Pinned: bounce reports completion both when it first lands on an end
    // and on the following clamped step that flips direction.
    #[test]
    fn test_bounce_completes_twice_per_end() {
        let mut cursor = Cursor::default();
        let mut completions = Vec::new();
        for _ in 0..6 {
            let previous = cursor;
            cursor.advance(5, 3, ScrollMode::Bounce, ScrollDirection::Left);
            completions.push(cursor.completed_cycle(&previous, 5, 3, ScrollMode::Bounce, ScrollDirection::Left));
        }
        assert_eq!(completions, vec![false, true, true, false, true, true]);
    }
}
