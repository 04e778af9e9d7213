use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Height of the key including borders
const KEY_HEIGHT: u16 = 5;
/// Horizontal padding inside the key border
const KEY_PADDING: u16 = 2;

pub struct KeyFaceWidget;

impl KeyFaceWidget {
    /// Render the current frame on a square-ish key centered in `area`
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let label_width = app.engine.window_size().max(app.frame.chars().count()) as u16;
        let key_width = (label_width + 2 * KEY_PADDING + 2).min(area.width);
        let key_area = centered_rect(key_width, KEY_HEIGHT.min(area.height), area);

        let border_color = if app.paused {
            app.theme.paused
        } else if app.engine.is_paused() {
            app.theme.dwell
        } else {
            app.theme.accent
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(app.theme.bg0));

        let inner = block.inner(key_area);
        frame.render_widget(block, key_area);

        // Vertically center the single label line
        let label_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1.min(inner.height));
        let label = Line::from(Span::styled(
            app.frame.clone(),
            Style::default()
                .fg(app.theme.fg0)
                .bg(app.theme.bg1)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), label_area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(15, 3, 10, 4));
        assert_eq!(centered_rect(50, 4, area).x, 0);
    }
}
