use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state_label();
        let state_color = match state {
            "PAUSED" => app.theme.paused,
            "DWELL" => app.theme.dwell,
            _ => app.theme.running,
        };

        let status_text = format!(
            " {} {} | {}ms | window {} | pos {} | frames {} ",
            app.engine.mode(),
            app.engine.direction(),
            app.interval().as_millis(),
            app.engine.window_size(),
            app.engine.position(),
            app.frames_shown,
        );

        let help_hint = " q:quit space:pause m:mode d:dir +/-:speed </>:width ";
        let used = state.len() + 2 + status_text.len() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", state),
                Style::default().fg(app.theme.bg0).bg(state_color),
            ),
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
