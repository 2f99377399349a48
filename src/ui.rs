//! UI rendering module
//!
//! Implements the ratatui Widget trait for the App struct, laying out the
//! fixed header and footer regions around the (still empty) body.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Implements the Widget trait for App references
///
/// This enables the App to be directly rendered as a Widget,
/// creating a clean interface for the main rendering loop
impl Widget for &App {
    /// Renders the entire application UI
    ///
    /// Splits the frame into header, body and footer regions
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        render_header(self, chunks[0], buf);
        render_footer(chunks[2], buf);
    }
}

/// Renders the header bar with the active profile and region
fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::raw("Profile: "),
        Span::styled(
            app.config.profile.as_deref().unwrap_or("default").to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  Region: "),
        Span::styled(
            app.config.region.as_deref().unwrap_or("not set").to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if app.config.debug {
        spans.push(Span::styled("  DEBUG", Style::default().fg(Color::Red)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .title(" AWSome ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}

/// Renders the footer bar with the key hints
fn render_footer(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": quit"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;

    fn rendered_text(config: Configuration) -> String {
        let app = App::new(config);
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        Widget::render(&app, area, &mut buf);
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[tokio::test]
    async fn header_shows_title_profile_and_region() {
        let text = rendered_text(Configuration {
            config_file: None,
            profile: Some("production".to_string()),
            region: Some("eu-west-1".to_string()),
            debug: false,
        });
        assert!(text.contains("AWSome"));
        assert!(text.contains("production"));
        assert!(text.contains("eu-west-1"));
        assert!(!text.contains("DEBUG"));
    }

    #[tokio::test]
    async fn header_falls_back_to_placeholders() {
        let text = rendered_text(Configuration::default());
        assert!(text.contains("default"));
        assert!(text.contains("not set"));
    }

    #[tokio::test]
    async fn debug_mode_is_marked_in_the_header() {
        let text = rendered_text(Configuration {
            debug: true,
            ..Configuration::default()
        });
        assert!(text.contains("DEBUG"));
    }

    #[tokio::test]
    async fn footer_shows_the_quit_hint() {
        let text = rendered_text(Configuration::default());
        assert!(text.contains("quit"));
    }
}
