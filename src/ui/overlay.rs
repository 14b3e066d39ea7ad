// Overlay message system for displaying centered text on screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    /// Lines of text to display
    pub lines: Vec<String>,
    /// Optional title for the overlay box
    pub title: Option<String>,
    /// Style preset for the overlay
    pub style: OverlayStyle,
}

/// Predefined styles for overlay messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Neutral result or prompt (white/gray)
    Info,
    /// The computer won (yellow)
    Warning,
    /// A human won (green)
    Success,
}

impl OverlayMessage {
    /// Create an info-style message
    pub fn info(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Info,
        }
    }

    /// Create a warning-style message
    pub fn warning(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Warning,
        }
    }

    /// Create a success-style message
    pub fn success(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Success,
        }
    }

    /// Set the title for this message
    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Get the color for the border and title based on style
    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::Cyan,
            OverlayStyle::Warning => Color::Yellow,
            OverlayStyle::Success => Color::Green,
        }
    }

    /// Get the color for the message text based on style
    fn text_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::White,
            OverlayStyle::Warning => Color::Yellow,
            OverlayStyle::Success => Color::LightGreen,
        }
    }
}

/// Render an overlay message in the center of the screen
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    // Calculate overlay dimensions based on content
    let max_line_length = message
        .lines
        .iter()
        .chain(message.title.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    // Add padding for borders and spacing
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(4));
    let overlay_height = (message.lines.len() as u16 + 4).min(area.height.saturating_sub(4));
    if overlay_width < 3 || overlay_height < 3 {
        return;
    }

    // Center the overlay
    let overlay_area = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    // Create the border block
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(format!(" {} ", title));
    }

    frame.render_widget(block, overlay_area);

    // Render the message text inside the block
    let inner_area = overlay_area.inner(ratatui::layout::Margin::new(2, 1));

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(message.text_color()),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_overlay_draws_title_and_lines() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let message = OverlayMessage::success(vec!["Player 1 Wins!".to_string()])
            .with_title("Match Over".to_string());

        terminal
            .draw(|f| render_overlay(f, &message, f.area()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Match Over"));
        assert!(text.contains("Player 1 Wins!"));
    }

    #[test]
    fn test_overlay_skipped_when_no_room() {
        let mut terminal = Terminal::new(TestBackend::new(6, 4)).unwrap();
        let message = OverlayMessage::warning(vec!["Computer Wins!".to_string()]);

        terminal
            .draw(|f| render_overlay(f, &message, f.area()))
            .unwrap();

        assert!(!screen_text(&terminal).contains("Computer"));
    }
}
