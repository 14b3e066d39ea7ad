// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::state::MenuState;

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    // Draw background
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    // Create layout with title area and menu area
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Title area
            Constraint::Min(7),     // Menu items
            Constraint::Length(3),  // Controls hint
        ])
        .split(area);

    // Draw ASCII art title
    let title_style = Style::default()
        .fg(Color::Rgb(205, 133, 63))
        .add_modifier(Modifier::BOLD);
    let title_text: Vec<Line> = [
        "",
        " ██████╗ █████╗ ██████╗ ██████╗  ██████╗ ███╗   ███╗",
        "██╔════╝██╔══██╗██╔══██╗██╔══██╗██╔═══██╗████╗ ████║",
        "██║     ███████║██████╔╝██████╔╝██║   ██║██╔████╔██║",
        "██║     ██╔══██║██╔══██╗██╔══██╗██║   ██║██║╚██╔╝██║",
        "╚██████╗██║  ██║██║  ██║██║  ██║╚██████╔╝██║ ╚═╝ ██║",
        " ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝ ╚═╝     ╚═╝",
    ]
    .into_iter()
    .map(|row| Line::from(Span::styled(row, title_style)))
    .collect();

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Draw menu items
    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "  > " } else { "    " };
            let text = format!("{}{}", prefix, item.display_text());

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    // Draw controls hint
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("H", Style::default().fg(Color::Gray)),
        Span::styled(": Help  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);

    if menu_state.in_bot_selection_mode {
        render_bot_dialog(frame, menu_state);
    }
}

/// Render the difficulty picker over the menu
fn render_bot_dialog(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    // Create centered dialog box
    let dialog_width = 56.min(area.width.saturating_sub(4));
    let dialog_height = (menu_state.bot_types.len() as u16 + 6).min(area.height);
    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    // Draw dialog border
    let block = Block::default()
        .title(" Choose Difficulty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    frame.render_widget(block, dialog_area);

    let inner = dialog_area.inner(ratatui::layout::Margin::new(2, 1));
    let dialog_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(menu_state.bot_types.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let options: Vec<Line> = menu_state
        .bot_types
        .iter()
        .enumerate()
        .map(|(i, bot)| {
            if i == menu_state.selected_bot_index {
                Line::from(Span::styled(
                    format!("> {}", bot.display_name()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", bot.display_name()),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(options).alignment(Alignment::Center),
        dialog_chunks[0],
    );

    let description = Paragraph::new(Span::styled(
        menu_state.selected_bot().description(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(description, dialog_chunks[2]);

    // Draw hint
    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Back", Style::default().fg(Color::DarkGray)),
    ]);

    let hint_widget = Paragraph::new(hint).alignment(Alignment::Center);
    frame.render_widget(hint_widget, dialog_chunks[3]);
}

/// Rules and controls text, one entry per screen line
pub const INSTRUCTIONS: &[&str] = &[
    "OBJECTIVE:",
    "- Pocket the coins and the queen to score",
    "- Black coins: 1 point each",
    "- White coins: 2 points each",
    "- Queen (red): 5 points",
    "- First to 21 points wins! If the board empties first, the higher score wins",
    "",
    "HOW TO PLAY:",
    "1. Player 1 plays from the bottom, Player 2 (or the computer) from the top",
    "2. Position the striker by moving your mouse along your baseline",
    "3. Click to select the striker (it turns red where it overlaps a coin)",
    "4. Move the mouse to aim: the yellow line shows direction and power",
    "5. Click again to shoot",
    "6. Players take turns after each shot, once everything stops moving",
    "",
    "CONTROLS:",
    "- Mouse movement: position / aim the striker",
    "- Left click or Space: select / shoot",
    "- Arrow keys: nudge the pointer",
    "- H: this screen   R: rematch   Q: back to menu",
];

/// Render the instructions screen
pub fn render_instructions(frame: &mut Frame) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "How to Play",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body: Vec<Line> = INSTRUCTIONS
        .iter()
        .map(|line| {
            if line.ends_with(':') {
                // Section headers
                Line::from(Span::styled(
                    *line,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(*line, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let text_width = INSTRUCTIONS
        .iter()
        .map(|line| line.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .min(chunks[1].width);
    let text_area = Rect {
        x: chunks[1].x + (chunks[1].width - text_width) / 2,
        width: text_width,
        ..chunks[1]
    };
    frame.render_widget(Paragraph::new(body), text_area);

    let back = Paragraph::new(Span::styled(
        "Esc / Enter: Back",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(back, chunks[2]);
}
