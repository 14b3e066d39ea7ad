use glam::Vec2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::layout::FieldLayout;
use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::{
    body::DiscKind,
    state::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH},
    Board, Player, TurnPhase,
};

// Layout: two text rows on top (scores, turn + instruction), the board
// square in the middle, one row of control hints at the bottom
pub const UI_HEADER_ROWS: u16 = 2;
pub const UI_FOOTER_ROWS: u16 = 1;

const AIM_LINE_PER_POWER: f32 = 5.0;
const CENTER_CIRCLE_RADIUS: f32 = 62.0;
const BASELINE_MARKER_RADIUS: f32 = 5.0;

const LINE_COLOR: Color = Color::Rgb(180, 140, 100);
const FRAME_COLOR: Color = Color::Rgb(101, 67, 33);
const POCKET_COLOR: Color = Color::Rgb(70, 70, 70);
const BASELINE_COLOR: Color = Color::Rgb(230, 230, 230);
const CENTER_COLOR: Color = Color::Red;

/// What the match screen needs besides the board itself
pub struct MatchView<'a> {
    pub colors: &'a DisplayConfig,
    /// Display names for player one and player two
    pub names: [&'a str; 2],
    /// False while the computer is taking its turn
    pub human_turn: bool,
    pub overlay: Option<&'a OverlayMessage>,
}

pub fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Layout of the carrom board for a frame of this size
pub fn board_layout(area: Rect) -> FieldLayout {
    FieldLayout::new(
        area,
        Vec2::new(VIRTUAL_WIDTH, VIRTUAL_HEIGHT),
        UI_HEADER_ROWS,
        UI_FOOTER_ROWS,
    )
}

pub fn render(frame: &mut Frame, board: &Board, view: &MatchView) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let layout = board_layout(area);
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);

    draw_board_markings(&mut canvas, board, &layout, view.colors);
    draw_pieces(&mut canvas, board, &layout, view.colors);

    render_braille_canvas(frame, &canvas, area);

    draw_baseline_labels(frame, board, &layout);
    draw_hud(frame, board, view, area);
    draw_controls(frame, area);

    if let Some(message) = view.overlay {
        render_overlay(frame, message, area);
    }
}

fn draw_board_markings(
    canvas: &mut BrailleCanvas,
    board: &Board,
    layout: &FieldLayout,
    colors: &DisplayConfig,
) {
    let geometry = &board.geometry;
    let (min, max) = (geometry.min, geometry.max);

    // Wooden frame, then the playing surface edge
    canvas.set_pen(FRAME_COLOR);
    for inset in [-30.0, -20.0] {
        draw_square(canvas, layout, min + Vec2::splat(inset), max - Vec2::splat(inset));
    }
    canvas.set_pen(rgb(colors.board_color));
    draw_square(canvas, layout, min, max);

    // Decorative inner rectangles
    canvas.set_pen(LINE_COLOR);
    for inset in [30.0, 60.0] {
        draw_square(canvas, layout, min + Vec2::splat(inset), max - Vec2::splat(inset));
    }

    let center = geometry.center();
    canvas.set_pen(CENTER_COLOR);
    let (cx, cy) = layout.to_pixel(center);
    canvas.draw_circle(cx, cy, layout.to_pixels(CENTER_CIRCLE_RADIUS));

    // Diagonals from each pocket towards the centre circle
    canvas.set_pen(LINE_COLOR);
    for pocket in geometry.pockets {
        let dir = (center - pocket).normalize_or_zero();
        let start = pocket + dir * (geometry.pocket_radius + 10.0);
        let end = center - dir * (CENTER_CIRCLE_RADIUS + 10.0);
        draw_segment(canvas, layout, start, end);
    }

    canvas.set_pen(POCKET_COLOR);
    for pocket in geometry.pockets {
        let (px, py) = layout.to_pixel(pocket);
        canvas.fill_circle(px, py, layout.to_pixels(geometry.pocket_radius));
    }
    canvas.set_pen(FRAME_COLOR);
    for pocket in geometry.pockets {
        let (px, py) = layout.to_pixel(pocket);
        canvas.draw_circle(px, py, layout.to_pixels(geometry.pocket_radius + 5.0));
    }

    canvas.set_pen(BASELINE_COLOR);
    for player in [Player::One, Player::Two] {
        let baseline = geometry.baseline(player);
        let left = Vec2::new(baseline.min_x, baseline.y);
        let right = Vec2::new(baseline.max_x, baseline.y);
        draw_segment(canvas, layout, left, right);
        for end in [left, right] {
            let (x, y) = layout.to_pixel(end);
            canvas.fill_circle(x, y, layout.to_pixels(BASELINE_MARKER_RADIUS));
        }
    }
}

fn draw_pieces(
    canvas: &mut BrailleCanvas,
    board: &Board,
    layout: &FieldLayout,
    colors: &DisplayConfig,
) {
    for disc in board.discs_in_play() {
        let color = match disc.kind {
            DiscKind::Black => colors.black_coin_color,
            DiscKind::White => colors.white_coin_color,
            DiscKind::Queen => colors.queen_color,
        };
        canvas.set_pen(rgb(color));
        let (x, y) = layout.to_pixel(disc.body.pos);
        canvas.fill_circle(x, y, layout.to_pixels(disc.body.radius));
    }

    let striker = &board.striker;
    if striker.pocketed() {
        return;
    }

    let color = if striker.aim.placement_legal {
        colors.striker_color
    } else {
        colors.invalid_striker_color
    };
    canvas.set_pen(rgb(color));
    let (x, y) = layout.to_pixel(striker.body.pos);
    canvas.fill_circle(x, y, layout.to_pixels(striker.body.radius));

    if board.phase == TurnPhase::Aiming && striker.aim.power > 0.0 {
        let reach = Vec2::from_angle(striker.aim.angle) * striker.aim.power * AIM_LINE_PER_POWER;
        canvas.set_pen(rgb(colors.aim_color));
        draw_segment(canvas, layout, striker.body.pos, striker.body.pos + reach);
    }
}

fn draw_square(canvas: &mut BrailleCanvas, layout: &FieldLayout, min: Vec2, max: Vec2) {
    let (x0, y0) = layout.to_pixel(min);
    let (x1, y1) = layout.to_pixel(max);
    canvas.draw_rect(x0, y0, x1, y1);
}

fn draw_segment(canvas: &mut BrailleCanvas, layout: &FieldLayout, from: Vec2, to: Vec2) {
    let (x0, y0) = layout.to_pixel(from);
    let (x1, y1) = layout.to_pixel(to);
    canvas.draw_line(x0, y0, x1, y1);
}

pub(super) fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect) {
    // One line per cell row; consecutive cells of the same colour share a span
    for y in 0..canvas.height() {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_color = canvas.color_at(0, y);

        for x in 0..canvas.width() {
            let color = canvas.color_at(x, y);
            if color != run_color && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_color),
                ));
            }
            run_color = color;
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_color)));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn draw_baseline_labels(frame: &mut Frame, board: &Board, layout: &FieldLayout) {
    let area = layout.area();
    for (player, text, offset) in [(Player::One, "P1", 20.0), (Player::Two, "P2", -30.0)] {
        let baseline = board.geometry.baseline(player);
        let (column, row) = layout.to_cell(Vec2::new(baseline.center_x(), baseline.y + offset));
        if row >= area.bottom() || column + 2 > area.right() {
            continue;
        }

        let label = Paragraph::new(text).style(Style::default().fg(Color::Gray));
        frame.render_widget(
            label,
            Rect {
                x: column.saturating_sub(1),
                y: row,
                width: 2,
                height: 1,
            },
        );
    }
}

/// Instruction line for the acting player
pub fn phase_instruction(phase: TurnPhase, human_turn: bool) -> &'static str {
    match (phase, human_turn) {
        (TurnPhase::Placing, true) => "Move to position striker, click to select",
        (TurnPhase::Aiming, true) => "Move to aim, click to shoot",
        (TurnPhase::Placing | TurnPhase::Aiming, false) => "Computer is thinking...",
        (TurnPhase::Settling, _) => "Wait for pieces to stop moving...",
        (TurnPhase::MatchOver, _) => "Match over",
    }
}

fn draw_hud(frame: &mut Frame, board: &Board, view: &MatchView, area: Rect) {
    let score_style = |player: Player| {
        let style = Style::default().fg(Color::White);
        if board.turn == player && board.phase != TurnPhase::MatchOver {
            style.fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    };

    let scores = Line::from(vec![
        Span::styled(
            format!("{}: {}", view.names[0], board.score(Player::One)),
            score_style(Player::One),
        ),
        Span::styled("   |   ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}: {}", view.names[1], board.score(Player::Two)),
            score_style(Player::Two),
        ),
    ]);

    let status = Line::from(vec![
        Span::styled(
            format!("{}'s Turn", view.names[board.turn.index()]),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  Phase: {}  ", board.phase.name()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            phase_instruction(board.phase, view.human_turn),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let hud = Paragraph::new(vec![scores, status]).alignment(Alignment::Center);
    frame.render_widget(
        hud,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: UI_HEADER_ROWS.min(area.height),
        },
    );
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let controls = Paragraph::new("Mouse: move/aim  Click/Space: select  Arrows: nudge  H: Help  Q: Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    let controls_area = Rect {
        x: area.x,
        y: area.bottom() - 1,
        width: area.width,
        height: 1,
    };

    frame.render_widget(controls, controls_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_phase_instructions() {
        assert_eq!(
            phase_instruction(TurnPhase::Placing, true),
            "Move to position striker, click to select"
        );
        assert_eq!(
            phase_instruction(TurnPhase::Aiming, false),
            "Computer is thinking..."
        );
        assert_eq!(
            phase_instruction(TurnPhase::Settling, true),
            "Wait for pieces to stop moving..."
        );
    }

    #[test]
    fn test_render_shows_scores_and_turn() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut board = Board::new(&PhysicsConfig::default());
        board.scores = [7, 3];
        let colors = DisplayConfig::default();
        let view = MatchView {
            colors: &colors,
            names: ["Player 1", "Computer"],
            human_turn: true,
            overlay: None,
        };

        terminal.draw(|f| render(f, &board, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let header: String = buffer.content[..buffer.area.width as usize]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(header.contains("Player 1: 7"));
        assert!(header.contains("Computer: 3"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        let board = Board::new(&PhysicsConfig::default());
        let colors = DisplayConfig::default();
        let overlay = OverlayMessage::info(vec!["It's a Tie!".to_string()]);
        let view = MatchView {
            colors: &colors,
            names: ["Player 1", "Player 2"],
            human_turn: true,
            overlay: Some(&overlay),
        };

        terminal.draw(|f| render(f, &board, &view)).unwrap();
    }
}
