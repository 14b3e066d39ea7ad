// Side-scroller screen

use glam::Vec2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::layout::FieldLayout;
use super::overlay::{render_overlay, OverlayMessage};
use crate::flappy::state::{
    Aabb, BIRD_SIZE, FIELD_HEIGHT, FIELD_WIDTH, GROUND_HEIGHT,
};
use crate::flappy::{FlappyGame, FlappyPhase};

const HEADER_ROWS: u16 = 1;
const FOOTER_ROWS: u16 = 1;

const SKY: Color = Color::Rgb(135, 206, 235);
const CLOUD: Color = Color::White;
const PIPE: Color = Color::Rgb(0, 160, 0);
const GROUND: Color = Color::Rgb(0, 128, 0);
const BIRD: Color = Color::Yellow;
const BEAK: Color = Color::Red;

pub fn render_flappy(frame: &mut Frame, game: &FlappyGame) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let layout = FieldLayout::new(
        area,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        HEADER_ROWS,
        FOOTER_ROWS,
    );
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);

    // Sky outline and a few clouds
    canvas.set_pen(SKY);
    let (x0, y0) = layout.to_pixel(Vec2::ZERO);
    let (x1, y1) = layout.to_pixel(Vec2::new(FIELD_WIDTH, FIELD_HEIGHT));
    canvas.draw_rect(x0, y0, x1, y1);

    canvas.set_pen(CLOUD);
    for i in 0..3 {
        let base = 100.0 + i as f32 * 150.0;
        for (dx, dy) in [(0.0, 100.0), (30.0, 100.0), (15.0, 80.0)] {
            let (cx, cy) = layout.to_pixel(Vec2::new(base + dx, dy));
            canvas.draw_circle(cx, cy, layout.to_pixels(30.0));
        }
    }

    canvas.set_pen(PIPE);
    for pipe in &game.pipes {
        fill_box(&mut canvas, &layout, pipe.top_box());
        fill_box(&mut canvas, &layout, pipe.bottom_box());
    }

    canvas.set_pen(GROUND);
    fill_box(
        &mut canvas,
        &layout,
        Aabb {
            x: 0.0,
            y: FIELD_HEIGHT - GROUND_HEIGHT,
            w: FIELD_WIDTH,
            h: GROUND_HEIGHT,
        },
    );

    // Bird body centred in its box, beak pointing right
    let centre = Vec2::new(game.bird.x, game.bird.y + BIRD_SIZE / 2.0);
    canvas.set_pen(BIRD);
    let (bx, by) = layout.to_pixel(centre);
    canvas.fill_circle(bx, by, layout.to_pixels(BIRD_SIZE / 2.0));
    canvas.set_pen(BEAK);
    let (tip_x, tip_y) = layout.to_pixel(centre + Vec2::new(BIRD_SIZE / 2.0 + 10.0, 0.0));
    let (root_x, _) = layout.to_pixel(centre + Vec2::new(BIRD_SIZE / 2.0, 0.0));
    canvas.draw_line(root_x, tip_y, tip_x, tip_y);

    super::render::render_braille_canvas(frame, &canvas, area);

    draw_scoreline(frame, game, area);

    let hint = Paragraph::new("Space: flap  Q: Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    if area.height > 0 {
        frame.render_widget(
            hint,
            Rect {
                x: area.x,
                y: area.bottom() - 1,
                width: area.width,
                height: 1,
            },
        );
    }

    if let Some(message) = phase_message(game) {
        render_overlay(frame, &message, area);
    }
}

fn fill_box(canvas: &mut BrailleCanvas, layout: &FieldLayout, aabb: Aabb) {
    let (x0, y0) = layout.to_pixel(Vec2::new(aabb.x, aabb.y));
    let (x1, y1) = layout.to_pixel(Vec2::new(aabb.x + aabb.w, aabb.y + aabb.h));
    let (x0, y0) = (x0.max(0) as usize, y0.max(0) as usize);
    let (x1, y1) = (x1.max(0) as usize, y1.max(0) as usize);
    canvas.fill_rect(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
}

fn draw_scoreline(frame: &mut Frame, game: &FlappyGame, area: Rect) {
    let text = format!(
        "Score: {}   High Score: {}   Speed: {:.1}x",
        game.score, game.high_score, game.speed
    );
    let scoreline = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(
        scoreline,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: HEADER_ROWS.min(area.height),
        },
    );
}

/// Title and game-over texts
pub fn phase_message(game: &FlappyGame) -> Option<OverlayMessage> {
    match game.phase {
        FlappyPhase::Welcome => Some(
            OverlayMessage::info(vec![
                "Press SPACE to start".to_string(),
                "".to_string(),
                format!("High Score: {}", game.high_score),
            ])
            .with_title("FLAPPY BIRD".to_string()),
        ),
        FlappyPhase::Playing => None,
        FlappyPhase::GameOver => Some(
            OverlayMessage::info(vec![
                format!("Final Score: {}", game.score),
                format!("High Score: {}", game.high_score),
                "".to_string(),
                "Press SPACE to restart  |  Q for Menu".to_string(),
            ])
            .with_title("Game Over".to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_messages_follow_phase() {
        let mut game = FlappyGame::with_seed(12, 0);
        let welcome = phase_message(&game).unwrap();
        assert_eq!(welcome.title.as_deref(), Some("FLAPPY BIRD"));
        assert!(welcome.lines.contains(&"High Score: 12".to_string()));

        game.phase = FlappyPhase::Playing;
        assert!(phase_message(&game).is_none());

        game.phase = FlappyPhase::GameOver;
        game.score = 4;
        let over = phase_message(&game).unwrap();
        assert!(over.lines.contains(&"Final Score: 4".to_string()));
    }

    #[test]
    fn test_render_with_pipes() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut game = FlappyGame::with_seed(0, 3);
        game.phase = FlappyPhase::Playing;
        game.spawn_pipe();

        terminal.draw(|f| render_flappy(f, &game)).unwrap();

        let header: String = terminal.backend().buffer().content[..80]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(header.contains("Score: 0"));
    }
}
