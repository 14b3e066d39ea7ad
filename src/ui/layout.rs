// Mapping between a virtual playing field and the terminal
//
// The field keeps its aspect ratio: Braille dots are close to square, so one
// scale factor serves both axes and the field is centred in the space left
// between the header and footer rows.

use glam::Vec2;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    area: Rect,
    scale: f32,  // Braille pixels per virtual unit
    offset: Vec2, // Pixel position of the field's origin
}

impl FieldLayout {
    pub fn new(area: Rect, field: Vec2, header_rows: u16, footer_rows: u16) -> Self {
        let rows = area.height.saturating_sub(header_rows + footer_rows);
        let pixel_width = area.width as f32 * 2.0;
        let pixel_height = rows as f32 * 4.0;

        let scale = (pixel_width / field.x)
            .min(pixel_height / field.y)
            .max(f32::EPSILON);

        let offset = Vec2::new(
            (pixel_width - field.x * scale) / 2.0,
            header_rows as f32 * 4.0 + (pixel_height - field.y * scale) / 2.0,
        );

        Self {
            area,
            scale,
            offset,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Virtual point to canvas pixel
    pub fn to_pixel(&self, point: Vec2) -> (i32, i32) {
        let p = self.offset + point * self.scale;
        (p.x.round() as i32, p.y.round() as i32)
    }

    /// Virtual length to pixels
    pub fn to_pixels(&self, length: f32) -> i32 {
        (length * self.scale).round() as i32
    }

    /// Virtual point to the terminal cell showing it
    pub fn to_cell(&self, point: Vec2) -> (u16, u16) {
        let p = (self.offset + point * self.scale).max(Vec2::ZERO);
        (
            self.area.x + (p.x / 2.0) as u16,
            self.area.y + (p.y / 4.0) as u16,
        )
    }

    /// Terminal cell (as reported by a mouse event) to the virtual point at
    /// its centre
    pub fn to_virtual(&self, column: u16, row: u16) -> Vec2 {
        let pixel = Vec2::new(
            column.saturating_sub(self.area.x) as f32 * 2.0 + 1.0,
            row.saturating_sub(self.area.y) as f32 * 4.0 + 2.0,
        );
        (pixel - self.offset) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_layout() -> FieldLayout {
        FieldLayout::new(Rect::new(0, 0, 150, 40), Vec2::new(600.0, 600.0), 2, 1)
    }

    #[test]
    fn test_field_fits_height_and_is_centred() {
        let layout = board_layout();

        // 37 rows = 148 pixels tall; 300 pixels wide
        let (left, top) = layout.to_pixel(Vec2::ZERO);
        let (right, bottom) = layout.to_pixel(Vec2::new(600.0, 600.0));

        assert_eq!(bottom - top, 148);
        assert_eq!(right - left, 148);
        assert_eq!(top, 8);
        assert_eq!(left, (300 - 148) / 2);
    }

    #[test]
    fn test_cell_round_trip_stays_within_a_cell() {
        let layout = board_layout();
        let point = Vec2::new(300.0, 500.0);

        let (column, row) = layout.to_cell(point);
        let back = layout.to_virtual(column, row);

        // One cell is 2x4 pixels; at ~0.25 px per unit that is 8x16 units
        assert!((back.x - point.x).abs() <= 8.2);
        assert!((back.y - point.y).abs() <= 16.3);
    }

    #[test]
    fn test_degenerate_terminal_does_not_divide_by_zero() {
        let layout = FieldLayout::new(Rect::new(0, 0, 10, 2), Vec2::new(600.0, 600.0), 2, 1);
        let point = layout.to_virtual(3, 1);
        assert!(point.x.is_finite());
    }
}
