/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell contains a 2×4 grid of Braille dots
/// This gives us 2× horizontal and 4× vertical resolution
///
/// A cell has one foreground colour: whatever pen drew its last dot.
use ratatui::style::Color;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
    colors: Vec<Vec<Color>>,
    pen: Color,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            colors: vec![vec![Color::White; width]; height],
            pen: Color::White,
        }
    }

    /// Colour for every dot drawn from now on
    pub fn set_pen(&mut self, color: Color) {
        self.pen = color;
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.colors[cell_y][cell_x] = self.pen;
    }

    /// Like `set_pixel`, but silently drops points left of or above the canvas
    fn plot(&mut self, pixel_x: i32, pixel_y: i32) {
        if pixel_x >= 0 && pixel_y >= 0 {
            self.set_pixel(pixel_x as usize, pixel_y as usize);
        }
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// One-pixel outline of a rectangle given two opposite corners
    pub fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.draw_line(x0, y0, x1, y0);
        self.draw_line(x1, y0, x1, y1);
        self.draw_line(x1, y1, x0, y1);
        self.draw_line(x0, y1, x0, y0);
    }

    /// Bresenham line between two pixels, both ends included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle outline
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        if radius <= 0 {
            self.plot(cx, cy);
            return;
        }

        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while x >= y {
            for (px, py) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.plot(cx + px, cy + py);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Solid disc; always at least one dot so tiny bodies stay visible
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.plot(cx + dx, cy + dy);
                }
            }
        }
        self.plot(cx, cy);
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn color_at(&self, cell_x: usize, cell_y: usize) -> Color {
        if cell_x >= self.width || cell_y >= self.height {
            return Color::Reset;
        }
        self.colors[cell_y][cell_x]
    }

    /// Width in terminal cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in terminal cells
    pub fn height(&self) -> usize {
        self.height
    }
}
