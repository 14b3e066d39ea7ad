pub mod braille;
pub mod flappy;
pub mod layout;
pub mod overlay;
pub mod render;

pub use flappy::render_flappy;
pub use overlay::OverlayMessage;
pub use render::{board_layout, render, MatchView};
