// Side-scrolling flap-through-the-pipes game

pub mod physics;
pub mod state;

pub use physics::update;
pub use state::{FlappyGame, FlappyPhase};
