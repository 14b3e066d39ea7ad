mod ai;
mod common;
mod controller;
mod flappy;
mod local;

pub use ai::run_game_vs_ai;
pub use flappy::run_flappy;
pub use local::run_game_local;
