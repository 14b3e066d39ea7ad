pub mod body;
pub mod input;
pub mod physics;
pub mod state;

pub use input::{poll_input, InputAction, Pointer};
pub use physics::{update_with_events, PhysicsEvents};
pub use state::{Board, Outcome, Player, PointerInput, TurnPhase};
