// Carrom Arcade configuration types
// All settings default to the classic tuning of the board

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub flappy: FlappyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Select the striker / shoot / flap
    pub confirm: String,

    // Keyboard pointer for terminals without mouse-move reporting
    pub pointer_left: String,
    pub pointer_right: String,
    pub pointer_up: String,
    pub pointer_down: String,

    // Game controls
    pub quit: String,
    pub rematch: String,
    pub help: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            confirm: "Space".to_string(),
            pointer_left: "Left".to_string(),
            pointer_right: "Right".to_string(),
            pointer_up: "Up".to_string(),
            pointer_down: "Down".to_string(),
            quit: "Q".to_string(),
            rematch: "R".to_string(),
            help: "H".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Velocity multiplier applied every frame (rolling friction)
    pub friction: f32,

    // Both velocity components under this snap to a dead stop
    pub stop_epsilon: f32,

    // Fraction of speed kept after bouncing off the frame
    pub wall_restitution: f32,

    // Pointer distance per unit of shot power
    pub power_scale: f32,

    // Shot power cap
    pub max_power: f32,

    // Launch speed = power * multiplier
    pub power_multiplier: f32,

    // Score required to win
    pub winning_score: u32,

    // Keyboard pointer step in board units
    pub pointer_step: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 0.98,
            stop_epsilon: 0.1,
            wall_restitution: 0.8,
            power_scale: 15.0,
            max_power: 30.0,
            power_multiplier: 1.5,
            winning_score: 21,
            pointer_step: 10.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Default computer difficulty: "easy", "medium", "hard"
    pub difficulty: String,

    // Frames the computer waits before placing and before shooting
    pub think_frames: u32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            difficulty: "medium".to_string(),
            think_frames: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Board frame and markings
    pub board_color: [u8; 3],

    // Coin colors (RGB values 0-255)
    pub black_coin_color: [u8; 3],
    pub white_coin_color: [u8; 3],
    pub queen_color: [u8; 3],

    // Striker, and striker on an illegal spot
    pub striker_color: [u8; 3],
    pub invalid_striker_color: [u8; 3],

    // Aim line while aiming
    pub aim_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            board_color: [205, 133, 63],           // Light brown
            black_coin_color: [120, 120, 120],     // Gray, black is invisible on black
            white_coin_color: [255, 253, 208],     // Cream
            queen_color: [255, 0, 0],              // Red
            striker_color: [255, 255, 255],        // White
            invalid_striker_color: [255, 120, 120], // Pink
            aim_color: [255, 255, 0],              // Yellow
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FlappyConfig {
    // Override for the high score file (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_score_path: Option<String>,
}
