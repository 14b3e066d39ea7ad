use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Virtual field, in the same units the physics runs in
pub const FIELD_WIDTH: f32 = 400.0;
pub const FIELD_HEIGHT: f32 = 600.0;
pub const GROUND_HEIGHT: f32 = 100.0;

pub const GRAVITY: f32 = 0.25;
pub const FLAP_VELOCITY: f32 = -5.0;
pub const FLAP_COOLDOWN_FRAMES: u32 = 12;

pub const BIRD_X: f32 = 100.0;
pub const BIRD_SIZE: f32 = 30.0;

pub const PIPE_WIDTH: f32 = 60.0;
pub const PIPE_GAP: f32 = 160.0;
pub const PIPE_MIN_TOP: u32 = 100;
pub const PIPE_MAX_TOP: u32 = 300;
pub const SPAWN_INTERVAL_FRAMES: u32 = 60;

pub const INITIAL_SPEED: f32 = 4.0;
pub const SPEED_PER_POINT: f32 = 0.2;
pub const MAX_SPEED: f32 = 10.0;

/// Axis-aligned box; `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    /// Strict overlap: boxes that only share an edge do not collide
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f32,
    /// Top edge of the collision box
    pub y: f32,
    pub vy: f32,
    pub alive: bool,
}

impl Bird {
    fn new() -> Self {
        Self {
            x: BIRD_X,
            y: FIELD_HEIGHT / 2.0,
            vy: 0.0,
            alive: true,
        }
    }

    /// Collision box, centred horizontally on `x`
    pub fn hitbox(&self) -> Aabb {
        Aabb {
            x: self.x - BIRD_SIZE / 2.0,
            y: self.y,
            w: BIRD_SIZE,
            h: BIRD_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f32,
    /// Height of the upper pipe; the gap starts below it
    pub top_height: f32,
    /// Scroll speed fixed at spawn time
    pub speed: f32,
    pub passed: bool,
}

impl Pipe {
    pub fn new(top_height: f32, speed: f32) -> Self {
        Self {
            x: FIELD_WIDTH,
            top_height,
            speed,
            passed: false,
        }
    }

    pub fn top_box(&self) -> Aabb {
        Aabb {
            x: self.x,
            y: 0.0,
            w: PIPE_WIDTH,
            h: self.top_height,
        }
    }

    pub fn bottom_box(&self) -> Aabb {
        let y = self.top_height + PIPE_GAP;
        Aabb {
            x: self.x,
            y,
            w: PIPE_WIDTH,
            h: FIELD_HEIGHT - GROUND_HEIGHT - y,
        }
    }

    pub fn hits(&self, bird: &Bird) -> bool {
        let hitbox = bird.hitbox();
        hitbox.intersects(&self.top_box()) || hitbox.intersects(&self.bottom_box())
    }

    pub fn off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyPhase {
    /// Title screen, waiting for the first flap
    Welcome,
    Playing,
    /// Frozen last frame with the final score
    GameOver,
}

/// Scroll speed for pipes spawned at this score
pub fn speed_for_score(score: u32) -> f32 {
    (INITIAL_SPEED + score as f32 * SPEED_PER_POINT).min(MAX_SPEED)
}

pub struct FlappyGame {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub high_score: u32,
    /// Speed handed to the next pipe
    pub speed: f32,
    pub phase: FlappyPhase,
    pub(crate) spawn_timer: u32,
    pub(crate) flap_cooldown: u32,
    rng: StdRng,
}

impl FlappyGame {
    pub fn new(high_score: u32) -> Self {
        Self::with_rng(high_score, StdRng::from_entropy())
    }

    /// Deterministic pipe heights for tests
    pub fn with_seed(high_score: u32, seed: u64) -> Self {
        Self::with_rng(high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(high_score: u32, rng: StdRng) -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            high_score,
            speed: INITIAL_SPEED,
            phase: FlappyPhase::Welcome,
            spawn_timer: 0,
            flap_cooldown: 0,
            rng,
        }
    }

    /// Back to the welcome screen; the high score survives
    pub fn reset(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.phase = FlappyPhase::Welcome;
        self.spawn_timer = 0;
        self.flap_cooldown = 0;
    }

    /// The one button: start, flap, or leave the game-over screen
    pub fn flap(&mut self) {
        match self.phase {
            FlappyPhase::Welcome => self.phase = FlappyPhase::Playing,
            FlappyPhase::Playing => {
                if self.flap_cooldown == 0 {
                    self.bird.vy = FLAP_VELOCITY;
                    self.flap_cooldown = FLAP_COOLDOWN_FRAMES;
                }
            }
            FlappyPhase::GameOver => self.reset(),
        }
    }

    pub(crate) fn spawn_pipe(&mut self) {
        let top = self.rng.gen_range(PIPE_MIN_TOP..=PIPE_MAX_TOP) as f32;
        self.pipes.push(Pipe::new(top, self.speed));
    }
}
