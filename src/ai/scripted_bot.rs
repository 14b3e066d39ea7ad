// Scripted opponent: random legal placement, aim at the best target

use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::Bot;
use crate::game::{Board, TurnPhase};

/// Configuration for a scripted bot's behavior
#[derive(Debug, Clone)]
pub struct ScriptedBotConfig {
    pub name: String,
    pub placement_attempts: u32,   // Baseline samples before settling for an overlap
    pub angle_jitter: f32,         // Max aim error either way, radians
    pub min_power: f32,
    pub max_power: f32,
    pub think_frames: u32,         // Pause before placing and before shooting
}

/// Non-learning opponent.
///
/// Placement samples the baseline uniformly and keeps the first legal spot;
/// if every attempt overlaps a disc the last one is used anyway. Aiming goes
/// for the queen, then a random coin, then the board centre.
pub struct ScriptedBot {
    config: ScriptedBotConfig,
    rng: StdRng,
    waited: u32,
}

impl ScriptedBot {
    pub fn new(config: ScriptedBotConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic bot for replays and tests
    pub fn with_seed(config: ScriptedBotConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ScriptedBotConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            waited: 0,
        }
    }

    /// Sloppy aim, few placement tries
    pub fn easy() -> ScriptedBotConfig {
        ScriptedBotConfig {
            name: "Easy".to_string(),
            placement_attempts: 8,
            angle_jitter: 0.35,
            min_power: 6.0,
            max_power: 22.0,
            think_frames: 45,
        }
    }

    pub fn medium() -> ScriptedBotConfig {
        ScriptedBotConfig {
            name: "Medium".to_string(),
            placement_attempts: 20,
            angle_jitter: 0.2,
            min_power: 10.0,
            max_power: 20.0,
            think_frames: 30,
        }
    }

    pub fn hard() -> ScriptedBotConfig {
        ScriptedBotConfig {
            name: "Hard".to_string(),
            placement_attempts: 40,
            angle_jitter: 0.08,
            min_power: 12.0,
            max_power: 20.0,
            think_frames: 20,
        }
    }

    /// Try random baseline spots; true if a legal one was found
    fn place(&mut self, board: &mut Board) -> bool {
        let baseline = board.baseline();

        for _ in 0..self.config.placement_attempts {
            let x = self.rng.gen_range(baseline.min_x..=baseline.max_x);
            board.place_striker(x);
            if board.striker.aim.placement_legal {
                return true;
            }
        }

        false
    }

    fn choose_target(&mut self, board: &Board) -> Vec2 {
        if let Some(queen) = board.queen_in_play() {
            return queen.body.pos;
        }

        let candidates: Vec<Vec2> = board.discs_in_play().map(|disc| disc.body.pos).collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(|| board.geometry.center())
    }

    fn shoot(&mut self, board: &mut Board) {
        let target = self.choose_target(board);
        let delta = target - board.striker.body.pos;
        let jitter = self.config.angle_jitter;

        let angle = delta.y.atan2(delta.x) + self.rng.gen_range(-jitter..=jitter);
        let power = self
            .rng
            .gen_range(self.config.min_power..=self.config.max_power);

        board.striker.set_aim(angle, power);
        board.shoot();
    }

    /// Count down the think delay; true once it is time to act
    fn ready(&mut self) -> bool {
        if self.waited < self.config.think_frames {
            self.waited += 1;
            return false;
        }
        self.waited = 0;
        true
    }
}

impl Bot for ScriptedBot {
    fn act(&mut self, board: &mut Board) {
        match board.phase {
            TurnPhase::Placing => {
                if !self.ready() {
                    // Sit on the baseline while thinking
                    let centre = board.baseline().center_x();
                    board.place_striker(centre);
                    return;
                }
                let legal = self.place(board);
                if !legal {
                    tracing::debug!(bot = %self.config.name, "no legal placement found, using last attempt");
                }
                board.lock_placement(false);
            }
            TurnPhase::Aiming => {
                if self.ready() {
                    self.shoot(board);
                }
            }
            TurnPhase::Settling | TurnPhase::MatchOver => self.waited = 0,
        }
    }

    fn reset(&mut self) {
        self.waited = 0;
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use crate::game::body::{Disc, DiscKind};
    use crate::game::Player;

    fn precise() -> ScriptedBotConfig {
        ScriptedBotConfig {
            name: "Test".to_string(),
            placement_attempts: 20,
            angle_jitter: 0.0,
            min_power: 15.0,
            max_power: 15.0,
            think_frames: 0,
        }
    }

    fn computer_turn() -> Board {
        let mut board = Board::new(&PhysicsConfig::default());
        board.turn = Player::Two;
        board
    }

    fn shot_angle(board: &Board) -> f32 {
        let vel = board.striker.body.vel;
        vel.y.atan2(vel.x)
    }

    #[test]
    fn test_places_on_own_baseline_then_aims() {
        let mut board = computer_turn();
        let mut bot = ScriptedBot::with_seed(precise(), 7);

        bot.act(&mut board);

        assert_eq!(board.phase, TurnPhase::Aiming);
        assert!(board.striker.aim.placement_legal);
        assert_eq!(board.striker.body.pos.y, 100.0);
    }

    #[test]
    fn test_accepts_illegal_spot_when_baseline_is_blocked() {
        let mut board = computer_turn();
        // Wall of coins along the whole top baseline
        let mut x = 90.0;
        while x <= 510.0 {
            board.discs.push(Disc::new(Vec2::new(x, 100.0), DiscKind::Black));
            x += 20.0;
        }
        let mut bot = ScriptedBot::with_seed(precise(), 3);

        bot.act(&mut board);

        assert_eq!(board.phase, TurnPhase::Aiming);
        assert!(!board.striker.aim.placement_legal);
    }

    #[test]
    fn test_shoots_at_queen_first() {
        let mut board = computer_turn();
        let mut bot = ScriptedBot::with_seed(precise(), 11);

        bot.act(&mut board);
        let from = board.striker.body.pos;
        bot.act(&mut board);

        assert_eq!(board.phase, TurnPhase::Settling);
        let to_queen = board.discs[0].body.pos - from;
        let expected = to_queen.y.atan2(to_queen.x);
        assert!((shot_angle(&board) - expected).abs() < 1e-4);
        assert!((board.striker.body.vel.length() - 15.0 * 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_targets_remaining_coin_without_queen() {
        let mut board = computer_turn();
        for disc in &mut board.discs {
            disc.body.removed = true;
        }
        board.discs[5].body.removed = false;
        let target = board.discs[5].body.pos;
        let mut bot = ScriptedBot::with_seed(precise(), 5);

        bot.act(&mut board);
        let from = board.striker.body.pos;
        bot.act(&mut board);

        let to_target = target - from;
        assert!((shot_angle(&board) - to_target.y.atan2(to_target.x)).abs() < 1e-4);
    }

    #[test]
    fn test_falls_back_to_centre_on_empty_board() {
        let mut board = computer_turn();
        for disc in &mut board.discs {
            disc.body.removed = true;
        }
        let mut bot = ScriptedBot::with_seed(precise(), 9);

        bot.act(&mut board);
        let from = board.striker.body.pos;
        bot.act(&mut board);

        let to_centre = board.geometry.center() - from;
        assert!((shot_angle(&board) - to_centre.y.atan2(to_centre.x)).abs() < 1e-4);
    }

    #[test]
    fn test_jitter_and_power_stay_in_bounds() {
        let config = ScriptedBot::medium();
        for seed in 0..50 {
            let mut board = computer_turn();
            let mut bot = ScriptedBot::with_seed(
                ScriptedBotConfig {
                    think_frames: 0,
                    ..config.clone()
                },
                seed,
            );

            bot.act(&mut board);
            let from = board.striker.body.pos;
            bot.act(&mut board);

            let to_queen = board.discs[0].body.pos - from;
            let error = shot_angle(&board) - to_queen.y.atan2(to_queen.x);
            assert!(error.abs() <= 0.2 + 1e-4);

            let power = board.striker.body.vel.length() / 1.5;
            assert!(power >= 10.0 - 1e-3 && power <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_think_delay() {
        let mut board = computer_turn();
        let mut bot = ScriptedBot::with_seed(
            ScriptedBotConfig {
                think_frames: 2,
                ..precise()
            },
            1,
        );

        bot.act(&mut board);
        bot.act(&mut board);
        assert_eq!(board.phase, TurnPhase::Placing);

        bot.act(&mut board);
        assert_eq!(board.phase, TurnPhase::Aiming);
    }

    #[test]
    fn test_striker_waits_on_baseline_while_thinking() {
        let mut board = computer_turn();
        board.striker.body.pos = Vec2::new(420.0, 300.0);
        let mut bot = ScriptedBot::with_seed(
            ScriptedBotConfig {
                think_frames: 10,
                ..precise()
            },
            4,
        );

        bot.act(&mut board);

        assert_eq!(board.phase, TurnPhase::Placing);
        assert_eq!(board.striker.body.pos, Vec2::new(300.0, 100.0));
    }

    #[test]
    fn test_same_seed_same_placement() {
        let mut first = computer_turn();
        let mut second = computer_turn();

        ScriptedBot::with_seed(precise(), 42).act(&mut first);
        ScriptedBot::with_seed(precise(), 42).act(&mut second);

        assert_eq!(first.striker.body.pos, second.striker.body.pos);
    }
}
