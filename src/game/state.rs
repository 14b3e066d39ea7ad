use std::f32::consts::PI;

use glam::Vec2;

use crate::config::PhysicsConfig;

use super::body::{Baseline, Disc, DiscKind, ShotTuning, Striker};

// Virtual coordinate system - the board is laid out in a 600×600 field and
// scaled to whatever the terminal offers at render time
pub const VIRTUAL_WIDTH: f32 = 600.0;
pub const VIRTUAL_HEIGHT: f32 = 600.0;

const BOARD_MARGIN: f32 = 50.0;
const BASELINE_INSET: f32 = 50.0;
const ARRANGEMENT_INNER: f32 = 40.0;
const ARRANGEMENT_OUTER: f32 = 70.0;
const COINS_PER_RING: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Plays from the bottom baseline
    One,
    /// Plays from the top baseline
    Two,
}

impl Player {
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Striker slides along the acting player's baseline
    Placing,
    /// Striker is armed; pointer sets direction and power
    Aiming,
    /// Shot released, physics runs until everything stops
    Settling,
    MatchOver,
}

impl TurnPhase {
    pub fn name(&self) -> &'static str {
        match self {
            TurnPhase::Placing => "Placing",
            TurnPhase::Aiming => "Aiming",
            TurnPhase::Settling => "Settling",
            TurnPhase::MatchOver => "Match Over",
        }
    }
}

/// Result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

/// One frame's worth of pointer input, already mapped into board space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pointer: Vec2,
    /// Edge-triggered: true only on the frame the click/confirm happened
    pub confirm: bool,
}

/// Fixed board layout: playing surface, pockets and baselines
#[derive(Debug, Clone, PartialEq)]
pub struct BoardGeometry {
    pub min: Vec2,
    pub max: Vec2,
    pub pockets: [Vec2; 4],
    pub pocket_radius: f32,
}

impl BoardGeometry {
    pub fn standard() -> Self {
        let size = VIRTUAL_WIDTH.min(VIRTUAL_HEIGHT) - 2.0 * BOARD_MARGIN;
        let min = Vec2::new(
            (VIRTUAL_WIDTH - size) / 2.0,
            (VIRTUAL_HEIGHT - size) / 2.0,
        );
        let max = min + Vec2::splat(size);

        Self {
            min,
            max,
            pockets: [
                min,
                Vec2::new(max.x, min.y),
                Vec2::new(min.x, max.y),
                max,
            ],
            pocket_radius: size / 20.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn baseline(&self, player: Player) -> Baseline {
        let y = match player {
            Player::One => self.max.y - BASELINE_INSET,
            Player::Two => self.min.y + BASELINE_INSET,
        };
        Baseline {
            y,
            min_x: self.min.x + BASELINE_INSET,
            max_x: self.max.x - BASELINE_INSET,
        }
    }

    /// Index of the pocket that swallows a body at `pos`, if any
    pub fn pocket_at(&self, pos: Vec2) -> Option<usize> {
        self.pockets
            .iter()
            .position(|pocket| pos.distance(*pocket) < self.pocket_radius)
    }
}

/// Tunables the board reads every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub friction: f32,
    pub stop_epsilon: f32,
    pub wall_restitution: f32,
    pub winning_score: u32,
    pub shot: ShotTuning,
}

impl Rules {
    pub fn from_config(physics: &PhysicsConfig) -> Self {
        Self {
            friction: physics.friction,
            stop_epsilon: physics.stop_epsilon,
            wall_restitution: physics.wall_restitution,
            winning_score: physics.winning_score,
            shot: ShotTuning {
                power_scale: physics.power_scale,
                max_power: physics.max_power,
                power_multiplier: physics.power_multiplier,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    pub geometry: BoardGeometry,
    pub discs: Vec<Disc>,
    pub striker: Striker,
    pub scores: [u32; 2],
    pub turn: Player,
    pub phase: TurnPhase,
    pub rules: Rules,
}

impl Board {
    pub fn new(physics: &PhysicsConfig) -> Self {
        let rules = Rules::from_config(physics);
        let geometry = BoardGeometry::standard();
        let striker = Self::fresh_striker(&geometry, &[], Player::One, rules.shot);

        let mut board = Self {
            geometry,
            discs: Vec::new(),
            striker,
            scores: [0, 0],
            turn: Player::One,
            phase: TurnPhase::Placing,
            rules,
        };
        board.setup_discs();
        board
    }

    /// Reset the whole board for a rematch
    pub fn reset_game(&mut self) {
        self.scores = [0, 0];
        self.turn = Player::One;
        self.phase = TurnPhase::Placing;
        self.setup_discs();
    }

    /// Queen in the middle, a ring of blacks, a staggered ring of whites
    fn setup_discs(&mut self) {
        let center = self.geometry.center();
        self.discs.clear();
        self.discs.push(Disc::new(center, DiscKind::Queen));

        for i in 0..COINS_PER_RING {
            let angle = 2.0 * PI * i as f32 / COINS_PER_RING as f32;
            self.discs.push(Disc::new(
                center + Vec2::from_angle(angle) * ARRANGEMENT_INNER,
                DiscKind::Black,
            ));
        }

        for i in 0..COINS_PER_RING {
            let angle = 2.0 * PI * i as f32 / COINS_PER_RING as f32 + PI / COINS_PER_RING as f32;
            self.discs.push(Disc::new(
                center + Vec2::from_angle(angle) * ARRANGEMENT_OUTER,
                DiscKind::White,
            ));
        }

        self.striker = Self::fresh_striker(&self.geometry, &self.discs, self.turn, self.rules.shot);
    }

    fn fresh_striker(
        geometry: &BoardGeometry,
        discs: &[Disc],
        player: Player,
        tuning: ShotTuning,
    ) -> Striker {
        let baseline = geometry.baseline(player);
        let mut striker = Striker::new(Vec2::new(baseline.center_x(), baseline.y), tuning);
        striker.place(&baseline, discs, baseline.center_x());
        striker
    }

    pub fn baseline(&self) -> Baseline {
        self.geometry.baseline(self.turn)
    }

    /// Move the striker along the acting player's baseline
    pub fn place_striker(&mut self, pointer_x: f32) {
        let baseline = self.baseline();
        self.striker.place(&baseline, &self.discs, pointer_x);
    }

    /// Lock the striker in place and start aiming.
    ///
    /// With `require_legal` an overlapping placement is refused and the
    /// board stays in `Placing`.
    pub fn lock_placement(&mut self, require_legal: bool) -> bool {
        if self.phase != TurnPhase::Placing {
            return false;
        }
        if require_legal && !self.striker.aim.placement_legal {
            return false;
        }
        self.striker.aim.armed = true;
        self.phase = TurnPhase::Aiming;
        true
    }

    /// Release the armed striker
    pub fn shoot(&mut self) -> bool {
        if self.phase != TurnPhase::Aiming {
            return false;
        }
        self.striker.shoot();
        self.phase = TurnPhase::Settling;
        true
    }

    /// Apply a human player's input for this frame
    pub fn handle_input(&mut self, input: &PointerInput) {
        match self.phase {
            TurnPhase::Placing => {
                self.place_striker(input.pointer.x);
                if input.confirm {
                    self.lock_placement(true);
                }
            }
            TurnPhase::Aiming => {
                self.striker.aim(input.pointer);
                if input.confirm {
                    self.shoot();
                }
            }
            TurnPhase::Settling | TurnPhase::MatchOver => {}
        }
    }

    pub fn all_stopped(&self) -> bool {
        !self.striker.body.is_moving()
            && self
                .discs
                .iter()
                .filter(|disc| disc.in_play())
                .all(|disc| !disc.body.is_moving())
    }

    /// Hand the board to the other player once a shot has settled
    pub(crate) fn end_turn(&mut self) {
        self.turn = self.turn.other();
        self.phase = TurnPhase::Placing;

        if self.striker.pocketed() {
            self.striker =
                Self::fresh_striker(&self.geometry, &self.discs, self.turn, self.rules.shot);
        } else {
            self.striker.body.vel = Vec2::ZERO;
        }
    }

    pub fn discs_in_play(&self) -> impl Iterator<Item = &Disc> {
        self.discs.iter().filter(|disc| disc.in_play())
    }

    pub fn queen_in_play(&self) -> Option<&Disc> {
        self.discs_in_play().find(|disc| disc.kind == DiscKind::Queen)
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Has someone won? Pure query, safe to call every frame.
    pub fn check_winner(&self) -> Option<Outcome> {
        let target = self.rules.winning_score;
        if self.score(Player::One) >= target {
            return Some(Outcome::Winner(Player::One));
        }
        if self.score(Player::Two) >= target {
            return Some(Outcome::Winner(Player::Two));
        }

        if self.discs.iter().all(|disc| !disc.in_play()) {
            let (one, two) = (self.score(Player::One), self.score(Player::Two));
            return Some(if one > two {
                Outcome::Winner(Player::One)
            } else if two > one {
                Outcome::Winner(Player::Two)
            } else {
                Outcome::Tie
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(&PhysicsConfig::default())
    }

    fn click(x: f32, y: f32) -> PointerInput {
        PointerInput {
            pointer: Vec2::new(x, y),
            confirm: true,
        }
    }

    fn hover(x: f32, y: f32) -> PointerInput {
        PointerInput {
            pointer: Vec2::new(x, y),
            confirm: false,
        }
    }

    #[test]
    fn test_initial_layout() {
        let board = board();

        assert_eq!(board.discs.len(), 19);
        let queens = board
            .discs
            .iter()
            .filter(|d| d.kind == DiscKind::Queen)
            .count();
        assert_eq!(queens, 1);
        assert_eq!(board.discs[0].body.pos, Vec2::new(300.0, 300.0));
        assert_eq!(board.phase, TurnPhase::Placing);
        assert_eq!(board.turn, Player::One);
        assert_eq!(board.striker.body.pos, Vec2::new(300.0, 500.0));
        assert!(board.striker.aim.placement_legal);
    }

    #[test]
    fn test_geometry() {
        let geometry = BoardGeometry::standard();

        assert_eq!(geometry.min, Vec2::new(50.0, 50.0));
        assert_eq!(geometry.max, Vec2::new(550.0, 550.0));
        assert_eq!(geometry.pocket_radius, 25.0);
        assert_eq!(geometry.baseline(Player::One).y, 500.0);
        assert_eq!(geometry.baseline(Player::Two).y, 100.0);
        assert_eq!(geometry.pocket_at(Vec2::new(60.0, 60.0)), Some(0));
        assert_eq!(geometry.pocket_at(Vec2::new(540.0, 545.0)), Some(3));
        assert_eq!(geometry.pocket_at(Vec2::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_legal_placement_then_aim_then_shoot() {
        let mut board = board();

        board.handle_input(&click(200.0, 0.0));
        assert_eq!(board.phase, TurnPhase::Aiming);
        assert!(board.striker.aim.armed);
        assert_eq!(board.striker.body.pos, Vec2::new(200.0, 500.0));

        // Aiming moves power, not the striker
        board.handle_input(&hover(200.0, 350.0));
        assert_eq!(board.phase, TurnPhase::Aiming);
        assert!((board.striker.aim.power - 10.0).abs() < 1e-4);
        assert_eq!(board.striker.body.pos, Vec2::new(200.0, 500.0));

        board.handle_input(&click(200.0, 350.0));
        assert_eq!(board.phase, TurnPhase::Settling);
        assert!(board.striker.body.is_moving());
        assert!(!board.striker.aim.armed);
    }

    #[test]
    fn test_illegal_placement_confirm_is_noop() {
        let mut board = board();
        let spot = board.striker.body.pos + Vec2::new(0.0, -30.0);
        board.discs.push(Disc::new(spot, DiscKind::Black));

        board.handle_input(&click(300.0, 0.0));

        assert!(!board.striker.aim.placement_legal);
        assert_eq!(board.phase, TurnPhase::Placing);
        assert!(!board.striker.aim.armed);
    }

    #[test]
    fn test_placement_legal_at_exact_touching_distance() {
        let mut board = board();
        // Exactly 20 + 15 above the striker's spot
        board.discs.push(Disc::new(Vec2::new(150.0, 465.0), DiscKind::White));

        board.place_striker(150.0);
        assert!(board.striker.aim.placement_legal);

        // 30 units from a disc: overlapping
        board.discs.push(Disc::new(Vec2::new(400.0, 470.0), DiscKind::Black));
        board.place_striker(400.0);
        assert!(!board.striker.aim.placement_legal);

        // Slide far enough along the baseline to clear it
        board.place_striker(420.0);
        assert!(board.striker.aim.placement_legal);
    }

    #[test]
    fn test_placing_uses_acting_players_baseline() {
        let mut board = board();
        board.turn = Player::Two;

        board.handle_input(&hover(250.0, 550.0));

        assert_eq!(board.striker.body.pos, Vec2::new(250.0, 100.0));
    }

    #[test]
    fn test_no_input_after_match_over() {
        let mut board = board();
        board.phase = TurnPhase::MatchOver;
        let before = board.striker.clone();

        board.handle_input(&click(100.0, 100.0));

        assert_eq!(board.phase, TurnPhase::MatchOver);
        assert_eq!(board.striker, before);
    }

    #[test]
    fn test_check_winner_threshold() {
        let mut board = board();
        assert_eq!(board.check_winner(), None);

        board.scores = [20, 0];
        assert_eq!(board.check_winner(), None);

        board.scores = [21, 0];
        assert_eq!(board.check_winner(), Some(Outcome::Winner(Player::One)));
        // Idempotent
        assert_eq!(board.check_winner(), Some(Outcome::Winner(Player::One)));

        board.scores = [3, 25];
        assert_eq!(board.check_winner(), Some(Outcome::Winner(Player::Two)));
    }

    #[test]
    fn test_check_winner_tie_when_board_cleared() {
        let mut board = board();
        for disc in &mut board.discs {
            disc.body.removed = true;
        }

        board.scores = [12, 12];
        assert_eq!(board.check_winner(), Some(Outcome::Tie));

        board.scores = [12, 13];
        assert_eq!(board.check_winner(), Some(Outcome::Winner(Player::Two)));
    }

    #[test]
    fn test_end_turn_replaces_pocketed_striker() {
        let mut board = board();
        board.phase = TurnPhase::Settling;
        board.striker.body.removed = true;
        board.striker.body.pos = Vec2::new(50.0, 50.0);

        board.end_turn();

        assert_eq!(board.turn, Player::Two);
        assert_eq!(board.phase, TurnPhase::Placing);
        assert!(!board.striker.pocketed());
        assert_eq!(board.striker.body.pos, Vec2::new(300.0, 100.0));
    }

    #[test]
    fn test_end_turn_keeps_striker_where_it_stopped() {
        let mut board = board();
        board.phase = TurnPhase::Settling;
        board.striker.body.pos = Vec2::new(420.0, 210.0);

        board.end_turn();

        assert_eq!(board.striker.body.pos, Vec2::new(420.0, 210.0));
        assert_eq!(board.striker.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_reset_game() {
        let mut board = board();
        board.scores = [9, 4];
        board.turn = Player::Two;
        board.phase = TurnPhase::MatchOver;
        board.discs[3].body.removed = true;

        board.reset_game();

        assert_eq!(board.scores, [0, 0]);
        assert_eq!(board.turn, Player::One);
        assert_eq!(board.phase, TurnPhase::Placing);
        assert!(board.discs.iter().all(|d| d.in_play()));
    }
}
