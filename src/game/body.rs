// Circular bodies: carrom men and the striker

use glam::Vec2;

pub const COIN_RADIUS: f32 = 15.0;
pub const STRIKER_RADIUS: f32 = 20.0;

/// A circular body that slides on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Pocketed bodies stay in the collection but never move or draw again
    pub removed: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            removed: false,
        }
    }

    /// Advance one frame: move by velocity, then bleed speed through friction.
    ///
    /// Once both velocity components drop under `stop_epsilon` the body is
    /// snapped to an exact stop, so "everything stopped" is an equality test.
    pub fn integrate(&mut self, friction: f32, stop_epsilon: f32) {
        if self.removed {
            return;
        }

        self.pos += self.vel;
        self.vel *= friction;

        if self.vel.x.abs() < stop_epsilon && self.vel.y.abs() < stop_epsilon {
            self.vel = Vec2::ZERO;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

/// Carrom man colours and the queen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscKind {
    Black,
    White,
    Queen,
}

impl DiscKind {
    /// Points awarded to the acting player when this disc is pocketed
    pub fn points(&self) -> u32 {
        match self {
            DiscKind::Black => 1,
            DiscKind::White => 2,
            DiscKind::Queen => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub body: Body,
    pub kind: DiscKind,
}

impl Disc {
    pub fn new(pos: Vec2, kind: DiscKind) -> Self {
        Self {
            body: Body::new(pos, COIN_RADIUS),
            kind,
        }
    }

    pub fn in_play(&self) -> bool {
        !self.body.removed
    }
}

/// Shot tuning shared by human aiming and the striker's release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotTuning {
    /// Pointer distance per unit of power
    pub power_scale: f32,
    pub max_power: f32,
    /// Amplifies raw power into launch speed
    pub power_multiplier: f32,
}

/// Aiming state carried only by the striker
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AimState {
    /// Radians, measured from +x toward +y (screen down)
    pub angle: f32,
    pub power: f32,
    pub armed: bool,
    pub placement_legal: bool,
}

/// Legal striker positions for one player: a horizontal segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub y: f32,
    pub min_x: f32,
    pub max_x: f32,
}

impl Baseline {
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.min_x, self.max_x)
    }

    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Striker {
    pub body: Body,
    pub aim: AimState,
    pub tuning: ShotTuning,
}

impl Striker {
    pub fn new(pos: Vec2, tuning: ShotTuning) -> Self {
        Self {
            body: Body::new(pos, STRIKER_RADIUS),
            aim: AimState {
                placement_legal: true,
                ..AimState::default()
            },
            tuning,
        }
    }

    /// Slide the striker to `pointer_x` on `baseline` and re-check legality.
    ///
    /// The position is kept even if it overlaps a disc, so the renderer can
    /// show the bad spot; callers gate arming on `placement_legal`.
    pub fn place(&mut self, baseline: &Baseline, discs: &[Disc], pointer_x: f32) {
        self.body.pos = Vec2::new(baseline.clamp_x(pointer_x), baseline.y);
        self.aim.placement_legal = !self.overlaps_any(discs);
    }

    pub fn overlaps_any(&self, discs: &[Disc]) -> bool {
        if self.body.removed {
            return false;
        }
        discs
            .iter()
            .filter(|disc| disc.in_play())
            .any(|disc| self.body.overlaps(&disc.body))
    }

    /// Point the striker at `pointer`; farther pointer means a harder shot
    pub fn aim(&mut self, pointer: Vec2) {
        let delta = pointer - self.body.pos;
        self.aim.angle = delta.y.atan2(delta.x);
        self.aim.power = (delta.length() / self.tuning.power_scale).min(self.tuning.max_power);
    }

    /// Set angle and power directly (scripted opponent)
    pub fn set_aim(&mut self, angle: f32, power: f32) {
        self.aim.angle = angle;
        self.aim.power = power.clamp(0.0, self.tuning.max_power);
    }

    pub fn shoot(&mut self) {
        let direction = Vec2::from_angle(self.aim.angle);
        self.body.vel = direction * self.aim.power * self.tuning.power_multiplier;
        self.aim.power = 0.0;
        self.aim.armed = false;
    }

    pub fn pocketed(&self) -> bool {
        self.body.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> ShotTuning {
        ShotTuning {
            power_scale: 15.0,
            max_power: 30.0,
            power_multiplier: 1.5,
        }
    }

    fn baseline() -> Baseline {
        Baseline {
            y: 500.0,
            min_x: 100.0,
            max_x: 500.0,
        }
    }

    #[test]
    fn test_integrate_decays_to_exact_stop() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), COIN_RADIUS);
        body.vel = Vec2::new(5.0, -3.0);

        let mut last_speed = body.vel.length();
        let mut ticks = 0;
        while body.is_moving() {
            body.integrate(0.98, 0.1);
            let speed = body.vel.length();
            assert!(speed < last_speed);
            last_speed = speed;
            ticks += 1;
            assert!(ticks < 1000, "body never came to rest");
        }

        assert_eq!(body.vel, Vec2::ZERO);

        // Position is frozen from here on
        let rest = body.pos;
        for _ in 0..10 {
            body.integrate(0.98, 0.1);
        }
        assert_eq!(body.pos, rest);
    }

    #[test]
    fn test_removed_body_does_not_move() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), COIN_RADIUS);
        body.vel = Vec2::new(4.0, 4.0);
        body.removed = true;

        body.integrate(0.98, 0.1);

        assert_eq!(body.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_disc_points() {
        assert_eq!(DiscKind::Black.points(), 1);
        assert_eq!(DiscKind::White.points(), 2);
        assert_eq!(DiscKind::Queen.points(), 5);
    }

    #[test]
    fn test_place_clamps_to_baseline_span() {
        let mut striker = Striker::new(Vec2::ZERO, tuning());

        striker.place(&baseline(), &[], 9999.0);
        assert_eq!(striker.body.pos, Vec2::new(500.0, 500.0));

        striker.place(&baseline(), &[], -40.0);
        assert_eq!(striker.body.pos, Vec2::new(100.0, 500.0));
        assert!(striker.aim.placement_legal);
    }

    #[test]
    fn test_place_flags_overlap_but_keeps_position() {
        let mut striker = Striker::new(Vec2::ZERO, tuning());
        // 34 units away: inside 20 + 15
        let discs = vec![Disc::new(Vec2::new(300.0, 466.0), DiscKind::Black)];

        striker.place(&baseline(), &discs, 300.0);

        assert!(!striker.aim.placement_legal);
        assert_eq!(striker.body.pos, Vec2::new(300.0, 500.0));
    }

    #[test]
    fn test_place_ignores_pocketed_discs() {
        let mut striker = Striker::new(Vec2::ZERO, tuning());
        let mut disc = Disc::new(Vec2::new(300.0, 500.0), DiscKind::White);
        disc.body.removed = true;

        striker.place(&baseline(), &[disc], 300.0);

        assert!(striker.aim.placement_legal);
    }

    #[test]
    fn test_aim_power_scales_and_clamps() {
        let mut striker = Striker::new(Vec2::new(300.0, 500.0), tuning());

        striker.aim(Vec2::new(300.0, 350.0));
        assert!((striker.aim.power - 10.0).abs() < 1e-4);
        assert!((striker.aim.angle + std::f32::consts::FRAC_PI_2).abs() < 1e-4);

        striker.aim(Vec2::new(300.0, -2000.0));
        assert_eq!(striker.aim.power, 30.0);
    }

    #[test]
    fn test_shoot_applies_multiplier_and_disarms() {
        let mut striker = Striker::new(Vec2::new(300.0, 500.0), tuning());
        striker.aim.armed = true;
        striker.set_aim(0.0, 10.0);

        striker.shoot();

        assert!((striker.body.vel.x - 15.0).abs() < 1e-4);
        assert!(striker.body.vel.y.abs() < 1e-4);
        assert_eq!(striker.aim.power, 0.0);
        assert!(!striker.aim.armed);
    }
}
