use glam::Vec2;

use super::body::{Body, DiscKind};
use super::state::{Board, BoardGeometry, Outcome, Player, TurnPhase};

/// Fallback collision axis when two centres coincide
const DEFAULT_NORMAL: Vec2 = Vec2::X;

/// What happened during one tick, for logging and the HUD
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PhysicsEvents {
    pub collisions: u32,
    pub wall_bounces: u32,
    /// Discs pocketed this tick, in the order they dropped
    pub pocketed: Vec<DiscKind>,
    pub striker_pocketed: bool,
    /// The shot settled and the turn passed to this player
    pub turn_passed_to: Option<Player>,
    /// The match ended this tick
    pub match_over: Option<Outcome>,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.collisions > 0
            || self.wall_bounces > 0
            || !self.pocketed.is_empty()
            || self.striker_pocketed
            || self.turn_passed_to.is_some()
            || self.match_over.is_some()
    }
}

/// Advance the board by one frame.
///
/// Bodies only move while a shot is settling; during placement and aiming
/// the board is frozen.
pub fn update_with_events(board: &mut Board) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();

    match board.phase {
        TurnPhase::MatchOver => return events,
        TurnPhase::Placing | TurnPhase::Aiming => {}
        TurnPhase::Settling => {
            step_bodies(board, &mut events);

            if board.all_stopped() {
                board.end_turn();
                events.turn_passed_to = Some(board.turn);
            }
        }
    }

    if let Some(outcome) = board.check_winner() {
        board.phase = TurnPhase::MatchOver;
        events.match_over = Some(outcome);
    }

    events
}

fn step_bodies(board: &mut Board, events: &mut PhysicsEvents) {
    let friction = board.rules.friction;
    let epsilon = board.rules.stop_epsilon;

    board.striker.body.integrate(friction, epsilon);
    for disc in &mut board.discs {
        disc.body.integrate(friction, epsilon);
    }

    resolve_all_collisions(board, events);

    let restitution = board.rules.wall_restitution;
    if !board.striker.pocketed()
        && reflect_off_walls(&mut board.striker.body, &board.geometry, restitution)
    {
        events.wall_bounces += 1;
    }
    for disc in board.discs.iter_mut().filter(|d| d.in_play()) {
        if reflect_off_walls(&mut disc.body, &board.geometry, restitution) {
            events.wall_bounces += 1;
        }
    }

    capture_pocketed(board, events);
}

fn resolve_all_collisions(board: &mut Board, events: &mut PhysicsEvents) {
    if !board.striker.pocketed() {
        for disc in board.discs.iter_mut().filter(|d| d.in_play()) {
            if resolve_collision(&mut board.striker.body, &mut disc.body) {
                events.collisions += 1;
            }
        }
    }

    for i in 0..board.discs.len() {
        let (head, tail) = board.discs.split_at_mut(i + 1);
        let a = &mut head[i];
        if !a.in_play() {
            continue;
        }
        for b in tail.iter_mut().filter(|d| d.in_play()) {
            if resolve_collision(&mut a.body, &mut b.body) {
                events.collisions += 1;
            }
        }
    }
}

/// Equal-mass elastic response between two overlapping bodies.
///
/// Returns true if the pair was overlapping and approaching, i.e. an
/// impulse was exchanged and the bodies were pushed apart.
pub fn resolve_collision(a: &mut Body, b: &mut Body) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius + b.radius;

    if distance >= min_distance {
        return false;
    }

    let normal = if distance == 0.0 {
        DEFAULT_NORMAL
    } else {
        delta / distance
    };

    let closing = (b.vel - a.vel).dot(normal);
    if closing > 0.0 {
        // Already separating
        return false;
    }

    // Equal masses swap their normal components
    let impulse = normal * closing;
    a.vel += impulse;
    b.vel -= impulse;

    let push = normal * ((min_distance - distance) / 2.0);
    a.pos -= push;
    b.pos += push;

    true
}

/// Clamp a body inside the playing surface, bouncing with energy loss.
///
/// Returns true if any wall was hit.
pub fn reflect_off_walls(body: &mut Body, geometry: &BoardGeometry, restitution: f32) -> bool {
    let mut hit = false;

    if body.pos.x - body.radius < geometry.min.x {
        body.pos.x = geometry.min.x + body.radius;
        body.vel.x = -body.vel.x * restitution;
        hit = true;
    } else if body.pos.x + body.radius > geometry.max.x {
        body.pos.x = geometry.max.x - body.radius;
        body.vel.x = -body.vel.x * restitution;
        hit = true;
    }

    if body.pos.y - body.radius < geometry.min.y {
        body.pos.y = geometry.min.y + body.radius;
        body.vel.y = -body.vel.y * restitution;
        hit = true;
    } else if body.pos.y + body.radius > geometry.max.y {
        body.pos.y = geometry.max.y - body.radius;
        body.vel.y = -body.vel.y * restitution;
        hit = true;
    }

    hit
}

fn capture_pocketed(board: &mut Board, events: &mut PhysicsEvents) {
    let striker = &mut board.striker.body;
    if !striker.removed && board.geometry.pocket_at(striker.pos).is_some() {
        striker.removed = true;
        striker.vel = Vec2::ZERO;
        events.striker_pocketed = true;
        tracing::debug!(player = ?board.turn, "striker pocketed");
    }

    let scorer = board.turn.index();
    for disc in board.discs.iter_mut().filter(|d| d.in_play()) {
        if board.geometry.pocket_at(disc.body.pos).is_none() {
            continue;
        }
        disc.body.removed = true;
        disc.body.vel = Vec2::ZERO;
        board.scores[scorer] += disc.kind.points();
        events.pocketed.push(disc.kind);
        tracing::debug!(kind = ?disc.kind, player = ?board.turn, "disc pocketed");
    }
}
