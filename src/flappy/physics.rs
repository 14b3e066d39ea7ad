use super::state::{
    speed_for_score, FlappyGame, FlappyPhase, BIRD_SIZE, FIELD_HEIGHT, GRAVITY, GROUND_HEIGHT,
    PIPE_WIDTH, SPAWN_INTERVAL_FRAMES,
};

/// What happened during one tick
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlappyEvents {
    pub scored: u32,
    pub died: bool,
    /// Set when the run ended above the stored high score; the caller persists it
    pub new_high_score: Option<u32>,
}

/// Advance one frame. Only `Playing` moves anything.
pub fn update(game: &mut FlappyGame) -> FlappyEvents {
    let mut events = FlappyEvents::default();
    if game.phase != FlappyPhase::Playing {
        return events;
    }

    game.flap_cooldown = game.flap_cooldown.saturating_sub(1);
    move_bird(game);

    game.spawn_timer += 1;
    if game.spawn_timer >= SPAWN_INTERVAL_FRAMES {
        game.spawn_timer = 0;
        game.spawn_pipe();
    }

    let bird_x = game.bird.x;
    for pipe in game.pipes.iter_mut() {
        pipe.x -= pipe.speed;

        if pipe.hits(&game.bird) {
            game.bird.alive = false;
        }

        if !pipe.passed && pipe.x + PIPE_WIDTH < bird_x {
            pipe.passed = true;
            game.score += 1;
            events.scored += 1;
            // Pipes already on screen keep their own speed
            game.speed = speed_for_score(game.score);
        }
    }

    game.pipes.retain(|pipe| !pipe.off_screen());

    if !game.bird.alive {
        events.died = true;
        game.phase = FlappyPhase::GameOver;
        if game.score > game.high_score {
            game.high_score = game.score;
            events.new_high_score = Some(game.score);
        }
        tracing::info!(score = game.score, high_score = game.high_score, "flappy run over");
    }

    events
}

fn move_bird(game: &mut FlappyGame) {
    let bird = &mut game.bird;
    bird.vy += GRAVITY;
    bird.y += bird.vy;

    if bird.y <= 0.0 {
        bird.y = 0.0;
        bird.vy = 0.0;
    }

    let floor = FIELD_HEIGHT - GROUND_HEIGHT - BIRD_SIZE;
    if bird.y >= floor {
        bird.y = floor;
        bird.vy = 0.0;
        bird.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flappy::state::{Pipe, FLAP_VELOCITY, INITIAL_SPEED};

    fn playing() -> FlappyGame {
        let mut game = FlappyGame::with_seed(0, 17);
        game.phase = FlappyPhase::Playing;
        game
    }

    #[test]
    fn test_nothing_moves_outside_play() {
        let mut game = FlappyGame::with_seed(0, 17);
        let y = game.bird.y;

        let events = update(&mut game);

        assert_eq!(events, FlappyEvents::default());
        assert_eq!(game.bird.y, y);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut game = playing();
        update(&mut game);
        update(&mut game);

        assert_eq!(game.bird.vy, 0.5);
        assert_eq!(game.bird.y, 300.0 + 0.25 + 0.5);
    }

    #[test]
    fn test_ceiling_clamps() {
        let mut game = playing();
        game.bird.y = 2.0;
        game.bird.vy = FLAP_VELOCITY;

        update(&mut game);

        assert_eq!(game.bird.y, 0.0);
        assert_eq!(game.bird.vy, 0.0);
        assert!(game.bird.alive);
    }

    #[test]
    fn test_ground_ends_run_and_raises_high_score() {
        let mut game = playing();
        game.high_score = 2;
        game.score = 5;
        game.bird.y = 469.0;
        game.bird.vy = 3.0;

        let events = update(&mut game);

        assert!(events.died);
        assert_eq!(events.new_high_score, Some(5));
        assert_eq!(game.high_score, 5);
        assert_eq!(game.phase, FlappyPhase::GameOver);
        assert_eq!(game.bird.y, 470.0);
    }

    #[test]
    fn test_low_score_keeps_high_score() {
        let mut game = playing();
        game.high_score = 9;
        game.score = 4;
        game.bird.y = 480.0;

        let events = update(&mut game);

        assert!(events.died);
        assert_eq!(events.new_high_score, None);
        assert_eq!(game.high_score, 9);
    }

    #[test]
    fn test_pipe_spawns_every_interval() {
        let mut game = playing();
        for _ in 0..SPAWN_INTERVAL_FRAMES - 1 {
            game.bird.y = 200.0;
            game.bird.vy = 0.0;
            update(&mut game);
        }
        assert!(game.pipes.is_empty());

        update(&mut game);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].speed, INITIAL_SPEED);
    }

    #[test]
    fn test_passing_pipe_scores_and_speeds_up_new_pipes() {
        let mut game = playing();
        // Pipe just about to clear the bird, with the gap around it
        let mut pipe = Pipe::new(250.0, 4.0);
        pipe.x = BIRD_X_EDGE;
        game.pipes.push(pipe);
        game.bird.y = 300.0;

        let events = update(&mut game);

        assert_eq!(events.scored, 1);
        assert_eq!(game.score, 1);
        assert!((game.speed - 4.2).abs() < 1e-5);
        assert_eq!(game.pipes[0].speed, 4.0);
        assert!(!events.died);

        // Already passed pipes never score twice
        let events = update(&mut game);
        assert_eq!(events.scored, 0);
    }

    // x at which one more 4-unit step puts the pipe's right edge behind the bird
    const BIRD_X_EDGE: f32 = 100.0 - PIPE_WIDTH + 2.0;

    #[test]
    fn test_pipe_collision_ends_run() {
        let mut game = playing();
        let mut pipe = Pipe::new(300.0, 4.0);
        pipe.x = 90.0;
        game.pipes.push(pipe);
        game.bird.y = 100.0;

        let events = update(&mut game);

        assert!(events.died);
        assert_eq!(game.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_off_screen_pipes_removed() {
        let mut game = playing();
        let mut pipe = Pipe::new(200.0, 4.0);
        pipe.x = -58.0;
        game.pipes.push(pipe);

        update(&mut game);

        assert!(game.pipes.is_empty());
    }
}
