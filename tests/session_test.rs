//! Integration tests for the gameplay session: physics invariants,
//! collision semantics, scoring, and level progression.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyward::constants::*;
use skyward::game::obstacle::{spawn_pair, Rect};
use skyward::game::{Bird, GameMode, GameSession};
use skyward::input::Command;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn started_session(rng: &mut ChaCha8Rng) -> GameSession {
    let mut session = GameSession::new(rng);
    session.handle_command(Command::StartGame, rng);
    session
}

/// One full jump press/release cycle.
fn tap_jump(session: &mut GameSession, rng: &mut ChaCha8Rng) {
    session.handle_command(Command::JumpPressed, rng);
    session.handle_command(Command::JumpReleased, rng);
}

/// Crude autopilot: steer toward the gap of the nearest obstacle pair
/// ahead of the bird, jumping whenever the bird sinks below the gap
/// center. Good enough to survive indefinitely.
fn pilot_step(session: &mut GameSession, rng: &mut ChaCha8Rng) {
    let bird = session.bird();
    let bird_center = bird.y + bird.height / 2;

    // Top rectangles have y == 0; their height is the gap's top edge.
    let target = session
        .obstacles()
        .iter()
        .filter(|o| o.y == 0 && o.x + o.width > bird.x)
        .min_by_key(|o| o.x)
        .map(|top| top.height + OBSTACLE_GAP / 2)
        .unwrap_or(FIELD_HEIGHT / 2);

    if bird_center > target {
        tap_jump(session, rng);
    }
    session.step(rng);
}

// ============================================================================
// Physics invariants
// ============================================================================

#[test]
fn test_jump_always_yields_exact_impulse_velocity() {
    for prior in [-20, 0, 15] {
        let mut bird = Bird::new(1);
        bird.velocity = prior;
        bird.jump();
        assert_eq!(
            bird.velocity, -JUMP_STRENGTH,
            "jump from prior velocity {} must land on -JUMP_STRENGTH",
            prior
        );
    }
}

#[test]
fn test_falling_velocity_caps_at_terminal() {
    let mut bird = Bird::new(1);
    let mut previous_y = bird.y;
    for _ in 0..100 {
        bird.fall();
        assert!(bird.velocity <= TERMINAL_VELOCITY);
        assert!(bird.y > previous_y, "falling position must increase");
        previous_y = bird.y;
    }
    assert_eq!(bird.velocity, TERMINAL_VELOCITY);

    // Past terminal, each step moves a constant amount
    for _ in 0..5 {
        let before = bird.y;
        bird.fall();
        assert_eq!(bird.y - before, TERMINAL_VELOCITY);
    }
}

// ============================================================================
// Collision semantics
// ============================================================================

#[test]
fn test_edge_adjacent_rectangles_do_not_collide() {
    let bird = Rect {
        x: 100,
        y: 300,
        width: BIRD_WIDTH,
        height: BIRD_HEIGHT,
    };
    let touching = Rect {
        x: 100 + BIRD_WIDTH,
        y: 300,
        width: OBSTACLE_WIDTH,
        height: 200,
    };
    let overlapping = Rect {
        x: 100 + BIRD_WIDTH - 1,
        y: 300,
        width: OBSTACLE_WIDTH,
        height: 200,
    };
    assert!(!bird.intersects(&touching));
    assert!(bird.intersects(&overlapping));
}

#[test]
fn test_ceiling_collision_ends_game() {
    let mut rng = rng(11);
    let mut session = started_session(&mut rng);

    // Spam jumps until the bird climbs out the top
    for _ in 0..200 {
        tap_jump(&mut session, &mut rng);
        session.step(&mut rng);
        if session.mode() == GameMode::GameOver {
            break;
        }
    }
    assert_eq!(session.mode(), GameMode::GameOver);
    assert!(session.bird().y <= 0);
}

#[test]
fn test_floor_collision_ends_game() {
    let mut rng = rng(12);
    let mut session = started_session(&mut rng);

    for _ in 0..200 {
        session.step(&mut rng);
        if session.mode() == GameMode::GameOver {
            break;
        }
    }
    assert_eq!(session.mode(), GameMode::GameOver);
    assert!(!session.is_running());
}

// ============================================================================
// Scoring and obstacle recycling
// ============================================================================

#[test]
fn test_score_is_non_decreasing_while_playing() {
    let mut rng = rng(21);
    let mut session = started_session(&mut rng);
    let mut last_score = session.score();

    for _ in 0..600 {
        pilot_step(&mut session, &mut rng);
        assert!(session.score() >= last_score, "score must never decrease");
        last_score = session.score();
        if session.mode() != GameMode::Playing {
            break;
        }
    }
}

#[test]
fn test_obstacle_leaves_field_after_exact_step_count() {
    let mut rng = rng(22);
    let speed = 3;
    let (mut top, _) = spawn_pair(&mut rng, FIELD_WIDTH, 1);

    // ceil((FIELD_WIDTH + OBSTACLE_WIDTH) / speed) steps to fully clear
    let total = FIELD_WIDTH + OBSTACLE_WIDTH;
    let expected_steps = (total + speed - 1) / speed;

    let mut steps = 0;
    while !top.is_off_screen() {
        top.advance(speed);
        steps += 1;
        assert!(steps <= expected_steps, "obstacle should be gone by now");
    }
    assert_eq!(steps, expected_steps);
}

#[test]
fn test_passed_pair_scores_two_points() {
    let mut rng = rng(23);
    let mut session = started_session(&mut rng);

    // Fly until the first seeded pair has been recycled
    let mut steps = 0;
    while session.score() == 0 && session.mode() == GameMode::Playing && steps < 2000 {
        pilot_step(&mut session, &mut rng);
        steps += 1;
    }
    assert_eq!(session.mode(), GameMode::Playing, "autopilot crashed");
    // Both rectangles of a pair cross the boundary on the same step
    assert_eq!(session.score(), 2);
}

// ============================================================================
// Level progression
// ============================================================================

#[test]
fn test_level_transition_at_threshold() {
    let mut rng = rng(31);
    let mut session = started_session(&mut rng);

    let mut steps = 0;
    while session.score() < SCORE_TO_NEXT_LEVEL && steps < 20_000 {
        assert_eq!(session.current_level(), 1);
        pilot_step(&mut session, &mut rng);
        steps += 1;
        assert_ne!(session.mode(), GameMode::GameOver, "autopilot crashed");
    }
    assert!(session.score() >= SCORE_TO_NEXT_LEVEL);
    assert_eq!(session.mode(), GameMode::LevelTransition);

    // The transition is processed on the very next step
    session.step(&mut rng);
    assert_eq!(session.mode(), GameMode::Playing);
    assert_eq!(session.current_level(), 2);
    assert_eq!(session.game_speed(), 4);
    // Score carries across the transition
    assert!(session.score() >= SCORE_TO_NEXT_LEVEL);
    // Bird and obstacle field are reseeded for the new level
    assert_eq!(session.bird().y, BIRD_START_Y);
    assert_eq!(session.obstacles().len(), OBSTACLE_COUNT as usize * 2);
}

#[test]
fn test_no_transition_at_max_level() {
    let mut rng = rng(32);
    let mut session = GameSession::new(&mut rng);
    session.progression_mut().unlock_all();
    assert!(session.progression_mut().set_current_level(3));
    session.reset_game(&mut rng);
    session.handle_command(Command::StartGame, &mut rng);
    assert_eq!(session.game_speed(), 5);

    let goal = 2 * SCORE_TO_NEXT_LEVEL * 3;
    let mut steps = 0;
    while session.score() < goal && steps < 60_000 {
        pilot_step(&mut session, &mut rng);
        steps += 1;
        assert_eq!(session.mode(), GameMode::Playing, "autopilot crashed");
        assert_eq!(session.current_level(), 3, "must stay on the final level");
    }
    assert!(session.score() >= goal);
}

#[test]
fn test_restart_reseeds_everything_but_keeps_level() {
    let mut rng = rng(33);
    let mut session = started_session(&mut rng);

    // Reach level 2, then crash
    while session.current_level() == 1 {
        pilot_step(&mut session, &mut rng);
    }
    while session.mode() != GameMode::GameOver {
        session.step(&mut rng);
    }

    session.handle_command(Command::Restart, &mut rng);
    assert_eq!(session.mode(), GameMode::Playing);
    assert!(session.is_running());
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_level(), 2, "restart replays the death level");
    assert_eq!(session.bird().y, BIRD_START_Y);
    assert_eq!(session.bird().velocity, 0);
    assert_eq!(session.obstacles().len(), OBSTACLE_COUNT as usize * 2);
}

// ============================================================================
// No-input scenario
// ============================================================================

#[test]
fn test_four_seconds_without_input_ends_the_run() {
    let mut rng = rng(41);
    let mut session = started_session(&mut rng);

    // 4000 ms of simulation at STEP_MS per step
    let steps = (4000 / STEP_MS) as usize;
    for _ in 0..steps {
        session.step(&mut rng);
        if session.mode() == GameMode::GameOver {
            break;
        }
    }
    assert_eq!(session.mode(), GameMode::GameOver);
    assert!(session.score() < 10);
}
