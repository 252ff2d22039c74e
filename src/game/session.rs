//! The gameplay loop: owns the bird, the live obstacle set, and the level
//! progression, and drives the top-level state machine one discrete step
//! at a time. All mutation happens through [`GameSession::handle_command`]
//! and [`GameSession::step`]; the UI only reads.

use rand::Rng;

use crate::constants::*;
use crate::game::bird::Bird;
use crate::game::level::LevelProgression;
use crate::game::obstacle::{self, Obstacle};
use crate::input::Command;

/// Top-level game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    MainMenu,
    Playing,
    LevelTransition,
    GameOver,
}

/// Aggregate root for one play session. Created once at startup; reset in
/// place on restart and partially reset on level transition.
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    score: u32,
    running: bool,
    /// Edge-trigger latch: a held jump key produces exactly one impulse
    /// per press/release cycle.
    jump_held: bool,
    bird: Bird,
    obstacles: Vec<Obstacle>,
    progression: LevelProgression,
    /// Scroll speed for the current level, cached from the level table.
    game_speed: i32,
    /// Simulation clock in milliseconds, advanced `STEP_MS` per step while
    /// running. Drives obstacle spawn timing deterministically.
    sim_time_ms: u64,
    last_spawn_ms: u64,
}

impl GameSession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let progression = LevelProgression::new();
        let level = progression.current_level();
        let mut session = Self {
            mode: GameMode::MainMenu,
            score: 0,
            running: false,
            jump_held: false,
            bird: Bird::new(level),
            obstacles: Vec::new(),
            progression,
            game_speed: LevelProgression::spec(level).speed,
            sim_time_ms: 0,
            last_spawn_ms: 0,
        };
        session.reset_game(rng);
        session
    }

    /// Full reset: score to zero, bird back at the start position, obstacle
    /// field reseeded. The level progression is left alone, so a restart
    /// after game over replays the level the player died on.
    pub fn reset_game<R: Rng>(&mut self, rng: &mut R) {
        let level = self.progression.current_level();
        self.bird = Bird::new(level);
        self.obstacles.clear();
        self.score = 0;
        self.game_speed = LevelProgression::spec(level).speed;
        self.running = false;
        self.jump_held = false;
        self.last_spawn_ms = self.sim_time_ms;
        obstacle::seed_initial(rng, &mut self.obstacles, level);
    }

    fn start(&mut self) {
        self.mode = GameMode::Playing;
        self.running = true;
    }

    /// Apply one input command. Commands that do not apply in the current
    /// mode are ignored.
    pub fn handle_command<R: Rng>(&mut self, command: Command, rng: &mut R) {
        match (self.mode, command) {
            (GameMode::MainMenu, Command::StartGame) => self.start(),
            (GameMode::Playing, Command::JumpPressed) => {
                if !self.jump_held {
                    self.bird.jump();
                    self.jump_held = true;
                }
            }
            (_, Command::JumpReleased) => self.jump_held = false,
            (GameMode::Playing, Command::ReturnToMenu) => {
                // Back to the menu without resetting; StartGame resumes.
                self.mode = GameMode::MainMenu;
                self.running = false;
            }
            (GameMode::GameOver, Command::Restart) => {
                self.reset_game(rng);
                self.start();
            }
            (GameMode::GameOver, Command::GoToMenu) => {
                self.reset_game(rng);
                self.mode = GameMode::MainMenu;
            }
            _ => {}
        }
    }

    /// Advance the simulation one step. Menu and game-over modes are inert;
    /// a level transition is processed and immediately re-enters play.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        match self.mode {
            GameMode::Playing => self.update_gameplay(rng),
            GameMode::LevelTransition => self.handle_level_transition(rng),
            GameMode::MainMenu | GameMode::GameOver => {}
        }
    }

    fn update_gameplay<R: Rng>(&mut self, rng: &mut R) {
        if !self.running {
            return;
        }
        self.sim_time_ms += STEP_MS;

        self.bird.fall();

        // Scroll obstacles and recycle the ones that left the field. Each
        // removed rectangle scores one point, so a passed pair is worth two.
        for obstacle in &mut self.obstacles {
            obstacle.advance(self.game_speed);
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        self.score += (before - self.obstacles.len()) as u32;

        if self.sim_time_ms - self.last_spawn_ms > SPAWN_DELAY_MS {
            let level = self.progression.current_level();
            let (top, bottom) = obstacle::spawn_pair(rng, FIELD_WIDTH, level);
            self.obstacles.push(top);
            self.obstacles.push(bottom);
            self.last_spawn_ms = self.sim_time_ms;
        }

        if self.check_collisions() {
            self.mode = GameMode::GameOver;
            self.running = false;
            return;
        }

        let level = self.progression.current_level();
        if self.score >= LevelProgression::threshold(level) && self.progression.can_advance() {
            self.mode = GameMode::LevelTransition;
        }
    }

    fn check_collisions(&self) -> bool {
        if self.bird.y <= 0 || self.bird.y + self.bird.height >= FIELD_HEIGHT {
            return true;
        }
        let bounds = self.bird.bounds();
        self.obstacles.iter().any(|o| bounds.intersects(&o.bounds()))
    }

    /// Entry into the next level: bump the progression, swap in the new
    /// level's speed and skins, reseed the obstacle field, and keep the
    /// score. Re-enters `Playing` on the same step; the "Get Ready" overlay
    /// is purely visual.
    fn handle_level_transition<R: Rng>(&mut self, rng: &mut R) {
        self.progression.advance();
        let level = self.progression.current_level();
        self.game_speed = LevelProgression::spec(level).speed;
        self.bird = Bird::new(level);
        self.obstacles.clear();
        self.last_spawn_ms = self.sim_time_ms;
        obstacle::seed_initial(rng, &mut self.obstacles, level);
        self.mode = GameMode::Playing;
    }

    // Read accessors for the presentation layer.

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_level(&self) -> u32 {
        self.progression.current_level()
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn progression(&self) -> &LevelProgression {
        &self.progression
    }

    pub fn progression_mut(&mut self) -> &mut LevelProgression {
        &mut self.progression
    }

    pub fn game_speed(&self) -> i32 {
        self.game_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> (GameSession, StdRng) {
        let mut rng = StdRng::seed_from_u64(1);
        let session = GameSession::new(&mut rng);
        (session, rng)
    }

    #[test]
    fn test_initial_state() {
        let (session, _) = session();
        assert_eq!(session.mode(), GameMode::MainMenu);
        assert_eq!(session.score(), 0);
        assert!(!session.is_running());
        assert_eq!(session.current_level(), 1);
        assert_eq!(session.game_speed(), 3);
        assert_eq!(session.obstacles().len(), OBSTACLE_COUNT as usize * 2);
    }

    #[test]
    fn test_start_command_enters_playing() {
        let (mut session, mut rng) = session();
        session.handle_command(Command::StartGame, &mut rng);
        assert_eq!(session.mode(), GameMode::Playing);
        assert!(session.is_running());
    }

    #[test]
    fn test_step_is_inert_in_menu_and_game_over() {
        let (mut session, mut rng) = session();
        let bird_y = session.bird().y;
        session.step(&mut rng);
        assert_eq!(session.bird().y, bird_y);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let (mut session, mut rng) = session();
        session.handle_command(Command::StartGame, &mut rng);

        session.handle_command(Command::JumpPressed, &mut rng);
        assert_eq!(session.bird().velocity, -JUMP_STRENGTH);

        // A second press without a release is swallowed
        session.step(&mut rng);
        let velocity = session.bird().velocity;
        session.handle_command(Command::JumpPressed, &mut rng);
        assert_eq!(session.bird().velocity, velocity);

        // After a release the next press jumps again
        session.handle_command(Command::JumpReleased, &mut rng);
        session.handle_command(Command::JumpPressed, &mut rng);
        assert_eq!(session.bird().velocity, -JUMP_STRENGTH);
    }

    #[test]
    fn test_escape_to_menu_preserves_session() {
        let (mut session, mut rng) = session();
        session.handle_command(Command::StartGame, &mut rng);
        for _ in 0..5 {
            session.handle_command(Command::JumpPressed, &mut rng);
            session.handle_command(Command::JumpReleased, &mut rng);
            session.step(&mut rng);
        }
        let bird_y = session.bird().y;

        session.handle_command(Command::ReturnToMenu, &mut rng);
        assert_eq!(session.mode(), GameMode::MainMenu);
        assert!(!session.is_running());
        assert_eq!(session.bird().y, bird_y);

        // Starting again resumes in place
        session.handle_command(Command::StartGame, &mut rng);
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.bird().y, bird_y);
    }

    #[test]
    fn test_free_fall_ends_in_game_over() {
        let (mut session, mut rng) = session();
        session.handle_command(Command::StartGame, &mut rng);
        // From mid-field at terminal velocity the floor arrives in well
        // under 100 steps
        for _ in 0..100 {
            session.step(&mut rng);
            if session.mode() == GameMode::GameOver {
                break;
            }
        }
        assert_eq!(session.mode(), GameMode::GameOver);
        assert!(!session.is_running());
    }

    #[test]
    fn test_restart_from_game_over_resets_score_and_field() {
        let (mut session, mut rng) = session();
        session.handle_command(Command::StartGame, &mut rng);
        while session.mode() != GameMode::GameOver {
            session.step(&mut rng);
        }

        session.handle_command(Command::Restart, &mut rng);
        assert_eq!(session.mode(), GameMode::Playing);
        assert!(session.is_running());
        assert_eq!(session.score(), 0);
        assert_eq!(session.bird().y, BIRD_START_Y);
        assert_eq!(session.bird().velocity, 0);
        assert_eq!(session.obstacles().len(), OBSTACLE_COUNT as usize * 2);
    }

    #[test]
    fn test_go_to_menu_from_game_over() {
        let (mut session, mut rng) = session();
        session.handle_command(Command::StartGame, &mut rng);
        while session.mode() != GameMode::GameOver {
            session.step(&mut rng);
        }

        session.handle_command(Command::GoToMenu, &mut rng);
        assert_eq!(session.mode(), GameMode::MainMenu);
        assert!(!session.is_running());
        assert_eq!(session.score(), 0);
    }
}
