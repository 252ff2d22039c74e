mod assets;
mod build_info;
mod constants;
mod game;
mod input;
mod settings;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use constants::{INPUT_POLL_MS, STEP_MS};
use game::session::GameSession;
use input::{AppAction, Command, Translated};
use settings::{Settings, SETTINGS_FILE};

/// Upper bound on simulation catch-up per frame so a stalled terminal
/// doesn't trigger a burst of steps.
const MAX_CATCH_UP_STEPS: u32 = 4;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyward {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Skyward - Multi-Level Flappy Bird for the terminal\n");
                println!("Usage: skyward [--version | --help]\n");
                println!("Controls:");
                println!("  Space/Enter  start / jump");
                println!("  Esc          back to menu");
                println!("  R / M        restart / menu (after game over)");
                println!("  Q            quit (from the menu)\n");
                println!("Optional settings file: {} in the working directory.", SETTINGS_FILE);
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Logger writes to stderr; initialize before the alternate screen so
    // startup warnings (bad settings file etc.) stay visible.
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let mut rng = StdRng::from_entropy();
    let mut session = GameSession::new(&mut rng);
    settings.apply(&mut session, &mut rng);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Kitty-style release events give us true press/release jump pairs;
    // everywhere else each press is treated as a full cycle.
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(
        &mut terminal,
        &mut session,
        &settings,
        &mut rng,
        release_events,
    );

    // Cleanup terminal even if the loop errored
    if release_events {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

/// The main loop: draw, translate input into session commands, and advance
/// the simulation at a fixed 60 Hz. All game-state mutation happens here,
/// on this one thread.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    settings: &Settings,
    rng: &mut StdRng,
    release_events: bool,
) -> io::Result<()> {
    let step = Duration::from_millis(STEP_MS);
    let mut last_step = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, session, settings))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match input::translate(key, session.mode()) {
                    Translated::App(AppAction::Quit) => return Ok(()),
                    Translated::Game(command) => {
                        session.handle_command(command, rng);
                        if command == Command::JumpPressed && !release_events {
                            // No release reporting: close the press cycle now
                            session.handle_command(Command::JumpReleased, rng);
                        }
                    }
                    Translated::None => {}
                }
            }
        }

        let mut substeps = 0;
        while last_step.elapsed() >= step && substeps < MAX_CATCH_UP_STEPS {
            session.step(rng);
            last_step += step;
            substeps += 1;
        }
        if substeps == MAX_CATCH_UP_STEPS {
            // Too far behind; drop the backlog instead of bursting
            last_step = Instant::now();
        }
    }
}
