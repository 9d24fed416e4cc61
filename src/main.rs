use std::env;
use std::io;
use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::{disable_raw_mode, enable_raw_mode, size, supports_keyboard_enhancement},
};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use laser_asteroids::config::LaunchOptions;
use laser_asteroids::constants::LOG_FILE;
use laser_asteroids::game::Game;
use laser_asteroids::rendering::{OutputTarget, ScreenBuffer};
use laser_asteroids::session::Session;
use laser_asteroids::terminal_io::{SimulatedInput, with_restore};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match LaunchOptions::parse(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("laser-asteroids: {}", message);
            eprintln!("usage: laser-asteroids [--debug [WIDTH HEIGHT [MAX_FRAMES]]] [--frames N] [--seed N] [--verbose]");
            std::process::exit(2);
        }
    };

    let level = if options.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    simple_logging::log_to_file(LOG_FILE, level)?;
    info!("Starting laser-asteroids with {:?}", options);

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(rng);

    if options.debug {
        info!("Debug mode: {}x{} screen buffer", options.debug_width, options.debug_height);
        let mut game = Game::new(
            options.debug_width,
            options.debug_height,
            OutputTarget::Headless(ScreenBuffer::new(options.debug_width, options.debug_height)),
            Some(SimulatedInput::demo_script()),
            options.max_frames,
            true,
        );
        let frames = game.run(&mut session)?;
        info!("Debug run finished after {} frames", frames);
        return Ok(());
    }

    run_interactive(&options, &mut session)
}

fn run_interactive(options: &LaunchOptions, session: &mut Session) -> io::Result<()> {
    let (width, height) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
    info!("Terminal size: {}x{}", width, height);

    info!("Attempting to enable raw mode.");
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    let reports_releases = supports_keyboard_enhancement().unwrap_or(false);
    let mut game = Game::new(
        width,
        height,
        OutputTarget::Terminal(io::stdout()),
        None,
        options.max_frames,
        reports_releases,
    );

    let frames = with_restore(
        &mut game,
        |game| {
            if reports_releases {
                game.output.apply(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))?;
            } else {
                info!("Terminal does not report key releases; held keys expire after auto-repeat stops.");
            }
            game.output.apply(Hide).map_err(|e| { error!("Failed to hide cursor: {}", e); e })?;
            game.run(session)
        },
        |game| {
            // Every step is attempted; `and` keeps the first failure.
            let popped = if reports_releases {
                game.output.apply(PopKeyboardEnhancementFlags)
            } else {
                Ok(())
            };
            let shown = game.output.apply(Show).map_err(|e| { error!("Failed to show cursor on exit: {}", e); e });
            let raw_off = disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e });
            popped.and(shown).and(raw_off)
        },
    )?;

    info!("Exiting after {} frames.", frames);
    Ok(())
}
