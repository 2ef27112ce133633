mod config;
mod food;
mod game;
mod grid;
mod input_system;
mod render;
mod snake;

use config::GameConfig;
use game::{FrameClock, GameLoop};
use input_system::SdlInput;
use render::SdlRenderer;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Warning: could not initialise logger: {}", e);
    }
}

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load_or_default(GameConfig::default_path());
    let (window_width, window_height) = config.window_size();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.window_title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let event_pump = sdl_context.event_pump()?;

    log::info!(
        "Grid {}x{} cells, window {}x{} px, {} ticks/s",
        config.grid_width,
        config.grid_height,
        window_width,
        window_height,
        config.ticks_per_second
    );
    log::info!("Controls: arrow keys or WASD to steer, Esc or close the window to quit");

    let mut renderer = SdlRenderer::new(canvas, config.cell_size, config.palette());
    let mut input = SdlInput::new(event_pump);
    let mut clock = FrameClock::new(config.tick_duration());

    let mut game = GameLoop::new(&config, rand::thread_rng());
    game.run(&mut input, &mut renderer, &mut clock)?;

    Ok(())
}
