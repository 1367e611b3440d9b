use macroquad::prelude::{Conf, next_frame};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_canvas::{Engine, FrameDriver, HostConfig, rendering};

/// How often the running generation is logged
const LOG_EVERY_FRAMES: u64 = 600;

fn window_conf() -> Conf {
    let (width, height) = HostConfig::default().canvas_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width.min(i32::MAX as u32) as i32,
        window_height: height.min(i32::MAX as u32) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let config = HostConfig::default();

    let engine = match Engine::with_seed(config.grid_width, config.grid_height, &config.seed) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "could not create engine");
            return;
        }
    };
    info!(
        width = engine.width(),
        height = engine.height(),
        seed = config.seed.kind(),
        "starting render loop"
    );

    let mut driver = FrameDriver::new(engine);
    loop {
        // Step once, then draw straight from the engine's buffer
        let cells = driver.advance();
        rendering::draw_frame(cells, &config);

        if driver.frames() % LOG_EVERY_FRAMES == 0 {
            let engine = driver.engine();
            info!(
                generation = engine.generation(),
                population = engine.population(),
                step_ms = driver.last_step_time_ms,
                "frame"
            );
        }

        next_frame().await;
    }
}
