use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use life_board::{
    Controller, FrameLimiter, GameState, LoopControl,
    config::{Cli, Config},
    input::EventPoller,
    rendering, ui,
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,life_board=info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn window_conf(config: &Config) -> Conf {
    let (width, height) = config.window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    init_logging();

    let config = Cli::parse()
        .into_config()
        .context("invalid startup configuration")?;

    let (nx, ny) = config.grid_dimensions();
    info!(
        nx,
        ny,
        cell_size = config.cell_size,
        window = ?config.window_size(),
        "starting"
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
    Ok(())
}

fn now_ms() -> u64 {
    (get_time() * 1000.0) as u64
}

async fn run(config: Config) {
    // Window close becomes a Quit event instead of exiting immediately
    prevent_quit();

    let (nx, ny) = config.grid_dimensions();
    let cell_size = config.cell_size as f32;
    let mut state = GameState::new(nx, ny);
    let controller = Controller::new(ui::create_buttons(config.width as f32), cell_size);
    let mut poller = EventPoller::default();
    let mut limiter = FrameLimiter::new(config.max_fps);

    state.sync_clock(now_ms());

    loop {
        if controller.handle_all(&mut state, poller.poll()) == LoopControl::Quit {
            info!(generation = state.generation(), "quit requested");
            break;
        }

        state.tick(now_ms());

        rendering::draw_background();
        rendering::draw_grid(&state, cell_size);
        rendering::draw_controls(
            &state,
            controller.buttons(),
            mouse_position(),
            config.height as f32,
            limiter.fps(),
        );

        next_frame().await;
        limiter.wait();
    }
}
