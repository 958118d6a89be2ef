use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life_canvas::{Config, FrameLoop, input};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ::rand::rng();
    let mut app = match FrameLoop::new(Config::default(), &mut rng) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to start: {err}");
            std::process::exit(1);
        }
    };

    // Route the window close box through the event stream instead of
    // letting macroquad end the process mid-frame.
    prevent_quit();

    loop {
        let events = input::poll_events();
        app.handle(&events);
        if app.should_quit() {
            break;
        }
        app.advance();
        app.draw();
        next_frame().await;
    }

    info!(generation = app.generation(), "exiting");
}
