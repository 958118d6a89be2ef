use macroquad::prelude::clear_background;
use rand::Rng;
use tracing::{debug, info};

use super::Viewport;
use crate::config::Config;
use crate::domain::{Cell, GridState};
use crate::error::Error;
use crate::input::{Command, InputController, InputEvent, ZoomDirection};
use crate::rendering::{ALIVE_COLOR, BatchMesh, CLEAR_COLOR, DEAD_COLOR};

/// FrameLoop sequences one tick of the application: drain input, advance
/// the simulation, rebatch the mesh, submit it through the viewport
/// transform. It holds the components but owns no window; macroquad keeps
/// that, along with frame pacing.
pub struct FrameLoop {
    config: Config,
    grid: GridState,
    mesh: BatchMesh,
    viewport: Viewport,
    controller: InputController,
    generation: u64,
    quit: bool,
}

impl FrameLoop {
    /// Build every component from the validated config and seed the board
    /// from the injected random source.
    pub fn new<R: Rng>(config: Config, rng: &mut R) -> Result<Self, Error> {
        config.validate()?;

        let mut grid = GridState::new(config.grid_width, config.grid_height)?;
        grid.randomize(rng);
        let mesh = BatchMesh::new(config.cell_size(), config.grid_width, config.grid_height)?;
        let viewport = Viewport::new(&config)?;

        info!(
            grid_width = config.grid_width,
            grid_height = config.grid_height,
            population = grid.population(),
            "simulation seeded"
        );

        Ok(Self {
            config,
            grid,
            mesh,
            viewport,
            controller: InputController::new(),
            generation: 0,
            quit: false,
        })
    }

    /// Drain this tick's pending events, fully applying each command
    /// before interpreting the next event.
    pub fn handle(&mut self, events: &[InputEvent]) {
        for &event in events {
            if let Some(command) = self.controller.interpret(event, &self.config) {
                self.apply(command);
            }
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::PaintCell { x, y } => self.grid.set(x, y, Cell::Alive),
            Command::BeginDrag(pos) => self.viewport.begin_drag(pos),
            Command::EndDrag => self.viewport.end_drag(),
            Command::Pan(pos) => self.viewport.drag_to(pos),
            Command::Zoom(ZoomDirection::In) => self.viewport.zoom_in(),
            Command::Zoom(ZoomDirection::Out) => self.viewport.zoom_out(),
            Command::Quit => {
                debug!(generation = self.generation, "quit requested");
                self.quit = true;
            }
        }
    }

    /// Advance one generation and rebatch every cell from the new state.
    /// The displayed generation is always the one just computed.
    pub fn advance(&mut self) {
        self.grid.step();
        self.generation += 1;

        for (x, y, cell) in self.grid.iter_cells() {
            let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
            self.mesh.batch(x, y, color);
        }
    }

    /// Clear the window and submit the batched board once.
    pub fn draw(&self) {
        clear_background(CLEAR_COLOR);
        self.mesh.render(&self.viewport.transform());
    }

    /// Cooperative termination flag, checked at the top of each iteration
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;
    use macroquad::math::vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn frame_loop() -> FrameLoop {
        let config = Config {
            window_width: 100,
            window_height: 100,
            grid_width: 10,
            grid_height: 10,
            ..Config::default()
        };
        FrameLoop::new(config, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn test_paint_event_sets_cell() {
        let mut app = frame_loop();
        app.handle(&[InputEvent::ButtonPressed {
            button: PointerButton::Paint,
            pos: vec2(35.0, 72.0),
        }]);
        assert_eq!(app.grid().get(3, 7), Some(Cell::Alive));
    }

    #[test]
    fn test_offscreen_paint_is_absorbed() {
        let mut app = frame_loop();
        app.handle(&[InputEvent::ButtonPressed {
            button: PointerButton::Paint,
            pos: vec2(-50.0, 1000.0),
        }]);
        // Clamped to the window edge, one past the last row; dropped by the
        // grid's bounds check without disturbing the frame.
        assert!(!app.should_quit());
    }

    #[test]
    fn test_drag_session_pans_viewport() {
        let mut app = frame_loop();
        app.handle(&[
            InputEvent::ButtonPressed {
                button: PointerButton::Pan,
                pos: vec2(10.0, 10.0),
            },
            InputEvent::PointerMoved {
                pos: vec2(17.0, 13.0),
            },
        ]);
        assert_eq!(app.viewport().transform().offset, vec2(7.0, 3.0));

        app.handle(&[
            InputEvent::ButtonReleased {
                button: PointerButton::Pan,
                pos: vec2(17.0, 13.0),
            },
            InputEvent::PointerMoved {
                pos: vec2(40.0, 40.0),
            },
        ]);
        assert_eq!(app.viewport().transform().offset, vec2(7.0, 3.0));
    }

    #[test]
    fn test_close_event_raises_quit_flag() {
        let mut app = frame_loop();
        assert!(!app.should_quit());
        app.handle(&[InputEvent::CloseRequested]);
        assert!(app.should_quit());
    }

    #[test]
    fn test_advance_counts_generations() {
        let mut app = frame_loop();
        app.advance();
        app.advance();
        assert_eq!(app.generation(), 2);
    }
}
