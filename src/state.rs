use crate::camera::{Camera, Viewport};
use crate::config::Controls;
use crate::cube::{Cube, MIN_DIMENSION};
use crate::geometry::build_quads;
use crate::graphics::{composite, Canvas};
use crate::input::Command;
use crate::moves::Turn;
use crate::net::draw_net;
use tracing::{debug, info, warn};

/// Which picture of the cube is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Perspective render of the whole cube
    Solid,
    /// Flat cross of the six faces
    Net,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Solid => View::Net,
            View::Net => View::Solid,
        }
    }
}

/// Whether the main loop keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub cube: Cube,
    pub camera: Camera,
    pub view: View,
    /// Most recent move that was applied
    pub last_move: Option<Turn>,
    /// Why the most recent move was refused, until the next successful one
    pub message: Option<String>,
    controls: Controls,
    canvas: Canvas,
}

impl AppState {
    pub fn new(cube: Cube, controls: Controls) -> Self {
        AppState {
            cube,
            camera: Camera::default(),
            view: View::Solid,
            last_move: None,
            message: None,
            controls,
            canvas: Canvas::new(0, 0),
        }
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Turn(turn) => self.turn(turn),
            Command::RotateCamera { dx, dy } => {
                self.camera
                    .rotate_drag(dx, dy, self.controls.rotate_sensitivity)
            }
            Command::AnchorZoom => self.camera.anchor_zoom(),
            Command::Zoom { dy } => self.camera.zoom_drag(dy, self.controls.zoom_sensitivity),
            Command::ResizeCube { delta } => self.resize_cube(delta),
            Command::ResetCamera => {
                self.camera.reset();
                info!("camera reset");
            }
            Command::ToggleView => self.view = self.view.toggled(),
            Command::Resize { width, height } => {
                self.canvas = Canvas::new(width, height);
                self.camera.fit_viewport(Viewport::new(width, height));
                debug!(width, height, "surface resized");
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn turn(&mut self, turn: Turn) {
        match self.cube.apply(turn) {
            Ok(()) => {
                self.last_move = Some(turn);
                self.message = None;
                debug!(%turn, "applied move\n{}", self.cube);
            }
            Err(err) => {
                warn!(%turn, %err, "move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Replaces the cube with a solved one `delta` sizes larger or smaller
    fn resize_cube(&mut self, delta: isize) {
        let dimension = self
            .cube
            .dimension()
            .saturating_add_signed(delta)
            .max(MIN_DIMENSION);
        if dimension == self.cube.dimension() {
            return;
        }
        match Cube::new(dimension) {
            Ok(cube) => {
                self.cube = cube;
                self.last_move = None;
                self.message = None;
                info!(dimension, "cube resized");
            }
            Err(err) => warn!(%err, "cube not resized"),
        }
    }

    /// Redraws the current view and returns the finished frame
    pub fn render(&mut self) -> &Canvas {
        self.canvas.clear();
        match self.view {
            View::Solid => {
                let viewport = Viewport::new(self.canvas.width(), self.canvas.height());
                composite(&mut self.canvas, build_quads(&self.cube, &self.camera, viewport));
            }
            View::Net => draw_net(&mut self.canvas, &self.cube),
        }
        &self.canvas
    }

    pub fn status_line(&self) -> String {
        let n = self.cube.dimension();
        let detail = match (&self.message, self.last_move) {
            (Some(message), _) => message.clone(),
            (None, Some(turn)) => format!("last {turn}"),
            (None, None) if self.cube.is_solved() => "solved".to_owned(),
            (None, None) => String::new(),
        };
        let view = match self.view {
            View::Solid => "3d",
            View::Net => "net",
        };
        format!(
            "{n}x{n} {view} {detail} | yaw {:.0} pitch {:.0} dist {:.1} | udfblrmes turn, shift inverts, w reset, v view, +/- size, q quit",
            self.camera.yaw, self.camera.pitch, self.camera.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{DEFAULT_DISTANCE, DEFAULT_YAW};
    use crate::face::Face;
    use crate::graphics::BACKGROUND;
    use crate::moves::Move;

    fn state(n: usize) -> AppState {
        AppState::new(Cube::new(n).unwrap(), Controls::default())
    }

    #[test]
    fn turns_update_cube_and_last_move() {
        let mut state = state(3);
        let f = Turn::clockwise(Move::F);
        assert_eq!(state.apply(Command::Turn(f)), Flow::Continue);
        assert_eq!(state.last_move, Some(f));
        assert!(!state.cube.is_solved());
        assert!(state.status_line().starts_with("3x3 3d last F |"));
    }

    #[test]
    fn rejected_slice_leaves_cube_alone() {
        let mut state = state(4);
        state.apply(Command::Turn(Turn::clockwise(Move::M)));
        assert!(state.cube.is_solved());
        assert_eq!(state.last_move, None);
        assert!(state.message.is_some());
    }

    #[test]
    fn resizing_the_cube_starts_solved_and_stops_at_minimum() {
        let mut state = state(3);
        state.apply(Command::Turn(Turn::clockwise(Move::R)));
        state.apply(Command::ResizeCube { delta: 1 });
        assert_eq!(state.cube.dimension(), 4);
        assert!(state.cube.is_solved());
        assert_eq!(state.last_move, None);
        for _ in 0..5 {
            state.apply(Command::ResizeCube { delta: -1 });
        }
        assert_eq!(state.cube.dimension(), MIN_DIMENSION);
    }

    #[test]
    fn camera_commands_use_controls() {
        let mut state = state(3);
        state.apply(Command::RotateCamera { dx: 5.0, dy: 0.0 });
        assert_eq!(state.camera.yaw, DEFAULT_YAW - 10.0);
        state.apply(Command::AnchorZoom);
        state.apply(Command::Zoom { dy: 10.0 });
        assert_eq!(state.camera.distance, DEFAULT_DISTANCE + 1.0);
        state.apply(Command::ResetCamera);
        assert_eq!(state.camera.yaw, DEFAULT_YAW);
        assert_eq!(state.camera.distance, DEFAULT_DISTANCE);
    }

    #[test]
    fn quit_stops_the_loop() {
        assert_eq!(state(2).apply(Command::Quit), Flow::Quit);
    }

    #[test]
    fn renders_both_views() {
        let mut state = state(3);
        state.apply(Command::Resize {
            width: 80,
            height: 60,
        });
        let solid = state.render().clone();
        assert_eq!((solid.width(), solid.height()), (80, 60));
        // The cube covers the middle of the surface, the corners stay empty.
        assert_ne!(solid.get(40, 30), Some(BACKGROUND));
        assert_eq!(solid.get(0, 0), Some(BACKGROUND));

        state.apply(Command::ToggleView);
        assert_eq!(state.view, View::Net);
        let net = state.render();
        assert_ne!(*net, solid);
        assert!(net.rows().flatten().any(|&c| c == Face::D.color()));
    }
}
