use crate::math::{project_point, rotate_point, Point2, Vec3};

pub const DEFAULT_PITCH: f64 = -25.0;
pub const DEFAULT_YAW: f64 = 30.0;
pub const DEFAULT_DISTANCE: f64 = 4.0;
pub const MIN_DISTANCE: f64 = 1.0;
/// Field of view per pixel of the surface's shorter side (256 on a 600 pixel surface)
pub const FOV_PER_PIXEL: f64 = 256.0 / 600.0;

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Viewport {
            width: width as f64,
            height: height as f64,
        }
    }
}

/// Orbit camera: view angles in degrees, viewer distance and field of view
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pitch: f64,
    pub yaw: f64,
    pub distance: f64,
    pub fov: f64,
    /// Distance at the start of the current zoom drag
    zoom_anchor: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            pitch: DEFAULT_PITCH,
            yaw: DEFAULT_YAW,
            distance: DEFAULT_DISTANCE,
            fov: 256.0,
            zoom_anchor: DEFAULT_DISTANCE,
        }
    }
}

impl Camera {
    /// Applies a rotation drag. The view turns against the pointer.
    pub fn rotate_drag(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.yaw -= dx * sensitivity;
        self.pitch -= dy * sensitivity;
    }

    /// Remembers the current distance as the base of a zoom drag
    pub fn anchor_zoom(&mut self) {
        self.zoom_anchor = self.distance;
    }

    /// Sets the distance from the anchored one plus the drag's total vertical offset
    pub fn zoom_drag(&mut self, dy: f64, sensitivity: f64) {
        self.distance = (self.zoom_anchor + dy * sensitivity).max(MIN_DISTANCE);
    }

    /// Restores the default angles and distance, keeping the field of view
    pub fn reset(&mut self) {
        self.pitch = DEFAULT_PITCH;
        self.yaw = DEFAULT_YAW;
        self.distance = DEFAULT_DISTANCE;
        self.zoom_anchor = DEFAULT_DISTANCE;
    }

    /// Scales the field of view to the surface
    pub fn fit_viewport(&mut self, viewport: Viewport) {
        self.fov = viewport.width.min(viewport.height) * FOV_PER_PIXEL;
    }

    /// World space to view space
    pub fn transform(&self, point: &Vec3) -> Vec3 {
        rotate_point(point, self.pitch, self.yaw)
    }

    /// View space to screen pixels
    pub fn project(&self, point: &Vec3, viewport: Viewport) -> Point2 {
        project_point(point, viewport.width, viewport.height, self.fov, self.distance)
    }
}
