//! Camera, projection and the model-to-screen transform chain.
use nalgebra::{Matrix4, Point3};

/// Origin and extent of the output region, in pixels of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera state: a fixed view matrix and a perspective projection that is
/// recomputed whenever the viewport changes.
pub struct Camera {
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
    viewport: Viewport,
}

/// Vertical field of view of the baseline scene.
pub const FOV_Y: f32 = std::f32::consts::PI / 3.0;
pub const NEAR_PLANE: f32 = 1.01;
pub const FAR_PLANE: f32 = 1000.0;

impl Camera {
    /// Creates a camera with an identity view matrix (the camera does not
    /// move in the baseline scene) looking down -z.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: Matrix4::identity(),
            projection: Matrix4::new_perspective(viewport.aspect(), FOV_Y, NEAR_PLANE, FAR_PLANE),
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn view_matrix(&self) -> &Matrix4<f32> {
        &self.view
    }

    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Adopts a new viewport and rebuilds the projection for its aspect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.projection =
            Matrix4::new_perspective(viewport.aspect(), FOV_Y, NEAR_PLANE, FAR_PLANE);
    }

    /// Maps a model-space point through world, view and projection (each with
    /// its own homogeneous divide) and then into viewport pixel coordinates.
    /// The vertical axis flips because the surface origin is top-left.
    ///
    /// No clipping is performed: a point at or behind the eye plane produces
    /// a nonsense coordinate, matching the baseline renderer. The rasterizer
    /// bounds-checks every pixel write instead.
    pub fn project_to_screen(&self, point: &Point3<f32>, world: &Matrix4<f32>) -> (f32, f32) {
        let p = world.transform_point(point);
        let p = self.view.transform_point(&p);
        let p = self.projection.transform_point(&p);

        let half_w = self.viewport.width as f32 / 2.0;
        let half_h = self.viewport.height as f32 / 2.0;
        let screen_x = p.x * half_w + self.viewport.x as f32 + half_w;
        let screen_y = -p.y * half_h + self.viewport.y as f32 + half_h;

        (screen_x, screen_y)
    }
}
