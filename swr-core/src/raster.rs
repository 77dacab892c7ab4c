//! Off-screen frame buffer and wireframe rasterization.
use nalgebra::Matrix4;

use crate::error::SurfaceError;
use crate::geometry::Polygon;
use crate::projection::Camera;

/// Unclipped projections can land arbitrarily far off screen; snapping the
/// endpoints keeps the pixel walk bounded without touching visible geometry.
const COORD_LIMIT: f32 = 16_384.0;

/// A resizable off-screen color surface, `0x00RRGGBB` per pixel, row-major
/// with the origin at the top-left. Fully rewritten every frame.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Allocates the backing storage, zero-filled. Fails with
    /// [`SurfaceError::Creation`] when the allocation cannot be made.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixels = Self::allocate(width, height)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn allocate(width: u32, height: u32) -> Result<Vec<u32>, SurfaceError> {
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len)?;
        pixels.resize(len, 0);
        Ok(pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Replaces the backing storage to match a new viewport size. Old
    /// contents are dropped. On failure the existing buffer is left intact so
    /// the caller can keep presenting the previous frame.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let pixels = Self::allocate(width, height)?;
        self.pixels = pixels;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Fills the whole surface with a solid color.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: u32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Rasterizes a single-pixel-wide line between two projected screen
    /// points (Bresenham). Off-screen portions are silently dropped; edges
    /// with non-finite endpoints draw nothing.
    pub fn draw_edge(&mut self, p0: (f32, f32), p1: (f32, f32), color: u32) {
        if !(p0.0.is_finite() && p0.1.is_finite() && p1.0.is_finite() && p1.1.is_finite()) {
            return;
        }
        let snap = |v: f32| v.clamp(-COORD_LIMIT, COORD_LIMIT) as i64;
        let (mut x0, mut y0) = (snap(p0.0), snap(p0.1));
        let (x1, y1) = (snap(p1.0), snap(p1.1));

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Projects every vertex of the polygon and draws the closed edge loop:
    /// each consecutive pair plus the edge from the last vertex back to the
    /// first. Returns the number of edges drawn.
    pub fn draw_polygon(
        &mut self,
        polygon: &Polygon,
        world: &Matrix4<f32>,
        camera: &Camera,
        color: u32,
    ) -> usize {
        let count = polygon.vertices.len();
        if count < 2 {
            return 0;
        }

        let mut previous = camera.project_to_screen(&polygon.vertices[0].position, world);
        let mut drawn = 0;
        for v in 1..=count {
            let current =
                camera.project_to_screen(&polygon.vertices[v % count].position, world);
            self.draw_edge(previous, current, color);
            previous = current;
            drawn += 1;
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;
    use crate::projection::Viewport;

    fn square_at(z: f32) -> Polygon {
        let mut polygon = Polygon::new();
        polygon.add_vertices(4).unwrap();
        polygon.vertices[0] = Vertex::new(-0.5, 0.5, z);
        polygon.vertices[1] = Vertex::new(0.5, 0.5, z);
        polygon.vertices[2] = Vertex::new(0.5, -0.5, z);
        polygon.vertices[3] = Vertex::new(-0.5, -0.5, z);
        polygon
    }

    #[test]
    fn clear_is_idempotent() {
        let mut once = FrameBuffer::new(16, 16).unwrap();
        let mut twice = FrameBuffer::new(16, 16).unwrap();
        once.clear(0x0012_3456);
        twice.clear(0x0012_3456);
        twice.clear(0x0012_3456);
        assert_eq!(once.pixels(), twice.pixels());
    }

    #[test]
    fn draw_edge_covers_both_endpoints() {
        let mut frame = FrameBuffer::new(8, 8).unwrap();
        frame.draw_edge((1.0, 1.0), (5.0, 5.0), 0x00FF_0000);
        assert_eq!(frame.pixel(1, 1), Some(0x00FF_0000));
        assert_eq!(frame.pixel(3, 3), Some(0x00FF_0000));
        assert_eq!(frame.pixel(5, 5), Some(0x00FF_0000));
        assert_eq!(frame.pixel(0, 7), Some(0));
    }

    #[test]
    fn draw_edge_clips_pixel_writes_to_bounds() {
        let mut frame = FrameBuffer::new(4, 4).unwrap();
        frame.draw_edge((-10.0, 2.0), (10.0, 2.0), 0x00AB_CDEF);
        for x in 0..4 {
            assert_eq!(frame.pixel(x, 2), Some(0x00AB_CDEF));
        }
        assert_eq!(frame.pixel(0, 0), Some(0));
    }

    #[test]
    fn non_finite_endpoints_draw_nothing() {
        let mut frame = FrameBuffer::new(4, 4).unwrap();
        frame.draw_edge((f32::NAN, 0.0), (2.0, 2.0), 0x00FF_FFFF);
        frame.draw_edge((0.0, 0.0), (f32::INFINITY, 2.0), 0x00FF_FFFF);
        assert!(frame.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn draw_polygon_emits_closing_edge() {
        let camera = Camera::new(Viewport::new(0, 0, 64, 64));
        let mut frame = FrameBuffer::new(64, 64).unwrap();

        let edges = frame.draw_polygon(&square_at(-2.0), &Matrix4::identity(), &camera, 0x00);
        assert_eq!(edges, 4);
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let camera = Camera::new(Viewport::new(0, 0, 64, 64));
        let mut frame = FrameBuffer::new(64, 64).unwrap();

        let empty = Polygon::new();
        assert_eq!(frame.draw_polygon(&empty, &Matrix4::identity(), &camera, 0), 0);

        let single = Polygon::with_vertices(1).unwrap();
        assert_eq!(frame.draw_polygon(&single, &Matrix4::identity(), &camera, 0), 0);

        // Two vertices walk the segment forward and back, as the closed-loop
        // rule dictates.
        let pair = Polygon::with_vertices(2).unwrap();
        assert_eq!(frame.draw_polygon(&pair, &Matrix4::identity(), &camera, 0), 2);
    }

    #[test]
    fn square_renders_symmetric_about_center() {
        let camera = Camera::new(Viewport::new(0, 0, 100, 100));
        let mut frame = FrameBuffer::new(100, 100).unwrap();
        frame.clear(0x00FF_FFFF);
        frame.draw_polygon(&square_at(-2.0), &Matrix4::identity(), &camera, 0x0000_0000);

        let marked: Vec<(u32, u32)> = (0..100)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y) == Some(0))
            .collect();
        assert!(!marked.is_empty());
        for &(x, y) in &marked {
            // The mirrored pixel is also part of the outline.
            assert_eq!(frame.pixel(99 - x, 99 - y), Some(0));
        }
    }

    #[test]
    fn resize_swaps_dimensions_and_drops_contents() {
        let mut frame = FrameBuffer::new(800, 600).unwrap();
        frame.clear(0x00FF_FFFF);

        frame.resize(640, 480).unwrap();
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
        assert_eq!(frame.pixels().len(), 640 * 480);
        assert!(frame.pixels().iter().all(|&p| p == 0));
    }
}
