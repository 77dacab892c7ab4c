//! Terminal front end: render-loop orchestration and presentation.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::Duration;
use swr_core::{Camera, FrameBuffer, Scene, Viewport};

pub mod timer;

pub use timer::FrameTimer;

/// Clear color of every frame.
pub const BACKGROUND: u32 = 0x00FF_FFFF;
/// Stroke color for the wireframe edges.
pub const WIREFRAME: u32 = 0x0000_0000;

const LOCK_FPS: f32 = 60.0;

/// Renders every polygon of every instance into the frame buffer. The buffer
/// is expected to be cleared already; this is the draw step of the frame
/// sequence, split out so it can run without a terminal.
pub fn render_scene(scene: &Scene, camera: &Camera, frame: &mut FrameBuffer) {
    for object in scene.objects() {
        let mesh = scene.mesh(object.mesh);
        for polygon in &mesh.polygons {
            frame.draw_polygon(polygon, &object.world, camera, WIREFRAME);
        }
    }
}

/// Main application struct: owns the scene, camera, frame buffer and timer,
/// and drives one frame per idle iteration of the event loop.
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    frame: FrameBuffer,
    timer: FrameTimer,
    running: bool,
}

impl TerminalApp {
    /// Sizes the camera and frame buffer from the current terminal and wraps
    /// the scene. Surface allocation failure here aborts startup.
    pub fn new(scene: Scene) -> anyhow::Result<Self> {
        let (width, height) = terminal::size()?;
        let viewport = Viewport::new(0, 0, width as u32, height as u32);
        let frame = FrameBuffer::new(viewport.width, viewport.height)?;

        Ok(Self {
            scene,
            camera: Camera::new(viewport),
            frame,
            timer: FrameTimer::new(),
            running: true,
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    /// Classic idle-render loop: drain every pending event, then advance
    /// exactly one frame. A frame always runs to completion; the stop flag is
    /// only observed between frames.
    fn main_loop(&mut self) -> anyhow::Result<()> {
        while self.running {
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }
            self.frame_advance()?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('1') => self.scene.toggle_rotation(0),
                KeyCode::Char('2') => self.scene.toggle_rotation(1),
                _ => {}
            },
            Event::Resize(width, height) => self.resize(width as u32, height as u32),
            _ => {}
        }
    }

    /// Reacts to a viewport change: the projection picks up the new aspect
    /// and the frame buffer is rebuilt before the next clear. A failed
    /// rebuild is reported and the previous buffer keeps presenting.
    fn resize(&mut self, width: u32, height: u32) {
        self.camera
            .set_viewport(Viewport::new(0, 0, width, height));
        if let Err(err) = self.frame.resize(width, height) {
            log::warn!("frame buffer resize to {width}x{height} failed: {err}");
        }
    }

    /// One frame: tick the timer, animate, clear, draw every instance,
    /// present, overlay the frame rate.
    fn frame_advance(&mut self) -> anyhow::Result<()> {
        let elapsed = self.timer.tick(Some(LOCK_FPS));
        self.scene.animate(elapsed);

        self.frame.clear(BACKGROUND);
        render_scene(&self.scene, &self.camera, &mut self.frame);

        let mut out = stdout();
        self.present(&mut out)?;
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Black),
            Print(format!(
                "{} | 1/2 = toggle spin | q = quit",
                self.timer.frame_rate()
            )),
            ResetColor
        )?;
        out.flush()?;
        Ok(())
    }

    /// Blits the whole frame buffer to the terminal, one block glyph per
    /// pixel. Consecutive same-color pixels share one escape sequence.
    fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut active: Option<Color> = None;
        for y in 0..self.frame.height() {
            queue!(out, cursor::MoveTo(0, y as u16))?;
            for x in 0..self.frame.width() {
                let pixel = self.frame.pixel(x, y).unwrap_or(BACKGROUND);
                let color = Color::Rgb {
                    r: (pixel >> 16) as u8,
                    g: (pixel >> 8) as u8,
                    b: pixel as u8,
                };
                if active != Some(color) {
                    queue!(out, SetForegroundColor(color))?;
                    active = Some(color);
                }
                queue!(out, Print('█'))?;
            }
        }
        queue!(out, ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swr_core::{Mesh, Spin, Transform};

    fn demo_scene() -> Scene {
        let mut scene = Scene::new();
        let cube = scene.add_mesh(Mesh::cube(4.0).unwrap());
        scene.add_object(
            cube,
            Transform::translation(-3.5, 2.0, -14.0),
            Spin::new(75.0, 50.0, 25.0),
        );
        scene.add_object(
            cube,
            Transform::translation(3.5, -2.0, -14.0),
            Spin::new(-25.0, 50.0, -75.0),
        );
        scene
    }

    #[test]
    fn rendered_frame_contains_wireframe_pixels() {
        let mut scene = demo_scene();
        let camera = Camera::new(Viewport::new(0, 0, 120, 90));
        let mut frame = FrameBuffer::new(120, 90).unwrap();

        scene.animate(0.016);
        frame.clear(BACKGROUND);
        render_scene(&scene, &camera, &mut frame);

        let inked = frame.pixels().iter().filter(|&&p| p == WIREFRAME).count();
        assert!(inked > 0);
        assert!(frame.pixels().iter().all(|&p| p == WIREFRAME || p == BACKGROUND));
    }

    #[test]
    fn clear_overwrites_the_previous_frame() {
        let scene = demo_scene();
        let camera = Camera::new(Viewport::new(0, 0, 120, 90));
        let mut frame = FrameBuffer::new(120, 90).unwrap();

        frame.clear(BACKGROUND);
        render_scene(&scene, &camera, &mut frame);
        frame.clear(BACKGROUND);

        assert!(frame.pixels().iter().all(|&p| p == BACKGROUND));
    }
}
