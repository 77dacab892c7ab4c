//! SWR terminal demo - two spinning wireframe cubes.
//!
//! Controls:
//!   - 1 / 2: toggle rotation of the first / second cube
//!   - Q / ESC: quit

use anyhow::Context;
use swr_core::{Mesh, Scene, Spin, Transform};
use swr_terminal::TerminalApp;

/// Builds the fixed demo scene: one cube mesh instanced twice, offset to
/// either side of the camera axis. Any growth failure aborts startup before
/// a partial scene can render.
fn build_scene() -> anyhow::Result<Scene> {
    let mut scene = Scene::new();
    let cube = scene.add_mesh(Mesh::cube(4.0).context("building the cube mesh")?);

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

    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("starting swr terminal renderer");

    let scene = build_scene()?;
    let mut app = TerminalApp::new(scene).context("initialising the terminal renderer")?;
    app.run()
}
