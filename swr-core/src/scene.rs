//! Scene instances and the per-frame rotation animation.
use nalgebra::Matrix4;

use crate::geometry::Mesh;
use crate::transform::Transform;

/// Non-owning handle to a mesh in the scene's mesh table. Instances share
/// meshes through this handle; the scene keeps every mesh alive for as long
/// as any object references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshId(usize);

/// A mesh instance: which mesh it renders and where that mesh sits in the
/// world. The world matrix is rewritten every frame by [`Scene::animate`].
#[derive(Debug, Clone)]
pub struct Object {
    pub mesh: MeshId,
    pub world: Matrix4<f32>,
}

/// Per-instance rotation rates in degrees per second, plus the enable flag
/// toggled from the host's command boundary.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub enabled: bool,
}

impl Spin {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self {
            yaw,
            pitch,
            roll,
            enabled: true,
        }
    }
}

/// The scene: a mesh table plus the objects instancing those meshes.
#[derive(Debug, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
    objects: Vec<Object>,
    spins: Vec<Spin>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    /// Places an instance of `mesh` with an initial world transform and its
    /// animation rates. Returns the instance index used by
    /// [`Scene::toggle_rotation`].
    pub fn add_object(&mut self, mesh: MeshId, world: Matrix4<f32>, spin: Spin) -> usize {
        self.objects.push(Object { mesh, world });
        self.spins.push(spin);
        self.objects.len() - 1
    }

    pub fn mesh(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.0]
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn rotation_enabled(&self, index: usize) -> bool {
        self.spins.get(index).map_or(false, |s| s.enabled)
    }

    /// Flips the rotation state of one instance. Indices outside the scene
    /// are ignored; the command boundary may be ahead of scene construction.
    pub fn toggle_rotation(&mut self, index: usize) {
        if let Some(spin) = self.spins.get_mut(index) {
            spin.enabled = !spin.enabled;
        }
    }

    /// Advances every enabled instance by `elapsed` seconds: the frame's
    /// rotation is composed onto the accumulated world matrix, so orientation
    /// compounds for as long as rotation stays enabled. Disabled instances
    /// are left untouched.
    ///
    /// The rotation applies in model space (right-multiplied under the
    /// column-vector convention), so an instance spins around its own center
    /// and its translation never moves.
    pub fn animate(&mut self, elapsed: f32) {
        for (object, spin) in self.objects.iter_mut().zip(&self.spins) {
            if !spin.enabled {
                continue;
            }
            let rotation = Transform::rotation_ypr(
                (spin.yaw * elapsed).to_radians(),
                (spin.pitch * elapsed).to_radians(),
                (spin.roll * elapsed).to_radians(),
            );
            object.world *= rotation;
        }
    }
}
