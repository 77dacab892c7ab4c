//! SWR core library - scene data model and software rendering pipeline.
//!
//! Provides the geometry containers, scene instancing and animation, the
//! model -> world -> view -> projection -> screen transform chain, and the
//! off-screen frame buffer with its wireframe rasterizer. Presentation and
//! input are left to the front-end crates.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use error::{AllocationError, SurfaceError};
pub use geometry::{Mesh, Polygon, Vertex};
pub use projection::{Camera, Viewport};
pub use raster::FrameBuffer;
pub use scene::{MeshId, Object, Scene, Spin};
pub use transform::Transform;
