//! CPU-only 3D triangle rasterization pipeline
//!
//! Features:
//! - 3D vector / 4x4 homogeneous matrix math with perspective projection
//! - Triangles carrying one color per vertex through every transform
//! - Two rasterizers: edge-function/barycentric and scanline, both with
//!   per-vertex color interpolation
//! - Simple directional lighting with an ambient floor
//! - Painter's algorithm only: no z-buffer, no clipping, no textures
//!
//! The pipeline is single-threaded and best-effort: out-of-bounds pixel
//! writes are dropped, degenerate triangles are skipped, and pathological
//! floats propagate rather than panic. Windowing, input, and procedural
//! content live outside this crate and only consume its public operations.

mod math;
mod palette;
mod render;
mod types;

pub use math::*;
pub use palette::*;
pub use render::*;
pub use types::*;
