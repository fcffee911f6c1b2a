pub mod color;
pub mod constants;
pub mod dimensions;
pub mod geometry;
pub mod scene;

pub use color::*;
pub use dimensions::*;
pub use geometry::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../../shaders/shadow.wgsl");
