pub mod color;
pub mod config;
pub mod constants;
pub mod displacement;
pub mod field;
pub mod motion;
pub mod nav;
pub mod particles;
pub mod render;
pub mod state;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use color::{ColorError, Palette, Rgb};
pub use config::{FieldConfig, PhysicsTokens};
pub use field::{surface_to_ndc, FrameUniforms, ParticleField, Viewport};
pub use motion::SceneMotion;
pub use nav::{NavState, Section};
pub use particles::ParticleSet;
pub use render::{FieldUniformsGpu, ParticlePass};
pub use state::Camera;
