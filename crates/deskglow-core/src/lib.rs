pub mod catalog;
pub mod constants;
pub mod controller;
pub mod desk;
pub mod hue;
pub mod scene;
pub mod scheme;
pub mod state;
pub mod sync;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use catalog::*;
pub use constants::*;
pub use controller::*;
pub use scene::*;
pub use scheme::*;
pub use state::*;
pub use sync::*;
