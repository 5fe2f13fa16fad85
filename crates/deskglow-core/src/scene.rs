//! The render-scene handle the synchronizer materializes fixtures through.
//!
//! The web crate implements this on top of WebGPU; tests implement it with
//! a counting mock. Handles are opaque: the synchronizer owns them for the
//! lifetime of one materialized generation and returns them on tear-down.

use glam::{Quat, Vec3};

/// Rectangular area emitter. Emits along its local -Z axis, like the bar
/// markers it sits behind.
#[derive(Clone, Copy, Debug)]
pub struct AreaEmitterSpec {
    pub position: Vec3,
    pub orientation: Quat,
    pub width: f32,
    pub height: f32,
    pub intensity: f32,
}

/// Narrow-beam spot emitter aimed at a world-space target point.
#[derive(Clone, Copy, Debug)]
pub struct SpotEmitterSpec {
    pub position: Vec3,
    pub target: Vec3,
    pub cone_angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub enum MarkerShape {
    Box { size: Vec3 },
    Cylinder { radius: f32, height: f32 },
}

/// Flat-colored mesh marking where a fixture physically sits.
#[derive(Clone, Copy, Debug)]
pub struct MarkerSpec {
    pub position: Vec3,
    pub orientation: Quat,
    pub shape: MarkerShape,
}

pub trait RenderScene {
    type Emitter;
    type Marker;

    fn add_area_emitter(&mut self, spec: &AreaEmitterSpec) -> Self::Emitter;
    fn add_spot_emitter(&mut self, spec: &SpotEmitterSpec) -> Self::Emitter;
    fn add_marker(&mut self, spec: &MarkerSpec) -> Self::Marker;

    /// Release the object's resources. Tear-down of a whole generation
    /// must complete before the replacement generation is created.
    fn remove_emitter(&mut self, emitter: Self::Emitter);
    fn remove_marker(&mut self, marker: Self::Marker);

    fn update_emitter(&mut self, emitter: &Self::Emitter, visible: bool, color: [f32; 3]);
    fn update_marker(&mut self, marker: &Self::Marker, visible: bool, color: [f32; 3]);
}
