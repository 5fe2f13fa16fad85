#![allow(dead_code)]
// Shared helpers for the integration tests: a counting mock of the
// render-scene handle plus small synthetic catalogs.

use deskglow_core::catalog::{Fixture, FixtureCatalog, FixtureId, FixtureKind};
use deskglow_core::scene::{AreaEmitterSpec, MarkerSpec, RenderScene, SpotEmitterSpec};
use glam::Vec3;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
pub struct MockObject {
    pub visible: bool,
    pub color: [f32; 3],
    pub spot: bool,
}

/// Render-scene mock that tracks live objects so tests can prove rebuilds
/// never accumulate resources.
#[derive(Default)]
pub struct MockScene {
    next: u32,
    pub emitters: HashMap<u32, MockObject>,
    pub markers: HashMap<u32, MockObject>,
    pub disposed: usize,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_objects(&self) -> usize {
        self.emitters.len() + self.markers.len()
    }

    fn fresh(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

impl RenderScene for MockScene {
    type Emitter = u32;
    type Marker = u32;

    fn add_area_emitter(&mut self, _spec: &AreaEmitterSpec) -> u32 {
        let h = self.fresh();
        self.emitters.insert(
            h,
            MockObject {
                visible: false,
                color: [0.0; 3],
                spot: false,
            },
        );
        h
    }

    fn add_spot_emitter(&mut self, _spec: &SpotEmitterSpec) -> u32 {
        let h = self.fresh();
        self.emitters.insert(
            h,
            MockObject {
                visible: false,
                color: [0.0; 3],
                spot: true,
            },
        );
        h
    }

    fn add_marker(&mut self, _spec: &MarkerSpec) -> u32 {
        let h = self.fresh();
        self.markers.insert(
            h,
            MockObject {
                visible: false,
                color: [0.0; 3],
                spot: false,
            },
        );
        h
    }

    fn remove_emitter(&mut self, emitter: u32) {
        assert!(
            self.emitters.remove(&emitter).is_some(),
            "removing unknown emitter handle {emitter}"
        );
        self.disposed += 1;
    }

    fn remove_marker(&mut self, marker: u32) {
        assert!(
            self.markers.remove(&marker).is_some(),
            "removing unknown marker handle {marker}"
        );
        self.disposed += 1;
    }

    fn update_emitter(&mut self, emitter: &u32, visible: bool, color: [f32; 3]) {
        let obj = self.emitters.get_mut(emitter).expect("live emitter");
        obj.visible = visible;
        obj.color = color;
    }

    fn update_marker(&mut self, marker: &u32, visible: bool, color: [f32; 3]) {
        let obj = self.markers.get_mut(marker).expect("live marker");
        obj.visible = visible;
        obj.color = color;
    }
}

pub fn strip(id: FixtureId, x: f32) -> Fixture {
    Fixture {
        id,
        label: "test strip",
        size: Vec3::new(1.0, 0.01, 0.01),
        position: Vec3::new(x, 1.0, 0.0),
        rotation: Vec3::ZERO,
        group: None,
        kind: FixtureKind::Strip { vertical: false },
    }
}

pub fn grouped_strip(id: FixtureId, group: &'static str) -> Fixture {
    Fixture {
        group: Some(group),
        ..strip(id, 0.0)
    }
}

pub fn spot(id: FixtureId) -> Fixture {
    Fixture {
        id,
        label: "test spot",
        size: Vec3::new(0.06, 0.04, 0.06),
        position: Vec3::new(0.0, 1.4, 0.0),
        rotation: Vec3::ZERO,
        group: None,
        kind: FixtureKind::Spot {
            cone_angle: std::f32::consts::FRAC_PI_6,
            penumbra: 0.3,
            target: Vec3::ZERO,
        },
    }
}

/// Catalog used by the end-to-end scenario: three strips and the spot.
pub fn small_catalog() -> FixtureCatalog {
    FixtureCatalog::new(vec![strip(1, -0.5), strip(2, 0.0), strip(3, 0.5), spot(99)])
        .expect("unique ids")
}
