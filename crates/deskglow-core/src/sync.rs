//! Scene synchronizer: materializes the catalog into render-scene objects
//! and drives their visibility and color every frame from the state store.

use crate::catalog::{Fixture, FixtureCatalog, FixtureId, FixtureKind};
use crate::constants::{LIGHT_INTENSITY, SPOT_INTENSITY, SPOT_NEUTRAL_RGB};
use crate::hue;
use crate::scene::{AreaEmitterSpec, MarkerShape, MarkerSpec, RenderScene, SpotEmitterSpec};
use crate::state::{LightState, StateView};
use glam::{EulerRot, Quat};

struct LitFixture<B: RenderScene> {
    id: FixtureId,
    group: Option<&'static str>,
    /// Participates in hue cycling; spots keep a fixed neutral tone.
    chromatic: bool,
    emitter: B::Emitter,
    marker: B::Marker,
}

/// Owns the currently materialized generation of fixture objects. All
/// fixtures in the catalog are materialized regardless of the active
/// scheme; visibility is driven per frame from the state store, which
/// avoids allocation churn when the user toggles frequently.
pub struct SceneSync<B: RenderScene> {
    fixtures: Vec<LitFixture<B>>,
}

impl<B: RenderScene> Default for SceneSync<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderScene> SceneSync<B> {
    pub fn new() -> Self {
        Self {
            fixtures: Vec::new(),
        }
    }

    /// Number of currently materialized fixtures.
    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    /// Dispose every object of the current generation. Must run before a
    /// replacement generation is created.
    pub fn clear(&mut self, backend: &mut B) {
        for lit in self.fixtures.drain(..) {
            backend.remove_emitter(lit.emitter);
            backend.remove_marker(lit.marker);
        }
    }

    /// Activate a scheme: tear down the old generation, hard-reset the
    /// state store, then materialize one emitter and one marker for every
    /// catalog fixture. State is reset before materialization so the first
    /// frame after a rebuild already reads correct visibility.
    pub fn rebuild(
        &mut self,
        backend: &mut B,
        catalog: &FixtureCatalog,
        state: &mut LightState,
        ids: &[FixtureId],
    ) {
        for id in ids {
            if !catalog.contains(*id) {
                log::warn!("fixture id {id} not found in catalog, skipping");
            }
        }

        self.clear(backend);
        state.apply_scheme(catalog, ids);

        for fixture in catalog.iter() {
            self.fixtures.push(materialize(backend, fixture));
        }
    }

    /// Per-frame pass: read-only against the state store. Recomputes hue
    /// slots from what is visible right now and pushes visibility + color
    /// to every materialized object.
    pub fn frame(&self, backend: &mut B, state: StateView<'_>, elapsed: f32) {
        let visible: Vec<(FixtureId, Option<&'static str>)> = self
            .fixtures
            .iter()
            .filter(|lit| lit.chromatic && state.get(lit.id))
            .map(|lit| (lit.id, lit.group))
            .collect();
        let (slot_count, slots) = hue::assign_slots(&visible);

        for lit in &self.fixtures {
            let on = state.get(lit.id);
            let color = if !lit.chromatic {
                SPOT_NEUTRAL_RGB
            } else {
                match slots.get(&lit.id) {
                    Some(slot) => hue::slot_color(*slot, slot_count, elapsed),
                    None => SPOT_NEUTRAL_RGB, // off; color is moot
                }
            };
            backend.update_emitter(&lit.emitter, on, color);
            backend.update_marker(&lit.marker, on, color);
        }
    }
}

fn materialize<B: RenderScene>(backend: &mut B, fixture: &Fixture) -> LitFixture<B> {
    let rot = fixture.rotation;
    let orientation = Quat::from_euler(EulerRot::XYZ, rot.x, rot.y, rot.z);
    let (emitter, marker, chromatic) = match fixture.kind {
        FixtureKind::Strip { vertical } => {
            // Vertical strips pitch the emitter (not the marker) about its
            // local x axis so the light projects outward from the member.
            let emit_orientation = if vertical {
                orientation * Quat::from_rotation_x(fixture.outward_pitch())
            } else {
                orientation
            };
            let emitter = backend.add_area_emitter(&AreaEmitterSpec {
                position: fixture.position,
                orientation: emit_orientation,
                width: fixture.size.x,
                height: fixture.size.y,
                intensity: LIGHT_INTENSITY,
            });
            let marker = backend.add_marker(&MarkerSpec {
                position: fixture.position,
                orientation,
                shape: MarkerShape::Box { size: fixture.size },
            });
            (emitter, marker, true)
        }
        FixtureKind::Spot {
            cone_angle,
            penumbra,
            target,
        } => {
            let emitter = backend.add_spot_emitter(&SpotEmitterSpec {
                position: fixture.position,
                target,
                cone_angle,
                penumbra,
                intensity: SPOT_INTENSITY,
            });
            let marker = backend.add_marker(&MarkerSpec {
                position: fixture.position,
                orientation,
                shape: MarkerShape::Cylinder {
                    radius: fixture.size.x / 2.0,
                    height: fixture.size.y,
                },
            });
            (emitter, marker, false)
        }
    };
    LitFixture {
        id: fixture.id,
        group: fixture.group,
        chromatic,
        emitter,
        marker,
    }
}
