//! Translates user selections into state-store operations.

use crate::catalog::{FixtureCatalog, FixtureId, FixtureKind};
use crate::constants::SPOT_FIXTURE_ID;
use crate::scene::RenderScene;
use crate::scheme::{IdSet, SchemeCatalog};
use crate::state::LightState;
use crate::sync::SceneSync;

/// Preset/switch controller. Scheme selection hard-resets through a full
/// rebuild; override switches flip their target set in place with plain
/// toggles and never disturb ids outside it.
pub struct PresetController {
    schemes: SchemeCatalog,
    current: IdSet,
}

impl PresetController {
    pub fn new(schemes: SchemeCatalog) -> Self {
        Self {
            schemes,
            current: IdSet::new(),
        }
    }

    pub fn schemes(&self) -> &SchemeCatalog {
        &self.schemes
    }

    /// Ids of the last selected scheme.
    pub fn current_ids(&self) -> &[FixtureId] {
        &self.current
    }

    /// Apply the named scheme. Returns false (and does nothing) for an
    /// unknown key.
    pub fn select<B: RenderScene>(
        &mut self,
        key: &str,
        backend: &mut B,
        catalog: &FixtureCatalog,
        state: &mut LightState,
        sync: &mut SceneSync<B>,
    ) -> bool {
        let Some(scheme) = self.schemes.lookup(key) else {
            log::warn!("unknown scheme {key:?}");
            return false;
        };
        self.current = scheme.ids.clone();
        sync.rebuild(backend, catalog, state, &self.current);
        true
    }

    /// Flip every strip fixture of the current scheme: all on -> all off,
    /// anything else -> all on. Returns the driven state, or None when the
    /// current scheme has no strips (a no-op).
    pub fn toggle_strips(&self, catalog: &FixtureCatalog, state: &mut LightState) -> Option<bool> {
        let targets: IdSet = self
            .current
            .iter()
            .copied()
            .filter(|id| {
                matches!(
                    catalog.lookup(*id).map(|f| &f.kind),
                    Some(FixtureKind::Strip { .. })
                )
            })
            .collect();
        if targets.is_empty() {
            return None;
        }
        Some(toggle_set(state, &targets))
    }

    /// Flip the spotlight, independent of the active scheme.
    pub fn toggle_spot(&self, state: &mut LightState) -> bool {
        toggle_set(state, &[SPOT_FIXTURE_ID])
    }
}

/// Drive every id in `targets` to the opposite of "all currently on",
/// using single-id toggles so untargeted ids are provably untouched.
fn toggle_set(state: &mut LightState, targets: &[FixtureId]) -> bool {
    let all_on = targets.iter().all(|id| state.get(*id));
    let desired = !all_on;
    for id in targets {
        if state.get(*id) != desired {
            state.toggle(*id);
        }
    }
    desired
}
