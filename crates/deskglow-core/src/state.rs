//! On/off state of every fixture, owned by the session and injected into
//! the synchronizer and controller. The rendered fixture objects are a
//! derived view; this map is the single source of truth.

use crate::catalog::{FixtureCatalog, FixtureId};
use fnv::FnvHashMap;

#[derive(Default)]
pub struct LightState {
    on: FnvHashMap<FixtureId, bool>,
}

impl LightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hard reset: every id the catalog knows is set to its membership in
    /// `ids`. A total overwrite, not a merge — fixtures left on by a
    /// previous scheme end up off unless the new scheme names them.
    pub fn apply_scheme(&mut self, catalog: &FixtureCatalog, ids: &[FixtureId]) {
        for id in catalog.ids() {
            self.on.insert(id, ids.contains(&id));
        }
    }

    /// Flip one id and return the new value. Ids never seen before read as
    /// off, so the first toggle turns them on. Unknown ids are tracked
    /// without complaint; the catalog decides what physically exists.
    pub fn toggle(&mut self, id: FixtureId) -> bool {
        let v = self.on.entry(id).or_insert(false);
        *v = !*v;
        *v
    }

    pub fn get(&self, id: FixtureId) -> bool {
        self.on.get(&id).copied().unwrap_or(false)
    }

    /// Read-only view for the per-frame pass, which must never mutate.
    pub fn view(&self) -> StateView<'_> {
        StateView { state: self }
    }
}

/// Read access only. Handed to the synchronizer's frame pass so state
/// mutation stays on the controller path.
#[derive(Clone, Copy)]
pub struct StateView<'a> {
    state: &'a LightState,
}

impl StateView<'_> {
    pub fn get(&self, id: FixtureId) -> bool {
        self.state.get(id)
    }
}
