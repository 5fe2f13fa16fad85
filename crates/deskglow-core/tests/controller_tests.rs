mod common;

use common::{small_catalog, MockScene};
use deskglow_core::catalog::FixtureId;
use deskglow_core::controller::PresetController;
use deskglow_core::scheme::{Scheme, SchemeCatalog};
use deskglow_core::state::LightState;
use deskglow_core::sync::SceneSync;
use smallvec::SmallVec;

fn schemes() -> SchemeCatalog {
    let mk = |name, ids: &[FixtureId]| Scheme {
        name,
        ids: SmallVec::from_slice(ids),
    };
    SchemeCatalog::new(vec![
        ("focus", mk("Focus", &[3])),
        ("pair", mk("Pair", &[1, 2])),
        ("spotOnly", mk("Spot Only", &[99])),
        ("allOff", mk("All Off", &[])),
    ])
}

struct Rig {
    scene: MockScene,
    state: LightState,
    sync: SceneSync<MockScene>,
    controller: PresetController,
}

fn rig() -> Rig {
    Rig {
        scene: MockScene::new(),
        state: LightState::new(),
        sync: SceneSync::new(),
        controller: PresetController::new(schemes()),
    }
}

#[test]
fn select_applies_the_scheme_and_records_it() {
    let catalog = small_catalog();
    let mut r = rig();
    assert!(r
        .controller
        .select("focus", &mut r.scene, &catalog, &mut r.state, &mut r.sync));
    assert_eq!(r.controller.current_ids(), &[3]);
    assert!(r.state.get(3));
    assert!(!r.state.get(1));
    assert_eq!(r.sync.fixture_count(), catalog.len());
}

#[test]
fn unknown_scheme_key_is_a_noop() {
    let catalog = small_catalog();
    let mut r = rig();
    assert!(r
        .controller
        .select("pair", &mut r.scene, &catalog, &mut r.state, &mut r.sync));
    assert!(!r
        .controller
        .select("nope", &mut r.scene, &catalog, &mut r.state, &mut r.sync));
    // previous selection untouched
    assert_eq!(r.controller.current_ids(), &[1, 2]);
    assert!(r.state.get(1) && r.state.get(2));
}

#[test]
fn strip_override_flips_all_on_to_all_off_and_back() {
    let catalog = small_catalog();
    let mut r = rig();
    r.controller
        .select("pair", &mut r.scene, &catalog, &mut r.state, &mut r.sync);

    assert_eq!(r.controller.toggle_strips(&catalog, &mut r.state), Some(false));
    assert!(!r.state.get(1) && !r.state.get(2));

    assert_eq!(r.controller.toggle_strips(&catalog, &mut r.state), Some(true));
    assert!(r.state.get(1) && r.state.get(2));
}

#[test]
fn strip_override_drives_mixed_state_to_all_on() {
    let catalog = small_catalog();
    let mut r = rig();
    r.controller
        .select("pair", &mut r.scene, &catalog, &mut r.state, &mut r.sync);
    r.state.toggle(1); // now mixed: 1 off, 2 on

    assert_eq!(r.controller.toggle_strips(&catalog, &mut r.state), Some(true));
    assert!(r.state.get(1) && r.state.get(2));
}

#[test]
fn strip_override_leaves_outside_ids_untouched() {
    let catalog = small_catalog();
    let mut r = rig();
    r.controller
        .select("pair", &mut r.scene, &catalog, &mut r.state, &mut r.sync);
    r.state.toggle(99); // spot on, outside the strip target set

    let snapshot: Vec<(u32, bool)> = catalog.ids().map(|id| (id, r.state.get(id))).collect();
    r.controller.toggle_strips(&catalog, &mut r.state);
    for (id, was) in snapshot {
        if id == 1 || id == 2 {
            assert_ne!(r.state.get(id), was, "target id {id} should have flipped");
        } else {
            assert_eq!(r.state.get(id), was, "outside id {id} was disturbed");
        }
    }
}

#[test]
fn strip_override_with_no_strip_targets_is_a_noop() {
    let catalog = small_catalog();
    let mut r = rig();
    // spotOnly's single id resolves to the spot fixture, allOff has none
    for key in ["spotOnly", "allOff"] {
        r.controller
            .select(key, &mut r.scene, &catalog, &mut r.state, &mut r.sync);
        let snapshot: Vec<bool> = catalog.ids().map(|id| r.state.get(id)).collect();
        assert_eq!(
            r.controller.toggle_strips(&catalog, &mut r.state),
            None,
            "{key} has no strips to flip"
        );
        let after: Vec<bool> = catalog.ids().map(|id| r.state.get(id)).collect();
        assert_eq!(snapshot, after);
    }
}

#[test]
fn spot_override_only_touches_the_spot() {
    let catalog = small_catalog();
    let mut r = rig();
    r.controller
        .select("focus", &mut r.scene, &catalog, &mut r.state, &mut r.sync);

    assert!(r.controller.toggle_spot(&mut r.state));
    assert!(r.state.get(99));
    assert!(r.state.get(3), "active scheme id must stay on");

    assert!(!r.controller.toggle_spot(&mut r.state));
    assert!(!r.state.get(99));
}
