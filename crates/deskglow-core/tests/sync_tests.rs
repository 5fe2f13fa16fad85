mod common;

use common::{grouped_strip, small_catalog, spot, strip, MockScene};
use deskglow_core::catalog::FixtureCatalog;
use deskglow_core::constants::SPOT_NEUTRAL_RGB;
use deskglow_core::state::LightState;
use deskglow_core::sync::SceneSync;

#[test]
fn rebuild_materializes_the_whole_catalog() {
    let catalog = small_catalog();
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    sync.rebuild(&mut scene, &catalog, &mut state, &[1]);
    assert_eq!(sync.fixture_count(), catalog.len());
    // one emitter + one marker per fixture, active or not
    assert_eq!(scene.live_objects(), catalog.len() * 2);
}

#[test]
fn repeated_rebuilds_do_not_accumulate() {
    let catalog = small_catalog();
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    for round in 0..10 {
        sync.rebuild(&mut scene, &catalog, &mut state, &[2, 3]);
        assert_eq!(
            scene.live_objects(),
            catalog.len() * 2,
            "object count grew after rebuild {round}"
        );
    }
    // every superseded generation was disposed through the backend
    assert_eq!(scene.disposed, 9 * catalog.len() * 2);
}

#[test]
fn rebuild_resets_state_before_materializing() {
    let catalog = small_catalog();
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    sync.rebuild(&mut scene, &catalog, &mut state, &[1, 3]);
    sync.rebuild(&mut scene, &catalog, &mut state, &[2]);
    assert!(state.get(2));
    assert!(!state.get(1) && !state.get(3));
}

#[test]
fn unknown_scheme_ids_are_skipped_not_fatal() {
    let catalog = small_catalog();
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    // 42 is not in the catalog; the rest of the scheme still applies.
    sync.rebuild(&mut scene, &catalog, &mut state, &[42, 3]);
    assert_eq!(sync.fixture_count(), catalog.len());
    assert!(state.get(3));
    assert!(!state.get(42), "unknown id is never forced on");
}

#[test]
fn frame_pushes_visibility_from_the_store() {
    let catalog = small_catalog();
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    sync.rebuild(&mut scene, &catalog, &mut state, &[1, 3]);
    sync.frame(&mut scene, state.view(), 0.0);

    let visible_emitters = scene.emitters.values().filter(|o| o.visible).count();
    let visible_markers = scene.markers.values().filter(|o| o.visible).count();
    assert_eq!(visible_emitters, 2);
    assert_eq!(visible_markers, 2);

    // manual toggle shows up on the next frame without a rebuild
    state.toggle(2);
    sync.frame(&mut scene, state.view(), 0.1);
    assert_eq!(scene.emitters.values().filter(|o| o.visible).count(), 3);
}

#[test]
fn spot_keeps_a_fixed_neutral_tone() {
    let catalog = small_catalog();
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    sync.rebuild(&mut scene, &catalog, &mut state, &[1, 99]);
    for t in [0.0f32, 1.3, 7.7] {
        sync.frame(&mut scene, state.view(), t);
        let spot_obj = scene
            .emitters
            .values()
            .find(|o| o.spot)
            .expect("spot emitter materialized");
        assert!(spot_obj.visible);
        assert_eq!(spot_obj.color, SPOT_NEUTRAL_RGB, "spot color cycled at t={t}");
    }
}

#[test]
fn grouped_fixtures_share_one_hue() {
    let catalog = FixtureCatalog::new(vec![
        grouped_strip(11, "ring"),
        grouped_strip(12, "ring"),
        grouped_strip(13, "ring"),
        strip(1, 0.3),
        spot(99),
    ])
    .expect("unique ids");
    let mut scene = MockScene::new();
    let mut state = LightState::new();
    let mut sync = SceneSync::new();

    sync.rebuild(&mut scene, &catalog, &mut state, &[11, 12, 13, 1]);
    sync.frame(&mut scene, state.view(), 2.4);

    let mut colors: Vec<[f32; 3]> = scene
        .emitters
        .values()
        .filter(|o| o.visible && !o.spot)
        .map(|o| o.color)
        .collect();
    colors.sort_by(|a, b| a.partial_cmp(b).unwrap());
    colors.dedup();
    // three ring members collapse to one color, the loner gets its own
    assert_eq!(colors.len(), 2, "expected exactly two distinct hues");
}
