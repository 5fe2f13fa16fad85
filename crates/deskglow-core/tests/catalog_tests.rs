mod common;

use common::strip;
use deskglow_core::catalog::{default_catalog, CatalogError, FixtureCatalog, FixtureKind};
use deskglow_core::constants::SPOT_FIXTURE_ID;
use deskglow_core::scheme::default_schemes;

#[test]
fn duplicate_ids_are_rejected() {
    let err = FixtureCatalog::new(vec![strip(1, 0.0), strip(2, 0.1), strip(1, 0.2)])
        .expect_err("duplicate id must fail");
    assert_eq!(err, CatalogError::DuplicateId(1));
}

#[test]
fn lookup_and_order_follow_insertion() {
    let catalog = FixtureCatalog::new(vec![strip(3, 0.0), strip(1, 0.1), strip(2, 0.2)])
        .expect("unique ids");
    assert_eq!(catalog.len(), 3);
    assert!(catalog.lookup(1).is_some());
    assert!(catalog.lookup(9).is_none());
    let order: Vec<u32> = catalog.ids().collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn default_catalog_is_consistent() {
    let catalog = default_catalog();
    assert!(catalog.len() >= 10, "expected the full fixture set");

    // the reserved spotlight id resolves to a spot fixture
    let spot = catalog.lookup(SPOT_FIXTURE_ID).expect("spotlight present");
    assert!(matches!(spot.kind, FixtureKind::Spot { .. }));

    // strips are thin bars
    for f in catalog.iter() {
        if let FixtureKind::Strip { .. } = f.kind {
            assert!(f.size.x > f.size.y, "{}: strip width should dominate", f.id);
        }
    }
}

#[test]
fn vertical_strips_come_in_symmetric_pairs() {
    let catalog = default_catalog();
    let verticals: Vec<_> = catalog
        .iter()
        .filter(|f| matches!(f.kind, FixtureKind::Strip { vertical: true }))
        .collect();
    assert!(!verticals.is_empty());
    assert_eq!(verticals.len() % 2, 0);
    for f in &verticals {
        let mirrored = verticals.iter().any(|g| {
            g.id != f.id
                && (g.position.x + f.position.x).abs() < 1e-6
                && (g.position.y - f.position.y).abs() < 1e-6
                && (g.position.z - f.position.z).abs() < 1e-6
        });
        assert!(mirrored, "fixture {} has no mirror partner", f.id);
    }
}

#[test]
fn outward_pitch_depends_on_the_centerline_side() {
    let catalog = default_catalog();
    for f in catalog.iter() {
        if matches!(f.kind, FixtureKind::Strip { vertical: true }) {
            if f.position.x < 0.0 {
                assert!(f.outward_pitch() < 0.0, "{}: left side pitches negative", f.id);
            } else {
                assert!(f.outward_pitch() > 0.0, "{}: right side pitches positive", f.id);
            }
        }
    }
}

#[test]
fn underglow_group_has_three_members() {
    let catalog = default_catalog();
    let ring: Vec<_> = catalog
        .iter()
        .filter(|f| f.group == Some("underglow"))
        .collect();
    assert_eq!(ring.len(), 3);
    for f in ring {
        assert!(
            matches!(f.kind, FixtureKind::Strip { vertical: false }),
            "underglow members are horizontal strips"
        );
    }
}

#[test]
fn every_default_scheme_id_resolves() {
    let catalog = default_catalog();
    let schemes = default_schemes();
    assert!(!schemes.is_empty());
    for (key, scheme) in schemes.iter() {
        for id in &scheme.ids {
            assert!(
                catalog.lookup(*id).is_some(),
                "scheme {key} references unknown fixture {id}"
            );
        }
    }
}

#[test]
fn the_all_off_scheme_is_representable() {
    let schemes = default_schemes();
    let all_off = schemes.lookup("allOff").expect("allOff present");
    assert!(all_off.ids.is_empty());
}

#[test]
fn menu_order_is_deterministic() {
    let a: Vec<&str> = default_schemes().iter().map(|(k, _)| k).collect();
    let b: Vec<&str> = default_schemes().iter().map(|(k, _)| k).collect();
    assert_eq!(a, b);
    assert_eq!(a.first().copied(), Some("commandDeck"));
}
