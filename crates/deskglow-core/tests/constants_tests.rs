// Relationships between the desk constants; the catalog and desk model
// both lean on these.

use deskglow_core::constants::*;
use deskglow_core::desk::{desk_boxes, ground_box, wall_box};

#[test]
#[allow(clippy::assertions_on_constants)]
fn desk_dimensions_are_positive_and_ordered() {
    assert!(DESK_WIDTH > 0.0 && DESK_HEIGHT > 0.0 && DESK_DEPTH > 0.0);
    assert!(FRAME_THICKNESS > 0.0 && BOARD_THICKNESS > 0.0);
    assert!(BOARD_THICKNESS < FRAME_THICKNESS * 2.0);

    // shelf stack fits inside the frame height
    assert!(TOP_SHELF_Y < DESK_HEIGHT);
    assert!(MAIN_DESK_Y < TOP_SHELF_Y);
    assert!(SIDE_PANEL_Y > MAIN_DESK_Y && SIDE_PANEL_Y < TOP_SHELF_Y);
    assert!(UPPER_LEG_Y > SIDE_PANEL_Y);
    assert!(UPPER_LEG_HEIGHT < SIDE_PANEL_HEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn light_tuning_is_sane() {
    assert!(LIGHT_THICKNESS > 0.0 && LIGHT_THICKNESS < BOARD_THICKNESS);
    assert!(LIGHT_INTENSITY > 0.0 && SPOT_INTENSITY > 0.0);
    assert!(HUE_DRIFT_PER_SEC > 0.0 && HUE_DRIFT_PER_SEC < 1.0);
    for c in SPOT_NEUTRAL_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn desk_boxes_stay_inside_the_room() {
    let boxes = desk_boxes();
    assert!(boxes.len() >= 14, "expected the full assembly");
    for b in &boxes {
        assert!(b.size.x > 0.0 && b.size.y > 0.0 && b.size.z > 0.0);
        assert!(b.position.y >= 0.0 && b.position.y <= DESK_HEIGHT);
        assert!(b.position.x.abs() < GROUND_EXTENT / 2.0);
        // the desk hugs the wall, nothing pokes through it
        assert!(b.position.z - b.size.z / 2.0 >= -DESK_DEPTH - BOARD_THICKNESS);
    }
}

#[test]
fn backdrop_sits_behind_the_desk() {
    let wall = wall_box();
    assert!(wall.position.z < -DESK_DEPTH);
    assert!(wall.size.x >= DESK_WIDTH && wall.size.y >= DESK_HEIGHT);

    let ground = ground_box();
    assert!(ground.position.y <= 0.0);
    assert!(ground.size.x >= DESK_WIDTH);
}
