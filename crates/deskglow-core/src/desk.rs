//! Parametric desk model: axis-aligned boxes positioned by arithmetic on
//! the shared constants. Pure data; the web crate turns these into lit
//! geometry.

use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct DeskBox {
    pub size: Vec3,
    pub position: Vec3,
}

fn bx(w: f32, h: f32, d: f32, x: f32, y: f32, z: f32) -> DeskBox {
    DeskBox {
        size: Vec3::new(w, h, d),
        position: Vec3::new(x, y, z),
    }
}

pub const DESK_RGB: [f32; 3] = [0.067, 0.067, 0.067];
pub const WALL_RGB: [f32; 3] = [0.96, 0.96, 0.96];
pub const GROUND_RGB: [f32; 3] = [0.92, 0.92, 0.92];

/// Every box of the desk assembly: side legs and bottom shelves, the top
/// and monitor shelves, back panel, upper side walls, the main surface
/// with its front cutout, and the speaker wings.
pub fn desk_boxes() -> Vec<DeskBox> {
    let mut boxes = Vec::with_capacity(16);

    // Side assemblies: one back leg and one bottom shelf per side.
    for sign in [-1.0f32, 1.0] {
        let x = sign * (DESK_WIDTH / 2.0 + FRAME_THICKNESS / 2.0);
        boxes.push(bx(
            FRAME_THICKNESS,
            DESK_HEIGHT,
            FRAME_THICKNESS,
            x,
            DESK_HEIGHT / 2.0,
            -DESK_DEPTH + FRAME_THICKNESS / 2.0,
        ));
        boxes.push(bx(0.4, BOARD_THICKNESS, DESK_DEPTH, x, 0.2, -DESK_DEPTH / 2.0));
    }

    let desk_y = MAIN_DESK_Y;
    let mid_shelf_y = desk_y + 0.1 + BOARD_THICKNESS;
    let top_shelf_y = DESK_HEIGHT - BOARD_THICKNESS / 2.0;

    // Top and monitor shelves span the side frames.
    boxes.push(bx(
        DESK_WIDTH + FRAME_THICKNESS * 2.0,
        BOARD_THICKNESS,
        0.25,
        0.0,
        top_shelf_y,
        -DESK_DEPTH + 0.125,
    ));
    boxes.push(bx(
        DESK_WIDTH + FRAME_THICKNESS * 2.0,
        BOARD_THICKNESS,
        0.35,
        0.0,
        mid_shelf_y,
        -DESK_DEPTH + 0.175,
    ));

    // Back panel between the surface and the monitor shelf.
    boxes.push(bx(
        DESK_WIDTH,
        mid_shelf_y - desk_y - BOARD_THICKNESS,
        BOARD_THICKNESS,
        0.0,
        (desk_y + mid_shelf_y) / 2.0,
        -DESK_DEPTH,
    ));

    // Upper side walls flanking the monitor shelf.
    let upper_wall_height = top_shelf_y - mid_shelf_y;
    for sign in [-1.0f32, 1.0] {
        boxes.push(bx(
            FRAME_THICKNESS,
            upper_wall_height,
            0.35,
            sign * (DESK_WIDTH / 2.0),
            mid_shelf_y + upper_wall_height / 2.0,
            -DESK_DEPTH + 0.175,
        ));
    }

    // Main surface with a front cutout: a back piece plus two side pieces.
    let main_desk_width = DESK_WIDTH + FRAME_THICKNESS * 2.0;
    let cutout_width = 0.5;
    let cutout_depth = 0.15;
    let side_piece_width = (main_desk_width - cutout_width) / 2.0;
    boxes.push(bx(
        main_desk_width,
        BOARD_THICKNESS,
        DESK_DEPTH - cutout_depth,
        0.0,
        desk_y,
        -(cutout_depth + (DESK_DEPTH - cutout_depth) / 2.0),
    ));
    for sign in [-1.0f32, 1.0] {
        boxes.push(bx(
            side_piece_width,
            BOARD_THICKNESS,
            cutout_depth,
            sign * (cutout_width + side_piece_width) / 2.0,
            desk_y,
            -cutout_depth / 2.0,
        ));
    }

    // Speaker wings at the back.
    for sign in [-1.0f32, 1.0] {
        boxes.push(bx(
            0.3,
            BOARD_THICKNESS,
            0.25,
            sign * (DESK_WIDTH / 2.0 + 0.15),
            mid_shelf_y,
            -DESK_DEPTH + 0.125,
        ));
    }

    boxes
}

/// Backdrop wall behind the desk. Rendered dimmed when the camera orbits
/// behind it.
pub fn wall_box() -> DeskBox {
    bx(
        WALL_WIDTH,
        WALL_HEIGHT,
        PANEL_THICKNESS,
        0.0,
        WALL_HEIGHT / 2.0,
        -DESK_DEPTH - 0.05,
    )
}

pub fn ground_box() -> DeskBox {
    bx(
        GROUND_EXTENT,
        PANEL_THICKNESS,
        GROUND_EXTENT,
        0.0,
        -PANEL_THICKNESS / 2.0,
        0.0,
    )
}
