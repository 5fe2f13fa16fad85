//! Hue slot assignment for the per-frame color pass.
//!
//! Visible chromatic fixtures share the color wheel: each ungrouped fixture
//! owns a slot, each group with a visible member owns a single slot, and
//! the hues are spaced evenly among the slots while drifting with elapsed
//! time. Two simultaneously visible fixtures only ever share a hue when
//! they share a group.

use crate::catalog::FixtureId;
use crate::constants::HUE_DRIFT_PER_SEC;
use fnv::FnvHashMap;

/// Assign wheel slots to the visible chromatic fixtures, in the order
/// given (catalog order keeps the palette stable between frames). Returns
/// the slot count and the per-fixture slot index; grouped fixtures map to
/// their group's slot.
pub fn assign_slots(
    visible: &[(FixtureId, Option<&'static str>)],
) -> (usize, FnvHashMap<FixtureId, usize>) {
    let mut slots = FnvHashMap::default();
    let mut group_slots: FnvHashMap<&str, usize> = FnvHashMap::default();
    let mut next = 0usize;
    for (id, group) in visible {
        let slot = match group {
            Some(g) => *group_slots.entry(*g).or_insert_with(|| {
                let s = next;
                next += 1;
                s
            }),
            None => {
                let s = next;
                next += 1;
                s
            }
        };
        slots.insert(*id, slot);
    }
    (next, slots)
}

/// Hue of a slot at a given instant, in [0, 1).
pub fn slot_hue(slot: usize, slot_count: usize, elapsed: f32) -> f32 {
    let n = slot_count.max(1) as f32;
    (elapsed * HUE_DRIFT_PER_SEC + slot as f32 / n).rem_euclid(1.0)
}

pub fn slot_color(slot: usize, slot_count: usize, elapsed: f32) -> [f32; 3] {
    hsl_to_rgb(slot_hue(slot, slot_count, elapsed), 1.0, 0.5)
}

/// HSL to RGB, all components in [0, 1]. The standard CSS-style conversion;
/// we only feed it fully-saturated, half-lightness colors.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h * 6.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}
