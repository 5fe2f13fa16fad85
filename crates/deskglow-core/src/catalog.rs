use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

pub type FixtureId = u32;

/// Fixture flavor, resolved once when the catalog is built so the per-frame
/// path never branches on raw ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FixtureKind {
    Strip {
        /// Mounted on a vertical member; the emitter gets an extra outward
        /// pitch whose sign depends on the side of the desk centerline.
        vertical: bool,
    },
    Spot {
        cone_angle: f32,
        penumbra: f32,
        target: Vec3,
    },
}

/// One entry of the fixture catalog. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub id: FixtureId,
    pub label: &'static str,
    /// Width/height/depth of the visual representation. Strips are thin
    /// bars; for the spot this is a representative marker size.
    pub size: Vec3,
    pub position: Vec3,
    /// XYZ Euler angles of the visual representation.
    pub rotation: Vec3,
    /// Fixtures sharing a tag display one synchronized hue.
    pub group: Option<&'static str>,
    pub kind: FixtureKind,
}

impl Fixture {
    /// Sign of the outward pitch applied to a vertical strip's emitter:
    /// both members of a symmetric pair must emit away from the assembly.
    pub fn outward_pitch(&self) -> f32 {
        if self.position.x < 0.0 {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate fixture id {0}")]
    DuplicateId(FixtureId),
}

/// Static table of known fixtures. Lookup by id plus ordered enumeration;
/// the order is the insertion order and drives deterministic hue slots.
#[derive(Debug)]
pub struct FixtureCatalog {
    order: Vec<FixtureId>,
    by_id: FnvHashMap<FixtureId, Fixture>,
}

impl FixtureCatalog {
    pub fn new(fixtures: Vec<Fixture>) -> Result<Self, CatalogError> {
        let mut order = Vec::with_capacity(fixtures.len());
        let mut by_id = FnvHashMap::default();
        for f in fixtures {
            let id = f.id;
            if by_id.insert(id, f).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
            order.push(id);
        }
        Ok(Self { order, by_id })
    }

    pub fn lookup(&self, id: FixtureId) -> Option<&Fixture> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: FixtureId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = FixtureId> + '_ {
        self.order.iter().copied()
    }

    /// Fixtures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Fixture> {
        self.order.iter().map(move |id| &self.by_id[id])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn strip(
    id: FixtureId,
    label: &'static str,
    width: f32,
    position: Vec3,
    rotation: Vec3,
    vertical: bool,
    group: Option<&'static str>,
) -> Fixture {
    Fixture {
        id,
        label,
        size: Vec3::new(width, LIGHT_THICKNESS, LIGHT_THICKNESS),
        position,
        rotation,
        group,
        kind: FixtureKind::Strip { vertical },
    }
}

/// The fixtures of the desk assembly. Horizontal strips hug shelf edges,
/// vertical strips come in symmetric pairs on the frame members, the
/// underglow ring shares one hue, and id 99 is the shelf spotlight.
pub fn default_catalog() -> FixtureCatalog {
    let z90 = Vec3::new(0.0, 0.0, FRAC_PI_2);
    let y90 = Vec3::new(0.0, FRAC_PI_2, 0.0);
    let fixtures = vec![
        // Top shelf
        strip(
            1,
            "Top shelf, back edge",
            DESK_WIDTH * 0.9,
            Vec3::new(0.0, TOP_SHELF_Y, -TOP_SHELF_DEPTH / 2.0 + 0.02),
            Vec3::ZERO,
            false,
            None,
        ),
        strip(
            2,
            "Top shelf, front edge underside",
            DESK_WIDTH * 0.9,
            Vec3::new(0.0, TOP_SHELF_Y - 0.02, TOP_SHELF_DEPTH / 2.0 - 0.02),
            Vec3::ZERO,
            false,
            None,
        ),
        // Main desk
        strip(
            3,
            "Main desk, back edge underside",
            DESK_WIDTH,
            Vec3::new(0.0, MAIN_DESK_Y - 0.02, -DESK_DEPTH / 2.0 + 0.02),
            Vec3::ZERO,
            false,
            None,
        ),
        strip(
            4,
            "Main desk, front edge underside",
            DESK_WIDTH,
            Vec3::new(0.0, MAIN_DESK_Y - 0.02, DESK_DEPTH / 2.0 - 0.02),
            Vec3::ZERO,
            false,
            None,
        ),
        // Back frame (vertical pair)
        strip(
            5,
            "Back vertical frame, left",
            SIDE_PANEL_HEIGHT,
            Vec3::new(
                -DESK_WIDTH / 2.0 + LEG_WIDTH / 2.0,
                SIDE_PANEL_Y,
                -SIDE_PANEL_DEPTH / 2.0 + 0.02,
            ),
            z90,
            true,
            None,
        ),
        strip(
            6,
            "Back vertical frame, right",
            SIDE_PANEL_HEIGHT,
            Vec3::new(
                DESK_WIDTH / 2.0 - LEG_WIDTH / 2.0,
                SIDE_PANEL_Y,
                -SIDE_PANEL_DEPTH / 2.0 + 0.02,
            ),
            z90,
            true,
            None,
        ),
        // Front frame (vertical pair)
        strip(
            7,
            "Front vertical frame, left",
            SIDE_PANEL_HEIGHT,
            Vec3::new(
                -DESK_WIDTH / 2.0 + LEG_WIDTH / 2.0,
                SIDE_PANEL_Y,
                SIDE_PANEL_DEPTH / 2.0 - 0.02,
            ),
            z90,
            true,
            None,
        ),
        strip(
            8,
            "Front vertical frame, right",
            SIDE_PANEL_HEIGHT,
            Vec3::new(
                DESK_WIDTH / 2.0 - LEG_WIDTH / 2.0,
                SIDE_PANEL_Y,
                SIDE_PANEL_DEPTH / 2.0 - 0.02,
            ),
            z90,
            true,
            None,
        ),
        // Upper frame (vertical pair)
        strip(
            9,
            "Upper vertical frame, left",
            UPPER_LEG_HEIGHT,
            Vec3::new(
                -DESK_WIDTH / 2.0 + LEG_WIDTH / 2.0,
                UPPER_LEG_Y,
                -SIDE_PANEL_DEPTH / 2.0 + 0.02,
            ),
            z90,
            true,
            None,
        ),
        strip(
            10,
            "Upper vertical frame, right",
            UPPER_LEG_HEIGHT,
            Vec3::new(
                DESK_WIDTH / 2.0 - LEG_WIDTH / 2.0,
                UPPER_LEG_Y,
                -SIDE_PANEL_DEPTH / 2.0 + 0.02,
            ),
            z90,
            true,
            None,
        ),
        // Underglow ring: three strips under the main desk, one shared hue.
        strip(
            11,
            "Underglow, left",
            DESK_DEPTH * 0.8,
            Vec3::new(
                -DESK_WIDTH / 2.0 + LEG_WIDTH,
                MAIN_DESK_Y - 0.03,
                -DESK_DEPTH / 2.0,
            ),
            y90,
            false,
            Some("underglow"),
        ),
        strip(
            12,
            "Underglow, front",
            DESK_WIDTH * 0.9,
            Vec3::new(0.0, MAIN_DESK_Y - 0.03, -0.03),
            Vec3::ZERO,
            false,
            Some("underglow"),
        ),
        strip(
            13,
            "Underglow, right",
            DESK_DEPTH * 0.8,
            Vec3::new(
                DESK_WIDTH / 2.0 - LEG_WIDTH,
                MAIN_DESK_Y - 0.03,
                -DESK_DEPTH / 2.0,
            ),
            y90,
            false,
            Some("underglow"),
        ),
        // Shelf spotlight aimed at the desk surface.
        Fixture {
            id: SPOT_FIXTURE_ID,
            label: "Shelf spotlight",
            size: Vec3::new(0.06, 0.04, 0.06),
            position: Vec3::new(0.0, TOP_SHELF_Y - 0.04, -DESK_DEPTH + 0.18),
            rotation: Vec3::ZERO,
            group: None,
            kind: FixtureKind::Spot {
                cone_angle: std::f32::consts::FRAC_PI_6,
                penumbra: 0.3,
                target: Vec3::new(0.0, MAIN_DESK_Y, -0.25),
            },
        },
    ];
    // The table above has unique ids by construction.
    FixtureCatalog::new(fixtures).unwrap_or_else(|e| panic!("default catalog invalid: {e}"))
}
