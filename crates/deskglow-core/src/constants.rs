use crate::catalog::FixtureId;

// Desk geometry. All lengths in meters; the desk straddles x = 0 and spans
// z in [-DESK_DEPTH, 0] with the wall behind it at negative z.

pub const DESK_WIDTH: f32 = 1.4;
pub const DESK_HEIGHT: f32 = 1.46;
pub const DESK_DEPTH: f32 = 0.74;
pub const FRAME_THICKNESS: f32 = 0.05;
pub const BOARD_THICKNESS: f32 = 0.03;

// Derived positioning values used by both the desk model and the catalog.
pub const TOP_SHELF_Y: f32 = 1.44;
pub const TOP_SHELF_DEPTH: f32 = 0.3;
pub const MAIN_DESK_Y: f32 = 0.74;
pub const LEG_WIDTH: f32 = 0.05; // matches FRAME_THICKNESS
pub const SIDE_PANEL_Y: f32 = 1.09; // center y of the main vertical panels
pub const SIDE_PANEL_HEIGHT: f32 = 0.7;
pub const SIDE_PANEL_DEPTH: f32 = 0.74; // matches DESK_DEPTH
pub const UPPER_LEG_Y: f32 = 1.25; // center y of the smaller upper panels
pub const UPPER_LEG_HEIGHT: f32 = 0.38;

// Light fixtures
pub const LIGHT_THICKNESS: f32 = 0.01; // strip bar cross-section
pub const LIGHT_INTENSITY: f32 = 40.0;
pub const SPOT_FIXTURE_ID: FixtureId = 99; // reserved non-strip fixture
pub const SPOT_INTENSITY: f32 = 25.0;

// Hue cycling
pub const HUE_DRIFT_PER_SEC: f32 = 0.1; // full wheel every 10s
pub const SPOT_NEUTRAL_RGB: [f32; 3] = [1.0, 0.96, 0.9]; // warm white, never cycled

// Backdrop
pub const WALL_WIDTH: f32 = 8.0;
pub const WALL_HEIGHT: f32 = 5.0;
pub const GROUND_EXTENT: f32 = 20.0;
pub const PANEL_THICKNESS: f32 = 0.02; // wall/ground slabs
