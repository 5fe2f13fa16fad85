// Presentation tuning for the web front end.

// Camera framing of the desk
pub const CAMERA_FOV_RADIANS: f32 = 50.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [-1.8, 1.6, 2.5];

// Orbit interaction
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
pub const ORBIT_SMOOTHING_ALPHA: f32 = 0.15; // new = (1-α)*old + α*target
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.001;
pub const PITCH_MIN: f32 = 0.05;
pub const PITCH_MAX: f32 = 1.45;
pub const DISTANCE_MIN: f32 = 1.2;
pub const DISTANCE_MAX: f32 = 8.0;

// Scene dressing
pub const AMBIENT_LEVEL: f32 = 0.25;
pub const WALL_DIM_ALPHA: f32 = 0.15; // wall opacity when the camera is behind it
pub const CLEAR_COLOR: [f64; 3] = [0.157, 0.157, 0.157]; // matches the page background
