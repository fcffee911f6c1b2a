/// Interaction, camera and lighting tuning constants for the 3D view.
///
/// Geometry design values shared with the net diagram live in
/// `core::constants`.
// Orbit
pub const ROTATE_PER_PX: f32 = 0.01; // radians of target rotation per pointer pixel
pub const ORBIT_EASING: f32 = 0.05; // fraction of remaining rotation covered per frame
pub const AUTOROTATE_PER_FRAME: f32 = 0.005; // idle spin added to target yaw

// Zoom
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.01;
pub const ZOOM_MIN: f32 = 2.0;
pub const ZOOM_MAX: f32 = 10.0;
pub const ZOOM_DEFAULT: f32 = 5.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Material hue animation (saturation, lightness)
pub const BODY_SL: [f32; 2] = [0.7, 0.5];
pub const LID_SL: [f32; 2] = [0.6, 0.4];
pub const SPECULAR_HEX: u32 = 0x111111;
pub const SHININESS: f32 = 100.0;

// Scene
pub const BACKGROUND_HEX: u32 = 0x2c3e50;
pub const GROUND_HEX: u32 = 0x1a1a1a;
pub const GROUND_SIZE: f32 = 20.0;
pub const GROUND_Y: f32 = -3.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const SUN_INTENSITY: f32 = 0.8;
pub const SUN_POSITION: [f32; 3] = [5.0, 10.0, 5.0];
pub const POINT_HEX: u32 = 0xe74c3c;
pub const POINT_INTENSITY: f32 = 0.5;
pub const POINT_POSITION: [f32; 3] = [-5.0, 5.0, 5.0];
pub const POINT_RANGE: f32 = 100.0;

// Shadow map
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_HALF_EXTENT: f32 = 10.0; // orthographic frustum half width/height
pub const SHADOW_NEAR: f32 = 0.1;
pub const SHADOW_FAR: f32 = 50.0;

// DOM
pub const BOX_CANVAS_ID: &str = "box-canvas";
pub const NET_CANVAS_ID: &str = "unfold-canvas";
