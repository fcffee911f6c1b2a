// Geometry design constants shared by the 3D builder and the unfold diagram.

// Panel construction
pub const WALL_THICKNESS: f32 = 0.05; // floor and wall panels, world units
pub const LID_MARGIN: f32 = 1.05; // lid oversize factor on width and depth
pub const LID_THICKNESS_RATIO: f32 = 0.05; // lid thickness as a fraction of height
pub const FLAP_WIDTH_RATIO: f32 = 0.5; // flap footprint along depth
pub const FLAP_HEIGHT_RATIO: f32 = 0.3; // flap footprint along height

// Fixed rest angles (degrees); no control surface adjusts these
pub const LID_OPEN_DEG: f32 = 70.0;
pub const FLAP_OPEN_DEG: f32 = 45.0;

// Default box, matching the initial slider positions
pub const DEFAULT_WIDTH: f32 = 2.0;
pub const DEFAULT_HEIGHT: f32 = 1.8;
pub const DEFAULT_DEPTH: f32 = 2.0;

// Fallback slider ranges when the page omits min/max attributes
pub const WIDTH_RANGE: [f32; 2] = [0.5, 4.0];
pub const HEIGHT_RANGE: [f32; 2] = [0.5, 3.0];
pub const DEPTH_RANGE: [f32; 2] = [0.5, 4.0];

// Unfold diagram
pub const NET_PX_PER_UNIT: f64 = 40.0;
pub const NET_SIDE_HEIGHT_RATIO: f64 = 0.9; // floor and side panels are drawn at 90% height
pub const NET_FIT_MARGIN_PX: f64 = 36.0; // room for guides and labels
