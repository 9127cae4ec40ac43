/// Wave field tuning constants.
///
/// Distances are in canvas pixels, rates are per frame. The simulation is
/// frame-driven, so none of these are scaled by elapsed time.

// Population: one wave per this many square pixels of canvas
pub const AREA_PER_WAVE: f32 = 50_000.0;

// Extended viewport margin on every side
pub const BOUNDS_MARGIN: f32 = 100.0;

// Radius limits and spawn range
pub const RADIUS_MIN: f32 = 50.0;
pub const RADIUS_MAX: f32 = 200.0;
pub const RADIUS_SPAWN_SPAN: f32 = 150.0;

// Opacity limits and spawn range
pub const OPACITY_MIN: f32 = 0.1;
pub const OPACITY_MAX: f32 = 0.6;
pub const OPACITY_SPAWN_SPAN: f32 = 0.3;

// Angular speed spawn range (radians per frame)
pub const SPEED_MIN: f32 = 0.01;
pub const SPEED_SPAN: f32 = 0.02;

// Autonomous drift amplitude per axis
pub const DRIFT_X: f32 = 0.5;
pub const DRIFT_Y: f32 = 0.3;

// Pointer interaction
pub const POINTER_REACH: f32 = 200.0; // no effect at or beyond this distance
pub const PUSH_FACTOR: f32 = 10.0; // displacement at full force
pub const OPACITY_GAIN: f32 = 0.2; // opacity added at full force
pub const RADIUS_GAIN: f32 = 20.0; // radius added at full force

// Relaxation toward the floors when the pointer is out of reach
pub const OPACITY_DECAY: f32 = 0.005;
pub const RADIUS_DECAY: f32 = 0.5;

// Wave palette: fixed hue/saturation, lightness drawn from a range
pub const WAVE_HUE: f32 = 221.0;
pub const WAVE_SATURATION: f32 = 83.0;
pub const WAVE_LIGHTNESS_MIN: f32 = 60.0;
pub const WAVE_LIGHTNESS_SPAN: f32 = 20.0;

// Backdrop gradient
pub const BACKDROP_ACCENT: &str = "hsl(221, 83%, 4%)";
pub const BACKDROP_ACCENT_OFFSET: f32 = 0.5;

// Literal theme fallbacks
pub const FALLBACK_BACKGROUND: &str = "#0a0a0a";
pub const FALLBACK_PRIMARY: &str = "#3b82f6";
pub const FALLBACK_SECONDARY: &str = "#1e293b";

// Style tokens read from the document root
pub const BACKGROUND_TOKEN: &str = "--background";
pub const PRIMARY_TOKEN: &str = "--primary";
pub const SECONDARY_TOKEN: &str = "--secondary";

// Frame statistics reporting period
pub const STATS_REPORT_EVERY: u64 = 600;
