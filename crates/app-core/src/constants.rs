// Shared tuning constants for the scroll-driven camera path.

// Input
pub const TOUCH_SENSITIVITY: f32 = 0.0015; // progress per pixel of vertical drag
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // viewport widths below this use touch input

// Camera follow
pub const FOLLOW_FACTOR: f32 = 0.06; // share of the remaining distance covered per reference frame
pub const REFERENCE_FRAME_RATE: f32 = 60.0; // frame rate the follow factor is tuned for
pub const MAX_FRAME_DT_SEC: f32 = 0.25; // longest step applied after a stalled frame

// Lens
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lifecycle and overlay
pub const READY_DELAY_MS: u32 = 100; // one-shot delay before the loading overlay is dismissed
pub const SCROLL_HINT_THRESHOLD: f32 = 0.1; // hint stays visible while progress is below this
