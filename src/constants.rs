// Web front-end constants: page element ids, canvas sizing, collaborator
// endpoints and refresh periods. Physics tuning lives in `boing_core`.

// Page elements
pub const CANVAS_ID: &str = "boing-canvas";
pub const LOCAL_COUNT_ID: &str = "boing-count";
pub const GLOBAL_COUNT_ID: &str = "global-count";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-button";
pub const SLOMO_BUTTON_ID: &str = "slomo-toggle";
pub const DARK_BUTTON_ID: &str = "dark-toggle";
pub const HEATMAP_BUTTON_ID: &str = "heatmap-toggle";
pub const API_BASE_ATTR: &str = "data-api-base";

// Canvas sizing (CSS pixels)
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const MAX_CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_WIDTH_FRACTION: f64 = 0.9;
pub const CANVAS_CHROME: f64 = 24.0; // border + shadow

// Collaborators
pub const SOUND_URL: &str = "/boing2.wav";
pub const MASTER_VOLUME: f32 = 0.7;
pub const STORAGE_KEY: &str = "boingCount";
pub const DEFAULT_API_BASE: &str = "";
pub const COUNT_POLL_MS: f64 = 15_000.0;
pub const HEATMAP_REFRESH_MS: f64 = 10_000.0;
pub const HEATMAP_ALPHA: f64 = 0.5;

// Drawing
pub const SPRING_LINE_WIDTH: f64 = 3.0;
pub const TENSION_LINE_WIDTH: f64 = 2.0;
pub const TENSION_DASH: f64 = 4.0;
pub const TENSION_DOT_RADIUS: f64 = 4.0;
pub const SHADOW_BLUR: f64 = 4.0;
pub const SHADOW_OFFSET_Y: f64 = 4.0;
