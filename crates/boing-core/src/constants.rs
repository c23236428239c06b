// Shared physics and geometry tuning constants. All distances are in canvas
// units (CSS pixels), all times in milliseconds.

// Knob and wall geometry
pub const KNOB_RADIUS: f64 = 16.0;
pub const CAPTURE_RADIUS: f64 = 50.0; // how close a grab must start to the knob
pub const WALL_WIDTH: f64 = 17.0; // anchor sits on the wall's inner edge

// Rest length: a fraction of the free canvas width, capped on wide screens
pub const REST_FRACTION: f64 = 0.5;
pub const MAX_REST_LENGTH: f64 = 250.0;

// Spring dynamics (per 60 Hz frame)
pub const SPRING_STIFFNESS: f64 = 0.85; // tuned within 0.85..=0.95
pub const FRICTION: f64 = 0.88;
pub const ANGULAR_STIFFNESS: f64 = 0.9;
pub const ANGULAR_FRICTION: f64 = 0.9;
pub const BOUNCE: f64 = -0.5; // velocity factor on wall or knob-radius contact

// Drag resistance
pub const PULL_LIMIT: f64 = 300.0;
pub const PUSH_LIMIT: f64 = 400.0;
pub const MIN_DRAG_DISTANCE: f64 = 20.0;

// Divergence bounds
pub const MAX_LENGTH_VELOCITY: f64 = 10_000.0;
pub const MAX_ANGULAR_VELOCITY: f64 = 1_000.0;

// Curve rendering
pub const BEND_STIFFNESS: f64 = 150.0; // straight run before the curve bends
pub const COIL_COUNT: f64 = 25.0;
pub const CURVE_SEGMENTS: usize = 100;
pub const COIL_WIDTH: f64 = 25.0;
pub const COIL_TAPER: f64 = 1.2; // width factor is (COIL_TAPER - t)

// Interaction
pub const BOING_THRESHOLD: f64 = 10.0;
pub const CATCH_SPEED: f64 = 1.0;
pub const KEYBOARD_LERP: f64 = 0.15;
pub const KEYBOARD_REACH_X: f64 = 3500.0;
pub const KEYBOARD_REACH_Y: f64 = 500.0;

// Frame timing
pub const TARGET_FRAME_MS: f64 = 1000.0 / 60.0;
pub const MAX_SUBSTEP_MS: f64 = 16.0;
pub const MAX_FRAME_DELTA_MS: f64 = 50.0;
pub const SLOMO_FACTOR: f64 = 4.0;

// Audio cue mapping (playback rate pitched up 10% overall)
pub const FORCE_NORMALIZER: f64 = 200.0;
pub const MIN_RATE: f64 = 0.9 * 1.1;
pub const MAX_RATE: f64 = 1.5 * 1.1;
pub const MIN_VOLUME: f64 = 0.3;
pub const MAX_VOLUME: f64 = 1.0;
pub const FADE_TO_VOLUME: f64 = 0.1;
pub const FADE_MS: f64 = 1200.0;
pub const SLOMO_AUDIO_RATE: f64 = 0.5;
pub const CATCH_FADE_MS: f64 = 100.0;
