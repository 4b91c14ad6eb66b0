// Shared tuning constants for the particle background and section reveals.

// Field population
pub const MAX_PARTICLES: usize = 60; // keeps the pairwise link pass cheap
pub const AREA_PER_PARTICLE: f32 = 15_000.0; // surface px² per generated point

// Links between nearby points
pub const LINK_DISTANCE: f32 = 120.0; // pairs closer than this get a line
pub const LINK_MAX_ALPHA: f32 = 0.15; // alpha of a zero-length link
pub const LINK_WIDTH: f64 = 1.0;

// Pointer attraction
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_IMPULSE: f32 = 0.02; // velocity added per frame at full force
pub const POINTER_OPACITY_GAIN: f32 = 0.1;
pub const MAX_SPEED: f32 = 2.0; // px per frame after attraction

// Opacity triangle wave
pub const OPACITY_FLOOR: f32 = 0.1;
pub const OPACITY_DRIFT_TOP: f32 = 0.8; // drift turns around here
pub const OPACITY_CEILING: f32 = 1.0; // pointer boost can push up to here

// Edge wrapping
pub const WRAP_MARGIN: f32 = 10.0;

// Per-point randomisation ranges
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_SPAN: f32 = 3.0;
pub const SPEED_SPAN: f32 = 0.8; // velocity per axis in [-span/2, span/2)
pub const OPACITY_INIT_MIN: f32 = 0.2;
pub const OPACITY_INIT_SPAN: f32 = 0.6;
pub const OPACITY_DRIFT_SPAN: f32 = 0.02;
pub const ROTATION_SPEED_SPAN: f32 = 0.02;
pub const PULSE_SPEED_MIN: f32 = 0.01; // radians per elapsed ms
pub const PULSE_SPEED_SPAN: f32 = 0.02;
pub const PULSE_AMPLITUDE: f32 = 0.1;
pub const MIN_DRAW_RADIUS: f32 = 0.1;
pub const GLOW_PER_RADIUS: f32 = 2.0;

pub const PALETTE: [&str; 5] = ["#06b6d4", "#3b82f6", "#8b5cf6", "#10b981", "#f59e0b"];

// Reveal timing
pub const STAGGER_STEP_MS: u32 = 200;
pub const PAGE_REVEAL_THRESHOLD: f64 = 0.1;
pub const PAGE_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.3;
pub const PROJECTS_REVEAL_THRESHOLD: f64 = 0.2;
pub const RESUME_REVEAL_THRESHOLD: f64 = 0.3;
pub const CONTACT_REVEAL_THRESHOLD: f64 = 0.2;
pub const SOCIAL_STAGGER_OFFSET: u32 = 3;

// Header / hero
pub const HEADER_SCROLLED_AFTER_PX: f64 = 50.0;
pub const TYPEWRITER_INTERVAL_MS: u32 = 100;
pub const AVATAR_TILT_DEG: f64 = 15.0;
pub const AVATAR_LIFT_PX: f64 = 50.0;

// Contact form
pub const SUBMIT_DELAY_MS: i32 = 2_000;
