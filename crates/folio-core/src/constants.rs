// Shared visual/interaction tuning constants for the slider and page glue.

// Scene layout
pub const CAMERA_Z: f32 = 5.0; // camera eye distance from the slide plane
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const OFFSTAGE_Z: f32 = 100.0; // depth at which a hidden slide parks

// Slide geometry
pub const SLIDE_RADIUS: f32 = 3.0;
pub const SLIDE_SUBDIVISIONS: u32 = 2;

// Idle motion of the active slide
pub const FIXED_CLOCK_STEP: f32 = 0.016; // simulation clock advance per frame
pub const PARALLAX_DAMPING: f32 = 0.3; // pointer offset -> slide displacement
pub const BOB_AMPLITUDE: f32 = 0.3;
pub const BOB_FREQUENCY: f32 = 0.5; // angular frequency on the simulation clock
pub const SPIN_VELOCITY_RANGE: f32 = 0.01; // per-frame spin drawn from +-range/2

// Transition timing (seconds)
pub const EXIT_DURATION: f32 = 0.6;
pub const ENTER_DURATION: f32 = 0.8;

// Input classification
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const CARD_TILT_GAIN_DEG: f32 = 5.0; // degrees per unit of in-card offset

// Section tracking and reveals
pub const SCROLL_PROBE_OFFSET: f32 = 100.0; // probe line below the viewport top
pub const REVEAL_VIEWPORT_FRACTION: f32 = 0.8;

// Five preset slides: color doubles as the emissive tint.
pub const SLIDE_COLORS: [[f32; 3]; 5] = [
    [0.400, 0.494, 0.918], // periwinkle
    [0.941, 0.576, 0.984], // orchid
    [0.463, 0.294, 0.635], // violet
    [0.996, 0.839, 0.890], // blush
    [0.310, 0.675, 0.996], // sky
];

pub const SLIDE_BASE_ROTATIONS: [[f32; 3]; 5] = [
    [0.3, 0.5, 0.0],
    [-0.2, 0.3, 0.1],
    [0.1, -0.4, 0.2],
    [0.4, 0.6, -0.1],
    [-0.3, 0.0, 0.3],
];

pub const EMISSIVE_INTENSITY: f32 = 0.2;

// Lighting rig: one ambient term plus two colored point lights.
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const LIGHT_POSITIONS: [[f32; 3]; 2] = [[10.0, 10.0, 10.0], [-10.0, -10.0, 10.0]];
pub const LIGHT_COLORS: [[f32; 3]; 2] = [[0.400, 0.494, 0.918], [0.941, 0.576, 0.984]];
pub const LIGHT_INTENSITIES: [f32; 2] = [1.0, 0.8];

pub const CLEAR_COLOR: [f64; 3] = [0.039, 0.055, 0.153]; // deep night blue
