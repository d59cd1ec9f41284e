// Design tokens and tuning constants shared by the web and native frontends.

// Palette (sRGB hex, parsed by `color::Palette::from_tokens`)
pub const PALETTE_BACKGROUND: &str = "#050505";
pub const PALETTE_PRIMARY: &str = "#64FFDA"; // neon cyan
pub const PALETTE_SECONDARY: &str = "#BD34FE"; // purple
pub const PALETTE_PARTICLES: &str = "#FFFFFF";

// Color particles shift toward while repelled (shader space, not a hex token)
pub const ACTIVE_COLOR: [f32; 3] = [0.39, 1.0, 0.85];

// Physics tokens, expressed in normalized UV units
pub const REPULSION_RADIUS: f32 = 0.3;
pub const REPULSION_STRENGTH: f32 = 5.0;
pub const FRICTION: f32 = 0.9;
pub const SPRING: f32 = 0.1;

// Token -> world-unit scale factors
pub const REPULSION_RADIUS_WORLD_SCALE: f32 = 5.0;
pub const REPULSION_STRENGTH_WORLD_SCALE: f32 = 0.2;

// Particle set
pub const PARTICLE_COUNT: usize = 15_000;
pub const SPAWN_HALF_EXTENTS: [f32; 3] = [7.5, 5.0, 2.5]; // 15 x 10 x 5 box

// Idle bob: y += sin(time * RATE + phase * PHASE_SPREAD) * AMPLITUDE
pub const BOB_RATE: f32 = 2.0;
pub const BOB_PHASE_SPREAD: f32 = 10.0;
pub const BOB_AMPLITUDE: f32 = 0.02;

// Point sprite sizing: (SIZE_PHASE_SCALE * phase + SIZE_BASE) / -view_z
pub const SIZE_PHASE_SCALE: f32 = 4.0;
pub const SIZE_BASE: f32 = 2.0;
pub const MIN_POINT_SIZE_PX: f32 = 1.0; // GL never rasterizes a point smaller

// Below this length the repulsion direction is taken as zero
pub const DIRECTION_EPSILON: f32 = 1e-6;

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Whole-field motion
pub const SPIN_RATE: f32 = 0.05; // radians per second around Y
pub const PARALLAX_AMOUNT: f32 = 0.2; // target tilt per unit of pointer NDC
pub const PARALLAX_LERP: f32 = 0.05; // per-frame blend toward target tilt

// Floating wobble layered on top of the spin
pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.2;
pub const FLOAT_INTENSITY: f32 = 0.5;
pub const FLOAT_OFFSET_MAX: f32 = 10_000.0;

// Overlay intro typewriter
pub const INTRO_TEXT: &str = "mens et manus. From Abstract Vision to Tangible Reality.";
pub const INTRO_WORD_STAGGER_SEC: f32 = 0.05;
pub const INTRO_WORD_BASE_DELAY_SEC: f32 = 0.5;
pub const INTRO_WORD_FADE_SEC: f32 = 0.2;
