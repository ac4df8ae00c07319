pub const DEFAULT_WIDTH: i32 = 1280;           // Initial window width (logical units)
pub const DEFAULT_HEIGHT: i32 = 720;           // Initial window height (logical units)
pub const FPS: u32 = 60;                       // Frames per second
pub const MAX_PIXEL_RATIO: f32 = 2.0;          // Device pixel ratio cap for the surface

pub const TIME_STEP: f64 = 0.005;              // Animation time added every frame
pub const MIN_PARTICLES: usize = 50;
pub const MAX_PARTICLES: usize = 150;
pub const PARTICLE_DENSITY: f32 = 10.0;        // One particle per this many units of width
pub const WRAP_MARGIN: f32 = 5.0;              // Distance outside the surface before wrapping
pub const AURORA_LAYERS: usize = 3;

pub const START_DELAY_MS: u64 = 1000;          // Delay between the start trigger and the first line
pub const FALLBACK_LINE_MS: u64 = 3000;        // Used when a line carries no duration
pub const LINE_FADE_IN: f32 = 1.8;             // Lyric fade-in (seconds)
pub const BUTTON_FADE_IN: f32 = 1.8;           // Start button fade-in (seconds)
pub const BUTTON_DELAY: f32 = 3.0;             // Start button appears after this (seconds)
pub const TITLE_FADE_IN: f32 = 2.5;            // Title fade-in (seconds)
pub const SUBTITLE_DELAY: f32 = 1.2;           // Subtitle starts fading in after this (seconds)
pub const SUBTITLE_FADE_IN: f32 = 2.0;         // Subtitle fade-in (seconds)
pub const RECORD_TAIL: f32 = 2.0;              // Extra recorded time after completion (seconds)
