//! Aurora lyric presentation: an animated particle/aurora background with a
//! timed sequence of lyric lines drawn over it.

pub mod aurora;
pub mod canvas;
pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod ffmpeg;
pub mod logging;
pub mod lyrics;
pub mod overlay;
pub mod surface;
pub mod viewport;

pub use aurora::ParticleEngine;
pub use canvas::{Canvas, RaylibCanvas};
pub use engine::Engine;
pub use error::{PresentationError, Result};
pub use lyrics::{LYRICS, LyricSequencer, SequencerEvent, SequencerPhase};
pub use viewport::Viewport;
