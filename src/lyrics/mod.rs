//! Lyric table and the timer-driven sequencer that walks it.

pub mod lines;
pub mod sequencer;
pub mod state;

pub use lines::{LYRICS, LineKind, LyricLine};
pub use sequencer::LyricSequencer;
pub use state::{SequencerEvent, SequencerPhase};
