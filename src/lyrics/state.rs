#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SequencerPhase {
    Idle,          // Waiting for the start trigger
    Starting,      // Triggered, first line not revealed yet
    Showing(usize), // Line at this index is current
    Complete,      // Ran past the last line
}

/// What a sequencer update changed
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SequencerEvent {
    LineShown(usize),
    Completed,
}
