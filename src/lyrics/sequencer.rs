//! Timed lyric sequencing.
//!
//! The sequencer runs on a caller-supplied clock (time since mount), so it
//! can be driven by the frame loop, a recording clock, or a test. At most
//! one reveal is pending at a time; every state change cancels it before
//! scheduling the next one, and each reveal carries the generation it was
//! scheduled under so a cancelled one can never fire.

use std::time::Duration;

use tracing::{debug, info};

use crate::constants::START_DELAY_MS;
use crate::lyrics::lines::LyricLine;
use crate::lyrics::state::{SequencerEvent, SequencerPhase};

#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    generation: u64,
    due: Duration,
    index: usize,
}

pub struct LyricSequencer {
    lines: &'static [LyricLine],
    started: bool,
    current: Option<usize>,
    complete: bool,
    pending: Option<PendingReveal>,
    generation: u64,
    torn_down: bool,
}

impl LyricSequencer {
    pub fn new(lines: &'static [LyricLine]) -> Self {
        Self {
            lines,
            started: false,
            current: None,
            complete: false,
            pending: None,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Index of the line being shown; `None` before the first reveal
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    /// The line to display, if any
    pub fn current_line(&self) -> Option<&'static LyricLine> {
        if self.complete {
            return None;
        }
        self.current.and_then(|i| self.lines.get(i))
    }

    pub fn phase(&self) -> SequencerPhase {
        match (self.started, self.complete, self.current) {
            (false, _, _) => SequencerPhase::Idle,
            (true, true, _) => SequencerPhase::Complete,
            (true, false, None) => SequencerPhase::Starting,
            (true, false, Some(i)) => SequencerPhase::Showing(i),
        }
    }

    /// When the pending reveal is due, if one is scheduled
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Start trigger. Restarts cleanly from any state.
    pub fn start(&mut self, now: Duration) {
        if self.torn_down {
            return;
        }
        self.started = true;
        self.current = None;
        self.complete = false;
        info!(lines = self.lines.len(), "lyrics started");

        let mut events = Vec::new();
        self.sync(now, &mut events);
    }

    /// Fire every reveal due at or before `now`, in order
    pub fn update(&mut self, now: Duration) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }

        while let Some(pending) = self.pending {
            if pending.due > now {
                break;
            }
            self.pending = None;
            if pending.generation != self.generation {
                continue;
            }
            self.reveal(pending.index, pending.due, &mut events);
        }
        events
    }

    /// Cancel the pending reveal and ignore all further calls
    pub fn teardown(&mut self) {
        self.cancel();
        self.torn_down = true;
    }

    fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }

    fn schedule(&mut self, due: Duration, index: usize) {
        self.pending = Some(PendingReveal {
            generation: self.generation,
            due,
            index,
        });
    }

    fn reveal(&mut self, index: usize, at: Duration, events: &mut Vec<SequencerEvent>) {
        if index >= self.lines.len() {
            self.finish(events);
            return;
        }
        self.current = Some(index);
        debug!(index, text = self.lines[index].text, "line shown");
        events.push(SequencerEvent::LineShown(index));
        self.sync(at, events);
    }

    fn finish(&mut self, events: &mut Vec<SequencerEvent>) {
        self.cancel();
        self.complete = true;
        info!("lyrics complete");
        events.push(SequencerEvent::Completed);
    }

    /// Re-evaluate the schedule after a state change at time `at`
    fn sync(&mut self, at: Duration, events: &mut Vec<SequencerEvent>) {
        self.cancel();
        if !self.started || self.complete {
            return;
        }

        match self.current {
            None => self.schedule(at + Duration::from_millis(START_DELAY_MS), 0),
            Some(i) => {
                let next = i + 1;
                match self.lines.get(next) {
                    Some(line) => self.schedule(at + line.reveal_delay(), next),
                    None => self.finish(events),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::lines::LYRICS;

    const TWO: [LyricLine; 2] = [LyricLine::verse("A", 1000), LyricLine::chorus("B", 2000)];

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_idle_until_triggered() {
        let mut seq = LyricSequencer::new(&TWO);
        assert_eq!(seq.phase(), SequencerPhase::Idle);
        assert!(seq.update(ms(60_000)).is_empty());
        assert_eq!(seq.current_index(), None);
        assert!(seq.next_due().is_none());
    }

    #[test]
    fn test_two_line_scenario() {
        let mut seq = LyricSequencer::new(&TWO);
        seq.start(ms(0));
        assert_eq!(seq.phase(), SequencerPhase::Starting);

        assert!(seq.update(ms(999)).is_empty());
        assert_eq!(seq.current_index(), None);

        assert_eq!(seq.update(ms(1000)), vec![SequencerEvent::LineShown(0)]);
        assert_eq!(seq.current_line().map(|l| l.text), Some("A"));

        assert!(seq.update(ms(2999)).is_empty());
        assert_eq!(seq.phase(), SequencerPhase::Showing(0));

        assert_eq!(
            seq.update(ms(3000)),
            vec![SequencerEvent::LineShown(1), SequencerEvent::Completed]
        );
        assert_eq!(seq.current_index(), Some(1));
        assert!(seq.complete());
        assert_eq!(seq.current_line(), None);
        assert!(seq.next_due().is_none());
    }

    #[test]
    fn test_late_update_catches_up_without_drift() {
        let mut seq = LyricSequencer::new(&LYRICS);
        seq.start(ms(0));
        let events = seq.update(ms(7_100));
        assert_eq!(
            events,
            vec![SequencerEvent::LineShown(0), SequencerEvent::LineShown(1)]
        );
        // Line 2 is due 3400ms after line 1 was due (4000), not after 7100
        assert_eq!(seq.next_due(), Some(ms(7_400)));
    }

    #[test]
    fn test_restart_discards_pending_reveal() {
        let mut seq = LyricSequencer::new(&TWO);
        seq.start(ms(0));
        seq.update(ms(1000));
        seq.start(ms(1500));
        assert_eq!(seq.phase(), SequencerPhase::Starting);
        assert_eq!(seq.next_due(), Some(ms(2500)));

        // The reveal of line 1 that was due at 3000 is gone
        assert_eq!(seq.update(ms(2500)), vec![SequencerEvent::LineShown(0)]);
        assert_eq!(seq.next_due(), Some(ms(4500)));
    }

    #[test]
    fn test_teardown_freezes_state() {
        let mut seq = LyricSequencer::new(&TWO);
        seq.start(ms(0));
        seq.teardown();
        assert!(seq.update(ms(10_000)).is_empty());
        assert_eq!(seq.phase(), SequencerPhase::Starting);
        seq.start(ms(10_000));
        assert!(seq.next_due().is_none());
    }

    #[test]
    fn test_empty_table_completes_on_first_reveal() {
        static EMPTY: [LyricLine; 0] = [];
        let mut seq = LyricSequencer::new(&EMPTY);
        seq.start(ms(0));
        assert_eq!(seq.update(ms(1000)), vec![SequencerEvent::Completed]);
        assert!(seq.complete());
        assert_eq!(seq.current_line(), None);
    }
}
