use std::time::Duration;

use crate::constants::FALLBACK_LINE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Verse,
    Chorus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LyricLine {
    pub kind: LineKind,
    pub text: &'static str,
    pub duration_ms: u64,
}

impl LyricLine {
    pub const fn verse(text: &'static str, duration_ms: u64) -> Self {
        Self { kind: LineKind::Verse, text, duration_ms }
    }

    pub const fn chorus(text: &'static str, duration_ms: u64) -> Self {
        Self { kind: LineKind::Chorus, text, duration_ms }
    }

    /// Wait before this line is revealed; a zero duration uses the fallback
    pub fn reveal_delay(&self) -> Duration {
        let ms = if self.duration_ms == 0 { FALLBACK_LINE_MS } else { self.duration_ms };
        Duration::from_millis(ms)
    }
}

pub const LYRICS: [LyricLine; 12] = [
    LyricLine::verse("In whispered moments", 3000),
    LyricLine::verse("When silence speaks", 3000),
    LyricLine::verse("I find your shadow", 3400),
    LyricLine::verse("In memories deep", 3200),
    LyricLine::verse("The echoes linger", 3000),
    LyricLine::verse("Of what we were", 3400),
    LyricLine::verse("Before the distance", 3200),
    LyricLine::verse("Made hearts unsure", 3600),
    LyricLine::chorus("Do you remember?", 4000),
    LyricLine::chorus("The way we used to be", 4200),
    LyricLine::chorus("Do you remember?", 4000),
    LyricLine::chorus("When you belonged to me", 4500),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(LYRICS.len(), 12);
        assert!(LYRICS[..8].iter().all(|l| l.kind == LineKind::Verse));
        assert!(LYRICS[8..].iter().all(|l| l.kind == LineKind::Chorus));
        assert!(LYRICS.iter().all(|l| l.duration_ms > 0));
    }

    #[test]
    fn test_zero_duration_falls_back() {
        let line = LyricLine::verse("x", 0);
        assert_eq!(line.reveal_delay(), Duration::from_millis(FALLBACK_LINE_MS));
        assert_eq!(LYRICS[2].reveal_delay(), Duration::from_millis(3400));
    }
}
