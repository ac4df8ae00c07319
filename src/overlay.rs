//! Text layer drawn over the animated background: title, start button and
//! the current lyric line. Reads sequencer state, never changes it.

use raylib::ease;
use raylib::prelude::*;

use crate::color::Rgba;
use crate::constants::*;
use crate::lyrics::{LineKind, LyricLine, LyricSequencer};

const TITLE: &str = "About You";
const SUBTITLE: &str = "The 1975";
const BUTTON_LABEL: &str = "Do you remember?";

const TITLE_COLOR: Rgba = Rgba::WHITE;
const SUBTITLE_COLOR: Rgba = Rgba::new(191, 219, 254, 0.7);
const VERSE_COLOR: Rgba = Rgba::new(239, 246, 255, 0.9);
const CHORUS_COLOR: Rgba = Rgba::rgb(186, 230, 253);
const CHORUS_GLOW: Rgba = Rgba::new(138, 43, 226, 0.35);
const BUTTON_FILL: Rgba = Rgba::new(30, 58, 138, 0.25);
const BUTTON_TEXT: Rgba = Rgba::rgb(219, 234, 254);

pub struct Overlay {
    elapsed: f32,
    title_fade: ease::Tween,
    title_alpha: f32,
    subtitle_fade: ease::Tween,
    subtitle_alpha: f32,
    button_alpha: f32,
    shown: Option<usize>,
    line_fade: Option<ease::Tween>,
    line_alpha: f32,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            title_fade: ease::Tween::new(ease::cubic_out, 0.0, 1.0, TITLE_FADE_IN),
            title_alpha: 0.0,
            subtitle_fade: ease::Tween::new(ease::cubic_out, 0.0, 1.0, SUBTITLE_FADE_IN),
            subtitle_alpha: 0.0,
            button_alpha: 0.0,
            shown: None,
            line_fade: None,
            line_alpha: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, sequencer: &LyricSequencer) {
        self.elapsed += dt;
        self.title_alpha = self.title_fade.apply(dt).clamp(0.0, 1.0);

        // Only the part of this step past the delay counts
        let since = self.elapsed - SUBTITLE_DELAY;
        if since > 0.0 {
            self.subtitle_alpha = self.subtitle_fade.apply(dt.min(since)).clamp(0.0, 1.0);
        }

        if self.button_visible(sequencer) {
            self.button_alpha = (self.button_alpha + dt / BUTTON_FADE_IN).min(1.0);
        } else {
            self.button_alpha = 0.0;
        }

        let current = sequencer.current_line().and(sequencer.current_index());
        if current != self.shown {
            self.shown = current;
            self.line_alpha = 0.0;
            self.line_fade = current.map(|_| ease::Tween::new(ease::cubic_out, 0.0, 1.0, LINE_FADE_IN));
        }
        if let Some(fade) = self.line_fade.as_mut() {
            self.line_alpha = fade.apply(dt).clamp(0.0, 1.0);
        }
    }

    /// Offered before the first run and again once a run has completed
    pub fn button_visible(&self, sequencer: &LyricSequencer) -> bool {
        self.elapsed >= BUTTON_DELAY && (!sequencer.started() || sequencer.complete())
    }

    pub fn button_rect(width: f32, height: f32) -> Rectangle {
        let (w, h) = (300.0_f32.min(width * 0.8), 56.0);
        Rectangle::new(width / 2.0 - w / 2.0, height * 0.75 - h / 2.0, w, h)
    }

    /// Whether a click at `point` (logical units) lands on a visible button
    pub fn hits_button(&self, point: Vector2, width: f32, height: f32, sequencer: &LyricSequencer) -> bool {
        if !self.button_visible(sequencer) {
            return false;
        }
        let r = Self::button_rect(width, height);
        point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height
    }

    pub fn line_alpha(&self) -> f32 {
        self.line_alpha
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, sequencer: &LyricSequencer, width: f32, height: f32, scale: f32) {
        let title_size = (width * 0.06).clamp(36.0, 96.0);
        self.centered(d, TITLE, width / 2.0, height * 0.2, title_size, TITLE_COLOR.faded(self.title_alpha), scale);
        self.centered(
            d,
            SUBTITLE,
            width / 2.0,
            height * 0.2 + title_size * 0.9,
            title_size * 0.3,
            SUBTITLE_COLOR.faded(self.subtitle_alpha),
            scale,
        );

        if let Some(line) = sequencer.current_line() {
            self.draw_line(d, line, width, height, scale);
        }

        if self.button_alpha > 0.0 {
            let r = Self::button_rect(width, height);
            let px = Rectangle::new(r.x * scale, r.y * scale, r.width * scale, r.height * scale);
            d.draw_rectangle_rounded(px, 1.0, 16, Color::from(BUTTON_FILL.faded(self.button_alpha)));
            self.centered(
                d,
                BUTTON_LABEL,
                width / 2.0,
                r.y + r.height / 2.0,
                22.0,
                BUTTON_TEXT.faded(self.button_alpha),
                scale,
            );
        }
    }

    fn draw_line(&self, d: &mut RaylibDrawHandle, line: &LyricLine, width: f32, height: f32, scale: f32) {
        let (size, color) = line_style(line.kind, width);
        // Rises into place while fading in
        let y = height * 0.5 + (1.0 - self.line_alpha) * 60.0;
        if line.kind == LineKind::Chorus {
            self.centered(d, line.text, width / 2.0 + 2.0, y + 2.0, size, CHORUS_GLOW.faded(self.line_alpha), scale);
        }
        self.centered(d, line.text, width / 2.0, y, size, color.faded(self.line_alpha), scale);
    }

    fn centered(&self, d: &mut RaylibDrawHandle, text: &str, cx: f32, cy: f32, size: f32, color: Rgba, scale: f32) {
        if color.a <= 0.0 {
            return;
        }
        let font_size = (size * scale).round() as i32;
        let text_width = d.measure_text(text, font_size);
        d.draw_text(
            text,
            (cx * scale).round() as i32 - text_width / 2,
            (cy * scale).round() as i32 - font_size / 2,
            font_size,
            Color::from(color),
        );
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

/// Font size and color for a line; chorus lines are larger
pub fn line_style(kind: LineKind, width: f32) -> (f32, Rgba) {
    let chorus = (width * 0.05).clamp(28.0, 72.0);
    match kind {
        LineKind::Chorus => (chorus, CHORUS_COLOR),
        LineKind::Verse => (chorus * 0.75, VERSE_COLOR),
    }
}
