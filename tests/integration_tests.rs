//! Integration tests for the presentation core
//!
//! The particle engine is driven against a canvas that records every draw
//! call; the sequencer is driven with an explicit clock.

use std::time::Duration;

use about_you::aurora::{ParticleEngine, Variant, particle_count};
use about_you::canvas::Canvas;
use about_you::color::{LinearGradient, RadialGradient, Rgba};
use about_you::engine::Engine;
use about_you::lyrics::{LYRICS, LyricLine, LyricSequencer, SequencerEvent, SequencerPhase};
use about_you::viewport::Viewport;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Draw {
    Background,
    AuroraLayer,
    Star,
    Dust,
    Blob,
}

#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<Draw>,
}

impl Canvas for RecordingCanvas {
    fn fill_radial_gradient(&mut self, _: &RadialGradient) {
        self.calls.push(Draw::Background);
    }
    fn fill_linear_gradient(&mut self, _: &LinearGradient) {
        self.calls.push(Draw::AuroraLayer);
    }
    fn fill_circle(&mut self, _: Vector2, _: f32, _: Rgba) {
        self.calls.push(Draw::Dust);
    }
    fn fill_glow_circle(&mut self, _: Vector2, _: f32, _: f32, _: Rgba) {
        self.calls.push(Draw::Star);
    }
    fn fill_radial_blob(&mut self, _: &RadialGradient) {
        self.calls.push(Draw::Blob);
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn running_engine(seed: u64, width: f32, height: f32) -> ParticleEngine {
    let mut engine = ParticleEngine::with_seed(seed);
    assert!(engine.initialize(Viewport::new(width, height)));
    engine
}

/// Life stays within bounds over many frames, through several recycles
#[test]
fn test_life_invariant_over_many_frames() {
    let mut engine = running_engine(42, 800.0, 600.0);
    let mut canvas = RecordingCanvas::default();

    for _ in 0..6000 {
        engine.render_frame(&mut canvas);
        canvas.calls.clear();
        for p in engine.particles() {
            assert!(p.life >= 0.0 && p.life <= p.max_life, "life {} of {}", p.life, p.max_life);
        }
    }
}

#[test]
fn test_particle_count_matches_width() {
    for (width, expected) in [(200.0, 50), (499.0, 50), (750.0, 75), (1366.0, 137), (1500.0, 150), (2560.0, 150)] {
        let engine = running_engine(1, width, 400.0);
        assert_eq!(engine.particles().len(), expected, "width {}", width);
        assert_eq!(particle_count(width), expected);
    }
}

#[test]
fn test_aged_out_particle_is_recycled_inside_surface() {
    let (w, h) = (640.0, 360.0);
    let mut engine = running_engine(9, w, h);
    let mut canvas = RecordingCanvas::default();

    for p in engine.particles_mut() {
        p.life = p.max_life;
    }
    engine.render_frame(&mut canvas);

    for p in engine.particles() {
        assert_eq!(p.life, 0.0);
        // One frame of drift and wobble at most
        assert!(p.position.x >= -0.3 && p.position.x <= w + 0.3);
        assert!(p.position.y >= -0.3 && p.position.y <= h + 0.3);
    }
}

#[test]
fn test_position_wraps_on_all_edges() {
    let (w, h) = (500.0, 400.0);
    let mut engine = running_engine(5, w, h);
    let mut canvas = RecordingCanvas::default();

    let starts = [
        (w + 6.0, 100.0),
        (-6.0, 100.0),
        (100.0, h + 6.0),
        (100.0, -6.0),
    ];
    for (p, (x, y)) in engine.particles_mut().iter_mut().zip(starts) {
        p.position = Vector2::new(x, y);
        p.velocity = Vector2::new(0.0, 0.0);
        p.life = 0.0;
    }
    engine.render_frame(&mut canvas);

    let ps = engine.particles();
    assert!((ps[0].position.x - -5.0).abs() < 1e-3);
    assert!((ps[1].position.x - (w + 5.0)).abs() < 1e-3);
    assert!((ps[2].position.y - -5.0).abs() < 1e-3);
    assert!((ps[3].position.y - (h + 5.0)).abs() < 1e-3);
}

#[test]
fn test_frame_is_drawn_back_to_front() {
    let mut engine = running_engine(7, 1280.0, 720.0);
    let mut canvas = RecordingCanvas::default();
    engine.render_frame(&mut canvas);

    assert_eq!(canvas.calls[0], Draw::Background);
    assert_eq!(&canvas.calls[1..4], &[Draw::AuroraLayer; 3]);
    assert!(canvas.calls[4..]
        .iter()
        .all(|c| matches!(c, Draw::Star | Draw::Dust | Draw::Blob)));
}

#[test]
fn test_faint_particles_are_updated_but_not_drawn() {
    let mut engine = running_engine(8, 800.0, 600.0);
    let mut canvas = RecordingCanvas::default();

    for p in engine.particles_mut() {
        p.base_opacity = 0.0;
    }
    let before: Vec<f64> = engine.particles().iter().map(|p| p.phase).collect();
    engine.render_frame(&mut canvas);

    assert_eq!(canvas.calls.len(), 4);
    for (p, phase) in engine.particles().iter().zip(before) {
        assert!(p.phase > phase);
    }
}

#[test]
fn test_each_variant_draws_with_its_own_primitive() {
    let mut engine = running_engine(12, 800.0, 600.0);
    let mut canvas = RecordingCanvas::default();
    for p in engine.particles_mut() {
        p.base_opacity = 1.0;
        p.life = 0.0;
        p.phase = std::f64::consts::FRAC_PI_2;
    }
    let variants: Vec<Variant> = engine.particles().iter().map(|p| p.variant).collect();
    engine.render_frame(&mut canvas);

    let drawn = &canvas.calls[4..];
    assert_eq!(drawn.len(), variants.len());
    for (variant, call) in variants.iter().zip(drawn) {
        let expected = match variant {
            Variant::Star => Draw::Star,
            Variant::Aurora => Draw::Blob,
            Variant::Dust => Draw::Dust,
        };
        assert_eq!(*call, expected);
    }
}

#[test]
fn test_first_line_after_exactly_one_second() {
    let mut seq = LyricSequencer::new(&LYRICS);
    seq.start(ms(250));
    assert!(seq.update(ms(1249)).is_empty());
    assert_eq!(seq.phase(), SequencerPhase::Starting);
    assert_eq!(seq.update(ms(1250)), vec![SequencerEvent::LineShown(0)]);
}

#[test]
fn test_full_table_completes_once_at_expected_time() {
    let mut seq = LyricSequencer::new(&LYRICS);
    seq.start(Duration::ZERO);

    let expected_ms: u64 = 1000 + LYRICS[1..].iter().map(|l| l.duration_ms).sum::<u64>();
    assert_eq!(expected_ms, 40_500);

    let mut completions = Vec::new();
    let mut shown = Vec::new();
    // 10ms host ticks for a minute
    for tick in 0..=6000u64 {
        let now = ms(tick * 10);
        for event in seq.update(now) {
            match event {
                SequencerEvent::LineShown(i) => shown.push(i),
                SequencerEvent::Completed => completions.push(now),
            }
        }
    }

    assert_eq!(shown, (0..LYRICS.len()).collect::<Vec<_>>());
    assert_eq!(completions, vec![ms(expected_ms)]);
    assert_eq!(seq.phase(), SequencerPhase::Complete);
}

#[test]
fn test_restart_after_complete() {
    static LINES: [LyricLine; 2] = [LyricLine::verse("A", 1000), LyricLine::chorus("B", 2000)];
    let mut seq = LyricSequencer::new(&LINES);
    seq.start(ms(0));
    seq.update(ms(3000));
    assert!(seq.complete());

    seq.start(ms(5000));
    assert_eq!(seq.phase(), SequencerPhase::Starting);
    assert_eq!(seq.current_index(), None);
    assert!(!seq.complete());

    assert!(seq.update(ms(5999)).is_empty());
    assert_eq!(seq.update(ms(6000)), vec![SequencerEvent::LineShown(0)]);
    assert_eq!(
        seq.update(ms(8000)),
        vec![SequencerEvent::LineShown(1), SequencerEvent::Completed]
    );
}

#[test]
fn test_teardown_stops_everything() {
    let mut engine = running_engine(3, 800.0, 600.0);
    let mut seq = LyricSequencer::new(&LYRICS);
    let mut canvas = RecordingCanvas::default();

    seq.start(Duration::ZERO);
    seq.update(ms(1000));
    engine.render_frame(&mut canvas);

    engine.dispose();
    seq.teardown();
    canvas.calls.clear();

    let time = engine.time();
    assert!(!engine.render_frame(&mut canvas));
    assert!(canvas.calls.is_empty());
    assert_eq!(engine.time(), time);
    assert!(seq.update(ms(60_000)).is_empty());
    assert_eq!(seq.phase(), SequencerPhase::Showing(0));
}
