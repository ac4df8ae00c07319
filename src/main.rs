use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

use about_you::aurora::ParticleEngine;
use about_you::canvas::RaylibCanvas;
use about_you::config::Args;
use about_you::constants::*;
use about_you::engine::Engine;
use about_you::ffmpeg::Ffmpeg;
use about_you::logging;
use about_you::lyrics::{LYRICS, LyricSequencer, SequencerEvent};
use about_you::overlay::Overlay;
use about_you::surface::Surface;
use about_you::viewport::Viewport;

fn current_viewport(rl: &RaylibHandle, args: &Args) -> Viewport {
    let ratio = args
        .pixel_ratio
        .unwrap_or_else(|| rl.get_window_scale_dpi().x);
    Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32).with_pixel_ratio(ratio)
}

fn start_requested(rl: &RaylibHandle, overlay: &Overlay, viewport: Viewport, sequencer: &LyricSequencer) -> bool {
    if !overlay.button_visible(sequencer) {
        return false;
    }
    if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        return true;
    }
    rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
        && overlay.hits_button(rl.get_mouse_position(), viewport.width, viewport.height, sequencer)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);
    args.validate()?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("About You")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Surface & engine ---
    let mut viewport = current_viewport(&rl, &args);
    let mut surface = match Surface::allocate(&mut rl, &thread, viewport) {
        Ok(surface) => Some(surface),
        Err(e) if !args.recording() => {
            warn!("{}, running without background", e);
            None
        }
        Err(e) => return Err(e).context("recording needs an off-screen surface"),
    };

    let mut engine = match args.seed {
        Some(seed) => ParticleEngine::with_seed(seed),
        None => ParticleEngine::new(),
    };
    if surface.is_some() {
        engine.initialize(viewport);
    }

    let mut recorder = match (&args.record, &surface) {
        (Some(path), Some(surface)) => {
            let (w, h) = surface.pixel_size();
            Some(Ffmpeg::spawn(w as i32, h as i32, args.fps, path)?)
        }
        _ => None,
    };

    // --- Lyrics ---
    let mut sequencer = LyricSequencer::new(&LYRICS);
    let mut overlay = Overlay::new();
    let mut clock = Duration::ZERO;
    let mut finish_at: Option<Duration> = None;

    if args.autostart {
        sequencer.start(clock);
    }
    info!(?viewport, recording = recorder.is_some(), "presentation mounted");

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recordings advance exactly one frame per iteration
        let dt = if recorder.is_some() { args.frame_time() } else { rl.get_frame_time() };
        clock += Duration::from_secs_f32(dt);

        if rl.is_window_resized() {
            let resized = current_viewport(&rl, &args);
            if recorder.is_some() {
                warn!("window resized while recording; output keeps its initial size");
            } else if let Some(current) = surface.as_mut() {
                match Surface::allocate(&mut rl, &thread, resized) {
                    Ok(next) => {
                        *current = next;
                        viewport = resized;
                        engine.resize(viewport);
                        info!(width = viewport.width, height = viewport.height, "viewport resized");
                    }
                    Err(e) => warn!("{}, keeping previous surface", e),
                }
            } else {
                viewport = resized;
            }
        }

        if start_requested(&rl, &overlay, viewport, &sequencer) {
            sequencer.start(clock);
            finish_at = None;
        }
        for event in sequencer.update(clock) {
            if event == SequencerEvent::Completed && recorder.is_some() {
                finish_at = Some(clock + Duration::from_secs_f32(RECORD_TAIL));
            }
        }
        overlay.update(dt, &sequencer);

        // --- Render into the off-screen surface ---
        if let Some(surface) = surface.as_mut() {
            let layout = surface.viewport();
            let scale = layout.surface_scale();
            let source = surface.flipped_source();

            rl.draw_texture_mode(&thread, &mut surface.background, |mut tmd| {
                let mut d = tmd.begin_drawing(&thread);
                let mut canvas = RaylibCanvas::new(&mut d, layout.width, layout.height, scale);
                engine.render_frame(&mut canvas);
            });

            let Surface { background, frame, .. } = surface;
            rl.draw_texture_mode(&thread, frame, |mut tmd| {
                let mut d = tmd.begin_drawing(&thread);
                d.clear_background(Color::BLACK);
                d.draw_texture_rec(&*background, source, Vector2::new(0.0, 0.0), Color::WHITE);
                overlay.draw(&mut d, &sequencer, layout.width, layout.height, scale);
            });
        }

        // --- Present ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        match surface.as_ref() {
            Some(surface) => {
                let sw = d.get_screen_width() as f32;
                let sh = d.get_screen_height() as f32;
                d.draw_texture_pro(
                    &surface.frame,
                    surface.flipped_source(),
                    Rectangle::new(0.0, 0.0, sw, sh),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            None => overlay.draw(&mut d, &sequencer, viewport.width, viewport.height, 1.0),
        }
        drop(d);

        if let (Some(ffmpeg), Some(surface)) = (recorder.as_mut(), surface.as_ref()) {
            let image = surface
                .frame
                .load_image()
                .map_err(|e| anyhow::anyhow!("failed to read back frame: {}", e))?;
            ffmpeg.write(&image)?;
        }

        if finish_at.is_some_and(|at| clock >= at) {
            info!("sequence recorded, closing");
            break;
        }
    }

    // --- Teardown ---
    engine.dispose();
    sequencer.teardown();
    if let Some(ffmpeg) = recorder {
        ffmpeg.finish().context("ffmpeg did not finish cleanly")?;
    }
    Ok(())
}
