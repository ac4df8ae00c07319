//! Time-varying background: the radial base wash and the drifting aurora bands.

use raylib::prelude::*;

use crate::color::{ColorStop, LinearGradient, RadialGradient, Rgba};

/// Radial base gradient centred on the surface
pub fn base_gradient(time: f64, width: f32, height: f32) -> RadialGradient {
    let t = time * 0.3;
    let alpha = |base: f64, wave: f64| (base + wave) as f32;
    RadialGradient {
        center: Vector2::new(width / 2.0, height / 2.0),
        radius: width.max(height) / 2.0,
        stops: vec![
            ColorStop::new(0.0, Rgba::new(15, 15, 35, alpha(0.98, t.sin() * 0.02))),
            ColorStop::new(0.4, Rgba::new(25, 25, 50, alpha(0.95, (t * 1.1).cos() * 0.03))),
            ColorStop::new(0.8, Rgba::new(20, 30, 60, alpha(0.92, (t * 0.7).sin() * 0.04))),
            ColorStop::new(1.0, Rgba::new(10, 15, 30, alpha(0.90, (t * 0.5).cos() * 0.05))),
        ],
    }
}

/// Base strength of a layer; deeper layers are fainter
pub fn layer_intensity(layer: usize) -> f32 {
    0.06 - layer as f32 * 0.012
}

pub fn aurora_layer(layer: usize, time: f64, width: f32, height: f32) -> LinearGradient {
    let lt = time + layer as f64 * 0.4;
    let i = layer_intensity(layer);
    // Phase terms stay in f64; only the resulting fractions drop to f32
    let wave = |x: f64| x as f32;

    LinearGradient {
        from: Vector2::new(
            wave((lt * 0.2).sin()) * width * 0.15 + width * 0.25,
            wave((lt * 0.15).cos()) * height * 0.1 + height * 0.3,
        ),
        to: Vector2::new(
            wave((lt * 0.25).cos()) * width * 0.2 + width * 0.75,
            wave((lt * 0.2).sin()) * height * 0.15 + height * 0.7,
        ),
        stops: vec![
            ColorStop::new(0.0, Rgba::new(64, 224, 208, i * (0.7 + wave(lt.sin()) * 0.15))),
            ColorStop::new(0.3, Rgba::new(138, 43, 226, i * (0.5 + wave((lt * 1.2).cos()) * 0.15))),
            ColorStop::new(0.6, Rgba::new(72, 61, 139, i * (0.6 + wave((lt * 0.9).sin()) * 0.12))),
            ColorStop::new(1.0, Rgba::new(25, 25, 112, i * (0.4 + wave((lt * 0.7).cos()) * 0.12))),
        ],
    }
}
