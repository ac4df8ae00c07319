use std::f64::consts::TAU;

use rand::Rng;
use raylib::prelude::*;

use crate::canvas::Canvas;
use crate::color::{ColorStop, RadialGradient, Rgba};
use crate::constants::WRAP_MARGIN;

const STAR_COLOR: Rgba = Rgba::WHITE;
const DUST_COLOR: Rgba = Rgba::rgb(0x87, 0xce, 0xeb);
const AURORA_COLORS: [Rgba; 5] = [
    Rgba::rgb(0x40, 0xe0, 0xd0),
    Rgba::rgb(0x8a, 0x2b, 0xe2),
    Rgba::rgb(0x48, 0x3d, 0x8b),
    Rgba::rgb(0x19, 0x19, 0x70),
    Rgba::rgb(0x41, 0x69, 0xe1),
];

const PHASE_STEP: f64 = 0.015;
const WOBBLE_X: f32 = 0.08;
const WOBBLE_Y: f32 = 0.06;
const MIN_VISIBLE_OPACITY: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Star,
    Aurora,
    Dust,
}

impl Variant {
    /// Two independent draws: star below 0.4, then aurora below 0.7 of a
    /// fresh draw, dust otherwise (40% / 42% / 18%).
    pub fn pick<R: Rng>(rng: &mut R) -> Self {
        if rng.random::<f32>() < 0.4 {
            Variant::Star
        } else if rng.random::<f32>() < 0.7 {
            Variant::Aurora
        } else {
            Variant::Dust
        }
    }

    /// Full range of a velocity component, centred on zero
    pub fn speed(self) -> f32 {
        match self {
            Variant::Dust => 0.2,
            Variant::Star | Variant::Aurora => 0.08,
        }
    }

    fn random_size<R: Rng>(self, rng: &mut R) -> f32 {
        match self {
            Variant::Star => rng.random::<f32>() * 1.2 + 0.3,
            Variant::Aurora | Variant::Dust => rng.random::<f32>() * 2.5 + 0.8,
        }
    }

    fn random_color<R: Rng>(self, rng: &mut R) -> Rgba {
        match self {
            Variant::Star => STAR_COLOR,
            Variant::Aurora => AURORA_COLORS[rng.random_range(0..AURORA_COLORS.len())],
            Variant::Dust => DUST_COLOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub size: f32,
    pub color: Rgba,
    pub base_opacity: f32,
    pub life: f32,
    pub max_life: f32,
    pub variant: Variant,
    pub phase: f64,
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let variant = Variant::pick(rng);
        let base_opacity = rng.random::<f32>() * 0.6 + 0.2;
        let position = Vector2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);
        let velocity = random_velocity(rng, variant);
        let size = variant.random_size(rng);
        let color = variant.random_color(rng);

        Self {
            position,
            velocity,
            size,
            color,
            base_opacity,
            life: rng.random::<f32>() * 1000.0,
            max_life: 2000.0 + rng.random::<f32>() * 3000.0,
            variant,
            phase: rng.random::<f64>() * TAU,
        }
    }

    /// Reuse this slot as a fresh particle; variant, size and color persist
    pub fn recycle<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.life = 0.0;
        self.position = Vector2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);
        self.velocity = random_velocity(rng, self.variant);
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.life += 1.0;
        if self.life > self.max_life {
            self.recycle(rng, width, height);
        }

        self.phase += PHASE_STEP;
        self.position.x += self.velocity.x + self.phase.sin() as f32 * WOBBLE_X;
        self.position.y += self.velocity.y + (self.phase * 0.8).cos() as f32 * WOBBLE_Y;

        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
    }

    /// Opacity after fading with age and the global shimmer
    pub fn opacity(&self, time: f64) -> f32 {
        let life_ratio = (1.0 - self.life / self.max_life).max(0.0);
        let shimmer = 0.7 + (time * 1.5 + self.phase).sin() as f32 * 0.3;
        self.base_opacity * life_ratio * shimmer
    }

    /// Draws the particle; returns false when it was too faint to draw
    pub fn draw<C: Canvas>(&self, canvas: &mut C, time: f64) -> bool {
        let opacity = self.opacity(time);
        if opacity < MIN_VISIBLE_OPACITY {
            return false;
        }
        let color = self.color.faded(opacity);

        match self.variant {
            Variant::Star => {
                let twinkle = 0.6 + (time * 3.0 + self.phase).sin() as f32 * 0.4;
                canvas.fill_glow_circle(self.position, self.size * twinkle, 8.0 * twinkle, color);
            }
            Variant::Aurora => {
                let pulse = 0.7 + (time * 2.0 + self.phase).sin() as f32 * 0.3;
                canvas.fill_radial_blob(&RadialGradient {
                    center: self.position,
                    radius: self.size * 3.0 * pulse,
                    stops: vec![
                        ColorStop::new(0.0, color),
                        ColorStop::new(0.7, color),
                        ColorStop::new(1.0, color.with_alpha(0.0)),
                    ],
                });
            }
            Variant::Dust => {
                canvas.fill_circle(self.position, self.size, self.color.faded(opacity * 0.5));
            }
        }
        true
    }
}

fn random_velocity<R: Rng>(rng: &mut R, variant: Variant) -> Vector2 {
    let speed = variant.speed();
    Vector2::new(
        (rng.random::<f32>() - 0.5) * speed,
        (rng.random::<f32>() - 0.5) * speed,
    )
}

/// Teleport to the opposite side once past the margin
fn wrap(value: f32, bound: f32) -> f32 {
    if value < -WRAP_MARGIN {
        bound + WRAP_MARGIN
    } else if value > bound + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        value
    }
}
