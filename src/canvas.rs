//! Drawing surface abstraction.
//!
//! The particle engine only needs a handful of raster primitives, so it
//! draws through [`Canvas`]. [`RaylibCanvas`] maps those primitives onto
//! raylib; gradients are rasterized as thin non-overlapping bands so a
//! translucent fill blends exactly once over the previous frame.

use raylib::prelude::*;

use crate::color::{LinearGradient, RadialGradient, Rgba};

const RADIAL_BANDS: usize = 48;
const LINEAR_BANDS: usize = 64;
const BLOB_BANDS: usize = 10;
const RING_SEGMENTS: i32 = 96;

/// 2D raster operations in logical (unscaled) coordinates
pub trait Canvas {
    /// Fill the whole surface with a radial gradient, padding beyond its radius
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient);

    /// Fill the whole surface with a linear gradient, padding past both ends
    fn fill_linear_gradient(&mut self, gradient: &LinearGradient);

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Rgba);

    /// Filled circle with a soft glow of `blur` units around it
    fn fill_glow_circle(&mut self, center: Vector2, radius: f32, blur: f32, color: Rgba);

    /// Disc of `gradient.radius` filled with the gradient, transparent outside
    fn fill_radial_blob(&mut self, gradient: &RadialGradient);
}

pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    scale: f32,
    width: f32,
    height: f32,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    /// `width`/`height` are logical units; `scale` maps them to surface pixels
    pub fn new(d: &'a mut D, width: f32, height: f32, scale: f32) -> Self {
        Self { d, scale, width, height }
    }

    fn px(&self, v: Vector2) -> Vector2 {
        Vector2::new(v.x * self.scale, v.y * self.scale)
    }

    fn half_diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt() * self.scale
    }

    fn rings(&mut self, gradient: &RadialGradient, bands: usize, pad_to: Option<f32>) {
        let center = self.px(gradient.center);
        let radius = gradient.radius * self.scale;
        let step = radius / bands as f32;

        for band in 0..bands {
            let inner = step * band as f32;
            let outer = inner + step;
            let color = gradient.color_at((inner + step * 0.5) / self.scale);
            if color.a > 0.0 {
                self.d.draw_ring(center, inner, outer, 0.0, 360.0, RING_SEGMENTS, Color::from(color));
            }
        }

        if let Some(limit) = pad_to {
            let color = gradient.color_at(gradient.radius);
            if limit > radius && color.a > 0.0 {
                self.d.draw_ring(center, radius, limit, 0.0, 360.0, RING_SEGMENTS, Color::from(color));
            }
        }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        // Corners past the radius take the outer stop
        let c = gradient.center;
        let far_x = c.x.max(self.width - c.x);
        let far_y = c.y.max(self.height - c.y);
        let limit = (far_x * far_x + far_y * far_y).sqrt() * self.scale;
        self.rings(gradient, RADIAL_BANDS, Some(limit));
    }

    fn fill_linear_gradient(&mut self, gradient: &LinearGradient) {
        let axis = Vector2::new(gradient.to.x - gradient.from.x, gradient.to.y - gradient.from.y);
        let length = (axis.x * axis.x + axis.y * axis.y).sqrt();
        if length <= f32::EPSILON {
            let color = gradient.color_at(gradient.from);
            self.d.draw_rectangle(
                0,
                0,
                (self.width * self.scale).ceil() as i32,
                (self.height * self.scale).ceil() as i32,
                Color::from(color),
            );
            return;
        }

        // Offset range actually visible on the surface
        let corners = [
            Vector2::new(0.0, 0.0),
            Vector2::new(self.width, 0.0),
            Vector2::new(0.0, self.height),
            Vector2::new(self.width, self.height),
        ];
        let (mut t_min, mut t_max) = (f32::MAX, f32::MIN);
        for corner in corners {
            let t = gradient.offset_of(corner);
            t_min = t_min.min(t);
            t_max = t_max.max(t);
        }

        let unit = Vector2::new(axis.x / length, axis.y / length);
        let rotation = unit.y.atan2(unit.x).to_degrees();
        let span = self.half_diagonal() * 2.0;
        let step = (t_max - t_min) / LINEAR_BANDS as f32;

        for band in 0..LINEAR_BANDS {
            let t0 = t_min + step * band as f32;
            let mid = t0 + step * 0.5;
            let color = crate::color::sample_stops(&gradient.stops, mid);
            if color.a <= 0.0 {
                continue;
            }
            let center = self.px(Vector2::new(
                gradient.from.x + unit.x * mid * length,
                gradient.from.y + unit.y * mid * length,
            ));
            let band_width = step * length * self.scale;
            self.d.draw_rectangle_pro(
                Rectangle::new(center.x, center.y, band_width, span),
                Vector2::new(band_width * 0.5, span * 0.5),
                rotation,
                Color::from(color),
            );
        }
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Rgba) {
        let center = self.px(center);
        self.d.draw_circle_v(center, radius * self.scale, Color::from(color));
    }

    fn fill_glow_circle(&mut self, center: Vector2, radius: f32, blur: f32, color: Rgba) {
        let c = self.px(center);
        if blur > 0.0 {
            self.d.draw_circle_gradient(
                c.x.round() as i32,
                c.y.round() as i32,
                (radius + blur) * self.scale,
                Color::from(color.faded(0.5)),
                Color::from(color.with_alpha(0.0)),
            );
        }
        self.d.draw_circle_v(c, radius * self.scale, Color::from(color));
    }

    fn fill_radial_blob(&mut self, gradient: &RadialGradient) {
        self.rings(gradient, BLOB_BANDS, None);
    }
}
