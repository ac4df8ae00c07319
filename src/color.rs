use raylib::prelude::*;

/// 8-bit RGB with a floating point alpha, so faint gradient stops keep
/// their precision until they reach the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Multiply the alpha, as a global alpha would
    pub fn faded(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Color {
        Color::new(c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Color at `t` along a sorted stop list; pads with the end colors.
pub fn sample_stops(stops: &[ColorStop], t: f32) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::TRANSPARENT,
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

/// Circular gradient from `center` (offset 0) out to `radius` (offset 1)
#[derive(Debug, Clone)]
pub struct RadialGradient {
    pub center: Vector2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn color_at(&self, distance: f32) -> Rgba {
        if self.radius <= 0.0 {
            return sample_stops(&self.stops, 1.0);
        }
        sample_stops(&self.stops, distance / self.radius)
    }
}

/// Gradient along the line `from` (offset 0) to `to` (offset 1)
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub from: Vector2,
    pub to: Vector2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Position of a point projected onto the gradient axis, 0 at `from`
    pub fn offset_of(&self, point: Vector2) -> f32 {
        let axis = Vector2::new(self.to.x - self.from.x, self.to.y - self.from.y);
        let len_sq = axis.x * axis.x + axis.y * axis.y;
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        ((point.x - self.from.x) * axis.x + (point.y - self.from.y) * axis.y) / len_sq
    }

    pub fn color_at(&self, point: Vector2) -> Rgba {
        sample_stops(&self.stops, self.offset_of(point))
    }
}
