use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::aurora::background::{aurora_layer, base_gradient};
use crate::aurora::particle::Particle;
use crate::aurora::state::EngineState;
use crate::canvas::Canvas;
use crate::constants::*;
use crate::engine::Engine;
use crate::viewport::Viewport;

/// Number of particles for a surface `width` units wide; a fractional
/// share rounds up to one more particle
pub fn particle_count(width: f32) -> usize {
    let count = (width / PARTICLE_DENSITY).max(0.0).ceil() as usize;
    count.clamp(MIN_PARTICLES, MAX_PARTICLES)
}

pub struct ParticleEngine {
    particles: Vec<Particle>,
    rng: StdRng,
    time: f64,
    viewport: Viewport,
    pending_resize: Option<Viewport>,
    state: EngineState,
    frames: u64,
}

impl ParticleEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic particle layout, for recordings and tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
            time: 0.0,
            viewport: Viewport::new(0.0, 0.0),
            pending_resize: None,
            state: EngineState::Idle,
            frames: 0,
        }
    }

    /// Replace the whole particle set for the current viewport
    fn initialize_particles(&mut self) {
        let (width, height) = (self.viewport.width, self.viewport.height);
        let count = particle_count(width);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(&mut self.rng, width, height));
        }
        debug!(count, width, height, "particles initialized");
    }

    fn apply_pending_resize(&mut self) {
        if let Some(viewport) = self.pending_resize.take() {
            self.viewport = viewport;
            self.initialize_particles();
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> EngineState {
        self.state
    }
}

impl Default for ParticleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ParticleEngine {
    fn initialize(&mut self, viewport: Viewport) -> bool {
        if self.state == EngineState::Disposed {
            return false;
        }
        if !viewport.is_drawable() {
            warn!(?viewport, "no drawable surface, particle engine not started");
            return false;
        }

        self.viewport = viewport;
        self.pending_resize = None;
        self.initialize_particles();
        self.state = EngineState::Running;
        info!(
            width = viewport.width,
            height = viewport.height,
            particles = self.particles.len(),
            "particle engine started"
        );
        true
    }

    fn resize(&mut self, viewport: Viewport) {
        if self.state != EngineState::Running || !viewport.is_drawable() {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "resize queued");
        self.pending_resize = Some(viewport);
    }

    fn render_frame<C: Canvas>(&mut self, canvas: &mut C) -> bool {
        if self.state != EngineState::Running {
            return false;
        }

        // Size changes only land between frames
        self.apply_pending_resize();

        self.time += TIME_STEP;
        self.frames += 1;
        let time = self.time;
        let (width, height) = (self.viewport.width, self.viewport.height);

        canvas.fill_radial_gradient(&base_gradient(time, width, height));

        for layer in 0..AURORA_LAYERS {
            canvas.fill_linear_gradient(&aurora_layer(layer, time, width, height));
        }

        let Self { particles, rng, .. } = self;
        for particle in particles.iter_mut() {
            particle.update(rng, width, height);
            particle.draw(canvas, time);
        }

        true
    }

    fn dispose(&mut self) {
        if self.state == EngineState::Disposed {
            return;
        }
        self.state = EngineState::Disposed;
        self.pending_resize = None;
        info!(frames = self.frames, "particle engine disposed");
    }
}
