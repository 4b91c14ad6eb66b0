use super::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// A draw call the backend could not complete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("draw call failed: {0}")]
pub struct SurfaceError(pub String);

/// The handful of 2D drawing operations the particle field needs.
///
/// The browser backend wraps a `CanvasRenderingContext2d`; tests record calls.
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke a line from `from` to `to` with a linear gradient between the two colors.
    fn stroke_link(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: &str,
        to_color: &str,
        alpha: f32,
    ) -> Result<(), SurfaceError>;

    /// Fill a diamond of half-diagonal `radius` rotated by `rotation` radians, with a glow.
    fn fill_diamond(
        &mut self,
        center: Vec2,
        radius: f32,
        rotation: f32,
        color: &str,
        alpha: f32,
        glow: f32,
    ) -> Result<(), SurfaceError>;
}

/// Tuning for a particle field. `Default` pulls from `constants.rs`.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub max_particles: usize,
    pub area_per_particle: f32,
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub pointer_radius: f32,
    pub pointer_impulse: f32,
    pub pointer_opacity_gain: f32,
    pub max_speed: f32,
    pub opacity_floor: f32,
    pub opacity_drift_top: f32,
    pub opacity_ceiling: f32,
    pub wrap_margin: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            pointer_radius: POINTER_RADIUS,
            pointer_impulse: POINTER_IMPULSE,
            pointer_opacity_gain: POINTER_OPACITY_GAIN,
            max_speed: MAX_SPEED,
            opacity_floor: OPACITY_FLOOR,
            opacity_drift_top: OPACITY_DRIFT_TOP,
            opacity_ceiling: OPACITY_CEILING,
            wrap_margin: WRAP_MARGIN,
        }
    }
}

impl FieldParams {
    /// Number of points for a surface: one per `area_per_particle`, capped at `max_particles`.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        if !(width > 0.0 && height > 0.0) || self.area_per_particle <= 0.0 {
            return 0;
        }
        let by_area = ((width * height) / self.area_per_particle).floor() as usize;
        by_area.min(self.max_particles)
    }

    /// Alpha of the link between two points `distance` apart, or `None` when too far apart.
    ///
    /// Linear falloff from `link_max_alpha` at zero distance to zero at `link_distance`.
    #[inline]
    pub fn link_alpha(&self, distance: f32) -> Option<f32> {
        (distance < self.link_distance)
            .then(|| (self.link_distance - distance) / self.link_distance * self.link_max_alpha)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub opacity_drift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub pulse_speed: f32,
    pub color: &'static str,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(centered(rng, SPEED_SPAN), centered(rng, SPEED_SPAN)),
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            opacity: OPACITY_INIT_MIN + rng.gen::<f32>() * OPACITY_INIT_SPAN,
            opacity_drift: centered(rng, OPACITY_DRIFT_SPAN),
            rotation: 0.0,
            rotation_speed: centered(rng, ROTATION_SPEED_SPAN),
            pulse_speed: PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN,
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
        }
    }

    /// Pull toward the pointer when within `pointer_radius`. Returns whether the point was affected.
    pub fn attract(&mut self, pointer: Vec2, params: &FieldParams) -> bool {
        let delta = pointer - self.position;
        let distance = delta.length();
        if distance >= params.pointer_radius {
            return false;
        }
        let force = (params.pointer_radius - distance) / params.pointer_radius;
        if distance > f32::EPSILON {
            self.velocity += delta / distance * force * params.pointer_impulse;
            self.velocity = self.velocity.clamp_length_max(params.max_speed);
        }
        self.opacity = (self.opacity + force * params.pointer_opacity_gain).min(params.opacity_ceiling);
        true
    }

    /// One frame of motion: move, wrap at the edges, drift opacity, spin.
    pub fn advance(&mut self, width: f32, height: f32, params: &FieldParams) {
        self.position += self.velocity;
        self.position.x = wrap_axis(self.position.x, width, params.wrap_margin);
        self.position.y = wrap_axis(self.position.y, height, params.wrap_margin);

        self.opacity =
            (self.opacity + self.opacity_drift).clamp(params.opacity_floor, params.opacity_ceiling);
        if self.opacity <= params.opacity_floor {
            self.opacity_drift = self.opacity_drift.abs();
        } else if self.opacity >= params.opacity_drift_top {
            self.opacity_drift = -self.opacity_drift.abs();
        }

        self.rotation += self.rotation_speed;
    }

    /// Drawn radius including the slow size pulse.
    #[inline]
    pub fn draw_radius(&self, elapsed_ms: f64) -> f32 {
        let phase = (elapsed_ms * self.pulse_speed as f64).sin() as f32;
        (self.radius + phase * PULSE_AMPLITUDE).max(MIN_DRAW_RADIUS)
    }
}

#[inline]
fn centered(rng: &mut impl Rng, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

/// Leaving one edge re-enters from the opposite edge, `margin` outside the surface.
#[inline]
pub fn wrap_axis(value: f32, extent: f32, margin: f32) -> f32 {
    if value > extent + margin {
        -margin
    } else if value < -margin {
        extent + margin
    } else {
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Every unordered pair closer than the link distance. Quadratic in point count.
pub fn collect_links(particles: &[Particle], params: &FieldParams, out: &mut Vec<Link>) {
    out.clear();
    for (i, p) in particles.iter().enumerate() {
        for (j, q) in particles.iter().enumerate().skip(i + 1) {
            if let Some(alpha) = params.link_alpha(p.position.distance(q.position)) {
                out.push(Link { a: i, b: j, alpha });
            }
        }
    }
}

/// The animated point set for one surface size.
pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
    links: Vec<Link>,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            params,
            particles: Vec::new(),
            width,
            height,
            rng,
            links: Vec::new(),
        };
        field.regenerate();
        field
    }

    /// Build a field around an explicit point set; resizing still regenerates randomly.
    pub fn from_particles(
        params: FieldParams,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
        rng: StdRng,
    ) -> Self {
        Self {
            params,
            particles,
            width,
            height,
            rng,
            links: Vec::new(),
        }
    }

    /// New surface size: the whole set is discarded and generated again.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = self.params.particle_count(self.width, self.height);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::random(rng, w, h)).collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn apply_pointer(&mut self, pointer: Option<Vec2>) {
        let Some(pointer) = pointer else {
            return;
        };
        for p in &mut self.particles {
            p.attract(pointer, &self.params);
        }
    }

    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.advance(self.width, self.height, &self.params);
        }
    }

    /// Run one animation step: clear, draw links, attract, advance and draw points.
    ///
    /// Physics always advances. A failed draw call does not stop the rest of the
    /// frame; the first failure is returned once the frame is complete.
    pub fn step(
        &mut self,
        surface: &mut impl DrawSurface,
        pointer: Option<Vec2>,
        elapsed_ms: f64,
    ) -> Result<(), SurfaceError> {
        let mut first_err: Option<SurfaceError> = None;
        surface.clear(self.width, self.height);

        collect_links(&self.particles, &self.params, &mut self.links);
        for link in &self.links {
            let (p, q) = (&self.particles[link.a], &self.particles[link.b]);
            if let Err(e) = surface.stroke_link(p.position, q.position, p.color, q.color, link.alpha) {
                first_err.get_or_insert(e);
            }
        }

        self.apply_pointer(pointer);

        for p in &mut self.particles {
            p.advance(self.width, self.height, &self.params);
            let radius = p.draw_radius(elapsed_ms);
            if let Err(e) = surface.fill_diamond(
                p.position,
                radius,
                p.rotation,
                p.color,
                p.opacity,
                radius * GLOW_PER_RADIUS,
            ) {
                first_err.get_or_insert(e);
            }
        }

        first_err.map_or(Ok(()), Err)
    }
}
