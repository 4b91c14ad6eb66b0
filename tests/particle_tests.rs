// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, PartialEq)]
enum Call {
    Clear,
    Link { alpha: f32 },
    Diamond { center: Vec2, radius: f32, glow: f32 },
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    fail_links: bool,
    fail_diamonds: bool,
}

impl DrawSurface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.calls.push(Call::Clear);
    }

    fn stroke_link(
        &mut self,
        _from: Vec2,
        _to: Vec2,
        _from_color: &str,
        _to_color: &str,
        alpha: f32,
    ) -> Result<(), SurfaceError> {
        self.calls.push(Call::Link { alpha });
        if self.fail_links {
            return Err(SurfaceError("link".into()));
        }
        Ok(())
    }

    fn fill_diamond(
        &mut self,
        center: Vec2,
        radius: f32,
        _rotation: f32,
        _color: &str,
        _alpha: f32,
        glow: f32,
    ) -> Result<(), SurfaceError> {
        self.calls.push(Call::Diamond { center, radius, glow });
        if self.fail_diamonds {
            return Err(SurfaceError("diamond".into()));
        }
        Ok(())
    }
}

fn still_particle(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        radius: 2.0,
        opacity: 0.5,
        opacity_drift: 0.0,
        rotation: 0.0,
        rotation_speed: 0.0,
        pulse_speed: 0.0,
        color: "#fff",
    }
}

fn seeded_field(width: f32, height: f32) -> ParticleField {
    ParticleField::new(FieldParams::default(), width, height, StdRng::seed_from_u64(7))
}

#[test]
fn small_viewport_gets_no_points_and_large_hits_the_cap() {
    let params = FieldParams::default();
    assert_eq!(params.particle_count(100.0, 100.0), 0);
    assert_eq!(params.particle_count(1920.0, 1080.0), 60);
    assert_eq!(seeded_field(100.0, 100.0).particles().len(), 0);
    assert_eq!(seeded_field(1920.0, 1080.0).particles().len(), 60);
}

#[test]
fn count_scales_with_area_below_cap() {
    let params = FieldParams::default();
    // 300x500 = 150_000 px² -> 10 points
    assert_eq!(params.particle_count(300.0, 500.0), 10);
    assert_eq!(params.particle_count(600.0, 500.0), 20);
    assert_eq!(params.particle_count(0.0, 500.0), 0);
    assert_eq!(params.particle_count(-10.0, 500.0), 0);
    for (w, h) in [(320.0, 568.0), (800.0, 600.0), (4000.0, 3000.0)] {
        assert!(params.particle_count(w, h) <= params.max_particles);
    }
}

#[test]
fn resize_regenerates_the_point_set() {
    let mut field = seeded_field(300.0, 500.0);
    assert_eq!(field.particles().len(), 10);
    field.resize(1920.0, 1080.0);
    assert_eq!(field.particles().len(), 60);
    assert_eq!(field.size(), (1920.0, 1080.0));
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 1920.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 1080.0);
    }
}

#[test]
fn leaving_left_edge_reenters_past_right_edge() {
    let params = FieldParams::default();
    let mut p = still_particle(0.0, 50.0);
    p.velocity = Vec2::new(-1.0, 0.0);
    for _ in 0..10 {
        p.advance(200.0, 100.0, &params);
    }
    assert_eq!(p.position.x, -10.0);
    p.advance(200.0, 100.0, &params);
    assert_eq!(p.position.x, 210.0);
    assert_eq!(p.position.y, 50.0);
}

#[test]
fn wrap_axis_handles_both_edges() {
    assert_eq!(wrap_axis(211.0, 200.0, 10.0), -10.0);
    assert_eq!(wrap_axis(-11.0, 200.0, 10.0), 210.0);
    assert_eq!(wrap_axis(210.0, 200.0, 10.0), 210.0);
    assert_eq!(wrap_axis(50.0, 200.0, 10.0), 50.0);
}

#[test]
fn points_stay_in_bounds_and_opacity_band_over_many_frames() {
    let (w, h) = (1280.0, 720.0);
    let mut field = seeded_field(w, h);
    let margin = field.params().wrap_margin;
    let (floor, ceiling) = (field.params().opacity_floor, field.params().opacity_ceiling);
    let mut surface = Recorder::default();
    for frame in 0..2000 {
        let pointer = (frame % 3 == 0).then(|| Vec2::new(640.0, 360.0));
        field
            .step(&mut surface, pointer, frame as f64 * 16.0)
            .expect("recorder never fails");
        surface.calls.clear();
        for p in field.particles() {
            assert!(p.position.x >= -margin - 1e-3 && p.position.x <= w + margin + 1e-3);
            assert!(p.position.y >= -margin - 1e-3 && p.position.y <= h + margin + 1e-3);
            assert!(p.opacity >= floor && p.opacity <= ceiling, "opacity {}", p.opacity);
            assert!(p.velocity.length() <= field.params().max_speed + 1e-4);
        }
    }
}

#[test]
fn opacity_drift_turns_around_at_floor_and_top() {
    let params = FieldParams::default();
    let mut p = still_particle(10.0, 10.0);
    p.opacity = 0.79;
    p.opacity_drift = 0.02;
    p.advance(100.0, 100.0, &params);
    assert!(p.opacity_drift < 0.0);

    p.opacity = 0.11;
    p.opacity_drift = -0.02;
    p.advance(100.0, 100.0, &params);
    assert_eq!(p.opacity, params.opacity_floor);
    assert!(p.opacity_drift > 0.0);
}

#[test]
fn link_exists_iff_closer_than_threshold() {
    let params = FieldParams::default();
    let particles = vec![
        still_particle(0.0, 0.0),
        still_particle(119.0, 0.0),
        still_particle(0.0, 120.0),
        still_particle(500.0, 500.0),
    ];
    let mut links = Vec::new();
    collect_links(&particles, &params, &mut links);
    let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
    assert_eq!(pairs, vec![(0, 1)]);
    assert!(params.link_alpha(120.0).is_none());
    assert_eq!(params.link_alpha(0.0), Some(params.link_max_alpha));
}

#[test]
fn link_alpha_strictly_decreases_with_distance() {
    let params = FieldParams::default();
    let mut prev = f32::INFINITY;
    for d in (0..120).map(|d| d as f32) {
        let alpha = params.link_alpha(d).expect("within threshold");
        assert!(alpha < prev, "alpha at {} not below previous", d);
        assert!(alpha > 0.0);
        prev = alpha;
    }
}

#[test]
fn pointer_pulls_nearby_points_and_ignores_far_ones() {
    let params = FieldParams::default();
    let pointer = Vec2::new(100.0, 100.0);

    let mut near = still_particle(50.0, 100.0);
    assert!(near.attract(pointer, &params));
    assert!(near.velocity.x > 0.0);
    assert_eq!(near.velocity.y, 0.0);
    // force = (150 - 50) / 150
    let force = 100.0 / 150.0;
    assert!((near.velocity.x - force * params.pointer_impulse).abs() < 1e-6);
    assert!((near.opacity - (0.5 + force * params.pointer_opacity_gain)).abs() < 1e-6);

    let mut far = still_particle(300.0, 100.0);
    assert!(!far.attract(pointer, &params));
    assert_eq!(far.velocity, Vec2::ZERO);
    assert_eq!(far.opacity, 0.5);
}

#[test]
fn attraction_never_exceeds_speed_cap_or_opacity_ceiling() {
    let params = FieldParams::default();
    let mut p = still_particle(99.0, 100.0);
    p.velocity = Vec2::new(1.99, 0.0);
    p.opacity = 0.99;
    for _ in 0..100 {
        p.attract(Vec2::new(100.0, 100.0), &params);
    }
    assert!(p.velocity.length() <= params.max_speed + 1e-5);
    assert_eq!(p.opacity, params.opacity_ceiling);
}

#[test]
fn no_pointer_means_no_attraction() {
    let particles = vec![still_particle(10.0, 10.0)];
    let mut field = ParticleField::from_particles(
        FieldParams::default(),
        100.0,
        100.0,
        particles,
        StdRng::seed_from_u64(1),
    );
    field.apply_pointer(None);
    assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn step_draws_links_before_points_with_glow() {
    let particles = vec![still_particle(10.0, 10.0), still_particle(20.0, 10.0)];
    let mut field = ParticleField::from_particles(
        FieldParams::default(),
        100.0,
        100.0,
        particles,
        StdRng::seed_from_u64(1),
    );
    let mut surface = Recorder::default();
    field.step(&mut surface, None, 0.0).expect("recorder never fails");

    assert_eq!(surface.calls.len(), 4);
    assert_eq!(surface.calls[0], Call::Clear);
    assert!(matches!(surface.calls[1], Call::Link { .. }));
    match surface.calls[2] {
        Call::Diamond { center, radius, glow } => {
            assert_eq!(center, Vec2::new(10.0, 10.0));
            assert_eq!(radius, 2.0);
            assert_eq!(glow, 4.0);
        }
        ref other => panic!("expected a diamond, got {:?}", other),
    }
}

#[test]
fn draw_errors_are_reported_but_the_frame_completes() {
    let mut a = still_particle(10.0, 10.0);
    a.velocity = Vec2::new(1.0, 0.0);
    let particles = vec![a, still_particle(20.0, 10.0)];
    let mut field = ParticleField::from_particles(
        FieldParams::default(),
        100.0,
        100.0,
        particles,
        StdRng::seed_from_u64(1),
    );
    let mut surface = Recorder {
        fail_links: true,
        fail_diamonds: true,
        ..Default::default()
    };
    let err = field.step(&mut surface, None, 0.0).unwrap_err();
    assert_eq!(err, SurfaceError("link".into()));
    // both points were still drawn and advanced
    let diamonds = surface
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Diamond { .. }))
        .count();
    assert_eq!(diamonds, 2);
    assert_eq!(field.particles()[0].position.x, 11.0);
}

#[test]
fn pulse_keeps_drawn_radius_near_base_and_positive() {
    let mut p = still_particle(0.0, 0.0);
    p.radius = 0.05;
    p.pulse_speed = 0.02;
    for t in 0..500 {
        let r = p.draw_radius(t as f64 * 16.0);
        assert!(r >= 0.1);
    }
    p.radius = 2.0;
    for t in 0..500 {
        let r = p.draw_radius(t as f64 * 16.0);
        assert!((r - 2.0).abs() <= 0.1 + 1e-6);
    }
}
