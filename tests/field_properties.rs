// Host-side checks of the wave field invariants.

use auth_background::core::constants::*;
use auth_background::core::{ParticleField, Viewport, Wave};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn field(width: f32, height: f32, seed: u64) -> (ParticleField, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let f = ParticleField::initialize(Viewport::new(width, height), &mut rng);
    (f, rng)
}

#[test]
fn initialize_800x600_spawns_nine() {
    let (f, _) = field(800.0, 600.0, 1);
    assert_eq!(f.len(), 9);
    assert_eq!(f.viewport(), Viewport::new(800.0, 600.0));
}

#[test]
fn resize_replaces_every_wave() {
    let (mut f, mut rng) = field(800.0, 600.0, 2);
    let before: Vec<u64> = f.waves().iter().map(Wave::id).collect();

    f.resize(Viewport::new(400.0, 300.0), &mut rng);

    assert_eq!(f.len(), 2);
    for w in f.waves() {
        assert!(!before.contains(&w.id()), "wave {} survived resize", w.id());
    }
}

#[test]
fn resize_to_same_size_still_respawns() {
    let (mut f, mut rng) = field(800.0, 600.0, 3);
    let before: Vec<u64> = f.waves().iter().map(Wave::id).collect();
    f.resize(Viewport::new(800.0, 600.0), &mut rng);
    assert_eq!(f.len(), before.len());
    assert!(f.waves().iter().all(|w| !before.contains(&w.id())));
}

#[test]
fn state_stays_bounded_under_random_pointer() {
    let (mut f, mut rng) = field(800.0, 600.0, 4);
    let bounds = f.bounds();
    for _ in 0..3000 {
        let pointer = Vec2::new(rng.gen_range(-300.0..1100.0), rng.gen_range(-300.0..900.0));
        for w in f.waves_mut() {
            w.update(pointer, &bounds);
            assert!((OPACITY_MIN..=OPACITY_MAX).contains(&w.opacity), "opacity {}", w.opacity);
            assert!((RADIUS_MIN..=RADIUS_MAX).contains(&w.radius), "radius {}", w.radius);
            assert!(w.position.x >= -100.0 && w.position.x <= 900.0);
            assert!(w.position.y >= -100.0 && w.position.y <= 700.0);
        }
    }
}

#[test]
fn far_pointer_decays_to_floors_then_holds() {
    let (mut f, _) = field(800.0, 600.0, 5);
    let bounds = f.bounds();
    let far = Vec2::new(1.0e6, 1.0e6);
    for w in f.waves_mut() {
        w.opacity = OPACITY_MAX;
        w.radius = RADIUS_MAX;
    }
    for _ in 0..400 {
        for w in f.waves_mut() {
            let (o, r) = (w.opacity, w.radius);
            w.update(far, &bounds);
            if o > OPACITY_MIN {
                assert!(w.opacity < o);
            } else {
                assert_eq!(w.opacity, OPACITY_MIN);
            }
            if r > RADIUS_MIN {
                assert!(w.radius < r);
            } else {
                assert_eq!(w.radius, RADIUS_MIN);
            }
        }
    }
    for w in f.waves() {
        assert_eq!(w.opacity, OPACITY_MIN);
        assert_eq!(w.radius, RADIUS_MIN);
    }
}

/// Drift the next `update` applies before the pointer term.
fn drift_of(w: &Wave) -> Vec2 {
    let angle = w.angle + w.speed * w.direction;
    Vec2::new(angle.cos() * DRIFT_X, angle.sin() * DRIFT_Y)
}

#[test]
fn pointer_term_points_away_across_whole_reach() {
    // drift is applied first and may outweigh a weak push near the edge of
    // the reach, so only the pointer term is checked here
    let mut rng = StdRng::seed_from_u64(6);
    let bounds = Viewport::new(800.0, 600.0).bounds();
    let distances = [1.0, 5.0, 25.0, 75.0, 120.0, 160.0, 190.0, 199.0, 199.9];
    let mut id = 0;
    for d in distances {
        for step in 0..64 {
            let theta = step as f32 * std::f32::consts::TAU / 64.0;
            let mut w = Wave::spawn(id, Vec2::new(400.0, 300.0), &mut rng);
            id += 1;
            let pointer = w.position + Vec2::new(theta.cos(), theta.sin()) * d;
            let drifted = w.position + drift_of(&w);

            w.update(pointer, &bounds);

            let push = w.position - drifted;
            let away = drifted - pointer;
            assert!(
                push.dot(away) >= -1e-3,
                "d={d} step={step}: push {push:?} points toward pointer"
            );
            let force = ((POINTER_REACH - away.length()) / POINTER_REACH).max(0.0);
            assert!(
                (push.length() - force * PUSH_FACTOR).abs() < 1e-3,
                "d={d} step={step}: push {} expected {}",
                push.length(),
                force * PUSH_FACTOR
            );
        }
    }
}

#[test]
fn close_pointer_outweighs_drift() {
    // within 150px the push (>= 2.5px) beats the largest drift (~0.58px)
    let mut rng = StdRng::seed_from_u64(10);
    let bounds = Viewport::new(800.0, 600.0).bounds();
    for step in 0..64 {
        let theta = step as f32 * std::f32::consts::TAU / 64.0;
        let mut w = Wave::spawn(step, Vec2::new(400.0, 300.0), &mut rng);
        let pointer = w.position + Vec2::new(theta.cos(), theta.sin()) * 150.0;
        let before = w.position;

        w.update(pointer, &bounds);

        let moved = w.position - before;
        assert!(moved.dot(before - pointer) >= 0.0, "moved toward pointer at step {step}");
    }
}

#[test]
fn near_pointer_brightens_and_grows() {
    let mut rng = StdRng::seed_from_u64(8);
    let bounds = Viewport::new(800.0, 600.0).bounds();
    let mut w = Wave::spawn(0, Vec2::new(400.0, 300.0), &mut rng);
    w.opacity = OPACITY_MIN;
    w.radius = RADIUS_MIN;
    w.update(w.position + Vec2::new(0.0, 20.0), &bounds);
    assert!(w.opacity > OPACITY_MIN);
    assert!(w.radius > RADIUS_MIN);
}
