use sprung::{cube, CubeConfig, MassSpringSystem, NoOpStepObserver, StepConfig, TracingObserver, Vec3};

const FLOOR: f64 = -1.5;

fn max_displacement(a: &[Vec3<f64>], b: &[Vec3<f64>]) -> f64 {
    a.iter().zip(b).map(|(p, q)| p.distance(*q)).fold(0.0, f64::max)
}

#[test]
fn every_spring_is_mirrored() {
    let body: MassSpringSystem<f64> = cube(&CubeConfig::default()).unwrap();
    for (i, p) in body.particles().iter().enumerate() {
        for s in p.springs() {
            let back = body.particle(s.other).springs().iter().find(|b| b.other == i);
            let back = back.unwrap_or_else(|| panic!("spring {}->{} has no mirror", i, s.other));
            assert_eq!(back.rest_length, s.rest_length);
        }
    }
}

#[test]
fn diagonals_are_hidden_edges_drawn_once() {
    let body: MassSpringSystem<f32> = cube(&CubeConfig::default()).unwrap();
    for p in body.particles() {
        assert!(!p.springs()[3].visible, "diagonal should be hidden");
    }
    for (a, b) in body.visible_segments() {
        let len = a.distance(b);
        assert!((len - 0.5).abs() < 1e-6, "visible segment of length {} is not an edge", len);
    }
}

#[test]
fn dropped_cube_settles_on_the_floor() {
    let mut body: MassSpringSystem<f64> = cube(&CubeConfig::default()).unwrap();
    let config = StepConfig::new();
    let mut observer = TracingObserver::new();

    for _ in 0..1200 {
        body.step(0.01, &config, &mut observer);
    }
    assert!(observer.total_contacts() > 0, "cube should have reached the floor");
    assert_eq!(observer.steps(), 1200);

    let mut previous = body.positions();
    for n in 0..200 {
        body.step(0.01, &config, &mut NoOpStepObserver);
        let current = body.positions();
        assert_eq!(body.first_non_finite(), None);

        // contacts are resolved at the start of a step, so a particle may end
        // a step slightly below the floor but never by much
        for p in &current {
            assert!(p.z >= FLOOR - 0.02, "particle at z = {} sank through the floor", p.z);
        }
        let moved = max_displacement(&previous, &current);
        assert!(moved < 1e-3, "step {}: shape still moving by {}", n, moved);
        previous = current;
    }
}

#[test]
fn kick_moves_the_whole_body() {
    let mut body: MassSpringSystem<f64> = cube(&CubeConfig {
        center: Vec3::new(0.0, 0.0, 1.0),
        ..CubeConfig::default()
    })
    .unwrap();
    let before = body.centroid();
    body.apply_kick(sprung::Impulse::PosX, 1.0);
    let config = StepConfig::new().with_gravity(0.0);
    for _ in 0..10 {
        body.step(0.01, &config, &mut NoOpStepObserver);
    }
    let after = body.centroid();
    assert!(after.x > before.x + 0.1, "centroid x {} -> {}", before.x, after.x);
}
