use celestial_core::constants::SHAPE_JITTER;
use celestial_core::shape::{HeartSurface, ShapeKind, Surface, TreeSurface};
use celestial_core::stars::StarField;
use celestial_core::targets::{generate_scatter_targets, generate_shape_targets};
use celestial_core::{ParticleSet, SceneConfig};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn within_box(p: Vec3, centre: Vec3, half: Vec3) -> bool {
    let d = (p - centre).abs();
    let slack = Vec3::splat(SHAPE_JITTER * 0.5 + 1e-4);
    d.cmple(half + slack).all()
}

#[test]
fn shape_targets_stay_inside_the_surface_bounds() {
    for shape in [
        ShapeKind::Heart { scale: 2.4 },
        ShapeKind::Tree {
            height: 24.0,
            radius: 8.0,
        },
    ] {
        let surface = shape.surface();
        let mut rng = StdRng::seed_from_u64(11);
        let targets = generate_shape_targets(surface.as_ref(), 5_000, &mut rng);
        assert_eq!(targets.len(), 5_000);
        for p in &targets {
            assert!(p.is_finite());
            assert!(
                within_box(*p, surface.centroid(), surface.half_extents()),
                "{shape:?} produced {p:?}"
            );
            assert!((*p - surface.centroid()).length() <= surface.bound() + SHAPE_JITTER);
        }
    }
}

#[test]
fn scatter_targets_fill_the_requested_shell() {
    let mut rng = StdRng::seed_from_u64(12);
    let targets = generate_scatter_targets(5_000, 14.0, (0.4, 1.0), &mut rng);
    for p in &targets {
        let r = p.length();
        assert!(p.is_finite());
        assert!((5.6 - 1e-3..=14.0 + 1e-3).contains(&r), "radius {r}");
    }
    // Directions are spread over the whole sphere.
    let mean = targets.iter().copied().sum::<Vec3>() / targets.len() as f32;
    assert!(mean.length() < 1.0);
}

#[test]
fn generation_is_deterministic_per_seed() {
    let config = SceneConfig::heart();
    let mut small = config.clone();
    small.particle_count = 500;
    let a = ParticleSet::generate(&small, &mut StdRng::seed_from_u64(small.seed));
    let b = ParticleSet::generate(&small, &mut StdRng::seed_from_u64(small.seed));
    assert_eq!(a.converged(), b.converged());
    assert_eq!(a.dispersed(), b.dispersed());
    let c = ParticleSet::generate(&small, &mut StdRng::seed_from_u64(small.seed + 1));
    assert_ne!(a.converged(), c.converged());
}

#[test]
fn attributes_are_unit_range() {
    let mut config = SceneConfig::christmas();
    config.particle_count = 1_000;
    let set = ParticleSet::generate(&config, &mut StdRng::seed_from_u64(5));
    assert_eq!(set.attributes().len(), set.len());
    for a in set.attributes() {
        assert!((0.0..1.0).contains(&a.random));
        assert!(a.phase.is_finite());
    }
}

#[test]
fn star_shell_and_spin() {
    let config = SceneConfig::heart().stars;
    let field = StarField::generate(&config, &mut StdRng::seed_from_u64(9));
    assert_eq!(field.positions().len(), config.count);
    for p in field.positions() {
        let r = p.length();
        assert!(r >= config.inner_radius - 1e-2 && r <= config.outer_radius + 1e-2);
    }
    let quarter = std::f32::consts::FRAC_PI_2 / config.spin_rate;
    let turned = field.transform_at(quarter).transform_point3(Vec3::Z);
    assert!((turned - Vec3::X).length() < 1e-3);
}

#[test]
fn heart_curve_hits_its_notch_and_tip() {
    let heart = HeartSurface { scale: 1.0 };
    // t = 0: top notch at y = 5 units of 0.06, lifted by 0.5.
    let notch = heart.point(0.0, 0.5);
    assert!(notch.x.abs() < 1e-5);
    assert!((notch.y - (5.0 * 0.06 + 0.5)).abs() < 1e-5);
    // t = pi: bottom tip at y = -17 units.
    let tip = heart.point(0.5, 0.5);
    assert!((tip.y - (-17.0 * 0.06 + 0.5)).abs() < 1e-4);
}

#[test]
fn tree_base_is_wider_than_top() {
    let tree = TreeSurface {
        height: 24.0,
        radius: 8.0,
    };
    let base = tree.point(0.0, 0.0);
    let top = tree.point(0.999, 0.0);
    assert!((base.y + 12.0).abs() < 1e-4);
    assert!(top.y > 11.0);
    let radial = |p: Vec3| Vec2::new(p.x, p.z).length();
    assert!(radial(base) > radial(top));
}

fn small_particles(mut config: SceneConfig, count: usize, seed: u64) -> ParticleSet {
    config.particle_count = count;
    ParticleSet::generate(&config, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn particles_start_assembled_without_intro() {
    let set = small_particles(SceneConfig::heart(), 64, 1);
    assert_eq!(set.len(), 64);
    assert_eq!(set.positions(), set.converged());
}

#[test]
fn particle_step_closes_eight_percent_of_the_gap() {
    let mut set = small_particles(SceneConfig::heart(), 64, 2);
    let before: Vec<f32> = (0..set.len())
        .map(|i| (set.blended_target(i, 1.0) - set.positions()[i]).length())
        .collect();
    set.step(1.0, 0.08);
    for (i, gap) in before.iter().enumerate() {
        let after = (set.blended_target(i, 1.0) - set.positions()[i]).length();
        assert!((after - gap * 0.92).abs() < 1e-3, "particle {i}");
    }
}

#[test]
fn intro_starts_off_screen_and_lands_on_target() {
    let mut set = small_particles(SceneConfig::christmas(), 32, 3);
    assert!(set.positions().iter().all(|p| p.x.abs() >= 30.0));
    set.place_intro(10.0, 0.0);
    for i in 0..set.len() {
        assert!((set.positions()[i] - set.converged()[i]).length() < 1e-3);
    }
}
