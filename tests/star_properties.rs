// tests/star_properties.rs

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use star_generator::{Star, StarCommand, StarError};

const EPS: f32 = 1e-3;

fn random_stars(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star::new(rng.gen_range(0..=64), rng.gen_range(0.0..50.0)))
        .collect()
}

fn assert_mirrored(star: &Star) {
    let ring = star.vertex_count();
    let tolerance = EPS * star.outer_radius().max(1.0);
    for i in 1..ring {
        let v = star.vertex(i).unwrap();
        let mirror = star.vertex((ring - i) % ring).unwrap();
        assert!(
            (mirror.y - v.y).abs() < tolerance && (mirror.x + v.x).abs() < tolerance,
            "vertex {i} {v:?} and its mirror {mirror:?} are not symmetric in {star}"
        );
    }
}

#[test]
fn ring_sizes_match_point_count() {
    for star in random_stars(7, 200) {
        assert!(star.point_count() >= 4);
        let expected = 2 * star.point_count() as usize;
        assert_eq!(star.vertices().len(), expected);
        assert_eq!(star.vertices_3d().len(), expected);
    }
}

#[test]
fn rings_are_symmetric_about_y_axis() {
    for star in random_stars(11, 200) {
        assert_mirrored(&star);
    }
}

#[test]
fn symmetry_survives_inner_radius_changes() {
    let mut rng = StdRng::seed_from_u64(3);
    for mut star in random_stars(13, 50) {
        star.set_inner_radius(rng.gen_range(0.0..10.0));
        assert_mirrored(&star);
    }
}

#[test]
fn outer_vertices_sit_on_outer_radius() {
    for star in random_stars(17, 100) {
        for (i, v) in star.vertices().iter().enumerate().step_by(2) {
            assert!(
                (v.length() - star.outer_radius()).abs() < EPS * star.outer_radius().max(1.0),
                "outer vertex {i} at {v:?} is off the radius {}",
                star.outer_radius()
            );
        }
    }
}

#[test]
fn three_d_ring_tracks_two_d_ring() {
    let mut rng = StdRng::seed_from_u64(19);
    for mut star in random_stars(23, 50) {
        star.set_inner_radius(rng.gen_range(0.0..5.0));
        star.set_point_count(rng.gen_range(4..40));
        for (p2, p3) in star.vertices().iter().zip(star.vertices_3d()) {
            assert_eq!(p3.truncate(), *p2);
            assert_eq!(p3.z, 0.0);
        }
    }
}

#[test]
fn setting_outer_radius_twice_is_idempotent() {
    let mut once = Star::new(7, 3.0);
    once.set_outer_radius(8.5);
    let mut twice = once.clone();
    twice.set_outer_radius(8.5);
    assert_eq!(once, twice);
}

#[test]
fn negative_outer_radius_leaves_star_untouched() {
    let mut star = Star::new(9, 4.0);
    star.set_inner_radius(1.5);
    let before = star.clone();
    star.set_outer_radius(-1.0);
    assert_eq!(star.outer_radius(), before.outer_radius());
    assert_eq!(star.vertices(), before.vertices());
    assert_eq!(star.vertices_3d(), before.vertices_3d());
}

#[test]
fn inner_override_then_outer_change_rederives() {
    let mut star = Star::new(5, 10.0);
    let outer: Vec<Vec2> = star.vertices().iter().step_by(2).copied().collect();

    star.apply(StarCommand::SetInnerRadius(3.0));
    star.apply(StarCommand::SetInnerRadius(5.0));
    for (i, v) in star.vertices().iter().enumerate() {
        if i % 2 == 1 {
            assert!((v.length() - 5.0).abs() < EPS);
        } else {
            assert_eq!(*v, outer[i / 2]);
        }
    }

    star.apply(StarCommand::SetOuterRadius(12.0));
    let inner = star.inner_radius();
    assert!((inner - 3.0).abs() > EPS && (inner - 5.0).abs() > EPS);
    assert!((star.vertex(1).unwrap().length() - inner).abs() < EPS);
}

#[test]
fn four_points_is_the_special_case() {
    let star = Star::new(4, 10.0);
    assert_eq!(star.inner_radius(), 2.0);
    for i in [1, 3, 5, 7] {
        let v = star.vertex(i).unwrap();
        assert_eq!(v.x.abs(), 1.0);
        assert_eq!(v.y.abs(), 1.0);
    }
}

#[test]
fn default_star_top_vertex() {
    let star = Star::default();
    assert_eq!(star.point_count(), 5);
    assert_eq!(star.vertex(0).unwrap(), Vec2::new(0.0, 1.0));
}

#[test]
fn selection_out_of_ring_is_none() {
    let mut star = Star::default();
    star.set_selected_index(1000);
    assert_eq!(star.selected_index(), None);
    star.apply(StarCommand::Select(1000));
    assert_eq!(star.selected_index(), None);
}

#[test]
fn vertex_lookup_past_ring_fails() {
    let star = Star::new(6, 1.0);
    assert_eq!(
        star.vertex(12).unwrap_err(),
        StarError::VertexOutOfRange { index: 12, len: 12 }
    );
}

#[test]
fn rounding_twice_matches_rounding_once() {
    for mut star in random_stars(29, 50) {
        star.round_to_integer();
        let once = star.clone();
        star.round_to_integer();
        assert_eq!(star, once);
    }
}
