use glam::Vec3;
use crate::error::Error;
use crate::render::{DrawCommand, RecordingCommandList};
use super::*;

fn unit_cube() -> Cube {
    Cube::new(Vec3::ZERO, Vec3::ONE).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_accepts_zero_extent() {
    let flat = Cube::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)).unwrap();
    assert_eq!(flat.volume(), 0.0);
}

#[test]
fn test_new_rejects_negative_extent() {
    let result = Cube::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0));
    assert!(matches!(result, Err(Error::InvalidGeometry(_))));
}

#[test]
fn test_new_rejects_non_finite() {
    assert!(matches!(
        Cube::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE),
        Err(Error::InvalidGeometry(_))
    ));
    assert!(matches!(
        Cube::new(Vec3::ZERO, Vec3::splat(f32::INFINITY)),
        Err(Error::InvalidGeometry(_))
    ));
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_vertices_are_absolute() {
    let cube = Cube::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0)).unwrap();
    let v = cube.vertices();

    assert_eq!(v[0], Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(v[1], Vec3::new(1.0, 2.0, 9.0));
    assert_eq!(v[2], Vec3::new(1.0, 6.0, 3.0));
    assert_eq!(v[4], Vec3::new(3.0, 2.0, 3.0));
    assert_eq!(v[7], Vec3::new(3.0, 6.0, 9.0));
}

#[test]
fn test_edges_differ_in_one_coordinate() {
    let cube = unit_cube();
    for &(a, b) in cube.edges() {
        let delta = (cube.vertices()[a] - cube.vertices()[b]).abs();
        let changed = [delta.x, delta.y, delta.z].iter().filter(|&&d| d > 0.0).count();
        assert_eq!(changed, 1, "edge ({}, {}) should change one axis", a, b);
        // Index bit pattern differs in one bit as well
        assert_eq!((a ^ b).count_ones(), 1);
    }
}

#[test]
fn test_accessors() {
    let cube = Cube::new(Vec3::splat(-1.0), Vec3::splat(2.0)).unwrap();
    assert_eq!(cube.position(), Vec3::splat(-1.0));
    assert_eq!(cube.max(), Vec3::ONE);
    assert_eq!(cube.center(), Vec3::ZERO);
    assert_eq!(cube.volume(), 8.0);
}

#[test]
fn test_contains_point_half_open() {
    let cube = unit_cube();
    assert!(cube.contains_point(Vec3::ZERO));
    assert!(cube.contains_point(Vec3::splat(0.5)));
    assert!(!cube.contains_point(Vec3::ONE));
    assert!(!cube.contains_point(Vec3::new(0.5, 0.5, 1.0)));
    assert!(!cube.contains_point(Vec3::new(-0.1, 0.5, 0.5)));
}

#[test]
fn test_intersection_volume() {
    let a = unit_cube();
    let b = Cube::new(Vec3::splat(0.5), Vec3::ONE).unwrap();
    let touching = Cube::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE).unwrap();

    assert!((a.intersection_volume(&b) - 0.125).abs() < 1e-6);
    assert_eq!(a.intersection_volume(&touching), 0.0);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_draw_issues_one_line_per_edge() {
    let cube = unit_cube();
    let mut cmd = RecordingCommandList::new();

    cube.draw(&mut cmd).unwrap();

    assert_eq!(cmd.line_count(), 12);
    assert_eq!(cmd.point_count(), 0);
    for (command, &(a, b)) in cmd.commands().iter().zip(CUBE_EDGES.iter()) {
        assert_eq!(
            *command,
            DrawCommand::Line { from: cube.vertices()[a], to: cube.vertices()[b] }
        );
    }
}

#[test]
fn test_update_is_noop() {
    let mut cube = unit_cube();
    let before = cube.clone();
    cube.update(0.016);
    assert_eq!(cube, before);
}
