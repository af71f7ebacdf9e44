use approx::assert_relative_eq;
use geovec::{triangles_ray_intersect, Point3d, Point3f, Triangle, VectorTriangles};
use nalgebra::Vector3;

fn quad_mesh(z: f32) -> VectorTriangles {
    let mut mesh = VectorTriangles::new();
    mesh.pts = vec![
        Point3f::new(0.0, 0.0, z),
        Point3f::new(1.0, 0.0, z),
        Point3f::new(1.0, 1.0, z),
        Point3f::new(0.0, 1.0, z),
    ];
    mesh.tris = vec![Triangle { pts: [0, 1, 2] }, Triangle { pts: [0, 2, 3] }];
    mesh
}

#[test]
fn test_ray_along_normal_hits_centroid() {
    let mesh = quad_mesh(0.0);
    // Centroid of the first triangle, approached along its outward normal.
    let centroid = Point3d::new(2.0 / 3.0, 1.0 / 3.0, 0.0);
    let org = Point3d::new(centroid.x, centroid.y, 4.0);
    let dir = Vector3::new(0.0, 0.0, -1.0);

    let hit = triangles_ray_intersect(&org, &dir, &mesh).expect("expected a hit");
    assert_relative_eq!(hit.t, 4.0, epsilon = 1e-6);
    assert_relative_eq!(hit.point.x, centroid.x, epsilon = 1e-6);
    assert_relative_eq!(hit.point.y, centroid.y, epsilon = 1e-6);
}

#[test]
fn test_ray_away_from_mesh_misses() {
    let mesh = quad_mesh(0.0);
    let org = Point3d::new(0.5, 0.5, 4.0);
    let dir = Vector3::new(0.0, 0.0, 1.0);
    assert!(triangles_ray_intersect(&org, &dir, &mesh).is_none());
}

#[test]
fn test_nearest_of_stacked_triangles() {
    // Two parallel layers; the ray must report the closer one.
    let mut mesh = quad_mesh(0.0);
    let far = quad_mesh(-3.0);
    let base = mesh.pts.len();
    mesh.pts.extend_from_slice(&far.pts);
    for tri in &far.tris {
        mesh.tris.push(Triangle {
            pts: [tri.pts[0] + base, tri.pts[1] + base, tri.pts[2] + base],
        });
    }

    let org = Point3d::new(0.5, 0.25, 2.0);
    let dir = Vector3::new(0.0, 0.0, -1.0);
    let hit = triangles_ray_intersect(&org, &dir, &mesh).expect("expected a hit");
    assert_relative_eq!(hit.t, 2.0, epsilon = 1e-6);
    assert_relative_eq!(hit.point.z, 0.0, epsilon = 1e-6);
}

#[test]
fn test_empty_and_malformed_meshes_never_fault() {
    let empty = VectorTriangles::new();
    let org = Point3d::new(0.0, 0.0, 1.0);
    let dir = Vector3::new(0.0, 0.0, -1.0);
    assert!(triangles_ray_intersect(&org, &dir, &empty).is_none());

    let mut broken = quad_mesh(0.0);
    broken.tris.push(Triangle { pts: [0, 1, 99] });
    // The malformed triangle is skipped; the valid ones still hit.
    assert!(triangles_ray_intersect(&org, &dir, &broken).is_some());
}
