use geovec::check::check_shape;
use geovec::{
    calc_center_of_mass, calc_loop_area, calc_loop_centroid, AttrDict, GeoCoord, GeoMbr, Point2d,
    ShapeRef, ShapeSet, VectorAreal, VectorLinear, VectorPoints, VectorShape,
};

fn ring(coords: &[(f32, f32)]) -> Vec<GeoCoord> {
    coords.iter().map(|&(x, y)| GeoCoord::new(x, y)).collect()
}

#[test]
fn test_areal_with_hole_end_to_end() {
    // A producer builds a square with a hole, initializes the box, then a
    // consumer queries containment through the shape enum.
    let mut areal = VectorAreal::new();
    areal
        .loops
        .push(ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]));
    areal
        .loops
        .push(ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]));
    areal.set_attr_dict(AttrDict::new("country boundary".to_string()));
    areal.init_geo_mbr();

    let shape = VectorShape::from(areal);
    assert!(check_shape(&shape).is_ok());

    let areal = shape.as_areal().unwrap();
    assert!(!areal.point_inside(GeoCoord::new(5.0, 5.0)));
    assert!(areal.point_inside(GeoCoord::new(1.0, 1.0)));
    assert!(!areal.point_inside(GeoCoord::new(15.0, 15.0)));
}

#[test]
fn test_shape_set_identity_semantics() {
    let mut a = VectorPoints::new();
    a.pts.push(GeoCoord::new(0.25, 0.25));
    let mut b = VectorPoints::new();
    b.pts.push(GeoCoord::new(0.25, 0.25));

    let handle = ShapeRef::new(a);
    let mut set = ShapeSet::new();
    set.insert(handle.clone());
    set.insert(handle.clone());
    assert_eq!(set.len(), 1, "same handle twice must collapse");

    set.insert(ShapeRef::new(b));
    assert_eq!(set.len(), 2, "identical geometry, distinct identity");
}

#[test]
fn test_antimeridian_shape_mbr() {
    // A short linear crossing the dateline: its box must hug the crossing.
    let mut linear = VectorLinear::new();
    linear.pts.push(GeoCoord::new(179.0f32.to_radians(), 0.1));
    linear.pts.push(GeoCoord::new(-179.0f32.to_radians(), 0.2));
    linear.init_geo_mbr();

    let mbr = linear.geo_mbr;
    assert!(mbr.crosses_antimeridian());
    assert!(mbr.span().x < 3.0f64.to_radians());
    assert!(mbr.contains(GeoCoord::new(std::f32::consts::PI, 0.15)));
    assert!(!mbr.contains(GeoCoord::new(0.0, 0.15)));
}

#[test]
fn test_centroid_inside_mbr_for_assorted_rings() {
    let rings = [
        ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        ring(&[(0.1, 0.1), (0.9, 0.3), (0.7, 1.1), (-0.2, 0.8)]),
        ring(&[(-1.0, -1.0), (0.5, -0.8), (1.2, 0.4), (0.0, 1.5), (-1.3, 0.2)]),
    ];
    for r in &rings {
        assert!(calc_loop_area(r) > 0.0);
        let centroid = calc_loop_centroid(r).expect("positive area");
        let mut mbr = GeoMbr::new();
        mbr.add_geo_coords(r);
        assert!(mbr.contains(centroid), "centroid {centroid:?} escaped its box");
    }
}

#[test]
fn test_center_of_mass_fallback() {
    // Zero-area sliver: centroid is undefined, center of mass is not.
    let sliver = vec![
        Point2d::new(0.0, 0.0),
        Point2d::new(2.0, 2.0),
        Point2d::new(4.0, 4.0),
    ];
    assert_eq!(calc_loop_area(&sliver), 0.0);
    assert!(calc_loop_centroid(&sliver).is_none());
    let com = calc_center_of_mass(&sliver).unwrap();
    assert_eq!(com, Point2d::new(2.0, 2.0));
}

#[test]
fn test_shared_attr_dict_across_shapes() {
    // One attribute store feeding several features, the usual grouping a
    // format parser produces.
    let dict = AttrDict::new(vec![("layer".to_string(), "roads".to_string())]);
    let mut set = ShapeSet::new();
    for ii in 0..3 {
        let mut linear = VectorLinear::new();
        linear.pts.push(GeoCoord::new(0.0, 0.0));
        linear.pts.push(GeoCoord::new(0.1 * (ii + 1) as f32, 0.1));
        linear.set_attr_dict(dict.clone());
        linear.init_geo_mbr();
        set.insert(ShapeRef::new(linear));
    }
    assert_eq!(set.len(), 3);
    for shape in &set {
        assert!(shape.attr_dict().unwrap().ptr_eq(&dict));
    }
}
