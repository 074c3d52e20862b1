use super::cfg::EARTH_RADIUS_M;
use super::*;
use crate::error::MirrorError;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn p(lon: f64, lat: f64) -> Point {
    Point::new(lon, lat)
}

fn square(half: f64) -> Ring {
    Ring::new(vec![
        p(-half, -half),
        p(half, -half),
        p(half, half),
        p(-half, half),
        p(-half, -half),
    ])
    .unwrap()
}

#[test]
fn distance_one_degree_on_equator() {
    let d = distance(p(0.0, 0.0), p(1.0, 0.0));
    let expected = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
    assert!((d - expected).abs() < 1e-6, "d={d} expected={expected}");
    // Same along a meridian.
    let d_lat = distance(p(13.0, 45.0), p(13.0, 46.0));
    assert!((d_lat - expected).abs() < 1e-6);
}

#[test]
fn distance_across_antimeridian_is_short() {
    let d = distance(p(179.5, 0.0), p(-179.5, 0.0));
    let expected = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
    assert!((d - expected).abs() < 1e-6);
}

#[test]
fn distance_symmetric_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let a = p(rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..=90.0));
        let b = p(rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..=90.0));
        assert_eq!(distance(a, b), distance(b, a));
    }
}

#[test]
fn bearing_cardinal_directions() {
    let o = p(0.0, 0.0);
    assert!(bearing(o, p(0.0, 1.0)).abs() < 1e-12);
    assert!((bearing(o, p(1.0, 0.0)) - 90.0).abs() < 1e-12);
    assert!((bearing(o, p(0.0, -1.0)) - 180.0).abs() < 1e-12);
    assert!((bearing(o, p(-1.0, 0.0)) - 270.0).abs() < 1e-12);
}

#[test]
fn bearing_coincident_points_is_zero() {
    let a = p(12.5, -41.25);
    assert_eq!(bearing(a, a), 0.0);
    assert_eq!(VertexOffset::between(a, a).bearing_deg, 0.0);
    assert_eq!(VertexOffset::between(a, a).distance_m, 0.0);
}

#[test]
fn destination_wraps_antimeridian() {
    let q = destination(p(179.9, 0.0), 50_000.0, 90.0);
    assert!(q.lon >= -180.0 && q.lon < 180.0);
    assert!(q.lon < -179.0, "expected wrap, got {q:?}");
    assert!(q.lat.abs() < 1e-9);
    let back = destination(p(-179.9, 10.0), 50_000.0, 270.0);
    assert!(back.lon > 179.0);
}

#[test]
fn destination_zero_distance_is_origin() {
    let o = p(-74.006, 40.7128);
    let q = destination(o, 0.0, 123.0);
    assert!(distance(o, q) < 1e-6);
}

#[test]
fn destination_reaches_pole() {
    let q = destination(p(30.0, 80.0), EARTH_RADIUS_M * 10f64.to_radians(), 0.0);
    assert!((q.lat - 90.0).abs() < 1e-9);
}

#[test]
fn round_trip_random_pairs() {
    let mut rng = StdRng::seed_from_u64(2025);
    let mut checked = 0;
    while checked < 1000 {
        let a = p(rng.gen_range(-180.0..180.0), rng.gen_range(-85.0..85.0));
        let b = p(rng.gen_range(-180.0..180.0), rng.gen_range(-85.0..85.0));
        let d = distance(a, b);
        // skip near-antipodal pairs where the bearing is undefined
        if d > 19_000_000.0 {
            continue;
        }
        let q = destination(a, d, bearing(a, b));
        let err = distance(q, b);
        assert!(err < 0.01, "a={a:?} b={b:?} err={err}");
        checked += 1;
    }
}

#[test]
fn round_trip_city_scale() {
    let a = p(-122.4194, 37.7749);
    let b = p(-122.4094, 37.7849);
    let off = VertexOffset::between(a, b);
    assert!(distance(off.apply(a), b) < 1e-3);
}

#[test]
fn centroid_excludes_closing_vertex() {
    let ring = Ring::new(vec![
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(2.0, 2.0),
        p(0.0, 2.0),
        p(0.0, 0.0),
    ])
    .unwrap();
    let c = centroid(&ring).unwrap();
    assert_eq!(c, p(1.0, 1.0));
}

#[test]
fn centroid_straddling_antimeridian_stays_inside() {
    let ring = Ring::close(vec![
        p(179.991, -0.004),
        p(-179.999, -0.004),
        p(-179.999, 0.004),
        p(179.991, 0.004),
    ])
    .unwrap();
    let c = centroid(&ring).unwrap();
    assert!((c.lon - 179.996).abs() < 1e-9, "{c:?}");
    assert!(c.lat.abs() < 1e-12);

    // Anchor on the other side of the line gives the same pivot.
    let flipped = Ring::close(vec![
        p(-179.999, 0.004),
        p(179.991, 0.004),
        p(179.991, -0.004),
        p(-179.999, -0.004),
    ])
    .unwrap();
    let c2 = centroid(&flipped).unwrap();
    assert!(distance(c, c2) < 1e-6, "{c:?} vs {c2:?}");
}

#[test]
fn centroid_near_pole() {
    let ring = Ring::close(vec![
        p(10.0, 85.0),
        p(10.1, 85.0),
        p(10.1, 85.01),
        p(10.0, 85.01),
    ])
    .unwrap();
    let c = centroid(&ring).unwrap();
    assert!((c.lon - 10.05).abs() < 1e-9 && (c.lat - 85.005).abs() < 1e-9);
}

#[test]
fn centroid_rejects_degenerate_ring() {
    let ring = Ring::new(vec![p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(0.0, 0.0)]).unwrap();
    assert_eq!(ring.distinct_vertex_count(), 2);
    let err = centroid(&ring).unwrap_err();
    assert_eq!(err, MirrorError::DegenerateInput { distinct: 2 });
    assert!(err.is_degenerate());

    let single = Ring::new(vec![p(3.0, 3.0); 4]).unwrap();
    assert!(centroid(&single).unwrap_err().is_degenerate());
}

#[test]
fn offsets_cover_every_point() {
    let ring = square(0.01);
    let offs = offsets(&ring, p(0.0, 0.0));
    assert_eq!(offs.len(), ring.len());
    assert_eq!(offs[0], offs[4]);
    for o in &offs {
        assert!((0.0..360.0).contains(&o.bearing_deg));
    }
    assert!((offs[0].bearing_deg - 225.0).abs() < 1e-3);
}

#[test]
fn ring_validation() {
    assert!(matches!(
        Ring::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]),
        Err(MirrorError::InvalidRing { .. })
    ));
    assert!(matches!(
        Ring::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]),
        Err(MirrorError::InvalidRing { .. })
    ));
    assert!(matches!(
        Ring::new(vec![p(0.0, 0.0), p(f64::NAN, 0.0), p(1.0, 1.0), p(0.0, 0.0)]),
        Err(MirrorError::InvalidRing { .. })
    ));
    assert!(matches!(
        Ring::new(vec![p(0.0, 0.0), p(1.0, 91.0), p(1.0, 1.0), p(0.0, 0.0)]),
        Err(MirrorError::InvalidRing { .. })
    ));
    let closed = Ring::close(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]).unwrap();
    assert_eq!(closed.len(), 4);
    assert_eq!(closed.vertices().len(), 3);
    assert_eq!(closed.points()[0], closed.points()[3]);
}

#[test]
fn ring_wraps_longitudes() {
    let ring = Ring::new(vec![
        p(190.0, 0.0),
        p(-169.0, 0.0),
        p(-169.0, 1.0),
        p(-170.0, 0.0),
    ])
    .unwrap();
    assert_eq!(ring.points()[0], p(-170.0, 0.0));
    assert!(ring.points().iter().all(|q| (-180.0..180.0).contains(&q.lon)));
}

#[test]
fn ring_serde_validates_closure() {
    let ring = square(1.0);
    let json = serde_json::to_string(&ring).unwrap();
    let back: Ring = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ring);
    let open = r#"[{"lon":0,"lat":0},{"lon":1,"lat":0},{"lon":1,"lat":1},{"lon":0,"lat":1}]"#;
    assert!(serde_json::from_str::<Ring>(open).is_err());
    let polar = r#"[{"lon":0,"lat":0},{"lon":1,"lat":95},{"lon":1,"lat":1},{"lon":0,"lat":0}]"#;
    assert!(serde_json::from_str::<Ring>(polar).is_err());
}

#[test]
fn point_parsing() {
    assert_eq!("10.5, -3".parse::<Point>().unwrap(), p(10.5, -3.0));
    assert_eq!("190,0".parse::<Point>().unwrap(), p(-170.0, 0.0));
    assert!("abc".parse::<Point>().is_err());
    assert!("1;2".parse::<Point>().is_err());
    assert!("0,95".parse::<Point>().is_err());
    assert!("inf,0".parse::<Point>().is_err());
}

#[test]
fn normalization_helpers() {
    assert_eq!(normalize_lon(180.0), -180.0);
    assert_eq!(normalize_lon(-180.0), -180.0);
    assert_eq!(normalize_lon(540.0), -180.0);
    assert_eq!(normalize_lon(-181.0), 179.0);
    let tiny = normalize_lon(-1e-20);
    assert!((-180.0..180.0).contains(&tiny));

    assert_eq!(normalize_bearing(-1e-20), 0.0);
    assert_eq!(normalize_bearing(-90.0), 270.0);
    assert_eq!(normalize_bearing(360.0), 0.0);

    assert_eq!(canonical_angle(180.0), 180.0);
    assert_eq!(canonical_angle(-180.0), -180.0);
    assert_eq!(canonical_angle(270.0), -90.0);
    assert_eq!(canonical_angle(-270.0), 90.0);
}

proptest! {
    #[test]
    fn bearing_stays_in_range(
        lon1 in -180.0f64..180.0, lat1 in -90.0f64..=90.0,
        lon2 in -180.0f64..180.0, lat2 in -90.0f64..=90.0,
    ) {
        let b = bearing(p(lon1, lat1), p(lon2, lat2));
        prop_assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn destination_stays_in_range(
        lon in -180.0f64..180.0, lat in -89.0f64..89.0,
        d in 0.0f64..2.0e7, brg in 0.0f64..360.0,
    ) {
        let q = destination(p(lon, lat), d, brg);
        prop_assert!(q.lon >= -180.0 && q.lon < 180.0);
        prop_assert!(q.lat >= -90.0 && q.lat <= 90.0);
    }
}
