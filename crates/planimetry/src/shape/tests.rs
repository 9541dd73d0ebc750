use super::*;
use crate::angle::AngleValue;
use crate::error::GeomError;
use crate::kernel::{distance, point, Point};
use crate::types::GeomCfg;
use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn close(p: Point, x: f64, y: f64, eps: f64) -> bool {
    (p.x - x).abs() < eps && (p.y - y).abs() < eps
}

fn right_triangle_points() -> [Point; 3] {
    [point(0.0, 0.0), point(3.0, 0.0), point(0.0, 4.0)]
}

// ---------- Triangle ----------

#[test]
fn triangle_from_points_is_recentered_on_circumcenter() {
    let t = Triangle::new(
        TriangleSpec::Points(right_triangle_points()),
        TriangleOptions::default(),
    )
    .unwrap();
    assert!(close(t.point_a(), -1.5, -2.0, 1e-12));
    assert!(close(t.point_b(), 1.5, -2.0, 1e-12));
    assert!(close(t.point_c(), -1.5, 2.0, 1e-12));
    assert_relative_eq!(t.length_ab(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(t.length_bc(), 5.0, epsilon = 1e-12);
    assert_relative_eq!(t.length_ca(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(t.angle_degrees(TriVertex::A), 90.0, epsilon = 1e-9);
    assert_relative_eq!(t.angle_degrees(TriVertex::B), 53.130102354, epsilon = 1e-6);
    assert_relative_eq!(t.angle_degrees(TriVertex::C), 36.869897646, epsilon = 1e-6);
    assert!(close(t.circumcenter().unwrap(), 0.0, 0.0, 1e-12));
}

#[test]
fn triangle_points_without_shift_keep_coordinates() {
    let opts = TriangleOptions {
        shift_coordinate: false,
        ..TriangleOptions::default()
    };
    let t = Triangle::new(TriangleSpec::Points(right_triangle_points()), opts).unwrap();
    assert_eq!(t.point_b(), point(3.0, 0.0));
    assert!(close(t.circumcenter().unwrap(), 1.5, 2.0, 1e-12));
}

#[test]
fn triangle_keeps_its_tolerances() {
    let cfg = GeomCfg {
        eps_det: 0.5,
        ..GeomCfg::default()
    };
    let opts = TriangleOptions {
        cfg,
        ..TriangleOptions::default()
    };
    let t = Triangle::new(TriangleSpec::Points(right_triangle_points()), opts).unwrap();
    assert_eq!(*t.cfg(), cfg);
    assert!(close(t.circumcenter().unwrap(), 0.0, 0.0, 1e-12));

    // A flat triangle that passes the default tolerance is collinear under the loose one.
    let flat = [point(0.0, 0.0), point(10.0, 0.0), point(5.0, 1.0)];
    assert!(Triangle::new(TriangleSpec::Points(flat), TriangleOptions::default()).is_ok());
    assert!(matches!(
        Triangle::new(TriangleSpec::Points(flat), opts),
        Err(GeomError::DegenerateGeometry { .. })
    ));
}

#[test]
fn triangle_metrics_for_3_4_5() {
    let t = Triangle::new(
        TriangleSpec::Sides {
            ab: 3.0,
            bc: 4.0,
            ca: 5.0,
        },
        TriangleOptions::default(),
    )
    .unwrap();
    assert_relative_eq!(t.angle_degrees(TriVertex::B), 90.0, epsilon = 1e-9);
    assert_relative_eq!(t.area(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(t.perimeter(), 12.0, epsilon = 1e-9);
    assert_relative_eq!(t.semiperimeter(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(t.circumradius().unwrap(), 2.5, epsilon = 1e-9);
    assert_relative_eq!(t.inradius(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(t.sin(TriVertex::B), 1.0, epsilon = 1e-12);
    assert_relative_eq!(t.cos(TriVertex::A), 0.6, epsilon = 1e-9);
    assert_relative_eq!(t.tan(TriVertex::A), 4.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(t.cot(TriVertex::C), 4.0 / 3.0, epsilon = 1e-9);
    // Recentered: the circumcenter is the midpoint of the hypotenuse CA.
    assert!(close(t.circumcenter().unwrap(), 0.0, 0.0, 1e-9));
    assert!(t.signed_area() > 0.0);
}

#[test]
fn triangle_families_right_angle_at_a() {
    let t = Triangle::new(
        TriangleSpec::Points(right_triangle_points()),
        TriangleOptions::all(),
    )
    .unwrap();
    let lens = |f: &dyn Fn(TriVertex) -> f64| TriVertex::ALL.map(f);
    let medians = lens(&|v| t.median_length(v).unwrap());
    assert_relative_eq!(medians[0], 2.5, epsilon = 1e-9);
    assert_relative_eq!(medians[1], 3.605551275, epsilon = 1e-6);
    assert_relative_eq!(medians[2], 4.272001873, epsilon = 1e-6);
    let heights = lens(&|v| t.height_length(v).unwrap());
    assert_relative_eq!(heights[0], 2.4, epsilon = 1e-9);
    assert_relative_eq!(heights[1], 3.0, epsilon = 1e-9);
    assert_relative_eq!(heights[2], 4.0, epsilon = 1e-9);
    let bisectors = lens(&|v| t.bisector_length(v).unwrap());
    assert_relative_eq!(bisectors[0], 2.424366507, epsilon = 1e-6);
    assert_relative_eq!(bisectors[1], 3.354101966, epsilon = 1e-6);
    assert_relative_eq!(bisectors[2], 4.216370214, epsilon = 1e-6);
    assert_relative_eq!(t.midline_length(TriSide::AB).unwrap(), 1.5, epsilon = 1e-9);
    assert_relative_eq!(t.midline_length(TriSide::BC).unwrap(), 2.5, epsilon = 1e-9);
    assert_relative_eq!(t.midline_length(TriSide::CA).unwrap(), 2.0, epsilon = 1e-9);

    // 3 face + 3×3 feet + 3 midpoints, every auxiliary point wired in.
    let m = t.connection_matrix();
    assert_eq!(m.len(), 15);
    assert_eq!(t.shape().points().len(), 15);
    assert_eq!(m.edges().len(), 3 + 9 + 3);
    assert!(m.is_connected(3, 0));
}

#[test]
fn triangle_two_sides_and_included_angle() {
    let t = Triangle::new(
        TriangleSpec::SidesAndAngle {
            ab: Some(3.0),
            bc: Some(4.0),
            ca: None,
            angle: AngleValue::Degrees(90.0),
        },
        TriangleOptions::all(),
    )
    .unwrap();
    assert_relative_eq!(t.length_ca(), 5.0, epsilon = 1e-9);
    assert_relative_eq!(t.angle_degrees(TriVertex::B), 90.0, epsilon = 1e-9);
    assert_relative_eq!(t.angle_degrees(TriVertex::A), 53.130102354, epsilon = 1e-6);
    assert_relative_eq!(t.median_length(TriVertex::A).unwrap(), 3.605551275, epsilon = 1e-6);
    assert_relative_eq!(t.median_length(TriVertex::B).unwrap(), 2.5, epsilon = 1e-9);
    assert_relative_eq!(t.height_length(TriVertex::A).unwrap(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(t.height_length(TriVertex::B).unwrap(), 2.4, epsilon = 1e-9);
    assert_relative_eq!(t.height_length(TriVertex::C).unwrap(), 4.0, epsilon = 1e-9);
    assert_relative_eq!(t.bisector_length(TriVertex::B).unwrap(), 2.424366507, epsilon = 1e-6);
    assert_relative_eq!(t.midline_length(TriSide::AB).unwrap(), 1.5, epsilon = 1e-9);
    assert_relative_eq!(t.midline_length(TriSide::BC).unwrap(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(t.midline_length(TriSide::CA).unwrap(), 2.5, epsilon = 1e-9);

    // Same triangle described by the other two side pairs.
    let by_ca_ab = Triangle::new(
        TriangleSpec::SidesAndAngle {
            ab: Some(3.0),
            bc: None,
            ca: Some(5.0),
            angle: AngleValue::Radians(t.angle_radians(TriVertex::A)),
        },
        TriangleOptions::default(),
    )
    .unwrap();
    assert_relative_eq!(by_ca_ab.length_bc(), 4.0, epsilon = 1e-9);
    let by_bc_ca = Triangle::new(
        TriangleSpec::SidesAndAngle {
            ab: None,
            bc: Some(4.0),
            ca: Some(5.0),
            angle: AngleValue::Radians(t.angle_radians(TriVertex::C)),
        },
        TriangleOptions::default(),
    )
    .unwrap();
    assert_relative_eq!(by_bc_ca.length_ab(), 3.0, epsilon = 1e-9);
}

#[test]
fn triangle_rejections() {
    let o = TriangleOptions::default();
    let sides = |ab, bc, ca| Triangle::new(TriangleSpec::Sides { ab, bc, ca }, o);
    assert!(matches!(
        sides(1.0, 1.0, 2.0),
        Err(GeomError::InvalidShape { shape: "triangle", .. })
    ));
    assert!(matches!(
        sides(f64::NAN, 1.0, 1.0),
        Err(GeomError::InvalidShape { .. })
    ));
    let collinear = [point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)];
    assert!(matches!(
        Triangle::new(TriangleSpec::Points(collinear), o),
        Err(GeomError::DegenerateGeometry { .. })
    ));
    let two = |ab, bc, ca, deg| {
        Triangle::new(
            TriangleSpec::SidesAndAngle {
                ab,
                bc,
                ca,
                angle: AngleValue::Degrees(deg),
            },
            o,
        )
    };
    assert!(matches!(
        two(Some(3.0), Some(4.0), Some(5.0), 90.0),
        Err(GeomError::InvalidArgument { .. })
    ));
    assert!(matches!(
        two(Some(3.0), None, None, 90.0),
        Err(GeomError::InvalidArgument { .. })
    ));
    assert!(two(Some(3.0), Some(4.0), None, 180.0).is_err());
    assert!(two(Some(3.0), Some(4.0), None, 0.0).is_err());
    assert!(two(Some(-3.0), Some(4.0), None, 60.0).is_err());
}

#[test]
fn triangle_optional_families_need_flags() {
    let t = Triangle::new(
        TriangleSpec::Points(right_triangle_points()),
        TriangleOptions {
            medians: true,
            ..TriangleOptions::default()
        },
    )
    .unwrap();
    assert!(t.median(TriVertex::A).is_ok());
    assert_eq!(
        t.height(TriVertex::A),
        Err(GeomError::NotComputed {
            quantity: "heights",
            flag: "heights"
        })
    );
    assert!(t.bisector(TriVertex::B).is_err());
    assert!(t.midline(TriSide::CA).is_err());
    // Getters are pure.
    assert_eq!(t.angles(), t.angles());
    assert_eq!(t.median(TriVertex::C), t.median(TriVertex::C));
}

#[test]
fn random_triangles_heights_match_area() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let pts = [(); 3].map(|_| point(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)));
        let Ok(t) = Triangle::new(TriangleSpec::Points(pts), TriangleOptions::all()) else {
            continue;
        };
        if t.area() < 1.0 {
            continue;
        }
        let pairs = [(TriVertex::A, TriSide::BC), (TriVertex::B, TriSide::CA), (TriVertex::C, TriSide::AB)];
        for (v, s) in pairs {
            let h = t.height_length(v).unwrap();
            assert_relative_eq!(0.5 * h * t.length(s), t.area(), max_relative = 1e-8);
        }
        let r = t.circumradius().unwrap();
        assert!(distance(&t.circumcenter().unwrap(), &point(0.0, 0.0)) < 1e-9 * r.max(1.0));
        assert_relative_eq!(t.angles().iter().sum::<f64>(), PI, epsilon = 1e-9);
    }
}

// ---------- Square / Rectangle ----------

#[test]
fn square_from_length() {
    let s = Square::new(SquareSpec::Length(2.0), QuadOptions::all()).unwrap();
    assert!(close(s.point_a(), -1.0, -1.0, 1e-15));
    assert!(close(s.point_b(), 1.0, -1.0, 1e-15));
    assert!(close(s.point_c(), 1.0, 1.0, 1e-15));
    assert!(close(s.point_d(), -1.0, 1.0, 1e-15));
    assert_relative_eq!(s.perimeter(), 8.0, epsilon = 1e-12);
    assert_relative_eq!(s.area(), 4.0, epsilon = 1e-12);
    assert_eq!(s.angles(), [FRAC_PI_2; 4]);
    assert_relative_eq!(s.length_diagonal_ac().unwrap(), 8f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(s.height_length(QuadVertex::A, QuadSide::CD).unwrap(), 2.0, epsilon = 1e-12);
    assert_eq!(s.kind(), QuadKind::Square);
    let q = s.clone().into_quadrilateral();
    assert_eq!(q.kind(), QuadKind::Square);
    assert_relative_eq!(q.area(), 4.0, epsilon = 1e-12);
    assert!(matches!(
        Square::new(SquareSpec::Length(0.0), QuadOptions::default()),
        Err(GeomError::InvalidArgument { .. })
    ));
    assert!(Square::new(SquareSpec::Length(f64::INFINITY), QuadOptions::default()).is_err());
}

#[test]
fn square_from_points_checks_shape() {
    let rotated = [point(1.0, 0.0), point(3.0, 1.0), point(2.0, 3.0), point(0.0, 2.0)];
    let s = Square::new(SquareSpec::Points(rotated), QuadOptions::default()).unwrap();
    assert!(close(s.diagonal_intersection_point(), 0.0, 0.0, 1e-15));
    assert!(close(s.point_a(), -0.5, -1.5, 1e-12));
    assert_relative_eq!(s.area(), 5.0, epsilon = 1e-12);

    let rect = [point(0.0, 0.0), point(2.0, 0.0), point(2.0, 1.0), point(0.0, 1.0)];
    assert!(matches!(
        Square::new(SquareSpec::Points(rect), QuadOptions::default()),
        Err(GeomError::InvalidShape { shape: "square", .. })
    ));
    let rhomb = [point(0.0, 0.0), point(2.0, 0.0), point(3.0, 3f64.sqrt()), point(1.0, 3f64.sqrt())];
    assert!(Square::new(SquareSpec::Points(rhomb), QuadOptions::default()).is_err());
}

#[test]
fn rectangle_from_size_and_sides() {
    let r = Rectangle::new(
        RectangleSpec::Size {
            width: 4.0,
            height: 2.0,
        },
        QuadOptions::all(),
    )
    .unwrap();
    assert!(close(r.point_a(), -2.0, -1.0, 1e-15));
    assert!(close(r.point_c(), 2.0, 1.0, 1e-15));
    assert_relative_eq!(r.area(), 8.0, epsilon = 1e-12);
    assert_relative_eq!(r.length_diagonal_bd().unwrap(), 20f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(r.height_length(QuadVertex::B, QuadSide::DA).unwrap(), 4.0, epsilon = 1e-12);

    let same = Rectangle::new(
        RectangleSpec::Sides(SideLength::new(QuadSide::DA, 2.0), SideLength::new(QuadSide::CD, 4.0)),
        QuadOptions::all(),
    )
    .unwrap();
    assert_eq!(same.vertices(), r.vertices());

    let parallel = Rectangle::new(
        RectangleSpec::Sides(SideLength::new(QuadSide::AB, 2.0), SideLength::new(QuadSide::CD, 4.0)),
        QuadOptions::default(),
    );
    assert!(matches!(parallel, Err(GeomError::InvalidArgument { .. })));
    let negative = Rectangle::new(
        RectangleSpec::Size {
            width: -1.0,
            height: 2.0,
        },
        QuadOptions::default(),
    );
    assert!(negative.is_err());
}

#[test]
fn rectangle_from_points() {
    let pts = [point(1.0, 1.0), point(5.0, 1.0), point(5.0, 3.0), point(1.0, 3.0)];
    let opts = QuadOptions {
        shift_coordinate: false,
        ..QuadOptions::default()
    };
    let r = Rectangle::new(RectangleSpec::Points(pts), opts).unwrap();
    assert!(close(r.diagonal_intersection_point(), 3.0, 2.0, 1e-12));
    assert_eq!(r.point_a(), point(1.0, 1.0));

    let skew = [point(0.0, 0.0), point(4.0, 0.0), point(5.0, 2.0), point(1.0, 2.0)];
    assert!(matches!(
        Rectangle::new(RectangleSpec::Points(skew), QuadOptions::default()),
        Err(GeomError::InvalidShape { shape: "rectangle", .. })
    ));
}

// ---------- Rhombus ----------

#[test]
fn rhombus_from_length_and_angle() {
    let r = Rhombus::new(
        RhombusSpec::LengthAndAngle {
            length: 2.0,
            angle: AngleAt::new(QuadVertex::A, AngleValue::Degrees(60.0)),
        },
        QuadOptions::default(),
    )
    .unwrap();
    assert_relative_eq!(r.length_diagonal_ac().unwrap(), 12f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(r.length_diagonal_bd().unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(r.area(), 12f64.sqrt(), epsilon = 1e-12);
    for side in QuadSide::ALL {
        assert_relative_eq!(r.length(side), 2.0, epsilon = 1e-12);
    }
    assert_relative_eq!(r.angle_degrees(QuadVertex::B), 120.0, epsilon = 1e-9);

    // 120° at B describes the same rhombus.
    let at_b = Rhombus::new(
        RhombusSpec::LengthAndAngle {
            length: 2.0,
            angle: AngleAt::new(QuadVertex::B, AngleValue::Degrees(120.0)),
        },
        QuadOptions::default(),
    )
    .unwrap();
    for v in QuadVertex::ALL {
        assert!(close(at_b.point(v), r.point(v).x, r.point(v).y, 1e-12));
    }
}

#[test]
fn rhombus_rejections_and_points() {
    let bad = |length, deg| {
        Rhombus::new(
            RhombusSpec::LengthAndAngle {
                length,
                angle: AngleAt::new(QuadVertex::C, AngleValue::Degrees(deg)),
            },
            QuadOptions::default(),
        )
    };
    assert!(matches!(bad(0.0, 60.0), Err(GeomError::InvalidArgument { .. })));
    assert!(matches!(bad(1.0, 180.0), Err(GeomError::InvalidArgument { .. })));

    let h = 3f64.sqrt();
    let ok = [point(0.0, 0.0), point(2.0, 0.0), point(3.0, h), point(1.0, h)];
    let r = Rhombus::new(RhombusSpec::Points(ok), QuadOptions::default()).unwrap();
    assert_relative_eq!(r.angle_degrees(QuadVertex::A), 60.0, epsilon = 1e-9);
    assert!(r.diagonals().is_ok());

    let kite = [point(0.0, 0.0), point(2.0, 0.0), point(4.0, 2.0), point(1.0, 2.0)];
    assert!(matches!(
        Rhombus::new(RhombusSpec::Points(kite), QuadOptions::default()),
        Err(GeomError::InvalidShape { shape: "rhombus", .. })
    ));
}

// ---------- Parallelogram ----------

fn slanted_parallelogram(opts: QuadOptions) -> Parallelogram {
    Parallelogram::new(
        ParallelogramSpec::SidesAndAngle {
            first: SideLength::new(QuadSide::AB, 8.0),
            second: SideLength::new(QuadSide::BC, 40f64.sqrt()),
            angle: AngleAt::new(QuadVertex::A, AngleValue::Radians(6f64.atan2(2.0))),
        },
        opts,
    )
    .unwrap()
}

#[test]
fn parallelogram_heights_and_recentering() {
    let p = slanted_parallelogram(QuadOptions::all());
    assert!(close(p.point_a(), -5.0, -3.0, 1e-9));
    assert!(close(p.point_c(), 5.0, 3.0, 1e-9));
    assert_eq!(p.diagonal_intersection_point(), point(0.0, 0.0));
    assert_relative_eq!(p.height_length(QuadVertex::A, QuadSide::CD).unwrap(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(p.height_length(QuadVertex::A, QuadSide::BC).unwrap(), 7.58946638, epsilon = 1e-6);
    assert_relative_eq!(p.area(), 48.0, epsilon = 1e-9);
    assert_eq!(p.heights().unwrap().len(), 8);
    assert!(matches!(
        p.height(QuadVertex::A, QuadSide::AB),
        Err(GeomError::InvalidArgument { .. })
    ));
    // Diagonal endpoints plus eight feet.
    assert_eq!(p.connection_matrix().len(), 12);
    assert_eq!(p.connection_matrix().edges().len(), 4 + 2 + 8);
}

#[test]
fn parallelogram_without_flags() {
    let p = slanted_parallelogram(QuadOptions::default());
    assert!(matches!(p.diagonals(), Err(GeomError::NotComputed { .. })));
    assert!(matches!(
        p.height(QuadVertex::B, QuadSide::CD),
        Err(GeomError::NotComputed { .. })
    ));
    assert_relative_eq!(
        p.angle_radians(QuadVertex::A) + p.angle_radians(QuadVertex::B),
        PI,
        epsilon = 1e-12
    );
}

#[test]
fn parallelogram_rejects_parallel_pair_and_bad_points() {
    let same_class = Parallelogram::new(
        ParallelogramSpec::SidesAndAngle {
            first: SideLength::new(QuadSide::BC, 3.0),
            second: SideLength::new(QuadSide::DA, 3.0),
            angle: AngleAt::new(QuadVertex::A, AngleValue::Degrees(60.0)),
        },
        QuadOptions::default(),
    );
    assert!(matches!(same_class, Err(GeomError::InvalidArgument { .. })));

    let trap = [point(0.0, 0.0), point(6.0, 0.0), point(4.0, 2.0), point(1.0, 2.0)];
    assert!(matches!(
        Parallelogram::new(ParallelogramSpec::Points(trap), QuadOptions::default()),
        Err(GeomError::InvalidShape { shape: "parallelogram", .. })
    ));
    let ok = [point(0.0, 0.0), point(8.0, 0.0), point(10.0, 6.0), point(2.0, 6.0)];
    let p = Parallelogram::new(ParallelogramSpec::Points(ok), QuadOptions::default()).unwrap();
    assert!(close(p.point_a(), -5.0, -3.0, 1e-12));
}

// ---------- Trapezoid ----------

#[test]
fn trapezoid_from_four_sides() {
    let t = Trapezoid::new(
        TrapezoidSpec::FourSides {
            ab: 6.0,
            bc: 17f64.sqrt(),
            cd: 3.0,
            da: 20f64.sqrt(),
        },
        QuadOptions::all(),
    )
    .unwrap();
    let eps = 1e-9;
    assert!(close(t.point_a(), -10.0 / 3.0, -8.0 / 3.0, eps));
    assert!(close(t.point_b(), 8.0 / 3.0, -8.0 / 3.0, eps));
    assert!(close(t.point_c(), 5.0 / 3.0, 4.0 / 3.0, eps));
    assert!(close(t.point_d(), -4.0 / 3.0, 4.0 / 3.0, eps));
    assert_relative_eq!(t.area(), 18.0, epsilon = eps);
    assert_relative_eq!(t.perimeter(), 17.5952415806, epsilon = 1e-9);
    assert_relative_eq!(t.height_between_bases(), 4.0, epsilon = eps);
    let expected = [1.1071487178, 1.3258176637, 1.8157749899, 2.0344439358];
    for (got, want) in t.angles().iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-6);
    }
    assert_relative_eq!(t.length_diagonal_ac().unwrap(), 6.40312424, epsilon = 1e-6);
    assert_relative_eq!(t.length_diagonal_bd().unwrap(), 5.65685425, epsilon = 1e-6);
    let h = |v, s| t.height_length(v, s).unwrap();
    assert_relative_eq!(h(QuadVertex::A, QuadSide::BC), 5.82086, epsilon = 1e-5);
    assert_relative_eq!(h(QuadVertex::A, QuadSide::CD), 4.0, epsilon = eps);
    assert_relative_eq!(h(QuadVertex::B, QuadSide::DA), 5.36656, epsilon = 1e-5);
    assert_relative_eq!(h(QuadVertex::C, QuadSide::DA), 2.68328, epsilon = 1e-5);
    assert_relative_eq!(h(QuadVertex::D, QuadSide::BC), 2.91043, epsilon = 1e-5);
}

#[test]
fn trapezoid_from_bases_height_and_any_angle() {
    let angles = [
        (QuadVertex::A, 1.1687016242406),
        (QuadVertex::B, 1.6453930988281),
        (QuadVertex::C, 1.4961995547616),
        (QuadVertex::D, 1.9728910293492),
    ];
    for (vertex, r) in angles {
        let t = Trapezoid::new(
            TrapezoidSpec::BasesHeightAngle {
                ab: 6.6307692307692,
                cd: 5.0,
                height: 4.6523076923077,
                angle: AngleAt::new(vertex, AngleValue::Radians(r)),
            },
            QuadOptions::all(),
        )
        .unwrap();
        let eps = 1e-5;
        assert!(close(t.point_a(), -3.97846, -2.65231, eps), "{vertex:?}");
        assert!(close(t.point_b(), 2.65231, -2.65231, eps));
        assert!(close(t.point_c(), 3.0, 2.0, eps));
        assert!(close(t.point_d(), -2.0, 2.0, eps));
        assert_relative_eq!(t.angle_radians(vertex), r, epsilon = 1e-9);
        assert_relative_eq!(t.length_bc(), 4.66528, epsilon = eps);
        assert_relative_eq!(t.length_da(), 5.05552, epsilon = eps);
        assert_relative_eq!(t.area(), 27.05496, epsilon = eps);
        assert_relative_eq!(t.perimeter(), 21.35157, epsilon = eps);
        assert_relative_eq!(t.length_diagonal_ac().unwrap(), 8.38707, epsilon = eps);
        assert_relative_eq!(t.length_diagonal_bd().unwrap(), 6.57936, epsilon = eps);
        let h = |v, s| t.height_length(v, s).unwrap();
        assert_relative_eq!(h(QuadVertex::A, QuadSide::BC), 6.61233, epsilon = eps);
        assert_relative_eq!(h(QuadVertex::B, QuadSide::DA), 6.10192, epsilon = eps);
        assert_relative_eq!(h(QuadVertex::C, QuadSide::DA), 4.60122, epsilon = eps);
        assert_relative_eq!(h(QuadVertex::D, QuadSide::BC), 4.98609, epsilon = eps);
        assert_relative_eq!(h(QuadVertex::C, QuadSide::AB), 4.6523076923077, epsilon = 1e-9);
    }
}

#[test]
fn trapezoid_rejections() {
    let o = QuadOptions::default();
    let sides = |ab, bc, cd, da| Trapezoid::new(TrapezoidSpec::FourSides { ab, bc, cd, da }, o);
    assert!(matches!(
        sides(6.0, 1.0, 3.0, 5.0),
        Err(GeomError::InvalidShape { shape: "trapezoid", .. })
    ));
    assert!(matches!(
        sides(6.0, -1.0, 3.0, 5.0),
        Err(GeomError::InvalidArgument { .. })
    ));
    assert!(sides(4.0, 2.0, 4.0, 2.0).is_err());
    // Legs too long for the base difference to close: |AB − CD| > BC + DA.
    assert!(sides(10.0, 1.0, 2.0, 1.0).is_err());

    let bases = |height, deg| {
        Trapezoid::new(
            TrapezoidSpec::BasesHeightAngle {
                ab: 6.0,
                cd: 3.0,
                height,
                angle: AngleAt::new(QuadVertex::A, AngleValue::Degrees(deg)),
            },
            o,
        )
    };
    assert!(matches!(bases(0.0, 60.0), Err(GeomError::InvalidArgument { .. })));
    assert!(matches!(bases(2.0, 190.0), Err(GeomError::InvalidArgument { .. })));
    assert!(bases(2.0, 60.0).is_ok());

    let kite = [point(0.0, 0.0), point(2.0, -1.0), point(4.0, 0.0), point(2.0, 3.0)];
    assert!(matches!(
        Trapezoid::new(TrapezoidSpec::Points(kite), o),
        Err(GeomError::InvalidShape { shape: "trapezoid", .. })
    ));
    let crossed = [point(0.0, 0.0), point(4.0, 0.0), point(1.0, 2.0), point(3.0, 2.0)];
    assert!(matches!(
        Trapezoid::new(TrapezoidSpec::Points(crossed), o),
        Err(GeomError::InvalidShape { .. })
    ));
}

#[test]
fn trapezoid_from_points_with_vertical_bases() {
    // BC ∥ DA instead of AB ∥ CD.
    let pts = [point(0.0, 0.0), point(2.0, 1.0), point(2.0, 3.0), point(0.0, 5.0)];
    let opts = QuadOptions {
        shift_coordinate: false,
        ..QuadOptions::default()
    };
    let t = Trapezoid::new(TrapezoidSpec::Points(pts), opts).unwrap();
    let c = t.diagonal_intersection_point();
    // AC: (0,0)→(2,3), BD: (2,1)→(0,5).
    assert!(close(c, 10.0 / 7.0, 15.0 / 7.0, 1e-12));
    assert_relative_eq!(t.angles().iter().sum::<f64>(), TAU, epsilon = 1e-12);
}

// ---------- Properties ----------

proptest! {
    #[test]
    fn prop_valid_triangle_matches_strict_inequality(
        a in 0.01f64..100.0, b in 0.01f64..100.0, c in 0.01f64..100.0
    ) {
        let strict = a < b + c && b < a + c && c < a + b;
        prop_assert_eq!(crate::general::is_valid_triangle(a, b, c), strict);
    }

    #[test]
    fn prop_triangle_sides_round_trip(
        a in 1.0f64..100.0, b in 1.0f64..100.0, t in 0.05f64..0.95
    ) {
        let lo = (a - b).abs();
        let c = lo + t * (a + b - lo);
        let tri = Triangle::new(TriangleSpec::Sides { ab: a, bc: b, ca: c }, TriangleOptions::default()).unwrap();
        prop_assert!((tri.length_ab() - a).abs() <= 1e-9 * a.max(1.0) * 10.0);
        prop_assert!((tri.length_bc() - b).abs() <= 1e-9 * b.max(1.0) * 10.0);
        prop_assert!((tri.length_ca() - c).abs() <= 1e-9 * c.max(1.0) * 10.0);
        prop_assert!((tri.angles().iter().sum::<f64>() - PI).abs() < 1e-9);
    }

    #[test]
    fn prop_parallelogram_angles_sum_to_full_turn(
        ab in 0.5f64..50.0, da in 0.5f64..50.0, deg in 5.0f64..175.0
    ) {
        let p = Parallelogram::new(
            ParallelogramSpec::SidesAndAngle {
                first: SideLength::new(QuadSide::AB, ab),
                second: SideLength::new(QuadSide::DA, da),
                angle: AngleAt::new(QuadVertex::A, AngleValue::Degrees(deg)),
            },
            QuadOptions::default(),
        ).unwrap();
        prop_assert!((p.angles().iter().sum::<f64>() - TAU).abs() < 1e-9);
        let o = p.diagonal_intersection_point();
        prop_assert!(o.x == 0.0 && o.y == 0.0);
    }

    #[test]
    fn prop_quad_points_keep_true_crossing_without_shift(
        ox in -20.0f64..20.0, oy in -20.0f64..20.0,
        ux in 1.0f64..10.0, vx in -5.0f64..5.0, vy in 1.0f64..10.0
    ) {
        let a = point(ox, oy);
        let b = point(ox + ux, oy);
        let d = point(ox + vx, oy + vy);
        let c = point(b.x + vx, b.y + vy);
        let expected = nalgebra::center(&a, &c);
        let opts = QuadOptions { shift_coordinate: false, ..QuadOptions::default() };
        let p = Parallelogram::new(ParallelogramSpec::Points([a, b, c, d]), opts).unwrap();
        prop_assert!(distance(&p.diagonal_intersection_point(), &expected) < 1e-9);
        let shifted = Parallelogram::new(ParallelogramSpec::Points([a, b, c, d]), QuadOptions::default()).unwrap();
        prop_assert!(distance(&shifted.diagonal_intersection_point(), &point(0.0, 0.0)) == 0.0);
        prop_assert!(distance(&shifted.point_a(), &(a - expected.coords)) < 1e-9);
        prop_assert!((p.angles().iter().sum::<f64>() - TAU).abs() < 1e-9);
    }
}
