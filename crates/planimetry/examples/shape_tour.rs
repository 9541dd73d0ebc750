//! Builds one shape of each family and prints its derived quantities.
//! Run: cargo run -p planimetry --example shape_tour

use planimetry::prelude::*;

fn main() -> GeomResult<()> {
    let tri = Triangle::new(
        TriangleSpec::Sides {
            ab: 3.0,
            bc: 4.0,
            ca: 5.0,
        },
        TriangleOptions::all(),
    )?;
    println!(
        "triangle: area={:.3} R={:.3} r={:.3} angle_B={:.1}°",
        tri.area(),
        tri.circumradius()?,
        tri.inradius(),
        tri.angle_degrees(TriVertex::B)
    );
    for v in TriVertex::ALL {
        println!(
            "  {v:?}: median={:.4} height={:.4} bisector={:.4}",
            tri.median_length(v)?,
            tri.height_length(v)?,
            tri.bisector_length(v)?
        );
    }

    let rhombus = Rhombus::new(
        RhombusSpec::LengthAndAngle {
            length: 2.0,
            angle: AngleAt::new(QuadVertex::A, AngleValue::Degrees(60.0)),
        },
        QuadOptions::default(),
    )?;
    println!(
        "rhombus: AC={:.4} BD={:.4} area={:.4}",
        rhombus.length_diagonal_ac()?,
        rhombus.length_diagonal_bd()?,
        rhombus.area()
    );

    let trap = Trapezoid::new(
        TrapezoidSpec::FourSides {
            ab: 6.0,
            bc: 17f64.sqrt(),
            cd: 3.0,
            da: 20f64.sqrt(),
        },
        QuadOptions::all(),
    )?;
    println!(
        "trapezoid: A=({:.3}, {:.3}) height={:.3} area={:.3}",
        trap.point_a().x,
        trap.point_a().y,
        trap.height_between_bases(),
        trap.area()
    );
    for h in trap.heights()? {
        println!("  {:?}->{:?}: {:.5}", h.from, h.to, h.length());
    }

    let circle = Circle::new(point(0.0, 0.0), 5.0)?;
    for t in circle.tangents_from_point(point(6.0, 8.0), None)? {
        println!(
            "tangent touches ({:.4}, {:.4}), length {:.4}",
            t.point_of_tangency.x,
            t.point_of_tangency.y,
            t.segment.length()
        );
    }
    Ok(())
}
