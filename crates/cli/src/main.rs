mod args;
mod provenance;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use planimetry::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::args::{
    parse_fixed, parse_fixed_points, parse_point, parse_side_length, parse_vertex,
};
use crate::provenance::Invocation;

#[derive(Parser)]
#[command(name = "planimetry")]
#[command(about = "Construct planar shapes and print their measurements as JSON")]
struct Cmd {
    /// Write the report here (plus a `.provenance.json` sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

/// Derived elements shared by the quadrilateral commands.
#[derive(Args, Serialize)]
struct QuadFlags {
    #[arg(long)]
    diagonals: bool,
    #[arg(long)]
    heights: bool,
    /// Keep point input in its original frame
    #[arg(long)]
    no_shift: bool,
}

impl QuadFlags {
    fn options(&self) -> QuadOptions {
        QuadOptions {
            diagonals: self.diagonals,
            heights: self.heights,
            shift_coordinate: !self.no_shift,
            ..QuadOptions::default()
        }
    }
}

#[derive(Subcommand, Serialize)]
#[serde(rename_all = "snake_case")]
enum Action {
    /// Triangle from points, three sides, or two sides and the angle between them
    Triangle {
        /// "x,y x,y x,y"
        #[arg(long, conflicts_with_all = ["sides", "angle"])]
        points: Option<String>,
        /// "ab,bc,ca"
        #[arg(long, conflicts_with = "angle")]
        sides: Option<String>,
        #[arg(long)]
        ab: Option<f64>,
        #[arg(long)]
        bc: Option<f64>,
        #[arg(long)]
        ca: Option<f64>,
        /// Angle between the two given sides
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<f64>,
        #[arg(long)]
        degrees: bool,
        #[arg(long)]
        medians: bool,
        #[arg(long)]
        heights: bool,
        #[arg(long)]
        bisectors: bool,
        #[arg(long)]
        midlines: bool,
        #[arg(long)]
        no_shift: bool,
    },
    Square {
        #[arg(long, conflicts_with = "points")]
        length: Option<f64>,
        /// "x,y x,y x,y x,y" in A, B, C, D order
        #[arg(long)]
        points: Option<String>,
        #[command(flatten)]
        flags: QuadFlags,
    },
    Rectangle {
        #[arg(long, requires = "height", conflicts_with_all = ["side", "points"])]
        width: Option<f64>,
        #[arg(long, requires = "width")]
        height: Option<f64>,
        /// Two adjacent sides, e.g. `--side AB=8 --side DA=3`
        #[arg(long, conflicts_with = "points")]
        side: Vec<String>,
        #[arg(long)]
        points: Option<String>,
        #[command(flatten)]
        flags: QuadFlags,
    },
    Rhombus {
        #[arg(long, requires = "angle", conflicts_with = "points")]
        length: Option<f64>,
        #[arg(long)]
        angle: Option<f64>,
        /// Vertex the angle sits at
        #[arg(long, default_value = "A")]
        angle_at: String,
        #[arg(long)]
        degrees: bool,
        #[arg(long)]
        points: Option<String>,
        #[command(flatten)]
        flags: QuadFlags,
    },
    Parallelogram {
        /// Two adjacent sides, e.g. `--side AB=8 --side BC=6`
        #[arg(long, conflicts_with = "points")]
        side: Vec<String>,
        #[arg(long)]
        angle: Option<f64>,
        #[arg(long, default_value = "A")]
        angle_at: String,
        #[arg(long)]
        degrees: bool,
        #[arg(long)]
        points: Option<String>,
        #[command(flatten)]
        flags: QuadFlags,
    },
    Trapezoid {
        /// "ab,bc,cd,da"
        #[arg(long, conflicts_with_all = ["bases", "points"])]
        sides: Option<String>,
        /// "ab,cd"; needs --height and --angle
        #[arg(long, requires_all = ["height", "angle"], conflicts_with = "points")]
        bases: Option<String>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        angle: Option<f64>,
        #[arg(long, default_value = "A")]
        angle_at: String,
        #[arg(long)]
        degrees: bool,
        #[arg(long)]
        points: Option<String>,
        #[command(flatten)]
        flags: QuadFlags,
    },
    /// Tangent segments from an external point to a circle
    Tangents {
        /// "x,y"
        #[arg(long, allow_hyphen_values = true)]
        center: String,
        #[arg(long)]
        radius: f64,
        /// "x,y"
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        /// Length of each segment measured from the external point
        #[arg(long)]
        segment_length: Option<f64>,
    },
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Triangle { .. } => "triangle",
            Action::Square { .. } => "square",
            Action::Rectangle { .. } => "rectangle",
            Action::Rhombus { .. } => "rhombus",
            Action::Parallelogram { .. } => "parallelogram",
            Action::Trapezoid { .. } => "trapezoid",
            Action::Tangents { .. } => "tangents",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    tracing::info!(command = cmd.action.name(), out = ?cmd.out, "start");
    let report = run(&cmd.action)?;
    match &cmd.out {
        Some(out) => {
            let inv = Invocation {
                command: cmd.action.name(),
                params: serde_json::to_value(&cmd.action)?,
            };
            let sidecar = provenance::write_report(out, &report, &inv)?;
            tracing::info!(report = %out.display(), sidecar = %sidecar.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn angle_value(value: f64, degrees: bool) -> AngleValue {
    if degrees {
        AngleValue::Degrees(value)
    } else {
        AngleValue::Radians(value)
    }
}

fn angle_at(vertex: &str, value: Option<f64>, degrees: bool) -> Result<AngleAt> {
    let value = value.context("--angle is required")?;
    Ok(AngleAt::new(parse_vertex(vertex)?, angle_value(value, degrees)))
}

fn two_sides(side: &[String]) -> Result<(SideLength, SideLength)> {
    match side {
        [a, b] => Ok((parse_side_length(a)?, parse_side_length(b)?)),
        _ => bail!("expected exactly two --side values, got {}", side.len()),
    }
}

fn quad(q: &planimetry::shape::Quadrilateral) -> Result<Value> {
    Ok(serde_json::to_value(report::quadrilateral(q))?)
}

fn run(action: &Action) -> Result<Value> {
    match action {
        Action::Triangle {
            points,
            sides,
            ab,
            bc,
            ca,
            angle,
            degrees,
            medians,
            heights,
            bisectors,
            midlines,
            no_shift,
        } => {
            let spec = match (points, sides, angle) {
                (Some(p), _, _) => TriangleSpec::Points(parse_fixed_points::<3>(p)?),
                (None, Some(s), _) => {
                    let [ab, bc, ca] = parse_fixed::<3>(s)?;
                    TriangleSpec::Sides { ab, bc, ca }
                }
                (None, None, Some(a)) => TriangleSpec::SidesAndAngle {
                    ab: *ab,
                    bc: *bc,
                    ca: *ca,
                    angle: angle_value(*a, *degrees),
                },
                (None, None, None) => match (ab, bc, ca) {
                    (Some(ab), Some(bc), Some(ca)) => TriangleSpec::Sides {
                        ab: *ab,
                        bc: *bc,
                        ca: *ca,
                    },
                    _ => bail!("give --points, --sides, all of --ab/--bc/--ca, or two sides with --angle"),
                },
            };
            let opts = TriangleOptions {
                medians: *medians,
                heights: *heights,
                bisectors: *bisectors,
                midlines: *midlines,
                shift_coordinate: !no_shift,
                ..TriangleOptions::default()
            };
            let t = Triangle::new(spec, opts)?;
            Ok(serde_json::to_value(report::triangle(&t)?)?)
        }
        Action::Square {
            length,
            points,
            flags,
        } => {
            let spec = match (length, points) {
                (Some(l), _) => SquareSpec::Length(*l),
                (None, Some(p)) => SquareSpec::Points(parse_fixed_points::<4>(p)?),
                (None, None) => bail!("give --length or --points"),
            };
            quad(&Square::new(spec, flags.options())?.into_quadrilateral())
        }
        Action::Rectangle {
            width,
            height,
            side,
            points,
            flags,
        } => {
            let spec = match (width, height, points) {
                (Some(w), Some(h), _) => RectangleSpec::Size {
                    width: *w,
                    height: *h,
                },
                (_, _, Some(p)) => RectangleSpec::Points(parse_fixed_points::<4>(p)?),
                _ => {
                    let (a, b) = two_sides(side)?;
                    RectangleSpec::Sides(a, b)
                }
            };
            quad(&Rectangle::new(spec, flags.options())?.into_quadrilateral())
        }
        Action::Rhombus {
            length,
            angle,
            angle_at: at,
            degrees,
            points,
            flags,
        } => {
            let spec = match (length, points) {
                (Some(l), _) => RhombusSpec::LengthAndAngle {
                    length: *l,
                    angle: angle_at(at, *angle, *degrees)?,
                },
                (None, Some(p)) => RhombusSpec::Points(parse_fixed_points::<4>(p)?),
                (None, None) => bail!("give --length with --angle, or --points"),
            };
            quad(&Rhombus::new(spec, flags.options())?.into_quadrilateral())
        }
        Action::Parallelogram {
            side,
            angle,
            angle_at: at,
            degrees,
            points,
            flags,
        } => {
            let spec = match points {
                Some(p) => ParallelogramSpec::Points(parse_fixed_points::<4>(p)?),
                None => {
                    let (first, second) = two_sides(side)?;
                    ParallelogramSpec::SidesAndAngle {
                        first,
                        second,
                        angle: angle_at(at, *angle, *degrees)?,
                    }
                }
            };
            quad(&Parallelogram::new(spec, flags.options())?.into_quadrilateral())
        }
        Action::Trapezoid {
            sides,
            bases,
            height,
            angle,
            angle_at: at,
            degrees,
            points,
            flags,
        } => {
            let spec = match (sides, bases, points) {
                (Some(s), _, _) => {
                    let [ab, bc, cd, da] = parse_fixed::<4>(s)?;
                    TrapezoidSpec::FourSides { ab, bc, cd, da }
                }
                (None, Some(b), _) => {
                    let [ab, cd] = parse_fixed::<2>(b)?;
                    TrapezoidSpec::BasesHeightAngle {
                        ab,
                        cd,
                        height: (*height).context("--height is required with --bases")?,
                        angle: angle_at(at, *angle, *degrees)?,
                    }
                }
                (None, None, Some(p)) => TrapezoidSpec::Points(parse_fixed_points::<4>(p)?),
                (None, None, None) => bail!("give --sides, --bases, or --points"),
            };
            quad(&Trapezoid::new(spec, flags.options())?.into_quadrilateral())
        }
        Action::Tangents {
            center,
            radius,
            from,
            segment_length,
        } => {
            let circle = Circle::new(parse_point(center)?, *radius)?;
            let p = parse_point(from)?;
            let ts = circle.tangents_from_point(p, *segment_length)?;
            Ok(serde_json::to_value(report::tangents(&ts))?)
        }
    }
}
