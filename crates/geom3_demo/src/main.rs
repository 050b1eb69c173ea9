//! Prints a worked example of the `geom3` queries: intersections, distances,
//! and angles between a few fixed points, lines, and planes.

use eyre::{Context, Result, eyre};
use geom3::prelude::*;

/// Worked example of 3D line and plane queries
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    /// Number of digits to print after the decimal point.
    #[arg(short, long, default_value_t = 2)]
    precision: usize,
    /// Compute in double precision instead of single precision.
    #[arg(short, long)]
    double: bool,
    /// Sample point, as comma-separated coordinates (such as `7,4,3`).
    #[arg(long, allow_hyphen_values = true)]
    point: Option<String>,
}

fn main() -> Result<()> {
    use clap::Parser;

    let args = Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    let point = match &args.point {
        Some(s) => parse_coordinates(s).wrap_err_with(|| format!("bad point {s:?}"))?,
        None => [7.0, 4.0, 3.0],
    };

    if args.double {
        log::info!("computing in double precision");
        run::<f64>(point, args.precision)
    } else {
        log::info!("computing in single precision");
        run::<f32>(point, args.precision)
    }
}

fn parse_coordinates(s: &str) -> Result<[f64; 3]> {
    let coordinates = s
        .split(',')
        .map(|c| c.trim().parse::<f64>().wrap_err_with(|| format!("bad coordinate {c:?}")))
        .collect::<Result<Vec<f64>>>()?;
    <[f64; 3]>::try_from(coordinates)
        .map_err(|v| eyre!("expected 3 coordinates, got {}", v.len()))
}

fn scalar<T: Scalar>(x: f64) -> Result<T> {
    geom3::num::cast(x).ok_or_else(|| eyre!("{x} is not representable"))
}

fn point<T: Scalar>([x, y, z]: [f64; 3]) -> Result<Point3<T>> {
    Ok(Point3::new(scalar(x)?, scalar(y)?, scalar(z)?))
}

fn vector<T: Scalar>(coordinates: [f64; 3]) -> Result<Vector3<T>> {
    Ok(point(coordinates)?.to_vector())
}

fn plane<T: Scalar>([a, b, c, d]: [f64; 4]) -> Result<Plane3<T>> {
    Ok(Plane3::try_from_coefficients(
        scalar(a)?,
        scalar(b)?,
        scalar(c)?,
        scalar(d)?,
    )?)
}

fn run<T: Scalar>(sample: [f64; 3], precision: usize) -> Result<()> {
    let point1 = point::<T>(sample)?;
    println!("Point1: {point1:.precision$}");
    println!();

    let line1 = Line3::try_new(point([1.0, 2.0, 0.0])?, vector([-1.0, 1.0, 3.0])?)?;
    let line2 = Line3::try_new(point([1.0, 1.0, 2.0])?, vector([1.0, 3.0, -1.0])?)?;
    println!("Line1: {line1:.precision$}");
    println!("Line2: {line2:.precision$}");
    println!();

    let plane1 = plane::<T>([5.0, -6.0, 4.0, 2.0])?;
    let plane2 = plane::<T>([9.0, 0.0, -2.0, 1.0])?;
    let plane3 = plane::<T>([1.0, 1.0, 3.0, 1.0])?;
    println!("Plane1: {plane1:.precision$}");
    println!("Plane2: {plane2:.precision$}");
    println!("Plane3: {plane3:.precision$}");
    println!();

    match plane1.point_of_intersection(&line1) {
        Some(p) => println!("Point of intersection (between Plane1 and Line1): {p:.precision$}"),
        None => log::warn!("Line1 does not cross Plane1"),
    }
    match plane1.line_of_intersection(&plane2) {
        Some(l) => println!("Line of intersection (between Plane1 and Plane2): {l:.precision$}"),
        None => log::warn!("Plane1 and Plane2 are parallel"),
    }
    println!();

    let distance = plane1.distance_to_point(&point1);
    println!("Distance (from Plane1 to Point1): {distance:.precision$}");
    let angle = plane1.angle_between_line(&line2).to_degrees();
    println!("Angle (between Plane1 and Line2): {angle:.precision$}");
    let angle = plane1.angle_between_plane(&plane3).to_degrees();
    println!("Angle (between Plane1 and Plane3): {angle:.precision$}");

    Ok(())
}
