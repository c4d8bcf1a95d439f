//! Point-file parsing.
//!
//! Input files hold one whitespace-separated `x y z` triple per line.
//! Spline files put the two boundary tangents on the first two lines,
//! followed by the control points. Cardinality checks (at least two
//! control points, exactly sixteen for a patch) belong to the caller;
//! this module only gets well-formed points out of text.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::math::point3::Point3;

/// Parses a single `x y z` line into a point.
pub fn parse_point(line: &str) -> Result<Point3> {
    let mut fields = line.split_whitespace();
    let mut coords = [0.0; 3];
    for coord in &mut coords {
        let field = fields
            .next()
            .ok_or_else(|| Error::InvalidFormat(format!("expected `x y z`, got `{line}`")))?;
        *coord = field
            .parse()
            .map_err(|_| Error::InvalidFormat(format!("bad coordinate `{field}` in `{line}`")))?;
    }

    if fields.next().is_some() {
        return Err(Error::InvalidFormat(format!(
            "trailing fields after `x y z` in `{line}`"
        )));
    }

    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Reads every remaining line of `reader` as a point.
///
/// Blank lines are rejected, not skipped: a malformed file should fail
/// loudly rather than silently produce a shorter curve.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point3>> {
    let mut points = Vec::new();
    for line in reader.lines() {
        points.push(parse_point(&line?)?);
    }
    Ok(points)
}

/// Reads a spline file: boundary tangents `t0` and `t_n` from the first
/// two lines, control points from the rest.
pub fn read_tangents_and_points<R: BufRead>(reader: R) -> Result<(Point3, Point3, Vec<Point3>)> {
    let mut lines = reader.lines();

    let mut tangent = || -> Result<Point3> {
        let line = lines
            .next()
            .ok_or_else(|| Error::InvalidFormat("missing boundary tangent line".into()))??;
        parse_point(&line)
    };
    let t0 = tangent()?;
    let t_n = tangent()?;

    let mut points = Vec::new();
    for line in lines {
        points.push(parse_point(&line?)?);
    }

    Ok((t0, t_n, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let p = parse_point("1.5 -2 0.25").unwrap();
        assert_eq!(p, Point3::new(1.5, -2.0, 0.25));
    }

    #[test]
    fn test_parse_point_rejects_garbage() {
        assert!(parse_point("1.0 2.0").is_err());
        assert!(parse_point("1.0 2.0 fish").is_err());
        assert!(parse_point("1 2 3 4").is_err());
        assert!(parse_point("").is_err());
    }

    #[test]
    fn test_read_points() {
        let input = "0 0 0\n1 1 0\n2 -1 0\n3 0 0\n";
        let points = read_points(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_read_tangents_and_points() {
        let input = "1 0 0\n0 1 0\n0 0 0\n1 1 1\n2 2 2\n";
        let (t0, t_n, points) = read_tangents_and_points(input.as_bytes()).unwrap();
        assert_eq!(t0, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(t_n, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_read_tangents_requires_two_lines() {
        assert!(read_tangents_and_points("1 0 0\n".as_bytes()).is_err());
    }
}
