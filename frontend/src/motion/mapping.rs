//! Piecewise-linear control-point mappings.
//!
//! A [`Mapping`] turns a scroll offset into a visual parameter. Inputs are
//! validated once at construction so sampling never divides by zero.

use serde::Deserialize;
use thiserror::Error;

/// One `(input, output)` pair of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ControlPoint {
    pub input: f64,
    pub output: f64,
}

impl ControlPoint {
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("a mapping needs at least two control points, got {0}")]
    TooFewPoints(usize),
    #[error("control point {index} is not finite (input {input}, output {output})")]
    NonFinite { index: usize, input: f64, output: f64 },
    #[error("control points {index} and {} share input {input}, the segment has zero width", .index + 1)]
    ZeroWidthSegment { index: usize, input: f64 },
    #[error("control point inputs must ascend: point {} ({next}) comes after point {index} ({input})", .index + 1)]
    Unsorted { index: usize, input: f64, next: f64 },
}

/// Validated piecewise-linear function. Inputs are strictly ascending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<ControlPoint>")]
pub struct Mapping {
    points: Vec<ControlPoint>,
}

impl Mapping {
    pub fn new(points: Vec<ControlPoint>) -> Result<Self, MappingError> {
        if points.len() < 2 {
            return Err(MappingError::TooFewPoints(points.len()));
        }

        for (index, point) in points.iter().enumerate() {
            if !point.input.is_finite() || !point.output.is_finite() {
                return Err(MappingError::NonFinite {
                    index,
                    input: point.input,
                    output: point.output,
                });
            }
        }

        for (index, pair) in points.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            if a.input == b.input {
                return Err(MappingError::ZeroWidthSegment { index, input: a.input });
            }
            if a.input > b.input {
                return Err(MappingError::Unsorted {
                    index,
                    input: a.input,
                    next: b.input,
                });
            }
        }

        Ok(Self { points })
    }

    /// Two-point mapping from `domain` onto `range`.
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Result<Self, MappingError> {
        Self::new(vec![
            ControlPoint::new(domain.0, range.0),
            ControlPoint::new(domain.1, range.1),
        ])
    }

    /// Interpolates `x`, clamping to the endpoint outputs outside the domain.
    pub fn sample(&self, x: f64) -> f64 {
        // `new` guarantees at least two points.
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if x.is_nan() || x <= first.input {
            return first.output;
        }
        if x >= last.input {
            return last.output;
        }

        // First point whose input exceeds x; x is strictly inside the domain,
        // so this lands in 1..len.
        let upper = self.points.partition_point(|p| p.input <= x);
        let a = self.points[upper - 1];
        let b = self.points[upper];

        a.output + (x - a.input) / (b.input - a.input) * (b.output - a.output)
    }
}

impl TryFrom<Vec<ControlPoint>> for Mapping {
    type Error = MappingError;

    fn try_from(points: Vec<ControlPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn two_point_mapping_interpolates_and_clamps() {
        let shift = Mapping::linear((0.0, 600.0), (0.0, -80.0)).unwrap();

        assert_close(shift.sample(-50.0), 0.0);
        assert_close(shift.sample(0.0), 0.0);
        assert_close(shift.sample(300.0), -40.0);
        assert_close(shift.sample(450.0), -60.0);
        assert_close(shift.sample(600.0), -80.0);
        assert_close(shift.sample(10_000.0), -80.0);
    }

    #[test]
    fn multi_segment_mapping_finds_bracketing_pair() {
        let mapping = Mapping::new(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(100.0, 10.0),
            ControlPoint::new(300.0, 0.0),
        ])
        .unwrap();

        assert_close(mapping.sample(50.0), 5.0);
        assert_close(mapping.sample(100.0), 10.0);
        assert_close(mapping.sample(200.0), 5.0);
    }

    #[test]
    fn nan_input_reads_as_start_of_domain() {
        let fade = Mapping::linear((0.0, 400.0), (1.0, 0.6)).unwrap();
        assert_close(fade.sample(f64::NAN), 1.0);
    }

    #[test]
    fn rejects_malformed_points() {
        assert_eq!(
            Mapping::new(vec![ControlPoint::new(0.0, 1.0)]),
            Err(MappingError::TooFewPoints(1))
        );
        assert_eq!(
            Mapping::linear((200.0, 200.0), (0.0, 1.0)),
            Err(MappingError::ZeroWidthSegment { index: 0, input: 200.0 })
        );
        assert_eq!(
            Mapping::linear((400.0, 0.0), (1.0, 0.6)),
            Err(MappingError::Unsorted { index: 0, input: 400.0, next: 0.0 })
        );
        assert!(matches!(
            Mapping::linear((0.0, f64::INFINITY), (0.0, 1.0)),
            Err(MappingError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn error_messages_name_the_offending_points() {
        let err = Mapping::linear((10.0, 10.0), (0.0, 1.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "control points 0 and 1 share input 10, the segment has zero width"
        );
    }

    #[test]
    fn deserializes_with_validation() {
        let mapping: Mapping =
            serde_json::from_str(r#"[{"input":0,"output":1},{"input":400,"output":0.6}]"#).unwrap();
        assert_eq!(mapping, Mapping::linear((0.0, 400.0), (1.0, 0.6)).unwrap());

        let unsorted = serde_json::from_str::<Mapping>(
            r#"[{"input":400,"output":1},{"input":0,"output":0.6}]"#,
        );
        assert!(unsorted.unwrap_err().to_string().contains("must ascend"));
    }
}
