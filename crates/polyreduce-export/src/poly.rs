//! `.poly` polyline text format.
//!
//! One point per line, coordinates separated by commas:
//!
//! ```text
//! 0.0, 0.0
//! 1.5, 2.25
//! 3, 4
//! ```
//!
//! Whitespace around values and empty fields are ignored, as are blank
//! lines. Every point must have the same number of coordinates; that
//! number is the dimension of the polyline.

use std::fmt::{Display, Write};

use crate::ParseError;

/// A parsed polyline: flat coordinates plus their dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Coordinates per point.
    pub dimension: usize,
    /// Flat coordinate sequence, `dimension` values per point.
    pub coords: Vec<f64>,
}

impl Polyline {
    /// Number of points.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.coords.len() / self.dimension
        }
    }
}

/// Parse a `.poly` document.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] when the document holds no points,
/// [`ParseError::InvalidNumber`] for a value that is not a number and
/// [`ParseError::DimensionMismatch`] when a line's coordinate count
/// differs from the first line's.
///
/// # Examples
///
/// ```
/// use polyreduce_export::parse_poly;
///
/// let polyline = parse_poly("0,0\n1, 2\n\n3,4\n").unwrap();
/// assert_eq!(polyline.dimension, 2);
/// assert_eq!(polyline.coords, vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn parse_poly(input: &str) -> Result<Polyline, ParseError> {
    let mut dimension = None;
    let mut coords = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let before = coords.len();
        for field in line.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            let value = field
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber {
                    line: line_number,
                    value: field.to_owned(),
                })?;
            coords.push(value);
        }

        let found = coords.len() - before;
        if found == 0 {
            continue;
        }
        match dimension {
            None => dimension = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::DimensionMismatch {
                    line: line_number,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
    }

    let dimension = dimension.ok_or(ParseError::Empty)?;
    Ok(Polyline { dimension, coords })
}

/// Serialize flat coordinates as a `.poly` document, one point per line.
///
/// A trailing incomplete point is written on its own shorter line.
/// Returns an empty string when `dimension` is zero.
#[must_use]
pub fn to_poly_string<T: Display>(coords: &[T], dimension: usize) -> String {
    let mut out = String::new();
    if dimension == 0 {
        return out;
    }
    for point in coords.chunks(dimension) {
        for (i, value) in point.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{value}");
        }
        out.push('\n');
    }
    out
}
