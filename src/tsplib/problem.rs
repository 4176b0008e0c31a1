//! TSPLIB problem file parser.
//!
//! Extracts the three markers the solver needs — `DIMENSION`,
//! `EDGE_WEIGHT_TYPE`, and the `NODE_COORD_SECTION` coordinate rows —
//! and ignores everything else (NAME, COMMENT, TYPE). Coordinate rows
//! tolerate arbitrary interior whitespace. Parsing stops at an `EOF`
//! marker or the end of input.

use std::fs;
use std::path::Path;

use crate::distance::EdgeWeightType;
use crate::error::{TspError, TspResult};
use crate::models::{City, TspProblem};

/// Loads a TSPLIB problem file from disk.
///
/// # Errors
///
/// I/O errors propagate; malformed content yields the same errors as
/// [`parse_problem`].
pub fn load_problem<P: AsRef<Path>>(path: P) -> TspResult<TspProblem> {
    parse_problem(&fs::read_to_string(path)?)
}

/// Parses TSPLIB problem text into an immutable [`TspProblem`].
///
/// # Errors
///
/// - [`TspError::MissingField`] if `DIMENSION`, `EDGE_WEIGHT_TYPE`, or
///   `NODE_COORD_SECTION` is absent
/// - [`TspError::UnsupportedEdgeWeightType`] for formulas other than
///   `EUC_2D` and `ATT`
/// - [`TspError::Parse`] for malformed values or coordinate rows, or a
///   coordinate count that contradicts the declared dimension
///
/// # Examples
///
/// ```
/// use tsp_evo::tsplib::parse_problem;
///
/// let text = "\
/// NAME : tiny
/// DIMENSION : 3
/// EDGE_WEIGHT_TYPE : EUC_2D
/// NODE_COORD_SECTION
/// 1 0.0 0.0
/// 2 3.0 4.0
/// 3 6.0 0.0
/// EOF
/// ";
/// let problem = parse_problem(text).unwrap();
/// assert_eq!(problem.num_cities(), 3);
/// assert_eq!(problem.distance(0, 1), 5.0);
/// ```
pub fn parse_problem(text: &str) -> TspResult<TspProblem> {
    let mut dimension: Option<usize> = None;
    let mut edge_weight: Option<EdgeWeightType> = None;
    let mut coords: Vec<(f64, f64)> = Vec::new();
    let mut in_data = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if !in_data {
            if line.starts_with("DIMENSION") {
                let value = field_value(line, line_no)?;
                let n: usize = value.parse().map_err(|_| TspError::Parse {
                    line: line_no,
                    message: format!("invalid DIMENSION value: {value}"),
                })?;
                dimension = Some(n);
            } else if line.starts_with("EDGE_WEIGHT_TYPE") {
                edge_weight = Some(field_value(line, line_no)?.parse()?);
            } else if line.starts_with("NODE_COORD_SECTION") {
                in_data = true;
            }
            continue;
        }

        if line == "EOF" {
            break;
        }
        let mut fields = line.split_whitespace().skip(1);
        let coord = fields
            .next()
            .zip(fields.next())
            .and_then(|(x, y)| x.parse::<f64>().ok().zip(y.parse::<f64>().ok()));
        match coord {
            Some(pair) => coords.push(pair),
            None => {
                return Err(TspError::Parse {
                    line: line_no,
                    message: format!("expected 'index x y' coordinate row, got: {line}"),
                })
            }
        }
    }

    let dimension = dimension.ok_or(TspError::MissingField("DIMENSION"))?;
    let edge_weight = edge_weight.ok_or(TspError::MissingField("EDGE_WEIGHT_TYPE"))?;
    if !in_data {
        return Err(TspError::MissingField("NODE_COORD_SECTION"));
    }
    if coords.len() != dimension {
        return Err(TspError::Parse {
            line: 0,
            message: format!(
                "DIMENSION declares {dimension} cities but {} coordinate rows were found",
                coords.len()
            ),
        });
    }

    let cities = coords
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| City::new(i, x, y))
        .collect();
    Ok(TspProblem::new(cities, edge_weight))
}

/// Extracts the value part of a `KEY : VALUE` header line.
fn field_value(line: &str, line_no: usize) -> TspResult<&str> {
    line.split_once(':')
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TspError::Parse {
            line: line_no,
            message: format!("expected 'KEY : VALUE', got: {line}"),
        })
}
