//! Known-optimal tour file loader.
//!
//! Benchmark instances often publish their optimal tour as a city list
//! without a cost figure. Loading the list and pricing it with
//! [`tour_cost`](crate::evaluation::tour_cost) gives the reference value
//! for percent-above-optimal reporting; the tour plays no part in the
//! algorithm itself.

use std::fs;
use std::path::Path;

use crate::error::{TspError, TspResult};

/// Loads a TSPLIB `.opt.tour` file from disk.
pub fn load_tour<P: AsRef<Path>>(path: P) -> TspResult<Vec<usize>> {
    parse_tour(&fs::read_to_string(path)?)
}

/// Parses tour text: a `TOUR_SECTION` of 1-based city indices terminated
/// by `-1` or `EOF`, returned 0-based.
///
/// # Errors
///
/// [`TspError::MissingField`] if there is no `TOUR_SECTION`;
/// [`TspError::Parse`] for non-positive or non-numeric entries.
///
/// # Examples
///
/// ```
/// use tsp_evo::tsplib::parse_tour;
///
/// let text = "\
/// NAME : tiny.opt.tour
/// TOUR_SECTION
/// 1
/// 3
/// 2
/// -1
/// ";
/// assert_eq!(parse_tour(text).unwrap(), vec![0, 2, 1]);
/// ```
pub fn parse_tour(text: &str) -> TspResult<Vec<usize>> {
    let mut cities = Vec::new();
    let mut in_data = false;

    'lines: for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if !in_data {
            if line.starts_with("TOUR_SECTION") {
                in_data = true;
            }
            continue;
        }
        if line == "EOF" {
            break;
        }

        for token in line.split_whitespace() {
            if token == "-1" {
                break 'lines;
            }
            let index: usize = token
                .parse()
                .ok()
                .filter(|&i| i >= 1)
                .ok_or_else(|| TspError::Parse {
                    line: line_no,
                    message: format!("expected 1-based city index, got: {token}"),
                })?;
            cities.push(index - 1);
        }
    }

    if !in_data {
        return Err(TspError::MissingField("TOUR_SECTION"));
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::EdgeWeightType;
    use crate::evaluation::tour_cost;
    use crate::models::TspProblem;

    #[test]
    fn test_parse_terminated_by_minus_one() {
        let text = "TOUR_SECTION\n1\n4\n3\n2\n-1\n";
        assert_eq!(parse_tour(text).unwrap(), vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_parse_terminated_by_eof_marker() {
        let text = "TOUR_SECTION\n1\n2\n3\nEOF\n";
        assert_eq!(parse_tour(text).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_multiple_indices_per_line() {
        let text = "TOUR_SECTION\n1 2 3\n4 -1\n";
        assert_eq!(parse_tour(text).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_missing_tour_section() {
        assert!(matches!(
            parse_tour("NAME : x\n1\n2\n"),
            Err(TspError::MissingField("TOUR_SECTION"))
        ));
    }

    #[test]
    fn test_zero_index_rejected() {
        let text = "TOUR_SECTION\n1\n0\n-1\n";
        assert!(matches!(parse_tour(text), Err(TspError::Parse { .. })));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let text = "TOUR_SECTION\n1\ntwo\n-1\n";
        assert!(matches!(parse_tour(text), Err(TspError::Parse { .. })));
    }

    #[test]
    fn test_priced_with_tour_cost() {
        let problem = TspProblem::from_coords(
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
            EdgeWeightType::Euc2d,
        );
        let tour = parse_tour("TOUR_SECTION\n1\n2\n3\n4\n-1\n").unwrap();
        assert_eq!(tour_cost(&problem, &tour), 40.0);
    }
}
