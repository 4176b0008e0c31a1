//! Distance formula families from the TSPLIB specification.
//!
//! Both formulas round to integral values, so distances compare exactly
//! across the whole system — the same rounding primitive (`f64::round`)
//! is used everywhere for reproducibility.
//!
//! # Reference
//!
//! Reinelt, G. (1991). "TSPLIB — A traveling salesman problem library",
//! *ORSA Journal on Computing* 3(4), 376-384.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TspError;

/// The distance formula family of a TSP instance.
///
/// Parsed from the `EDGE_WEIGHT_TYPE` field of a TSPLIB problem file.
/// Unsupported types fail at parse time, never mid-run.
///
/// # Examples
///
/// ```
/// use tsp_evo::distance::EdgeWeightType;
///
/// let ew: EdgeWeightType = "EUC_2D".parse().unwrap();
/// assert_eq!(ew, EdgeWeightType::Euc2d);
/// assert!((ew.distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-10);
///
/// assert!("EXPLICIT".parse::<EdgeWeightType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeWeightType {
    /// Euclidean distance in the plane, rounded to the nearest integer.
    Euc2d,
    /// Pseudo-Euclidean distance with ceiling-biased rounding, used by
    /// the `att*` benchmark instances.
    Att,
}

impl EdgeWeightType {
    /// Computes the travel cost between two coordinate pairs.
    ///
    /// The result is a non-negative integral value stored as `f64`.
    /// `distance(a, a) == 0` and the function is symmetric.
    pub fn distance(&self, a: (f64, f64), b: (f64, f64)) -> f64 {
        let xd = a.0 - b.0;
        let yd = a.1 - b.1;
        match self {
            EdgeWeightType::Euc2d => (xd * xd + yd * yd).sqrt().round(),
            EdgeWeightType::Att => {
                let rij = ((xd * xd + yd * yd) / 10.0).sqrt();
                let tij = rij.round();
                // TSPLIB's ceiling-biased rule: round up when rounding
                // down would undershoot the true value.
                if tij < rij {
                    tij + 1.0
                } else {
                    tij
                }
            }
        }
    }
}

impl FromStr for EdgeWeightType {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "EUC_2D" => Ok(EdgeWeightType::Euc2d),
            "ATT" => Ok(EdgeWeightType::Att),
            other => Err(TspError::UnsupportedEdgeWeightType(other.to_string())),
        }
    }
}
