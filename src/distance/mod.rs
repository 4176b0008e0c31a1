//! Edge-weight formulas.
//!
//! TSPLIB instances declare their distance formula family through the
//! `EDGE_WEIGHT_TYPE` field. This module implements the two families used
//! by the supported benchmark instances: plane Euclidean (`EUC_2D`) and
//! pseudo-Euclidean (`ATT`).

mod edge_weight;

pub use edge_weight::EdgeWeightType;
