//! TSPLIB file loading.
//!
//! Two collaborating loaders, both executed before the evolutionary loop
//! ever starts:
//!
//! - [`load_problem`] / [`parse_problem`] — a problem description with
//!   `DIMENSION`, `EDGE_WEIGHT_TYPE`, and `NODE_COORD_SECTION` markers
//! - [`load_tour`] / [`parse_tour`] — a known-optimal tour file with a
//!   `TOUR_SECTION` of 1-based city indices, used only for
//!   percent-above-optimal reporting

mod problem;
mod tour;

pub use problem::{load_problem, parse_problem};
pub use tour::{load_tour, parse_tour};
