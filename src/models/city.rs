//! City type.

use serde::{Deserialize, Serialize};

/// A city in a TSP instance: an index paired with 2D coordinates.
///
/// Coordinates are immutable once loaded. City 0 is conventionally the
/// tour's fixed starting city.
///
/// # Examples
///
/// ```
/// use tsp_evo::models::City;
///
/// let c = City::new(3, 41.0, 49.0);
/// assert_eq!(c.id(), 3);
/// assert_eq!(c.coords(), (41.0, 49.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City index in `[0, N)`.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinate pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_accessors() {
        let c = City::new(5, 1.5, -2.5);
        assert_eq!(c.id(), 5);
        assert_eq!(c.x(), 1.5);
        assert_eq!(c.y(), -2.5);
        assert_eq!(c.coords(), (1.5, -2.5));
    }
}
