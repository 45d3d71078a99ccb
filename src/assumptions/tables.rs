//! Sparse price tables with linear interpolation
//!
//! Reference prices (boat hulls, crew payrolls) are quoted at a handful of
//! sizes. Queries between quoted sizes interpolate linearly; queries above
//! the table extrapolate from the top two entries, capped at twice the
//! largest quoted price so extreme inputs stay plausible.

/// A sparse numeric-keyed price table, sorted by key
#[derive(Debug, Clone)]
pub struct PriceTable {
    /// (key, price) pairs in ascending key order
    points: Vec<(f64, f64)>,
}

impl PriceTable {
    /// Build a table from (key, price) points; points are sorted internally
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let mut points = points.to_vec();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { points }
    }

    /// Number of quoted points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Price at `key`, interpolating between quoted points.
    ///
    /// Below the smallest key returns the smallest quoted price. Above the
    /// largest key extrapolates on the slope of the top two entries, capped
    /// at 2x the largest quoted price.
    pub fn value_at(&self, key: f64) -> f64 {
        let (first_key, first_price) = match self.points.first() {
            Some(&point) => point,
            None => return 0.0,
        };
        let (last_key, last_price) = self.points[self.points.len() - 1];

        if key <= first_key || self.points.len() == 1 {
            return first_price;
        }
        if key >= last_key {
            let &(prev_key, prev_price) = &self.points[self.points.len() - 2];
            let slope = (last_price - prev_price) / (last_key - prev_key);
            let extrapolated = last_price + slope * (key - last_key);
            return extrapolated.min(last_price * 2.0);
        }

        for window in self.points.windows(2) {
            let (lo_key, lo_price) = window[0];
            let (hi_key, hi_price) = window[1];
            if lo_key <= key && key <= hi_key {
                let frac = (key - lo_key) / (hi_key - lo_key);
                return lo_price + frac * (hi_price - lo_price);
            }
        }

        last_price
    }
}
