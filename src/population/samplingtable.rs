/// Inverse-transform sampling table over redshift.
///
/// The distribution is point-evaluated at evenly spaced bin edges rather than
/// integrated per bin, so the table's precision is limited by the bin count,
/// not by integral accuracy. That is a deliberate approximation: 10000 bins
/// resolve redshift far below the precision any downstream use needs.
pub struct RedshiftSamplingTable {
    edges: Vec<f64>,
    cdf: Vec<f64>,
}

impl RedshiftSamplingTable {
    /// Builds the table from per-edge distribution values. `edges` must be
    /// strictly increasing and `pdf` non-negative with a positive sum; the
    /// running sum is rescaled so the final entry is exactly 1.
    pub fn new(edges: Vec<f64>, pdf: &[f64]) -> RedshiftSamplingTable {
        debug_assert!(!edges.is_empty());
        debug_assert_eq!(edges.len(), pdf.len());
        let mut cdf = Vec::with_capacity(pdf.len());
        let mut running = 0.0;
        for &value in pdf {
            running += value;
            cdf.push(running);
        }
        let total = running;
        for value in cdf.iter_mut() {
            *value /= total;
        }
        RedshiftSamplingTable { edges, cdf }
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Maps a uniform draw in `[0, 1)` to a redshift: the edge at the first
    /// index whose cumulative value is >= the draw (ties resolve to the
    /// lower index).
    pub fn lookup(&self, draw: f64) -> f64 {
        let index = self.cdf.partition_point(|&c| c < draw);
        self.edges[index.min(self.edges.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_table() -> RedshiftSamplingTable {
        let edges: Vec<f64> = (1..=5).map(|i| i as f64 * 0.1).collect();
        let pdf = vec![1.0; 5];
        RedshiftSamplingTable::new(edges, &pdf)
    }

    #[test]
    fn cdf_is_non_decreasing_and_ends_at_one() {
        let table = uniform_table();
        let cdf = table.cdf();
        assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*cdf.last().unwrap(), 1.0);
    }

    #[test]
    fn lookup_takes_the_first_qualifying_edge() {
        let table = uniform_table();
        assert_eq!(table.lookup(0.0), 0.1);
        assert_eq!(table.lookup(0.2), 0.1);
        assert_eq!(table.lookup(0.21), 0.2);
        assert_eq!(table.lookup(1.0), 0.5);
    }
}
