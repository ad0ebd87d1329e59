use color_eyre::eyre;
use color_eyre::Report;

/// Fixed-bin histogram of weighted samples.
///
/// Samples are spread over `bins` equal-width bins spanning the sample range;
/// each sample adds its weight to the bin covering its value. The maximum
/// sample lands in the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    start: f64,
    bin_width: f64,
    weights: Vec<u64>,
}

impl Histogram {
    pub fn from_weighted(
        samples: &[(f64, u64)],
        bins: usize,
    ) -> Result<Self, Report> {
        if bins == 0 {
            eyre::bail!("histogram needs at least one bin");
        }
        if samples.is_empty() {
            eyre::bail!("histogram needs at least one sample");
        }

        // compute the sample range
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (value, _) in samples {
            min = min.min(*value);
            max = max.max(*value);
        }

        // a single-valued range still spans one unit, centered on the value
        let (start, span) = if max > min {
            (min, max - min)
        } else {
            (min - 0.5, 1.0)
        };
        let bin_width = span / bins as f64;

        let mut weights = vec![0; bins];
        for (value, weight) in samples {
            let index = ((value - start) / bin_width) as usize;
            let index = index.min(bins - 1);
            weights[index] += weight;
        }

        Ok(Self {
            start,
            bin_width,
            weights,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.weights.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Left edge of each bin.
    pub fn edges(&self) -> Vec<f64> {
        (0..self.weights.len())
            .map(|index| self.start + index as f64 * self.bin_width)
            .collect()
    }

    /// Summed sample weight per bin.
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn bin_count_and_weight_are_preserved(
        samples: Vec<(i16, u8)>,
        bins: usize,
    ) -> bool {
        let bins = 1 + bins % 512;
        let samples: Vec<_> = samples
            .iter()
            .map(|(value, weight)| (*value as f64, *weight as u64))
            .collect();

        match Histogram::from_weighted(&samples, bins) {
            Ok(histogram) => {
                let total: u64 =
                    samples.iter().map(|(_, weight)| weight).sum();
                histogram.bin_count() == bins
                    && histogram.total_weight() == total
            }
            // only empty inputs are rejected
            Err(_) => samples.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_count_is_fixed() {
        let one = Histogram::from_weighted(&[(3.5, 9)], 150)
            .expect("histogram should build");
        assert_eq!(one.bin_count(), 150);

        let samples: Vec<_> = (0..300).map(|i| (i as f64, 1)).collect();
        let many = Histogram::from_weighted(&samples, 150)
            .expect("histogram should build");
        assert_eq!(many.bin_count(), 150);
        assert_eq!(many.total_weight(), 300);
    }

    #[test]
    fn maximum_sample_lands_in_the_last_bin() {
        let samples = vec![(0.0, 1), (1.0, 1), (2.0, 1), (3.0, 1)];
        let histogram = Histogram::from_weighted(&samples, 2)
            .expect("histogram should build");
        assert_eq!(histogram.weights(), &[2u64, 2][..]);
    }

    #[test]
    fn degenerate_span_still_bins() {
        let histogram = Histogram::from_weighted(&[(5.0, 7)], 3)
            .expect("histogram should build");
        assert_eq!(histogram.bin_count(), 3);
        assert_eq!(histogram.total_weight(), 7);
        assert_eq!(histogram.weights()[1], 7);
    }

    #[test]
    fn edges_are_equally_spaced() {
        let samples = vec![(0.0, 1), (30.0, 1)];
        let histogram = Histogram::from_weighted(&samples, 3)
            .expect("histogram should build");
        assert_eq!(histogram.edges(), vec![0.0, 10.0, 20.0]);
        assert_eq!(histogram.bin_width(), 10.0);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(Histogram::from_weighted(&[], 150).is_err());
    }
}
