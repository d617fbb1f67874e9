/// Summary statistics describing a numeric sample.
///
/// This structure contains the measures of central tendency and dispersion
/// reported for every benchmark metric.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean (average) of the sample.
    pub mean: f64,
    /// The median value of the sample. For an even-length sample this is the
    /// average of the two middle order statistics.
    pub median: f64,
    /// The sample standard deviation (Bessel-corrected, divisor n - 1).
    /// Defined as `0` for a single-element sample.
    pub std_dev: f64,
    /// The arithmetic sum of the sample.
    pub total: f64,
}

impl StatSummary {
    /// Computes summary statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(StatSummary)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use gatebench_stats::descriptive::StatSummary;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let summary = StatSummary::new(values).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.total, 15.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes summary statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(StatSummary)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gatebench_stats::descriptive::StatSummary;
    /// let mut values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// values.sort_by(f64::total_cmp);
    /// let summary = StatSummary::from_sorted(&values).unwrap();
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let total = sorted_values.iter().copied().sum::<f64>();
        let count = sorted_values.len();
        let n = count as f64;
        let mean = total / n;
        let mid = count / 2;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };
        // Sample standard deviation; a single observation has no spread.
        let std_dev = if count <= 1 {
            0.0
        } else {
            let sum_sq = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        };

        Some(Self {
            min,
            max,
            mean,
            median,
            std_dev,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_yields_none() {
        assert_eq!(StatSummary::new([]), None);
        assert_eq!(StatSummary::from_sorted(&[]), None);
    }

    #[test]
    fn singleton_sample() {
        let summary = StatSummary::new([5.0]).unwrap();
        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.total, 5.0);
    }

    #[test]
    fn even_length_sample() {
        let summary = StatSummary::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.total, 10.0);
    }

    #[test]
    fn odd_length_median_is_middle_value() {
        let summary = StatSummary::new([9.0, 1.0, 5.0]).unwrap();
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn std_dev_is_bessel_corrected() {
        // Sample variance of [2, 4, 4, 4, 5, 5, 7, 9] is 32 / 7.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = StatSummary::new(values).unwrap();
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((summary.std_dev - expected).abs() < 1e-12);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = StatSummary::new([3.0, 1.0, 4.0, 1.0, 5.0]).unwrap();
        let b = StatSummary::new([5.0, 4.0, 3.0, 1.0, 1.0]).unwrap();
        assert_eq!(a, b);
    }
}
