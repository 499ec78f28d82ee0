//! Mood buckets and aggregate statistics

/// One of the five fixed sentiment ranges a compound score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBucket {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl MoodBucket {
    /// All buckets in display order, most positive first.
    pub const ALL: [MoodBucket; 5] = [
        MoodBucket::VeryPositive,
        MoodBucket::Positive,
        MoodBucket::Neutral,
        MoodBucket::Negative,
        MoodBucket::VeryNegative,
    ];

    /// Classify a compound polarity score.
    ///
    /// Plain range tests; every score in [-1.0, 1.0] lands in exactly one
    /// bucket.
    pub fn classify(score: f64) -> MoodBucket {
        if score >= 0.5 {
            MoodBucket::VeryPositive
        } else if score >= 0.1 {
            MoodBucket::Positive
        } else if score >= -0.1 {
            MoodBucket::Neutral
        } else if score >= -0.5 {
            MoodBucket::Negative
        } else {
            MoodBucket::VeryNegative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodBucket::VeryPositive => "Very Positive",
            MoodBucket::Positive => "Positive",
            MoodBucket::Neutral => "Neutral",
            MoodBucket::Negative => "Negative",
            MoodBucket::VeryNegative => "Very Negative",
        }
    }

    /// The numeric range shown in the report legend.
    pub fn range_label(&self) -> &'static str {
        match self {
            MoodBucket::VeryPositive => "+0.5 to +1.0",
            MoodBucket::Positive => "+0.1 to +0.5",
            MoodBucket::Neutral => "-0.1 to +0.1",
            MoodBucket::Negative => "-0.5 to -0.1",
            MoodBucket::VeryNegative => "-1.0 to -0.5",
        }
    }

    fn index(&self) -> usize {
        match self {
            MoodBucket::VeryPositive => 0,
            MoodBucket::Positive => 1,
            MoodBucket::Neutral => 2,
            MoodBucket::Negative => 3,
            MoodBucket::VeryNegative => 4,
        }
    }
}

/// Per-bucket statistics. `min`/`max`/`mean` are Some iff `count > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BucketStats {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Fixed five-row mood distribution table, one row per bucket in display
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoodMatrix {
    rows: [BucketStats; 5],
}

impl MoodMatrix {
    /// Build the distribution from per-entry scores.
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut counts = [0usize; 5];
        let mut mins = [f64::INFINITY; 5];
        let mut maxs = [f64::NEG_INFINITY; 5];
        let mut sums = [0.0f64; 5];

        for &score in scores {
            let i = MoodBucket::classify(score).index();
            counts[i] += 1;
            mins[i] = mins[i].min(score);
            maxs[i] = maxs[i].max(score);
            sums[i] += score;
        }

        let mut rows = [BucketStats::default(); 5];
        for i in 0..5 {
            if counts[i] > 0 {
                rows[i] = BucketStats {
                    count: counts[i],
                    min: Some(mins[i]),
                    max: Some(maxs[i]),
                    mean: Some(sums[i] / counts[i] as f64),
                };
            }
        }

        MoodMatrix { rows }
    }

    pub fn bucket(&self, bucket: MoodBucket) -> &BucketStats {
        &self.rows[bucket.index()]
    }

    /// Rows in display order, paired with their bucket.
    pub fn rows(&self) -> impl Iterator<Item = (MoodBucket, &BucketStats)> {
        MoodBucket::ALL.iter().map(move |b| (*b, self.bucket(*b)))
    }

    pub fn total_count(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }
}

/// Aggregate analysis result. Recomputed on every analysis request and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_count: usize,
    pub average_mood: f64,
    pub top_themes: Vec<String>,
    pub mood_matrix: MoodMatrix,
}

/// Round to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(MoodBucket::classify(1.0), MoodBucket::VeryPositive);
        assert_eq!(MoodBucket::classify(0.5), MoodBucket::VeryPositive);
        assert_eq!(MoodBucket::classify(0.49), MoodBucket::Positive);
        assert_eq!(MoodBucket::classify(0.1), MoodBucket::Positive);
        assert_eq!(MoodBucket::classify(0.09), MoodBucket::Neutral);
        assert_eq!(MoodBucket::classify(0.0), MoodBucket::Neutral);
        assert_eq!(MoodBucket::classify(-0.1), MoodBucket::Neutral);
        assert_eq!(MoodBucket::classify(-0.11), MoodBucket::Negative);
        assert_eq!(MoodBucket::classify(-0.5), MoodBucket::Negative);
        assert_eq!(MoodBucket::classify(-0.51), MoodBucket::VeryNegative);
        assert_eq!(MoodBucket::classify(-1.0), MoodBucket::VeryNegative);
    }

    #[test]
    fn test_every_score_in_exactly_one_bucket() {
        // Sweep [-1.0, 1.0]; counts must sum to the number of scores.
        let scores: Vec<f64> = (-100..=100).map(|i| i as f64 / 100.0).collect();
        let matrix = MoodMatrix::from_scores(&scores);
        assert_eq!(matrix.total_count(), scores.len());
    }

    #[test]
    fn test_matrix_from_scores() {
        let scores = [0.8, 0.6, 0.2, 0.0, -0.3, -0.9];
        let matrix = MoodMatrix::from_scores(&scores);

        let very_positive = matrix.bucket(MoodBucket::VeryPositive);
        assert_eq!(very_positive.count, 2);
        assert_eq!(very_positive.min, Some(0.6));
        assert_eq!(very_positive.max, Some(0.8));
        assert!((very_positive.mean.unwrap() - 0.7).abs() < 1e-9);

        assert_eq!(matrix.bucket(MoodBucket::Positive).count, 1);
        assert_eq!(matrix.bucket(MoodBucket::Neutral).count, 1);
        assert_eq!(matrix.bucket(MoodBucket::Negative).count, 1);
        assert_eq!(matrix.bucket(MoodBucket::VeryNegative).count, 1);
    }

    #[test]
    fn test_empty_bucket_has_no_extremes() {
        let matrix = MoodMatrix::from_scores(&[0.9]);
        let neutral = matrix.bucket(MoodBucket::Neutral);
        assert_eq!(neutral.count, 0);
        assert_eq!(neutral.min, None);
        assert_eq!(neutral.max, None);
        assert_eq!(neutral.mean, None);
    }

    #[test]
    fn test_rows_in_display_order() {
        let matrix = MoodMatrix::from_scores(&[]);
        let labels: Vec<&str> = matrix.rows().map(|(b, _)| b.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Very Positive",
                "Positive",
                "Neutral",
                "Negative",
                "Very Negative"
            ]
        );
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.6 / 3.0), 0.2);
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(-0.0005), -0.001);
    }
}
