//! Age bucket classification and running distribution tallies

use serde::{Deserialize, Serialize};

/// Mutually exclusive, exhaustive age ranges for distribution reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    /// age < 20
    Under20,
    /// 20 <= age <= 40
    From20To40,
    /// 40 < age <= 60
    From41To60,
    /// age > 60
    Over60,
}

impl AgeBucket {
    /// All buckets in reporting order
    pub const ALL: [AgeBucket; 4] = [
        AgeBucket::Under20,
        AgeBucket::From20To40,
        AgeBucket::From41To60,
        AgeBucket::Over60,
    ];

    /// Classify an age, first match wins
    ///
    /// Boundary semantics: 20 and 40 fall in the 20-40 bucket, 60 falls in
    /// the 41-60 bucket.
    pub fn classify(age: i32) -> Self {
        if age < 20 {
            AgeBucket::Under20
        } else if age <= 40 {
            AgeBucket::From20To40
        } else if age <= 60 {
            AgeBucket::From41To60
        } else {
            AgeBucket::Over60
        }
    }

    /// Human-readable range label
    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Under20 => "< 20",
            AgeBucket::From20To40 => "20 to 40",
            AgeBucket::From41To60 => "41 to 60",
            AgeBucket::Over60 => "> 60",
        }
    }
}

/// Running tallies, one per age bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeCounters {
    pub under_20: u64,
    pub from_20_to_40: u64,
    pub from_41_to_60: u64,
    pub over_60: u64,
}

impl AgeCounters {
    /// Classify one age and bump its bucket
    pub fn record(&mut self, age: i32) {
        match AgeBucket::classify(age) {
            AgeBucket::Under20 => self.under_20 += 1,
            AgeBucket::From20To40 => self.from_20_to_40 += 1,
            AgeBucket::From41To60 => self.from_41_to_60 += 1,
            AgeBucket::Over60 => self.over_60 += 1,
        }
    }

    /// Tally for one bucket
    pub fn count(&self, bucket: AgeBucket) -> u64 {
        match bucket {
            AgeBucket::Under20 => self.under_20,
            AgeBucket::From20To40 => self.from_20_to_40,
            AgeBucket::From41To60 => self.from_41_to_60,
            AgeBucket::Over60 => self.over_60,
        }
    }

    /// Total records tallied across all buckets
    pub fn total(&self) -> u64 {
        self.under_20 + self.from_20_to_40 + self.from_41_to_60 + self.over_60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(AgeBucket::classify(19), AgeBucket::Under20);
        assert_eq!(AgeBucket::classify(20), AgeBucket::From20To40);
        assert_eq!(AgeBucket::classify(40), AgeBucket::From20To40);
        assert_eq!(AgeBucket::classify(41), AgeBucket::From41To60);
        assert_eq!(AgeBucket::classify(60), AgeBucket::From41To60);
        assert_eq!(AgeBucket::classify(61), AgeBucket::Over60);
    }

    #[test]
    fn test_negative_age_lands_in_lowest_bucket() {
        assert_eq!(AgeBucket::classify(-3), AgeBucket::Under20);
    }

    #[test]
    fn test_counters_accumulate_and_total() {
        let mut counters = AgeCounters::default();
        for age in [5, 20, 40, 41, 60, 61, 99] {
            counters.record(age);
        }
        assert_eq!(counters.under_20, 1);
        assert_eq!(counters.from_20_to_40, 2);
        assert_eq!(counters.from_41_to_60, 2);
        assert_eq!(counters.over_60, 2);
        assert_eq!(counters.total(), 7);
    }

    #[test]
    fn test_count_by_bucket_matches_fields() {
        let mut counters = AgeCounters::default();
        counters.record(30);
        counters.record(70);
        assert_eq!(counters.count(AgeBucket::From20To40), 1);
        assert_eq!(counters.count(AgeBucket::Over60), 1);
        assert_eq!(counters.count(AgeBucket::Under20), 0);
    }
}
