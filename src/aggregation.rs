//! Per-dimension rating averages computed on demand.

use crate::types::{DimensionCoverage, RatingRecord, RatingSummary};

/// Average each rating dimension over the records that supply it.
///
/// A dimension with no contributing record is `0.0`. Non-finite values are
/// ignored so the result never contains `NaN`.
pub fn compute_summary(records: &[RatingRecord]) -> RatingSummary {
    RatingSummary {
        overall: average(records.iter().map(|r| Some(r.overall))),
        wifi: average(records.iter().map(|r| r.wifi)),
        power: average(records.iter().map(|r| r.power)),
        noise: average(records.iter().map(|r| r.noise)),
        coffee: average(records.iter().map(|r| r.coffee)),
    }
}

/// How many records contribute to each dimension
pub fn coverage(records: &[RatingRecord]) -> DimensionCoverage {
    let count = |pick: fn(&RatingRecord) -> Option<f64>| {
        records
            .iter()
            .filter_map(pick)
            .filter(|v| v.is_finite())
            .count()
    };

    DimensionCoverage {
        overall: count(|r| Some(r.overall)),
        wifi: count(|r| r.wifi),
        power: count(|r| r.power),
        noise: count(|r| r.noise),
        coffee: count(|r| r.coffee),
    }
}

/// Round half up to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

fn average(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let mut present: Vec<f64> = values.flatten().filter(|v| v.is_finite()).collect();
    if present.is_empty() {
        return 0.0;
    }

    // Fixed summation order keeps the result independent of input order.
    present.sort_by(f64::total_cmp);
    let sum: f64 = present.iter().sum();
    round_one_decimal(sum / present.len() as f64)
}

impl RatingSummary {
    pub fn from_records(records: &[RatingRecord]) -> Self {
        compute_summary(records)
    }
}
