//! Aggregate statistics over the full record set.
//!
//! The report is computed in one pass over a single snapshot of records, so
//! every figure in it describes the same data.
//!
//! NULL columns follow SQL aggregate rules: a NULL group value is counted
//! under the key [`NULL_KEY`], and a NULL score is left out of every mean.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::SurveyRecord;

/// Distribution key for records whose grouping column is NULL.
pub const NULL_KEY: &str = "null";

/// Summary figures served by `GET /api/statistics`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsReport {
  /// Every stored row, including rows with NULL columns.
  pub total_respondents:     u64,
  /// Mean of the non-NULL scores, rounded to two decimals; `0` when there
  /// are none.
  pub average_score:         f64,
  pub gender_distribution:   BTreeMap<String, u64>,
  pub category_distribution: BTreeMap<String, u64>,
  pub location_distribution: BTreeMap<String, u64>,
  /// Mean score per category, not rounded. `None` for a category whose
  /// scores are all NULL.
  pub score_by_category:     BTreeMap<String, Option<f64>>,
}

#[derive(Default)]
struct Mean {
  count: u64,
  sum:   i128,
}

impl Mean {
  fn add(&mut self, score: Option<i64>) {
    if let Some(score) = score {
      self.count += 1;
      self.sum += i128::from(score);
    }
  }

  fn value(&self) -> Option<f64> {
    (self.count > 0).then(|| self.sum as f64 / self.count as f64)
  }
}

fn group_key(value: Option<&String>) -> String {
  value.map_or_else(|| NULL_KEY.to_owned(), Clone::clone)
}

impl StatisticsReport {
  pub fn from_records<'a, I>(records: I) -> Self
  where
    I: IntoIterator<Item = &'a SurveyRecord>,
  {
    let mut total: u64 = 0;
    let mut overall = Mean::default();
    let mut gender_distribution = BTreeMap::new();
    let mut location_distribution = BTreeMap::new();
    // category -> (row count, score mean)
    let mut categories: BTreeMap<String, (u64, Mean)> = BTreeMap::new();

    for record in records {
      total += 1;
      overall.add(record.score);
      *gender_distribution
        .entry(group_key(record.gender.as_ref()))
        .or_insert(0) += 1;
      *location_distribution
        .entry(group_key(record.location.as_ref()))
        .or_insert(0) += 1;

      let entry = categories
        .entry(group_key(record.category.as_ref()))
        .or_default();
      entry.0 += 1;
      entry.1.add(record.score);
    }

    let average_score = overall.value().map_or(0.0, round2);

    let category_distribution = categories
      .iter()
      .map(|(category, (count, _))| (category.clone(), *count))
      .collect();

    let score_by_category = categories
      .into_iter()
      .map(|(category, (_, mean))| (category, mean.value()))
      .collect();

    Self {
      total_respondents: total,
      average_score,
      gender_distribution,
      category_distribution,
      location_distribution,
      score_by_category,
    }
  }
}

/// Round to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
  let scale = 10_f64.powi(decimals);
  (value * scale).round_ties_even() / scale
}

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 { round_to(value, 2) }
