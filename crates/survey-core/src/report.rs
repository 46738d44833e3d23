//! The narrative survey report: percentage shares and rated category
//! performance, derived from a [`StatisticsReport`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stats::{StatisticsReport, round_to, round2};

/// Verbal rating of a mean score on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLabel {
  #[serde(rename = "Sangat Baik")]
  SangatBaik,
  #[serde(rename = "Baik")]
  Baik,
  #[serde(rename = "Cukup")]
  Cukup,
  #[serde(rename = "Kurang")]
  Kurang,
  #[serde(rename = "Sangat Kurang")]
  SangatKurang,
}

impl ScoreLabel {
  pub fn for_score(score: f64) -> Self {
    match score {
      s if s >= 90.0 => Self::SangatBaik,
      s if s >= 80.0 => Self::Baik,
      s if s >= 70.0 => Self::Cukup,
      s if s >= 60.0 => Self::Kurang,
      _ => Self::SangatKurang,
    }
  }
}

/// One group's slice of the respondents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
  pub name:    String,
  pub count:   u64,
  /// Percentage of all respondents, one decimal place.
  pub percent: f64,
}

/// Mean score of one category with its rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPerformance {
  pub category:      String,
  /// Two decimal places; `None` when the category has no scores.
  pub average_score: Option<f64>,
  pub label:         Option<ScoreLabel>,
}

/// Body of `GET /api/report`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
  pub total_respondents: u64,
  pub average_score:     f64,
  pub average_label:     ScoreLabel,
  pub location_count:    usize,
  pub category_count:    usize,
  pub gender:            Vec<Share>,
  pub categories:        Vec<Share>,
  pub locations:         Vec<Share>,
  pub performance:       Vec<CategoryPerformance>,
}

fn shares(distribution: &BTreeMap<String, u64>, total: u64) -> Vec<Share> {
  distribution
    .iter()
    .map(|(name, &count)| Share {
      name: name.clone(),
      count,
      percent: if total == 0 {
        0.0
      } else {
        round_to(count as f64 * 100.0 / total as f64, 1)
      },
    })
    .collect()
}

impl SurveyReport {
  pub fn from_statistics(stats: &StatisticsReport) -> Self {
    let total = stats.total_respondents;
    let performance = stats
      .score_by_category
      .iter()
      .map(|(category, &mean)| CategoryPerformance {
        category:      category.clone(),
        average_score: mean.map(round2),
        label:         mean.map(ScoreLabel::for_score),
      })
      .collect();

    Self {
      total_respondents: total,
      average_score: stats.average_score,
      average_label: ScoreLabel::for_score(stats.average_score),
      location_count: stats.location_distribution.len(),
      category_count: stats.category_distribution.len(),
      gender: shares(&stats.gender_distribution, total),
      categories: shares(&stats.category_distribution, total),
      locations: shares(&stats.location_distribution, total),
      performance,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{record::SurveyRecord, seed::seed_surveys};

  fn seed_statistics() -> StatisticsReport {
    let records: Vec<SurveyRecord> = seed_surveys()
      .unwrap()
      .into_iter()
      .enumerate()
      .map(|(i, s)| SurveyRecord::new(i as i64 + 1, s))
      .collect();
    StatisticsReport::from_records(&records)
  }

  #[test]
  fn label_boundaries() {
    assert_eq!(ScoreLabel::for_score(100.0), ScoreLabel::SangatBaik);
    assert_eq!(ScoreLabel::for_score(90.0), ScoreLabel::SangatBaik);
    assert_eq!(ScoreLabel::for_score(89.99), ScoreLabel::Baik);
    assert_eq!(ScoreLabel::for_score(80.0), ScoreLabel::Baik);
    assert_eq!(ScoreLabel::for_score(70.0), ScoreLabel::Cukup);
    assert_eq!(ScoreLabel::for_score(60.0), ScoreLabel::Kurang);
    assert_eq!(ScoreLabel::for_score(59.9), ScoreLabel::SangatKurang);
    assert_eq!(ScoreLabel::for_score(0.0), ScoreLabel::SangatKurang);
  }

  #[test]
  fn label_serialises_as_rating_text() {
    assert_eq!(
      serde_json::to_value(ScoreLabel::SangatBaik).unwrap(),
      "Sangat Baik"
    );
    assert_eq!(
      serde_json::to_value(ScoreLabel::SangatKurang).unwrap(),
      "Sangat Kurang"
    );
  }

  #[test]
  fn seed_report_shares_and_performance() {
    let report = SurveyReport::from_statistics(&seed_statistics());

    assert_eq!(report.total_respondents, 8);
    assert_eq!(report.average_label, ScoreLabel::Baik);
    assert_eq!(report.location_count, 4);
    assert_eq!(report.category_count, 3);

    let perempuan = report.gender.iter().find(|s| s.name == "Perempuan").unwrap();
    assert_eq!((perempuan.count, perempuan.percent), (4, 50.0));

    let ekonomi = report.categories.iter().find(|s| s.name == "Ekonomi").unwrap();
    assert_eq!(ekonomi.percent, 25.0);

    let kesehatan = report
      .performance
      .iter()
      .find(|p| p.category == "Kesehatan")
      .unwrap();
    // (85 + 75 + 92) / 3 = 84
    assert_eq!(kesehatan.average_score, Some(84.0));
    assert_eq!(kesehatan.label, Some(ScoreLabel::Baik));

    let ekonomi = report
      .performance
      .iter()
      .find(|p| p.category == "Ekonomi")
      .unwrap();
    assert_eq!(ekonomi.label, Some(ScoreLabel::Cukup));
  }

  #[test]
  fn shares_round_to_one_decimal() {
    let mut stats = StatisticsReport {
      total_respondents: 3,
      ..Default::default()
    };
    stats.location_distribution.insert("Jakarta".into(), 1);
    stats.location_distribution.insert("Medan".into(), 2);

    let report = SurveyReport::from_statistics(&stats);
    assert_eq!(report.locations[0].percent, 33.3);
    assert_eq!(report.locations[1].percent, 66.7);
  }

  #[test]
  fn empty_statistics_give_empty_report() {
    let report = SurveyReport::from_statistics(&StatisticsReport::default());
    assert_eq!(report.total_respondents, 0);
    assert!(report.gender.is_empty());
    assert!(report.performance.is_empty());
    assert_eq!(report.average_label, ScoreLabel::SangatKurang);
  }

  #[test]
  fn category_without_scores_has_no_label() {
    let mut stats = StatisticsReport {
      total_respondents: 1,
      ..Default::default()
    };
    stats.category_distribution.insert("Ekonomi".into(), 1);
    stats.score_by_category.insert("Ekonomi".into(), None);

    let report = SurveyReport::from_statistics(&stats);
    assert_eq!(report.performance[0].average_score, None);
    assert_eq!(report.performance[0].label, None);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["performance"][0]["label"].is_null());
  }
}
