//! Survey records, the single entity of the survey store.
//!
//! A [`SurveyRecord`] is one respondent's answer sheet. Records are created
//! from a fully-populated [`NewSurvey`], read back in bulk, and deleted by id.
//! There is no update path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Storage and wire format of `survey_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted survey response. `id` is assigned by the store and never
/// reused.
///
/// Every other column is nullable in storage, so a stored row is returned as
/// it is: a NULL column is `None` and serialises as `null`. `survey_date` is
/// the stored text, which is `YYYY-MM-DD` for every row written through
/// [`NewSurvey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
  pub id:              i64,
  pub respondent_name: Option<String>,
  pub age:             Option<i64>,
  pub gender:          Option<String>,
  pub location:        Option<String>,
  pub survey_date:     Option<String>,
  pub category:        Option<String>,
  pub score:           Option<i64>,
  pub notes:           Option<String>,
}

impl SurveyRecord {
  /// The record a store holds after inserting `survey` under `id`.
  pub fn new(id: i64, survey: NewSurvey) -> Self {
    Self {
      id,
      respondent_name: Some(survey.respondent_name),
      age:             Some(survey.age),
      gender:          Some(survey.gender),
      location:        Some(survey.location),
      survey_date:     Some(format_date(survey.survey_date)),
      category:        Some(survey.category),
      score:           Some(survey.score),
      notes:           Some(survey.notes),
    }
  }
}

/// Input to [`SurveyStore::insert`](crate::store::SurveyStore::insert): every
/// field of a record except `id`, all required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurvey {
  pub respondent_name: String,
  pub age:             i64,
  pub gender:          String,
  pub location:        String,
  pub survey_date:     NaiveDate,
  pub category:        String,
  pub score:           i64,
  pub notes:           String,
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

/// An integer that may arrive either as a JSON number or as a string holding
/// one, which is what HTML form submissions produce.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntField {
  Int(i64),
  Text(String),
}

impl IntField {
  fn parse(self, field: &'static str) -> Result<i64> {
    match self {
      IntField::Int(n) => Ok(n),
      IntField::Text(s) => s.trim().parse().map_err(|_| Error::InvalidField {
        field,
        reason: format!("expected an integer, got {s:?}"),
      }),
    }
  }
}

/// An unvalidated survey submission. Every field is optional so that absent
/// keys and explicit `null`s are both caught by [`SurveyDraft::validate`]
/// rather than by the deserialiser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyDraft {
  pub respondent_name: Option<String>,
  pub age:             Option<IntField>,
  pub gender:          Option<String>,
  pub location:        Option<String>,
  pub survey_date:     Option<String>,
  pub category:        Option<String>,
  pub score:           Option<IntField>,
  pub notes:           Option<String>,
}

impl SurveyDraft {
  /// Check that all eight fields are present, then parse the typed ones.
  ///
  /// Missing fields are reported together, in declaration order, before any
  /// value is inspected.
  pub fn validate(self) -> Result<NewSurvey> {
    let missing: Vec<&'static str> = [
      ("respondent_name", self.respondent_name.is_none()),
      ("age", self.age.is_none()),
      ("gender", self.gender.is_none()),
      ("location", self.location.is_none()),
      ("survey_date", self.survey_date.is_none()),
      ("category", self.category.is_none()),
      ("score", self.score.is_none()),
      ("notes", self.notes.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, absent)| absent.then_some(field))
    .collect();

    let (
      Some(respondent_name),
      Some(age),
      Some(gender),
      Some(location),
      Some(survey_date),
      Some(category),
      Some(score),
      Some(notes),
    ) = (
      self.respondent_name,
      self.age,
      self.gender,
      self.location,
      self.survey_date,
      self.category,
      self.score,
      self.notes,
    )
    else {
      return Err(Error::MissingField(missing));
    };

    Ok(NewSurvey {
      respondent_name,
      age: age.parse("age")?,
      gender,
      location,
      survey_date: parse_date(&survey_date)?,
      category,
      score: score.parse("score")?,
      notes,
    })
  }
}

/// Render a date in the stored `YYYY-MM-DD` form.
pub fn format_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
    Error::InvalidField {
      field:  "survey_date",
      reason: format!("{s:?} is not a YYYY-MM-DD date: {e}"),
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn draft(json: &str) -> SurveyDraft {
    serde_json::from_str(json).expect("draft json")
  }

  const FULL: &str = r#"{
    "respondent_name": "Ahmad",
    "age": 25,
    "gender": "Laki-laki",
    "location": "Jakarta",
    "survey_date": "2024-10-01",
    "category": "Kesehatan",
    "score": 85,
    "notes": "Baik"
  }"#;

  #[test]
  fn complete_draft_validates() {
    let survey = draft(FULL).validate().unwrap();
    assert_eq!(survey.respondent_name, "Ahmad");
    assert_eq!(survey.age, 25);
    assert_eq!(survey.score, 85);
    assert_eq!(
      survey.survey_date,
      NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    );
  }

  #[test]
  fn numeric_strings_are_accepted() {
    let json = FULL.replace("\"age\": 25", "\"age\": \"25\"").replace(
      "\"score\": 85",
      "\"score\": \" 85 \"",
    );
    let survey = draft(&json).validate().unwrap();
    assert_eq!(survey.age, 25);
    assert_eq!(survey.score, 85);
  }

  #[test]
  fn missing_score_is_reported() {
    let json = FULL.replace("\"score\": 85,", "");
    match draft(&json).validate() {
      Err(Error::MissingField(fields)) => assert_eq!(fields, vec!["score"]),
      other => panic!("expected MissingField, got {other:?}"),
    }
  }

  #[test]
  fn null_counts_as_missing() {
    let json = FULL.replace("\"notes\": \"Baik\"", "\"notes\": null");
    match draft(&json).validate() {
      Err(Error::MissingField(fields)) => assert_eq!(fields, vec!["notes"]),
      other => panic!("expected MissingField, got {other:?}"),
    }
  }

  #[test]
  fn empty_object_lists_every_field_in_order() {
    match draft("{}").validate() {
      Err(Error::MissingField(fields)) => assert_eq!(
        fields,
        vec![
          "respondent_name",
          "age",
          "gender",
          "location",
          "survey_date",
          "category",
          "score",
          "notes",
        ]
      ),
      other => panic!("expected MissingField, got {other:?}"),
    }
  }

  #[test]
  fn non_numeric_age_is_invalid() {
    let json = FULL.replace("\"age\": 25", "\"age\": \"twenty\"");
    assert!(matches!(
      draft(&json).validate(),
      Err(Error::InvalidField { field: "age", .. })
    ));
  }

  #[test]
  fn malformed_date_is_invalid() {
    let json = FULL.replace("2024-10-01", "01/10/2024");
    assert!(matches!(
      draft(&json).validate(),
      Err(Error::InvalidField { field: "survey_date", .. })
    ));
  }

  #[test]
  fn record_serialises_date_as_iso_string() {
    let survey = draft(FULL).validate().unwrap();
    let record = SurveyRecord::new(7, survey);
    assert_eq!(record.survey_date.as_deref(), Some("2024-10-01"));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["survey_date"], "2024-10-01");
    assert_eq!(json["score"], 85);
  }

  #[test]
  fn null_columns_serialise_as_null() {
    let record = SurveyRecord {
      id:              9,
      respondent_name: Some("Ghost".into()),
      age:             None,
      gender:          None,
      location:        None,
      survey_date:     None,
      category:        None,
      score:           None,
      notes:           None,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["respondent_name"], "Ghost");
    assert!(json["age"].is_null());
    assert!(json["notes"].is_null());
  }
}
