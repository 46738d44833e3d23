//! Encoding and decoding helpers between domain types and SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` text, so ordering on the column is
//! chronological. Rows are read back as they are stored: a NULL column
//! becomes `None` on the [`SurveyRecord`].

use survey_core::record::{NewSurvey, SurveyRecord, format_date};

// ─── Insert parameters ───────────────────────────────────────────────────────

/// Owned insert parameters in [`INSERT`](crate::schema::INSERT) order, ready to
/// be moved onto the connection thread.
pub type SurveyParams = (String, i64, String, String, String, String, i64, String);

pub fn encode_new_survey(s: NewSurvey) -> SurveyParams {
  (
    s.respondent_name,
    s.age,
    s.gender,
    s.location,
    format_date(s.survey_date),
    s.category,
    s.score,
    s.notes,
  )
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// Read a row selected with [`COLUMNS`](crate::schema::COLUMNS).
pub fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SurveyRecord> {
  Ok(SurveyRecord {
    id:              row.get(0)?,
    respondent_name: row.get(1)?,
    age:             row.get(2)?,
    gender:          row.get(3)?,
    location:        row.get(4)?,
    survey_date:     row.get(5)?,
    category:        row.get(6)?,
    score:           row.get(7)?,
    notes:           row.get(8)?,
  })
}
