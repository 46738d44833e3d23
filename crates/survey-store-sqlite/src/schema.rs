//! SQL schema for the survey SQLite store.
//!
//! Executed on every open and again by `initialize`. `PRAGMA user_version`
//! records the layout; there are no migrations.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
-- AUTOINCREMENT keeps ids monotonic: a deleted id is never handed out again.
-- Columns are nullable; presence is enforced before insert, not here.
CREATE TABLE IF NOT EXISTS surveys (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    respondent_name TEXT,
    age             INTEGER,
    gender          TEXT,
    location        TEXT,
    survey_date     DATE,            -- 'YYYY-MM-DD' text
    category        TEXT,
    score           INTEGER,
    notes           TEXT
);

CREATE INDEX IF NOT EXISTS surveys_date_idx ON surveys(survey_date);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT`, in
/// [`SurveyRecord`](survey_core::record::SurveyRecord) field order.
pub const COLUMNS: &str =
  "id, respondent_name, age, gender, location, survey_date, category, score, notes";

pub const INSERT: &str = "
INSERT INTO surveys
    (respondent_name, age, gender, location, survey_date, category, score, notes)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
