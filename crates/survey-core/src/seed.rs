//! Sample rows inserted the first time the store is found empty.

use crate::{Result, record::{NewSurvey, parse_date}};

/// `(respondent_name, age, gender, location, survey_date, category, score, notes)`
type SeedRow = (&'static str, i64, &'static str, &'static str, &'static str, &'static str, i64, &'static str);

const SEED_ROWS: [SeedRow; 8] = [
  ("Ahmad", 25, "Laki-laki", "Jakarta",  "2024-10-01", "Kesehatan",  85, "Baik"),
  ("Siti",  30, "Perempuan", "Bandung",  "2024-10-02", "Pendidikan", 90, "Sangat Baik"),
  ("Budi",  28, "Laki-laki", "Surabaya", "2024-10-03", "Kesehatan",  75, "Cukup"),
  ("Ani",   35, "Perempuan", "Jakarta",  "2024-10-04", "Ekonomi",    80, "Baik"),
  ("Dedi",  22, "Laki-laki", "Medan",    "2024-10-05", "Pendidikan", 88, "Baik"),
  ("Rina",  27, "Perempuan", "Surabaya", "2024-10-06", "Kesehatan",  92, "Sangat Baik"),
  ("Hadi",  33, "Laki-laki", "Bandung",  "2024-10-07", "Ekonomi",    78, "Baik"),
  ("Maya",  29, "Perempuan", "Jakarta",  "2024-10-08", "Pendidikan", 85, "Baik"),
];

/// The fixed sample data set, in insertion order.
pub fn seed_surveys() -> Result<Vec<NewSurvey>> {
  SEED_ROWS
    .iter()
    .map(|&(name, age, gender, location, date, category, score, notes)| -> Result<NewSurvey> {
      Ok(NewSurvey {
        respondent_name: name.to_owned(),
        age,
        gender: gender.to_owned(),
        location: location.to_owned(),
        survey_date: parse_date(date)?,
        category: category.to_owned(),
        score,
        notes: notes.to_owned(),
      })
    })
    .collect()
}
