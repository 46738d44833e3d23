//! [`SqliteStore`], the SQLite implementation of [`SurveyStore`].

use std::path::Path;

use survey_core::{
  record::{NewSurvey, SurveyRecord},
  seed::seed_surveys,
  stats::StatisticsReport,
  store::SurveyStore,
};

use crate::{
  Result,
  encode::{encode_new_survey, record_from_row},
  schema::{COLUMNS, INSERT, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A survey store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection handle is reference-counted and all
/// statements run on the connection's own thread.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and make sure the schema exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SurveyStore impl ────────────────────────────────────────────────────────

impl SurveyStore for SqliteStore {
  type Error = crate::Error;

  async fn initialize(&self) -> Result<usize> {
    let seed: Vec<_> = seed_surveys()?.into_iter().map(encode_new_survey).collect();

    let seeded = self
      .conn
      .call(move |conn| {
        conn.execute_batch(SCHEMA)?;

        // Count check and seed insert share one transaction.
        let tx = conn.transaction()?;
        let count: i64 =
          tx.query_row("SELECT COUNT(*) FROM surveys", [], |r| r.get(0))?;
        if count > 0 {
          return Ok(0);
        }

        {
          let mut stmt = tx.prepare(INSERT)?;
          for (name, age, gender, location, date, category, score, notes) in &seed {
            stmt.execute(rusqlite::params![
              name, age, gender, location, date, category, score, notes
            ])?;
          }
        }
        tx.commit()?;

        Ok(seed.len())
      })
      .await?;

    if seeded > 0 {
      tracing::info!(rows = seeded, "seeded empty survey table");
    }
    Ok(seeded)
  }

  async fn list_all(&self) -> Result<Vec<SurveyRecord>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM surveys ORDER BY survey_date DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], record_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(records)
  }

  async fn insert(&self, survey: NewSurvey) -> Result<i64> {
    let (name, age, gender, location, date, category, score, notes) =
      encode_new_survey(survey);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          INSERT,
          rusqlite::params![name, age, gender, location, date, category, score, notes],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(id)
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        let n = conn.execute("DELETE FROM surveys WHERE id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await?;

    Ok(removed)
  }

  async fn compute_statistics(&self) -> Result<StatisticsReport> {
    // One SELECT is one snapshot; every aggregate is derived from it.
    let records = self.list_all().await?;
    Ok(StatisticsReport::from_records(&records))
  }
}
