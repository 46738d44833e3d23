//! The `SurveyStore` trait.
//!
//! Implemented by storage backends (e.g. `survey-store-sqlite`). The HTTP
//! layer is generic over this trait and receives the store handle explicitly
//! through its router state.

use std::future::Future;

use crate::{
  record::{NewSurvey, SurveyRecord},
  stats::StatisticsReport,
};

/// Abstraction over a survey store backend.
///
/// Every method is a single unit of work against the backing store. All
/// methods return `Send` futures so the trait can be used from axum handlers.
pub trait SurveyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Ensure the schema exists and seed the sample rows if the store holds no
  /// records at all. Returns the number of rows seeded.
  ///
  /// Emptiness is judged by row count alone: a store whose rows were all
  /// deleted is reseeded on the next call.
  fn initialize(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// All records, newest `survey_date` first.
  fn list_all(&self) -> impl Future<Output = Result<Vec<SurveyRecord>, Self::Error>> + Send + '_;

  /// Persist a new record and return its store-assigned id.
  fn insert(
    &self,
    survey: NewSurvey,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Delete the record with `id`. Deleting an id that does not exist is not
  /// an error; the returned flag tells whether a row was actually removed.
  fn delete(&self, id: i64) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Compute the [`StatisticsReport`] over a single snapshot of all records.
  fn compute_statistics(
    &self,
  ) -> impl Future<Output = Result<StatisticsReport, Self::Error>> + Send + '_;
}
