//! The `ActivityStore` trait.
//!
//! Implemented by storage backends (e.g. `raci-store-sqlite`). The CLI
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::activity::{ActivityDraft, ActivityId, ActivityRecord};

/// Abstraction over a durable table of activity records.
///
/// Each method is one independent unit of work. Callers re-read with
/// [`ActivityStore::list_all`] after every mutation rather than patching a
/// local copy.
pub trait ActivityStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Validate `draft` and persist it as a new record with a fresh id.
  ///
  /// The id is strictly greater than every id previously handed out by this
  /// store, including those of deleted records. Fails without touching
  /// stored state if the draft does not validate.
  fn create(
    &self,
    draft: ActivityDraft,
  ) -> impl Future<Output = Result<ActivityRecord, Self::Error>> + Send + '_;

  /// Permanently remove the record with `id`.
  ///
  /// Deleting an id that does not exist is a successful no-op. The returned
  /// flag reports whether a row was actually removed.
  fn delete(
    &self,
    id: ActivityId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// All records in ascending id order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<ActivityRecord>, Self::Error>> + Send + '_;
}
