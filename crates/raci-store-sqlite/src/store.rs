//! [`SqliteStore`] — the SQLite implementation of [`ActivityStore`].

use std::path::Path;

use raci_core::{
  activity::{ActivityDraft, ActivityId, ActivityRecord},
  role::Role,
  store::ActivityStore,
};

use crate::{
  Error, Result,
  encode::{RawActivity, encode_code},
  schema::{ROLE_COLUMNS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A RACI matrix backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening activity store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::info!(path = %path.display(), "activity store ready");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, flushing any pending state.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    tracing::debug!("activity store closed");
    Ok(())
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

fn select_all_sql() -> String {
  format!(
    "SELECT id, title, {} FROM activities ORDER BY id ASC",
    ROLE_COLUMNS.join(", ")
  )
}

fn insert_sql() -> String {
  format!(
    "INSERT INTO activities (title, {}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    ROLE_COLUMNS.join(", ")
  )
}

// ─── ActivityStore impl ──────────────────────────────────────────────────────

impl ActivityStore for SqliteStore {
  type Error = Error;

  async fn create(&self, draft: ActivityDraft) -> Result<ActivityRecord> {
    let new = match draft.validate() {
      Ok(new) => new,
      Err(e) => {
        tracing::debug!(error = %e, "rejected activity draft");
        return Err(e.into());
      }
    };

    let title = new.title().to_owned();
    let codes = Role::all()
      .map(|role| encode_code(new.assignments().get(role)))
      .collect::<Vec<_>>();
    let sql = insert_sql();

    let row_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          &sql,
          rusqlite::params![title, codes[0], codes[1], codes[2], codes[3], codes[4]],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    let id = ActivityId::new(row_id).map_err(|e| Error::Corrupt {
      id:     row_id,
      reason: e.to_string(),
    })?;

    tracing::info!(%id, title = new.title(), "activity created");
    Ok(new.into_record(id))
  }

  async fn delete(&self, id: ActivityId) -> Result<bool> {
    let raw = id.get();

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM activities WHERE id = ?1",
          rusqlite::params![raw],
        )?)
      })
      .await?;

    if removed == 0 {
      tracing::debug!(%id, "delete of absent activity ignored");
    } else {
      tracing::info!(%id, "activity deleted");
    }
    Ok(removed > 0)
  }

  async fn list_all(&self) -> Result<Vec<ActivityRecord>> {
    let sql = select_all_sql();

    let raws: Vec<RawActivity> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawActivity::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawActivity::into_record).collect()
  }
}
