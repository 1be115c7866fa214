//! Encoding and decoding helpers between domain types and the plain-text
//! values stored in SQLite columns.
//!
//! Codes are stored as their canonical uppercase letter, `''` when unset.
//! `NULL` is tolerated on read and means unset.

use raci_core::{
  activity::{ActivityId, ActivityRecord},
  role::{Assignments, ResponsibilityCode},
};

use crate::{Error, Result};

// ─── ResponsibilityCode ──────────────────────────────────────────────────────

pub fn encode_code(code: ResponsibilityCode) -> &'static str { code.letter() }

pub fn decode_code(id: i64, raw: Option<&str>) -> Result<ResponsibilityCode> {
  match raw {
    None | Some("") => Ok(ResponsibilityCode::Empty),
    Some("R") => Ok(ResponsibilityCode::Responsible),
    Some("A") => Ok(ResponsibilityCode::Accountable),
    Some("C") => Ok(ResponsibilityCode::Consulted),
    Some("I") => Ok(ResponsibilityCode::Informed),
    Some(other) => Err(Error::Corrupt {
      id,
      reason: format!("unknown responsibility code {other:?}"),
    }),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from an `activities` row.
pub struct RawActivity {
  pub id:    i64,
  pub title: String,
  pub roles: [Option<String>; 5],
}

impl RawActivity {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawActivity {
      id:    row.get(0)?,
      title: row.get(1)?,
      roles: [row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?, row.get(6)?],
    })
  }

  pub fn into_record(self) -> Result<ActivityRecord> {
    let id = ActivityId::new(self.id).map_err(|e| Error::Corrupt {
      id:     self.id,
      reason: e.to_string(),
    })?;

    if self.title.trim().is_empty() {
      return Err(Error::Corrupt { id: self.id, reason: "blank title".into() });
    }

    let mut codes = [ResponsibilityCode::Empty; 5];
    for (slot, raw) in codes.iter_mut().zip(&self.roles) {
      *slot = decode_code(self.id, raw.as_deref())?;
    }

    Ok(ActivityRecord {
      id,
      title: self.title,
      assignments: Assignments::from_codes(codes),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_and_blank_decode_to_empty() {
    assert_eq!(decode_code(1, None).unwrap(), ResponsibilityCode::Empty);
    assert_eq!(decode_code(1, Some("")).unwrap(), ResponsibilityCode::Empty);
  }

  #[test]
  fn unknown_stored_code_is_corruption() {
    let err = decode_code(4, Some("x")).unwrap_err();
    assert!(matches!(err, Error::Corrupt { id: 4, .. }));
  }
}
